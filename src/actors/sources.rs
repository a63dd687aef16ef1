//! Source files of an Actor's latest version

use crate::actors::file_tree::{record_name, FileTree};
use crate::actors::resolver::resolve_actor_id;
use crate::errors::{ActorError, Result};
use crate::marketplace::{is_text_record, MarketplaceApi, SourceFile};
use serde_json::Value;
use tracing::{debug, info};

/// Build tag marking the version whose sources are returned
pub const LATEST_BUILD_TAG: &str = "latest";

/// Raw text-file records of the version built with the `latest` tag
async fn latest_text_records(api: &dyn MarketplaceApi, actor_name: &str) -> Result<Vec<Value>> {
    let actor_id = resolve_actor_id(api, actor_name).await?;
    let versions = api.list_versions(&actor_id).await?;

    let Some(version) = versions
        .into_iter()
        .find(|v| v.build_tag.as_deref() == Some(LATEST_BUILD_TAG))
    else {
        debug!(actor = actor_name, "No version tagged latest");
        return Ok(Vec::new());
    };

    Ok(version
        .source_files
        .into_iter()
        .filter(is_text_record)
        .collect())
}

fn sources_context(actor_name: &str) -> String {
    format!("source files of the Actor {}", actor_name)
}

/// Text source files of the version built with the `latest` tag
///
/// An Actor without such a version yields an empty list. A text file
/// without a `name` fails with a missing-field error.
pub async fn get_actor_source_files(
    api: &dyn MarketplaceApi,
    actor_name: &str,
) -> Result<Vec<SourceFile>> {
    let records = latest_text_records(api, actor_name).await?;
    let context = sources_context(actor_name);

    let files = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record_name(&record, index, &context)?;
            serde_json::from_value(record)
                .map_err(|e| ActorError::malformed(context.as_str(), e.to_string()))
        })
        .collect::<Result<Vec<SourceFile>>>()?;

    info!(actor = actor_name, count = files.len(), "Fetched source files");
    Ok(files)
}

/// Directory tree of the Actor's text source files
pub async fn get_actor_file_tree(api: &dyn MarketplaceApi, actor_name: &str) -> Result<FileTree> {
    let records = latest_text_records(api, actor_name).await?;
    FileTree::from_records(&records, &sources_context(actor_name))
}
