//! Build and version fetchers

use crate::actors::resolver::resolve_actor_id;
use crate::errors::{ActorError, Result};
use crate::marketplace::client::extract_data;
use crate::marketplace::{ActorVersion, BuildSummary, MarketplaceApi};
use serde_json::Value;
use tracing::{debug, info};

/// Latest build of an Actor, taken from its default build tag
///
/// Returns the `data` member of the default-build response.
pub async fn get_actor_latest_build(api: &dyn MarketplaceApi, actor_name: &str) -> Result<Value> {
    let actor_id = resolve_actor_id(api, actor_name).await?;
    fetch_default_build(api, &actor_id, actor_name).await
}

async fn fetch_default_build(
    api: &dyn MarketplaceApi,
    actor_id: &str,
    actor_name: &str,
) -> Result<Value> {
    let body = api.get_default_build(actor_id).await?;
    let build = extract_data(body, &format!("latest build of the Actor {}", actor_name))?;

    if !build.is_object() {
        return Err(ActorError::malformed(
            format!("latest build of the Actor {}", actor_name),
            "build data is not an object",
        ));
    }

    let build_id = build.get("id").and_then(Value::as_str).unwrap_or("?");
    debug!(actor = actor_name, build = build_id, "Fetched default build");
    Ok(build)
}

/// All versions of an Actor
pub async fn list_actor_versions(
    api: &dyn MarketplaceApi,
    actor_name: &str,
) -> Result<Vec<ActorVersion>> {
    let actor_id = resolve_actor_id(api, actor_name).await?;
    api.list_versions(&actor_id).await
}

/// Builds of an Actor, newest first
pub async fn list_actor_builds(
    api: &dyn MarketplaceApi,
    actor_name: &str,
) -> Result<Vec<BuildSummary>> {
    let actor_id = resolve_actor_id(api, actor_name).await?;
    api.list_builds(&actor_id).await
}

/// GitHub repository URLs associated with an Actor
///
/// The default build's repository comes first, followed by the repository
/// of every version that has one. Duplicates are kept in order.
pub async fn get_actor_github_urls(
    api: &dyn MarketplaceApi,
    actor_name: &str,
) -> Result<Vec<String>> {
    let actor_id = resolve_actor_id(api, actor_name).await?;
    let mut urls = Vec::new();

    let build = fetch_default_build(api, &actor_id, actor_name).await?;
    if let Some(url) = build
        .get("actVersion")
        .and_then(|v| v.get("gitRepoUrl"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
    {
        urls.push(url.to_string());
    }

    let versions = api.list_versions(&actor_id).await?;
    urls.extend(
        versions
            .into_iter()
            .filter_map(|version| version.git_repo_url)
            .filter(|url| !url.is_empty()),
    );

    info!(actor = actor_name, count = urls.len(), "Collected repository URLs");
    Ok(urls)
}

/// Whether a GitHub repository URL answers with 200 OK
pub async fn github_repo_exists(api: &dyn MarketplaceApi, repository_url: &str) -> Result<bool> {
    api.url_exists(repository_url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubMarketplace;
    use serde_json::json;

    fn stub() -> StubMarketplace {
        StubMarketplace::new()
            .with_actor("apify/web-scraper", json!({"id": "abc123", "name": "web-scraper"}))
    }

    #[tokio::test]
    async fn test_latest_build_returns_data() {
        let stub = stub().with_default_build(
            "abc123",
            json!({"data": {"id": "build1", "buildNumber": "0.3.12"}}),
        );

        let build = get_actor_latest_build(&stub, "apify/web-scraper").await.unwrap();
        assert_eq!(build["buildNumber"], "0.3.12");
    }

    #[tokio::test]
    async fn test_latest_build_missing_data() {
        let stub = stub().with_default_build("abc123", json!({"error": {"type": "not-found"}}));

        let err = get_actor_latest_build(&stub, "apify/web-scraper").await.unwrap_err();
        assert!(matches!(err, ActorError::MissingField { ref field, .. } if field == "data"));
        assert!(err.to_string().contains("apify/web-scraper"));
    }

    #[tokio::test]
    async fn test_latest_build_not_object() {
        let stub = stub().with_default_build("abc123", json!("oops"));

        let err = get_actor_latest_build(&stub, "apify/web-scraper").await.unwrap_err();
        assert!(matches!(err, ActorError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_github_urls_build_first() {
        let stub = stub()
            .with_default_build(
                "abc123",
                json!({"data": {"actVersion": {"gitRepoUrl": "https://github.com/apify/a"}}}),
            )
            .with_versions(
                "abc123",
                json!([
                    {"versionNumber": "0.1", "gitRepoUrl": "https://github.com/apify/b"},
                    {"versionNumber": "0.2", "sourceType": "SOURCE_FILES"},
                    {"versionNumber": "0.3", "gitRepoUrl": ""}
                ]),
            );

        let urls = get_actor_github_urls(&stub, "apify/web-scraper").await.unwrap();
        assert_eq!(urls, vec!["https://github.com/apify/a", "https://github.com/apify/b"]);
    }

    #[tokio::test]
    async fn test_github_urls_ignore_file_records() {
        let stub = stub()
            .with_default_build("abc123", json!({"data": {"id": "b"}}))
            .with_versions(
                "abc123",
                json!([{
                    "versionNumber": "0.1",
                    "buildTag": "beta",
                    "gitRepoUrl": "https://github.com/apify/c",
                    "sourceFiles": [{"format": "TEXT", "content": "no name"}]
                }]),
            );

        let urls = get_actor_github_urls(&stub, "apify/web-scraper").await.unwrap();
        assert_eq!(urls, vec!["https://github.com/apify/c"]);
    }

    #[tokio::test]
    async fn test_github_urls_none() {
        let stub = stub().with_default_build("abc123", json!({"data": {"id": "b"}}));

        let urls = get_actor_github_urls(&stub, "apify/web-scraper").await.unwrap();
        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn test_list_builds_resolves_id() {
        let stub = stub().with_builds("abc123", json!([{"id": "b2", "status": "SUCCEEDED"}]));

        let builds = list_actor_builds(&stub, "apify/web-scraper").await.unwrap();
        assert_eq!(builds.len(), 1);
        assert_eq!(builds[0].status.as_deref(), Some("SUCCEEDED"));
    }

    #[tokio::test]
    async fn test_repo_exists() {
        let stub = StubMarketplace::new().with_live_url("https://github.com/apify/crawlee");

        assert!(github_repo_exists(&stub, "https://github.com/apify/crawlee").await.unwrap());
        assert!(!github_repo_exists(&stub, "https://github.com/apify/gone").await.unwrap());
    }
}
