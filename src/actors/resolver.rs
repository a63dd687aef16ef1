//! Actor name to ID resolution

use crate::errors::{ActorError, Result};
use crate::marketplace::MarketplaceApi;
use serde_json::Value;
use tracing::debug;

/// Resolve an Actor name (`username/actor-name`) or ID to its object ID
pub async fn resolve_actor_id(api: &dyn MarketplaceApi, actor_name: &str) -> Result<String> {
    let actor = api
        .get_actor(actor_name)
        .await?
        .ok_or_else(|| ActorError::actor_not_found(actor_name))?;

    let id = actor
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ActorError::missing_field("id", format!("Actor {}", actor_name)))?;

    debug!(actor = actor_name, id, "Resolved Actor ID");
    Ok(id.to_string())
}
