//! Active pricing selection and lookup

use crate::errors::{ActorError, Result};
use crate::marketplace::{MarketplaceApi, PricingInfo};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

/// Select the pricing entry in effect at `now`
///
/// Entries must be sorted ascending by `started_at`; this is not checked.
/// The scan stops at the first entry that starts after `now` and the
/// entry before it wins, even if a later entry would also have started.
pub fn select_active_pricing(entries: &[PricingInfo], now: DateTime<Utc>) -> Option<&PricingInfo> {
    let mut current = None;
    for entry in entries {
        if entry.started_at > now {
            break;
        }
        current = Some(entry);
    }
    current
}

fn pricing_context(actor_id: &str) -> String {
    format!("pricing information of the Actor {}", actor_id)
}

/// Raw `pricingInfos` entries of an Actor record, undecoded
pub fn pricing_entries<'a>(actor: &'a Value, actor_id: &str) -> Result<&'a [Value]> {
    match actor.get("pricingInfos") {
        None | Some(Value::Null) => Ok(Default::default()),
        Some(Value::Array(entries)) => Ok(entries.as_slice()),
        Some(_) => Err(ActorError::malformed(
            pricing_context(actor_id),
            "pricingInfos is not an array",
        )),
    }
}

/// Decode one pricing entry; a missing `startedAt` is a missing field
pub fn decode_pricing_entry(entry: &Value, actor_id: &str) -> Result<PricingInfo> {
    if entry.get("startedAt").map_or(true, Value::is_null) {
        return Err(ActorError::missing_field("startedAt", pricing_context(actor_id)));
    }
    serde_json::from_value(entry.clone())
        .map_err(|e| ActorError::malformed(pricing_context(actor_id), e.to_string()))
}

/// Pricing of an Actor in effect at `now`
pub async fn get_actor_pricing_at(
    api: &dyn MarketplaceApi,
    actor_id: &str,
    now: DateTime<Utc>,
) -> Result<PricingInfo> {
    let actor = api
        .get_actor(actor_id)
        .await?
        .ok_or_else(|| ActorError::actor_not_found(actor_id))?;

    // Entries are decoded only as far as the scan reaches
    let mut active = None;
    for raw in pricing_entries(&actor, actor_id)? {
        let entry = decode_pricing_entry(raw, actor_id)?;
        if entry.started_at > now {
            break;
        }
        active = Some(entry);
    }

    let active = active.ok_or_else(|| ActorError::NoActivePricing {
        actor: actor_id.to_string(),
    })?;

    info!(
        actor = actor_id,
        model = active.pricing_model.as_deref().unwrap_or("unknown"),
        "Resolved active pricing"
    );
    Ok(active)
}

/// Pricing of an Actor in effect right now
pub async fn get_actor_pricing_information(
    api: &dyn MarketplaceApi,
    actor_id: &str,
) -> Result<PricingInfo> {
    get_actor_pricing_at(api, actor_id, Utc::now()).await
}
