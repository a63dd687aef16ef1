//! Typed tool inputs
//!
//! Arguments arrive as JSON from the orchestration layer. They are decoded
//! into these structs and their declared constraints checked before any
//! remote call is made.

use crate::actors::search::{Pagination, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, MAX_SEARCH_OFFSET};
use crate::errors::{ActorError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Input of a tool, validated after decoding
pub trait ToolInput: DeserializeOwned {
    fn validate(&self) -> Result<()>;
}

/// Decode and validate tool arguments
pub fn parse_input<T: ToolInput>(args: &serde_json::Value) -> Result<T> {
    let input: T = serde_json::from_value(args.clone())
        .map_err(|e| ActorError::invalid_input("arguments", e.to_string()))?;
    input.validate()?;
    Ok(input)
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT as i64
}

/// Input of `search_related_actors`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRelatedActorsInput {
    /// Keywords matched against title, name, description, username and README
    pub search: String,

    /// Maximum number of Actors to return (1..=100)
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Number of results to skip (>= 0)
    #[serde(default)]
    pub offset: i64,
}

impl SearchRelatedActorsInput {
    /// Validated page window
    pub fn pagination(&self) -> Result<Pagination> {
        self.validate()?;
        Pagination::new(self.limit as u32, self.offset as u32)
    }
}

impl ToolInput for SearchRelatedActorsInput {
    fn validate(&self) -> Result<()> {
        if self.limit <= 0 || self.limit > MAX_SEARCH_LIMIT as i64 {
            return Err(ActorError::invalid_input(
                "limit",
                format!("must be between 1 and {}, got {}", MAX_SEARCH_LIMIT, self.limit),
            ));
        }
        if self.offset < 0 {
            return Err(ActorError::invalid_input(
                "offset",
                format!("must be a non-negative integer, got {}", self.offset),
            ));
        }
        if self.offset > MAX_SEARCH_OFFSET as i64 {
            return Err(ActorError::invalid_input(
                "offset",
                format!("must be at most {}, got {}", MAX_SEARCH_OFFSET, self.offset),
            ));
        }
        Ok(())
    }
}

/// Input of tools addressing an Actor by ID
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorIdInput {
    pub actor_id: String,
}

impl ToolInput for ActorIdInput {
    fn validate(&self) -> Result<()> {
        if self.actor_id.trim().is_empty() {
            return Err(ActorError::invalid_input("actor_id", "must not be empty"));
        }
        Ok(())
    }
}

/// Input of tools addressing an Actor by `username/actor-name`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorNameInput {
    pub actor_name: String,
}

impl ToolInput for ActorNameInput {
    fn validate(&self) -> Result<()> {
        if self.actor_name.trim().is_empty() {
            return Err(ActorError::invalid_input("actor_name", "must not be empty"));
        }
        Ok(())
    }
}
