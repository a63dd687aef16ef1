//! Error types for actorkit
//!
//! A closed set of failure kinds so callers can branch on what went wrong
//! instead of matching on message text.

use thiserror::Error;

/// Main error type for marketplace operations and tools
#[derive(Error, Debug)]
pub enum ActorError {
    /// Required configuration (e.g. the API token) is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// Configuration file could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// The identifier has no matching remote record
    #[error("{kind} {id} not found")]
    NotFound { kind: String, id: String },

    /// An expected field is absent from a remote response
    #[error("Missing field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// No pricing entry is active at the requested time
    #[error("No active pricing for the Actor {actor}")]
    NoActivePricing { actor: String },

    /// The response does not have the expected shape
    #[error("Malformed response for {context}: {reason}")]
    MalformedResponse { context: String, reason: String },

    /// A declared tool input constraint was violated
    #[error("Invalid input '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Tool name is not registered
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Non-success HTTP status from the marketplace API
    #[error("Marketplace API error (HTTP {status}) while {context}")]
    Api { status: u16, context: String },

    /// Transport errors, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ActorError {
    /// Not-found error for an Actor identifier
    pub fn actor_not_found(id: impl Into<String>) -> Self {
        ActorError::NotFound {
            kind: "Actor".to_string(),
            id: id.into(),
        }
    }

    /// Missing-field error naming the field and where it was expected
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        ActorError::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Malformed-response error
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        ActorError::MalformedResponse {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Invalid tool input
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ActorError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, ActorError::Http(_) | ActorError::Api { .. })
    }
}

/// Result type alias for actorkit operations
pub type Result<T> = std::result::Result<T, ActorError>;
