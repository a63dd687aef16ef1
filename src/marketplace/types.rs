//! Type definitions for Apify marketplace responses
//!
//! Only the fields actorkit reads are typed; everything else the API
//! returns is preserved in `extra` so tool output stays lossless.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paginated list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedList<T> {
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub offset: u64,

    #[serde(default)]
    pub limit: Option<u64>,

    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// One search hit from the Actor store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorStoreItem {
    pub id: String,

    /// Actor name without the username
    pub name: String,

    /// Owner username
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Run statistics (total runs, users, ...)
    #[serde(default)]
    pub stats: Option<Value>,

    #[serde(default)]
    pub current_pricing_info: Option<Value>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActorStoreItem {
    /// Full `username/name` reference, when the owner is known
    pub fn full_name(&self) -> String {
        match &self.username {
            Some(user) => format!("{}/{}", user, self.name),
            None => self.name.clone(),
        }
    }
}

/// Search results returned by the store endpoint
pub type ActorStoreList = PaginatedList<ActorStoreItem>;

/// A time-scoped pricing configuration of an Actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    /// When this pricing took effect
    pub started_at: DateTime<Utc>,

    /// e.g. FREE, FLAT_PRICE_PER_MONTH, PRICE_PER_DATASET_ITEM, PAY_PER_EVENT
    #[serde(default)]
    pub pricing_model: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A file in a version's source bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Slash-delimited path inside the bundle
    pub name: String,

    /// TEXT or BASE64
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub folder: bool,
}

/// Whether a raw source-file record holds plain text
pub fn is_text_record(record: &Value) -> bool {
    record
        .get("format")
        .and_then(Value::as_str)
        .map(|f| f.eq_ignore_ascii_case("text"))
        .unwrap_or(false)
}

/// An Actor version
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorVersion {
    #[serde(default)]
    pub version_number: Option<String>,

    /// Build tag the version builds to, e.g. "latest"
    #[serde(default)]
    pub build_tag: Option<String>,

    #[serde(default)]
    pub source_type: Option<String>,

    #[serde(default)]
    pub git_repo_url: Option<String>,

    /// Raw file records; only the files actually read get decoded
    #[serde(default)]
    pub source_files: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Summary of an Actor build as returned by the build list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub build_number: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
