//! In-memory marketplace for tests.
//!
//! [`StubMarketplace`] implements [`MarketplaceApi`] from canned JSON and
//! counts the calls it receives, so tests can assert that invalid input
//! never reaches the network.
//!
//! ```rust,no_run
//! use actorkit::testing::StubMarketplace;
//! use serde_json::json;
//!
//! let stub = StubMarketplace::new()
//!     .with_actor("apify/web-scraper", json!({"id": "abc123", "name": "web-scraper"}));
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::{ActorError, Result};
use crate::marketplace::types::{ActorStoreItem, ActorStoreList, PaginatedList};
use crate::marketplace::{ActorVersion, BuildSummary, MarketplaceApi};

/// Canned marketplace responses
#[derive(Debug, Default)]
pub struct StubMarketplace {
    actors: HashMap<String, Value>,
    versions: HashMap<String, Vec<ActorVersion>>,
    builds: HashMap<String, Vec<BuildSummary>>,
    default_builds: HashMap<String, Value>,
    store: Vec<ActorStoreItem>,
    live_urls: HashSet<String>,
    calls: AtomicUsize,
}

impl StubMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an Actor under `key` and under its `id` field
    pub fn with_actor(mut self, key: &str, actor: Value) -> Self {
        if let Some(id) = actor.get("id").and_then(Value::as_str) {
            self.actors.insert(id.to_string(), actor.clone());
        }
        self.actors.insert(key.to_string(), actor);
        self
    }

    pub fn with_versions(mut self, actor_id: &str, versions: Value) -> Self {
        let versions = serde_json::from_value(versions).expect("stub versions must be valid");
        self.versions.insert(actor_id.to_string(), versions);
        self
    }

    pub fn with_builds(mut self, actor_id: &str, builds: Value) -> Self {
        let builds = serde_json::from_value(builds).expect("stub builds must be valid");
        self.builds.insert(actor_id.to_string(), builds);
        self
    }

    /// Raw body the default-build endpoint returns for `actor_id`
    pub fn with_default_build(mut self, actor_id: &str, body: Value) -> Self {
        self.default_builds.insert(actor_id.to_string(), body);
        self
    }

    pub fn with_store_items(mut self, items: Value) -> Self {
        self.store = serde_json::from_value(items).expect("stub store items must be valid");
        self
    }

    pub fn with_live_url(mut self, url: &str) -> Self {
        self.live_urls.insert(url.to_string());
        self
    }

    /// Number of remote calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MarketplaceApi for StubMarketplace {
    async fn search_store(&self, search: &str, limit: u32, offset: u32) -> Result<ActorStoreList> {
        self.record_call();
        let needle = search.to_lowercase();
        let matching: Vec<ActorStoreItem> = self
            .store
            .iter()
            .filter(|item| {
                item.full_name().to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok(PaginatedList {
            total,
            offset: offset as u64,
            limit: Some(limit as u64),
            items,
        })
    }

    async fn get_actor(&self, actor: &str) -> Result<Option<Value>> {
        self.record_call();
        Ok(self.actors.get(actor).cloned())
    }

    async fn list_versions(&self, actor_id: &str) -> Result<Vec<ActorVersion>> {
        self.record_call();
        Ok(self.versions.get(actor_id).cloned().unwrap_or_default())
    }

    async fn list_builds(&self, actor_id: &str) -> Result<Vec<BuildSummary>> {
        self.record_call();
        Ok(self.builds.get(actor_id).cloned().unwrap_or_default())
    }

    async fn get_default_build(&self, actor_id: &str) -> Result<Value> {
        self.record_call();
        self.default_builds
            .get(actor_id)
            .cloned()
            .ok_or_else(|| ActorError::NotFound {
                kind: "Default build of the Actor".to_string(),
                id: actor_id.to_string(),
            })
    }

    async fn url_exists(&self, url: &str) -> Result<bool> {
        self.record_call();
        Ok(self.live_urls.contains(url))
    }
}
