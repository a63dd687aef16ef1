//! Store search with validated pagination

use crate::errors::{ActorError, Result};
use crate::marketplace::{ActorStoreList, MarketplaceApi};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Largest page the store endpoint accepts
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Largest number of results that can be skipped
pub const MAX_SEARCH_OFFSET: u32 = u32::MAX;

/// Page size used when the caller gives none
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Page window for store searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Create a validated page window
    pub fn new(limit: u32, offset: u32) -> Result<Self> {
        let page = Self { limit, offset };
        page.validate()?;
        Ok(page)
    }

    /// `limit` must lie in 1..=100
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 || self.limit > MAX_SEARCH_LIMIT {
            return Err(ActorError::invalid_input(
                "limit",
                format!("must be between 1 and {}, got {}", MAX_SEARCH_LIMIT, self.limit),
            ));
        }
        Ok(())
    }
}

/// Full-text search over the Actor store
///
/// Keywords are matched against title, name, description, username and
/// README. Few keywords work best; long queries tend to return nothing.
/// An empty query is passed through unchanged.
pub async fn search_actors(
    api: &dyn MarketplaceApi,
    search: &str,
    page: Pagination,
) -> Result<ActorStoreList> {
    page.validate()?;

    info!("Searching for Actors related to '{}'", search);
    let results = api.search_store(search, page.limit, page.offset).await?;
    info!("Found {} Actors related to '{}'", results.items.len(), search);

    Ok(results)
}
