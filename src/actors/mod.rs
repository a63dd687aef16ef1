//! Actor operations over the marketplace API
//!
//! Each remote operation takes a `&dyn MarketplaceApi`, performs one call
//! per step and validates the response. `file_tree` and the pricing
//! selector are pure.

pub mod builds;
pub mod file_tree;
pub mod pricing;
pub mod resolver;
pub mod search;
pub mod sources;

pub use builds::{
    get_actor_github_urls, get_actor_latest_build, github_repo_exists, list_actor_builds,
    list_actor_versions,
};
pub use file_tree::{FileTree, FileTreeNode};
pub use pricing::{get_actor_pricing_at, get_actor_pricing_information, select_active_pricing};
pub use resolver::resolve_actor_id;
pub use search::{search_actors, Pagination};
pub use sources::{get_actor_file_tree, get_actor_source_files};
