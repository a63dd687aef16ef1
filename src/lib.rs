//! actorkit - Apify marketplace helpers for agents
//!
//! Typed operations over the Apify API (store search, pricing, builds,
//! versions, source files) plus tool adapters an orchestration layer can
//! call by name.
//!
//! # Architecture
//!
//! - **config**: explicit API configuration (token, endpoint, timeout)
//! - **marketplace**: HTTP client and response types
//! - **actors**: operations, file tree builder, pricing selector
//! - **tools**: schemas, typed inputs, runtime dispatch

pub mod errors;
pub mod config;
pub mod marketplace;
pub mod actors;
pub mod tools;
pub mod cli;
pub mod testing;

// Re-export commonly used types
pub use config::ApiConfig;
pub use errors::{ActorError, Result};
pub use marketplace::{ApifyClient, MarketplaceApi};
pub use tools::ToolRuntime;
