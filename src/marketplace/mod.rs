//! Apify marketplace access
//!
//! - `client`: HTTP client and the `MarketplaceApi` trait it implements
//! - `types`: typed views of the API responses

pub mod client;
pub mod types;

pub use client::{ApifyClient, MarketplaceApi};
pub use types::{
    is_text_record, ActorStoreItem, ActorStoreList, ActorVersion, BuildSummary, PricingInfo,
    SourceFile,
};
