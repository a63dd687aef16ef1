//! Apify API client for marketplace operations
//!
//! This module provides a low-level HTTP client for the Apify v2
//! endpoints actorkit needs. Each method is a single request with the
//! timeout from [`ApiConfig`]; nothing is retried or cached.

use crate::config::ApiConfig;
use crate::errors::{ActorError, Result};
use crate::marketplace::types::{ActorStoreList, ActorVersion, BuildSummary, PaginatedList};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Remote calls the actor operations are built on
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Full-text search over the Actor store
    async fn search_store(&self, search: &str, limit: u32, offset: u32) -> Result<ActorStoreList>;

    /// Fetch an Actor by ID or `username/name`; `None` when it does not exist
    async fn get_actor(&self, actor: &str) -> Result<Option<Value>>;

    /// List all versions of an Actor
    async fn list_versions(&self, actor_id: &str) -> Result<Vec<ActorVersion>>;

    /// List builds of an Actor
    async fn list_builds(&self, actor_id: &str) -> Result<Vec<BuildSummary>>;

    /// Raw response body of the default-build endpoint
    async fn get_default_build(&self, actor_id: &str) -> Result<Value>;

    /// Whether a plain GET on `url` answers 200
    async fn url_exists(&self, url: &str) -> Result<bool>;
}

/// HTTP client for the Apify API
#[derive(Debug, Clone)]
pub struct ApifyClient {
    client: Client,
    config: ApiConfig,
}

impl ApifyClient {
    /// Create a new client from explicit configuration
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ActorError::Http)?;

        Ok(Self { client, config })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// URL of the default build of an Actor
    pub fn default_build_url(&self, actor_id: &str) -> String {
        format!(
            "{}/v2/acts/{}/builds/default",
            self.config.base_url,
            actor_path(actor_id)
        )
    }

    /// GET an API path, returning `None` on 404
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<Option<Value>> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(self.config.token())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ActorError::Api {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ActorError::malformed(context, e.to_string()))?;

        Ok(Some(body))
    }

    /// GET a paginated list endpoint and decode its items
    async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<PaginatedList<T>> {
        let body = self
            .get_json(url, query, context)
            .await?
            .ok_or_else(|| ActorError::NotFound {
                kind: "Resource".to_string(),
                id: url.to_string(),
            })?;

        let data = extract_data(body, context)?;
        serde_json::from_value(data).map_err(|e| ActorError::malformed(context, e.to_string()))
    }
}

#[async_trait]
impl MarketplaceApi for ApifyClient {
    async fn search_store(&self, search: &str, limit: u32, offset: u32) -> Result<ActorStoreList> {
        let url = format!("{}/v2/store", self.config.base_url);
        let query = [
            ("search", search.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];

        self.get_list(&url, &query, &format!("searching the store for '{}'", search))
            .await
    }

    async fn get_actor(&self, actor: &str) -> Result<Option<Value>> {
        let url = format!("{}/v2/acts/{}", self.config.base_url, actor_path(actor));
        let context = format!("fetching the Actor {}", actor);

        match self.get_json(&url, &[], &context).await? {
            Some(body) => extract_data(body, &context).map(Some),
            None => Ok(None),
        }
    }

    async fn list_versions(&self, actor_id: &str) -> Result<Vec<ActorVersion>> {
        let url = format!(
            "{}/v2/acts/{}/versions",
            self.config.base_url,
            actor_path(actor_id)
        );

        let list: PaginatedList<ActorVersion> = self
            .get_list(&url, &[], &format!("listing versions of the Actor {}", actor_id))
            .await?;
        Ok(list.items)
    }

    async fn list_builds(&self, actor_id: &str) -> Result<Vec<BuildSummary>> {
        let url = format!(
            "{}/v2/acts/{}/builds",
            self.config.base_url,
            actor_path(actor_id)
        );
        let query = [("desc", "1".to_string())];

        let list: PaginatedList<BuildSummary> = self
            .get_list(&url, &query, &format!("listing builds of the Actor {}", actor_id))
            .await?;
        Ok(list.items)
    }

    async fn get_default_build(&self, actor_id: &str) -> Result<Value> {
        let url = self.default_build_url(actor_id);
        let context = format!("fetching the default build of the Actor {}", actor_id);

        self.get_json(&url, &[], &context)
            .await?
            .ok_or_else(|| ActorError::NotFound {
                kind: "Default build of the Actor".to_string(),
                id: actor_id.to_string(),
            })
    }

    async fn url_exists(&self, url: &str) -> Result<bool> {
        // Third-party URL: no credentials attached
        let response = self.client.get(url).send().await?;
        Ok(response.status() == StatusCode::OK)
    }
}

/// Path segment for an Actor reference (`user/name` becomes `user~name`)
pub fn actor_path(actor: &str) -> String {
    actor.replace('/', "~")
}

/// Unwrap the `data` member of an API response body
pub fn extract_data(body: Value, context: &str) -> Result<Value> {
    match body {
        Value::Object(mut map) => map
            .remove("data")
            .filter(|data| !data.is_null())
            .ok_or_else(|| ActorError::missing_field("data", context)),
        other => Err(ActorError::malformed(
            context,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_actor_path_replaces_slash() {
        assert_eq!(actor_path("apify/web-scraper"), "apify~web-scraper");
        assert_eq!(actor_path("moJRLRc85AitArpNN"), "moJRLRc85AitArpNN");
    }

    #[test]
    fn test_extract_data() {
        let data = extract_data(json!({"data": {"id": "x"}}), "ctx").unwrap();
        assert_eq!(data, json!({"id": "x"}));
    }

    #[test]
    fn test_extract_data_missing() {
        let err = extract_data(json!({"error": {"type": "record-not-found"}}), "ctx").unwrap_err();
        assert!(matches!(err, ActorError::MissingField { ref field, .. } if field == "data"));
    }

    #[test]
    fn test_extract_data_not_object() {
        let err = extract_data(json!([1, 2]), "ctx").unwrap_err();
        assert!(matches!(err, ActorError::MalformedResponse { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_default_build_url() {
        let config = ApiConfig::new("t")
            .unwrap()
            .with_base_url("https://api.apify.com");
        let client = ApifyClient::new(config).unwrap();

        assert_eq!(
            client.default_build_url("abc123"),
            "https://api.apify.com/v2/acts/abc123/builds/default"
        );
    }
}
