//! Tool runtime coordinator
//!
//! Entry point for the orchestration layer: looks the tool up in the
//! registry, decodes and validates its arguments, runs the matching
//! actor operation and wraps the JSON output.

use crate::actors;
use crate::errors::{ActorError, Result};
use crate::marketplace::MarketplaceApi;
use crate::tools::inputs::{parse_input, ActorIdInput, ActorNameInput, SearchRelatedActorsInput};
use crate::tools::registry::{self, ToolRegistry};
use crate::tools::types::ToolResult;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Tool runtime coordinator
pub struct ToolRuntime {
    api: Arc<dyn MarketplaceApi>,
    registry: ToolRegistry,
}

impl ToolRuntime {
    /// Create new tool runtime over a marketplace client
    pub fn new(api: Arc<dyn MarketplaceApi>) -> Self {
        Self {
            api,
            registry: ToolRegistry::new(),
        }
    }

    /// Execute a tool by name
    ///
    /// # Flow
    /// 1. Validate tool exists in registry
    /// 2. Decode and validate arguments (no remote call on failure)
    /// 3. Run the actor operation
    /// 4. Return its JSON output
    pub async fn execute(&self, tool: &str, args: &Value) -> Result<ToolResult> {
        if !self.registry.contains(tool) {
            return Err(ActorError::UnknownTool(tool.to_string()));
        }

        let start = Instant::now();
        info!(tool, "Executing tool");

        match self.dispatch(tool, args).await {
            Ok(output) => Ok(ToolResult::new(tool, output, start.elapsed())),
            Err(e) => {
                warn!(tool, error = %e, "Tool failed");
                Err(e)
            }
        }
    }

    async fn dispatch(&self, tool: &str, args: &Value) -> Result<Value> {
        let api = self.api.as_ref();

        let output = match tool {
            registry::SEARCH_RELATED_ACTORS => {
                let input: SearchRelatedActorsInput = parse_input(args)?;
                let results = actors::search_actors(api, &input.search, input.pagination()?).await?;
                serde_json::to_value(results)?
            }
            registry::GET_ACTOR_PRICING_INFORMATION => {
                let input: ActorIdInput = parse_input(args)?;
                let pricing = actors::get_actor_pricing_information(api, &input.actor_id).await?;
                serde_json::to_value(pricing)?
            }
            registry::GET_ACTOR_LATEST_BUILD => {
                let input: ActorNameInput = parse_input(args)?;
                actors::get_actor_latest_build(api, &input.actor_name).await?
            }
            registry::GET_ACTOR_SOURCE_FILES => {
                let input: ActorNameInput = parse_input(args)?;
                let files = actors::get_actor_source_files(api, &input.actor_name).await?;
                serde_json::to_value(files)?
            }
            registry::GET_ACTOR_FILE_TREE => {
                let input: ActorNameInput = parse_input(args)?;
                let tree = actors::get_actor_file_tree(api, &input.actor_name).await?;
                serde_json::to_value(tree)?
            }
            registry::GET_ACTOR_GITHUB_URLS => {
                let input: ActorNameInput = parse_input(args)?;
                let urls = actors::get_actor_github_urls(api, &input.actor_name).await?;
                serde_json::to_value(urls)?
            }
            other => return Err(ActorError::UnknownTool(other.to_string())),
        };

        Ok(output)
    }

    /// Get tool registry
    pub fn get_registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.registry.tool_names()
    }

    /// Check if tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubMarketplace;
    use serde_json::json;

    fn setup_runtime() -> (ToolRuntime, Arc<StubMarketplace>) {
        let stub = Arc::new(
            StubMarketplace::new()
                .with_actor(
                    "apify/hello",
                    json!({
                        "id": "h1",
                        "name": "hello",
                        "pricingInfos": [
                            {"pricingModel": "FREE", "startedAt": "2023-01-01T00:00:00Z"},
                            {"pricingModel": "PAY_PER_EVENT", "startedAt": "2024-01-01T00:00:00Z"}
                        ]
                    }),
                )
                .with_versions(
                    "h1",
                    json!([{"buildTag": "latest", "sourceFiles": [
                        {"name": "src/main.js", "format": "TEXT", "content": ""}
                    ]}]),
                )
                .with_store_items(json!([{"id": "h1", "name": "hello", "username": "apify"}])),
        );
        let runtime = ToolRuntime::new(stub.clone());
        (runtime, stub)
    }

    #[test]
    fn test_runtime_creation() {
        let (runtime, _stub) = setup_runtime();
        assert_eq!(runtime.tool_names().len(), 6);
        assert!(runtime.has_tool("get_actor_file_tree"));
        assert!(!runtime.has_tool("nonexistent"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (runtime, stub) = setup_runtime();

        let err = runtime.execute("run_command", &json!({})).await.unwrap_err();
        assert!(matches!(err, ActorError::UnknownTool(_)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_execute_search() {
        let (runtime, _stub) = setup_runtime();

        let result = runtime
            .execute("search_related_actors", &json!({"search": "hello", "limit": 5}))
            .await
            .unwrap();

        assert_eq!(result.tool, "search_related_actors");
        assert_eq!(result.output["items"][0]["id"], "h1");
    }

    #[tokio::test]
    async fn test_invalid_input_skips_remote_call() {
        let (runtime, stub) = setup_runtime();

        let err = runtime
            .execute("search_related_actors", &json!({"search": "hello", "limit": 500}))
            .await
            .unwrap_err();

        assert!(matches!(err, ActorError::InvalidInput { .. }));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_execute_pricing() {
        let (runtime, _stub) = setup_runtime();

        let result = runtime
            .execute("get_actor_pricing_information", &json!({"actor_id": "h1"}))
            .await
            .unwrap();

        assert_eq!(result.output["pricingModel"], "PAY_PER_EVENT");
    }

    #[tokio::test]
    async fn test_execute_file_tree() {
        let (runtime, _stub) = setup_runtime();

        let result = runtime
            .execute("get_actor_file_tree", &json!({"actor_name": "apify/hello"}))
            .await
            .unwrap();

        assert_eq!(result.output, json!({"src": {"main.js": null}}));
    }

    #[tokio::test]
    async fn test_operation_error_propagates() {
        let (runtime, _stub) = setup_runtime();

        let err = runtime
            .execute("get_actor_source_files", &json!({"actor_name": "nobody/none"}))
            .await
            .unwrap_err();

        assert!(matches!(err, ActorError::NotFound { .. }));
    }
}
