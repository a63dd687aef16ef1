//! Tool registry with JSON schemas
//!
//! Maintains registry of available tools with validation schemas.
//!
//! Tools:
//! - search_related_actors: Full-text search over the Actor store
//! - get_actor_pricing_information: Pricing currently in effect
//! - get_actor_latest_build: Default build of an Actor
//! - get_actor_source_files: Text source files of the latest version
//! - get_actor_file_tree: Directory tree of those source files
//! - get_actor_github_urls: Repository URLs linked to an Actor

use crate::actors::search::{MAX_SEARCH_LIMIT, MAX_SEARCH_OFFSET};
use crate::tools::types::ToolSchema;
use serde_json::json;
use std::collections::HashMap;

pub const SEARCH_RELATED_ACTORS: &str = "search_related_actors";
pub const GET_ACTOR_PRICING_INFORMATION: &str = "get_actor_pricing_information";
pub const GET_ACTOR_LATEST_BUILD: &str = "get_actor_latest_build";
pub const GET_ACTOR_SOURCE_FILES: &str = "get_actor_source_files";
pub const GET_ACTOR_FILE_TREE: &str = "get_actor_file_tree";
pub const GET_ACTOR_GITHUB_URLS: &str = "get_actor_github_urls";

/// Tool registry
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to schema
    tools: HashMap<String, ToolSchema>,
}

impl ToolRegistry {
    /// Create new tool registry with all tools
    pub fn new() -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };

        registry.register_search_related_actors();
        registry.register_get_actor_pricing_information();
        registry.register_actor_name_tool(
            GET_ACTOR_LATEST_BUILD,
            "Get the latest build of an Apify Actor from its default build tag. \
             Returns build metadata such as build number, status and the Actor version it was built from.",
        );
        registry.register_actor_name_tool(
            GET_ACTOR_SOURCE_FILES,
            "Get the text source files of the version of an Apify Actor tagged 'latest'. \
             Returns an empty list when no such version exists.",
        );
        registry.register_actor_name_tool(
            GET_ACTOR_FILE_TREE,
            "Get the directory tree of an Apify Actor's text source files. \
             Files map to null, directories to nested objects.",
        );
        registry.register_actor_name_tool(
            GET_ACTOR_GITHUB_URLS,
            "List the GitHub repository URLs associated with an Apify Actor's builds and versions.",
        );

        registry
    }

    fn insert(&mut self, schema: ToolSchema) {
        self.tools.insert(schema.name.clone(), schema);
    }

    /// Register search_related_actors tool
    fn register_search_related_actors(&mut self) {
        let schema = ToolSchema::new(
            SEARCH_RELATED_ACTORS,
            "Discover available Actors using a full-text search with specified keywords. \
             The tool returns a list of Actors, including details such as name, description, run statistics, \
             pricing information, number of stars, and URL. \
             Search with only few keywords, otherwise it will return empty results.",
            json!({
                "type": "object",
                "properties": {
                    "search": {
                        "type": "string",
                        "description": "A string of keywords to search by. The search is performed across the title, \
                                        name, description, username, and README of an Actor."
                    },
                    "limit": {
                        "type": "integer",
                        "description": "The maximum number of Actors to return",
                        "default": 10,
                        "minimum": 1,
                        "maximum": MAX_SEARCH_LIMIT
                    },
                    "offset": {
                        "type": "integer",
                        "description": "The number of items to skip from the start of the results.",
                        "default": 0,
                        "minimum": 0,
                        "maximum": MAX_SEARCH_OFFSET
                    }
                },
                "required": ["search"]
            }),
        );
        self.insert(schema);
    }

    /// Register get_actor_pricing_information tool
    fn register_get_actor_pricing_information(&mut self) {
        let schema = ToolSchema::new(
            GET_ACTOR_PRICING_INFORMATION,
            "Get the pricing information of an Apify Actor that is in effect right now.",
            json!({
                "type": "object",
                "properties": {
                    "actor_id": {
                        "type": "string",
                        "description": "The ID of the Apify Actor."
                    }
                },
                "required": ["actor_id"]
            }),
        );
        self.insert(schema);
    }

    /// Register a tool whose only parameter is the Actor name
    fn register_actor_name_tool(&mut self, name: &str, description: &str) {
        let schema = ToolSchema::new(
            name,
            description,
            json!({
                "type": "object",
                "properties": {
                    "actor_name": {
                        "type": "string",
                        "description": "Actor name from the Apify store, e.g. 'apify/web-scraper', or its ID."
                    }
                },
                "required": ["actor_name"]
            }),
        );
        self.insert(schema);
    }

    /// Get tool schema by name
    pub fn get(&self, name: &str) -> Option<&ToolSchema> {
        self.tools.get(name)
    }

    /// Check if tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all tool schemas, sorted by name
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        let mut schemas: Vec<&ToolSchema> = self.tools.values().collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Get total number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
