//! Tool execution types and structures
//!
//! Core types describing a tool to the orchestration layer and carrying
//! the result of one invocation back.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a successful tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that was executed
    pub tool: String,

    /// JSON value conforming to the tool's declared output shape
    pub output: serde_json::Value,

    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl ToolResult {
    pub fn new(tool: impl Into<String>, output: serde_json::Value, duration: Duration) -> Self {
        Self {
            tool: tool.into(),
            output,
            duration_ms: duration.as_millis() as u64,
        }
    }

    /// Output rendered as pretty JSON
    pub fn output_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.output).unwrap_or_else(|_| self.output.to_string())
    }
}

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// Parameter schema (JSON Schema)
    pub parameters: serde_json::Value,
}

impl ToolSchema {
    /// Create new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names of the required parameters
    pub fn required(&self) -> Vec<&str> {
        self.parameters["required"]
            .as_array()
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}
