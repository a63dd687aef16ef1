//! Tool adapters for agent orchestration
//!
//! Exposes the actor operations as named tools with:
//! - JSON schemas describing each tool's input
//! - Typed, validated inputs
//! - A runtime dispatching calls by tool name

pub mod inputs;
pub mod registry;
pub mod runtime;
pub mod types;

// Re-export commonly used types
pub use inputs::{ActorIdInput, ActorNameInput, SearchRelatedActorsInput, ToolInput};
pub use registry::ToolRegistry;
pub use runtime::ToolRuntime;
pub use types::{ToolResult, ToolSchema};
