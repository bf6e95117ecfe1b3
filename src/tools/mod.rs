//! Tools module for Drafter
//!
//! This module contains the tool trait, the tool registry, the tool result
//! type, and the two document tools (`update` and `save`).

pub mod save_document;
pub mod update_document;

use crate::document::DocumentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

pub use save_document::SaveDocumentTool;
pub use update_document::UpdateDocumentTool;

/// Tool result structure
///
/// The textual outcome of executing one tool call. Failures are carried
/// here as text rather than as errors so the model can read and react to
/// them; only failures the conversation cannot recover from surface as
/// `Err` at the session level.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Whether the tool execution succeeded
    pub success: bool,
    /// Output from the tool
    pub output: String,
    /// Error message if execution failed
    pub error: Option<String>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    /// Create a failed tool result
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
        }
    }

    /// Convert to a message string for the conversation
    ///
    /// # Examples
    ///
    /// ```
    /// use drafter::tools::ToolResult;
    ///
    /// assert_eq!(ToolResult::success("done").to_message(), "done");
    /// assert_eq!(ToolResult::error("boom").to_message(), "Error: boom");
    /// ```
    pub fn to_message(&self) -> String {
        if self.success {
            self.output.clone()
        } else {
            format!(
                "Error: {}",
                self.error.as_deref().unwrap_or("Unknown error")
            )
        }
    }
}

/// Tool executor trait for implementing tool execution logic
///
/// Each tool provides its declaration (name, description, and argument
/// schema in the function-calling format) and an async execute method.
/// Argument validation happens inside `execute`: a mismatched argument
/// shape must come back as `ToolResult::error`, not as `Err`.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Returns the tool definition as a JSON value
    ///
    /// The definition follows the function calling format:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "Tool description",
    ///   "parameters": {
    ///     "type": "object",
    ///     "properties": {
    ///       "param1": {"type": "string", "description": "..."}
    ///     },
    ///     "required": ["param1"]
    ///   }
    /// }
    /// ```
    fn tool_definition(&self) -> serde_json::Value;

    /// Executes the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns error only for failures that cannot be expressed as a
    /// textual tool result
    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult>;
}

/// Tool registry for managing available tools
///
/// Maps tool names to executors. Looking up an unregistered name returns
/// `None`; the session turns that into a tool-result error rather than
/// trusting the model's output.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolExecutor>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool executor in the registry
    pub fn register(&mut self, name: impl Into<String>, executor: Arc<dyn ToolExecutor>) {
        self.tools.insert(name.into(), executor);
    }

    /// Get a tool executor by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.tools.get(name).cloned()
    }

    /// Get all tool definitions as JSON values
    pub fn all_definitions(&self) -> Vec<serde_json::Value> {
        self.tools
            .values()
            .map(|executor| executor.tool_definition())
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builds the registry for a drafting session
///
/// Both tools share the session's document store.
///
/// # Examples
///
/// ```
/// use drafter::document::DocumentStore;
/// use drafter::tools::build_tool_registry;
///
/// let registry = build_tool_registry(DocumentStore::new());
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("update").is_some());
/// assert!(registry.get("save").is_some());
/// ```
pub fn build_tool_registry(store: DocumentStore) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register("update", Arc::new(UpdateDocumentTool::new(store.clone())));
    registry.register("save", Arc::new(SaveDocumentTool::new(store)));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl ToolExecutor for EchoTool {
        fn tool_definition(&self) -> serde_json::Value {
            serde_json::json!({
                "name": "echo",
                "description": "Echoes its input",
                "parameters": {"type": "object", "properties": {}}
            })
        }

        async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
            Ok(ToolResult::success(args.to_string()))
        }
    }

    #[test]
    fn test_tool_result_success_message() {
        let result = ToolResult::success("all good");
        assert!(result.success);
        assert_eq!(result.to_message(), "all good");
    }

    #[test]
    fn test_tool_result_error_message() {
        let result = ToolResult::error("disk full");
        assert!(!result.success);
        assert_eq!(result.to_message(), "Error: disk full");
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register("echo", Arc::new(EchoTool));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registry_all_definitions() {
        let mut registry = ToolRegistry::new();
        registry.register("echo", Arc::new(EchoTool));

        let definitions = registry.all_definitions();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0]["name"], "echo");
    }

    #[test]
    fn test_build_tool_registry_has_both_tools() {
        let registry = build_tool_registry(DocumentStore::new());
        assert_eq!(registry.len(), 2);
        assert!(registry.get("update").is_some());
        assert!(registry.get("save").is_some());
    }

    #[test]
    fn test_build_tool_registry_definitions_have_schemas() {
        let registry = build_tool_registry(DocumentStore::new());
        for definition in registry.all_definitions() {
            assert!(definition["name"].is_string());
            assert!(definition["description"].is_string());
            assert_eq!(definition["parameters"]["type"], "object");
        }
    }
}
