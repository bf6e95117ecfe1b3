//! update tool for replacing the document's content
//!
//! Replaces the entire document wholesale with the supplied text. There is
//! no merging, no diffing, and no error path under normal conditions.

use crate::document::DocumentStore;
use crate::error::Result;
use crate::tools::{ToolExecutor, ToolResult};
use serde::Deserialize;
use serde_json::json;

/// Parameters for the update tool
#[derive(Debug, Clone, Deserialize)]
struct UpdateParams {
    /// New content for the entire document
    content: String,
}

/// Tool that replaces the entire document with new content
///
/// The confirmation message echoes the full new content so the model can
/// show the operator what the document now says.
///
/// # Examples
///
/// ```
/// use drafter::document::DocumentStore;
/// use drafter::tools::{ToolExecutor, UpdateDocumentTool};
/// use serde_json::json;
///
/// let store = DocumentStore::new();
/// let tool = UpdateDocumentTool::new(store.clone());
/// # tokio_test::block_on(async {
/// let result = tool.execute(json!({"content": "Cats are great."})).await.unwrap();
/// assert!(result.success);
/// assert_eq!(store.content(), "Cats are great.");
/// # });
/// ```
pub struct UpdateDocumentTool {
    store: DocumentStore,
}

impl UpdateDocumentTool {
    /// Creates a new update tool sharing the session's document store
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for UpdateDocumentTool {
    fn tool_definition(&self) -> serde_json::Value {
        json!({
            "name": "update",
            "description": "Replace the entire document with the provided content.",
            "parameters": {
                "type": "object",
                "properties": {
                    "content": {
                        "type": "string",
                        "description": "The full new text of the document"
                    }
                },
                "required": ["content"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
        let params: UpdateParams = match serde_json::from_value(args) {
            Ok(params) => params,
            Err(e) => {
                return Ok(ToolResult::error(format!(
                    "Invalid arguments for 'update': {}",
                    e
                )))
            }
        };

        self.store.replace(&params.content);
        tracing::debug!("Document replaced ({} bytes)", params.content.len());

        Ok(ToolResult::success(format!(
            "Document updated:\n{}",
            params.content
        )))
    }
}
