//! save tool for writing the document to a text file
//!
//! Writes the document's current content to a `.txt` file, UTF-8 encoded,
//! with create-or-truncate semantics. I/O failures are reported as tool
//! result text so the model can react to them; they never abort the
//! conversation. The success message contains the word "saved", which the
//! conversation loop's termination check matches on; the failure message
//! deliberately does not.

use crate::document::DocumentStore;
use crate::error::Result;
use crate::tools::{ToolExecutor, ToolResult};
use serde::Deserialize;
use serde_json::json;

/// File extension appended when the supplied name lacks it
const SAVE_EXTENSION: &str = ".txt";

/// Parameters for the save tool
#[derive(Debug, Clone, Deserialize)]
struct SaveParams {
    /// Target filename, with or without the `.txt` suffix
    filename: String,
}

/// Tool that saves the current document to a text file
///
/// # Examples
///
/// ```no_run
/// use drafter::document::DocumentStore;
/// use drafter::tools::{SaveDocumentTool, ToolExecutor};
/// use serde_json::json;
///
/// let store = DocumentStore::new();
/// store.replace("Cats are great.");
/// let tool = SaveDocumentTool::new(store);
/// # tokio_test::block_on(async {
/// let result = tool.execute(json!({"filename": "notes"})).await.unwrap();
/// assert!(result.success);
/// assert!(result.output.contains("notes.txt"));
/// # });
/// ```
pub struct SaveDocumentTool {
    store: DocumentStore,
}

impl SaveDocumentTool {
    /// Creates a new save tool sharing the session's document store
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

/// Appends the save extension when the filename lacks it
///
/// # Examples
///
/// ```
/// use drafter::tools::save_document::normalize_filename;
///
/// assert_eq!(normalize_filename("notes"), "notes.txt");
/// assert_eq!(normalize_filename("notes.txt"), "notes.txt");
/// ```
pub fn normalize_filename(filename: &str) -> String {
    if filename.ends_with(SAVE_EXTENSION) {
        filename.to_string()
    } else {
        format!("{}{}", filename, SAVE_EXTENSION)
    }
}

#[async_trait::async_trait]
impl ToolExecutor for SaveDocumentTool {
    fn tool_definition(&self) -> serde_json::Value {
        json!({
            "name": "save",
            "description": "Save the current document to a text file. Appends .txt to the filename if missing.",
            "parameters": {
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "Name of the file to save the document to"
                    }
                },
                "required": ["filename"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
        let params: SaveParams = match serde_json::from_value(args) {
            Ok(params) => params,
            Err(e) => {
                return Ok(ToolResult::error(format!(
                    "Invalid arguments for 'save': {}",
                    e
                )))
            }
        };

        let filename = normalize_filename(&params.filename);
        let content = self.store.content();

        // tokio::fs::write opens create-or-truncate and closes the handle
        // on every path, including write failure.
        match tokio::fs::write(&filename, content.as_bytes()).await {
            Ok(()) => {
                tracing::info!("Document saved to {} ({} bytes)", filename, content.len());
                Ok(ToolResult::success(format!(
                    "Document saved to {}",
                    filename
                )))
            }
            Err(e) => {
                tracing::warn!("Failed to save document to {}: {}", filename, e);
                Ok(ToolResult::error(format!(
                    "could not write {}: {}",
                    filename, e
                )))
            }
        }
    }
}
