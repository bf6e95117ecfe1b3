//! The document being drafted
//!
//! A session owns exactly one document: a single mutable text value with
//! no history or versioning. The store is a cloneable handle so the tools
//! and the session can share it without a process-wide global; a future
//! multi-session extension only needs one store per session.

use std::sync::{Arc, RwLock};

/// Shared handle to the session's document text
///
/// Cloning the store clones the handle, not the text. The document starts
/// empty and is only ever replaced wholesale.
///
/// # Examples
///
/// ```
/// use drafter::document::DocumentStore;
///
/// let store = DocumentStore::new();
/// assert!(store.is_empty());
///
/// store.replace("Cats are great.");
/// assert_eq!(store.content(), "Cats are great.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    content: Arc<RwLock<String>>,
}

impl DocumentStore {
    /// Creates a new store holding an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire document with `content`
    ///
    /// Last write wins; there is no merging and no undo.
    pub fn replace(&self, content: impl Into<String>) {
        let mut guard = self.content.write().unwrap_or_else(|e| e.into_inner());
        *guard = content.into();
    }

    /// Returns a copy of the current document text
    pub fn content(&self) -> String {
        self.content
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns true if the document is empty
    pub fn is_empty(&self) -> bool {
        self.content
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.content(), "");
    }

    #[test]
    fn test_replace_sets_content_exactly() {
        let store = DocumentStore::new();
        store.replace("hello world");
        assert_eq!(store.content(), "hello world");
    }

    #[test]
    fn test_replace_is_wholesale_last_write_wins() {
        let store = DocumentStore::new();
        store.replace("first draft");
        store.replace("second draft");
        assert_eq!(store.content(), "second draft");
    }

    #[test]
    fn test_replace_preserves_unicode() {
        let store = DocumentStore::new();
        store.replace("naïve café — 猫");
        assert_eq!(store.content(), "naïve café — 猫");
    }

    #[test]
    fn test_clone_shares_content() {
        let store = DocumentStore::new();
        let handle = store.clone();
        store.replace("shared text");
        assert_eq!(handle.content(), "shared text");
    }

    #[test]
    fn test_replace_with_empty_string() {
        let store = DocumentStore::new();
        store.replace("something");
        store.replace("");
        assert!(store.is_empty());
    }
}
