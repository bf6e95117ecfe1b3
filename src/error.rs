//! Error types for Drafter
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Drafter operations
///
/// Covers configuration loading, provider interactions, and tool
/// execution. Tool failures that the model should be able to react to
/// (e.g. an unwritable save target) are *not* represented here; those are
/// surfaced as textual tool results so the conversation can continue.
#[derive(Error, Debug)]
pub enum DrafterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (API calls, malformed responses, etc.)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Tool execution errors that cannot be reported as a tool result
    #[error("Tool execution error: {0}")]
    Tool(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Drafter operations
///
/// Uses `anyhow::Error` as the error type, allowing for rich error
/// context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
