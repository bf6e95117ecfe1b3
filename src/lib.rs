//! Drafter - conversational document drafting agent library
//!
//! This library provides the core functionality for the Drafter agent: a
//! model is given two tools (`update` the document's full text, `save` it
//! to a file) and a conversation loop alternates between invoking the
//! model, reading operator input, and executing tool calls until a save
//! succeeds.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `agent`: Session state machine, transcript, and operator input
//! - `document`: The single mutable document the session edits
//! - `providers`: Model provider abstraction and the Ollama backend
//! - `tools`: Tool trait, registry, and the `update`/`save` tools
//! - `prompts`: System prompt construction
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use drafter::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     // Session setup would go here
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod prompts;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use agent::{DraftSession, Phase, Transcript};
pub use config::Config;
pub use document::DocumentStore;
pub use error::{DrafterError, Result};
