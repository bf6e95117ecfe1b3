//! Model provider abstraction for Drafter
//!
//! The `Provider` trait is the boundary to the external inference
//! capability. The only concrete backend is Ollama; the trait keeps the
//! conversation loop testable against scripted providers.

pub mod base;
pub mod ollama;

pub use base::{
    validate_message_sequence, CompletionResponse, FunctionCall, Message, Provider, TokenUsage,
    ToolCall,
};
pub use ollama::OllamaProvider;

use crate::config::ProviderConfig;
use crate::error::{DrafterError, Result};

/// Create a provider from configuration
///
/// # Errors
///
/// Returns `DrafterError::Config` for an unknown provider type.
///
/// # Examples
///
/// ```
/// use drafter::config::ProviderConfig;
/// use drafter::providers::create_provider;
///
/// let provider = create_provider(&ProviderConfig::default());
/// assert!(provider.is_ok());
/// ```
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    match config.provider_type.as_str() {
        "ollama" => Ok(Box::new(OllamaProvider::new(config.ollama.clone())?)),
        other => Err(DrafterError::Config(format!("Unknown provider type: {}", other)).into()),
    }
}
