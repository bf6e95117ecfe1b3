//! Configuration management for Drafter
//!
//! This module handles loading, parsing, validating, and overriding
//! configuration from a YAML file and CLI arguments.

use crate::cli::Cli;
use crate::error::{Result, DrafterError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Drafter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Provider configuration
///
/// Specifies which model backend to use and its settings. Only Ollama is
/// currently implemented; the `type` field exists so the config format
/// does not change when another backend is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,

    /// Ollama configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_provider_type() -> String {
    "ollama".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Ollama server host
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model to use for Ollama
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_ollama_model(),
        }
    }
}

impl Config {
    /// Loads configuration from a YAML file, applying CLI overrides
    ///
    /// A missing config file is not an error: defaults are used so the
    /// binary works out of the box against a local Ollama server.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments whose host/model flags take precedence
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>, cli: &Cli) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(DrafterError::Io)?;
            serde_yaml::from_str(&contents).map_err(DrafterError::Yaml)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Config::default()
        };

        if let Some(host) = &cli.host {
            config.provider.ollama.host = host.clone();
        }
        if let Some(model) = &cli.model {
            config.provider.ollama.model = model.clone();
        }

        Ok(config)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `DrafterError::Config` if the provider type is unknown or
    /// required fields are empty.
    pub fn validate(&self) -> Result<()> {
        if self.provider.provider_type != "ollama" {
            return Err(DrafterError::Config(format!(
                "Unknown provider type: {}",
                self.provider.provider_type
            ))
            .into());
        }
        if self.provider.ollama.host.is_empty() {
            return Err(DrafterError::Config("Ollama host must not be empty".to_string()).into());
        }
        if self.provider.ollama.model.is_empty() {
            return Err(DrafterError::Config("Ollama model must not be empty".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli_with(host: Option<&str>, model: Option<&str>) -> Cli {
        Cli {
            config: None,
            host: host.map(String::from),
            model: model.map(String::from),
            prompt: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.provider_type, "ollama");
        assert_eq!(config.provider.ollama.host, "http://localhost:11434");
        assert_eq!(config.provider.ollama.model, "llama3.2:latest");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/config.yaml", &cli_with(None, None)).unwrap();
        assert_eq!(config.provider.ollama.host, "http://localhost:11434");
    }

    #[test]
    fn test_load_from_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            "provider:\n  type: ollama\n  ollama:\n    host: http://ollama.local:11434\n    model: mistral:latest\n",
        )
        .unwrap();

        let config = Config::load(&path, &cli_with(None, None)).unwrap();
        assert_eq!(config.provider.ollama.host, "http://ollama.local:11434");
        assert_eq!(config.provider.ollama.model, "mistral:latest");
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "provider:\n  ollama:\n    model: mistral:latest\n").unwrap();

        let config = Config::load(&path, &cli_with(None, None)).unwrap();
        assert_eq!(config.provider.provider_type, "ollama");
        assert_eq!(config.provider.ollama.host, "http://localhost:11434");
        assert_eq!(config.provider.ollama.model, "mistral:latest");
    }

    #[test]
    fn test_cli_overrides_win() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "provider:\n  ollama:\n    model: mistral:latest\n").unwrap();

        let config = Config::load(
            &path,
            &cli_with(Some("http://other:11434"), Some("llama3.2:3b")),
        )
        .unwrap();
        assert_eq!(config.provider.ollama.host, "http://other:11434");
        assert_eq!(config.provider.ollama.model, "llama3.2:3b");
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = Config::default();
        config.provider.provider_type = "copilot".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.provider.ollama.host = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_model() {
        let mut config = Config::default();
        config.provider.ollama.model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "provider: [not a map").unwrap();

        assert!(Config::load(&path, &cli_with(None, None)).is_err());
    }
}
