//! Command-line interface definition for Drafter
//!
//! This module defines the CLI structure using clap's derive API. Drafter
//! is a single-purpose binary, so there are no subcommands: running it
//! starts a drafting session.

use clap::Parser;

/// Drafter - interactive document drafting agent
///
/// Drafts a single text document through conversation with a tool-calling
/// language model, then saves it to a `.txt` file.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "drafter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the Ollama server host from config
    #[arg(long, env = "DRAFTER_OLLAMA_HOST")]
    pub host: Option<String>,

    /// Override the Ollama model from config
    #[arg(short, long, env = "DRAFTER_OLLAMA_MODEL")]
    pub model: Option<String>,

    /// Opening request for the document (prompted interactively if omitted)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
