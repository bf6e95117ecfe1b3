//! Drafter - conversational document drafting agent
//!
//! Main entry point. Wires configuration, the Ollama provider, the tool
//! registry, and the interactive session together, then runs the
//! conversation loop to completion.

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use drafter::agent::{DraftSession, OperatorInput, RustylineInput};
use drafter::cli::Cli;
use drafter::config::Config;
use drafter::document::DocumentStore;
use drafter::providers::create_provider;
use drafter::tools::build_tool_registry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    tracing::info!(
        "Using model {} at {}",
        config.provider.ollama.model,
        config.provider.ollama.host
    );

    let provider = create_provider(&config.provider)?;
    let store = DocumentStore::new();
    let registry = build_tool_registry(store.clone());

    let mut input = RustylineInput::new()?;

    println!("\n{}", "===== DRAFTER =====".bold());

    let opening = match cli.prompt {
        Some(prompt) => prompt,
        None => {
            let line = input.read_line(&format!(
                "{} ",
                "What would you like to create?".green()
            ))?;
            match line {
                Some(line) => line,
                None => {
                    tracing::info!("No opening request; exiting");
                    return Ok(());
                }
            }
        }
    };

    let mut session = DraftSession::new(provider, registry, store, opening);
    session.run(&mut input).await?;

    println!("\n{}", "===== DRAFTER FINISHED =====".bold());
    Ok(())
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "drafter=debug" } else { "drafter=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
