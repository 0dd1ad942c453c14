//! templatectl - manage index templates and component templates.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute template management commands via the shared client library.
//! - Run offline simulations against a local template directory.
//!
//! Does NOT handle:
//! - Core resolution semantics (see `crates/resolver`).
//! - Wire model definitions (see `crates/types`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap env defaults.
//! - Offline simulation never requires connection configuration.

mod args;
mod commands;
mod error;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use templatectl_client::TemplateClient;
use templatectl_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env BEFORE parsing so clap env defaults can read .env values.
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run_command(cli: Cli) -> Result<()> {
    // Offline simulation short-circuits: no connection config needed.
    if let Commands::Simulate(args) = &cli.command
        && let Some(templates_dir) = &args.templates
    {
        return commands::simulate::run_offline(templates_dir, &args.index_name);
    }

    let client = build_client(&cli)?;
    match cli.command {
        Commands::ComponentTemplate(command) => commands::component::run(&client, command).await,
        Commands::IndexTemplate(command) => commands::index::run(&client, command).await,
        Commands::Simulate(args) => commands::simulate::run_remote(&client, &args.index_name).await,
    }
}

fn build_client(cli: &Cli) -> Result<TemplateClient> {
    let mut loader = ConfigLoader::new();

    // CLI flags take highest precedence; from_env fills the rest.
    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url(base_url.clone());
    }
    if let Some(token) = &cli.api_token {
        loader = loader.with_api_token(token.clone().into());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(max_retries) = cli.max_retries {
        loader = loader.with_max_retries(max_retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = loader.from_env()?.build()?;
    Ok(TemplateClient::from_config(&config)?)
}
