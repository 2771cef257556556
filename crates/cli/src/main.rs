//! Concord CLI - resolve and print layered application configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a `Resolver` from them, resolve once, and print the result.
//! - Map resolution failures to structured exit codes.
//!
//! Does NOT handle:
//! - Resolution rules or merge precedence (see `concord-config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults
//!   and the `<PREFIX>_ENVIRONMENT` selection.
//! - Logs go to stderr; stdout carries only the rendered configuration.

mod args;
mod error;
mod output;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use concord_config::{EnvironmentSelector, FileLoader, Resolver, dotenv::load_dotenv};
use error::{ExitCode, ExitCodeExt};
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> Result<()> {
    let resolver = Resolver::new(EnvironmentSelector::new(&cli.prefix))
        .with_local_loader(FileLoader::new(&cli.local_path))
        .with_resource_dir(&cli.resource_dir);
    tracing::debug!(resolver = ?resolver, "Resolving configuration");

    let config = resolver
        .resolve()
        .context("Failed to resolve configuration")?;
    tracing::info!(environment = %config.environment(), "Configuration resolved");

    let rendered = match &cli.command {
        None => output::render_tree(config.tree(), cli.output)?,
        Some(Commands::Get { path }) => {
            let value = config
                .get(path)
                .with_context(|| format!("No configuration setting found for key '{path}'"))?;
            output::render_value(value, cli.output)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end()).context("Failed to write to stdout")?;
    Ok(())
}
