//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Supply defaults matching the library's default sources.
//!
//! Non-responsibilities:
//! - Does not resolve configuration (see `main`).
//! - Does not render output (see `output` module).

use clap::{Parser, Subcommand, ValueEnum};
use concord_config::constants::{DEFAULT_LOCAL_CONFIG_PATH, DEFAULT_RESOURCE_DIR};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(about = "Resolve layered base/environment/local configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  EXAMPLE_APP_ENVIRONMENT=dev concord\n  concord --prefix MY_APP --output json\n  concord --resource-dir ./resources get http.port\n"
)]
pub struct Cli {
    /// Application prefix; the environment is read from `<PREFIX>_ENVIRONMENT`
    #[arg(long, global = true, env = "CONCORD_PREFIX", default_value = "EXAMPLE_APP")]
    pub prefix: String,

    /// Deployment-local configuration file
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_LOCAL_CONFIG_PATH)]
    pub local_path: PathBuf,

    /// Directory holding the `base`, `environments`, and `local` resources
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_RESOURCE_DIR)]
    pub resource_dir: PathBuf,

    /// Output format for trees
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Toml)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a dotted path of the resolved configuration
    Get {
        /// Dotted path, e.g. `http.port`
        path: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}
