//! Layered configuration resolution.
//!
//! This crate resolves one configuration tree for an application from three
//! layers: bundled base defaults, a bundled per-environment table, and a
//! deployment-local override. The active environment is chosen by the
//! `<PREFIX>_ENVIRONMENT` variable and must be allowed by the local layer.
//!
//! ```rust,no_run
//! use concord_config::{EnvironmentSelector, Resolver};
//!
//! let resolver = Resolver::new(EnvironmentSelector::new("EXAMPLE_APP"));
//! let config = resolver.resolve()?;
//! println!("running in {}", config.environment());
//! # Ok::<(), concord_config::ConfigError>(())
//! ```

pub mod constants;
pub mod dotenv;
mod environment;
mod error;
pub mod format;
mod loader;
mod resolver;
mod tree;

pub use environment::EnvironmentSelector;
pub use error::{ConfigError, ErrorKind};
pub use format::Format;
pub use loader::{ConfigLoader, FileLoader, ResourceLoader};
pub use resolver::{
    ResolvedConfig, Resolver, allowed_environments, is_environment_allowed,
    is_environment_configured,
};
pub use tree::{ConfigTree, ConfigValue, TreeError};
