//! Tests for the resolver.
//!
//! Responsibilities:
//! - Test environment selection, allow-list handling, and layer loading.
//! - Test local-configuration fallback rules.
//! - Test merge precedence against on-disk fixtures.
//!
//! Invariants:
//! - Tests inject the environment through `EnvironmentSelector::with_lookup`
//!   and never touch process environment variables.
//! - Fixtures live in `tests/fixtures` and are never written to.

use std::path::PathBuf;

use crate::environment::EnvironmentSelector;
use crate::error::ConfigError;
use crate::loader::{ConfigLoader, ResourceLoader};
use crate::tree::ConfigTree;

pub mod allow_list_tests;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> ResourceLoader {
    ResourceLoader::in_dir(fixtures_dir(), name)
}

/// Selector that always reports `env` for `MY_APP_ENVIRONMENT`.
pub fn selecting(env: &'static str) -> EnvironmentSelector {
    EnvironmentSelector::with_lookup("MY_APP", move |name| {
        assert_eq!(name, "MY_APP_ENVIRONMENT");
        Some(env.to_string())
    })
}

/// Selector for which the variable is never set.
pub fn unset() -> EnvironmentSelector {
    EnvironmentSelector::with_lookup("MY_APP", |_| None)
}

/// Behaves like a filesystem source whose file does not exist.
pub struct FileNotFoundLoader;

impl ConfigLoader for FileNotFoundLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        Err(ConfigError::FileNotFound {
            path: PathBuf::from("/nonexistent/local.conf"),
        })
    }

    fn describe(&self) -> String {
        "missing file".to_string()
    }
}

/// Behaves like a bundled resource that is absent.
pub struct MissingResourceLoader;

impl ConfigLoader for MissingResourceLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        Err(ConfigError::MissingResource {
            name: "missing".to_string(),
            root: PathBuf::from("resources"),
        })
    }

    fn describe(&self) -> String {
        "missing resource".to_string()
    }
}

/// Behaves like a source with a syntax error.
pub struct SyntaxErrorLoader;

impl ConfigLoader for SyntaxErrorLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        Err(ConfigError::Malformed {
            origin: "syntax-error".to_string(),
            message: "Invalid".to_string(),
        })
    }

    fn describe(&self) -> String {
        "syntax error".to_string()
    }
}

/// Returns a fixed tree.
pub struct StaticLoader(pub ConfigTree);

impl ConfigLoader for StaticLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static tree".to_string()
    }
}

/// Fails the test if it is ever loaded.
pub struct UnreachableLoader;

impl ConfigLoader for UnreachableLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        panic!("loader should not have been called");
    }

    fn describe(&self) -> String {
        "unreachable".to_string()
    }
}
