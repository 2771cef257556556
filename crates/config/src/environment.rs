//! Environment selection from the process environment.
//!
//! Responsibilities:
//! - Derive the selection variable name (`<PREFIX>_ENVIRONMENT`) from an application prefix.
//! - Read the selected environment name.
//!
//! Does NOT handle:
//! - Checking the name against the allow-list or environment table (see `resolver`).
//!
//! Invariants:
//! - Values are returned verbatim: no trimming, no case folding, and an empty value
//!   is still a value (the allow-list rejects it).
//! - Non-Unicode values are treated as unset.

use std::env::VarError;
use std::fmt;
use std::sync::Arc;

use crate::constants::ENVIRONMENT_VAR_SUFFIX;

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads the active environment name for an application.
#[derive(Clone)]
pub struct EnvironmentSelector {
    var_name: String,
    lookup: Option<Lookup>,
}

impl EnvironmentSelector {
    /// Selector reading `<prefix>_ENVIRONMENT` from the process environment.
    pub fn new(prefix: impl AsRef<str>) -> Self {
        Self {
            var_name: format!("{}_{}", prefix.as_ref(), ENVIRONMENT_VAR_SUFFIX),
            lookup: None,
        }
    }

    /// Selector reading `<prefix>_ENVIRONMENT` through `lookup` instead of the process environment.
    pub fn with_lookup<F>(prefix: impl AsRef<str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Some(Arc::new(lookup)),
            ..Self::new(prefix)
        }
    }

    /// Name of the variable holding the environment name.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Current value of the selection variable, or `None` if unset.
    pub fn read(&self) -> Option<String> {
        match &self.lookup {
            Some(lookup) => lookup(&self.var_name),
            None => match std::env::var(&self.var_name) {
                Ok(value) => Some(value),
                Err(VarError::NotPresent) => None,
                Err(VarError::NotUnicode(_)) => {
                    tracing::warn!(
                        var = %self.var_name,
                        "Environment variable is not valid Unicode, treating it as unset"
                    );
                    None
                }
            },
        }
    }
}

impl fmt::Debug for EnvironmentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentSelector")
            .field("var_name", &self.var_name)
            .field("custom_lookup", &self.lookup.is_some())
            .finish()
    }
}
