//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every loading and resolution failure.
//! - Classify each variant into one of the four caller-facing `ErrorKind`s.
//!
//! Does NOT handle:
//! - Path/type errors raised by tree accessors (see `tree::TreeError`).
//! - `.env` loading failures (see `dotenv.rs`).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, resource names).
//! - Only `FileNotFound` satisfies `is_not_found()`; the local fallback keys off it alone.

use std::path::PathBuf;
use thiserror::Error;

use crate::tree::TreeError;

/// Caller-facing classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The environment selection variable is not set.
    InvalidEnvironmentConfiguration,
    /// The allow-list is missing, mistyped, or does not contain the selected environment.
    NotAllowedEnvironmentConfiguration,
    /// A source is syntactically broken, or the selected environment has no table entry.
    InvalidConfiguration,
    /// A required source is absent or empty and no further fallback exists.
    MissingConfiguration,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidEnvironmentConfiguration => "invalid environment configuration",
            ErrorKind::NotAllowedEnvironmentConfiguration => {
                "not allowed environment configuration"
            }
            ErrorKind::InvalidConfiguration => "invalid configuration",
            ErrorKind::MissingConfiguration => "missing configuration",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No env var by the name [{var}] is set")]
    MissingEnvironmentVar { var: String },

    #[error("No allowed environments set in local config. Should be called [{key}]")]
    NoAllowedEnvironments { key: String },

    #[error("Allowed environments is not a list of strings, it's: {value}")]
    AllowedEnvironmentsNotList { value: String },

    #[error("The selected environment [{selected}] is not allowed here. Allowed are: {allowed:?}")]
    EnvironmentNotAllowed {
        selected: String,
        allowed: Vec<String>,
    },

    #[error(
        "The selected environment [{selected}] is not configured in the environment config file"
    )]
    EnvironmentNotConfigured { selected: String },

    /// The source exists but could not be decoded.
    #[error("Found a config file at [{origin}], but its syntax is not correct: {message}")]
    Malformed { origin: String, message: String },

    /// A bundled resource is absent, or present with no entries.
    #[error("Couldn't find config in resources [{name}] under {}", root.display())]
    MissingResource { name: String, root: PathBuf },

    #[error("Config file not found at {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read config file at {}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl ConfigError {
    /// Classify this error into one of the caller-facing kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingEnvironmentVar { .. } => ErrorKind::InvalidEnvironmentConfiguration,
            ConfigError::NoAllowedEnvironments { .. }
            | ConfigError::AllowedEnvironmentsNotList { .. }
            | ConfigError::EnvironmentNotAllowed { .. } => {
                ErrorKind::NotAllowedEnvironmentConfiguration
            }
            ConfigError::EnvironmentNotConfigured { .. }
            | ConfigError::Malformed { .. }
            | ConfigError::Tree(_) => ErrorKind::InvalidConfiguration,
            ConfigError::MissingResource { .. }
            | ConfigError::FileNotFound { .. }
            | ConfigError::ConfigFileRead { .. } => ErrorKind::MissingConfiguration,
        }
    }

    /// True when the underlying file does not exist.
    ///
    /// This is the only condition that triggers the local-configuration fallback.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::FileNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let missing_var = ConfigError::MissingEnvironmentVar {
            var: "APP_ENVIRONMENT".to_string(),
        };
        assert_eq!(missing_var.kind(), ErrorKind::InvalidEnvironmentConfiguration);

        let not_allowed = ConfigError::EnvironmentNotAllowed {
            selected: "test".to_string(),
            allowed: vec!["a".to_string()],
        };
        assert_eq!(not_allowed.kind(), ErrorKind::NotAllowedEnvironmentConfiguration);

        let malformed = ConfigError::Malformed {
            origin: "base.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert_eq!(malformed.kind(), ErrorKind::InvalidConfiguration);

        let not_found = ConfigError::FileNotFound {
            path: PathBuf::from("/etc/local.conf"),
        };
        assert_eq!(not_found.kind(), ErrorKind::MissingConfiguration);
    }

    #[test]
    fn test_only_file_not_found_is_not_found() {
        assert!(
            ConfigError::FileNotFound {
                path: PathBuf::from("/etc/local.conf"),
            }
            .is_not_found()
        );
        assert!(
            !ConfigError::MissingResource {
                name: "local".to_string(),
                root: PathBuf::from("resources"),
            }
            .is_not_found()
        );
        assert!(
            !ConfigError::Malformed {
                origin: "/etc/local.conf".to_string(),
                message: "bad".to_string(),
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_not_allowed_message_lists_environments() {
        let err = ConfigError::EnvironmentNotAllowed {
            selected: "test".to_string(),
            allowed: vec!["a".to_string(), "b".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("[test]"));
        assert!(message.contains("\"a\", \"b\""));
    }
}
