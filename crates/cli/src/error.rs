//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failure kinds.
//! - Map `ConfigError` kinds to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Each configuration error kind has its own exit code.
//! - Argument errors exit with `GeneralError`, never with clap's default of 2.

use concord_config::{ConfigError, ErrorKind};

/// Structured exit codes for concord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration resolved and printed.
    Success = 0,

    /// General error - unhandled or generic failure (bad path, output encoding, `.env`).
    GeneralError = 1,

    /// The `<PREFIX>_ENVIRONMENT` variable is not set.
    InvalidEnvironment = 2,

    /// The selected environment is not allowed by the local configuration.
    NotAllowedEnvironment = 3,

    /// A source is malformed or the environment table lacks the selection.
    InvalidConfiguration = 4,

    /// A required source is missing or empty.
    MissingConfiguration = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&clap::Error> for ExitCode {
    /// `--help` and `--version` surface as clap errors printed to stdout; they succeed.
    fn from(err: &clap::Error) -> Self {
        if err.use_stderr() {
            ExitCode::GeneralError
        } else {
            ExitCode::Success
        }
    }
}

impl From<ErrorKind> for ExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidEnvironmentConfiguration => ExitCode::InvalidEnvironment,
            ErrorKind::NotAllowedEnvironmentConfiguration => ExitCode::NotAllowedEnvironment,
            ErrorKind::InvalidConfiguration => ExitCode::InvalidConfiguration,
            ErrorKind::MissingConfiguration => ExitCode::MissingConfiguration,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(|err| ExitCode::from(err.kind()))
            .unwrap_or(ExitCode::GeneralError)
    }
}
