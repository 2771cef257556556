//! Optional `.env` loading for entry points.
//!
//! Responsibilities:
//! - Populate the process environment from a `.env` file before the selector reads it.
//! - Honor the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Reading the selection variable (see `environment.rs`).
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - Errors NEVER include raw `.env` line contents, which may hold secrets.
//! - The library never calls this on its own; entry points opt in.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Variable that, when `1` or `true`, disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Failures while loading a `.env` file.
#[derive(Error, Debug)]
pub enum DotenvError {
    /// SAFETY: only the byte index of the parse failure is kept, not the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Loads variables from a `.env` file in the working directory or its ancestors.
///
/// Returns the path that was loaded, or `None` when loading is disabled or no
/// file exists. Variables already set in the process are not overwritten.
pub fn load_dotenv() -> Result<Option<PathBuf>, DotenvError> {
    if dotenv_disabled() {
        return Ok(None);
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(DotenvError::Parse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(DotenvError::Io {
            kind: io_err.kind(),
        }),
        Err(_) => Err(DotenvError::Unknown),
    }
}
