//! Errors raised by path-based tree accessors.

use thiserror::Error;

/// A typed lookup on a [`ConfigTree`](super::ConfigTree) failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("No configuration setting found for key '{path}'")]
    Missing { path: String },

    #[error("Configuration '{path}' has type {actual} rather than {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid path '{path}': paths are dot-separated, non-empty segments")]
    BadPath { path: String },
}
