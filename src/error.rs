//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the contacts file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value failed validation
    #[error("Invalid contact data: {0}")]
    Validation(#[from] ValidationError),

    /// None of the supported text encodings could decode the file
    #[error("Could not decode {path} with any supported encoding")]
    Undecodable { path: PathBuf },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The contacts file could not be loaded; it has not been modified
    #[error("Failed to load contacts: {0}")]
    Load(#[from] StoreError),

    /// Reading input or writing output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
