//! Global error handling for projpack
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for projpack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or schema-mismatched document
    #[error("Invalid document: {0}")]
    Document(#[from] serde_json::Error),

    /// Project or target path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Specialized Result type for projpack operations
pub type Result<T> = std::result::Result<T, PackError>;

// Allow converting PackError to io::Error for callers working in io::Result
impl From<PackError> for io::Error {
    fn from(err: PackError) -> Self {
        match err {
            PackError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
