//! Global error handling for codedump
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for codedump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Output file errors
    #[error("Output error: {0}")]
    Output(String),
}

/// Specialized Result type for codedump operations
pub type Result<T> = std::result::Result<T, DumpError>;

// Allow converting DumpError to io::Error for backward compatibility with tests
impl From<DumpError> for io::Error {
    fn from(err: DumpError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
