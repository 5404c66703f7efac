// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForensicsError>;

#[derive(Error, Debug)]
pub enum ForensicsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Required input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("File operation failed for {}: {source}", path.display())]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ForensicsError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ForensicsError::FileOperation {
            path: path.into(),
            source,
        }
    }

    /// Missing input is the one failure class the CLI reports with exit code 2.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ForensicsError::MissingInput { .. })
    }
}
