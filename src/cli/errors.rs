//! CLI-specific error types

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Failures during CLI startup and serving
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Server failed to bind or crashed while serving.
    #[error("server error: {0}")]
    Server(String),
}

impl CliError {
    /// Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}
