//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Server bind or serve error
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
