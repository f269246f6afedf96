//! CLI errors
//!
//! All CLI errors are fatal: `main` prints the code and message and exits
//! non-zero.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("{0}")]
    Config(String),

    /// stdout write failed
    #[error("{0}")]
    Io(#[from] io::Error),

    /// A value could not be written as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Runtime or listener could not start
    #[error("{0}")]
    BootFailed(String),
}

impl CliError {
    /// Stable code printed ahead of the message
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "BOOKSTORE_CLI_CONFIG_ERROR",
            CliError::Io(_) | CliError::Json(_) => "BOOKSTORE_CLI_IO_ERROR",
            CliError::BootFailed(_) => "BOOKSTORE_CLI_BOOT_FAILED",
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
