//! CLI error types
//!
//! Every variant ends the process with a non-zero exit code, except
//! `InvalidRequest`, which `serve` reports inline and then keeps reading.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed or out of range
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A `serve` input line that does not decode to a request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Sample contacts could not be added
    #[error("sample load failed: {0}")]
    LoadFailed(String),
}

impl CliError {
    /// Stable error code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "PHONEDIR_CLI_CONFIG_ERROR",
            Self::Io(_) | Self::Json(_) => "PHONEDIR_CLI_IO_ERROR",
            Self::InvalidRequest(_) => "PHONEDIR_CLI_INVALID_REQUEST",
            Self::LoadFailed(_) => "PHONEDIR_CLI_LOAD_FAILED",
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
