//! Error types for zkwalker.
//!
//! Two tiers matter to a walk: errors returned by a processor abort the whole
//! walk (`WalkError`), while remote failures (`ClientError`) are handed to the
//! processors first and only become fatal if a processor returns them.

use thiserror::Error;

/// Remote tree client errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Failed to connect to {servers}: {reason}")]
    ConnectionFailed { servers: String, reason: String },

    #[error("Failed to add '{scheme}' credential: {reason}")]
    AuthFailed { scheme: String, reason: String },

    #[error("Znode not found: '{path}'")]
    NotFound { path: String },

    #[error("Permission denied: '{path}'")]
    PermissionDenied { path: String },

    #[error("Client is closed")]
    Closed,

    #[error("Request for '{path}' failed: {message}")]
    Protocol { path: String, message: String },
}

/// Walk-fatal errors
///
/// Any of these returned by a node or children processor stops the walk and is
/// handed back to the caller unchanged.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Walk aborted at '{path}': {reason}")]
    Aborted { path: String, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid server list '{input}': {reason}")]
    InvalidServerList { input: String, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

/// Top-level error for the command-line runner
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Walk(#[from] WalkError),
}

/// Result type alias for ClientError
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Result type alias for WalkError
pub type WalkResult<T> = std::result::Result<T, WalkError>;
