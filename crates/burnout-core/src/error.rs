//! Core error types for burnout-core.
//!
//! The scoring functions are total and never fail. Everything that can
//! fail lives at the edges: configuration on disk, input validation at the
//! host boundary, and the share/export effects.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for burnout-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Share/export effect errors
    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be resolved or created
    #[error("Failed to prepare config directory {path}: {source}")]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised by share and export effects.
#[derive(Error, Debug)]
pub enum ShareError {
    /// The target is missing required settings (webhook URL, recipient, ...)
    #[error("{target} is not configured: {message}")]
    NotConfigured { target: String, message: String },

    /// No clipboard helper could be found or it exited with failure
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The browser or mail composer could not be opened
    #[error("Failed to open {url}: {source}")]
    OpenFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Building a share URL failed
    #[error("Invalid share URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Webhook URLs must use https
    #[error("Webhook URL must use https: {0}")]
    InsecureWebhookUrl(String),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Webhook answered with a non-success status
    #[error("Webhook error (HTTP {status}): {body}")]
    WebhookRejected { status: u16, body: String },

    /// OS keyring failure while reading or writing credentials
    #[error("Credential store error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Writing an export file failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the report failed
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
