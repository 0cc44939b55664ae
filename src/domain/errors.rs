//! Domain error types
//!
//! This module defines the error hierarchy for URL Exporter.
//! All errors are domain-specific and don't expose third-party types.

use std::time::Duration;
use thiserror::Error;

/// Main URL Exporter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Count/Page service errors
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Count/Page service errors
///
/// Errors that occur when talking to the Count or Page service.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network-level failure (connection refused, reset, DNS)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The bounded wait elapsed before the service answered
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Caller lacks the administrative capability
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Missing or malformed taxonomy/term parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Taxonomy or term does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded
    #[error("Invalid response from service: {0}")]
    InvalidResponse(String),

    /// Well-formed error envelope without a recognised code
    #[error("Service reported an error: {0}")]
    Server(String),
}

impl ServiceError {
    /// Message the service itself supplied, if any.
    ///
    /// Transport-level failures carry no server message and yield `None`.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServiceError::PermissionDenied(msg)
            | ServiceError::InvalidParameters(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Server(msg) => Some(msg.as_str()),
            ServiceError::Transport(_)
            | ServiceError::Timeout(_)
            | ServiceError::InvalidResponse(_) => None,
        }
    }

    /// Whether this failure happened below the envelope (network, timeout, decoding)
    pub fn is_transport(&self) -> bool {
        self.server_message().is_none()
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        ExporterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExporterError {
    fn from(err: serde_json::Error) -> Self {
        ExporterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExporterError {
    fn from(err: toml::de::Error) -> Self {
        ExporterError::Configuration(format!("TOML parse error: {err}"))
    }
}
