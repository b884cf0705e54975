//! Error types for propgen-core
//!
//! Provides unified error handling across the crate.
//!
//! The generation pipeline itself is a total function: every scanned
//! member maps to exactly one fragment. Errors only arise at the
//! boundaries (malformed host snapshots, invalid configuration).

use thiserror::Error;

/// Main error type for propgen-core operations
#[derive(Debug, Error)]
pub enum PropgenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed host snapshot
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Snapshot decode error (JSON wire format)
    #[error("Snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parse error (YAML)
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl PropgenError {
    /// Create a snapshot error
    pub fn snapshot(msg: impl Into<String>) -> Self {
        PropgenError::Snapshot(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        PropgenError::Config(msg.into())
    }
}

/// Result type alias for propgen operations
pub type Result<T> = std::result::Result<T, PropgenError>;
