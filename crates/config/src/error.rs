//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// A band was configured with a height of zero rows.
    #[error("{band} height must be at least 1 row")]
    InvalidHeight {
        /// Which band (`"header"` or `"footer"`).
        band: &'static str,
    },

    /// A band style was configured with a width of zero columns.
    #[error("{band} style width must be at least 1 column")]
    InvalidWidth {
        /// Which band (`"header"` or `"footer"`).
        band: &'static str,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
