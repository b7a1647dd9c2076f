//! Error types for shopctl

use thiserror::Error;

/// shopctl error types
///
/// A delegated tool exiting non-zero is not an error: that exit code is
/// returned to the caller as-is. These variants cover everything that
/// goes wrong before or around the delegation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External program could not be started
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Unknown mode selector
    #[error("Invalid mode '{value}' (expected development|dev|production|prod)")]
    InvalidMode {
        /// Rejected value
        value: String,
    },

    /// Malformed service name
    #[error("Invalid service name: {message}")]
    InvalidService {
        /// Error message
        message: String,
    },

    /// Health probe could not be set up
    #[error("Probe error: {message}")]
    Probe {
        /// Error message
        message: String,
    },

    /// Interactive confirmation could not be read
    #[error("Confirmation error: {message}")]
    Confirmation {
        /// Error message
        message: String,
    },

    /// Serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for shopctl operations
pub type Result<T> = std::result::Result<T, Error>;
