//! Error types for the manager client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ManagerError
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Unified error type for manager client operations
#[derive(Debug, Error)]
pub enum ManagerError {
    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    /// Bad arity, bad argument token, unknown command or bad address
    #[error("Invalid argument: {0}")]
    Argument(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Manager unreachable, or the connection closed mid-exchange
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("Malformed response `{line}`: {source}")]
    MalformedResponse {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Mapping Errors
    // -------------------------------------------------------------------------
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// Timestamp, number or code that does not parse
    #[error("Format error: {0}")]
    Format(String),

    #[error("Unknown role id: {0}")]
    RoleLookup(i64),

    // -------------------------------------------------------------------------
    // Remote Errors
    // -------------------------------------------------------------------------
    /// Failure reported by the manager itself
    #[error("Manager error: {0}")]
    Remote(String),
}
