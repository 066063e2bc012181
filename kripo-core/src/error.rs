//! Structured error types for pharmacophore fingerprinting.

use thiserror::Error;

/// Unified error type for all fingerprinting operations.
///
/// None of these are retryable: the same inputs fail the same way.
#[derive(Debug, Error)]
pub enum KripoError {
    /// Bad bin table parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Bit dictionary resource missing, corrupt, or holding a duplicate key.
    #[error("resource error: {0}")]
    Resource(String),

    /// A canonical key has no entry in the bit dictionary.
    #[error("unknown bit key: {0}")]
    UnknownKey(String),

    /// Invalid argument (unsupported fuzzy factor, unknown feature kind, etc.)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, KripoError>;
