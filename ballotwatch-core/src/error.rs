//! Error types for the ballotwatch ecosystem.

use thiserror::Error;

/// Errors that can occur in ballotwatch operations.
#[derive(Error, Debug)]
pub enum BallotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ballotwatch operations.
pub type BallotResult<T> = Result<T, BallotError>;
