//! Service error types.

use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No job with the given id exists in the store.
    #[error("Job {0} not found")]
    JobNotFound(String),

    /// The command-line port argument is not a valid port number.
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}
