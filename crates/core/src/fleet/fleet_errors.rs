//! Fleet-related error types.

use thiserror::Error;

/// Errors that can occur during fleet operations.
#[derive(Error, Debug)]
pub enum FleetError {
    /// The import payload is not a sequence of records. Rejected before any
    /// processing; no side effects.
    #[error("Invalid import payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
