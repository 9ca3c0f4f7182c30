//! Property source errors.

use thiserror::Error;

/// Result type for property-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while evaluating properties against a backend.
///
/// Every variant is cell-scoped from the report's point of view: a failed
/// evaluation spoils one table cell, never the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Rejected state input (non-finite or non-physical values).
    #[error("Invalid state input: {what}")]
    InvalidState { what: &'static str },

    /// Backend (CoolProp) error: out of range, no convergence, bad key.
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Backend returned a non-finite number.
    #[error("Non-finite result for {what}")]
    NonFinite { what: &'static str },

    /// Quantity not reachable through this backend.
    #[error("Not supported: {what}")]
    Unsupported { what: &'static str },
}
