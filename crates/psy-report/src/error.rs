//! Report errors.

use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors in grid construction.
///
/// Table-fatal but run-survivable: a bad axis spoils one table and the
/// driver moves on to the next.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A linear grid needs at least two points.
    #[error("Invalid grid: {count} point(s), need at least 2")]
    InvalidCount { count: usize },

    /// An explicit grid with no values.
    #[error("Invalid grid: empty value list")]
    EmptyGrid,

    /// Non-finite bound, offset, or listed value.
    #[error("Invalid grid: non-finite {what}")]
    NonFinite { what: &'static str },
}

/// Errors that abort a report operation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A row's cell count disagrees with the column count. That is a bug in
    /// the table definition, not bad data, so it stops the run.
    #[error("Table '{section}': row has {actual} cells, expected {expected}")]
    ColumnMismatch {
        section: String,
        expected: usize,
        actual: usize,
    },

    /// Requested section id does not exist in the catalog.
    #[error("Unknown section '{id}'")]
    UnknownSection { id: String },

    /// Output stream failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
