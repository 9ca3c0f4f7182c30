//! psy-report: table generation for the humid-air validation report.
//!
//! Provides:
//! - Axis grid generation (linear and explicit, with unit offsets)
//! - A declarative table model (axis, columns, number formats)
//! - Cell-by-cell evaluation against a `PropertySource` with failure
//!   isolation
//! - Fixed-width text rendering
//! - A driver holding the full table catalog in report order
//!
//! # Architecture
//!
//! Tables are data first: a [`TableSpec`] describes axis, columns, and
//! formats; [`evaluate_table`] turns it into numbers against any property
//! source; [`render_table`] turns those into text. The [`ReportDriver`]
//! owns the catalog and the fixed pressures/temperatures of the published
//! reference tables. A failed property evaluation costs one cell, a bad
//! grid costs one table, and only an internal shape mismatch stops a run.
//!
//! # Example
//!
//! ```
//! use psy_props::ScriptedSource;
//! use psy_report::ReportDriver;
//!
//! let driver = ReportDriver::new(ScriptedSource::constant(0.01));
//! let mut out = Vec::new();
//! driver.write_section("A.6.1", &mut out)?;
//!
//! let text = String::from_utf8(out)?;
//! assert!(text.starts_with("A.6.1 "));
//! assert!(text.contains("Saturated air at 101.325 kPa"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod driver;
pub mod error;
pub mod evaluate;
pub mod grid;
pub mod render;
pub mod table;

// Re-exports for ergonomics
pub use driver::{ENTROPY_CAVEAT, ReportConfig, ReportDriver};
pub use error::{GridError, ReportError, ReportResult};
pub use evaluate::{ReportRow, TableData, evaluate_table};
pub use grid::GridSpec;
pub use render::{SENTINEL, render_table};
pub use table::{Align, AxisSpec, ColumnQuery, ColumnSpec, NumberStyle, RowState, TableSpec};
