//! psy-core: shared foundation for psychrotab.
//!
//! Contains:
//! - units (uom SI types + constructors for the quantities the tables use)
//! - numeric (tolerances + float comparison helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
