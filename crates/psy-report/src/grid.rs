//! Table axis grids.
//!
//! Grids are generated in engine units (Kelvin for temperature axes). The
//! reference tables state their axes in Celsius and shift afterwards, so
//! both variants carry an additive offset applied once the base values are
//! laid out.

use psy_core::units::constants::CELSIUS_OFFSET_K;

use crate::error::GridError;

/// How one table axis lays out its values.
#[derive(Debug, Clone, PartialEq)]
pub enum GridSpec {
    /// `count` evenly spaced values from `first` to `last` inclusive, then
    /// `offset` added to every value.
    Linear {
        first: f64,
        last: f64,
        count: usize,
        offset: f64,
    },
    /// A literal value list used in order, plus `offset`.
    Explicit { values: Vec<f64>, offset: f64 },
}

impl GridSpec {
    /// Evenly spaced grid with no offset.
    pub fn linear(first: f64, last: f64, count: usize) -> Self {
        GridSpec::Linear {
            first,
            last,
            count,
            offset: 0.0,
        }
    }

    /// Evenly spaced Celsius grid shifted to Kelvin.
    pub fn celsius_linear(first_c: f64, last_c: f64, count: usize) -> Self {
        GridSpec::Linear {
            first: first_c,
            last: last_c,
            count,
            offset: CELSIUS_OFFSET_K,
        }
    }

    /// Literal value list with no offset.
    pub fn explicit(values: Vec<f64>) -> Self {
        GridSpec::Explicit {
            values,
            offset: 0.0,
        }
    }

    /// Literal Celsius list shifted to Kelvin.
    pub fn celsius_explicit(values: Vec<f64>) -> Self {
        GridSpec::Explicit {
            values,
            offset: CELSIUS_OFFSET_K,
        }
    }

    /// Generate the axis values.
    pub fn generate(&self) -> Result<Vec<f64>, GridError> {
        match self {
            GridSpec::Linear {
                first,
                last,
                count,
                offset,
            } => {
                if !first.is_finite() || !last.is_finite() {
                    return Err(GridError::NonFinite {
                        what: "linear grid bound",
                    });
                }
                if !offset.is_finite() {
                    return Err(GridError::NonFinite {
                        what: "grid offset",
                    });
                }
                if *count <= 1 {
                    return Err(GridError::InvalidCount { count: *count });
                }

                let mut points = Vec::with_capacity(*count);
                let delta = (last - first) / (*count - 1) as f64;
                for i in 0..*count {
                    points.push(first + i as f64 * delta);
                }
                // Ensure exact endpoint before the shift
                points[*count - 1] = *last;

                Ok(points.into_iter().map(|v| v + offset).collect())
            }
            GridSpec::Explicit { values, offset } => {
                if values.is_empty() {
                    return Err(GridError::EmptyGrid);
                }
                if !offset.is_finite() {
                    return Err(GridError::NonFinite {
                        what: "grid offset",
                    });
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(GridError::NonFinite {
                        what: "listed grid value",
                    });
                }
                Ok(values.iter().map(|v| v + offset).collect())
            }
        }
    }
}
