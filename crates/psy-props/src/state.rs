//! Humid-air state inputs.

use psy_core::units::{Pressure, Temperature};

use crate::error::{SourceError, SourceResult};

/// A fully determining humid-air state.
///
/// Dry-bulb temperature and total pressure are always given; the third
/// variable fixes the moisture content. Inputs are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    /// Saturated moist air (relative humidity of one).
    Saturated { t: Temperature, p: Pressure },
    /// Fixed relative humidity on the 0..=1 scale.
    RelHumidity { t: Temperature, p: Pressure, r: f64 },
    /// Fixed humidity ratio [kg water per kg dry air].
    HumidityRatio { t: Temperature, p: Pressure, w: f64 },
}

impl StateInput {
    /// Saturated air at the given dry-bulb temperature and pressure.
    pub fn saturated(t: Temperature, p: Pressure) -> Self {
        StateInput::Saturated { t, p }
    }

    /// Moist air at a fixed relative humidity (0..=1).
    pub fn at_rel_humidity(t: Temperature, p: Pressure, r: f64) -> Self {
        StateInput::RelHumidity { t, p, r }
    }

    /// Moist air at a fixed humidity ratio [kg_w/kg_da].
    pub fn at_humidity_ratio(t: Temperature, p: Pressure, w: f64) -> Self {
        StateInput::HumidityRatio { t, p, w }
    }

    /// Dry-bulb temperature.
    pub fn t(&self) -> Temperature {
        match self {
            StateInput::Saturated { t, .. }
            | StateInput::RelHumidity { t, .. }
            | StateInput::HumidityRatio { t, .. } => *t,
        }
    }

    /// Total pressure.
    pub fn p(&self) -> Pressure {
        match self {
            StateInput::Saturated { p, .. }
            | StateInput::RelHumidity { p, .. }
            | StateInput::HumidityRatio { p, .. } => *p,
        }
    }

    /// Reject non-finite or non-physical inputs before they reach a backend.
    pub fn validate(&self) -> SourceResult<()> {
        let t_k = self.t().value;
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(SourceError::InvalidState {
                what: "dry-bulb temperature must be positive and finite",
            });
        }
        let p_pa = self.p().value;
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(SourceError::InvalidState {
                what: "total pressure must be positive and finite",
            });
        }
        match self {
            StateInput::RelHumidity { r, .. } if !r.is_finite() || *r < 0.0 || *r > 1.0 => {
                Err(SourceError::InvalidState {
                    what: "relative humidity must lie in 0..=1",
                })
            }
            StateInput::HumidityRatio { w, .. } if !w.is_finite() || *w < 0.0 => {
                Err(SourceError::InvalidState {
                    what: "humidity ratio must be non-negative and finite",
                })
            }
            _ => Ok(()),
        }
    }
}
