//! CoolProp-backed property source.
//!
//! Psychrometric properties go through the humid-air routine (`HAPropsSI`);
//! auxiliary model quantities are derived from the pure-fluid interface
//! (`PropsSI`) for air and water. Both are reached through rfluids' native
//! API with the engine's documented string keys.
//!
//! Engine outputs are SI (Pa, J, K); this adapter converts to the kSI
//! report convention declared by the property catalog.

use std::sync::Mutex;

use rfluids::native::CoolProp;

use psy_core::units::constants::CELSIUS_OFFSET_K;
use psy_core::units::{Pressure, Temperature};

use crate::error::{SourceError, SourceResult};
use crate::property::{AuxProperty, Property};
use crate::source::PropertySource;
use crate::state::StateInput;

/// Molar mass of water [kg/mol], matching the engine's water model.
const MOLAR_MASS_WATER_KG_MOL: f64 = 0.018_015_268;

/// Property source backed by CoolProp.
///
/// The humid-air routines keep internal iteration state and are not
/// re-entrant, so every native call goes through one lock. That also makes
/// the source safely `Sync`.
pub struct CoolPropSource {
    call_lock: Mutex<()>,
}

impl CoolPropSource {
    /// Create a new CoolProp source.
    pub fn new() -> Self {
        Self {
            call_lock: Mutex::new(()),
        }
    }

    /// Run one native call while holding the interop lock.
    fn guarded<T>(&self, call: impl FnOnce() -> T) -> T {
        let _guard = self
            .call_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        call()
    }

    /// `HAPropsSI(output, "T", t_k, "P", p_pa, third_key, third_value)`.
    fn humid_air(
        &self,
        output: &'static str,
        t_k: f64,
        p_pa: f64,
        third_key: &'static str,
        third_value: f64,
    ) -> SourceResult<f64> {
        let value = self
            .guarded(|| CoolProp::ha_props_si(output, "T", t_k, "P", p_pa, third_key, third_value))
            .map_err(|e| SourceError::Backend {
                message: format!(
                    "HAPropsSI({output}) at T={t_k} K, P={p_pa} Pa, {third_key}={third_value}: {e}"
                ),
            })?;
        ensure_finite(value, output)
    }

    /// `PropsSI(output, key1, value1, key2, value2, fluid)`.
    fn pure_fluid(
        &self,
        output: &'static str,
        key1: &'static str,
        value1: f64,
        key2: &'static str,
        value2: f64,
        fluid: &'static str,
    ) -> SourceResult<f64> {
        let value = self
            .guarded(|| CoolProp::props_si(output, key1, value1, key2, value2, fluid))
            .map_err(|e| SourceError::Backend {
                message: format!(
                    "PropsSI({output}) for {fluid} at {key1}={value1}, {key2}={value2}: {e}"
                ),
            })?;
        ensure_finite(value, output)
    }

    /// Virial output for dry air [molar units, as the engine reports them].
    fn air_virial(&self, output: &'static str, t_k: f64, p_pa: f64) -> SourceResult<f64> {
        self.pure_fluid(output, "T", t_k, "P", p_pa, "Air")
    }

    /// Virial output for water.
    ///
    /// Virial coefficients depend on temperature only; the saturated-vapor
    /// line is simply a state the equation of state accepts at every
    /// tabulated temperature above the triple point.
    fn water_virial(&self, output: &'static str, t_k: f64) -> SourceResult<f64> {
        self.pure_fluid(output, "T", t_k, "Q", 1.0, "Water")
    }

    /// Water saturation pressure [Pa].
    fn water_saturation_pressure(&self, t_k: f64) -> SourceResult<f64> {
        self.pure_fluid("P", "T", t_k, "Q", 0.0, "Water")
    }

    /// Enhancement factor from the saturated water mole fraction:
    /// `f(T, p) = psi_w_sat * p / p_ws(T)`.
    fn enhancement_factor(&self, t_k: f64, p_pa: f64) -> SourceResult<f64> {
        let psi_w_sat = self.humid_air("psi_w", t_k, p_pa, "R", 1.0)?;
        let p_ws_pa = self.water_saturation_pressure(t_k)?;
        if p_ws_pa <= 0.0 {
            return Err(SourceError::NonFinite {
                what: "water saturation pressure",
            });
        }
        Ok(psi_w_sat * p_pa / p_ws_pa)
    }
}

impl Default for CoolPropSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySource for CoolPropSource {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn evaluate(&self, state: &StateInput, property: Property) -> SourceResult<f64> {
        state.validate()?;
        let t_k = state.t().value;
        let p_pa = state.p().value;
        let (third_key, third_value) = match state {
            StateInput::Saturated { .. } => ("R", 1.0),
            StateInput::RelHumidity { r, .. } => ("R", *r),
            StateInput::HumidityRatio { w, .. } => ("W", *w),
        };
        let raw = self.humid_air(humid_air_key(property), t_k, p_pa, third_key, third_value)?;
        Ok(to_report_units(property, raw))
    }

    fn evaluate_aux(
        &self,
        property: AuxProperty,
        t: Temperature,
        p: Pressure,
        w: f64,
    ) -> SourceResult<f64> {
        let t_k = t.value;
        let p_pa = p.value;
        if !t_k.is_finite() || t_k <= 0.0 || !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(SourceError::InvalidState {
                what: "auxiliary query needs positive, finite temperature and pressure",
            });
        }
        if !w.is_finite() || w < 0.0 {
            return Err(SourceError::InvalidState {
                what: "humidity ratio must be non-negative and finite",
            });
        }

        match property {
            AuxProperty::Baa => self.air_virial("Bvirial", t_k, p_pa),
            AuxProperty::Caaa => self.air_virial("Cvirial", t_k, p_pa),
            AuxProperty::BaaDt => self.air_virial("dBvirial_dT", t_k, p_pa),
            AuxProperty::CaaaDt => self.air_virial("dCvirial_dT", t_k, p_pa),
            AuxProperty::Bww => self.water_virial("Bvirial", t_k),
            AuxProperty::Cwww => self.water_virial("Cvirial", t_k),
            AuxProperty::BwwDt => self.water_virial("dBvirial_dT", t_k),
            AuxProperty::CwwwDt => self.water_virial("dCvirial_dT", t_k),
            AuxProperty::Baw
            | AuxProperty::Caaw
            | AuxProperty::Caww
            | AuxProperty::BawDt
            | AuxProperty::CaawDt
            | AuxProperty::CawwDt => Err(SourceError::Unsupported {
                what: "air-water cross virial coefficients are not exposed by the engine interface",
            }),
            AuxProperty::SaturationPressure => {
                self.water_saturation_pressure(t_k).map(|p_pa| p_pa / 1000.0)
            }
            AuxProperty::HenryConstant => Err(SourceError::Unsupported {
                what: "Henry constant is not exposed by the engine interface",
            }),
            AuxProperty::IsothermalCompressibility => {
                self.pure_fluid("ISOTHERMAL_COMPRESSIBILITY", "T", t_k, "P", p_pa, "Water")
            }
            AuxProperty::SaturatedMolarVolume => {
                let rho = self.pure_fluid("D", "T", t_k, "Q", 0.0, "Water")?;
                if rho <= 0.0 {
                    return Err(SourceError::NonFinite {
                        what: "saturated liquid density",
                    });
                }
                Ok(MOLAR_MASS_WATER_KG_MOL / rho)
            }
            AuxProperty::EnhancementFactor => self.enhancement_factor(t_k, p_pa),
        }
    }
}

/// `HAPropsSI` output key for a report property.
fn humid_air_key(property: Property) -> &'static str {
    match property {
        Property::HumidityRatio => "W",
        Property::WetBulb => "Twb",
        Property::SpecificVolume => "V",
        Property::Enthalpy => "H",
        Property::Entropy => "S",
        Property::RelHumidity => "R",
    }
}

/// Convert an SI humid-air output to the kSI report convention.
fn to_report_units(property: Property, value: f64) -> f64 {
    match property {
        Property::WetBulb => value - CELSIUS_OFFSET_K,
        Property::Enthalpy | Property::Entropy => value / 1000.0,
        Property::RelHumidity => value * 100.0,
        Property::HumidityRatio | Property::SpecificVolume => value,
    }
}

fn ensure_finite(value: f64, what: &'static str) -> SourceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SourceError::NonFinite { what })
    }
}
