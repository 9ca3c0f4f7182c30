//! Property-source trait: the seam between the report and an engine.

use psy_core::units::{Pressure, Temperature};

use crate::error::SourceResult;
use crate::property::{AuxProperty, Property};
use crate::state::StateInput;

/// A humid-air property engine as seen by the report driver.
///
/// Implementations must be thread-safe (Send + Sync). Returned values are
/// in the report convention the `unit`/`aux_unit` labels declare; the
/// adapter owns any scaling between engine units and report units.
pub trait PropertySource: Send + Sync {
    /// Backend name (for logs and the report preamble).
    fn name(&self) -> &str;

    /// Evaluate one psychrometric property at the given state.
    fn evaluate(&self, state: &StateInput, property: Property) -> SourceResult<f64>;

    /// Unit label printed under a psychrometric column header.
    fn unit(&self, property: Property) -> &'static str {
        property.unit()
    }

    /// Evaluate one auxiliary model quantity at a temperature, pressure,
    /// and humidity ratio.
    fn evaluate_aux(
        &self,
        property: AuxProperty,
        t: Temperature,
        p: Pressure,
        w: f64,
    ) -> SourceResult<f64>;

    /// Unit label printed under an auxiliary column header.
    fn aux_unit(&self, property: AuxProperty) -> &'static str {
        property.unit()
    }
}
