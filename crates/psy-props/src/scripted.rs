//! Scripted property source for exercising the report plumbing.
//!
//! The real engine needs its native library and is the slowest part of a
//! report run. For tests of grids, rendering, and the driver's failure
//! handling, a deterministic stand-in is enough: evaluation is delegated
//! to caller-provided closures, so exact cell values and failure patterns
//! can be staged. This is NOT a physical model.

use std::fmt;

use psy_core::units::{Pressure, Temperature};

use crate::error::SourceResult;
use crate::property::{AuxProperty, Property};
use crate::source::PropertySource;
use crate::state::StateInput;

type StateEval = dyn Fn(&StateInput, Property) -> SourceResult<f64> + Send + Sync;
type AuxEval = dyn Fn(AuxProperty, Temperature, Pressure, f64) -> SourceResult<f64> + Send + Sync;

/// Deterministic, engine-free property source.
pub struct ScriptedSource {
    name: &'static str,
    state_eval: Box<StateEval>,
    aux_eval: Box<AuxEval>,
}

impl ScriptedSource {
    /// Build a source from one closure per query channel.
    pub fn new(
        state_eval: impl Fn(&StateInput, Property) -> SourceResult<f64> + Send + Sync + 'static,
        aux_eval: impl Fn(AuxProperty, Temperature, Pressure, f64) -> SourceResult<f64>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name: "scripted",
            state_eval: Box::new(state_eval),
            aux_eval: Box::new(aux_eval),
        }
    }

    /// A source whose every query answers with the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(move |_, _| Ok(value), move |_, _, _, _| Ok(value))
    }
}

impl fmt::Debug for ScriptedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PropertySource for ScriptedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, state: &StateInput, property: Property) -> SourceResult<f64> {
        state.validate()?;
        (self.state_eval)(state, property)
    }

    fn evaluate_aux(
        &self,
        property: AuxProperty,
        t: Temperature,
        p: Pressure,
        w: f64,
    ) -> SourceResult<f64> {
        (self.aux_eval)(property, t, p, w)
    }
}
