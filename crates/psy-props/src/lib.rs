//! psy-props: humid-air property access for psychrotab.
//!
//! Provides:
//! - Property identifier catalog (psychrometric + auxiliary model quantities)
//! - Humid-air state inputs with validation
//! - PropertySource trait for property engines
//! - CoolProp backend (via rfluids' native API)
//! - Scripted backend for engine-free tests
//!
//! # Architecture
//!
//! The `PropertySource` trait isolates the report crates from the engine
//! binding. CoolProp is the production backend; the scripted source stands
//! in wherever determinism matters more than physics.
//!
//! # Example
//!
//! ```no_run
//! use psy_core::units::{c, kpa};
//! use psy_props::{CoolPropSource, Property, PropertySource, StateInput};
//!
//! let source = CoolPropSource::new();
//! let state = StateInput::saturated(c(20.0), kpa(101.325));
//! let w = source.evaluate(&state, Property::HumidityRatio)?;
//! println!("Ws = {w} kg_w/kg_da");
//! # Ok::<(), psy_props::SourceError>(())
//! ```

pub mod coolprop;
pub mod error;
pub mod property;
pub mod scripted;
pub mod source;
pub mod state;

// Re-exports for ergonomics
pub use coolprop::CoolPropSource;
pub use error::{SourceError, SourceResult};
pub use property::{AuxProperty, Property};
pub use scripted::ScriptedSource;
pub use source::PropertySource;
pub use state::StateInput;
