//! Declarative table model.
//!
//! A [`TableSpec`] says everything about one printed table: its axis, what
//! each column asks the property source, and how the answers are formatted.
//! Evaluation and rendering live in [`crate::evaluate`] and
//! [`crate::render`]; this module is pure data.

use psy_core::units::{Pressure, Temperature};
use psy_props::{AuxProperty, Property};

use crate::grid::GridSpec;

/// Horizontal alignment inside a fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Numeric rendering for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// `format!("{value:.precision$}")`
    Fixed { precision: usize },
    /// Normalized scientific notation with a two-digit exponent,
    /// e.g. `-2.5361755222e-05`.
    Scientific { precision: usize },
}

/// What a column asks the property source for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnQuery {
    /// A humid-air state property at the row's state.
    State(Property),
    /// An auxiliary quantity at the given pressure. The temperature and
    /// humidity ratio arguments come from the row state.
    Aux { property: AuxProperty, p: Pressure },
}

/// How each axis value becomes a thermodynamic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowState {
    /// Axis is temperature in Kelvin; state is saturated air at `p`.
    SaturatedAir { p: Pressure },
    /// Axis is humidity ratio; state is moist air at fixed `t` and `p`.
    MoistAir { t: Temperature, p: Pressure },
    /// Axis is temperature in Kelvin with no humid-air state. Only `Aux`
    /// columns can be answered; a `State` column renders as a sentinel.
    TemperatureOnly,
}

/// The leftmost (axis) column.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub header: &'static str,
    pub unit: &'static str,
    pub grid: GridSpec,
    /// Added to the axis value for display only. Temperature axes generate
    /// Kelvin and display Celsius, so this is usually `-273.15`.
    pub display_offset: f64,
    pub width: usize,
    pub align: Align,
    pub style: NumberStyle,
}

/// One value column.
///
/// The unit string is deliberately absent: units are supplied by the
/// property source at evaluation time, never hardcoded per table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub header: String,
    pub query: ColumnQuery,
    pub width: usize,
    pub align: Align,
    pub style: NumberStyle,
}

impl ColumnSpec {
    pub fn new(
        header: impl Into<String>,
        query: ColumnQuery,
        width: usize,
        align: Align,
        style: NumberStyle,
    ) -> Self {
        ColumnSpec {
            header: header.into(),
            query,
            width,
            align,
            style,
        }
    }
}

/// A complete table definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    /// Stable identifier used to select the table from the CLI.
    pub id: String,
    pub title: String,
    /// Optional second title line, e.g. the fixed dry-bulb temperature.
    pub subtitle: Option<String>,
    pub axis: AxisSpec,
    pub columns: Vec<ColumnSpec>,
    pub row_state: RowState,
}

impl TableSpec {
    /// Total printed width: the axis column plus every value column.
    pub fn width(&self) -> usize {
        self.axis.width + self.columns.iter().map(|c| c.width).sum::<usize>()
    }
}
