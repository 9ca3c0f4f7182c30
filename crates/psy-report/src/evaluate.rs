//! Table evaluation with per-cell failure isolation.
//!
//! A property engine refusing one state point must not take the table down
//! with it: the cell is recorded as `None`, the failure is logged, and the
//! sweep continues. Only a bad axis definition aborts the whole table.

use psy_core::units::k;
use psy_props::{PropertySource, SourceError, SourceResult, StateInput};

use crate::error::GridError;
use crate::table::{ColumnQuery, RowState, TableSpec};

/// One evaluated table row: the axis value (in grid units, before any
/// display offset) and one entry per column. `None` marks a failed cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub axis: f64,
    pub cells: Vec<Option<f64>>,
}

/// All rows of one table, the per-column unit strings reported by the
/// source, and a failure tally for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    pub units: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub num_failed: usize,
}

/// Evaluate every cell of `spec` against `source`.
///
/// Returns `Err` only when the axis grid cannot be generated; evaluation
/// failures are isolated per cell and reported through `num_failed`.
pub fn evaluate_table(
    spec: &TableSpec,
    source: &dyn PropertySource,
) -> Result<TableData, GridError> {
    let axis_values = spec.axis.grid.generate()?;

    // Units come from the source, not the table definition
    let units = spec
        .columns
        .iter()
        .map(|column| match column.query {
            ColumnQuery::State(property) => source.unit(property).to_string(),
            ColumnQuery::Aux { property, .. } => source.aux_unit(property).to_string(),
        })
        .collect();

    let mut rows = Vec::with_capacity(axis_values.len());
    let mut num_failed = 0usize;

    for axis in axis_values {
        let mut cells = Vec::with_capacity(spec.columns.len());
        for column in &spec.columns {
            match evaluate_cell(source, spec.row_state, axis, column.query) {
                Ok(value) => cells.push(Some(value)),
                Err(err) => {
                    tracing::warn!(
                        table = %spec.id,
                        column = %column.header,
                        axis,
                        error = %err,
                        "cell evaluation failed"
                    );
                    num_failed += 1;
                    cells.push(None);
                }
            }
        }
        rows.push(ReportRow { axis, cells });
    }

    if num_failed > 0 {
        tracing::debug!(table = %spec.id, num_failed, "table evaluated with failed cells");
    }

    Ok(TableData {
        units,
        rows,
        num_failed,
    })
}

fn evaluate_cell(
    source: &dyn PropertySource,
    row_state: RowState,
    axis: f64,
    query: ColumnQuery,
) -> SourceResult<f64> {
    match query {
        ColumnQuery::State(property) => {
            let state = state_at(row_state, axis)?;
            source.evaluate(&state, property)
        }
        ColumnQuery::Aux { property, p } => match row_state {
            RowState::SaturatedAir { .. } | RowState::TemperatureOnly => {
                source.evaluate_aux(property, k(axis), p, 0.0)
            }
            RowState::MoistAir { t, .. } => source.evaluate_aux(property, t, p, axis),
        },
    }
}

fn state_at(row_state: RowState, axis: f64) -> SourceResult<StateInput> {
    match row_state {
        RowState::SaturatedAir { p } => Ok(StateInput::saturated(k(axis), p)),
        RowState::MoistAir { t, p } => Ok(StateInput::at_humidity_ratio(t, p, axis)),
        RowState::TemperatureOnly => Err(SourceError::InvalidState {
            what: "state property requested on a temperature-only axis",
        }),
    }
}
