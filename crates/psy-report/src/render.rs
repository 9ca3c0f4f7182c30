//! Fixed-width text rendering.
//!
//! The printed block is:
//!
//! ```text
//! <title>
//! <subtitle, if any>
//! ==============================
//! <axis header><column headers>
//! <axis unit>  <column units>
//! ------------------------------
//! <one line per grid point>
//! ==============================
//! ```
//!
//! Cells are padded to their declared width but never truncated: a value
//! wider than its column is printed in full and the line grows. Formatting
//! is purely textual; the underlying values are not rounded or changed.

use crate::error::{ReportError, ReportResult};
use crate::evaluate::TableData;
use crate::table::{Align, NumberStyle, TableSpec};

/// Rendered in place of a cell whose evaluation failed.
pub const SENTINEL: &str = "--";

/// Render one evaluated table as a text block ending in a newline.
///
/// Fails only on a shape mismatch between the table definition and the
/// evaluated data, which indicates a bug rather than a data condition.
pub fn render_table(spec: &TableSpec, data: &TableData) -> ReportResult<String> {
    check_shape(spec, data)?;

    let width = spec.width();
    let mut out = String::new();

    push_line(&mut out, &spec.title);
    if let Some(subtitle) = &spec.subtitle {
        push_line(&mut out, subtitle);
    }
    push_line(&mut out, &"=".repeat(width));

    let mut header = pad(spec.axis.header, spec.axis.width, spec.axis.align);
    let mut units = pad(spec.axis.unit, spec.axis.width, spec.axis.align);
    for (column, unit) in spec.columns.iter().zip(&data.units) {
        header.push_str(&pad(&column.header, column.width, column.align));
        units.push_str(&pad(unit, column.width, column.align));
    }
    push_line(&mut out, &header);
    push_line(&mut out, &units);
    push_line(&mut out, &"-".repeat(width));

    for row in &data.rows {
        let axis_text = format_number(row.axis + spec.axis.display_offset, spec.axis.style);
        let mut line = pad(&axis_text, spec.axis.width, spec.axis.align);
        for (column, cell) in spec.columns.iter().zip(&row.cells) {
            let text = match cell {
                Some(value) => format_number(*value, column.style),
                None => SENTINEL.to_string(),
            };
            line.push_str(&pad(&text, column.width, column.align));
        }
        push_line(&mut out, &line);
    }

    push_line(&mut out, &"=".repeat(width));

    Ok(out)
}

fn check_shape(spec: &TableSpec, data: &TableData) -> ReportResult<()> {
    let expected = spec.columns.len();
    if data.units.len() != expected {
        return Err(ReportError::ColumnMismatch {
            section: spec.id.clone(),
            expected,
            actual: data.units.len(),
        });
    }
    for row in &data.rows {
        if row.cells.len() != expected {
            return Err(ReportError::ColumnMismatch {
                section: spec.id.clone(),
                expected,
                actual: row.cells.len(),
            });
        }
    }
    Ok(())
}

// Lines never carry trailing padding
fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Pad `text` to `width`, left or right aligned. Text wider than the field
/// is returned unchanged.
pub fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

/// Format a value per the column's number style.
pub fn format_number(value: f64, style: NumberStyle) -> String {
    match style {
        NumberStyle::Fixed { precision } => format!("{value:.precision$}"),
        NumberStyle::Scientific { precision } => format_scientific(value, precision),
    }
}

/// Scientific notation with an explicit exponent sign and at least two
/// exponent digits, e.g. `-2.5361755222e-05`. The std `{:e}` formatter
/// writes `e-5`, which does not line up in 20-character columns.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // NaN and infinities carry no exponent
        None => raw,
    }
}
