//! Report orchestration.
//!
//! The driver owns the table catalog: which tables exist, in what order,
//! at which fixed pressures and temperatures. Table families that differ
//! only in a fixed parameter (the hot-air tables, the pressure sweeps) are
//! built by one parametrized constructor each, so adding a pressure level
//! or a dry-bulb temperature is a configuration change.

use std::io;

use psy_core::units::constants::{CELSIUS_OFFSET_K, ONE_ATMOSPHERE_KPA, WATER_TRIPLE_POINT_K};
use psy_core::units::{Pressure, c, kpa};
use psy_props::{AuxProperty, Property, PropertySource};

use crate::error::{ReportError, ReportResult};
use crate::evaluate::evaluate_table;
use crate::grid::GridSpec;
use crate::render::render_table;
use crate::table::{Align, AxisSpec, ColumnQuery, ColumnSpec, NumberStyle, RowState, TableSpec};

/// Known defect in the upstream property engine, reproduced as a caveat in
/// the report preamble rather than silently corrected.
pub const ENTROPY_CAVEAT: &str =
    "Warning:: Entropy at high humidity ratios does not seem to be correct";

/// Humidity-ratio grids by pressure tier. The engine's valid moisture
/// domain shrinks at high pressure and moderate temperature, so those
/// tables stop early.
const W_GRID_STANDARD: [f64; 12] = [
    0.0, 0.05, 0.1, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80, 0.90, 1.0,
];
const W_GRID_DENSE: [f64; 14] = [
    0.0, 0.05, 0.1, 0.15, 0.20, 0.25, 0.30, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0,
];
const W_GRID_NARROW: [f64; 7] = [0.0, 0.05, 0.1, 0.15, 0.20, 0.25, 0.30];
const W_GRID_MINIMAL: [f64; 3] = [0.0, 0.05, 0.1];

/// Fixed parameters of a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Pressure of the saturation tables [kPa].
    pub atmospheric_kpa: f64,
    /// Pressure levels of the hot-air table families [kPa].
    pub hot_air_pressures_kpa: Vec<f64>,
    /// Dry-bulb temperatures of the hot-air table families [C]. The first
    /// family is numbered A.8, the next A.9, and so on.
    pub hot_air_temperatures_c: Vec<f64>,
    /// Pressure levels of the compressibility and molar-volume sweeps [kPa].
    pub water_pressures_kpa: Vec<f64>,
    /// Pressure levels of the enhancement-factor sweep [kPa].
    pub enhancement_pressures_kpa: Vec<f64>,
    /// Pressure at which the coefficient and water-profile tables are stated [kPa].
    pub aux_reference_kpa: f64,
    /// Print the entropy caveat in the report preamble.
    pub entropy_caveat: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            atmospheric_kpa: ONE_ATMOSPHERE_KPA,
            hot_air_pressures_kpa: vec![ONE_ATMOSPHERE_KPA, 1000.0, 2000.0, 5000.0, 10_000.0],
            hot_air_temperatures_c: vec![200.0, 320.0],
            water_pressures_kpa: vec![ONE_ATMOSPHERE_KPA, 200.0, 500.0, 1000.0],
            enhancement_pressures_kpa: vec![ONE_ATMOSPHERE_KPA, 200.0, 500.0, 1000.0, 10_000.0],
            aux_reference_kpa: 100.0,
            entropy_caveat: true,
        }
    }
}

impl ReportConfig {
    /// Humidity-ratio grid for a hot-air table at the given dry-bulb
    /// temperature and pressure.
    pub fn humidity_grid(&self, t_c: f64, p_kpa: f64) -> Vec<f64> {
        if p_kpa < 5000.0 {
            W_GRID_STANDARD.to_vec()
        } else if t_c >= 250.0 {
            W_GRID_DENSE.to_vec()
        } else if p_kpa < 10_000.0 {
            W_GRID_NARROW.to_vec()
        } else {
            W_GRID_MINIMAL.to_vec()
        }
    }
}

/// Builds and prints the validation report against one property source.
#[derive(Debug)]
pub struct ReportDriver<S> {
    source: S,
    config: ReportConfig,
}

impl<S: PropertySource> ReportDriver<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ReportConfig::default())
    }

    pub fn with_config(source: S, config: ReportConfig) -> Self {
        ReportDriver { source, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Section ids in report order.
    pub fn section_ids(&self) -> Vec<String> {
        self.tables().into_iter().map(|spec| spec.id).collect()
    }

    /// The full table catalog in report order.
    pub fn tables(&self) -> Vec<TableSpec> {
        let mut specs = vec![
            self.saturation_table(
                "A.6.1",
                "Psychrometric Properties of Moist Air at 0C and Below",
                GridSpec::celsius_linear(-60.0, 0.0, 13),
                [7, 4, 3, 4],
            ),
            self.saturation_table(
                "A.6.2",
                "Psychrometric Properties of Moist Air at 0C and Above",
                GridSpec::celsius_linear(0.0, 90.0, 19),
                [7, 3, 2, 4],
            ),
        ];

        for (family, &t_c) in self.config.hot_air_temperatures_c.iter().enumerate() {
            for (index, &p_kpa) in self.config.hot_air_pressures_kpa.iter().enumerate() {
                specs.push(self.hot_air_table(8 + family, 1 + index, t_c, p_kpa));
            }
        }

        specs.push(self.coefficient_table(
            "virial-pure",
            "Pure fluid Virial Coefficients",
            &[
                AuxProperty::Baa,
                AuxProperty::Caaa,
                AuxProperty::Bww,
                AuxProperty::Cwww,
            ],
        ));
        specs.push(self.coefficient_table(
            "virial-cross",
            "Cross Virial Coefficients",
            &[AuxProperty::Baw, AuxProperty::Caaw, AuxProperty::Caww],
        ));
        specs.push(self.coefficient_table(
            "virial-pure-dt",
            "Pure fluid Virial Coefficient Derivatives",
            &[
                AuxProperty::BaaDt,
                AuxProperty::CaaaDt,
                AuxProperty::BwwDt,
                AuxProperty::CwwwDt,
            ],
        ));
        specs.push(self.coefficient_table(
            "virial-cross-dt",
            "Cross Virial Coefficient Derivatives",
            &[AuxProperty::BawDt, AuxProperty::CaawDt, AuxProperty::CawwDt],
        ));

        specs.push(self.water_profile_table(
            "p-ws",
            "Water saturation pressure p_ws [kPa]",
            AuxProperty::SaturationPressure,
            GridSpec::celsius_linear(-60.0, 300.0, 13),
        ));
        specs.push(self.water_profile_table(
            "beta-h",
            "Henry Constant (zero for T < 273.15 K)",
            AuxProperty::HenryConstant,
            GridSpec::Linear {
                first: 0.0,
                last: 300.0,
                count: 11,
                offset: WATER_TRIPLE_POINT_K,
            },
        ));

        specs.push(self.pressure_sweep_table(
            "kt",
            "Isothermal Compressibility of water (kT) [1/Pa]",
            AuxProperty::IsothermalCompressibility,
            &self.config.water_pressures_kpa,
            GridSpec::celsius_linear(-60.0, 300.0, 13),
        ));
        specs.push(self.pressure_sweep_table(
            "vbar-ws",
            "Molar volume of saturated liquid water or ice (vbar_ws) [m^3/mol_H2O]",
            AuxProperty::SaturatedMolarVolume,
            &self.config.water_pressures_kpa,
            GridSpec::celsius_linear(-60.0, 300.0, 13),
        ));
        specs.push(self.pressure_sweep_table(
            "f-factor",
            "Enhancement factor (f) [no units]",
            AuxProperty::EnhancementFactor,
            &self.config.enhancement_pressures_kpa,
            GridSpec::celsius_explicit(vec![
                -60.0, -40.0, -20.0, 0.0, 40.0, 80.0, 120.0, 160.0, 200.0, 250.0, 300.0, 350.0,
            ]),
        ));

        specs
    }

    /// Print the whole report: preamble, then every table in catalog order.
    pub fn write_report(&self, out: &mut dyn io::Write) -> ReportResult<()> {
        writeln!(
            out,
            "Humid air property validation tables [{}]",
            self.source.name()
        )?;
        writeln!(out)?;
        if self.config.entropy_caveat {
            tracing::warn!("{ENTROPY_CAVEAT}");
            writeln!(out, "{ENTROPY_CAVEAT}")?;
            writeln!(out)?;
        }
        self.write_tables(&self.tables(), out)
    }

    /// Print one section by id.
    pub fn write_section(&self, id: &str, out: &mut dyn io::Write) -> ReportResult<()> {
        let spec = self
            .tables()
            .into_iter()
            .find(|spec| spec.id == id)
            .ok_or_else(|| ReportError::UnknownSection { id: id.to_string() })?;
        self.write_tables(std::slice::from_ref(&spec), out)
    }

    fn write_tables(&self, specs: &[TableSpec], out: &mut dyn io::Write) -> ReportResult<()> {
        let mut first = true;
        for spec in specs {
            // A malformed grid spoils its table, not the run
            let data = match evaluate_table(spec, &self.source) {
                Ok(data) => data,
                Err(err) => {
                    tracing::error!(table = %spec.id, error = %err, "skipping table");
                    continue;
                }
            };
            if !first {
                writeln!(out)?;
            }
            out.write_all(render_table(spec, &data)?.as_bytes())?;
            tracing::debug!(table = %spec.id, rows = data.rows.len(), "table rendered");
            first = false;
        }
        Ok(())
    }

    fn saturation_table(
        &self,
        id: &str,
        title: &str,
        grid: GridSpec,
        precisions: [usize; 4],
    ) -> TableSpec {
        let [w_prec, v_prec, h_prec, s_prec] = precisions;
        TableSpec {
            id: id.to_string(),
            title: format!("{id} {title}"),
            subtitle: Some(format!("Saturated air at {} kPa", self.config.atmospheric_kpa)),
            axis: AxisSpec {
                header: "T",
                unit: "C",
                grid,
                display_offset: -CELSIUS_OFFSET_K,
                width: 8,
                align: Align::Right,
                style: NumberStyle::Fixed { precision: 0 },
            },
            columns: vec![
                state_column("Ws", Property::HumidityRatio, w_prec),
                state_column("v", Property::SpecificVolume, v_prec),
                state_column("h", Property::Enthalpy, h_prec),
                state_column("s", Property::Entropy, s_prec),
            ],
            row_state: RowState::SaturatedAir {
                p: kpa(self.config.atmospheric_kpa),
            },
        }
    }

    fn hot_air_table(&self, family: usize, index: usize, t_c: f64, p_kpa: f64) -> TableSpec {
        let id = format!("A.{family}.{index}");
        TableSpec {
            title: format!("{id} Psychrometric Properties of Moist Air at {p_kpa} kPa"),
            id,
            subtitle: Some(format!("Dry Bulb temperature of {t_c}C")),
            axis: AxisSpec {
                header: "W",
                unit: "kgw/kg_da",
                grid: GridSpec::explicit(self.config.humidity_grid(t_c, p_kpa)),
                display_offset: 0.0,
                width: 10,
                align: Align::Right,
                style: NumberStyle::Fixed { precision: 2 },
            },
            columns: vec![
                state_column("Twb", Property::WetBulb, 2),
                state_column("v", Property::SpecificVolume, 3),
                state_column("h", Property::Enthalpy, 2),
                state_column("s", Property::Entropy, 4),
                state_column("RH", Property::RelHumidity, 4),
            ],
            row_state: RowState::MoistAir {
                t: c(t_c),
                p: kpa(p_kpa),
            },
        }
    }

    fn pressure_sweep_table(
        &self,
        id: &str,
        title: &str,
        property: AuxProperty,
        pressures_kpa: &[f64],
        grid: GridSpec,
    ) -> TableSpec {
        TableSpec {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            axis: aux_axis(grid, 2),
            columns: pressures_kpa
                .iter()
                .map(|&p_kpa| aux_column(format!("p = {p_kpa:.3} kPa"), property, kpa(p_kpa)))
                .collect(),
            row_state: RowState::TemperatureOnly,
        }
    }

    fn coefficient_table(&self, id: &str, title: &str, coefficients: &[AuxProperty]) -> TableSpec {
        let p = kpa(self.config.aux_reference_kpa);
        TableSpec {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            axis: aux_axis(GridSpec::celsius_linear(-60.0, 200.0, 27), 1),
            columns: coefficients
                .iter()
                .map(|&property| aux_column(property.symbol(), property, p))
                .collect(),
            row_state: RowState::TemperatureOnly,
        }
    }

    fn water_profile_table(
        &self,
        id: &str,
        title: &str,
        property: AuxProperty,
        grid: GridSpec,
    ) -> TableSpec {
        TableSpec {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            axis: aux_axis(grid, 2),
            columns: vec![aux_column(
                property.symbol(),
                property,
                kpa(self.config.aux_reference_kpa),
            )],
            row_state: RowState::TemperatureOnly,
        }
    }
}

fn aux_axis(grid: GridSpec, precision: usize) -> AxisSpec {
    AxisSpec {
        header: "T",
        unit: "C",
        grid,
        display_offset: -CELSIUS_OFFSET_K,
        width: 10,
        align: Align::Left,
        style: NumberStyle::Fixed { precision },
    }
}

fn state_column(header: &str, property: Property, precision: usize) -> ColumnSpec {
    ColumnSpec::new(
        header,
        ColumnQuery::State(property),
        10,
        Align::Right,
        NumberStyle::Fixed { precision },
    )
}

fn aux_column(header: impl Into<String>, property: AuxProperty, p: Pressure) -> ColumnSpec {
    ColumnSpec::new(
        header,
        ColumnQuery::Aux { property, p },
        20,
        Align::Left,
        NumberStyle::Scientific { precision: 10 },
    )
}
