//! End-to-end report generation against a scripted property source.
//!
//! These tests pin the printed structure of the report: section order,
//! row counts, borders, and how evaluation failures surface in the text.

use psy_props::{AuxProperty, Property, ScriptedSource, SourceError};
use psy_report::{ENTROPY_CAVEAT, ReportDriver};

/// Deterministic source with the same reachability as the real backend:
/// state properties and pure-substance aux quantities answer, cross
/// virials and the Henry constant do not.
fn scripted() -> ScriptedSource {
    ScriptedSource::new(
        |state, property| {
            let t_k = state.t().value;
            Ok(match property {
                Property::HumidityRatio => 0.01 * t_k / 300.0,
                Property::WetBulb => t_k - 274.15,
                Property::SpecificVolume => 0.8 + t_k / 1000.0,
                Property::Enthalpy => 50.0 + t_k,
                Property::Entropy => 0.1 + t_k / 1000.0,
                Property::RelHumidity => 42.0,
            })
        },
        |property, t, _, _| match property {
            AuxProperty::Baw
            | AuxProperty::Caaw
            | AuxProperty::Caww
            | AuxProperty::BawDt
            | AuxProperty::CaawDt
            | AuxProperty::CawwDt
            | AuxProperty::HenryConstant => Err(SourceError::Unsupported {
                what: "not reachable through this backend",
            }),
            _ => Ok(1.0e-6 * t.value),
        },
    )
}

fn full_report() -> String {
    let driver = ReportDriver::new(scripted());
    let mut out = Vec::new();
    driver.write_report(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn section(id: &str) -> String {
    let driver = ReportDriver::new(scripted());
    let mut out = Vec::new();
    driver.write_section(id, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Count sentinel cells, skipping the all-hyphen rule line.
fn count_sentinels(text: &str) -> usize {
    text.lines()
        .filter(|line| !line.chars().all(|ch| ch == '-'))
        .flat_map(str::split_whitespace)
        .filter(|token| *token == "--")
        .count()
}

#[test]
fn sections_appear_in_catalog_order() {
    let text = full_report();
    let markers = [
        "A.6.1 Psychrometric Properties of Moist Air at 0C and Below",
        "A.6.2 Psychrometric Properties of Moist Air at 0C and Above",
        "A.8.1 Psychrometric Properties of Moist Air at 101.325 kPa",
        "A.8.5 Psychrometric Properties of Moist Air at 10000 kPa",
        "A.9.1 Psychrometric Properties of Moist Air at 101.325 kPa",
        "A.9.5 Psychrometric Properties of Moist Air at 10000 kPa",
        "Pure fluid Virial Coefficients\n",
        "Cross Virial Coefficients\n",
        "Pure fluid Virial Coefficient Derivatives\n",
        "Cross Virial Coefficient Derivatives\n",
        "Water saturation pressure p_ws [kPa]",
        "Henry Constant (zero for T < 273.15 K)",
        "Isothermal Compressibility of water (kT) [1/Pa]",
        "Molar volume of saturated liquid water or ice (vbar_ws) [m^3/mol_H2O]",
        "Enhancement factor (f) [no units]",
    ];

    let positions: Vec<usize> = markers
        .iter()
        .map(|marker| text.find(marker).unwrap_or_else(|| panic!("missing {marker:?}")))
        .collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn preamble_carries_backend_name_then_caveat() {
    let text = full_report();
    assert!(text.starts_with("Humid air property validation tables [scripted]\n\n"));
    assert_eq!(text.lines().nth(2), Some(ENTROPY_CAVEAT));
    assert_eq!(text.matches(ENTROPY_CAVEAT).count(), 1);
}

#[test]
fn tables_are_separated_by_a_blank_line() {
    let text = full_report();
    assert!(text.contains("\n\nA.6.2 Psychrometric"));
    assert!(text.contains("\n\nA.8.1 Psychrometric"));
}

#[test]
fn saturation_tables_have_one_row_per_grid_point() {
    // 7 chrome lines (title, subtitle, three rules, header, units)
    let text = section("A.6.1");
    assert_eq!(text.lines().count(), 7 + 13);

    let text = section("A.6.2");
    assert_eq!(text.lines().count(), 7 + 19);
}

#[test]
fn hot_air_row_counts_follow_the_pressure_tiers() {
    assert_eq!(section("A.8.1").lines().count(), 7 + 12);
    assert_eq!(section("A.8.4").lines().count(), 7 + 7);
    assert_eq!(section("A.8.5").lines().count(), 7 + 3);
    assert_eq!(section("A.9.4").lines().count(), 7 + 14);
    assert_eq!(section("A.9.5").lines().count(), 7 + 14);
}

#[test]
fn hot_air_axis_lists_the_humidity_ratios_in_order() {
    let text = section("A.8.1");
    let first_rows: Vec<&str> = text
        .lines()
        .skip(6)
        .take(3)
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(first_rows, vec!["0.00", "0.05", "0.10"]);
}

#[test]
fn borders_match_the_declared_table_widths() {
    let text = section("A.6.1");
    assert_eq!(text.matches(&"=".repeat(48)).count(), 2);

    let text = section("A.8.1");
    assert_eq!(text.matches(&"=".repeat(60)).count(), 2);

    let text = section("virial-pure");
    assert_eq!(text.matches(&"=".repeat(90)).count(), 2);

    let text = section("f-factor");
    assert_eq!(text.matches(&"=".repeat(110)).count(), 2);
}

#[test]
fn unsupported_aux_channels_render_sentinels_only_where_they_fail() {
    // Cross virials are unreachable: 27 rows x 3 columns of sentinels
    let text = section("virial-cross");
    assert_eq!(count_sentinels(&text), 27 * 3);

    // Pure-substance virials all evaluate
    let text = section("virial-pure");
    assert_eq!(count_sentinels(&text), 0);
    assert!(text.contains("e-04"));
}

#[test]
fn henry_table_renders_but_carries_no_values() {
    let text = section("beta-h");
    assert!(text.starts_with("Henry Constant (zero for T < 273.15 K)\n"));
    assert_eq!(count_sentinels(&text), 11);
    // The axis is still printed for every row
    assert!(text.contains("\n0.01"));
    assert!(text.contains("\n300.01"));
}

#[test]
fn report_generation_is_idempotent() {
    let driver = ReportDriver::new(scripted());
    let mut first = Vec::new();
    let mut second = Vec::new();

    driver.write_report(&mut first).unwrap();
    driver.write_report(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn wet_bulb_and_relative_humidity_columns_use_report_units() {
    let text = section("A.8.1");
    // RH comes back as 42.0 percent at 4 decimals in every row
    assert_eq!(text.matches("42.0000").count(), 12);
}
