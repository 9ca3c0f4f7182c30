//! CoolProp integration tests.
//!
//! These tests verify that the CoolProp backend answers realistic humid-air
//! queries. Broad tolerances avoid engine-version churn; the assertions
//! enforce physical plausibility, not exact table values.

use psy_core::units::{c, k, kpa};
use psy_props::{AuxProperty, CoolPropSource, Property, PropertySource, SourceError, StateInput};

#[test]
fn saturated_air_at_20c_1atm() {
    let source = CoolPropSource::new();
    let state = StateInput::saturated(c(20.0), kpa(101.325));

    // Ws at 20°C should be around 0.0147 kg_w/kg_da
    let w = source.evaluate(&state, Property::HumidityRatio).unwrap();
    assert!(w > 0.010 && w < 0.020, "Ws = {} kg_w/kg_da", w);

    // Specific volume a bit above dry air's 0.83 m³/kg
    let v = source.evaluate(&state, Property::SpecificVolume).unwrap();
    assert!(v > 0.80 && v < 0.90, "v = {} m3/kg_da", v);

    // Enthalpy around 57 kJ/kg_da
    let h = source.evaluate(&state, Property::Enthalpy).unwrap();
    assert!(h > 30.0 && h < 90.0, "h = {} kJ/kg_da", h);

    let s = source.evaluate(&state, Property::Entropy).unwrap();
    assert!(s.is_finite() && s.abs() < 10.0, "s = {} kJ/kg_da/K", s);
}

#[test]
fn saturation_humidity_rises_with_temperature() {
    let source = CoolPropSource::new();
    let p = kpa(101.325);

    let w_cold = source
        .evaluate(&StateInput::saturated(c(-20.0), p), Property::HumidityRatio)
        .unwrap();
    let w_warm = source
        .evaluate(&StateInput::saturated(c(20.0), p), Property::HumidityRatio)
        .unwrap();

    assert!(w_cold > 0.0, "Ws(-20C) = {}", w_cold);
    assert!(
        w_warm > 10.0 * w_cold,
        "Ws should rise steeply with T: {} vs {}",
        w_cold,
        w_warm
    );
}

#[test]
fn wet_bulb_sits_below_dry_bulb_when_unsaturated() {
    let source = CoolPropSource::new();
    let state = StateInput::at_rel_humidity(c(30.0), kpa(101.325), 0.5);

    let twb = source.evaluate(&state, Property::WetBulb).unwrap();
    assert!(twb < 30.0, "Twb = {} C should be below dry bulb", twb);
    assert!(twb > 5.0, "Twb = {} C is implausibly low", twb);
}

#[test]
fn wet_bulb_matches_dry_bulb_at_saturation() {
    let source = CoolPropSource::new();
    let state = StateInput::saturated(c(25.0), kpa(101.325));

    let twb = source.evaluate(&state, Property::WetBulb).unwrap();
    assert!((twb - 25.0).abs() < 0.5, "Twb = {} C", twb);
}

#[test]
fn relative_humidity_round_trip() {
    let source = CoolPropSource::new();
    let p = kpa(101.325);
    let t = c(20.0);

    let w = source
        .evaluate(&StateInput::at_rel_humidity(t, p, 0.5), Property::HumidityRatio)
        .unwrap();
    let rh = source
        .evaluate(&StateInput::at_humidity_ratio(t, p, w), Property::RelHumidity)
        .unwrap();

    // Reported in percent
    assert!((rh - 50.0).abs() < 2.0, "RH = {} %", rh);
}

#[test]
fn dry_air_has_zero_relative_humidity() {
    let source = CoolPropSource::new();
    let state = StateInput::at_humidity_ratio(c(200.0), kpa(101.325), 0.0);

    let rh = source.evaluate(&state, Property::RelHumidity).unwrap();
    assert!(rh.abs() < 0.5, "RH = {} %", rh);
}

#[test]
fn humidity_swells_the_specific_volume() {
    let source = CoolPropSource::new();
    let p = kpa(101.325);
    let t = c(200.0);

    let v_dry = source
        .evaluate(&StateInput::at_humidity_ratio(t, p, 0.0), Property::SpecificVolume)
        .unwrap();
    let v_wet = source
        .evaluate(&StateInput::at_humidity_ratio(t, p, 0.5), Property::SpecificVolume)
        .unwrap();

    // Volume is per kg of dry air, so carrying water must increase it
    assert!(v_wet > v_dry, "v = {} vs {} m3/kg_da", v_dry, v_wet);
}

#[test]
fn saturation_pressure_at_100c_is_one_atmosphere() {
    let source = CoolPropSource::new();
    let p_ws = source
        .evaluate_aux(AuxProperty::SaturationPressure, k(373.15), kpa(100.0), 0.0)
        .unwrap();

    assert!((p_ws - 101.325).abs() < 2.0, "p_ws = {} kPa", p_ws);
}

#[test]
fn saturation_pressure_below_triple_point_fails_cleanly() {
    let source = CoolPropSource::new();
    let result = source.evaluate_aux(AuxProperty::SaturationPressure, k(250.0), kpa(100.0), 0.0);

    // The engine has no sublimation curve on this channel; the failure must
    // be a reportable error, not a crash or a junk number
    assert!(result.is_err(), "p_ws below triple point = {:?}", result);
}

#[test]
fn air_second_virial_is_negative_at_moderate_temperature() {
    let source = CoolPropSource::new();
    let baa = source
        .evaluate_aux(AuxProperty::Baa, k(250.0), kpa(100.0), 0.0)
        .unwrap();

    // Attractive regime: small negative molar volume
    assert!(baa < 0.0, "Baa = {} m^3/mol", baa);
    assert!(baa > -1e-3, "Baa = {} m^3/mol is implausibly large", baa);
}

#[test]
fn enhancement_factor_slightly_exceeds_one() {
    let source = CoolPropSource::new();
    let f = source
        .evaluate_aux(AuxProperty::EnhancementFactor, k(293.15), kpa(101.325), 0.0)
        .unwrap();

    assert!(f > 1.0 && f < 1.1, "f = {}", f);
}

#[test]
fn unreachable_aux_channels_say_so() {
    let source = CoolPropSource::new();

    for aux in [AuxProperty::Baw, AuxProperty::CawwDt, AuxProperty::HenryConstant] {
        let result = source.evaluate_aux(aux, k(300.0), kpa(100.0), 0.0);
        assert!(
            matches!(result, Err(SourceError::Unsupported { .. })),
            "{:?} = {:?}",
            aux,
            result
        );
    }
}
