// psy-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn c(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Pressure in kilopascal, the unit the report tables are stated in.
#[inline]
pub fn kilopascals(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales
    pub const CELSIUS_OFFSET_K: f64 = 273.15;

    /// Triple point of water [K]
    pub const WATER_TRIPLE_POINT_K: f64 = 273.16;

    /// Standard atmosphere [kPa]
    pub const ONE_ATMOSPHERE_KPA: f64 = 101.325;
}
