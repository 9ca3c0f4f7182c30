//! Property identifier catalog for the report tables.
//!
//! Values are reported in the kSI psychrometric convention of the printed
//! reference tables: kPa for pressures, kJ for energies, Celsius for the
//! wet bulb, percent for relative humidity. All "per unit mass" quantities
//! are per kilogram of dry air.

/// Psychrometric state properties reported by the main tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Humidity ratio W [kg_w/kg_da]
    HumidityRatio,
    /// Wet-bulb temperature [C]
    WetBulb,
    /// Mixture volume per unit dry air [m³/kg_da]
    SpecificVolume,
    /// Mixture enthalpy per unit dry air [kJ/kg_da]
    Enthalpy,
    /// Mixture entropy per unit dry air [kJ/kg_da/K]
    ///
    /// Known caveat: engine entropy at high humidity ratios does not agree
    /// with the published tables. The report preamble carries the warning.
    Entropy,
    /// Relative humidity [%]
    RelHumidity,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::HumidityRatio,
        Property::WetBulb,
        Property::SpecificVolume,
        Property::Enthalpy,
        Property::Entropy,
        Property::RelHumidity,
    ];

    /// Symbol used in table headers.
    pub fn symbol(&self) -> &'static str {
        match self {
            Property::HumidityRatio => "W",
            Property::WetBulb => "Twb",
            Property::SpecificVolume => "v",
            Property::Enthalpy => "h",
            Property::Entropy => "s",
            Property::RelHumidity => "RH",
        }
    }

    /// Unit label in the report convention, as printed under the header.
    pub fn unit(&self) -> &'static str {
        match self {
            Property::HumidityRatio => "kgw/kg_da",
            Property::WetBulb => "C",
            Property::SpecificVolume => "m3/kgda",
            Property::Enthalpy => "kJ/kgda",
            Property::Entropy => "kJ/kgda/K",
            Property::RelHumidity => "%",
        }
    }
}

/// Auxiliary quantities of the humid-air model itself.
///
/// These are the internals the coefficient tables tabulate: virial
/// coefficients of the air/water system and the water-side quantities used
/// by the saturation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxProperty {
    /// Second virial coefficient of dry air [m³/mol]
    Baa,
    /// Third virial coefficient of dry air [m⁶/mol²]
    Caaa,
    /// Second virial coefficient of water vapor [m³/mol]
    Bww,
    /// Third virial coefficient of water vapor [m⁶/mol²]
    Cwww,
    /// Second air-water cross virial coefficient [m³/mol]
    Baw,
    /// Third cross virial coefficient, air-air-water [m⁶/mol²]
    Caaw,
    /// Third cross virial coefficient, air-water-water [m⁶/mol²]
    Caww,
    /// Temperature derivative of Baa [m³/mol/K]
    BaaDt,
    /// Temperature derivative of Caaa [m⁶/mol²/K]
    CaaaDt,
    /// Temperature derivative of Bww [m³/mol/K]
    BwwDt,
    /// Temperature derivative of Cwww [m⁶/mol²/K]
    CwwwDt,
    /// Temperature derivative of Baw [m³/mol/K]
    BawDt,
    /// Temperature derivative of Caaw [m⁶/mol²/K]
    CaawDt,
    /// Temperature derivative of Caww [m⁶/mol²/K]
    CawwDt,
    /// Water saturation pressure p_ws [kPa]
    SaturationPressure,
    /// Henry constant for air dissolved in liquid water [1/Pa]
    HenryConstant,
    /// Isothermal compressibility of water [1/Pa]
    IsothermalCompressibility,
    /// Molar volume of saturated liquid water or ice [m³/mol of water]
    SaturatedMolarVolume,
    /// Enhancement factor f (dimensionless)
    EnhancementFactor,
}

impl AuxProperty {
    pub const ALL: [AuxProperty; 19] = [
        AuxProperty::Baa,
        AuxProperty::Caaa,
        AuxProperty::Bww,
        AuxProperty::Cwww,
        AuxProperty::Baw,
        AuxProperty::Caaw,
        AuxProperty::Caww,
        AuxProperty::BaaDt,
        AuxProperty::CaaaDt,
        AuxProperty::BwwDt,
        AuxProperty::CwwwDt,
        AuxProperty::BawDt,
        AuxProperty::CaawDt,
        AuxProperty::CawwDt,
        AuxProperty::SaturationPressure,
        AuxProperty::HenryConstant,
        AuxProperty::IsothermalCompressibility,
        AuxProperty::SaturatedMolarVolume,
        AuxProperty::EnhancementFactor,
    ];

    /// Symbol used in table headers.
    pub fn symbol(&self) -> &'static str {
        match self {
            AuxProperty::Baa => "Baa",
            AuxProperty::Caaa => "Caaa",
            AuxProperty::Bww => "Bww",
            AuxProperty::Cwww => "Cwww",
            AuxProperty::Baw => "Baw",
            AuxProperty::Caaw => "Caaw",
            AuxProperty::Caww => "Caww",
            AuxProperty::BaaDt => "dBaa",
            AuxProperty::CaaaDt => "dCaaa",
            AuxProperty::BwwDt => "dBww",
            AuxProperty::CwwwDt => "dCwww",
            AuxProperty::BawDt => "dBaw",
            AuxProperty::CaawDt => "dCaaw",
            AuxProperty::CawwDt => "dCaww",
            AuxProperty::SaturationPressure => "p_ws",
            AuxProperty::HenryConstant => "beta_H",
            AuxProperty::IsothermalCompressibility => "kT",
            AuxProperty::SaturatedMolarVolume => "vbar_ws",
            AuxProperty::EnhancementFactor => "f",
        }
    }

    /// Unit label in the report convention.
    pub fn unit(&self) -> &'static str {
        match self {
            AuxProperty::Baa | AuxProperty::Bww | AuxProperty::Baw => "m^3/mol",
            AuxProperty::Caaa | AuxProperty::Cwww | AuxProperty::Caaw | AuxProperty::Caww => {
                "m^6/mol^2"
            }
            AuxProperty::BaaDt | AuxProperty::BwwDt | AuxProperty::BawDt => "m^3/mol/K",
            AuxProperty::CaaaDt | AuxProperty::CwwwDt | AuxProperty::CaawDt
            | AuxProperty::CawwDt => "m^6/mol^2/K",
            AuxProperty::SaturationPressure => "kPa",
            AuxProperty::HenryConstant => "1/Pa",
            AuxProperty::IsothermalCompressibility => "1/Pa",
            AuxProperty::SaturatedMolarVolume => "m^3/mol_H2O",
            AuxProperty::EnhancementFactor => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn property_symbols_are_unique() {
        let symbols: HashSet<_> = Property::ALL.iter().map(|p| p.symbol()).collect();
        assert_eq!(symbols.len(), Property::ALL.len());
    }

    #[test]
    fn aux_symbols_are_unique() {
        let symbols: HashSet<_> = AuxProperty::ALL.iter().map(|p| p.symbol()).collect();
        assert_eq!(symbols.len(), AuxProperty::ALL.len());
    }

    #[test]
    fn derivative_symbols_carry_d_prefix() {
        for aux in [
            AuxProperty::BaaDt,
            AuxProperty::CaaaDt,
            AuxProperty::BwwDt,
            AuxProperty::CwwwDt,
            AuxProperty::BawDt,
            AuxProperty::CaawDt,
            AuxProperty::CawwDt,
        ] {
            assert!(aux.symbol().starts_with('d'), "{:?}", aux);
            assert!(aux.unit().ends_with("/K"), "{:?}", aux);
        }
    }

    #[test]
    fn every_identifier_has_a_unit() {
        for p in Property::ALL {
            assert!(!p.unit().is_empty());
        }
        for a in AuxProperty::ALL {
            assert!(!a.unit().is_empty());
        }
    }
}
