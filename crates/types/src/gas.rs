//! Gas species.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Universal gas constant in cm³·atm/(mol·K).
pub const GAS_CONSTANT: f64 = 82.057338;

/// Gas released by a source.
///
/// Stored in YAML as its integer code (`-1` for unknown, `0..=13` for the
/// species in [`GasType::ALL`] order). Reading also accepts the camelCase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GasType {
    /// Not set in the configuration.
    #[default]
    Unknown,
    Ethanol,
    Methane,
    Hydrogen,
    Propanol,
    Chlorine,
    Fluorine,
    Acetone,
    Neon,
    Helium,
    Biogas,
    Butane,
    CarbonDioxide,
    CarbonMonoxide,
    Smoke,
}

impl GasType {
    /// Every known species, indexed by its code.
    pub const ALL: [GasType; 14] = [
        GasType::Ethanol,
        GasType::Methane,
        GasType::Hydrogen,
        GasType::Propanol,
        GasType::Chlorine,
        GasType::Fluorine,
        GasType::Acetone,
        GasType::Neon,
        GasType::Helium,
        GasType::Biogas,
        GasType::Butane,
        GasType::CarbonDioxide,
        GasType::CarbonMonoxide,
        GasType::Smoke,
    ];

    /// Integer code used in configuration and result files.
    pub fn code(self) -> i64 {
        match self {
            GasType::Unknown => -1,
            gas => GasType::ALL
                .iter()
                .position(|g| *g == gas)
                .map_or(-1, |i| i as i64),
        }
    }

    /// Inverse of [`code`](Self::code). `None` for codes outside `-1..=13`.
    pub fn from_code(code: i64) -> Option<Self> {
        if code == -1 {
            return Some(GasType::Unknown);
        }
        usize::try_from(code)
            .ok()
            .and_then(|i| GasType::ALL.get(i).copied())
    }

    /// Look up a species by its camelCase name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == GasType::Unknown.as_str() {
            return Some(GasType::Unknown);
        }
        GasType::ALL.iter().copied().find(|g| g.as_str() == name)
    }

    /// Density relative to air (air = 1).
    ///
    /// Returns `None` for [`GasType::Unknown`].
    pub fn specific_gravity(self) -> Option<f64> {
        let sg = match self {
            GasType::Unknown => return None,
            GasType::Ethanol => 1.0378,
            GasType::Methane => 0.5537,
            GasType::Hydrogen => 0.0696,
            GasType::Propanol => 1.23,
            GasType::Chlorine => 2.48,
            GasType::Fluorine => 1.31,
            GasType::Acetone => 1.4529,
            GasType::Neon => 0.7,
            GasType::Helium => 0.138,
            GasType::Biogas => 0.8,
            GasType::Butane => 2.0061,
            GasType::CarbonDioxide => 1.52,
            GasType::CarbonMonoxide => 0.967,
            GasType::Smoke => 0.89,
        };
        Some(sg)
    }

    /// Whether the gas tends to sink in still air.
    pub fn is_heavier_than_air(self) -> bool {
        self.specific_gravity().is_some_and(|sg| sg > 1.0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GasType::Unknown => "unknown",
            GasType::Ethanol => "ethanol",
            GasType::Methane => "methane",
            GasType::Hydrogen => "hydrogen",
            GasType::Propanol => "propanol",
            GasType::Chlorine => "chlorine",
            GasType::Fluorine => "fluorine",
            GasType::Acetone => "acetone",
            GasType::Neon => "neon",
            GasType::Helium => "helium",
            GasType::Biogas => "biogas",
            GasType::Butane => "butane",
            GasType::CarbonDioxide => "carbonDioxide",
            GasType::CarbonMonoxide => "carbonMonoxide",
            GasType::Smoke => "smoke",
        }
    }
}

impl fmt::Display for GasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GasType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for GasType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GasTypeVisitor)
    }
}

struct GasTypeVisitor;

impl<'de> Visitor<'de> for GasTypeVisitor {
    type Value = GasType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a gas code between -1 and 13, or a gas name")
    }

    fn visit_i64<E: de::Error>(self, code: i64) -> Result<GasType, E> {
        GasType::from_code(code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(code), &self))
    }

    fn visit_u64<E: de::Error>(self, code: u64) -> Result<GasType, E> {
        i64::try_from(code)
            .ok()
            .and_then(GasType::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(code), &self))
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<GasType, E> {
        GasType::from_name(name)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(name), &self))
    }
}
