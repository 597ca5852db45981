use serde::Serialize;
use std::fmt;

/// Liters per gallon
const GAL_TO_L: f64 = 3.78541;
/// Kilometers per mile
const MI_TO_KM: f64 = 1.60934;
/// Kilograms per pound
const LBS_TO_KG: f64 = 0.453592;

/// The six supported measurement units. Each imperial unit pairs with
/// exactly one metric unit and vice versa; every lookup table below is an
/// exhaustive match so a new variant cannot silently fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "gal")]
    Gallon,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "mi")]
    Mile,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "lbs")]
    Pound,
    #[serde(rename = "kg")]
    Kilogram,
}

/// All units, imperial before its metric counterpart.
pub const ALL_UNITS: [Unit; 6] = [
    Unit::Gallon,
    Unit::Liter,
    Unit::Mile,
    Unit::Kilometer,
    Unit::Pound,
    Unit::Kilogram,
];

impl Unit {
    /// Resolve a lower-cased unit token to its canonical unit.
    /// Liters also accept the long spellings; every other unit matches its
    /// abbreviation only.
    pub fn from_token(token: &str) -> Option<Unit> {
        match token {
            "gal" => Some(Unit::Gallon),
            "l" | "liter" | "liters" => Some(Unit::Liter),
            "mi" => Some(Unit::Mile),
            "km" => Some(Unit::Kilometer),
            "lbs" => Some(Unit::Pound),
            "kg" => Some(Unit::Kilogram),
            _ => None,
        }
    }

    /// The paired unit in the opposite measurement system.
    pub fn counterpart(self) -> Unit {
        match self {
            Unit::Gallon => Unit::Liter,
            Unit::Liter => Unit::Gallon,
            Unit::Mile => Unit::Kilometer,
            Unit::Kilometer => Unit::Mile,
            Unit::Pound => Unit::Kilogram,
            Unit::Kilogram => Unit::Pound,
        }
    }

    /// Multiplicative factor converting a quantity in this unit to its
    /// counterpart. The metric directions are written as reciprocal
    /// expressions of the same constant, never as separately rounded
    /// values, so each pair is exactly reciprocal.
    pub fn factor(self) -> f64 {
        match self {
            Unit::Gallon => GAL_TO_L,
            Unit::Liter => 1.0 / GAL_TO_L,
            Unit::Mile => MI_TO_KM,
            Unit::Kilometer => 1.0 / MI_TO_KM,
            Unit::Pound => LBS_TO_KG,
            Unit::Kilogram => 1.0 / LBS_TO_KG,
        }
    }

    /// Canonical abbreviation, as used in input normalization and output.
    pub fn abbrev(self) -> &'static str {
        match self {
            Unit::Gallon => "gal",
            Unit::Liter => "L",
            Unit::Mile => "mi",
            Unit::Kilometer => "km",
            Unit::Pound => "lbs",
            Unit::Kilogram => "kg",
        }
    }

    /// Full English name, always plural regardless of the quantity.
    pub fn spell_out(self) -> &'static str {
        match self {
            Unit::Gallon => "gallons",
            Unit::Liter => "liters",
            Unit::Mile => "miles",
            Unit::Kilometer => "kilometers",
            Unit::Pound => "pounds",
            Unit::Kilogram => "kilograms",
        }
    }

    /// Whether this unit belongs to the imperial system.
    pub fn is_imperial(self) -> bool {
        matches!(self, Unit::Gallon | Unit::Mile | Unit::Pound)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counterpart_is_involution() {
        for unit in ALL_UNITS {
            assert_eq!(unit.counterpart().counterpart(), unit);
        }
    }

    #[test]
    fn test_counterpart_crosses_systems() {
        for unit in ALL_UNITS {
            assert_ne!(unit.is_imperial(), unit.counterpart().is_imperial());
        }
    }

    #[test]
    fn test_factors_are_exact_reciprocals() {
        assert_eq!(Unit::Liter.factor(), 1.0 / Unit::Gallon.factor());
        assert_eq!(Unit::Kilometer.factor(), 1.0 / Unit::Mile.factor());
        assert_eq!(Unit::Kilogram.factor(), 1.0 / Unit::Pound.factor());
    }

    #[test]
    fn test_from_token_canonical() {
        assert_eq!(Unit::from_token("gal"), Some(Unit::Gallon));
        assert_eq!(Unit::from_token("mi"), Some(Unit::Mile));
        assert_eq!(Unit::from_token("km"), Some(Unit::Kilometer));
        assert_eq!(Unit::from_token("lbs"), Some(Unit::Pound));
        assert_eq!(Unit::from_token("kg"), Some(Unit::Kilogram));
    }

    #[test]
    fn test_from_token_liter_spellings() {
        assert_eq!(Unit::from_token("l"), Some(Unit::Liter));
        assert_eq!(Unit::from_token("liter"), Some(Unit::Liter));
        assert_eq!(Unit::from_token("liters"), Some(Unit::Liter));
    }

    #[test]
    fn test_from_token_rejects_unknown() {
        assert_eq!(Unit::from_token("g"), None);
        assert_eq!(Unit::from_token("lb"), None);
        assert_eq!(Unit::from_token("gallons"), None);
        assert_eq!(Unit::from_token(""), None);
    }

    #[test]
    fn test_display_uses_abbreviation() {
        assert_eq!(Unit::Liter.to_string(), "L");
        assert_eq!(Unit::Pound.to_string(), "lbs");
    }

    #[test]
    fn test_serialize_as_abbreviation() {
        let json = serde_json::to_string(&Unit::Liter).unwrap();
        assert_eq!(json, "\"L\"");
        let json = serde_json::to_string(&Unit::Gallon).unwrap();
        assert_eq!(json, "\"gal\"");
    }
}
