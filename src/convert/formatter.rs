use crate::convert::units::Unit;

/// Round to exactly 5 decimal places, half away from zero.
pub fn round_to_5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Human-readable summary of a conversion, e.g.
/// `4 gallons converts to 15.14164 liters`. Quantities keep their natural
/// decimal rendering; unit names are always plural.
pub fn describe(init_num: f64, init_unit: Unit, return_num: f64, return_unit: Unit) -> String {
    format!(
        "{} {} converts to {} {}",
        init_num,
        init_unit.spell_out(),
        return_num,
        return_unit.spell_out()
    )
}
