use crate::convert::error::ConvertError;
use crate::convert::formatter::{describe, round_to_5};
use crate::convert::parser::{parse_quantity, parse_unit};
use crate::convert::types::Conversion;
use crate::convert::units::Unit;

/// Convert a quantity to the unit's counterpart, rounded to 5 decimal
/// places. Total over all six units; the unit is already validated so
/// there is no error path.
pub fn convert(quantity: f64, unit: Unit) -> f64 {
    round_to_5(quantity * unit.factor())
}

/// Parse a raw measurement string and convert it to the paired unit.
///
/// The numeric and unit components are parsed independently from the same
/// input; when both are malformed the combined classification is returned,
/// never either individual one.
pub fn convert_measurement(input: &str) -> Result<Conversion, ConvertError> {
    let (init_num, init_unit) = match (parse_quantity(input), parse_unit(input)) {
        (Err(_), Err(_)) => return Err(ConvertError::InvalidNumberAndUnit),
        (Err(_), Ok(_)) => return Err(ConvertError::InvalidNumber),
        (Ok(_), Err(_)) => return Err(ConvertError::InvalidUnit),
        (Ok(quantity), Ok(unit)) => (quantity, unit),
    };

    let return_num = convert(init_num, init_unit);
    let return_unit = init_unit.counterpart();
    let string = describe(init_num, init_unit, return_num, return_unit);

    Ok(Conversion {
        init_num,
        init_unit,
        return_num,
        return_unit,
        string,
    })
}
