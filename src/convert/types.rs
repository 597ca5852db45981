use serde::Serialize;

use crate::convert::units::Unit;

/// Result of one successful conversion. Immutable once produced; the serde
/// field names are the wire format expected by API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Quantity as parsed from the input (1 when the prefix was absent)
    pub init_num: f64,
    /// Canonical input unit
    pub init_unit: Unit,
    /// Converted quantity, rounded to 5 decimal places
    pub return_num: f64,
    /// Paired unit in the opposite measurement system
    pub return_unit: Unit,
    /// Human-readable summary of the conversion
    pub string: String,
}
