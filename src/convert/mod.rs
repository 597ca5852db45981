// Measurement parsing and metric-imperial conversion.
// The whole module is pure functions: parse the raw string into a quantity
// and a unit, classify failures, convert, and format a description.

pub mod error;
pub mod formatter;
pub mod parser;
pub mod processor;
pub mod types;
pub mod units;


pub use error::ConvertError;
pub use formatter::{describe, round_to_5};
pub use parser::{parse_quantity, parse_unit};
pub use processor::{convert, convert_measurement};
pub use types::Conversion;
pub use units::Unit;
