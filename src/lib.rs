pub mod convert;
pub mod server;

pub use convert::{convert_measurement, Conversion, ConvertError, Unit};
