use std::fmt;

/// Failure classification for a measurement conversion.
/// The display strings are the exact messages surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    InvalidNumber,
    InvalidUnit,
    InvalidNumberAndUnit,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidNumber => write!(f, "invalid number"),
            ConvertError::InvalidUnit => write!(f, "invalid unit"),
            ConvertError::InvalidNumberAndUnit => write!(f, "invalid number and unit"),
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ConvertError::InvalidNumber.to_string(), "invalid number");
        assert_eq!(ConvertError::InvalidUnit.to_string(), "invalid unit");
        assert_eq!(
            ConvertError::InvalidNumberAndUnit.to_string(),
            "invalid number and unit"
        );
    }
}
