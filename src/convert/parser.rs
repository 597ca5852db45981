use lazy_static::lazy_static;
use regex::Regex;

use crate::convert::error::ConvertError;
use crate::convert::units::Unit;

lazy_static! {
    /// A complete decimal literal: optional sign, digits, optional
    /// fractional part. Anchored on both ends so a candidate with trailing
    /// garbage fails instead of being partially consumed.
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").unwrap();
}

/// Byte index where the trailing alphabetic unit token begins.
/// Returns the input length when the input does not end in letters.
fn unit_suffix_start(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_alphabetic() {
        start -= 1;
    }
    start
}

/// Byte index of the first ASCII alphabetic character, if any.
fn first_alphabetic(input: &str) -> Option<usize> {
    input
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
}

/// Parse one whitespace-trimmed decimal literal. The value must be finite:
/// a literal long enough to overflow f64 is rejected rather than carried
/// forward as infinity.
fn parse_decimal(part: &str) -> Result<f64, ConvertError> {
    let trimmed = part.trim();
    if !DECIMAL_PATTERN.is_match(trimmed) {
        return Err(ConvertError::InvalidNumber);
    }
    let value: f64 = trimmed.parse().map_err(|_| ConvertError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(ConvertError::InvalidNumber);
    }
    Ok(value)
}

/// Parse the numeric component of a raw measurement string.
///
/// The candidate substring is everything before the trailing unit token,
/// so interior letters ("3a2b") make the number invalid rather than being
/// silently dropped. An absent numeric prefix ("kg", "") succeeds with the
/// default quantity 1. A single two-term fraction is accepted; more than
/// one `/` is rejected before any numeric parsing.
pub fn parse_quantity(input: &str) -> Result<f64, ConvertError> {
    let candidate = input[..unit_suffix_start(input)].trim();
    if candidate.is_empty() {
        return Ok(1.0);
    }

    if candidate.matches('/').count() > 1 {
        return Err(ConvertError::InvalidNumber);
    }

    if let Some((numerator, denominator)) = candidate.split_once('/') {
        let numerator = parse_decimal(numerator)?;
        let denominator = parse_decimal(denominator)?;
        if denominator == 0.0 {
            return Err(ConvertError::InvalidNumber);
        }
        let value = numerator / denominator;
        if !value.is_finite() {
            return Err(ConvertError::InvalidNumber);
        }
        return Ok(value);
    }

    parse_decimal(candidate)
}

/// Parse the unit component of a raw measurement string: everything from
/// the first alphabetic character to the end, lower-cased and trimmed.
/// Input without any alphabetic character has no unit at all.
pub fn parse_unit(input: &str) -> Result<Unit, ConvertError> {
    let start = first_alphabetic(input).ok_or(ConvertError::InvalidUnit)?;
    let token = input[start..].trim().to_lowercase();
    Unit::from_token(&token).ok_or(ConvertError::InvalidUnit)
}
