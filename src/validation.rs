//! Length field validation.
//!
//! Mirrors a numeric schema with a min/max rule: the text must be present,
//! numeric and within bounds. Fractions are bounds-checked as given and
//! then truncated, so "8.5" yields 8 but "7.9" is too short.

use crate::errors::LengthError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 50;

/// Inclusive bounds for the requested password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        }
    }
}

/// Validates against the default `[8, 50]` bounds.
pub fn validate_length(raw: &str) -> Result<usize, LengthError> {
    validate_length_within(raw, LengthBounds::default())
}

pub fn validate_length_within(raw: &str, bounds: LengthBounds) -> Result<usize, LengthError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Required);
    }

    let value = parse_number(trimmed)?;
    if value < bounds.min as f64 {
        return Err(LengthError::TooShort);
    }
    if value > bounds.max as f64 {
        return Err(LengthError::TooLong);
    }

    Ok(value.trunc() as usize)
}

/// Accepts "12", "12.5" and "-3" but not "abc", "NaN" or "inf".
fn parse_number(text: &str) -> Result<f64, LengthError> {
    if let Ok(n) = text.parse::<u64>() {
        return Ok(n as f64);
    }

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LengthError::NotANumber),
    }
}
