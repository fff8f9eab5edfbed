//! Value validation.
//!
//! Two kinds of values are accepted:
//! - the target constant: any finite real `> 0`
//! - a personal number (base): any finite real `> 0` other than `1.0`

use crate::domain::{BASE_COUNT, Bases};
use crate::error::AppError;

/// Accept a finite value strictly greater than zero.
pub fn check_positive(value: f64) -> Result<f64, AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!(
            "Invalid value {value}: must be a finite real number > 0."
        )))
    }
}

/// Accept a positive value that is not exactly `1.0`.
pub fn check_personal_number(value: f64) -> Result<f64, AppError> {
    let value = check_positive(value)?;
    if value == 1.0 {
        return Err(AppError::invalid_input(
            "Invalid personal number 1: every exponent gives the same result.",
        ));
    }
    Ok(value)
}

/// Parse a target constant from user text.
pub fn parse_positive(text: &str) -> Result<f64, AppError> {
    check_positive(parse_real(text)?)
}

/// Parse a personal number from user text.
pub fn parse_personal_number(text: &str) -> Result<f64, AppError> {
    check_personal_number(parse_real(text)?)
}

/// Validate a list of personal numbers and pack them into `Bases`.
pub fn bases_from_values(values: &[f64]) -> Result<Bases, AppError> {
    if values.len() != BASE_COUNT {
        return Err(AppError::invalid_input(format!(
            "Expected {BASE_COUNT} personal numbers, got {}.",
            values.len()
        )));
    }
    let mut out = [0.0; BASE_COUNT];
    for (slot, &value) in out.iter_mut().zip(values) {
        *slot = check_personal_number(value)?;
    }
    Ok(Bases(out))
}

fn parse_real(text: &str) -> Result<f64, AppError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| AppError::invalid_input(format!("'{trimmed}' is not a real number.")))
}
