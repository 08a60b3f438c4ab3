//! Input validation for simulation requests.
//!
//! Every function here is pure: the same input always yields the same
//! result. The interactive retry loop lives in the CLI layer.

use crate::error::{ValidationError, ValidationResult};
use crate::request::ReportReason;

/// Minimum number of digits in an accepted phone number.
pub const MIN_DIGITS: usize = 10;
/// Maximum number of digits in an accepted phone number.
pub const MAX_DIGITS: usize = 15;
/// Smallest report count a session may simulate.
pub const MIN_REPORTS: u32 = 1;
/// Largest report count a session may simulate.
pub const MAX_REPORTS: u32 = 100;

/// Returns only the ASCII digits of `raw`, in order.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checks a free-form string against the international phone number shape.
///
/// Non-digit characters are ignored. The remaining digits must number
/// between [`MIN_DIGITS`] and [`MAX_DIGITS`] and must not begin with `0`
/// (the first digit is the country code).
pub fn validate_phone_number(raw: &str) -> bool {
    let clean = digits(raw);
    if clean.len() < MIN_DIGITS || clean.len() > MAX_DIGITS {
        return false;
    }
    !clean.starts_with('0')
}

/// Parses a report count entered by the user.
pub fn parse_report_count(raw: &str) -> ValidationResult<u32> {
    let value = parse_integer(raw)?;
    if value < MIN_REPORTS as i64 || value > MAX_REPORTS as i64 {
        return Err(ValidationError::CountOutOfRange { value });
    }
    Ok(value as u32)
}

/// Parses a 1-based reason choice into a [`ReportReason`].
pub fn parse_reason_choice(raw: &str) -> ValidationResult<ReportReason> {
    let value = parse_integer(raw)?;
    usize::try_from(value)
        .ok()
        .and_then(ReportReason::from_choice)
        .ok_or(ValidationError::ReasonOutOfRange { value })
}

fn parse_integer(raw: &str) -> ValidationResult<i64> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| ValidationError::NotANumber {
        input: trimmed.to_string(),
    })
}
