// ============================================================================
// Amount Validator
// Raw text -> CanonicalAmount, digit by digit
// ============================================================================

use super::amount::CanonicalAmount;
use super::errors::{ValidationError, ValidationResult};

/// Maximum digits after the decimal point (jiao, fen)
pub const MAX_DECIMAL_PLACES: usize = 2;

/// Validate raw amount text and build its canonical amount.
///
/// Checks run in a fixed order, so an input with several problems always
/// reports the earliest one:
///
/// 1. empty / whitespace only → `Empty`
/// 2. anything but ASCII digits and one decimal point → `NotNumeric`
/// 3. more than two fractional digits → `TooManyDecimalPlaces`
/// 4. a leading minus sign → `Negative`
/// 5. integer part past sixteen significant digits → `OutOfRange`
///
/// # Examples
/// - "1234.56" -> 123456 fen
/// - "5" / "5.0" / "5.00" -> 500 fen
/// - ".5" -> 50 fen
/// - "12.345" -> `TooManyDecimalPlaces`
pub fn validate(raw: &str) -> ValidationResult<CanonicalAmount> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    // A sign is never valid, but is recognised so it can be reported as such
    let (is_negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let (int_digits, frac_digits) = split_digits(unsigned)?;

    if frac_digits.len() > MAX_DECIMAL_PLACES {
        return Err(ValidationError::TooManyDecimalPlaces);
    }

    if is_negative {
        return Err(ValidationError::Negative);
    }

    let major = parse_major(int_digits)?;
    let sub = parse_sub_units(frac_digits);

    CanonicalAmount::from_parts(major, sub)
}

/// Split into integer and fractional digit runs.
///
/// Either run may be empty, but not both.
fn split_digits(s: &str) -> ValidationResult<(&str, &str)> {
    let (int_digits, frac_digits) = match s.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, frac_digits),
        None => (s, ""),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(ValidationError::NotNumeric);
    }

    let all_digits = |run: &str| run.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        // Also catches a second decimal point in the fractional run
        return Err(ValidationError::NotNumeric);
    }

    Ok((int_digits, frac_digits))
}

/// Parse the integer run into whole yuan.
///
/// Leading zeros do not count toward the sixteen-digit limit.
fn parse_major(digits: &str) -> ValidationResult<u64> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > CanonicalAmount::MAX_MAJOR_DIGITS {
        return Err(ValidationError::OutOfRange);
    }

    // At most sixteen digits, so this cannot overflow u64
    Ok(significant
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0')))
}

/// Parse up to two fractional digits, right-padded with zeros.
fn parse_sub_units(digits: &str) -> u8 {
    let mut places = digits.bytes().map(|b| b - b'0');
    let jiao = places.next().unwrap_or(0);
    let fen = places.next().unwrap_or(0);
    jiao * 10 + fen
}
