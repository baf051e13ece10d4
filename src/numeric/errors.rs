// ============================================================================
// Validation Errors
// Rejection reasons for raw amount text
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a raw amount text is rejected by the validator.
///
/// This is the only error type in the conversion pipeline: formatting a
/// [`CanonicalAmount`](super::CanonicalAmount) cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationError {
    /// Input is empty or whitespace only
    Empty,
    /// Input contains something other than ASCII digits and one decimal point
    NotNumeric,
    /// More than two digits after the decimal point (jiao and fen)
    TooManyDecimalPlaces,
    /// Input denotes a negative amount
    Negative,
    /// Integer part needs a section above 万亿
    OutOfRange,
}

impl ValidationError {
    /// All variants, in validation order.
    pub const ALL: [ValidationError; 5] = [
        ValidationError::Empty,
        ValidationError::NotNumeric,
        ValidationError::TooManyDecimalPlaces,
        ValidationError::Negative,
        ValidationError::OutOfRange,
    ];

    /// Wording a presentation layer shows to the person typing the amount.
    pub const fn user_message(self) -> &'static str {
        match self {
            ValidationError::Empty => "请输入金额。",
            ValidationError::NotNumeric => "金额只能包含数字和一个小数点。",
            ValidationError::TooManyDecimalPlaces => {
                "请提供有效金额，且小数点后最多保留两位（角、分）。"
            },
            ValidationError::Negative => "金额不能为负数。",
            ValidationError::OutOfRange => "金额超出可转换范围（整数部分最多十六位）。",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "empty input: no amount given"),
            ValidationError::NotNumeric => write!(
                f,
                "not numeric: only ASCII digits and one decimal point are allowed"
            ),
            ValidationError::TooManyDecimalPlaces => write!(
                f,
                "too many decimal places: at most two (jiao and fen) are allowed"
            ),
            ValidationError::Negative => write!(f, "negative amount"),
            ValidationError::OutOfRange => write!(
                f,
                "out of range: integer part must be below 10^16"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "empty input: no amount given"
        );
        assert_eq!(ValidationError::Negative.to_string(), "negative amount");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ValidationError::Empty, ValidationError::Empty);
        assert_ne!(ValidationError::Empty, ValidationError::NotNumeric);
    }

    #[test]
    fn test_user_messages_are_distinct() {
        for (i, a) in ValidationError::ALL.iter().enumerate() {
            for b in &ValidationError::ALL[i + 1..] {
                assert_ne!(a.user_message(), b.user_message());
            }
        }
    }

    #[test]
    fn test_precision_message() {
        assert!(ValidationError::TooManyDecimalPlaces
            .user_message()
            .contains("两位"));
    }
}
