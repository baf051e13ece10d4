// ============================================================================
// Canonical Amount
// Exact count of fen with a bounded major-unit part
// ============================================================================

use super::errors::{ValidationError, ValidationResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact, non-negative money amount in fen (1/100 of a yuan).
///
/// Internally stores `yuan × 100 + jiao × 10 + fen` as a u64.
///
/// # Value Range
/// - Minimum: 0.00
/// - Maximum: 9,999,999,999,999,999.99 (major part below 10^16, the
///   largest value the 万亿 section can name)
///
/// Values are only ever built from decimal digits or from an exact
/// `rust_decimal::Decimal`; no binary floating point is involved.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
#[repr(transparent)]
pub struct CanonicalAmount(u64);

impl CanonicalAmount {
    /// Sub-units per major unit
    pub const SCALE: u64 = 100;

    /// Largest major-unit part (10^16 - 1)
    pub const MAX_MAJOR: u64 = 9_999_999_999_999_999;

    /// Number of integer digits the major part may have
    pub const MAX_MAJOR_DIGITS: usize = 16;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Largest supported amount
    pub const MAX: Self = Self(Self::MAX_MAJOR * Self::SCALE + (Self::SCALE - 1));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a total count of fen.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the major part would reach 10^16.
    #[inline]
    pub fn from_fen(fen: u64) -> ValidationResult<Self> {
        if fen > Self::MAX.0 {
            Err(ValidationError::OutOfRange)
        } else {
            Ok(Self(fen))
        }
    }

    /// Create from major and sub-unit parts.
    ///
    /// # Arguments
    /// - `major`: Whole yuan
    /// - `sub`: Sub-units, must be < 100
    ///
    /// # Errors
    /// Returns `OutOfRange` for a major part at or above 10^16 or a sub-unit
    /// count of 100 or more.
    #[inline]
    pub fn from_parts(major: u64, sub: u8) -> ValidationResult<Self> {
        if u64::from(sub) >= Self::SCALE || major > Self::MAX_MAJOR {
            return Err(ValidationError::OutOfRange);
        }
        Ok(Self(major * Self::SCALE + u64::from(sub)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total amount in fen.
    #[inline]
    pub const fn fen_total(self) -> u64 {
        self.0
    }

    /// Whole yuan.
    #[inline]
    pub const fn major(self) -> u64 {
        self.0 / Self::SCALE
    }

    /// Fractional part in fen (0-99).
    #[inline]
    pub const fn sub_units(self) -> u8 {
        (self.0 % Self::SCALE) as u8
    }

    /// Tenths digit.
    #[inline]
    pub const fn jiao(self) -> u8 {
        self.sub_units() / 10
    }

    /// Hundredths digit.
    #[inline]
    pub const fn fen(self) -> u8 {
        self.sub_units() % 10
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl CanonicalAmount {
    /// Convert from rust_decimal::Decimal.
    ///
    /// Trailing zeros beyond the second place are accepted ("1.500" is 1.50).
    ///
    /// # Errors
    /// - `Negative` for values below zero
    /// - `TooManyDecimalPlaces` if a nonzero digit sits past the fen place
    /// - `OutOfRange` if the major part reaches 10^16
    pub fn from_decimal(d: rust_decimal::Decimal) -> ValidationResult<Self> {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::Decimal;

        if d < Decimal::ZERO {
            return Err(ValidationError::Negative);
        }
        if d.normalize().scale() > 2 {
            return Err(ValidationError::TooManyDecimalPlaces);
        }

        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(ValidationError::OutOfRange)?;
        let fen = scaled.to_u64().ok_or(ValidationError::OutOfRange)?;

        Self::from_fen(fen)
    }

    /// Convert to rust_decimal::Decimal with a scale of 2.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        // MAX fits in i64 (about 10^18)
        rust_decimal::Decimal::new(self.0 as i64, 2)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl TryFrom<u64> for CanonicalAmount {
    type Error = ValidationError;

    fn try_from(fen: u64) -> Result<Self, Self::Error> {
        Self::from_fen(fen)
    }
}

impl From<CanonicalAmount> for u64 {
    fn from(amount: CanonicalAmount) -> Self {
        amount.0
    }
}

impl std::str::FromStr for CanonicalAmount {
    type Err = ValidationError;

    /// Parse raw amount text; same rules as [`validate`](super::validate).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::validator::validate(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for CanonicalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalAmount({}, fen={})", self, self.0)
    }
}

impl fmt::Display for CanonicalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major(), self.sub_units())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_constants() {
        assert_eq!(CanonicalAmount::SCALE, 100);
        assert_eq!(CanonicalAmount::ZERO.fen_total(), 0);
        assert_eq!(CanonicalAmount::MAX.fen_total(), 999_999_999_999_999_999);
        assert_eq!(CanonicalAmount::MAX.major(), CanonicalAmount::MAX_MAJOR);
        assert_eq!(
            CanonicalAmount::MAX_MAJOR.to_string().len(),
            CanonicalAmount::MAX_MAJOR_DIGITS
        );
    }

    #[test]
    fn test_from_fen() {
        let x = CanonicalAmount::from_fen(123_456).unwrap();
        assert_eq!(x.major(), 1234);
        assert_eq!(x.sub_units(), 56);
        assert_eq!(x.jiao(), 5);
        assert_eq!(x.fen(), 6);

        let result = CanonicalAmount::from_fen(CanonicalAmount::MAX.fen_total() + 1);
        assert_eq!(result, Err(ValidationError::OutOfRange));
    }

    #[test]
    fn test_from_parts() {
        let x = CanonicalAmount::from_parts(10_000, 1).unwrap();
        assert_eq!(x.fen_total(), 1_000_001);
        assert_eq!(x.jiao(), 0);
        assert_eq!(x.fen(), 1);
    }

    #[test]
    fn test_from_parts_invalid() {
        assert_eq!(
            CanonicalAmount::from_parts(1, 100),
            Err(ValidationError::OutOfRange)
        );
        assert_eq!(
            CanonicalAmount::from_parts(0, u8::MAX),
            Err(ValidationError::OutOfRange)
        );
        assert!(CanonicalAmount::from_parts(0, 99).is_ok());
        assert_eq!(
            CanonicalAmount::from_parts(10_000_000_000_000_000, 0),
            Err(ValidationError::OutOfRange)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CanonicalAmount::ZERO.to_string(), "0.00");
        assert_eq!(CanonicalAmount::from_fen(5).unwrap().to_string(), "0.05");
        assert_eq!(
            CanonicalAmount::from_fen(123_450).unwrap().to_string(),
            "1234.50"
        );
        assert_eq!(
            CanonicalAmount::MAX.to_string(),
            "9999999999999999.99"
        );
    }

    #[test]
    fn test_from_str() {
        let x: CanonicalAmount = "1234.56".parse().unwrap();
        assert_eq!(x.fen_total(), 123_456);

        let err: Result<CanonicalAmount, _> = "12a".parse();
        assert_eq!(err, Err(ValidationError::NotNumeric));
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = CanonicalAmount::from_decimal(d).unwrap();
        assert_eq!(x.major(), 123);
        assert_eq!(x.sub_units(), 45);

        // 1.500 carries only trailing zeros past the fen place
        let d = Decimal::new(1500, 3);
        assert_eq!(CanonicalAmount::from_decimal(d).unwrap().fen_total(), 150);
    }

    #[test]
    fn test_from_decimal_invalid() {
        assert_eq!(
            CanonicalAmount::from_decimal(Decimal::new(-5, 0)),
            Err(ValidationError::Negative)
        );
        assert_eq!(
            CanonicalAmount::from_decimal(Decimal::new(12345, 3)),
            Err(ValidationError::TooManyDecimalPlaces)
        );
        assert_eq!(
            CanonicalAmount::from_decimal(Decimal::from(10_000_000_000_000_000u64)),
            Err(ValidationError::OutOfRange)
        );
    }

    #[test]
    fn test_to_decimal() {
        let x = CanonicalAmount::from_fen(123_456).unwrap();
        assert_eq!(x.to_decimal().to_string(), "1234.56");
        assert_eq!(CanonicalAmount::MAX.to_decimal().to_string(), "9999999999999999.99");
    }

    #[test]
    fn test_ordering() {
        let a = CanonicalAmount::from_fen(100).unwrap();
        let b = CanonicalAmount::from_fen(99).unwrap();
        assert!(a > b);
        assert_eq!(a.max(b), a);
    }
}
