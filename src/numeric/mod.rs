// ============================================================================
// Numeric Module
// Exact money amounts and the validator that builds them
// ============================================================================
//
// This module provides:
// - CanonicalAmount: integer count of fen, major part below 10^16
// - validate: raw text -> CanonicalAmount
// - ValidationError: the closed set of rejection reasons
//
// Design principles:
// - No floating-point operations
// - Every rejection is a returned value (no panics)
// - Digits are folded straight into integers, never parsed via f64

mod amount;
mod errors;
mod validator;

pub use amount::CanonicalAmount;
pub use errors::{ValidationError, ValidationResult};
pub use validator::{validate, MAX_DECIMAL_PLACES};
