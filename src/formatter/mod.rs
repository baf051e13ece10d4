// ============================================================================
// Formatter Module
// Capitalized-numeral rendering of canonical amounts
// ============================================================================
//
// This module provides:
// - format: CanonicalAmount -> CapitalizedAmount (infallible)
// - glyphs: const digit/unit tables and the quick-reference chart
// - a section fold that carries all zero-elision rules
//
// Design principles:
// - No error path: rejection belongs to the validator
// - Tables are const arrays, never mutated
// - Each elision rule is a named branch of the fold

mod capitalize;
mod capitalized;
pub mod glyphs;
mod sections;

pub use capitalize::format;
pub use capitalized::CapitalizedAmount;
pub use glyphs::{GlyphReference, NUMERAL_REFERENCE, UNIT_REFERENCE};
