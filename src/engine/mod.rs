// ============================================================================
// Engine Module
// Runs the validate -> format pipeline and reports the outcome
// ============================================================================

mod converter;

pub mod factory;

pub use converter::{convert, Converter};
pub use factory::{create_from_config, ConverterBuilder};
