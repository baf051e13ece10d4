// ============================================================================
// Interfaces Module
// Contains the trait definitions collaborators implement
// ============================================================================

mod conversion_handler;

pub use conversion_handler::{
    CollectingHandler, ConversionEvent, ConversionHandler, LoggingHandler, NoOpHandler,
};
