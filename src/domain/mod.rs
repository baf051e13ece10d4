// ============================================================================
// Domain Models Module
// Session-scoped records handed to collaborators
// ============================================================================

pub mod config;
pub mod record;
pub mod session;

pub use config::ConverterConfig;
pub use record::{sort_newest_first, ConversionRecord};
pub use session::SessionId;
