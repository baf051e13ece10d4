// ============================================================================
// Converter Configuration
// ============================================================================

use super::SessionId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a session-bound [`Converter`](crate::engine::Converter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Session every record is stamped with
    pub session_id: SessionId,

    /// Whether rejected input is reported to the handler as well.
    /// Off by default.
    pub emit_rejections: bool,
}

impl ConverterConfig {
    /// Create a configuration for an existing session
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            emit_rejections: false,
        }
    }

    /// Create a configuration with a freshly minted session
    pub fn for_new_session() -> Self {
        Self::new(SessionId::new())
    }

    /// Builder method: Report rejections to the handler
    pub fn with_rejections(mut self, emit: bool) -> Self {
        self.emit_rejections = emit;
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::for_new_session()
    }
}
