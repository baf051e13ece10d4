// ============================================================================
// Converter Factory
// Creates converters with proper configuration
// ============================================================================

use crate::domain::{ConverterConfig, SessionId};
use crate::engine::Converter;
use crate::interfaces::ConversionHandler;
use std::sync::Arc;

/// Creates a converter from configuration
///
/// # Example
/// ```
/// use amount_capitalizer::prelude::*;
/// use std::sync::Arc;
///
/// let converter = create_from_config(ConverterConfig::default(), Arc::new(NoOpHandler));
/// assert_eq!(converter.convert("1").unwrap().result.as_str(), "壹元整");
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    handler: Arc<dyn ConversionHandler>,
) -> Converter {
    tracing::debug!(
        session = %config.session_id,
        emit_rejections = config.emit_rejections,
        "Creating converter"
    );
    Converter::new(config, handler)
}

// ============================================================================
// Builder Pattern for Converter
// ============================================================================

/// Builder for creating converters with a fluent API
///
/// # Example
/// ```
/// use amount_capitalizer::prelude::*;
/// use std::sync::Arc;
///
/// let session = SessionId::new();
/// let converter = ConverterBuilder::new()
///     .session(session)
///     .report_rejections()
///     .build(Arc::new(NoOpHandler));
///
/// assert_eq!(converter.session_id(), session);
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder bound to a fresh session
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::for_new_session(),
        }
    }

    /// Bind to an existing session
    pub fn session(mut self, session_id: SessionId) -> Self {
        self.config.session_id = session_id;
        self
    }

    /// Report rejected input to the handler
    pub fn report_rejections(mut self) -> Self {
        self.config.emit_rejections = true;
        self
    }

    /// Build the converter
    pub fn build(self, handler: Arc<dyn ConversionHandler>) -> Converter {
        create_from_config(self.config, handler)
    }

    /// Get the configuration (for inspection)
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
