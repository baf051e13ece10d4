// ============================================================================
// Converter
// Validate -> format pipeline bound to a session
// ============================================================================

use crate::domain::{ConversionRecord, ConverterConfig, SessionId};
use crate::formatter::{format, CapitalizedAmount};
use crate::interfaces::{ConversionEvent, ConversionHandler};
use crate::numeric::{validate, ValidationError, ValidationResult};
use chrono::Utc;
use std::sync::Arc;

/// Pipeline outcome plus the event to report, if any
type Processed =
    Result<(ConversionRecord, ConversionEvent), (ValidationError, Option<ConversionEvent>)>;

/// Convert raw amount text straight to its capitalized form.
///
/// # Example
/// ```
/// use amount_capitalizer::{convert, ValidationError};
///
/// assert_eq!(convert("10000.01").unwrap().as_str(), "壹万元零壹分");
/// assert_eq!(convert("12.345"), Err(ValidationError::TooManyDecimalPlaces));
/// ```
pub fn convert(raw: &str) -> ValidationResult<CapitalizedAmount> {
    validate(raw).map(format)
}

/// Session-bound converter that reports each conversion to a handler
pub struct Converter {
    /// Session and reporting settings
    config: ConverterConfig,

    /// Event handler for processing events
    handler: Arc<dyn ConversionHandler>,
}

impl Converter {
    /// Create a new converter
    pub fn new(config: ConverterConfig, handler: Arc<dyn ConversionHandler>) -> Self {
        Self { config, handler }
    }

    /// Convert one input and report the outcome.
    ///
    /// On success the returned record is the one handed to the handler.
    pub fn convert(&self, raw: &str) -> ValidationResult<ConversionRecord> {
        match self.process(raw) {
            Ok((record, event)) => {
                self.handler.on_event(event);
                Ok(record)
            }
            Err((error, event)) => {
                if let Some(event) = event {
                    self.handler.on_event(event);
                }
                Err(error)
            }
        }
    }

    /// Convert several inputs, reporting all events in one batch.
    ///
    /// Results keep input order.
    pub fn convert_batch<'a, I>(&self, inputs: I) -> Vec<ValidationResult<ConversionRecord>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut events = Vec::new();
        let results: Vec<_> = inputs
            .into_iter()
            .map(|raw| match self.process(raw) {
                Ok((record, event)) => {
                    events.push(event);
                    Ok(record)
                }
                Err((error, event)) => {
                    events.extend(event);
                    Err(error)
                }
            })
            .collect();

        if !events.is_empty() {
            self.handler.on_events(events);
        }
        results
    }

    /// Get the session every record is stamped with
    pub fn session_id(&self) -> SessionId {
        self.config.session_id
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn process(&self, raw: &str) -> Processed {
        match convert(raw) {
            Ok(result) => {
                let record =
                    ConversionRecord::new(self.config.session_id, raw.to_string(), result);
                tracing::trace!(
                    session = %record.session_id,
                    amount = %record.amount,
                    result = %record.result,
                    "Converted amount"
                );
                let event = ConversionEvent::Converted {
                    record: record.clone(),
                };
                Ok((record, event))
            }
            Err(error) => {
                tracing::debug!(session = %self.config.session_id, input = raw, %error, "Rejected amount");
                let event = self.config.emit_rejections.then(|| ConversionEvent::Rejected {
                    session_id: self.config.session_id,
                    input: raw.to_string(),
                    error,
                    timestamp: Utc::now(),
                });
                Err((error, event))
            }
        }
    }
}
