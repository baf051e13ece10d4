// ============================================================================
// Conversion Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::domain::{ConversionRecord, SessionId};
use crate::numeric::ValidationError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the converter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Input validated and capitalized; the record is ready to persist
    Converted { record: ConversionRecord },

    /// Input rejected by the validator
    Rejected {
        session_id: SessionId,
        input: String,
        error: ValidationError,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            ConversionEvent::Converted { record } => record.session_id,
            ConversionEvent::Rejected { session_id, .. } => *session_id,
        }
    }
}

/// Handler trait for conversion events.
/// Implementations can persist history, log, notify a UI, etc.
pub trait ConversionHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op handler for testing
pub struct NoOpHandler;

impl ConversionHandler for NoOpHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging handler
pub struct LoggingHandler;

impl ConversionHandler for LoggingHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Converted { record } => tracing::debug!(
                session = %record.session_id,
                amount = %record.amount,
                result = %record.result,
                "Conversion recorded"
            ),
            ConversionEvent::Rejected { session_id, input, error, .. } => tracing::debug!(
                session = %session_id,
                input = %input,
                %error,
                "Conversion rejected"
            ),
        }
    }
}

/// Buffers every event in memory, in arrival order.
#[derive(Default)]
pub struct CollectingHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return every buffered event
    pub fn drain(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl ConversionHandler for CollectingHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ConversionEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    /// Log sink the test subscriber writes into.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    fn rejected(session_id: SessionId) -> ConversionEvent {
        ConversionEvent::Rejected {
            session_id,
            input: "12a".to_string(),
            error: ValidationError::NotNumeric,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_event(rejected(SessionId::new()));
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let session = SessionId::new();
        let logs = captured_logs(|| LoggingHandler.on_events(vec![rejected(session)]));

        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("Conversion rejected"));
        assert!(logs.contains("12a"));
        assert!(logs.contains(&session.to_string()));
    }

    #[test]
    fn test_logging_handler_records_converted() {
        let record = ConversionRecord::new(
            SessionId::new(),
            "1.01".to_string(),
            crate::convert("1.01").unwrap(),
        );
        let logs = captured_logs(|| LoggingHandler.on_event(ConversionEvent::Converted { record }));

        assert!(logs.contains("Conversion recorded"));
        assert!(logs.contains("壹元零壹分"));
    }

    #[test]
    fn test_collecting_handler() {
        let session = SessionId::new();
        let handler = CollectingHandler::new();
        assert!(handler.is_empty());

        handler.on_event(rejected(session));
        handler.on_events(vec![rejected(session), rejected(session)]);
        assert_eq!(handler.len(), 3);
        assert!(handler.events().iter().all(|e| e.session_id() == session));

        assert_eq!(handler.drain().len(), 3);
        assert!(handler.is_empty());
    }
}
