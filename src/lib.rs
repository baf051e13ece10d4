// ============================================================================
// Amount Capitalizer Library
// Exact conversion of money amounts into Chinese capitalized numerals
// ============================================================================

//! # Amount Capitalizer
//!
//! Converts a decimal money amount into the capitalized numerals written on
//! Chinese financial documents, e.g. `"1234.56"` → `"壹仟贰佰叁拾肆元伍角陆分"`.
//!
//! ## Features
//!
//! - **Exact amounts**: text is folded digit by digit into a count of fen,
//!   never through floating point
//! - **Closed error set**: every rejection is a [`ValidationError`] value
//! - **Infallible formatting**: once validated, an amount always renders
//! - **Session-bound converter** that hands records to a pluggable handler
//!
//! ## Example
//!
//! ```rust
//! use amount_capitalizer::prelude::*;
//! use std::sync::Arc;
//!
//! // Pure pipeline
//! let amount = validate("100000000").unwrap();
//! assert_eq!(format(amount).as_str(), "壹亿元整");
//!
//! // Session-bound converter
//! let converter = Converter::new(ConverterConfig::for_new_session(), Arc::new(NoOpHandler));
//! let record = converter.convert("10000.01").unwrap();
//! assert_eq!(record.result.as_str(), "壹万元零壹分");
//! ```

pub mod domain;
pub mod engine;
pub mod formatter;
pub mod interfaces;
pub mod numeric;

pub use engine::convert;
pub use formatter::{format, CapitalizedAmount};
pub use numeric::{validate, CanonicalAmount, ValidationError, ValidationResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{sort_newest_first, ConversionRecord, ConverterConfig, SessionId};
    pub use crate::engine::{convert, create_from_config, Converter, ConverterBuilder};
    pub use crate::formatter::{format, CapitalizedAmount};
    pub use crate::interfaces::{
        CollectingHandler, ConversionEvent, ConversionHandler, LoggingHandler, NoOpHandler,
    };
    pub use crate::numeric::{validate, CanonicalAmount, ValidationError, ValidationResult};
}

/// Install a `tracing` subscriber for binaries and demos.
///
/// The filter is read from `AMOUNT_CAPITALIZER_LOG` and defaults to `warn`.
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "logging")]
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("AMOUNT_CAPITALIZER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_conversion() {
        let handler = Arc::new(CollectingHandler::new());
        let session = SessionId::new();
        let converter = ConverterBuilder::new()
            .session(session)
            .report_rejections()
            .build(handler.clone());

        let first = converter.convert("1234.56").unwrap();
        assert_eq!(first.result, "壹仟贰佰叁拾肆元伍角陆分");

        let rejected = converter.convert("12.345");
        assert_eq!(rejected, Err(ValidationError::TooManyDecimalPlaces));

        let second = converter.convert("100000000").unwrap();
        assert_eq!(second.result, "壹亿元整");

        // Persisted records are exactly the converted events
        let mut records: Vec<ConversionRecord> = handler
            .events()
            .into_iter()
            .filter_map(|event| match event {
                ConversionEvent::Converted { record } => Some(record),
                ConversionEvent::Rejected { .. } => None,
            })
            .collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.belongs_to(&session)));

        sort_newest_first(&mut records);
        assert!(records[0].created_at >= records[1].created_at);
    }

    #[test]
    fn test_validate_then_format_matches_convert() {
        for raw in ["0", "0.01", "1.01", "10000.01", "9999999999999999.99"] {
            let piped = validate(raw).map(format);
            assert_eq!(piped, convert(raw));
        }
    }

    #[test]
    fn test_error_messages_for_presentation() {
        let err = convert("12.345").unwrap_err();
        assert_eq!(
            err.user_message(),
            "请提供有效金额，且小数点后最多保留两位（角、分）。"
        );
    }
}
