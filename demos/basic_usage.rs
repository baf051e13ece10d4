// ============================================================================
// Basic Usage Example
// ============================================================================

use amount_capitalizer::formatter::{NUMERAL_REFERENCE, UNIT_REFERENCE};
use amount_capitalizer::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Amount Capitalizer Example ===\n");

    let handler = Arc::new(CollectingHandler::new());
    let converter = ConverterBuilder::new()
        .report_rejections()
        .build(handler.clone());

    println!("Session {}\n", converter.session_id());

    for raw in ["1234.56", "10000.01", "100000000", "0", "12.345", "-5", "12a"] {
        match converter.convert(raw) {
            Ok(record) => println!("  {:>12} -> {}", raw, record.result),
            Err(err) => println!("  {:>12} !! {} ({})", raw, err.user_message(), err),
        }
    }

    // What a history view would list
    let mut records: Vec<ConversionRecord> = handler
        .drain()
        .into_iter()
        .filter_map(|event| match event {
            ConversionEvent::Converted { record } => Some(record),
            ConversionEvent::Rejected { .. } => None,
        })
        .collect();
    sort_newest_first(&mut records);

    println!("\n=== History (newest first) ===");
    for record in &records {
        println!("  {} {} = {}", record.created_at.format("%H:%M:%S%.3f"), record.amount, record.result);
    }

    println!("\n=== Quick Reference ===");
    for row in NUMERAL_REFERENCE.iter().chain(UNIT_REFERENCE.iter()) {
        println!("  {:>5}  {}  {}", row.arabic, row.glyph, row.pinyin);
    }
}
