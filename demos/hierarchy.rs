//! Hierarchical resolution example
//!
//! Shows how one call reaches every logger named after its package, file
//! or function, and how unmatched calls fall back to the default logger.
//!
//! Run with: cargo run --example hierarchy

use rust_hier_logger::appenders::{MemoryAppender, StreamAppender};
use rust_hier_logger::prelude::*;
use rust_hier_logger::{caller, info, warn};
use std::sync::Arc;

fn handle_order(logger: &Logger, id: u32) {
    info!(logger, "processing order {}", id);
    if id % 2 == 0 {
        warn!(logger, "order {} needs manual review", id);
    }
}

fn main() -> Result<()> {
    println!("=== Rust Hierarchical Logger - Hierarchy Example ===\n");

    let audit = Arc::new(MemoryAppender::new("%f %l %m", LogLevel::Warn));

    let config = Config::new()
        .logger("hierarchy", StreamAppender::stdout("package  | %l %m%n", LogLevel::Info))
        .logger("hierarchy.hierarchy", StreamAppender::stdout("file     | %l %m%n", LogLevel::Warn))
        .logger(
            "hierarchy.hierarchy.handle_order",
            StreamAppender::stdout("function | %l %f[%L] %m%n", LogLevel::Debug),
        )
        .logger("hierarchy.hierarchy.handle_order", Arc::clone(&audit))
        .logger("billing", StreamAppender::stdout("never used | %m%n", LogLevel::Debug));

    let logger = Logger::with_config(config);

    println!("1. Calls from handle_order reach every matching logger:");
    for id in 1..=2 {
        handle_order(&logger, id);
    }

    println!("\n2. Calls from main only match the package and file loggers:");
    info!(logger, "all orders handled");

    println!("\n3. A call site with no matching logger uses the default logger:");
    let elsewhere = CallerInfo::new("inventory", "stock", "reserve", 7);
    logger.info(Some(&elsewhere), "reserved 3 units");

    println!("\n4. Loggers resolved for this call site:");
    if let Some(here) = caller!() {
        for definition in logger.resolve(Some(&here)) {
            println!("   {} -> {}", definition.name(), definition.appender().layout());
        }
    }

    println!("\n5. Audit trail kept in memory:");
    for record in audit.records() {
        println!("   {}", record);
    }

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
