//! Basic logger usage example
//!
//! Demonstrates the default logger, per-logger thresholds and layouts.
//!
//! Run with: cargo run --example basic_usage

use rust_hier_logger::appenders::ConsoleAppender;
use rust_hier_logger::prelude::*;
use rust_hier_logger::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Hierarchical Logger - Basic Usage Example ===\n");

    // Without configuration every call reaches the default logger
    println!("1. Unconfigured logger (INFO and above, default layout):");
    let logger = Logger::new();
    debug!(logger, "This debug message is below the default threshold");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    // Calls from this example resolve to the `basic_usage` logger
    println!("\n2. Configured logger with its own layout and threshold:");
    let config = Config::new().logger(
        "basic_usage",
        ConsoleAppender::new("%d{HH:mm:ss.SSS} [%l] %f:%L %m%n", LogLevel::Debug),
    );
    let logger = Logger::with_config(config);
    debug!(logger, "Debug messages are visible now");
    info!(logger, "Formatted arguments: {} + {} = {}", 2, 3, 2 + 3);
    info!(logger, "A literal 100% is printed verbatim");

    println!("\n3. Coloured console output:");
    let config = Config::new().logger(
        "basic_usage",
        ConsoleAppender::new("%l %m%n", LogLevel::Debug).with_colors(true),
    );
    let logger = Logger::with_config(config);
    for level in LogLevel::ALL {
        rust_hier_logger::log!(logger, level, "Logged at {}", level);
    }

    let metrics = logger.metrics();
    println!(
        "\nWritten: {}, filtered: {}, failed: {}",
        metrics.written_count(),
        metrics.filtered_count(),
        metrics.failed_count()
    );

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
