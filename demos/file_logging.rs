//! File logging example
//!
//! Loads a JSON configuration that sends records to the console and to a
//! file at different thresholds.
//!
//! Run with: cargo run --example file_logging --features file

use rust_hier_logger::prelude::*;
use rust_hier_logger::{debug, error, info, warn};

const CONFIG: &str = r#"{
    "loggers": [
        {
            "name": "file_logging",
            "layout": "%d{HH:mm:ss} %l - %m%n",
            "threshold": "INFO",
            "target": "stdout"
        },
        {
            "name": "file_logging.file_logging",
            "layout": "%d{yyyy-MM-dd HH:mm:ss.SSS} %l %f[%L] - %m%n",
            "threshold": "DEBUG",
            "target": {"file": "application.log"}
        }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Rust Hierarchical Logger - File Logging Example ===\n");

    let logger = Logger::with_config(Config::from_json(CONFIG)?);

    println!("1. Logging to both console and file:");
    info!(logger, "Application started");
    debug!(logger, "Loading configuration (file only)");
    info!(logger, "Configuration loaded successfully");
    warn!(logger, "Using default settings for some options");
    error!(logger, "Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i);
        if i == 3 {
            warn!(logger, "Item 3 took longer than expected");
        }
    }
    info!(logger, "All operations completed");

    // Flush to ensure all records reach the file
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
