//! File logging example
//!
//! Demonstrates an append-mode file output configured from JSON, with
//! worker threads writing through child loggers.
//!
//! Run with: cargo run --example file_logging

use std::thread;
use tagged_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tagged Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "output": "application.log",
            "level": "info",
            "tags": ["app"],
            "flags": ["date", "time", "longfile"]
        }"#,
    )?;
    let logger = Logger::from_config(&config)?;

    println!("1. Logging to application.log:");
    logger.info("Application started");
    logger.debug("Loading configuration... (below threshold)");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("2. Workers sharing the same file:");
    let handles: Vec<_> = (1..=3)
        .map(|id| {
            let worker = logger.child(["app", "worker"]);
            worker.add_tags([format!("w{}", id)]);
            thread::spawn(move || {
                for item in 1..=5 {
                    worker.info(format_args!("Processing item {}/5", item));
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }

    logger.info("All operations completed");
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "   {} lines written, {} filtered, {} failed",
        metrics.emitted(),
        metrics.filtered(),
        metrics.write_failures()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
