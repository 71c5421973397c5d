//! Basic logger usage example
//!
//! Demonstrates console logging, level thresholds, tags and child loggers.
//!
//! Run with: cargo run --example basic_usage

use tagged_logger::prelude::*;
use tagged_logger::{info, log_print, warn};

fn main() -> Result<()> {
    println!("=== Tagged Logger - Basic Usage Example ===\n");

    // Console logger, colored when the terminal supports it
    let logger = Logger::builder()
        .output("stdout")
        .flags(Flags::TIME | Flags::SHORTFILE)
        .build()?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the threshold:");
    logger.set_level_by_name("warn")?;
    println!("   Threshold set to {} - debug and info won't show:", logger.level());
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    warn!(logger, "Warning message (visible), {} retries left", 2);

    println!("\n3. Tags and child loggers:");
    logger.set_level(Level::Debug)?;
    logger.add_tags(["server"]);
    info!(logger, "listening on port {}", 8080);

    let request = logger.child(["server", "req-17"]);
    request.info("handling request");
    logger.info("parent keeps its own tags");

    println!("\n4. Unleveled output:");
    logger.set_level(Level::Panic)?;
    log_print!(logger, "printed regardless of the threshold");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
