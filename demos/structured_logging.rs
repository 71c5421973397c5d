//! Structured logging example
//!
//! Demonstrates text and JSON attribute rendering, error attributes and
//! mixed field maps.
//!
//! Run with: cargo run --example structured_logging

use chrono::Utc;
use serde::Serialize;
use std::io;
use std::time::{Duration, Instant};
use tagged_logger::prelude::*;

#[derive(Serialize)]
struct Peer {
    host: &'static str,
    port: u16,
}

fn main() -> Result<()> {
    println!("=== Tagged Logger - Structured Logging Example ===\n");

    let logger = Logger::builder()
        .output("stdout")
        .flags(Flags::TIME)
        .tags(["billing"])
        .build()?;

    println!("1. Text attributes:");
    let started = Instant::now();
    logger
        .text()
        .str("customer", "acme")
        .bool("retry", false)
        .duration("elapsed", started.elapsed())
        .info("invoice created");

    println!("\n2. JSON attributes:");
    logger
        .json()
        .str("customer", "acme")
        .any("peer", &Peer { host: "db-1", port: 5432 })
        .time("at", Utc::now())
        .warn("slow query");

    println!("\n3. Errors, with and without a stack:");
    let failure = io::Error::new(io::ErrorKind::TimedOut, "payment gateway timed out");
    logger
        .text()
        .str("gateway", "stripe")
        .err(Some(&failure), false)
        .error("charge failed");

    // None is ignored
    logger.text().err(None::<&io::Error>, true).info("nothing to report");

    println!("\n4. Field maps:");
    logger
        .json()
        .fields([
            ("attempt", FieldValue::from(3i64)),
            ("backoff", FieldValue::from(Duration::from_millis(1500))),
            ("cause", FieldValue::Error("connection reset".into())),
        ])
        .error("giving up");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
