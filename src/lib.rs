//! # Tagged Logger
//!
//! A leveled, taggable logging facility writing one line per call to a
//! byte sink.
//!
//! ## Features
//!
//! - **Leveled**: DEBUG through PANIC plus an always-emitted STACK level
//! - **Tagged**: every header carries the logger's tags; child loggers get their own
//! - **Structured**: `key=value` or JSON attributes through a fluent builder
//! - **Thread Safe**: one lock per logger, lines are never torn
//!
//! ```
//! use tagged_logger::prelude::*;
//!
//! let logger = Logger::new("null").unwrap();
//! logger.add_tags(["api"]);
//! logger.info("listening");
//!
//! let request = logger.child(["api", "req-42"]);
//! request.text().str("path", "/health").info("served");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AttributeSet, ExitHook, FieldValue, Flags, Format, Level, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, StructuredLogBuilder,
    };
    pub use crate::sinks::{MemorySink, SharedSink};
}

pub use core::{
    AttributeSet, ExitHook, FieldValue, Flags, Format, Level, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, StructuredLogBuilder, DEFAULT_SKIP,
};
pub use sinks::{FileSink, MemorySink, SharedSink};
