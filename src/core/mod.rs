//! Core logger types

pub mod attributes;
pub mod config;
pub mod error;
pub mod header;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod paint;
pub mod structured_builder;

pub use attributes::{AttributeSet, FieldValue, Format, ERROR_KEY, MESSAGE_KEY, STACK_KEY};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use header::Flags;
pub use level::Level;
pub use logger::{ExitHook, Logger, LoggerBuilder, DEFAULT_SKIP};
pub use metrics::LoggerMetrics;
pub use structured_builder::StructuredLogBuilder;
