//! Structured log builder for fluent log entry construction
//!
//! A builder records attribute operations in call order and replays them into
//! an [`AttributeSet`] when a terminal severity method is called.

use super::attributes::{AttributeSet, FieldValue, Format};
use super::level::Level;
use super::logger::{capture_stack, Logger};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::time::Duration;

/// One recorded attribute operation
#[derive(Debug, Clone)]
enum Attr {
    Field { key: String, value: FieldValue },
    Error(String),
}

/// Builder for structured log lines
///
/// # Example
///
/// ```
/// use tagged_logger::{Logger, MemorySink};
/// use tagged_logger::prelude::*;
///
/// let memory = MemorySink::new();
/// let logger = Logger::with_writer(memory.clone());
/// logger.set_flags(Flags::NONE);
///
/// logger.json()
///     .str("user", "ada")
///     .bool("admin", true)
///     .info("login");
///
/// assert_eq!(
///     memory.contents(),
///     "[INFO] - {\"user\":\"ada\",\"admin\":true,\"msg\":\"login\"}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StructuredLogBuilder<'a> {
    logger: &'a Logger,
    format: Format,
    attrs: Vec<Attr>,
    stack: Option<String>,
}

impl<'a> StructuredLogBuilder<'a> {
    /// Create a new structured log builder
    pub fn new(logger: &'a Logger, format: Format) -> Self {
        Self {
            logger,
            format,
            attrs: Vec::new(),
            stack: None,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    #[must_use]
    pub fn str(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, FieldValue::Str(value.into()))
    }

    #[must_use]
    pub fn bool(self, key: impl Into<String>, value: bool) -> Self {
        self.field(key, FieldValue::Bool(value))
    }

    #[must_use]
    pub fn duration(self, key: impl Into<String>, value: Duration) -> Self {
        self.field(key, FieldValue::Duration(value))
    }

    #[must_use]
    pub fn time(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.field(key, FieldValue::Time(value))
    }

    /// Add an opaque serializable value
    #[must_use]
    pub fn any<T: Serialize + ?Sized>(self, key: impl Into<String>, value: &T) -> Self {
        self.field(key, FieldValue::any(value))
    }

    /// Add a structured field of any supported kind
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.attrs.push(Attr::Field {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Record an error under the `error` key.
    ///
    /// `None` leaves the builder untouched. With `capture_stack_trace` the current
    /// thread's stack is captured now and rendered as a `stack` attribute.
    #[must_use]
    pub fn err<E>(mut self, err: Option<&E>, capture_stack_trace: bool) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        let Some(err) = err else {
            return self;
        };

        self.attrs.push(Attr::Error(err.to_string()));
        if capture_stack_trace {
            self.stack = Some(capture_stack(self.logger.skip()));
        }
        self
    }

    /// Add several fields, dispatched by value kind.
    ///
    /// Error values go through [`err`](Self::err) without a stack; byte
    /// values are stored as text.
    #[must_use]
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (key, value) in fields {
            self = match value.into() {
                FieldValue::Error(message) => self.err(Some(message.as_str()), false),
                FieldValue::Bytes(bytes) => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    self.field(key, FieldValue::Str(text))
                }
                value => self.field(key, value),
            };
        }
        self
    }

    /// Replay the recorded operations into a fresh attribute set
    pub fn attributes(&self) -> AttributeSet {
        let mut set = AttributeSet::with_format(self.format);
        for attr in &self.attrs {
            match attr {
                Attr::Field { key, value } => set.insert(key.clone(), value.clone()),
                Attr::Error(message) => set.set_error(message.clone()),
            }
        }
        if let Some(ref stack) = self.stack {
            set.set_stack(stack.clone());
        }
        set
    }

    /// Render and write one line; the threshold has already been checked
    fn write(&self, level: Level, message: &str, location: &Location<'_>) {
        // write errors are counted in metrics, never raised
        let _ = self
            .logger
            .emit_attrs(level, &self.attributes(), message, location);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, message, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, message, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message, Location::caller());
    }

    /// Write at FATAL, then run the logger's exit hook with code 1
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        if self.emit(Level::Fatal, message, Location::caller()) {
            self.logger.exit(1);
        }
    }

    /// Write at PANIC, then unwind with the message as the panic payload
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) {
        if !self.logger.enabled(Level::Panic) {
            return;
        }
        let text = message.to_string();
        self.write(Level::Panic, &text, Location::caller());
        std::panic::panic_any(text);
    }

    /// Filter, then format and write; returns whether the line passed the threshold
    fn emit(&self, level: Level, message: impl fmt::Display, location: &Location<'_>) -> bool {
        if !self.logger.enabled(level) {
            return false;
        }
        self.write(level, &message.to_string(), location);
        true
    }
}

impl Logger {
    /// Start a structured line rendered as `key=value` text
    pub fn text(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, Format::Text)
    }

    /// Start a structured line rendered as one JSON object
    pub fn json(&self) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, Format::Json)
    }

    pub fn structured(&self, format: Format) -> StructuredLogBuilder<'_> {
        StructuredLogBuilder::new(self, format)
    }
}
