//! Main logger implementation

use super::{
    attributes::AttributeSet,
    error::{LoggerError, Result},
    header::{self, Flags},
    level::Level,
    metrics::LoggerMetrics,
    paint,
};
use crate::sinks::{self, SharedSink};
use chrono::Local;
use parking_lot::Mutex;
use std::backtrace::Backtrace;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

/// Default number of leading frames dropped from captured stack dumps
pub const DEFAULT_SKIP: usize = 2;

/// Initial capacity of each logger's line buffer
const BUFFER_CAPACITY: usize = 256;

/// Header label of lines written by [`Logger::print`]
const PRINT_LABEL: &str = "PRINT";

/// Called with exit code 1 after a `fatal` or `trace` line has been written
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

fn process_exit() -> ExitHook {
    Arc::new(|code| std::process::exit(code))
}

/// Everything guarded by the logger's lock
struct State {
    sink: SharedSink,
    buf: Vec<u8>,
    level: Level,
    tags: Vec<String>,
    flags: Flags,
    skip: usize,
    color: bool,
}

/// Leveled, taggable logger.
///
/// One exclusive lock guards the sink handle, the reusable line buffer and all
/// configuration. A line is rendered into the buffer and handed to the sink in
/// a single write while the lock is held, so concurrent callers sharing one
/// `Logger` never interleave bytes. Callers that want their own tags without
/// contending on the buffer derive a [`child`](Logger::child).
///
/// # Example
///
/// ```
/// use tagged_logger::{Level, Logger, MemorySink};
///
/// let memory = MemorySink::new();
/// let logger = Logger::with_writer(memory.clone());
/// logger.set_level(Level::Info).unwrap();
/// logger.set_tags(["api"]);
///
/// logger.debug("hidden");
/// logger.info("request served");
///
/// assert_eq!(memory.lines().len(), 1);
/// assert!(memory.contents().contains("[INFO, api] - "));
/// ```
pub struct Logger {
    state: Mutex<State>,
    exit_hook: ExitHook,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger writing to an output descriptor.
    ///
    /// Available outputs are `stdout`, `stderr`, `null`/`nil` or a file path.
    pub fn new(output: &str) -> Result<Self> {
        Logger::builder().output(output).build()
    }

    /// Create a logger writing to a shared sink, without colors
    pub fn with_sink(sink: SharedSink) -> Self {
        Self::from_parts(
            sink,
            Level::default(),
            Vec::new(),
            Flags::DEFAULT,
            DEFAULT_SKIP,
            false,
            process_exit(),
        )
    }

    /// Create a logger writing to any writer, without colors
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_sink(sinks::shared(writer))
    }

    fn from_parts(
        sink: SharedSink,
        level: Level,
        tags: Vec<String>,
        flags: Flags,
        skip: usize,
        color: bool,
        exit_hook: ExitHook,
    ) -> Self {
        Self {
            state: Mutex::new(State {
                sink,
                buf: Vec::with_capacity(BUFFER_CAPACITY),
                level,
                tags,
                flags,
                skip,
                color,
            }),
            exit_hook,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Derive a logger sharing this one's sink.
    ///
    /// The child copies the threshold, flags, skip depth and color setting,
    /// owns a fresh buffer, and uses exactly `tags` (they are not merged with
    /// the parent's).
    pub fn child<I, S>(&self, tags: I) -> Logger
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = self.state.lock();
        Logger {
            state: Mutex::new(State {
                sink: Arc::clone(&state.sink),
                buf: Vec::with_capacity(BUFFER_CAPACITY),
                level: state.level,
                tags: tags.into_iter().map(Into::into).collect(),
                flags: state.flags,
                skip: state.skip,
                color: state.color,
            }),
            exit_hook: Arc::clone(&self.exit_hook),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Set the minimum level that gets written
    pub fn set_level(&self, level: Level) -> Result<()> {
        if !level.is_valid() {
            return Err(LoggerError::invalid_level(level));
        }
        self.state.lock().level = level;
        Ok(())
    }

    /// Set the minimum level by name: debug, info, warn, error, fatal, panic
    /// or stack (case-insensitive)
    pub fn set_level_by_name(&self, name: &str) -> Result<()> {
        let level = Level::resolve(name);
        if !level.is_valid() {
            return Err(LoggerError::invalid_level(name));
        }
        self.state.lock().level = level;
        Ok(())
    }

    pub fn level(&self) -> Level {
        self.state.lock().level
    }

    /// Replace the tags rendered in every header
    pub fn set_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(Into::into).collect();
        self.state.lock().tags = tags;
    }

    /// Append tags, ignoring ones already present
    pub fn add_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.lock();
        for tag in tags {
            let tag = tag.into();
            if !state.tags.contains(&tag) {
                state.tags.push(tag);
            }
        }
    }

    /// Snapshot of the current tags
    pub fn tags(&self) -> Vec<String> {
        self.state.lock().tags.clone()
    }

    /// Replace the sink
    pub fn set_sink(&self, sink: SharedSink) {
        self.state.lock().sink = sink;
    }

    /// Replace the sink with a writer owned by this logger
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.set_sink(sinks::shared(writer));
    }

    /// Handle to the current sink, for sharing it with another logger
    pub fn sink(&self) -> SharedSink {
        Arc::clone(&self.state.lock().sink)
    }

    pub fn set_color(&self, color: bool) {
        self.state.lock().color = color;
    }

    pub fn color(&self) -> bool {
        self.state.lock().color
    }

    /// Select which header fields are rendered
    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    /// Set how many leading frames are dropped from captured stack dumps.
    ///
    /// The caller location in headers comes from `#[track_caller]` and is not
    /// affected; wrappers pass their own location through [`emit_at`](Logger::emit_at).
    pub fn set_skip(&self, depth: usize) {
        self.state.lock().skip = depth;
    }

    pub fn skip(&self) -> usize {
        self.state.lock().skip
    }

    /// Counters shared with every child of this logger
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether a call at `level` passes the threshold.
    ///
    /// `Trace` always passes. Filtered calls are counted.
    pub fn enabled(&self, level: Level) -> bool {
        if level == Level::Trace || self.state.lock().level <= level {
            return true;
        }
        self.metrics.record_filtered();
        false
    }

    /// Write one line at `level`, unfiltered.
    ///
    /// A newline is appended unless `text` already ends with one. Returns
    /// `InvalidLevel` without writing anything for levels outside the valid
    /// range, and the sink's error if the write fails.
    #[track_caller]
    pub fn emit(&self, level: Level, text: &str) -> Result<()> {
        self.emit_at(level, text, Location::caller())
    }

    /// [`emit`](Logger::emit) with an explicit caller location, for wrappers
    pub fn emit_at(&self, level: Level, text: &str, location: &Location<'_>) -> Result<()> {
        if !level.is_valid() {
            return Err(LoggerError::invalid_level(level));
        }
        self.write_line(level.to_str(), Some(level), text, location)
    }

    /// Write a structured line: header followed by `attrs` combined with `message`
    pub fn emit_attrs(
        &self,
        level: Level,
        attrs: &AttributeSet,
        message: &str,
        location: &Location<'_>,
    ) -> Result<()> {
        if !level.is_valid() {
            return Err(LoggerError::invalid_level(level));
        }
        let body = attrs.render_with_message(message);
        self.write_line(level.to_str(), Some(level), &body, location)
    }

    fn write_line(
        &self,
        label: &str,
        brush: Option<Level>,
        text: &str,
        location: &Location<'_>,
    ) -> Result<()> {
        // resolved before locking; only rendered if a file flag is set
        let caller = (location.file(), location.line());

        let mut guard = self.state.lock();
        let State {
            sink,
            buf,
            tags,
            flags,
            color,
            ..
        } = &mut *guard;

        buf.clear();
        let escapes = if *color { brush.and_then(paint::escapes) } else { None };
        if let Some((ref start, _)) = escapes {
            buf.extend_from_slice(start.as_bytes());
        }

        header::write_header(buf, &Local::now(), *flags, label, tags, Some(caller));
        buf.extend_from_slice(text.as_bytes());
        if !text.ends_with('\n') {
            buf.push(b'\n');
        }

        if let Some((_, end)) = escapes {
            buf.extend_from_slice(end.as_bytes());
        }

        let result = sink.lock().write_all(buf);
        drop(guard);

        match result {
            Ok(()) => {
                self.metrics.record_emitted();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_failure();
                Err(LoggerError::SinkWrite(e))
            }
        }
    }

    /// Write a captured stack dump line by line, each optionally colored
    fn write_stack(&self, level: Level, dump: &str) -> Result<()> {
        let mut guard = self.state.lock();
        let State {
            sink, buf, color, ..
        } = &mut *guard;

        buf.clear();
        for line in dump.lines() {
            if *color {
                buf.extend_from_slice(paint::paint(level, line).as_bytes());
            } else {
                buf.extend_from_slice(line.as_bytes());
            }
            buf.push(b'\n');
        }

        let result = sink.lock().write_all(buf);
        drop(guard);
        result.map_err(|e| {
            self.metrics.record_write_failure();
            LoggerError::SinkWrite(e)
        })
    }

    /// Run the exit hook
    pub(crate) fn exit(&self, code: i32) {
        (self.exit_hook)(code);
    }

    /// Log `message` at `level` if it passes the threshold.
    ///
    /// `message` is only formatted when the call is not filtered, so
    /// `format_args!` arguments cost nothing below the threshold. Fatal,
    /// panic and trace levels keep their terminating behavior.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        match level {
            Level::Fatal => self.fatal(message),
            Level::Panic => self.panic(message),
            Level::Trace => self.trace(message),
            _ => {
                if self.enabled(level) {
                    // write errors are counted in metrics, never raised
                    let _ = self.emit_at(level, &message.to_string(), Location::caller());
                }
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Log at FATAL, then run the exit hook with code 1.
    ///
    /// With the default hook the process exits and this never returns.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        if !self.enabled(Level::Fatal) {
            return;
        }
        let _ = self.emit_at(Level::Fatal, &message.to_string(), Location::caller());
        self.exit(1);
    }

    /// Log at PANIC, then unwind with the message as the panic payload
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) {
        if !self.enabled(Level::Panic) {
            return;
        }
        let text = message.to_string();
        let _ = self.emit_at(Level::Panic, &text, Location::caller());
        std::panic::panic_any(text);
    }

    /// Log at STACK regardless of the threshold, dump the current thread's
    /// stack, then run the exit hook with code 1
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        let _ = self.emit_at(Level::Trace, &message.to_string(), Location::caller());
        let dump = capture_stack(self.skip());
        let _ = self.write_stack(Level::Trace, &dump);
        self.exit(1);
    }

    /// Write `message` under the `PRINT` label, bypassing the threshold
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        let _ = self.write_line(PRINT_LABEL, None, &message.to_string(), Location::caller());
    }

    /// Flush the sink
    pub fn flush(&self) -> Result<()> {
        let sink = self.sink();
        let result = sink.lock().flush();
        result.map_err(LoggerError::SinkWrite)
    }
}

/// Capture the current thread's stack, dropping the first `skip` frames
pub(crate) fn capture_stack(skip: usize) -> String {
    let dump = Backtrace::force_capture().to_string();
    drop_frames(&dump, skip)
}

/// Remove the first `skip` frames of a rendered backtrace.
///
/// A frame starts at a line of the form `  N: symbol`; its `at file:line`
/// lines follow it.
fn drop_frames(dump: &str, skip: usize) -> String {
    let mut frame: Option<usize> = None;
    let mut out = String::with_capacity(dump.len());
    for line in dump.lines() {
        if is_frame_start(line) {
            frame = Some(frame.map_or(0, |n| n + 1));
        }
        if frame.map_or(true, |n| n >= skip) {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn is_frame_start(line: &str) -> bool {
    match line.trim_start().split_once(':') {
        Some((index, _)) => !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

impl Write for &Logger {
    /// Raw bytes go straight to the sink under the logger's lock, without a header
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let state = self.state.lock();
        let result = state.sink.lock().write_all(buf);
        result.map(|()| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let state = self.state.lock();
        let result = state.sink.lock().flush();
        result
    }
}

impl Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(&mut &*self)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("tags", &state.tags)
            .field("flags", &state.flags)
            .field("skip", &state.skip)
            .field("color", &state.color)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        // the last holder of a sink flushes it
        if Arc::strong_count(&state.sink) == 1 {
            if let Err(e) = state.sink.lock().flush() {
                eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use tagged_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .output("null")
///     .level(Level::Info)
///     .tags(["worker", "eu-west"])
///     .flags(Flags::DATE | Flags::TIME | Flags::SHORTFILE)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.tags(), vec!["worker", "eu-west"]);
/// ```
pub struct LoggerBuilder {
    output: Option<String>,
    sink: Option<SharedSink>,
    level: Level,
    tags: Vec<String>,
    flags: Flags,
    skip: usize,
    color: Option<bool>,
    exit_hook: Option<ExitHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            output: None,
            sink: None,
            level: Level::default(),
            tags: Vec::new(),
            flags: Flags::DEFAULT,
            skip: DEFAULT_SKIP,
            color: None,
            exit_hook: None,
        }
    }

    /// Output descriptor: stdout, stderr, null/nil or a file path (default stderr)
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, descriptor: impl Into<String>) -> Self {
        self.output = Some(descriptor.into());
        self
    }

    /// Write to an existing sink instead of opening an output
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Write to a writer instead of opening an output
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.sink(sinks::shared(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn skip(mut self, depth: usize) -> Self {
        self.skip = depth;
        self
    }

    /// Force colors on or off; by default only console outputs are colored
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Replace process exit after fatal and trace lines
    #[must_use = "builder methods return a new value"]
    pub fn exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = Some(hook);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        if !self.level.is_valid() {
            return Err(LoggerError::invalid_level(self.level));
        }

        let (sink, default_color) = match self.sink {
            Some(sink) => (sink, false),
            None => {
                let opened = sinks::open(self.output.as_deref().unwrap_or("stderr"))?;
                let color = opened.kind.default_color();
                (opened.sink, color)
            }
        };

        Ok(Logger::from_parts(
            sink,
            self.level,
            self.tags,
            self.flags,
            self.skip,
            self.color.unwrap_or(default_color),
            self.exit_hook.unwrap_or_else(process_exit),
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicI32, Ordering};

    fn memory_logger() -> (Logger, MemorySink) {
        let memory = MemorySink::new();
        let logger = Logger::builder()
            .writer(memory.clone())
            .flags(Flags::NONE)
            .build()
            .unwrap();
        (logger, memory)
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_renders_label_and_newline() {
        let (logger, memory) = memory_logger();
        logger.emit(Level::Warn, "disk almost full").unwrap();
        assert_eq!(memory.contents(), "[WARN] - disk almost full\n");
    }

    #[test]
    fn test_emit_keeps_single_newline() {
        let (logger, memory) = memory_logger();
        logger.emit(Level::Info, "hello\n").unwrap();
        logger.emit(Level::Info, "").unwrap();
        assert_eq!(memory.contents(), "[INFO] - hello\n[INFO] - \n");
    }

    #[test]
    fn test_emit_rejects_sentinels() {
        let (logger, memory) = memory_logger();
        for level in [Level::Min, Level::Max] {
            assert!(matches!(
                logger.emit(level, "nope"),
                Err(LoggerError::InvalidLevel { .. })
            ));
        }
        assert!(memory.is_empty());
    }

    #[test]
    fn test_emit_reports_write_failure() {
        let logger = Logger::with_writer(FailingWriter);
        assert!(matches!(
            logger.emit(Level::Error, "lost"),
            Err(LoggerError::SinkWrite(_))
        ));

        // leveled calls swallow the error but count it
        logger.error("lost again");
        assert_eq!(logger.metrics().write_failures(), 2);
    }

    #[test]
    fn test_set_level() {
        let (logger, memory) = memory_logger();
        logger.set_level(Level::Warn).unwrap();
        assert!(logger.set_level(Level::Max).is_err());
        assert!(logger.set_level_by_name("loud").is_err());
        assert_eq!(logger.level(), Level::Warn);

        logger.debug("no");
        logger.info("no");
        assert!(memory.is_empty());
        assert_eq!(logger.metrics().filtered(), 2);

        logger.warn("yes");
        logger.error("yes");
        assert_eq!(memory.lines().len(), 2);

        logger.set_level_by_name("error").unwrap();
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_filtered_message_not_formatted() {
        struct Explodes;

        impl fmt::Display for Explodes {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a filtered message");
            }
        }

        let (logger, _memory) = memory_logger();
        logger.set_level(Level::Error).unwrap();
        logger.info(Explodes);
    }

    #[test]
    fn test_tags() {
        let (logger, memory) = memory_logger();
        logger.add_tags(["a", "b"]);
        logger.add_tags(["b", "c"]);
        assert_eq!(logger.tags(), vec!["a", "b", "c"]);

        logger.info("tagged");
        assert_eq!(memory.contents(), "[INFO, a, b, c] - tagged\n");

        logger.set_tags(["x"]);
        assert_eq!(logger.tags(), vec!["x"]);
    }

    #[test]
    fn test_child_replaces_tags_and_shares_sink() {
        let (parent, memory) = memory_logger();
        parent.set_tags(["p"]);
        parent.set_level(Level::Info).unwrap();

        let child = parent.child(["x"]);
        assert_eq!(child.tags(), vec!["x"]);
        assert_eq!(parent.tags(), vec!["p"]);
        assert_eq!(child.level(), Level::Info);

        child.info("from child");
        parent.info("from parent");
        assert_eq!(
            memory.lines(),
            vec!["[INFO, x] - from child", "[INFO, p] - from parent"]
        );
    }

    #[test]
    fn test_caller_location() {
        let (logger, memory) = memory_logger();
        logger.set_flags(Flags::SHORTFILE);
        let line = line!() + 1;
        logger.info("where");
        assert_eq!(
            memory.contents(),
            format!("[INFO] - logger.rs:{}: where\n", line)
        );
    }

    #[test]
    fn test_color_wraps_line() {
        let (logger, memory) = memory_logger();
        logger.set_color(true);
        logger.info("tinted");
        assert_eq!(memory.contents(), "\x1b[36m[INFO] - tinted\n\x1b[0m");
    }

    #[test]
    fn test_print_bypasses_threshold() {
        let (logger, memory) = memory_logger();
        logger.set_level(Level::Panic).unwrap();
        logger.print(format_args!("{} + {}", 1, 2));
        assert_eq!(memory.contents(), "[PRINT] - 1 + 2\n");
    }

    #[test]
    fn test_fatal_runs_exit_hook_after_write() {
        let memory = MemorySink::new();
        let code = Arc::new(AtomicI32::new(-1));
        let seen = Arc::clone(&code);
        let probe = memory.clone();
        let logger = Logger::builder()
            .writer(memory.clone())
            .flags(Flags::NONE)
            .exit_hook(Arc::new(move |c| {
                assert!(probe.contents().contains("going down"));
                seen.store(c, Ordering::SeqCst);
            }))
            .build()
            .unwrap();

        logger.fatal("going down");
        assert_eq!(code.load(Ordering::SeqCst), 1);
        assert_eq!(memory.contents(), "[FATAL] - going down\n");
    }

    #[test]
    fn test_panic_unwinds_with_message() {
        let (logger, memory) = memory_logger();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("invariant broken");
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().unwrap(), "invariant broken");
        assert_eq!(memory.contents(), "[PANIC] - invariant broken\n");
    }

    #[test]
    fn test_trace_ignores_threshold_and_dumps_stack() {
        let memory = MemorySink::new();
        let code = Arc::new(AtomicI32::new(-1));
        let seen = Arc::clone(&code);
        let logger = Logger::builder()
            .writer(memory.clone())
            .flags(Flags::NONE)
            .level(Level::Panic)
            .exit_hook(Arc::new(move |c| seen.store(c, Ordering::SeqCst)))
            .build()
            .unwrap();

        logger.trace("dumping");
        assert_eq!(code.load(Ordering::SeqCst), 1);

        let lines = memory.lines();
        assert_eq!(lines[0], "[STACK] - dumping");
        assert!(lines.len() > 1);
    }

    #[test]
    fn test_drop_frames() {
        let dump = "   0: a::first\n             at src/a.rs:1:1\n   1: b::second\n   2: c::third\n             at src/c.rs:3:3\n";
        assert_eq!(
            drop_frames(dump, 1),
            "   1: b::second\n   2: c::third\n             at src/c.rs:3:3\n"
        );
        assert_eq!(drop_frames(dump, 0), dump);
        assert_eq!(drop_frames("disabled backtrace", 2), "disabled backtrace\n");
    }

    #[test]
    fn test_io_write_passthrough() {
        let (logger, memory) = memory_logger();
        writeln!(&logger, "raw bytes").unwrap();
        assert_eq!(memory.contents(), "raw bytes\n");
    }

    #[test]
    fn test_owned_logger_as_writer() -> io::Result<()> {
        fn copy_into(mut out: impl Write) -> io::Result<()> {
            writeln!(out, "owned raw")?;
            out.flush()
        }

        let (logger, memory) = memory_logger();
        let mut owned = logger;
        write!(owned, "first ")?;
        Write::flush(&mut owned)?;
        copy_into(owned)?;
        assert_eq!(memory.contents(), "first owned raw\n");
        Ok(())
    }

    #[test]
    fn test_builder_rejects_invalid_level() {
        let result = Logger::builder().output("null").level(Level::Min).build();
        assert!(matches!(result, Err(LoggerError::InvalidLevel { .. })));
    }

    #[test]
    fn test_new_with_outputs() {
        assert!(Logger::new("nil").is_ok());
        assert!(Logger::new("null").is_ok());
        assert!(!Logger::new("null").unwrap().color());
    }
}
