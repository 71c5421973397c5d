//! Sink implementations
//!
//! A sink is the byte stream a logger writes rendered lines to. Loggers hold
//! sinks as [`SharedSink`] so a parent and its children can write to the same
//! destination; every write takes the sink's own lock, so one rendered line
//! is never torn by a sibling's write.

pub mod console;
pub mod file;
pub mod memory;

use crate::core::Result;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;

/// Byte-stream destination shared between a logger and its children
pub type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Wrap a writer so it can be shared between loggers
pub fn shared<W: Write + Send + 'static>(writer: W) -> SharedSink {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// Kind of destination a descriptor resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Stdout,
    Stderr,
    Discard,
    File,
}

impl SinkKind {
    /// Whether lines are colored by default for this destination
    pub fn default_color(&self) -> bool {
        match self {
            SinkKind::Stdout | SinkKind::Stderr => crate::core::paint::console_default(),
            SinkKind::Discard | SinkKind::File => false,
        }
    }
}

/// A sink resolved from a descriptor string
pub struct OpenedSink {
    pub sink: SharedSink,
    pub kind: SinkKind,
}

/// Resolve an output descriptor.
///
/// Available outputs are `stdout`, `stderr`, `null`/`nil` (discard) or a file
/// path, which is opened create+append+write.
pub fn open(descriptor: &str) -> Result<OpenedSink> {
    let opened = match descriptor {
        "stdout" => OpenedSink {
            sink: shared(ConsoleSink::stdout()),
            kind: SinkKind::Stdout,
        },
        "stderr" => OpenedSink {
            sink: shared(ConsoleSink::stderr()),
            kind: SinkKind::Stderr,
        },
        "null" | "nil" => OpenedSink {
            sink: shared(io::sink()),
            kind: SinkKind::Discard,
        },
        path => OpenedSink {
            sink: shared(FileSink::open(path)?),
            kind: SinkKind::File,
        },
    };
    Ok(opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use tempfile::tempdir;

    #[test]
    fn test_open_console_and_discard() {
        assert_eq!(open("stdout").unwrap().kind, SinkKind::Stdout);
        assert_eq!(open("stderr").unwrap().kind, SinkKind::Stderr);
        assert_eq!(open("null").unwrap().kind, SinkKind::Discard);
        assert_eq!(open("nil").unwrap().kind, SinkKind::Discard);
    }

    #[test]
    fn test_open_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");

        let opened = open(path.to_str().unwrap())?;
        assert_eq!(opened.kind, SinkKind::File);
        assert!(!opened.kind.default_color());

        opened.sink.lock().write_all(b"line\n")?;
        assert_eq!(std::fs::read_to_string(&path)?, "line\n");
        Ok(())
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let result = open(path.to_str().unwrap());
        assert!(matches!(
            result,
            Err(LoggerError::UnsupportedOutput { .. })
        ));
    }
}
