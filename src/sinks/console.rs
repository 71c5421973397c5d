//! Console sink

use std::io::{self, Write};

/// Writes to the process's stdout or stderr.
///
/// Each `write` locks the standard stream, so a whole rendered line reaches
/// the terminal in one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleSink {
    Stdout,
    Stderr,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        ConsoleSink::Stdout
    }

    pub fn stderr() -> Self {
        ConsoleSink::Stderr
    }
}

impl Write for ConsoleSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ConsoleSink::Stdout => io::stdout().lock().write(buf),
            ConsoleSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            ConsoleSink::Stdout => io::stdout().lock().write_all(buf),
            ConsoleSink::Stderr => io::stderr().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ConsoleSink::Stdout => io::stdout().flush(),
            ConsoleSink::Stderr => io::stderr().flush(),
        }
    }
}
