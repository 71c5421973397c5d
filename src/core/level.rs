//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event.
///
/// `Min` and `Max` are sentinels bounding the valid range; they never pass
/// [`Level::is_valid`] and render as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Min = 0,
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Panic = 6,
    /// Always emitted; dumps the stack and terminates.
    Trace = 7,
    Max = 8,
}

impl Level {
    /// Valid levels, lowest first
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
        Level::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
            Level::Trace => "STACK",
            Level::Min | Level::Max => "UNKNOWN",
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        Level::Min < *self && *self < Level::Max
    }

    /// Rank of the level, sentinels included
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Case-insensitive lookup by name.
    ///
    /// Unknown names resolve to the `Min` sentinel, so callers must check
    /// [`Level::is_valid`] on the result.
    pub fn resolve(name: &str) -> Level {
        match name.to_uppercase().as_str() {
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" => Level::Warn,
            "ERROR" => Level::Error,
            "FATAL" => Level::Fatal,
            "PANIC" => Level::Panic,
            "STACK" => Level::Trace,
            _ => Level::Min,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = Level::resolve(s);
        if level.is_valid() {
            Ok(level)
        } else {
            Err(LoggerError::invalid_level(s))
        }
    }
}
