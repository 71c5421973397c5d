//! Level colors and ANSI escape wrapping

use super::level::Level;
use colored::Color;

const RESET: &str = "\x1b[0m";

/// Brush color of a level; `None` for the sentinels
pub fn color(level: Level) -> Option<Color> {
    match level {
        Level::Debug => Some(Color::BrightBlack),
        Level::Info => Some(Color::Cyan),
        Level::Warn => Some(Color::Yellow),
        Level::Error => Some(Color::Magenta),
        Level::Fatal | Level::Panic => Some(Color::Red),
        Level::Trace => Some(Color::Green),
        Level::Min | Level::Max => None,
    }
}

/// `(start, end)` escape pair for streaming a level's color around a line
pub fn escapes(level: Level) -> Option<(String, &'static str)> {
    color(level).map(|c| (format!("\x1b[{}m", c.to_fg_str()), RESET))
}

/// Wrap a single string in a level's color
pub fn paint(level: Level, text: &str) -> String {
    match escapes(level) {
        Some((start, end)) => format!("{}{}{}", start, text, end),
        None => text.to_string(),
    }
}

/// Default color setting for console sinks.
///
/// Off on Windows consoles and whenever `colored`'s environment
/// detection (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`) says so.
pub fn console_default() -> bool {
    !cfg!(windows) && colored::control::SHOULD_COLORIZE.should_colorize()
}
