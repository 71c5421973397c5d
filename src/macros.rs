//! Logging macros for ergonomic log message formatting.
//!
//! These macros take `println!`-style arguments and pass them to the logger as
//! `format_args!`, so a call filtered by the threshold never formats anything.
//!
//! # Examples
//!
//! ```
//! use tagged_logger::prelude::*;
//! use tagged_logger::info;
//!
//! let logger = Logger::new("null").unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at a given level.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("null").unwrap();
/// use tagged_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("null").unwrap();
/// use tagged_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("null").unwrap();
/// use tagged_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's exit hook.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

/// Log a panic-level message, then unwind.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(format_args!($($arg)+))
    };
}

/// Log at STACK regardless of the threshold, dump the stack, then run the exit hook.
#[macro_export]
macro_rules! stack {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

/// Write an unleveled `PRINT` line.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("null").unwrap();
/// use tagged_logger::log_print;
/// log_print!(logger, "{} workers ready", 4);
/// ```
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print(format_args!($($arg)+))
    };
}
