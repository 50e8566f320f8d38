//! Logging macros that capture the call site.
//!
//! Each macro records the enclosing crate, file and function so the logger
//! can resolve hierarchical logger names such as `my_crate.server.accept`.
//! With a single message argument the text is logged verbatim; with extra
//! arguments it is interpolated like `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_hier_logger::prelude::*;
//! use rust_hier_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Logged verbatim, braces included
//! info!(logger, "Server started {ok}");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_hier_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_hier_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(,)?) => {
        $logger.log($level, $crate::caller!().as_ref(), $message)
    };
    ($logger:expr, $level:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.log_fmt($level, $crate::caller!().as_ref(), format_args!($fmt, $($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_hier_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_hier_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_hier_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_hier_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_hier_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_hier_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_hier_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_hier_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
