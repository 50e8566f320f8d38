//! # Rust Hierarchical Logger
//!
//! A logging facade that routes each call to loggers named after its call
//! site and renders records through pattern layouts.
//!
//! ## Features
//!
//! - **Hierarchical resolution**: loggers named `crate`, `crate.file` or
//!   `crate.file.function` all receive matching calls, in declaration order
//! - **Pattern layouts**: `%d{yyyy-MM-dd HH:mm:ss.SSS} %l %f[%L] - %m%n`
//! - **Per-logger thresholds**: each appender drops records below its level
//! - **Default logger**: unmatched calls still reach stdout at `INFO`
//! - **Thread safe**: configuration is immutable once built
//!
//! ## Example
//!
//! ```
//! use rust_hier_logger::prelude::*;
//! use rust_hier_logger::appenders::StreamAppender;
//! use rust_hier_logger::{info, debug};
//!
//! let config = Config::new()
//!     .logger("my_app", StreamAppender::stdout("%l %f[%L] - %m%n", LogLevel::Info))
//!     .logger("my_app.db", StreamAppender::stderr("%d{HH:mm:ss.SSS} %m%n", LogLevel::Debug));
//!
//! let logger = Logger::with_config(config);
//! info!(logger, "listening on {}", 8080);
//! debug!(logger, "only the db logger would show this");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{MemoryAppender, StreamAppender};
    pub use crate::core::{
        Appender, CallerInfo, Config, ConfigEntry, DateFormatter, FixedDateFormatter, Layout,
        LocalDateFormatter, LogLevel, Logger, LoggerBuilder, LoggerDefinition, LoggerError,
        LoggerMetrics, Result, UtcDateFormatter,
    };
}

pub use crate::appenders::{MemoryAppender, StreamAppender};
pub use crate::core::{
    render_layout, Appender, AppenderTarget, CallerInfo, Config, ConfigEntry, DateFormatter,
    FixedDateFormatter, Layout, LocalDateFormatter, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerDefinition, LoggerError, LoggerMetrics, Result, Segment, UtcDateFormatter,
    DEFAULT_LAYOUT, DEFAULT_LOGGER_NAME, DEFAULT_THRESHOLD,
};
