//! Process-wide logger handle
//!
//! Install a [`Logger`] once at startup and reach it from anywhere through
//! [`logger()`]. The handle is write-once: there is no reconfiguration after
//! the first successful install.
//!
//! ```
//! use rust_hier_logger::{global, info};
//! use rust_hier_logger::appenders::StreamAppender;
//! use rust_hier_logger::prelude::*;
//!
//! let config = Config::new().logger("app", StreamAppender::stdout("%l %m%n", LogLevel::Info));
//! global::build(Some(config)).unwrap();
//!
//! info!(global::logger(), "ready");
//! ```

use crate::core::{Config, Logger, LoggerError, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();
static UNCONFIGURED: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if one is installed.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Install a logger built from `config`.
///
/// `None` is a no-op and succeeds, leaving the current state untouched.
/// `Some` succeeds only once: the handle is write-once, so a second
/// `Some(config)` is rejected with [`LoggerError::AlreadyInitialized`] and the
/// first config stays in place.
pub fn build(config: Option<Config>) -> Result<()> {
    match config {
        Some(config) => init(Logger::with_config(config)),
        None => Ok(()),
    }
}

/// The installed logger, or an unconfigured one that routes every call to
/// the default logger until [`init`] succeeds.
pub fn logger() -> &'static Logger {
    GLOBAL
        .get()
        .unwrap_or_else(|| UNCONFIGURED.get_or_init(Logger::new))
}

pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}
