//! Main logger implementation

use super::{
    appender::Appender,
    caller::CallerInfo,
    config::{Config, LoggerDefinition},
    error::Result,
    layout::LogRecord,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::{DateFormatter, LocalDateFormatter},
};
use crate::appenders::StreamAppender;
use std::fmt;
use std::sync::Arc;

/// Name of the fallback logger used when no configured logger matches
pub const DEFAULT_LOGGER_NAME: &str = "*";

/// Layout of the fallback logger
pub const DEFAULT_LAYOUT: &str = "%d{yyyy-MM-dd HH:mm:ss.SSS} %l %f[%L] - %m%n";

/// Threshold of the fallback logger
pub const DEFAULT_THRESHOLD: LogLevel = LogLevel::Info;

/// The logging facade.
///
/// Holds an immutable [`Config`] and a default logger. Each call resolves the
/// loggers matching its call site, renders each one's layout and hands the
/// text to its appender. When nothing matches (or no config was supplied)
/// the default logger writes instead.
///
/// `Logger` is `Send + Sync`; share it by reference or `Arc`.
pub struct Logger {
    config: Option<Config>,
    default_logger: LoggerDefinition,
    date_formatter: Arc<dyn DateFormatter>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// A logger without configuration: every call goes to the default logger.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Build a logger from `config`. `None` behaves like [`Logger::new`].
    #[must_use]
    pub fn with_config(config: impl Into<Option<Config>>) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn default_logger(&self) -> &LoggerDefinition {
        &self.default_logger
    }

    /// Loggers that would receive a call from `caller`, falling back to the
    /// default logger when nothing matches.
    pub fn resolve<'a>(&'a self, caller: Option<&'a CallerInfo>) -> Vec<&'a LoggerDefinition> {
        let resolved: Vec<_> = self
            .config
            .iter()
            .flat_map(|config| config.resolve(caller))
            .collect();

        if resolved.is_empty() {
            vec![&self.default_logger]
        } else {
            resolved
        }
    }

    /// Log `message` verbatim at `level`.
    pub fn log(&self, level: LogLevel, caller: Option<&CallerInfo>, message: impl AsRef<str>) {
        let record = LogRecord::new(level, caller, message.as_ref());
        let mut matched = false;

        if let Some(ref config) = self.config {
            for logger in config.resolve(caller) {
                matched = true;
                self.dispatch(logger, &record);
            }
        }

        if !matched {
            self.metrics.record_default_fallback();
            self.dispatch(&self.default_logger, &record);
        }
    }

    /// Log pre-formatted arguments, as produced by `format_args!`.
    pub fn log_fmt(&self, level: LogLevel, caller: Option<&CallerInfo>, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.log(level, caller, message),
            None => self.log(level, caller, args.to_string()),
        }
    }

    #[inline]
    pub fn debug(&self, caller: Option<&CallerInfo>, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, caller, message);
    }

    #[inline]
    pub fn info(&self, caller: Option<&CallerInfo>, message: impl AsRef<str>) {
        self.log(LogLevel::Info, caller, message);
    }

    #[inline]
    pub fn warn(&self, caller: Option<&CallerInfo>, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, caller, message);
    }

    #[inline]
    pub fn error(&self, caller: Option<&CallerInfo>, message: impl AsRef<str>) {
        self.log(LogLevel::Error, caller, message);
    }

    /// Render and append one record through one logger.
    ///
    /// Rendering is skipped when the appender would drop the record anyway.
    /// A failing or panicking appender is reported and counted; it never
    /// propagates to the caller or stops the remaining loggers.
    fn dispatch(&self, logger: &LoggerDefinition, record: &LogRecord<'_>) {
        let appender = logger.appender();
        if !appender.accepts(record.level) {
            self.metrics.record_filtered();
            return;
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let text = appender
                .layout()
                .render(record, self.date_formatter.as_ref());
            appender.append(&text, record.level)
        }));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Appender '{}' of logger '{}' failed: {}",
                    appender.name(),
                    logger.name(),
                    e
                );
                self.metrics.record_failed();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' of logger '{}' panicked: {}. \
                     Other appenders continue to function.",
                    appender.name(),
                    logger.name(),
                    panic_msg
                );
                self.metrics.record_failed();
            }
        }
    }

    /// Logger metrics for observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_hier_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.debug(None, "below the default threshold");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.filtered_count(), 1);
    /// assert_eq!(metrics.default_fallback_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every configured appender and the default logger.
    ///
    /// All appenders are flushed even if one fails; the first error is returned.
    pub fn flush(&self) -> Result<()> {
        let configured = self.config.iter().flat_map(|c| c.loggers());
        let mut first_error = None;

        for logger in configured.chain(std::iter::once(&self.default_logger)) {
            if let Err(e) = logger.appender().flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush logger '{}': {}",
                    logger.name(),
                    e
                );
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Errors were already reported by flush.
        let _ = self.flush();

        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("default_logger", &self.default_logger)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_hier_logger::prelude::*;
/// use rust_hier_logger::appenders::StreamAppender;
///
/// let config = Config::new()
///     .logger("app", StreamAppender::stdout("%l %f - %m%n", LogLevel::Info))
///     .logger("app.db", StreamAppender::stderr("%d{HH:mm:ss} %m%n", LogLevel::Debug));
///
/// let logger = Logger::builder()
///     .config(config)
///     .date_formatter(UtcDateFormatter)
///     .build();
/// ```
pub struct LoggerBuilder {
    config: Option<Config>,
    date_formatter: Arc<dyn DateFormatter>,
    default_appender: Option<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: None,
            date_formatter: Arc::new(LocalDateFormatter),
            default_appender: None,
        }
    }

    /// Install `config`.
    ///
    /// Passing `None` is a no-op: a previously installed config stays.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: impl Into<Option<Config>>) -> Self {
        if let Some(config) = config.into() {
            self.config = Some(config);
        }
        self
    }

    /// Formatter used for every `%d{..}` directive
    #[must_use = "builder methods return a new value"]
    pub fn date_formatter<D: DateFormatter + 'static>(mut self, formatter: D) -> Self {
        self.date_formatter = Arc::new(formatter);
        self
    }

    /// Replace the sink of the default logger.
    ///
    /// The default logger keeps the name `"*"`; its layout and threshold
    /// come from `appender`.
    #[must_use = "builder methods return a new value"]
    pub fn default_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.default_appender = Some(Arc::new(appender));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let default_appender = self.default_appender.unwrap_or_else(|| {
            Arc::new(StreamAppender::stdout(DEFAULT_LAYOUT, DEFAULT_THRESHOLD))
        });

        Logger {
            config: self.config,
            default_logger: LoggerDefinition::shared(DEFAULT_LOGGER_NAME, default_appender),
            date_formatter: self.date_formatter,
            metrics: Arc::new(LoggerMetrics::new()),
        }
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
