//! Core logger types and traits

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod layout;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use caller::CallerInfo;
pub use config::{AppenderTarget, Config, ConfigEntry, LoggerDefinition};
pub use error::{LoggerError, Result};
pub use layout::{render_layout, Layout, LogRecord, Segment};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_LAYOUT, DEFAULT_LOGGER_NAME, DEFAULT_THRESHOLD};
pub use metrics::LoggerMetrics;
pub use timestamp::{
    DateFormatter, FixedDateFormatter, LocalDateFormatter, UtcDateFormatter, DEFAULT_DATE_PATTERN,
};
