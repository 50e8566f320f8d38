//! Appender trait for log output destinations

use super::{error::Result, layout::Layout, log_level::LogLevel};

/// An output target with its own layout and level threshold.
///
/// The facade renders [`layout`](Appender::layout) for each record and hands
/// the text to [`append`](Appender::append), which writes it only when
/// `level >= threshold()`. Appenders are shared across threads, so sinks
/// synchronize internally.
pub trait Appender: Send + Sync {
    fn layout(&self) -> &Layout;

    fn threshold(&self) -> LogLevel;

    /// Write `text` if `level` passes the threshold; otherwise do nothing.
    fn append(&self, text: &str, level: LogLevel) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// Whether a record at `level` would be written.
    #[inline]
    fn accepts(&self, level: LogLevel) -> bool {
        level.passes(self.threshold())
    }
}

impl<A: Appender + ?Sized> Appender for std::sync::Arc<A> {
    fn layout(&self) -> &Layout {
        (**self).layout()
    }

    fn threshold(&self) -> LogLevel {
        (**self).threshold()
    }

    fn append(&self, text: &str, level: LogLevel) -> Result<()> {
        (**self).append(text, level)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
