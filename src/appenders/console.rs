//! Console appender implementation

use crate::core::{Appender, Layout, LogLevel, Result};
use colored::Colorize;
use std::io::Write;

/// Writes records to the terminal, routing `Error` to stderr and everything
/// else to stdout.
///
/// Colouring by level is off by default so the output is exactly the
/// rendered layout.
pub struct ConsoleAppender {
    layout: Layout,
    threshold: LogLevel,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new(layout: impl Into<Layout>, threshold: LogLevel) -> Self {
        Self {
            layout: layout.into(),
            threshold,
            use_colors: false,
        }
    }

    /// Enable or disable ANSI colours
    ///
    /// # Example
    ///
    /// ```
    /// use rust_hier_logger::appenders::ConsoleAppender;
    /// use rust_hier_logger::LogLevel;
    ///
    /// let appender = ConsoleAppender::new("%l %m%n", LogLevel::Info).with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn decorate(&self, text: &str, level: LogLevel) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        // Keep the trailing newline outside the escape sequence.
        let body = text.trim_end_matches('\n');
        let tail = &text[body.len()..];
        format!("{}{}", body.color(level.color_code()), tail)
    }
}

impl Appender for ConsoleAppender {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn append(&self, text: &str, level: LogLevel) -> Result<()> {
        if !self.accepts(level) {
            return Ok(());
        }

        let output = self.decorate(text, level);
        match level {
            LogLevel::Error => std::io::stderr().lock().write_all(output.as_bytes())?,
            _ => std::io::stdout().lock().write_all(output.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
