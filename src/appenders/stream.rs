//! Stream appender: writes rendered records to any `io::Write`

use crate::core::{Appender, Layout, LogLevel, Result};
use parking_lot::Mutex;
use std::io::{self, Stderr, Stdout, Write};

/// Appender over an arbitrary writer.
///
/// Each accepted record is written with a single `write_all` while holding
/// the writer lock, so concurrent records never interleave. Text is written
/// exactly as rendered; layouts supply their own `%n`.
///
/// # Example
///
/// ```
/// use rust_hier_logger::appenders::StreamAppender;
/// use rust_hier_logger::prelude::*;
///
/// let appender = StreamAppender::new(Vec::new(), "%l %m%n", LogLevel::Warn);
/// appender.append("INFO skipped\n", LogLevel::Info).unwrap();
/// appender.append("ERROR kept\n", LogLevel::Error).unwrap();
/// assert_eq!(appender.into_inner(), b"ERROR kept\n");
/// ```
pub struct StreamAppender<W: Write + Send> {
    name: String,
    layout: Layout,
    threshold: LogLevel,
    writer: Mutex<W>,
}

impl<W: Write + Send> StreamAppender<W> {
    pub fn new(writer: W, layout: impl Into<Layout>, threshold: LogLevel) -> Self {
        Self {
            name: "stream".to_string(),
            layout: layout.into(),
            threshold,
            writer: Mutex::new(writer),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Consume the appender and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl StreamAppender<Stdout> {
    pub fn stdout(layout: impl Into<Layout>, threshold: LogLevel) -> Self {
        Self::new(io::stdout(), layout, threshold).with_name("stdout")
    }
}

impl StreamAppender<Stderr> {
    pub fn stderr(layout: impl Into<Layout>, threshold: LogLevel) -> Self {
        Self::new(io::stderr(), layout, threshold).with_name("stderr")
    }
}

impl<W: Write + Send> Appender for StreamAppender<W> {
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
        self.writer.lock().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts `write_all` calls so tests can assert on exact write counts.
    #[derive(Default)]
    struct CountingWriter {
        buf: Vec<u8>,
        writes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
            self.writes += 1;
            self.buf.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_below_threshold_is_not_written() {
        let appender = StreamAppender::new(CountingWriter::default(), "%m", LogLevel::Warn);
        appender.append("info line", LogLevel::Info).unwrap();

        let writer = appender.into_inner();
        assert_eq!(writer.writes, 0);
        assert!(writer.buf.is_empty());
    }

    #[test]
    fn test_above_threshold_writes_once() {
        let appender = StreamAppender::new(CountingWriter::default(), "%m", LogLevel::Warn);
        appender.append("ERROR disk full\n", LogLevel::Error).unwrap();

        let writer = appender.into_inner();
        assert_eq!(writer.writes, 1);
        assert_eq!(writer.buf, b"ERROR disk full\n");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let appender = StreamAppender::new(Vec::new(), "%m", LogLevel::Warn);
        appender.append("w", LogLevel::Warn).unwrap();
        assert_eq!(appender.into_inner(), b"w");
    }

    #[test]
    fn test_accessors() {
        let appender = StreamAppender::new(Vec::new(), "%l %m", LogLevel::Debug).with_name("buffer");
        assert_eq!(appender.layout().as_str(), "%l %m");
        assert_eq!(appender.threshold(), LogLevel::Debug);
        assert_eq!(appender.name(), "buffer");
        assert!(appender.accepts(LogLevel::Debug));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let appender = StreamAppender::new(Broken, "%m", LogLevel::Debug);
        assert!(appender.append("x", LogLevel::Info).is_err());
        // Gated records never touch the sink.
        let gated = StreamAppender::new(Broken, "%m", LogLevel::Error);
        assert!(gated.append("x", LogLevel::Info).is_ok());
    }

    #[test]
    fn test_std_stream_names() {
        assert_eq!(StreamAppender::stdout("%m", LogLevel::Info).name(), "stdout");
        assert_eq!(StreamAppender::stderr("%m", LogLevel::Info).name(), "stderr");
    }
}
