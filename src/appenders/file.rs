//! File appender implementation

use crate::core::{Appender, Layout, LogLevel, LoggerError, Result};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file.
///
/// Every record is written and flushed under an advisory exclusive lock, so
/// several processes can share one log file without tearing lines.
pub struct FileAppender {
    path: PathBuf,
    layout: Layout,
    threshold: LogLevel,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_hier_logger::appenders::FileAppender;
    /// use rust_hier_logger::LogLevel;
    ///
    /// let appender = FileAppender::new("/var/log/app.log", "%d{HH:mm:ss} %l %m%n", LogLevel::Info)
    ///     .unwrap();
    /// ```
    pub fn new(
        path: impl Into<PathBuf>,
        layout: impl Into<Layout>,
        threshold: LogLevel,
    ) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            layout: layout.into(),
            threshold,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_locked(&self, writer: &mut BufWriter<File>, text: &str) -> Result<()> {
        writer
            .get_ref()
            .lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;

        let written = writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush());
        let unlocked = writer.get_ref().unlock();

        written?;
        unlocked?;
        Ok(())
    }
}

impl Appender for FileAppender {
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

        let mut guard = self.writer.lock();
        let writer = guard.as_mut().ok_or_else(|| {
            LoggerError::file_appender(self.path.display().to_string(), "writer not initialized")
        })?;
        self.write_locked(writer, text)
    }

    fn flush(&self) -> Result<()> {
        if let Some(ref mut writer) = *self.writer.lock() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
