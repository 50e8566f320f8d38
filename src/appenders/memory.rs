//! In-memory appender that keeps every written record

use crate::core::{Appender, Layout, LogLevel, Result};
use parking_lot::Mutex;

/// Captures rendered records instead of writing them anywhere.
///
/// Share it through an `Arc` to read back what a logger produced:
///
/// ```
/// use rust_hier_logger::appenders::MemoryAppender;
/// use rust_hier_logger::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryAppender::new("%l %f %m", LogLevel::Debug));
/// let logger = Logger::builder()
///     .config(Config::new().logger("app.disk", Arc::clone(&memory)))
///     .build();
///
/// let caller = CallerInfo::new("app", "disk", "check", 7);
/// logger.warn(Some(&caller), "disk at 91%");
/// assert_eq!(memory.records(), ["WARN app.disk.check disk at 91%"]);
/// ```
pub struct MemoryAppender {
    name: String,
    layout: Layout,
    threshold: LogLevel,
    records: Mutex<Vec<String>>,
}

impl MemoryAppender {
    pub fn new(layout: impl Into<Layout>, threshold: LogLevel) -> Self {
        Self {
            name: "memory".to_string(),
            layout: layout.into(),
            threshold,
            records: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Snapshot of the records written so far, oldest first
    pub fn records(&self) -> Vec<String> {
        self.records.lock().clone()
    }

    /// All records concatenated
    pub fn contents(&self) -> String {
        self.records.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn append(&self, text: &str, level: LogLevel) -> Result<()> {
        if self.accepts(level) {
            self.records.lock().push(text.to_string());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
