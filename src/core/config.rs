//! Logger configuration and call-site resolution
//!
//! A [`Config`] is an ordered list of named loggers. Names are dotted paths
//! over a caller's package, file and function (`"app"`, `"app.server"`,
//! `"app.server.accept"`). For each log call every logger whose name equals
//! one of those three prefixes fires, in declaration order.

use super::{
    appender::Appender,
    caller::CallerInfo,
    error::{LoggerError, Result},
    layout::Layout,
    log_level::LogLevel,
};
use crate::appenders::StreamAppender;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A named logger and the appender it feeds.
#[derive(Clone)]
pub struct LoggerDefinition {
    name: String,
    appender: Arc<dyn Appender>,
}

impl LoggerDefinition {
    pub fn new(name: impl Into<String>, appender: impl Appender + 'static) -> Self {
        Self {
            name: name.into(),
            appender: Arc::new(appender),
        }
    }

    /// Wrap an already shared appender.
    pub fn shared(name: impl Into<String>, appender: Arc<dyn Appender>) -> Self {
        Self {
            name: name.into(),
            appender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn appender(&self) -> &dyn Appender {
        self.appender.as_ref()
    }
}

impl fmt::Debug for LoggerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerDefinition")
            .field("name", &self.name)
            .field("appender", &self.appender.name())
            .field("layout", &self.appender.layout().as_str())
            .field("threshold", &self.appender.threshold())
            .finish()
    }
}

/// Ordered logger list. Duplicate names are allowed; all of them fire.
///
/// # Example
///
/// ```
/// use rust_hier_logger::appenders::MemoryAppender;
/// use rust_hier_logger::{CallerInfo, Config, LogLevel};
///
/// let config = Config::new()
///     .logger("app", MemoryAppender::new("%m", LogLevel::Info))
///     .logger("app.db", MemoryAppender::new("%l %m", LogLevel::Debug))
///     .logger("app.http", MemoryAppender::new("%m", LogLevel::Debug));
///
/// let caller = CallerInfo::new("app", "db", "connect", 10);
/// let names: Vec<_> = config.resolve(Some(&caller)).map(|l| l.name()).collect();
/// assert_eq!(names, ["app", "app.db"]);
/// ```
#[derive(Clone, Default, Debug)]
pub struct Config {
    loggers: Vec<LoggerDefinition>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a logger named `name` writing through `appender`
    #[must_use]
    pub fn logger(mut self, name: impl Into<String>, appender: impl Appender + 'static) -> Self {
        self.loggers.push(LoggerDefinition::new(name, appender));
        self
    }

    pub fn add_logger(&mut self, definition: LoggerDefinition) {
        self.loggers.push(definition);
    }

    pub fn loggers(&self) -> &[LoggerDefinition] {
        &self.loggers
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Loggers matching `caller`, in declaration order.
    ///
    /// A logger matches when its name equals the caller's package,
    /// `package.file` or `package.file.function`. Every match is returned,
    /// duplicates included; nothing is ranked by specificity. An absent
    /// caller matches nothing.
    pub fn resolve<'a>(
        &'a self,
        caller: Option<&'a CallerInfo>,
    ) -> impl Iterator<Item = &'a LoggerDefinition> + 'a {
        self.loggers
            .iter()
            .filter(move |logger| caller.is_some_and(|c| c.matches_logger_name(&logger.name)))
    }

    /// Build a config from declarative entries, opening their sinks.
    pub fn from_entries(entries: impl IntoIterator<Item = ConfigEntry>) -> Result<Self> {
        entries
            .into_iter()
            .map(ConfigEntry::into_definition)
            .collect::<Result<Vec<_>>>()
            .map(|loggers| Self { loggers })
    }

    /// Parse a JSON document of the form
    /// `{"loggers": [{"name": "...", "layout": "...", "threshold": "INFO", "target": "stdout"}]}`.
    ///
    /// `threshold` defaults to `INFO` and `target` to `stdout`; `target` may
    /// also be `"stderr"` or `{"file": "path"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ConfigDocument = serde_json::from_str(json)?;
        Self::from_entries(document.loggers)
    }
}

impl FromIterator<LoggerDefinition> for Config {
    fn from_iter<I: IntoIterator<Item = LoggerDefinition>>(iter: I) -> Self {
        Self {
            loggers: iter.into_iter().collect(),
        }
    }
}

/// Where a declaratively configured logger writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

/// One `(name, layout, threshold)` triple plus its output target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub name: String,
    pub layout: Layout,
    #[serde(default)]
    pub threshold: LogLevel,
    #[serde(default)]
    pub target: AppenderTarget,
}

impl ConfigEntry {
    pub fn new(name: impl Into<String>, layout: impl Into<Layout>, threshold: LogLevel) -> Self {
        Self {
            name: name.into(),
            layout: layout.into(),
            threshold,
            target: AppenderTarget::default(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: AppenderTarget) -> Self {
        self.target = target;
        self
    }

    fn into_definition(self) -> Result<LoggerDefinition> {
        if self.name.is_empty() {
            return Err(LoggerError::config("ConfigEntry", "logger name must not be empty"));
        }
        let appender: Arc<dyn Appender> = match self.target {
            AppenderTarget::Stdout => Arc::new(StreamAppender::stdout(self.layout, self.threshold)),
            AppenderTarget::Stderr => Arc::new(StreamAppender::stderr(self.layout, self.threshold)),
            AppenderTarget::File(path) => file_appender(path, self.layout, self.threshold)?,
        };
        Ok(LoggerDefinition::shared(self.name, appender))
    }
}

#[cfg(feature = "file")]
fn file_appender(path: PathBuf, layout: Layout, threshold: LogLevel) -> Result<Arc<dyn Appender>> {
    let appender = crate::appenders::FileAppender::new(path, layout, threshold)?;
    Ok(Arc::new(appender))
}

#[cfg(not(feature = "file"))]
fn file_appender(path: PathBuf, _layout: Layout, _threshold: LogLevel) -> Result<Arc<dyn Appender>> {
    Err(LoggerError::config(
        "FileAppender",
        format!(
            "cannot log to '{}': built without the `file` feature",
            path.display()
        ),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    loggers: Vec<ConfigEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    fn memory(layout: &str) -> MemoryAppender {
        MemoryAppender::new(layout, LogLevel::Debug)
    }

    fn names<'a>(config: &'a Config, caller: Option<&'a CallerInfo>) -> Vec<&'a str> {
        config.resolve(caller).map(LoggerDefinition::name).collect()
    }

    #[test]
    fn test_resolves_all_hierarchy_levels() {
        let config = Config::new()
            .logger("app.server.accept", memory("full"))
            .logger("app", memory("top"))
            .logger("app.server", memory("second"));
        let caller = CallerInfo::new("app", "server", "accept", 1);

        assert_eq!(
            names(&config, Some(&caller)),
            ["app.server.accept", "app", "app.server"]
        );
    }

    #[test]
    fn test_sibling_names_never_match() {
        let config = Config::new()
            .logger("app.other", memory("a"))
            .logger("app.server.other", memory("b"))
            .logger("other", memory("c"));
        let caller = CallerInfo::new("app", "server", "accept", 1);

        assert!(names(&config, Some(&caller)).is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_declaration_order() {
        let config = Config::new()
            .logger("app", memory("first"))
            .logger("app.server", memory("middle"))
            .logger("app", memory("second"));
        let caller = CallerInfo::new("app", "server", "run", 1);

        let layouts: Vec<_> = config
            .resolve(Some(&caller))
            .map(|l| l.appender().layout().as_str().to_string())
            .collect();
        assert_eq!(layouts, ["first", "middle", "second"]);
    }

    #[test]
    fn test_absent_caller_matches_nothing() {
        let config = Config::new().logger("", memory("x"));
        assert!(names(&config, None).is_empty());
    }

    #[test]
    fn test_empty_segments() {
        let config = Config::new()
            .logger("app.", memory("x"))
            .logger("app", memory("y"));
        let caller = CallerInfo::new("app", "", "", 1);
        assert_eq!(names(&config, Some(&caller)), ["app.", "app"]);
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json(
            r#"{
                "loggers": [
                    {"name": "app", "layout": "%l %m%n", "threshold": "WARN"},
                    {"name": "app.db", "layout": "%m", "target": "stderr"}
                ]
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.len(), 2);
        let first = &config.loggers()[0];
        assert_eq!(first.name(), "app");
        assert_eq!(first.appender().threshold(), LogLevel::Warn);
        assert_eq!(first.appender().name(), "stdout");

        let second = &config.loggers()[1];
        assert_eq!(second.appender().threshold(), LogLevel::Info);
        assert_eq!(second.appender().name(), "stderr");
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_from_json_file_target() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("app.log");
        let json = serde_json::json!({
            "loggers": [{"name": "app", "layout": "%m", "target": {"file": path}}]
        });

        let config = Config::from_json(&json.to_string()).expect("valid config");
        assert_eq!(config.loggers()[0].appender().name(), "file");
        assert!(path.exists());
    }

    #[test]
    fn test_from_json_rejects_bad_documents() {
        assert!(matches!(
            Config::from_json("[]"),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"loggers": [{"name": "app", "layout": "%m", "threshold": "LOUD"}]}"#),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"loggers": [], "extra": 1}"#),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"loggers": [{"name": "", "layout": "%m"}]}"#),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_entry_serialization() {
        let entry = ConfigEntry::new("app", "%m", LogLevel::Error)
            .with_target(AppenderTarget::File(PathBuf::from("app.log")));
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "name": "app",
                "layout": "%m",
                "threshold": "ERROR",
                "target": {"file": "app.log"}
            })
        );
    }

    #[test]
    fn test_debug_shows_appender_details() {
        let definition = LoggerDefinition::new("app", memory("%m"));
        let debug = format!("{:?}", definition);
        assert!(debug.contains("\"app\""));
        assert!(debug.contains("memory"));
    }
}
