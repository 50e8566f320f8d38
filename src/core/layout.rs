//! Pattern layouts
//!
//! A layout is literal text interleaved with `%` directives:
//!
//! - `%d{PATTERN}` - current time formatted per `PATTERN` (see [`timestamp`])
//! - `%L` - caller line number
//! - `%l` - level name (`DEBUG`, `INFO`, `WARN`, `ERROR`)
//! - `%f` - `package.file.function` of the caller
//! - `%m` - the message
//! - `%n` - newline
//!
//! Any other `%x` expands to nothing. Layouts are parsed once into segments
//! and rendered per record.
//!
//! [`timestamp`]: crate::core::timestamp

use super::caller::CallerInfo;
use super::log_level::LogLevel;
use super::timestamp::{DateFormatter, DEFAULT_DATE_PATTERN};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Everything a layout needs to render one log call.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub caller: Option<&'a CallerInfo>,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, caller: Option<&'a CallerInfo>, message: &'a str) -> Self {
        Self {
            level,
            caller,
            message,
        }
    }
}

/// One parsed piece of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// `%d{..}` with its date pattern
    Date(String),
    /// `%L`
    Line,
    /// `%l`
    Level,
    /// `%f`
    Function,
    /// `%m`
    Message,
    /// `%n`
    Newline,
}

/// A parsed layout template.
///
/// # Examples
///
/// ```
/// use rust_hier_logger::core::layout::{Layout, LogRecord};
/// use rust_hier_logger::{CallerInfo, LogLevel};
///
/// let layout = Layout::parse("%l %f[%L] - %m");
/// let caller = CallerInfo::new("app", "server", "accept", 42);
/// let record = LogRecord::new(LogLevel::Warn, Some(&caller), "slow client");
///
/// let dates = |_: &str| String::new();
/// assert_eq!(layout.render(&record, &dates), "WARN app.server.accept[42] - slow client");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Layout {
    source: String,
    segments: Vec<Segment>,
}

impl Layout {
    /// Parse `source` into segments. Parsing never fails: malformed
    /// directives degrade as described in the module docs.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = parse_segments(&source);
        Self { source, segments }
    }

    /// The template text this layout was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Render `record`, asking `dates` for every `%d` expansion.
    pub fn render(&self, record: &LogRecord<'_>, dates: &dyn DateFormatter) -> String {
        let mut out = String::with_capacity(self.source.len() + record.message.len() + 32);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Date(pattern) => out.push_str(&dates.format_now(pattern)),
                Segment::Line => {
                    if let Some(caller) = record.caller {
                        // Writing into a String cannot fail.
                        let _ = write!(out, "{}", caller.line);
                    }
                }
                Segment::Level => out.push_str(record.level.to_str()),
                Segment::Function => {
                    if let Some(caller) = record.caller {
                        out.push_str(&caller.package);
                        out.push('.');
                        out.push_str(&caller.file);
                        out.push('.');
                        out.push_str(&caller.function);
                    }
                }
                Segment::Message => out.push_str(record.message),
                Segment::Newline => out.push('\n'),
            }
        }

        out
    }
}

impl From<&str> for Layout {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<String> for Layout {
    fn from(source: String) -> Self {
        Self::parse(source)
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.source
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse and render `layout` in one go.
///
/// Returns an empty string for an empty layout.
pub fn render_layout(layout: &str, record: &LogRecord<'_>, dates: &dyn DateFormatter) -> String {
    if layout.is_empty() {
        return String::new();
    }
    Layout::parse(layout).render(record, dates)
}

fn parse_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut cursor = 0;

    while cursor < source.len() {
        let rest = &source[cursor..];
        let Some(offset) = rest.find('%') else {
            literal.push_str(rest);
            break;
        };
        literal.push_str(&rest[..offset]);
        cursor += offset + 1;

        // A trailing lone '%' has no code and expands to nothing.
        let Some(code) = source[cursor..].chars().next() else {
            break;
        };
        cursor += code.len_utf8();

        let directive = match code {
            'd' => {
                let (pattern, consumed) = date_pattern(&source[cursor..]);
                cursor += consumed;
                Some(Segment::Date(pattern.to_string()))
            }
            'L' => Some(Segment::Line),
            'l' => Some(Segment::Level),
            'f' => Some(Segment::Function),
            'm' => Some(Segment::Message),
            'n' => Some(Segment::Newline),
            _ => None,
        };

        if let Some(segment) = directive {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Extract the `{PATTERN}` argument following `%d`.
///
/// Returns the pattern and how many bytes of `rest` it consumed. Without a
/// closing brace the pattern runs to the end of the layout.
fn date_pattern(rest: &str) -> (&str, usize) {
    let Some(body) = rest.strip_prefix('{') else {
        return (DEFAULT_DATE_PATTERN, 0);
    };
    match body.find('}') {
        Some(end) => (&body[..end], end + 2),
        None => (body, rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller() -> CallerInfo {
        CallerInfo::new("app", "server", "accept", 42)
    }

    fn year(_: &str) -> String {
        "2025".to_string()
    }

    fn echo(pattern: &str) -> String {
        format!("<{}>", pattern)
    }

    fn render(layout: &str, caller: Option<&CallerInfo>, level: LogLevel, message: &str) -> String {
        render_layout(layout, &LogRecord::new(level, caller, message), &echo)
    }

    #[test]
    fn test_message_only() {
        assert_eq!(render("%m", Some(&caller()), LogLevel::Info, "hi"), "hi");
    }

    #[test]
    fn test_date_then_newline() {
        let c = caller();
        let record = LogRecord::new(LogLevel::Info, Some(&c), "");
        assert_eq!(render_layout("%d{yyyy}%n", &record, &year), "2025\n");
    }

    #[test]
    fn test_date_pattern_is_passed_verbatim() {
        assert_eq!(
            render("[%d{yyyy-MM-dd HH:mm:ss.SSS}]", None, LogLevel::Info, ""),
            "[<yyyy-MM-dd HH:mm:ss.SSS>]"
        );
    }

    #[test]
    fn test_level_without_caller() {
        assert_eq!(render("%l", None, LogLevel::Warn, "x"), "WARN");
    }

    #[test]
    fn test_caller_directives_without_caller() {
        assert_eq!(render("%L", None, LogLevel::Info, "x"), "");
        assert_eq!(render("%f[%L]", None, LogLevel::Info, "x"), "[]");
    }

    #[test]
    fn test_caller_directives() {
        assert_eq!(
            render("%f[%L]", Some(&caller()), LogLevel::Info, "x"),
            "app.server.accept[42]"
        );
    }

    #[test]
    fn test_default_layout() {
        let out = render(
            "%d{yyyy-MM-dd HH:mm:ss.SSS} %l %f[%L] - %m%n",
            Some(&caller()),
            LogLevel::Error,
            "boom",
        );
        assert_eq!(
            out,
            "<yyyy-MM-dd HH:mm:ss.SSS> ERROR app.server.accept[42] - boom\n"
        );
    }

    #[test]
    fn test_unterminated_date_runs_to_end() {
        assert_eq!(render("at %d{yyyy-MM", None, LogLevel::Info, ""), "at <yyyy-MM>");
        assert_eq!(render("%d{", None, LogLevel::Info, ""), "<>");
    }

    #[test]
    fn test_date_without_braces_uses_default_pattern() {
        assert_eq!(
            render("%d|%m", None, LogLevel::Info, "x"),
            format!("<{}>|x", DEFAULT_DATE_PATTERN)
        );
    }

    #[test]
    fn test_pattern_stops_at_first_closing_brace() {
        assert_eq!(render("%d{a}b}", None, LogLevel::Info, ""), "<a>b}");
    }

    #[test]
    fn test_unknown_directive_expands_to_nothing() {
        assert_eq!(render("a%qb%%c", None, LogLevel::Info, "x"), "abc");
        assert_eq!(render("%é!", None, LogLevel::Info, "x"), "!");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(render("done%", None, LogLevel::Info, "x"), "done");
        assert_eq!(render("%", None, LogLevel::Info, "x"), "");
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(render("", Some(&caller()), LogLevel::Error, "x"), "");
        assert!(Layout::parse("").segments().is_empty());
    }

    #[test]
    fn test_literal_text_is_verbatim() {
        assert_eq!(render("héllo → wörld", None, LogLevel::Info, ""), "héllo → wörld");
    }

    #[test]
    fn test_message_is_not_interpreted() {
        assert_eq!(render("%m", None, LogLevel::Info, "100% %l"), "100% %l");
    }

    #[test]
    fn test_long_layout_does_not_recurse() {
        let layout = "x%n".repeat(100_000);
        let out = render(&layout, None, LogLevel::Info, "");
        assert_eq!(out.len(), 200_000);
    }

    #[test]
    fn test_segments() {
        let layout = Layout::parse("[%l] %m%n");
        assert_eq!(
            layout.segments(),
            &[
                Segment::Literal("[".to_string()),
                Segment::Level,
                Segment::Literal("] ".to_string()),
                Segment::Message,
                Segment::Newline,
            ]
        );
    }

    #[test]
    fn test_unknown_directives_merge_literals() {
        let layout = Layout::parse("a%xb");
        assert_eq!(layout.segments(), &[Segment::Literal("ab".to_string())]);
    }

    #[test]
    fn test_serde_as_string() {
        let layout = Layout::parse("%l - %m");
        let json = serde_json::to_string(&layout).expect("serialize");
        assert_eq!(json, "\"%l - %m\"");

        let back: Layout = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, layout);
    }
}
