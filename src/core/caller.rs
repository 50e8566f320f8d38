//! Call-site metadata
//!
//! A [`CallerInfo`] identifies where a log statement runs. Its three name
//! segments (package, file, function) drive logger resolution and the `%f`
//! layout directive; the line number feeds `%L`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Identity of a log call site
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CallerInfo {
    pub package: String,
    /// File name with its extension stripped
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl CallerInfo {
    pub fn new(
        package: impl Into<String>,
        file: impl Into<String>,
        function: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            package: package.into(),
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// Build caller metadata from raw call-site data.
    ///
    /// `function_path` is a `::`-qualified function path such as
    /// `my_crate::net::server::accept` (what [`function_name!`] produces).
    /// The first segment becomes the package and the last named segment the
    /// function; closure frames are skipped. `file_path` is reduced to its
    /// stem, so `src/net/server.rs` yields `server`.
    ///
    /// Returns `None` when `function_path` carries no usable name.
    ///
    /// [`function_name!`]: crate::function_name
    pub fn from_call_site(function_path: &str, file_path: &str, line: u32) -> Option<Self> {
        let mut segments = function_path
            .split("::")
            .map(|s| s.trim_start_matches(['<', '&']))
            .filter(|s| !s.is_empty() && *s != "{{closure}}");

        let package = segments.next()?;
        let function = segments.last().unwrap_or(package);

        Some(Self::new(package, file_stem(file_path), function, line))
    }

    /// `package.file.function`, the most specific logger name this caller can match
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.package, self.file, self.function)
    }

    /// Whether a dotted logger `name` equals `package`, `package.file` or
    /// `package.file.function` for this caller.
    ///
    /// Equivalent to comparing against the three concatenated candidates,
    /// without building them.
    pub fn matches_logger_name(&self, name: &str) -> bool {
        let Some(rest) = name.strip_prefix(self.package.as_str()) else {
            return false;
        };
        if rest.is_empty() {
            return true;
        }
        let Some(rest) = rest
            .strip_prefix('.')
            .and_then(|r| r.strip_prefix(self.file.as_str()))
        else {
            return false;
        };
        if rest.is_empty() {
            return true;
        }
        rest.strip_prefix('.') == Some(self.function.as_str())
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}:{}", self.package, self.file, self.function, self.line)
    }
}

fn file_stem(file_path: &str) -> &str {
    Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

/// Expands to the `::`-qualified path of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Captures the current call site as `Option<CallerInfo>`.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::CallerInfo::from_call_site($crate::function_name!(), file!(), line!())
    };
}
