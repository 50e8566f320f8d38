//! Timestamp formatting for the `%d{PATTERN}` layout directive
//!
//! Patterns use the date-time letters familiar from log4j-style layouts:
//!
//! | Letters | Meaning |
//! |---|---|
//! | `yyyy` / `yy` | year, four digits / last two digits |
//! | `M` `MM` `MMM` `MMMM` | month: number, padded number, short name, full name |
//! | `d` `dd` | day of month |
//! | `H` `HH` | hour 0-23 |
//! | `h` `hh` | hour 1-12 |
//! | `m` `mm` | minute |
//! | `s` `ss` | second |
//! | `S`… | fraction of second, truncated to as many digits as letters (max 9) |
//! | `a` | `AM` / `PM` |
//! | `E`… | weekday, short (`Mon`) or with four letters full (`Monday`) |
//! | `Z` | UTC offset, `+0800` |
//!
//! Text inside single quotes is copied literally (`''` is a quote); every
//! other character is copied as is.

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike, Utc};
use std::fmt::Write;

/// Pattern used when `%d` appears without a `{...}` argument.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// Formats "now" according to a date pattern.
///
/// Any `Fn(&str) -> String` closure is a formatter, which keeps test doubles
/// short.
pub trait DateFormatter: Send + Sync {
    fn format_now(&self, pattern: &str) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format_now(&self, pattern: &str) -> String {
        self(pattern)
    }
}

/// Formats the current local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateFormatter;

impl DateFormatter for LocalDateFormatter {
    fn format_now(&self, pattern: &str) -> String {
        format_pattern(&Local::now(), pattern)
    }
}

/// Formats the current UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcDateFormatter;

impl DateFormatter for UtcDateFormatter {
    fn format_now(&self, pattern: &str) -> String {
        format_pattern(&Utc::now(), pattern)
    }
}

/// Always formats the same instant. Useful for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedDateFormatter {
    at: DateTime<FixedOffset>,
}

impl FixedDateFormatter {
    pub fn new<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self {
            at: at.fixed_offset(),
        }
    }
}

impl DateFormatter for FixedDateFormatter {
    fn format_now(&self, pattern: &str) -> String {
        format_pattern(&self.at, pattern)
    }
}

/// Format `datetime` according to a log4j-style `pattern`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_hier_logger::core::timestamp::format_pattern;
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format_pattern(&at, "yyyy-MM-dd HH:mm:ss"), "2025-01-08 10:30:45");
/// ```
#[must_use]
pub fn format_pattern<Tz>(datetime: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
                continue;
            }
            while let Some(q) = chars.next() {
                if q != '\'' {
                    out.push(q);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    break;
                }
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }

        let mut width = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            width += 1;
        }
        write_field(&mut out, datetime, c, width);
    }

    out
}

fn write_field<Tz>(out: &mut String, dt: &DateTime<Tz>, letter: char, width: usize)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    // Writing into a String cannot fail.
    let _ = match letter {
        'y' if width == 2 => write!(out, "{:02}", dt.year().rem_euclid(100)),
        'y' => write!(out, "{:0width$}", dt.year(), width = width.max(4)),
        'M' if width == 3 => write!(out, "{}", dt.format("%b")),
        'M' if width > 3 => write!(out, "{}", dt.format("%B")),
        'M' => write!(out, "{:0width$}", dt.month()),
        'd' => write!(out, "{:0width$}", dt.day()),
        'H' => write!(out, "{:0width$}", dt.hour()),
        'h' => write!(out, "{:0width$}", dt.hour12().1),
        'm' => write!(out, "{:0width$}", dt.minute()),
        's' => write!(out, "{:0width$}", dt.second()),
        'S' => {
            let digits = width.min(9);
            let nanos = dt.nanosecond() % 1_000_000_000;
            let value = nanos / 10u32.pow((9 - digits) as u32);
            write!(out, "{:0digits$}", value)
        }
        'a' => out.write_str(if dt.hour12().0 { "PM" } else { "AM" }),
        'E' if width >= 4 => write!(out, "{}", dt.format("%A")),
        'E' => write!(out, "{}", dt.format("%a")),
        'Z' => write!(out, "{}", dt.format("%z")),
        other => {
            for _ in 0..width {
                out.push(other);
            }
            Ok(())
        }
    };
}
