//! Core logging primitives: the `LogLevel` scale, the `Logger` trait and
//! the file-backed implementation.
//!
//! Responsibilities:
//! - Provide a consistently-typed `LogLevel` with a `None` floor that
//!   suppresses all output
//! - Gate records against a fixed minimum level
//! - Render accepted records into the single-line wire format and append
//!   them to the log file
//!
//! Notes on thread-safety and bounds:
//! Implementors of `Logger` must be `Send + Sync + 'static` so the trait
//! objects can be stored in the global facade and shared between threads.
//! `FileLogger` itself holds no open handle and no interior mutability;
//! every accepted record opens the file in append mode, writes, and closes.

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::site::{method_label, site_label, CallSite};

/// Severity scale. Declaration order is the filtering rank: `Trace` is the
/// chattiest, `Fatal` the most severe. `None` is a sentinel threshold
/// meaning "write nothing" and is never a record's own severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    None,
}

impl LogLevel {
    /// Returns the upper-case name used in rendered records.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::None => "NONE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name cannot be parsed.
#[derive(Debug, Clone)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Case-insensitive parse of the seven level names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "none" => Ok(LogLevel::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Minimal logger interface used throughout the crate.
///
/// Must be `Send + Sync + 'static` for global usage. The core requirement
/// is a single `emit` method; the per-level convenience methods are
/// implemented in terms of `emit` so tests can provide a tiny
/// implementation without writing all of them.
///
/// I/O failures are not swallowed anywhere in this trait: `emit` returns
/// the raw `io::Result` and callers decide whether to propagate it.
pub trait Logger: Send + Sync + 'static {
    /// Gate, format and append a single record.
    fn emit(&self, level: LogLevel, message: &str, site: CallSite) -> io::Result<()>;

    /// Whether a record at `level` would be written.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    /// Convenience methods, one per non-sentinel severity.
    fn trace(&self, message: &str, site: CallSite) -> io::Result<()> {
        self.emit(LogLevel::Trace, message, site)
    }
    fn debug(&self, message: &str, site: CallSite) -> io::Result<()> {
        self.emit(LogLevel::Debug, message, site)
    }
    fn info(&self, message: &str, site: CallSite) -> io::Result<()> {
        self.emit(LogLevel::Info, message, site)
    }
    fn warn(&self, message: &str, site: CallSite) -> io::Result<()> {
        self.emit(LogLevel::Warn, message, site)
    }
    fn error(&self, message: &str, site: CallSite) -> io::Result<()> {
        self.emit(LogLevel::Error, message, site)
    }
    fn fatal(&self, message: &str, site: CallSite) -> io::Result<()> {
        self.emit(LogLevel::Fatal, message, site)
    }
}

/// No-op logger used in tests and when logging is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn emit(&self, _level: LogLevel, _message: &str, _site: CallSite) -> io::Result<()> {
        Ok(())
    }

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// File-backed logger: the facility proper.
///
/// Both fields are fixed at construction and never mutated; the instance
/// lives for the process lifetime once installed in the global facade.
/// The output file is append-only — it is never truncated, rewritten or
/// deleted by this type.
#[derive(Debug, Clone)]
pub struct FileLogger {
    min_level: LogLevel,
    path: PathBuf,
}

impl FileLogger {
    pub fn new(min_level: LogLevel, path: impl Into<PathBuf>) -> Self {
        Self {
            min_level,
            path: path.into(),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && self.min_level != LogLevel::None && level >= self.min_level
    }

    /// Appends one rendered record, preceded by the usage hint when the
    /// call is the one creating the file. A suppressed call returns
    /// without touching the filesystem at all.
    fn emit(&self, level: LogLevel, message: &str, site: CallSite) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let record = render(level, &site, message, Local::now().naive_local());

        // The existence check and the append are two separate steps, so
        // concurrent first writers can race and each append the hint block.
        let hint_needed = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if hint_needed {
            file.write_all(usage_hint(&self.path).as_bytes())?;
        }
        file.write_all(record.as_bytes())
    }
}

/// Renders one record into the wire format:
/// `{ts} [{level:<5}] ({site}#{method}:{line:>3}) - {message}\n`.
///
/// The timestamp is local wall-clock time with millisecond precision.
/// Call-site metadata is advisory; unusual values pass through unchanged
/// apart from the normalization in [`super::site`].
pub(crate) fn render(
    level: LogLevel,
    site: &CallSite,
    message: &str,
    timestamp: NaiveDateTime,
) -> String {
    format!(
        "{} [{:<5}] ({}#{}:{:>3}) - {}\n",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        level.as_str(),
        site_label(site.file),
        method_label(site.function),
        site.line,
        message
    )
}

/// One-time block written as the first bytes of a freshly created log
/// file: how to follow the file from a shell.
pub(crate) fn usage_hint(path: &Path) -> String {
    format!(
        "Run this in a shell to watch records as they are appended:\n  tail -n 5 -F '{}'\n",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // ========== LogLevel tests ==========

    #[test]
    fn test_loglevel_as_str() {
        assert_eq!(LogLevel::Trace.as_str(), "TRACE");
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
        assert_eq!(LogLevel::Fatal.as_str(), "FATAL");
        assert_eq!(LogLevel::None.as_str(), "NONE");
    }

    #[test]
    fn test_loglevel_ordering_is_monotonic() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert!(LogLevel::Fatal < LogLevel::None);
    }

    #[test]
    fn test_loglevel_parse_is_case_insensitive() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Fatal".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
        assert_eq!("none".parse::<LogLevel>().unwrap(), LogLevel::None);
    }

    #[test]
    fn test_loglevel_parse_rejects_junk() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    // ========== render tests ==========

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_milli_opt(13, 5, 7, 42)
            .unwrap()
    }

    fn site(file: &'static str, function: &'static str, line: u32) -> CallSite {
        CallSite {
            file,
            function,
            line,
        }
    }

    #[test]
    fn test_render_full_layout() {
        let line = render(
            LogLevel::Info,
            &site("src/engine/session.rs", "applog::engine::session::connect", 9),
            "ready",
            ts(),
        );
        assert_eq!(
            line,
            "2026-08-06 13:05:07.042 [INFO ] (session#connect:  9) - ready\n"
        );
    }

    #[test]
    fn test_render_pads_short_level_names() {
        let s = site("a.rs", "f", 1);
        assert!(render(LogLevel::Warn, &s, "", ts()).contains("[WARN ]"));
        assert!(render(LogLevel::Info, &s, "", ts()).contains("[INFO ]"));
    }

    #[test]
    fn test_render_keeps_five_char_level_names_unpadded() {
        let s = site("a.rs", "f", 1);
        assert!(render(LogLevel::Error, &s, "", ts()).contains("[ERROR]"));
        assert!(render(LogLevel::Fatal, &s, "", ts()).contains("[FATAL]"));
    }

    #[test]
    fn test_render_constructor_placeholder() {
        let line = render(
            LogLevel::Debug,
            &site("src/widget.rs", "applog::widget::new", 21),
            "built",
            ts(),
        );
        assert!(line.contains("(widget#<Init>: 21)"));
        assert!(!line.contains("#new:"));
    }

    #[test]
    fn test_render_wide_line_numbers_are_not_truncated() {
        let line = render(
            LogLevel::Trace,
            &site("src/big.rs", "applog::big::walk", 12345),
            "",
            ts(),
        );
        assert!(line.contains(":12345)"));
    }

    #[test]
    fn test_render_empty_message() {
        let line = render(LogLevel::Info, &site("a.rs", "f", 1), "", ts());
        assert!(line.ends_with(" - \n"));
    }

    // edge case: explicit overrides with unusual metadata degrade gracefully
    #[test]
    fn test_render_passes_unusual_metadata_through() {
        let line = render(LogLevel::Info, &site("", "", 1), "x", ts());
        assert!(line.contains("(#:  1) - x"));

        let line = render(LogLevel::Info, &site("notes.txt", "f", 1), "x", ts());
        assert!(line.contains("(notes.txt#f:"));
    }

    // ========== usage hint ==========

    #[test]
    fn test_usage_hint_names_the_file() {
        let hint = usage_hint(Path::new("/tmp/Application.log"));
        assert!(hint.contains("tail -n 5 -F '/tmp/Application.log'"));
        assert!(hint.ends_with('\n'));
    }

    // ========== NoopLogger ==========

    #[test]
    fn test_nooplogger_accepts_all_levels() {
        let logger = NoopLogger;
        let s = site("a.rs", "f", 1);
        logger.trace("trace", s).unwrap();
        logger.debug("debug", s).unwrap();
        logger.info("info", s).unwrap();
        logger.warn("warn", s).unwrap();
        logger.error("error", s).unwrap();
        logger.fatal("fatal", s).unwrap();
        assert!(!logger.enabled(LogLevel::Fatal));
    }

    // ========== FileLogger gating ==========

    #[test]
    fn test_filelogger_enabled_matrix() {
        let logger = FileLogger::new(LogLevel::Warn, "/tmp/unused.log");
        assert!(!logger.enabled(LogLevel::Trace));
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Fatal));
        assert!(!logger.enabled(LogLevel::None));
    }

    #[test]
    fn test_none_threshold_disables_every_level() {
        let logger = FileLogger::new(LogLevel::None, "/tmp/unused.log");
        assert!(!logger.enabled(LogLevel::Trace));
        assert!(!logger.enabled(LogLevel::Fatal));
        assert!(!logger.enabled(LogLevel::None));
    }
}
