//! Top-level logger exports and the process-wide facade.
//!
//! This module re-exports the core logging primitives and exposes a
//! global facade for programs that prefer a single process-wide logger
//! instance.
//!
//! - `Logger`: trait defining the logging surface
//! - `LogLevel`: enum of severities, `None` as the suppress-all floor
//! - `FileLogger`: the file-backed facility
//! - `NoopLogger`: no-op implementation for tests and disabled logging
//! - `CallSite`: captured source location of a call
//!
//! ```rust,no_run
//! use applog::logger::{self, FileLogger, LogLevel};
//! logger::init_logger(FileLogger::new(LogLevel::Info, "/tmp/Application.log"));
//! applog::info!("app started").unwrap();
//! ```
//!
//! The facade holds one logger for the process lifetime: `init_logger`
//! installs it, the first call wins and later calls are ignored, and
//! there is no teardown. Before initialization every facade call is a
//! silent no-op that reports success.
//!
//! TODO: make the threshold runtime-reconfigurable once a consumer needs it.

pub mod core;
mod macros;
pub mod site;

pub use self::core::{FileLogger, LogLevel, Logger, NoopLogger, ParseLevelError};
pub use self::site::CallSite;

use std::io;
use std::sync::OnceLock;

/// Process-wide logger, set once at startup.
static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();

/// Installs the global logger for the lifetime of the program. The first
/// call wins; later calls are ignored.
pub fn init_logger<L: Logger>(logger: L) {
    let _ = GLOBAL_LOGGER.set(Box::new(logger));
}

/// Returns the installed global logger, if any.
pub fn global() -> Option<&'static dyn Logger> {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref())
}

/// Whether the global logger would write a record at `level`. False when
/// no logger has been installed.
pub fn enabled(level: LogLevel) -> bool {
    global().map_or(false, |logger| logger.enabled(level))
}

/// Log through the global logger if set, otherwise a successful no-op.
pub fn log(level: LogLevel, message: &str, site: CallSite) -> io::Result<()> {
    match global() {
        Some(logger) => logger.emit(level, message, site),
        None => Ok(()),
    }
}

/// Convenience functions, one per non-sentinel severity.
pub fn trace(message: &str, site: CallSite) -> io::Result<()> {
    log(LogLevel::Trace, message, site)
}

pub fn debug(message: &str, site: CallSite) -> io::Result<()> {
    log(LogLevel::Debug, message, site)
}

pub fn info(message: &str, site: CallSite) -> io::Result<()> {
    log(LogLevel::Info, message, site)
}

pub fn warn(message: &str, site: CallSite) -> io::Result<()> {
    log(LogLevel::Warn, message, site)
}

pub fn error(message: &str, site: CallSite) -> io::Result<()> {
    log(LogLevel::Error, message, site)
}

pub fn fatal(message: &str, site: CallSite) -> io::Result<()> {
    log(LogLevel::Fatal, message, site)
}

#[cfg(test)]
pub mod tests;
