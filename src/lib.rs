//! Process-local file logging: leveled records are filtered against a
//! configured threshold, stamped with the call site, and appended to a
//! single log file.
//!
//! ```rust,no_run
//! use applog::logger::{self, FileLogger, LogLevel};
//!
//! logger::init_logger(FileLogger::new(LogLevel::Info, "/tmp/Application.log"));
//! applog::info!("app started").unwrap();
//! ```

pub mod config;
pub mod logger;
