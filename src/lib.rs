//! # twinlog
//!
//! A small synchronous logging facility. Every call produces one line of the
//! form
//!
//! ```text
//! 2025-01-08T10:30:45 [3] [Wrn] Widget.save() : disk almost full
//! ```
//!
//! written to stdout (Information, Warning) or stderr (Error) and appended to
//! a best-effort log file that is truncated when the logger is built.
//!
//! ## Features
//!
//! - **Caller capture**: the macros record `file.function()` automatically
//! - **Serialized emission**: one lock per line, so concurrent lines never mix
//! - **Best-effort file copy**: file failures never disturb console output
//! - **Error chains**: errors are logged with their root cause
//!
//! ```
//! use twinlog::prelude::*;
//! use twinlog::{exception, information, warning};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::builder().file(dir.path().join("app.log")).build();
//!
//! information!(logger, "starting");
//! warning!(logger, "{} retries left", 2);
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json");
//! exception!(logger, &Fault::new("ConfigError", "cannot load settings").with_cause(io));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, CallSite, Fault, Level, LineFormatter, LogEvent, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    Appender, CallSite, Fault, Level, LineFormatter, LogEvent, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, TimestampFormat,
};
