//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod error;
pub mod fault;
pub mod formatter;
pub mod level;
pub mod log_event;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use call_site::CallSite;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use fault::{describe, distinct_root_cause, root_cause, Fault};
pub use formatter::LineFormatter;
pub use level::Level;
pub use log_event::LogEvent;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
