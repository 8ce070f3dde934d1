//! Main logger implementation

use super::{
    appender::Appender,
    call_site::CallSite,
    config::LoggerConfig,
    error::{LoggerError, Result},
    formatter::LineFormatter,
    level::Level,
    log_event::LogEvent,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender, DEFAULT_LOG_FILE};
use parking_lot::Mutex;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outputs guarded by the emission lock
struct Sinks {
    console: ConsoleAppender,
    file: Option<FileAppender>,
}

/// Process-lifetime logging context.
///
/// Build one at startup and hand it (by reference or in an `Arc`) to the code
/// that logs. Every call formats its line and writes it to the console and the
/// optional file while holding a single lock, so lines from concurrent
/// callers never interleave.
///
/// The methods take an explicit [`CallSite`]; the [`information!`],
/// [`warning!`], [`error!`] and [`exception!`] macros capture it for you.
///
/// [`information!`]: crate::information
/// [`warning!`]: crate::warning
/// [`error!`]: crate::error
/// [`exception!`]: crate::exception
pub struct Logger {
    enabled: AtomicBool,
    formatter: LineFormatter,
    sinks: Mutex<Sinks>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with the default configuration: enabled, console output and
    /// `log.txt` in the working directory (truncated now).
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build()
    }

    /// Logger configured from `TWINLOG_ENABLED` and `TWINLOG_FILE`
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(&LoggerConfig::from_env()?))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn all output on or off. While disabled every call is a no-op.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn information(&self, site: CallSite, message: impl Into<String>) {
        self.log(Level::Information, site, message);
    }

    /// Log a pretty-printed JSON dump of `value` at Information level
    pub fn information_value<T: Serialize + ?Sized>(&self, site: CallSite, value: &T) {
        if !self.is_enabled() {
            return;
        }
        let dump = match serde_json::to_string_pretty(value) {
            Ok(dump) => dump,
            Err(e) => format!("<unserializable value: {}>", LoggerError::from(e)),
        };
        self.emit(LogEvent::new(Level::Information, site, dump));
    }

    pub fn warning(&self, site: CallSite, message: impl Into<String>) {
        self.log(Level::Warning, site, message);
    }

    pub fn error(&self, site: CallSite, message: impl Into<String>) {
        self.log(Level::Error, site, message);
    }

    /// Log an error and its root cause at Error level
    pub fn exception(&self, site: CallSite, err: &(dyn Error + 'static)) {
        if !self.is_enabled() {
            return;
        }
        self.emit(LogEvent::from_exception(site, err));
    }

    pub fn log(&self, level: Level, site: CallSite, message: impl Into<String>) {
        if !self.is_enabled() {
            return;
        }
        self.emit(LogEvent::new(level, site, message));
    }

    /// Format and write one event to every sink under the emission lock.
    ///
    /// File failures are counted and otherwise ignored. A broken console is
    /// treated the way `println!` treats it.
    fn emit(&self, event: LogEvent<'_>) {
        let mut sinks = self.sinks.lock();
        let line = self.formatter.format(&event);

        if let Err(e) = sinks.console.append(&event, &line) {
            panic!("failed printing to console: {}", e);
        }
        self.metrics.record_emitted();

        if let Some(file) = sinks.file.as_mut() {
            if file.append(&event, &line).is_err() {
                self.metrics.record_file_failure();
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        sinks.console.flush()?;
        if let Some(file) = sinks.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Path of the file sink, if one is configured
    pub fn file_path(&self) -> Option<PathBuf> {
        self.sinks.lock().file.as_ref().map(|f| f.path().to_path_buf())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use twinlog::prelude::*;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = Logger::builder()
///     .file(dir.path().join("app.log"))
///     .timestamp_format(TimestampFormat::SortableMillis)
///     .build();
///
/// twinlog::information!(logger, "ready");
/// ```
pub struct LoggerBuilder {
    enabled: bool,
    file_path: Option<PathBuf>,
    timestamp_format: TimestampFormat,
    console: Option<ConsoleAppender>,
    colors: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            enabled: true,
            file_path: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            timestamp_format: TimestampFormat::default(),
            console: None,
            colors: false,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            enabled: config.enabled,
            file_path: config.file_path.clone(),
            timestamp_format: config.timestamp_format.clone(),
            console: None,
            colors: config.colors,
        }
    }

    /// Initial value of the enabled flag
    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Write a copy of every line to `path`
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Console only
    #[must_use = "builder methods return a new value"]
    pub fn no_file(mut self) -> Self {
        self.file_path = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace the console appender, e.g. to capture output
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    /// Color console lines by level (the default console appender only)
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Build the Logger. Creating the file sink deletes any existing file at
    /// its path.
    pub fn build(self) -> Logger {
        let console = self
            .console
            .unwrap_or_else(|| ConsoleAppender::new().with_colors(self.colors));

        Logger {
            enabled: AtomicBool::new(self.enabled),
            formatter: LineFormatter::new(self.timestamp_format),
            sinks: Mutex::new(Sinks {
                console,
                file: self.file_path.map(FileAppender::new),
            }),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
