//! Appender trait for log output destinations

use super::{error::Result, log_event::LogEvent};

/// A destination for formatted lines.
///
/// The line is already rendered; the event is passed along so an appender
/// can route or decorate by level.
pub trait Appender: Send {
    fn append(&mut self, event: &LogEvent<'_>, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
