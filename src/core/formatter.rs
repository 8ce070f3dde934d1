//! Line formatting for log events
//!
//! ```text
//! <timestamp> [<thread>] [<tag>] <Unit.operation()> : <body>
//! ```
//!
//! The body is the message, or for an exception its full description
//! followed, on the next line, by the description of its root cause when the
//! root cause is a different error.

use super::fault::{describe, distinct_root_cause};
use super::log_event::LogEvent;
use super::timestamp::TimestampFormat;

/// Renders events to single display lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFormatter {
    timestamp_format: TimestampFormat,
}

impl LineFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn format(&self, event: &LogEvent<'_>) -> String {
        format!(
            "{} [{}] [{}] {} : {}",
            self.timestamp_format.format(event.timestamp()),
            event.thread_id(),
            event.level().tag(),
            event.caller(),
            Self::body(event)
        )
    }

    /// Message text, or the exception description when one is attached
    pub fn body(event: &LogEvent<'_>) -> String {
        match event.exception() {
            Some(err) => {
                let mut body = describe(err);
                if let Some(root) = distinct_root_cause(err) {
                    body.push('\n');
                    body.push_str(&describe(root));
                }
                body
            }
            None => event.message().unwrap_or_default().to_string(),
        }
    }
}
