//! Timestamp formatting utilities
//!
//! Every line starts with the capture time of its event. The default is the
//! sortable, timezone-free `2025-01-08T10:30:45` form in local time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options for the line prefix
///
/// # Examples
///
/// ```
/// use twinlog::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Sortable.format(&at), "2025-01-08T10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Sortable, second precision, no timezone: `2025-01-08T10:30:45`
    #[default]
    Sortable,

    /// Sortable with milliseconds: `2025-01-08T10:30:45.123`
    SortableMillis,

    /// RFC 3339 with local offset: `2025-01-08T10:30:45+02:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Sortable => datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
            TimestampFormat::SortableMillis => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
