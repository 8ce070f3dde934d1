//! Log event structure

use super::call_site::CallSite;
use super::level::Level;
use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::error::Error;

// Thread-local cache so the id is rendered once per thread
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Numeric part of the current `ThreadId`, e.g. `7` for `ThreadId(7)`
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let debug = format!("{:?}", std::thread::current().id());
                debug
                    .strip_prefix("ThreadId(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .map(str::to_string)
                    .unwrap_or(debug)
            })
            .clone()
    })
}

/// One logging call, captured at the call site.
///
/// Events are built once, formatted once, and dropped; the fields are only
/// readable. The exception is borrowed from the caller for the duration of
/// the call.
#[derive(Debug)]
pub struct LogEvent<'a> {
    timestamp: DateTime<Local>,
    level: Level,
    message: Option<String>,
    exception: Option<&'a (dyn Error + 'static)>,
    caller: CallSite,
    thread_id: String,
}

impl<'a> LogEvent<'a> {
    pub fn new(level: Level, caller: CallSite, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: Some(message.into()),
            exception: None,
            caller,
            thread_id: get_thread_id(),
        }
    }

    /// Error-level event describing `exception`
    pub fn from_exception(caller: CallSite, exception: &'a (dyn Error + 'static)) -> Self {
        Self {
            timestamp: Local::now(),
            level: Level::Error,
            message: None,
            exception: Some(exception),
            caller,
            thread_id: get_thread_id(),
        }
    }

    /// Replace the capture time, for reproducible output
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn exception(&self) -> Option<&'a (dyn Error + 'static)> {
        self.exception
    }

    pub fn caller(&self) -> &CallSite {
        &self.caller
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }
}
