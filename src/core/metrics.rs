//! Logger metrics for observability
//!
//! The logger never reports its own degradation in the log stream, so these
//! counters are the only place a silently failing file sink shows up.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by the emission path
///
/// # Example
///
/// ```
/// use twinlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_file_failure();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.file_failures(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines written to the console
    emitted: AtomicU64,

    /// Lines the file sink failed to append
    file_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            file_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_failures(&self) -> u64 {
        self.file_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_file_failure(&self) {
        self.file_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of emitted lines missing from the file
    pub fn file_failure_rate(&self) -> f64 {
        let emitted = self.emitted();
        if emitted == 0 {
            return 0.0;
        }
        (self.file_failures() as f64 / emitted as f64) * 100.0
    }
}
