//! File appender implementation
//!
//! Best-effort copy of every console line. The file is removed when the
//! appender is created so each run starts fresh, and every line is written
//! with its own open/append/close cycle: no handle is kept between calls, so
//! a crash can only lose the line being written.

use crate::core::{Appender, LogEvent, LoggerError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name used when no path is configured, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "log.txt";

#[derive(Debug, Clone)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    /// Create an appender for `path`, deleting any file already there.
    ///
    /// Failing to delete (missing file, permissions, a lock held elsewhere)
    /// is ignored.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let _ = fs::remove_file(&path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` plus a newline, returning any I/O failure
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", self.path.display().to_string(), e)
            })?;

        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        file.write_all(output.as_bytes()).map_err(|e| {
            LoggerError::io_operation("appending to log file", self.path.display().to_string(), e)
        })
    }
}

impl Default for FileAppender {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _event: &LogEvent<'_>, line: &str) -> Result<()> {
        self.write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing is buffered between calls
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
