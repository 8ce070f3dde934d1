//! Appender implementations

pub mod console;
pub mod file;

pub use console::ConsoleAppender;
pub use file::{FileAppender, DEFAULT_LOG_FILE};

pub use crate::core::Appender;
