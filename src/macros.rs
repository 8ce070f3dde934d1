//! Logging macros that capture the caller.
//!
//! Each macro records the calling file and function as the event's
//! [`CallSite`](crate::CallSite) and accepts `format!`-style arguments. When
//! the logger is disabled nothing is evaluated beyond the enabled check.
//!
//! # Examples
//!
//! ```
//! use twinlog::prelude::*;
//! use twinlog::{error, information, warning};
//!
//! let logger = Logger::builder().no_file().build();
//!
//! information!(logger, "Server started");
//!
//! let port = 8080;
//! information!(logger, "Server listening on port {}", port);
//! warning!(logger, "Retry {} of {}", 3, 5);
//! error!(logger, "Failed to connect to database");
//! ```

/// Log an information-level message. With no message the body is empty.
///
/// ```
/// # use twinlog::prelude::*;
/// # let logger = Logger::builder().no_file().build();
/// use twinlog::information;
/// information!(logger);
/// information!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! information {
    ($logger:expr) => {
        $crate::information!($logger, "")
    };
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.information($crate::call_site!(), format!($($arg)+));
        }
    }};
}

/// Log a pretty-printed JSON dump of a serializable value.
///
/// ```
/// # use twinlog::prelude::*;
/// # let logger = Logger::builder().no_file().build();
/// use twinlog::information_value;
/// information_value!(logger, &vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! information_value {
    ($logger:expr, $value:expr) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.information_value($crate::call_site!(), $value);
        }
    }};
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.warning($crate::call_site!(), format!($($arg)+));
        }
    }};
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.error($crate::call_site!(), format!($($arg)+));
        }
    }};
}

/// Log an error value, and its root cause, at error level.
///
/// ```
/// # use twinlog::prelude::*;
/// # let logger = Logger::builder().no_file().build();
/// use twinlog::exception;
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// exception!(logger, &Fault::new("ConfigError", "cannot start").with_cause(io));
/// ```
#[macro_export]
macro_rules! exception {
    ($logger:expr, $err:expr) => {{
        let logger = &$logger;
        if logger.is_enabled() {
            logger.exception($crate::call_site!(), $err);
        }
    }};
}
