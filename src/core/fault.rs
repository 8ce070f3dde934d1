//! Errors handed to the logger as data
//!
//! Any `std::error::Error` can be logged; its cause chain is its `source()`
//! chain. [`Fault`] is a small tagged error type for callers that want to
//! build a chain without defining their own error enums, and it carries a
//! backtrace when `RUST_BACKTRACE` enables capture.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Upper bound on `source()` links followed when looking for the root cause.
/// A chain that loops back on itself stops here instead of spinning.
pub const MAX_CAUSE_DEPTH: usize = 256;

type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// Tagged error with an optional underlying cause.
///
/// # Example
///
/// ```
/// use twinlog::Fault;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json");
/// let fault = Fault::new("ConfigError", "cannot load settings").with_cause(io);
///
/// assert_eq!(fault.to_string(), "ConfigError: cannot load settings");
/// assert_eq!(fault.root_cause().to_string(), "settings.json");
/// ```
pub struct Fault {
    kind: Cow<'static, str>,
    message: String,
    cause: Option<BoxedCause>,
    backtrace: Backtrace,
}

impl Fault {
    pub fn new(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            cause: None,
            backtrace: Backtrace::capture(),
        }
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Deepest error in the cause chain, or `self` when there is no cause
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        root_cause(self)
    }

    /// Kind, message and, when captured, the backtrace
    pub fn describe(&self) -> String {
        match self.backtrace.status() {
            BacktraceStatus::Captured => format!("{}\n{}", self, self.backtrace),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Walk `source()` to the deepest cause.
///
/// Returns `err` itself when it has no source, or when the chain does not
/// end within [`MAX_CAUSE_DEPTH`] links.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    distinct_root_cause(err).unwrap_or(err)
}

/// Deepest cause of `err` when it is a different error than `err`.
///
/// Decided by the shape of the chain, not by address: a wrapper whose
/// `source()` is a field at offset zero shares its address with that field.
/// `None` when `err` has no source or the chain loops.
pub fn distinct_root_cause<'a>(
    err: &'a (dyn Error + 'static),
) -> Option<&'a (dyn Error + 'static)> {
    let mut current = err.source()?;
    for _ in 0..MAX_CAUSE_DEPTH {
        match current.source() {
            Some(next) => current = next,
            None => return Some(current),
        }
    }
    None
}

/// Full description of one error in a chain.
///
/// A [`Fault`] renders as `kind: message` plus its backtrace. Other errors
/// render as `message: debug`, where the `Debug` part names the type or
/// variant for derived impls. Foreign errors carry no stack.
pub fn describe(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<Fault>() {
        Some(fault) => fault.describe(),
        None => format!("{}: {:?}", err, err),
    }
}
