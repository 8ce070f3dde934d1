//! Caller identity attached to every log event

use std::fmt;

/// Source unit and operation a log call was made from.
///
/// Normally produced by [`call_site!`](crate::call_site) inside the logging
/// macros. Code that calls the [`Logger`](crate::Logger) methods directly
/// builds one with [`CallSite::new`] and is responsible for the names being
/// accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    operation: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, operation: &'static str) -> Self {
        Self { file, operation }
    }

    /// Build a call site from a `type_name` path of an item nested in the
    /// calling function, e.g. `my_crate::widget::Widget::save::f`.
    pub fn from_function_path(file: &'static str, path: &'static str) -> Self {
        Self::new(file, operation_name(path))
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// File name without directories or extension
    pub fn unit(&self) -> &'static str {
        let name = self.file.rsplit(['/', '\\']).next().unwrap_or(self.file);
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    /// `Unit.operation()`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}()", self.unit(), self.operation)
    }
}

/// Last path segment of the enclosing function, skipping the probe item and
/// any closure or async block frames.
fn operation_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::f").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Capture the [`CallSite`] of the surrounding function.
///
/// ```
/// fn save() -> twinlog::CallSite {
///     twinlog::call_site!()
/// }
///
/// assert_eq!(save().operation(), "save");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::from_function_path(file!(), type_name_of(f))
    }};
}
