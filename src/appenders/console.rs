//! Console appender implementation

use crate::core::{Appender, Level, LogEvent, Result};
use std::io::{self, Write};

enum ConsoleTarget {
    /// Process stdout and stderr
    Std,
    /// Caller supplied writers standing in for stdout and stderr
    Writers {
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    },
}

/// Writes Information and Warning lines to stdout and Error lines to stderr,
/// flushing after every line.
pub struct ConsoleAppender {
    target: ConsoleTarget,
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            target: ConsoleTarget::Std,
            use_colors: false,
        }
    }

    /// Route output into the given writers instead of the process streams
    ///
    /// # Example
    ///
    /// ```
    /// use twinlog::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writers(Vec::new(), std::io::sink());
    /// ```
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            target: ConsoleTarget::Writers {
                out: Box::new(out),
                err: Box::new(err),
            },
            use_colors: false,
        }
    }

    /// Color whole lines by level. Has no effect without the `color` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn render(&self, level: Level, line: &str) -> String {
        #[cfg(feature = "color")]
        if self.use_colors {
            use colored::Colorize;
            return line.color(level.color_code()).to_string();
        }
        let _ = level;
        line.to_string()
    }

    fn write_to(writer: &mut dyn Write, line: &str) -> io::Result<()> {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, event: &LogEvent<'_>, line: &str) -> Result<()> {
        let level = event.level();
        let output = self.render(level, line);

        match &mut self.target {
            ConsoleTarget::Std if level.is_error() => {
                Self::write_to(&mut io::stderr().lock(), &output)?
            }
            ConsoleTarget::Std => Self::write_to(&mut io::stdout().lock(), &output)?,
            ConsoleTarget::Writers { err, .. } if level.is_error() => {
                Self::write_to(err.as_mut(), &output)?
            }
            ConsoleTarget::Writers { out, .. } => Self::write_to(out.as_mut(), &output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            ConsoleTarget::Std => {
                io::stdout().flush()?;
                io::stderr().flush()?;
            }
            ConsoleTarget::Writers { out, err } => {
                out.flush()?;
                err.flush()?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
