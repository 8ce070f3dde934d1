//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event.
///
/// The set is closed: there is no way to register custom levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    Information = 0,
    Warning = 1,
    Error = 2,
}

impl Level {
    /// Three-letter tag written between brackets in every line
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Information => "Inf",
            Level::Warning => "Wrn",
            Level::Error => "Err",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }

    /// Whether lines at this level go to stderr instead of stdout
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    #[cfg(feature = "color")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Information => Green,
            Level::Warning => Yellow,
            Level::Error => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INF" | "INFO" | "INFORMATION" => Ok(Level::Information),
            "WRN" | "WARN" | "WARNING" => Ok(Level::Warning),
            "ERR" | "ERROR" => Ok(Level::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Level::Information.tag(), "Inf");
        assert_eq!(Level::Warning.tag(), "Wrn");
        assert_eq!(Level::Error.tag(), "Err");
    }

    #[test]
    fn test_only_error_goes_to_stderr() {
        assert!(!Level::Information.is_error());
        assert!(!Level::Warning.is_error());
        assert!(Level::Error.is_error());
    }

    #[test]
    fn test_parse() {
        assert_eq!("wrn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("Information".parse::<Level>(), Ok(Level::Information));
        assert_eq!("ERROR".parse::<Level>(), Ok(Level::Error));
        assert!("fatal".parse::<Level>().is_err());
    }
}
