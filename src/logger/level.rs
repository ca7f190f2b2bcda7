// Log level filter

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Whether a message at `other` passes this filter
    pub const fn enables(self, other: Self) -> bool {
        other as u8 <= self as u8
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" | "trace" => Ok(Self::Debug),
            other => Err(format!("Unknown log level: '{other}'")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_filter() {
        assert!(LogLevel::Info.enables(LogLevel::Error));
        assert!(LogLevel::Info.enables(LogLevel::Info));
        assert!(!LogLevel::Info.enables(LogLevel::Debug));
        assert!(LogLevel::Debug.enables(LogLevel::Debug));
        assert!(!LogLevel::Error.enables(LogLevel::Warn));
    }

    #[test]
    fn test_level_filter_in_const_context() {
        const WARN_SHOWS_ERROR: bool = LogLevel::Warn.enables(LogLevel::Error);
        const WARN_SHOWS_INFO: bool = LogLevel::Warn.enables(LogLevel::Info);
        assert!(WARN_SHOWS_ERROR);
        assert!(!WARN_SHOWS_INFO);
    }
}
