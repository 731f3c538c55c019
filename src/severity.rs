use crate::TwinLoggerError;
use std::{fmt, str::FromStr};

/// Ordered severity of a log line.
///
/// Every sink has a minimum severity; lines below it are not written by that sink.
/// The numeric values follow the widespread convention `10, 20, 30, 40, 50`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Detailed information for diagnosing problems.
    Debug = 10,
    /// Confirmation that things work as expected.
    Info = 20,
    /// Something unexpected happened, the program continues.
    Warning = 30,
    /// A function could not do its job.
    Error = 40,
    /// A serious failure, the program may not be able to continue.
    Critical = 50,
}

impl Severity {
    /// All severities, in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// The upper-case name that is used in the log lines, e.g. `WARNING`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// The numeric value.
    #[must_use]
    pub fn numeric(self) -> u8 {
        self as u8
    }

    /// The weakest `log::LevelFilter` that lets all lines of this severity pass.
    #[must_use]
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Severity::Debug => log::LevelFilter::Trace,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warning => log::LevelFilter::Warn,
            Severity::Error | Severity::Critical => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `pad` makes width and alignment flags work, like in `{:<8}`
        f.pad(self.name())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = TwinLoggerError;

    fn try_from(value: u8) -> Result<Self, TwinLoggerError> {
        Severity::ALL
            .into_iter()
            .find(|s| s.numeric() == value)
            .ok_or_else(|| TwinLoggerError::Severity(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = TwinLoggerError;

    /// Accepts the names case-insensitively, the aliases `warn` and `fatal`,
    /// and the numeric values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Severity::try_from(number);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" | "fatal" => Ok(Severity::Critical),
            _ => Err(TwinLoggerError::Severity(s.to_string())),
        }
    }
}
