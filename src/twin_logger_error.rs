use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the initialization of `twin_logger`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TwinLoggerError {
    /// The log directory does not exist and cannot be created.
    #[error("Log directory {} cannot be created", path.display())]
    CreateDirectory {
        /// The directory that was to be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configured log directory exists, but is not a directory.
    #[error("Log directory {} is not a directory", .0.display())]
    BadDirectory(PathBuf),

    /// The log file cannot be opened for writing.
    #[error("Log file {} cannot be opened", path.display())]
    OpenFile {
        /// The log file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The given value is no valid severity.
    #[error("Invalid severity: {0}")]
    Severity(String),

    /// A lock that guards the logger registry was poisoned.
    #[error("Logger registry is poisoned")]
    Poison,

    /// Registering a handle as the global `log` backend failed.
    #[error("Installing the global logger failed")]
    Log(#[from] log::SetLoggerError),
}

impl TwinLoggerError {
    /// The kind of the underlying I/O error, if the error is caused by one.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::CreateDirectory { source, .. } | Self::OpenFile { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}
