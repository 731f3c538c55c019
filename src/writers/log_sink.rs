use crate::{DeferredNow, Severity, TraceEvent};
use std::{io, path::PathBuf};

/// What kind of output a sink writes to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SinkKind {
    /// A log file.
    File,
    /// stderr or stdout.
    Console,
    /// Anything else.
    Other,
}

/// Writes to a single log output.
///
/// Boxed instances of `LogSink` are attached to a [`LoggerHandle`](crate::LoggerHandle).
pub trait LogSink: Sync + Send {
    /// Writes out a log line.
    ///
    /// Is only called for events whose severity reaches [`LogSink::min_severity`].
    ///
    /// # Errors
    ///
    /// The I/O error that prevented writing.
    fn write(&self, now: &mut DeferredNow, event: &TraceEvent) -> io::Result<()>;

    /// Flushes any buffered lines.
    ///
    /// # Errors
    ///
    /// The I/O error that prevented flushing.
    fn flush(&self) -> io::Result<()>;

    /// The minimum severity of the lines that are to be written.
    fn min_severity(&self) -> Severity;

    /// The kind of output.
    fn kind(&self) -> SinkKind {
        SinkKind::Other
    }

    /// The path of the active log file, if the sink writes to a file.
    fn file_path(&self) -> Option<PathBuf> {
        None
    }
}
