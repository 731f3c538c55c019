use crate::{
    util::with_formatted,
    writers::{LogSink, SinkKind},
    DeferredNow, FormatFunction, Severity, TraceEvent,
};
use std::io::Write;

/// The standard stream a [`ConsoleSink`] writes to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ConsoleTarget {
    /// Write directly to stderr (default).
    #[default]
    Stderr,

    /// Write directly to stdout.
    Stdout,

    /// Write to stderr via `eprint!`, which allows `cargo test` to capture the output
    /// and print it only for failing tests.
    SupportCapture,
}

/// Writes the log lines to stderr or stdout.
pub struct ConsoleSink {
    format: FormatFunction,
    min_severity: Severity,
    target: ConsoleTarget,
}

impl ConsoleSink {
    /// Constructor.
    #[must_use]
    pub fn new(target: ConsoleTarget, min_severity: Severity, format: FormatFunction) -> Self {
        Self {
            format,
            min_severity,
            target,
        }
    }

    /// The stream that is written to.
    #[must_use]
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, now: &mut DeferredNow, event: &TraceEvent) -> std::io::Result<()> {
        with_formatted(self.format, now, event, |bytes| match self.target {
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(bytes),
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(bytes),
            ConsoleTarget::SupportCapture => {
                eprint!("{}", String::from_utf8_lossy(bytes));
                Ok(())
            }
        })
    }

    fn flush(&self) -> std::io::Result<()> {
        match self.target {
            ConsoleTarget::Stderr | ConsoleTarget::SupportCapture => std::io::stderr().flush(),
            ConsoleTarget::Stdout => std::io::stdout().flush(),
        }
    }

    fn min_severity(&self) -> Severity {
        self.min_severity
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }
}
