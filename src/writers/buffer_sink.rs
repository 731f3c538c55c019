use crate::{
    util::{eprint_err, io_err, ErrorCode},
    writers::LogSink,
    DeferredNow, FormatFunction, Severity, TraceEvent,
};
use std::sync::{Arc, Mutex};

/// Collects the formatted log lines in memory.
///
/// Clones share the collected lines, so you can keep a clone to inspect
/// what a logger has written, e.g. in tests.
#[derive(Clone)]
pub struct BufferSink {
    format: FormatFunction,
    min_severity: Severity,
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    /// Create a new instance.
    #[must_use]
    pub fn new(min_severity: Severity, format: FormatFunction) -> Self {
        Self {
            format,
            min_severity,
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A copy of the lines written so far, without line breaks.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Removes all collected lines.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl LogSink for BufferSink {
    fn write(&self, now: &mut DeferredNow, event: &TraceEvent) -> std::io::Result<()> {
        let mut logline = Vec::<u8>::with_capacity(80);
        (self.format)(&mut logline, now, event).inspect_err(|e| {
            eprint_err(ErrorCode::Format, "formatting failed", e);
        })?;
        self.lines
            .lock()
            .map_err(|_| io_err("BufferSink is poisoned"))?
            .push(String::from_utf8_lossy(&logline).into_owned());
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }

    fn min_severity(&self) -> Severity {
        self.min_severity
    }
}
