use crate::{
    logger::SinkConfig,
    util::{eprint_err, ErrorCode},
    writers::{LogSink, SinkKind},
    DeferredNow, Location, Severity, TraceEvent, TwinLoggerError,
};
use std::{fmt, path::PathBuf, sync::Arc};

/// Shared handle on a logger: its configuration and its attached sinks.
///
/// A `LoggerHandle` is returned from [`create_logger`](crate::create_logger) and from the
/// finishing methods of [`Logger`](crate::Logger).
/// Clones are cheap and refer to the same sinks; the sinks are flushed and closed
/// when the last clone is dropped.
///
/// Log lines are usually written with the macros
/// [`debug!`](crate::debug), [`info!`](crate::info), [`warning!`](crate::warning),
/// [`error!`](crate::error), and [`critical!`](crate::critical),
/// which add the source location:
///
/// ```rust,ignore
/// let logger = twin_logger::create_logger("app", WriteMode::Append, Severity::Debug, Severity::Warning, None)?;
/// twin_logger::info!(logger, "{} items loaded", items.len());
/// ```
///
/// With [`LoggerHandle::install_global`], the handle also serves the macros of the
/// `log` crate.
#[derive(Clone)]
pub struct LoggerHandle
where
    Self: Send + Sync,
{
    inner: Arc<Inner>,
}

struct Inner {
    config: SinkConfig,
    sinks: Vec<Box<dyn LogSink>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        flush_all(&self.sinks);
    }
}

fn flush_all(sinks: &[Box<dyn LogSink>]) {
    for sink in sinks {
        sink.flush()
            .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
    }
}

impl LoggerHandle {
    pub(crate) fn new(config: SinkConfig, sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self {
            inner: Arc::new(Inner { config, sinks }),
        }
    }

    /// The logical name of the logger.
    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.config.name()
    }

    /// The configuration the logger was created with.
    #[must_use]
    pub fn config(&self) -> &SinkConfig {
        &self.inner.config
    }

    /// Writes a line to all sinks whose minimum severity is met.
    ///
    /// Failing sinks are reported on stderr; the other sinks are still served.
    pub fn log_at(&self, severity: Severity, location: &Location, args: fmt::Arguments) {
        let mut now = DeferredNow::new();
        let event = TraceEvent::new(self.name(), severity, location, args);
        for sink in &self.inner.sinks {
            if severity >= sink.min_severity() {
                sink.write(&mut now, &event)
                    .unwrap_or_else(|e| eprint_err(ErrorCode::Write, "writing failed", &e));
            }
        }
    }

    /// Whether at least one sink would write a line of the given severity.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.inner
            .sinks
            .iter()
            .any(|sink| severity >= sink.min_severity())
    }

    /// Flushes all sinks.
    pub fn flush(&self) {
        flush_all(&self.inner.sinks);
    }

    /// The paths of the active files of all file sinks.
    #[must_use]
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.inner
            .sinks
            .iter()
            .filter_map(|sink| sink.file_path())
            .collect()
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.inner.sinks.len()
    }

    /// The kinds of the attached sinks, in the order of attachment.
    #[must_use]
    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.inner.sinks.iter().map(|sink| sink.kind()).collect()
    }

    /// Whether both handles refer to the same logger.
    #[must_use]
    pub fn ptr_eq(&self, other: &LoggerHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Makes a clone of this handle the backend of the `log` crate's macros.
    ///
    /// `log::Level::Trace` and `log::Level::Debug` map to [`Severity::Debug`],
    /// `log::Level::Warn` maps to [`Severity::Warning`].
    ///
    /// # Errors
    ///
    /// `TwinLoggerError::Log` if a global logger was installed already.
    pub fn install_global(&self) -> Result<(), TwinLoggerError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        let max_level = self
            .inner
            .sinks
            .iter()
            .map(|sink| sink.min_severity())
            .min()
            .map_or(log::LevelFilter::Off, Severity::to_level_filter);
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LoggerHandle {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let location = Location::new(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            record.module_path().unwrap_or_default(),
            "",
        );
        self.log_at(Severity::from(record.level()), &location, *record.args());
    }

    fn flush(&self) {
        flush_all(&self.inner.sinks);
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("config", &self.inner.config)
            .field("sinks", &self.sink_kinds())
            .finish()
    }
}
