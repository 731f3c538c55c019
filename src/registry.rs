use crate::{Logger, LoggerHandle, TwinLoggerError};
use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex, MutexGuard, PoisonError},
};

/// Keeps the created loggers, keyed by their names.
///
/// Looking up a name and attaching the sinks of a new logger happens under one lock,
/// so even concurrent first calls for the same name create the sinks only once.
///
/// [`create_logger`](crate::create_logger) and [`Logger::start`] use the process-wide
/// instance [`LoggerRegistry::global`]; separate instances are useful for isolated tests.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    handles: Mutex<HashMap<String, LoggerHandle>>,
}

static GLOBAL: LazyLock<LoggerRegistry> = LazyLock::new(LoggerRegistry::new);

impl LoggerRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static LoggerRegistry {
        &GLOBAL
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, LoggerHandle>>, TwinLoggerError> {
        self.handles.lock().map_err(|_| TwinLoggerError::Poison)
    }

    // The map stays consistent after a panic: each change is a single insert or remove.
    fn lock_recovered(&self) -> MutexGuard<'_, HashMap<String, LoggerHandle>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the handle registered under the logger's name,
    /// or builds the logger and registers its handle.
    ///
    /// The configuration of `logger` is ignored if a handle is found.
    ///
    /// The reading methods ([`LoggerRegistry::get`], [`LoggerRegistry::names`] etc.)
    /// keep working after a thread panicked while holding the registry's lock;
    /// creating new loggers is refused then.
    ///
    /// # Errors
    ///
    /// See [`Logger::build`]; `TwinLoggerError::Poison` if the registry is poisoned.
    pub fn get_or_create(&self, logger: Logger) -> Result<LoggerHandle, TwinLoggerError> {
        let mut handles = self.lock()?;
        if let Some(handle) = handles.get(logger.config().name()) {
            return Ok(handle.clone());
        }
        let handle = logger.build()?;
        handles.insert(handle.name().to_string(), handle.clone());
        Ok(handle)
    }

    /// The handle registered under the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<LoggerHandle> {
        self.lock_recovered().get(name).cloned()
    }

    /// Unregisters the handle with the given name;
    /// a later [`LoggerRegistry::get_or_create`] with this name creates new sinks.
    ///
    /// The sinks are closed once the last clone of the returned handle is dropped.
    pub fn remove(&self, name: &str) -> Option<LoggerHandle> {
        self.lock_recovered().remove(name)
    }

    /// The names of all registered loggers, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock_recovered().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered loggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_recovered().len()
    }

    /// Whether no logger is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
