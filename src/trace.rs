//! Call-tracing wrappers.
//!
//! [`traced`] and [`traced_entry`] capture a [`LoggerHandle`] and wrap functions so that
//! every call is framed by trace lines. They differ in how failures are handled:
//!
//! * a [`Traced`] function reports a failure with severity `Critical`
//!   and hands it back to the caller unchanged,
//! * a [`TracedEntry`] function, meant for the one entry point of a program,
//!   reports a failure together with the paths of the log files and then suppresses it.
//!
//! A failure is a panic, or an `Err` returned by the wrapped function.
//! Functions that return plain values, e.g. `i32` or `Option<T>`, are called with the
//! `*_infallible` variants, for which only a panic is a failure.

use crate::{Location, LoggerHandle, Severity};
use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

/// Name, module and declaration site of a wrapped function.
///
/// Usually produced with [`fn_identity!`](crate::fn_identity).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FnIdentity {
    qualname: &'static str,
    module: &'static str,
    file: &'static str,
    line: u32,
}

impl FnIdentity {
    /// Constructor.
    #[must_use]
    pub fn new(
        qualname: &'static str,
        module: &'static str,
        file: &'static str,
        line: u32,
    ) -> Self {
        Self {
            qualname,
            module,
            file,
            line,
        }
    }

    /// The function's name, e.g. `str_func`; for methods without the type.
    #[must_use]
    pub fn qualname(&self) -> &'static str {
        self.qualname
    }

    /// The module in which the function is defined; for methods, the type is appended,
    /// e.g. `app::parsing::Parser`.
    #[must_use]
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// The source file in which the function was wrapped.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.file
    }

    fn location(&self) -> Location<'static> {
        Location::new(self.file, self.line, self.module, self.qualname)
    }
}

/// Return values that can signal a failure.
pub trait Outcome {
    /// The value that a successful call produces.
    type Value;

    /// Pretty-printed description of the failure, or `None` for a success.
    fn failure_detail(&self) -> Option<String>;

    /// The value of a successful call, or `None` for a failure.
    fn into_value(self) -> Option<Self::Value>;
}

impl<T, E: fmt::Debug> Outcome for Result<T, E> {
    type Value = T;

    fn failure_detail(&self) -> Option<String> {
        self.as_ref().err().map(|e| format!("{e:#?}"))
    }

    fn into_value(self) -> Option<T> {
        self.ok()
    }
}

impl Outcome for () {
    type Value = ();

    fn failure_detail(&self) -> Option<String> {
        None
    }

    fn into_value(self) -> Option<()> {
        Some(())
    }
}

/// Result of a call of a [`TracedEntry`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunOutcome<T> {
    /// The function returned successfully.
    Completed(T),
    /// The function failed; contains the description of the failure.
    Failed(String),
}

impl<T> RunOutcome<T> {
    /// The value of a completed run.
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            RunOutcome::Completed(value) => Some(value),
            RunOutcome::Failed(_) => None,
        }
    }

    /// Whether the run failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed(_))
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {s}")
    } else {
        "panic with a non-string payload".to_string()
    }
}

// Writes the closing trace line when dropped, so also while unwinding.
struct EndTrace<'a> {
    logger: &'a LoggerHandle,
    location: &'a Location<'a>,
    message: String,
}
impl Drop for EndTrace<'_> {
    fn drop(&mut self) {
        self.logger
            .log_at(Severity::Debug, self.location, format_args!("{}", self.message));
    }
}

/// Wrapper factory for ordinary functions; see [`traced`].
#[derive(Clone, Debug)]
pub struct Tracer {
    logger: LoggerHandle,
}

/// Returns a [`Tracer`] that wraps functions with start, end and failure tracing.
///
/// ```rust,ignore
/// let str_func = twin_logger::traced(&logger).wrap(fn_identity!(str_func), str_func);
/// // or shorter:
/// let str_func = twin_logger::traced!(logger, str_func);
///
/// let answer = str_func.call(|f| f(Some("test")));
/// ```
#[must_use]
pub fn traced(logger: &LoggerHandle) -> Tracer {
    Tracer {
        logger: logger.clone(),
    }
}

impl Tracer {
    /// Wraps the given function.
    pub fn wrap<F>(&self, identity: FnIdentity, function: F) -> Traced<F> {
        Traced {
            logger: self.logger.clone(),
            identity,
            function,
        }
    }
}

/// A function wrapped by a [`Tracer`].
///
/// Each [`Traced::call`]
///
/// 1. writes `Starting <name> from module:\t<module>` with severity `Debug`,
/// 1. calls the function with the arguments the caller provides,
/// 1. on failure writes the failure with severity `Critical` and hands it on unchanged:
///    an `Err` is returned as it is, a panic continues unwinding,
/// 1. writes `Ending <name> from module:\t<module>` with severity `Debug`,
///    exactly once and on every exit path.
///
/// [`Traced::call_infallible`] does the same for functions whose return type is no
/// [`Outcome`].
pub struct Traced<F> {
    logger: LoggerHandle,
    identity: FnIdentity,
    function: F,
}

impl<F> Traced<F> {
    /// Calls the wrapped function; `invoke` receives the function and supplies the arguments.
    ///
    /// An `Err` of the returned [`Outcome`] counts as failure.
    ///
    /// ```rust,ignore
    /// let sum = traced_add.call(|f| f(2, 3))?;
    /// ```
    pub fn call<I, R>(&self, invoke: I) -> R
    where
        I: FnOnce(&F) -> R,
        R: Outcome,
    {
        self.call_with(invoke, R::failure_detail)
    }

    /// Like [`Traced::call`], for functions with any return type, e.g. `i32` or `Option<T>`.
    ///
    /// Only a panic counts as failure; the value is returned as it is.
    pub fn call_infallible<I, R>(&self, invoke: I) -> R
    where
        I: FnOnce(&F) -> R,
    {
        self.call_with(invoke, |_| None)
    }

    fn call_with<I, R, D>(&self, invoke: I, failure_detail: D) -> R
    where
        I: FnOnce(&F) -> R,
        D: FnOnce(&R) -> Option<String>,
    {
        let location = self.identity.location();
        let (qualname, module) = (self.identity.qualname, self.identity.module);
        self.logger.log_at(
            Severity::Debug,
            &location,
            format_args!("Starting {qualname} from module:\t{module}"),
        );
        let _end = EndTrace {
            logger: &self.logger,
            location: &location,
            message: format!("Ending {qualname} from module:\t{module}"),
        };

        match panic::catch_unwind(AssertUnwindSafe(|| invoke(&self.function))) {
            Ok(result) => {
                if let Some(detail) = failure_detail(&result) {
                    self.logger
                        .log_at(Severity::Critical, &location, format_args!("{detail}"));
                }
                result
            }
            Err(payload) => {
                self.logger.log_at(
                    Severity::Critical,
                    &location,
                    format_args!("{}", panic_detail(&*payload)),
                );
                panic::resume_unwind(payload)
            }
        }
    }

    /// Name and module of the wrapped function.
    #[must_use]
    pub fn identity(&self) -> &FnIdentity {
        &self.identity
    }

    /// The undecorated function.
    #[must_use]
    pub fn inner(&self) -> &F {
        &self.function
    }

    /// Returns the undecorated function.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F> fmt::Debug for Traced<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("identity", &self.identity)
            .field("logger", &self.logger.name())
            .finish_non_exhaustive()
    }
}

/// Wrapper factory for the entry point of a program; see [`traced_entry`].
#[derive(Clone, Debug)]
pub struct EntryTracer {
    logger: LoggerHandle,
}

/// Returns an [`EntryTracer`] that wraps the entry point of a program.
///
/// Failures of the wrapped function are logged, together with the paths of all log files,
/// and then suppressed; see [`TracedEntry`].
/// Wrap only one function per program with it.
///
/// ```rust,ignore
/// let run = twin_logger::traced_entry!(logger, run);
/// run.call(|f| f(&config));
/// ```
#[must_use]
pub fn traced_entry(logger: &LoggerHandle) -> EntryTracer {
    EntryTracer {
        logger: logger.clone(),
    }
}

impl EntryTracer {
    /// Wraps the given function.
    pub fn wrap<F>(&self, identity: FnIdentity, function: F) -> TracedEntry<F> {
        TracedEntry {
            logger: self.logger.clone(),
            identity,
            function,
        }
    }
}

/// The entry point of a program, wrapped by an [`EntryTracer`].
///
/// Each call
///
/// 1. writes `=== Starting of Logs ===` with severity `Debug`,
/// 1. calls the function,
/// 1. on failure writes `There's been an ERROR! Check your logs: <file paths>` with
///    severity `Critical` and the failure with severity `Debug`,
/// 1. writes `=== Ending of Logs ===` with severity `Debug`, on every exit path.
///
/// [`TracedEntry::run`] returns the explicit [`RunOutcome`],
/// [`TracedEntry::call`] suppresses the failure and only returns the value of a success.
/// The `*_infallible` variants accept functions with any return type.
pub struct TracedEntry<F> {
    logger: LoggerHandle,
    identity: FnIdentity,
    function: F,
}

const BANNER: &str = "===";

impl<F> TracedEntry<F> {
    /// Calls the wrapped function and reports how it went.
    ///
    /// An `Err` of the returned [`Outcome`] and a panic count as failure.
    pub fn run<I, R>(&self, invoke: I) -> RunOutcome<R::Value>
    where
        I: FnOnce(&F) -> R,
        R: Outcome,
    {
        self.run_with(invoke, |result| match result.failure_detail() {
            Some(detail) => RunOutcome::Failed(detail),
            None => result
                .into_value()
                .map_or_else(|| RunOutcome::Failed(String::new()), RunOutcome::Completed),
        })
    }

    /// Like [`TracedEntry::run`], for functions with any return type;
    /// only a panic counts as failure.
    pub fn run_infallible<I, R>(&self, invoke: I) -> RunOutcome<R>
    where
        I: FnOnce(&F) -> R,
    {
        self.run_with(invoke, RunOutcome::Completed)
    }

    /// Calls the wrapped function; a failure is logged and results in `None`.
    pub fn call<I, R>(&self, invoke: I) -> Option<R::Value>
    where
        I: FnOnce(&F) -> R,
        R: Outcome,
    {
        self.run(invoke).completed()
    }

    /// Like [`TracedEntry::call`], for functions with any return type;
    /// a panic is logged and results in `None`.
    pub fn call_infallible<I, R>(&self, invoke: I) -> Option<R>
    where
        I: FnOnce(&F) -> R,
    {
        self.run_infallible(invoke).completed()
    }

    fn run_with<I, R, T, C>(&self, invoke: I, classify: C) -> RunOutcome<T>
    where
        I: FnOnce(&F) -> R,
        C: FnOnce(R) -> RunOutcome<T>,
    {
        let location = self.identity.location();
        self.logger.log_at(
            Severity::Debug,
            &location,
            format_args!("{BANNER} Starting of Logs {BANNER}"),
        );
        let _end = EndTrace {
            logger: &self.logger,
            location: &location,
            message: format!("{BANNER} Ending of Logs {BANNER}"),
        };

        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| invoke(&self.function))) {
            Ok(result) => classify(result),
            Err(payload) => RunOutcome::Failed(panic_detail(&*payload)),
        };

        if let RunOutcome::Failed(detail) = &outcome {
            let file_names = self
                .logger
                .file_paths()
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<String>>()
                .join(", ");
            self.logger.log_at(
                Severity::Critical,
                &location,
                format_args!("There's been an ERROR! Check your logs: {file_names}"),
            );
            self.logger
                .log_at(Severity::Debug, &location, format_args!("{detail}"));
        }
        outcome
    }

    /// Name and module of the wrapped function.
    #[must_use]
    pub fn identity(&self) -> &FnIdentity {
        &self.identity
    }

    /// The undecorated function.
    #[must_use]
    pub fn inner(&self) -> &F {
        &self.function
    }

    /// Returns the undecorated function.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F> fmt::Debug for TracedEntry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedEntry")
            .field("identity", &self.identity)
            .field("logger", &self.logger.name())
            .finish_non_exhaustive()
    }
}
