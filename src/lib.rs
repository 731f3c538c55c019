// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::needless_doctest_main)]
//! A small logger that writes to a size-rotated file and to the console,
//! plus wrappers that trace the calls of functions.
//!
//! Create a logger and use it with the logging macros:
//!
//! ```rust,ignore
//! use twin_logger::{create_logger, Severity, WriteMode};
//!
//! let logger = create_logger("my_app", WriteMode::Append, Severity::Debug, Severity::Warning, None)?;
//! twin_logger::info!(logger, "starting with {} workers", 4);
//! ```
//!
//! The logger writes all lines with at least the file severity to
//! `logs/<YYYY-MM-DD>_my_app.log` (the file rotates at 1 MiB and keeps five backups),
//! and all lines with at least the console severity to stderr.
//! File and console use different line formats, see [`file_format`] and [`console_format`].
//!
//! Loggers are registered by name: asking again for `my_app` returns the same handle with
//! the same sinks, no matter which parameters the later call uses.
//! The builder [`Logger`] offers further options.
//!
//! Functions can be wrapped so that each call writes trace lines:
//!
//! ```rust,ignore
//! let str_func = twin_logger::traced!(logger, str_func);
//! let answer = str_func.call(|f| f(Some("test")))?;
//!
//! let run = twin_logger::traced_entry!(logger, run);
//! run.call(|f| f(&logger));
//! ```
//!
//! See [`Traced`] and [`TracedEntry`] for what is written, and how failures are handled.

mod deferred_now;
mod file_spec;
mod formats;
mod logger;
mod logger_handle;
mod macros;
mod registry;
mod severity;
mod trace;
mod trace_event;
mod twin_logger_error;
mod util;
mod write_mode;

pub mod writers;

pub use crate::deferred_now::DeferredNow;
pub use crate::file_spec::{default_log_directory, FileSpec};
pub use crate::formats::*;
pub use crate::logger::{create_logger, Logger, SinkConfig};
pub use crate::logger_handle::LoggerHandle;
pub use crate::registry::LoggerRegistry;
pub use crate::severity::Severity;
pub use crate::trace::{
    traced, traced_entry, EntryTracer, FnIdentity, Outcome, RunOutcome, Traced, TracedEntry,
    Tracer,
};
pub use crate::trace_event::{Location, TraceEvent};
pub use crate::twin_logger_error::TwinLoggerError;
pub use crate::write_mode::{Rotation, WriteMode};

#[doc(hidden)]
pub use crate::trace_event::{__function_from_type_name, __module_and_name};
