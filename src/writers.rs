//! Contains the [`LogSink`] trait and the sinks that `twin_logger` provides.
//!
//! A [`LoggerHandle`](crate::LoggerHandle) created with
//! [`create_logger`](crate::create_logger) owns a [`RotatingFileSink`] and a
//! [`ConsoleSink`]. Further sinks, e.g. a [`BufferSink`] that collects the lines in memory,
//! can be added with [`Logger::add_sink`](crate::Logger::add_sink).
//!
//! You can also implement [`LogSink`] yourself:
//!
//! ```rust,ignore
//! use twin_logger::{writers::LogSink, DeferredNow, Severity, TraceEvent};
//!
//! struct AlarmSink;
//! impl LogSink for AlarmSink {
//!     fn write(&self, _now: &mut DeferredNow, event: &TraceEvent) -> std::io::Result<()> {
//!         ring_the_bell(&event.args().to_string());
//!         Ok(())
//!     }
//!     fn flush(&self) -> std::io::Result<()> {
//!         Ok(())
//!     }
//!     fn min_severity(&self) -> Severity {
//!         Severity::Critical
//!     }
//! }
//! ```

mod buffer_sink;
mod console_sink;
mod log_sink;
mod rotating_file_sink;

pub use self::buffer_sink::BufferSink;
pub use self::console_sink::{ConsoleSink, ConsoleTarget};
pub use self::log_sink::{LogSink, SinkKind};
pub use self::rotating_file_sink::RotatingFileSink;
