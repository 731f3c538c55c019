use crate::{DeferredNow, TraceEvent};
#[cfg(feature = "colors")]
use crate::Severity;
#[cfg(feature = "colors")]
use nu_ansi_term::{Color, Style};
use std::io::Write;

/// Function type for format functions.
///
/// A format function writes a single log line, without the trailing line break.
/// You can use your own format function with
/// [`Logger::file_format`](crate::Logger::file_format) or
/// [`Logger::console_format`](crate::Logger::console_format).
pub type FormatFunction = fn(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    event: &TraceEvent,
) -> Result<(), std::io::Error>;

/// The default format for log files.
///
/// Produces log lines like
/// ```text
/// 2026-10-16 10:44:11 template.rs     str_func           DEBUG    str_func called with input_str='test'
/// ```
/// i.e. with timestamp, source file, function, padded severity and message.
///
/// # Errors
///
/// See `std::write`
pub fn file_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    event: &TraceEvent,
) -> Result<(), std::io::Error> {
    let location = event.location();
    write!(
        w,
        "{} {:<15} {:<18} {:<8} {}",
        now.format_log_timestamp(),
        location.file_name(),
        location.function(),
        event.severity(),
        event.args()
    )
}

/// The default format for the console.
///
/// Produces log lines like
/// ```text
/// Template_Repo line 42 WARNING  | This is the end!
/// ```
/// i.e. with logger name, line number, padded severity and message.
///
/// # Errors
///
/// See `std::write`
pub fn console_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    event: &TraceEvent,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{:<12} line {} {:<8} | {}",
        event.logger(),
        event.location().line(),
        event.severity(),
        event.args()
    )
}

/// A minimal format: severity and message.
///
/// Produces log lines like
/// ```text
/// ERROR str_func called with None input.
/// ```
///
/// # Errors
///
/// See `std::write`
pub fn plain_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    event: &TraceEvent,
) -> Result<(), std::io::Error> {
    write!(w, "{} {}", event.severity(), event.args())
}

/// Like [`console_format`], but colors severity and message.
///
/// The colors are fixed: critical in bold red, error in red, warning in yellow,
/// info unstyled, debug dimmed.
///
/// # Errors
///
/// See `std::write`
#[cfg(feature = "colors")]
#[cfg_attr(docsrs, doc(cfg(feature = "colors")))]
pub fn colored_console_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    event: &TraceEvent,
) -> Result<(), std::io::Error> {
    let style = style(event.severity());
    write!(
        w,
        "{:<12} line {} {} | {}",
        event.logger(),
        event.location().line(),
        style.paint(format!("{:<8}", event.severity())),
        style.paint(event.args().to_string())
    )
}

#[cfg(feature = "colors")]
fn style(severity: Severity) -> Style {
    match severity {
        Severity::Critical => Color::Red.bold(),
        Severity::Error => Color::Red.normal(),
        Severity::Warning => Color::Yellow.normal(),
        Severity::Info => Style::new(),
        Severity::Debug => Style::new().dimmed(),
    }
}
