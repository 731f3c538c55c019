//! Demonstrates the logger and the call-tracing wrappers.
//!
//! The log lines go to `logs/<YYYY-MM-DD>_Template_Repo.log` next to the executable;
//! warnings and above also appear on stderr.
//! The program always exits with code 0, unless the logger itself cannot be created,
//! because the traced entry point suppresses failures after logging them.

use std::{io::Write, process::ExitCode};
use thiserror::Error;
use twin_logger::{create_logger, LoggerHandle, Severity, WriteMode};

#[derive(Debug, Error)]
enum DemoError {
    #[error("type mismatch: {0}")]
    TypeMismatch(&'static str),
}

fn str_func(logger: &LoggerHandle, input: Option<&str>) -> Result<String, DemoError> {
    let Some(input) = input else {
        twin_logger::error!(logger, "str_func called with None input.");
        return Err(DemoError::TypeMismatch("Input cannot be None"));
    };
    twin_logger::debug!(logger, "str_func called with input_str='{input}'");
    Ok(format!("You sent:  {input}"))
}

fn print_hi_to(logger: &LoggerHandle, out: &mut dyn Write) -> std::io::Result<()> {
    twin_logger::info!(logger, "print_hi called.");
    writeln!(out, "Hi")
}

fn print_hi(logger: &LoggerHandle) -> std::io::Result<()> {
    print_hi_to(logger, &mut std::io::stdout().lock())
}

fn run(logger: &LoggerHandle) -> Result<(), DemoError> {
    let print_hi = twin_logger::traced!(logger, print_hi);
    let str_func = twin_logger::traced!(logger, str_func);

    print_hi.call(|f| f(logger)).ok();
    str_func.call(|f| f(logger, Some("Hello, World!")))?;

    twin_logger::warning!(logger, "This is the end!");
    twin_logger::critical!(logger, "This is a critical message, but not an error.");
    twin_logger::error!(logger, "This is an error message, but not an exception.");
    Ok(())
}

fn main() -> ExitCode {
    // with rotation, Truncate appends nevertheless
    let logger = match create_logger(
        "Template_Repo",
        WriteMode::Truncate,
        Severity::Debug,
        Severity::Warning,
        None,
    ) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Logger initialization failed with {e}");
            return ExitCode::FAILURE;
        }
    };

    let run = twin_logger::traced_entry!(logger, run);
    run.call(|f| f(&logger));
    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::{print_hi, print_hi_to, run, str_func, DemoError};
    use twin_logger::{
        plain_format, traced_entry, writers::BufferSink, Logger, LoggerHandle, Severity,
    };

    fn test_logger(dir: &std::path::Path) -> (LoggerHandle, BufferSink) {
        let buffer = BufferSink::new(Severity::Debug, plain_format);
        let logger = Logger::new("Test_File_Test")
            .directory(dir)
            .add_sink(Box::new(buffer.clone()))
            .build()
            .unwrap();
        (logger, buffer)
    }

    #[test]
    fn test_print_hi() {
        let temp_dir = temp_dir::TempDir::new().unwrap();
        let (logger, _) = test_logger(temp_dir.path());
        let decorated_print_hi = twin_logger::traced!(logger, print_hi_to);
        let mut out = Vec::<u8>::new();
        decorated_print_hi.call(|f| f(&logger, &mut out)).unwrap();
        assert_eq!(out, b"Hi\n");
        // the stdout variant must not fail either
        print_hi(&logger).unwrap();
    }

    #[test]
    fn test_str_func_valid() {
        let temp_dir = temp_dir::TempDir::new().unwrap();
        let (logger, _) = test_logger(temp_dir.path());
        let decorated_str_func = twin_logger::traced!(logger, str_func);
        let resp = decorated_str_func.call(|f| f(&logger, Some("test")));
        assert_eq!(resp.unwrap(), "You sent:  test");
        assert_eq!(
            decorated_str_func.inner()(&logger, Some("x")).unwrap(),
            "You sent:  x"
        );
    }

    #[test]
    fn test_str_func_none() {
        let temp_dir = temp_dir::TempDir::new().unwrap();
        let (logger, buffer) = test_logger(temp_dir.path());
        let decorated_str_func = twin_logger::traced!(logger, str_func);
        let resp = decorated_str_func.call(|f| f(&logger, None));
        assert!(matches!(resp, Err(DemoError::TypeMismatch(_))));
        let lines = buffer.lines();
        assert!(lines.contains(&"ERROR str_func called with None input.".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("CRITICAL TypeMismatch(")));
    }

    #[test]
    fn test_run_writes_all_severities() {
        let temp_dir = temp_dir::TempDir::new().unwrap();
        let (logger, buffer) = test_logger(temp_dir.path());
        let traced_run = traced_entry(&logger).wrap(twin_logger::fn_identity!(run), run);
        assert_eq!(traced_run.call(|f| f(&logger)), Some(()));
        let lines = buffer.lines();
        assert_eq!(lines.first().unwrap(), "DEBUG === Starting of Logs ===");
        assert_eq!(lines.last().unwrap(), "DEBUG === Ending of Logs ===");
        assert!(lines.contains(&"WARNING This is the end!".to_string()));
        assert!(lines.contains(&"DEBUG Ending str_func from module:\ttemplate".to_string()));
        assert!(lines.contains(&"DEBUG Ending print_hi from module:\ttemplate".to_string()));
    }
}
