use crate::{DeferredNow, FormatFunction, TraceEvent};
use std::{cell::RefCell, io::Write};

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
    Format,
    Rotate,
}
impl ErrorCode {
    fn as_index(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Flush => "flush",
            Self::Format => "format",
            Self::Rotate => "rotate",
        }
    }
}

// Problems of the logger itself cannot be logged, so they go to stderr.
pub(crate) fn eprint_err(error_code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    eprintln!(
        "[twin_logger][ERRCODE::{code:?}] {msg}, caused by {err:?} (code: {index})",
        code = error_code,
        index = error_code.as_index(),
    );
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Thread-local buffer
fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Formats the event, including the trailing line break,
// and hands the bytes to the given consumer.
pub(crate) fn with_formatted<F>(
    format_function: FormatFunction,
    now: &mut DeferredNow,
    event: &TraceEvent,
    consume: F,
) -> std::io::Result<()>
where
    F: FnOnce(&[u8]) -> std::io::Result<()>,
{
    let mut consume = Some(consume);
    let mut result: std::io::Result<()> = Ok(());

    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            format_into(format_function, now, event, &mut *buffer);
            if let Some(consume) = consume.take() {
                result = consume(&*buffer);
            }
            buffer.clear();
        }
        Err(_e) => {
            // We arrive here in the rare cases of recursive logging
            // (e.g. log calls in Debug or Display implementations)
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            format_into(format_function, now, event, &mut tmp_buf);
            if let Some(consume) = consume.take() {
                result = consume(&tmp_buf);
            }
        }
    });
    result
}

fn format_into(
    format_function: FormatFunction,
    now: &mut DeferredNow,
    event: &TraceEvent,
    buffer: &mut Vec<u8>,
) {
    (format_function)(buffer, now, event)
        .unwrap_or_else(|e| eprint_err(ErrorCode::Format, "formatting failed", &e));
    buffer
        .write_all(b"\n")
        .unwrap_or_else(|e| eprint_err(ErrorCode::Format, "formatting failed", &e));
}
