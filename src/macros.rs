/// Name of the enclosing function, e.g. `str_func`.
///
/// Within closures, the name of the function that defines the closure is returned.
#[macro_export]
macro_rules! fn_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::__function_from_type_name(__type_name_of(__here))
    }};
}

/// The [`Location`](crate::Location) of the macro call.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), module_path!(), $crate::fn_name!())
    };
}

/// Writes a line with the given severity to all sinks of the logger
/// whose minimum severity is met.
///
/// ```rust,ignore
/// twin_logger::log_at!(logger, Severity::Info, "{} files processed", count);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_at($severity, &$crate::location!(), format_args!($($arg)+))
    };
}

/// Writes a line with severity [`Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Writes a line with severity [`Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Writes a line with severity [`Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Writes a line with severity [`Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Writes a line with severity [`Critical`](crate::Severity::Critical).
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// The [`FnIdentity`](crate::FnIdentity) of a function, given by its path.
///
/// Name and module are those of the function's definition, no matter from where
/// it is wrapped; file and line are those of the macro call.
#[macro_export]
macro_rules! fn_identity {
    ($function:path) => {{
        let (module, qualname) =
            $crate::__module_and_name(::std::any::type_name_of_val(&$function));
        $crate::FnIdentity::new(qualname, module, file!(), line!())
    }};
}

/// Wraps a function with start, end and failure tracing; see [`Tracer`](crate::Tracer).
///
/// ```rust,ignore
/// let str_func = twin_logger::traced!(logger, str_func);
/// let answer = str_func.call(|f| f(Some("test")))?;
/// ```
#[macro_export]
macro_rules! traced {
    ($logger:expr, $function:path) => {
        $crate::traced(&$logger).wrap($crate::fn_identity!($function), $function)
    };
}

/// Wraps the entry point of a program; see [`EntryTracer`](crate::EntryTracer).
#[macro_export]
macro_rules! traced_entry {
    ($logger:expr, $function:path) => {
        $crate::traced_entry(&$logger).wrap($crate::fn_identity!($function), $function)
    };
}
