use crate::Severity;
use std::{fmt, path::Path};

/// The source code location a log line originates from.
///
/// Usually produced with [`location!`](crate::location).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
    module_path: &'a str,
    function: &'a str,
}

impl<'a> Location<'a> {
    /// Constructor.
    #[must_use]
    pub fn new(file: &'a str, line: u32, module_path: &'a str, function: &'a str) -> Self {
        Self {
            file,
            line,
            module_path,
            function,
        }
    }

    /// The source file, as given by `file!()`.
    #[must_use]
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The last component of the source file path, e.g. `main.rs`.
    #[must_use]
    pub fn file_name(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    /// The line in the source file.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The module path, as given by `module_path!()`.
    #[must_use]
    pub fn module_path(&self) -> &'a str {
        self.module_path
    }

    /// The name of the enclosing function; can be empty.
    #[must_use]
    pub fn function(&self) -> &'a str {
        self.function
    }
}

/// A single log line, before it is formatted into the sinks.
///
/// Trace events are never stored; each sink formats them directly.
#[derive(Copy, Clone, Debug)]
pub struct TraceEvent<'a> {
    logger: &'a str,
    severity: Severity,
    location: &'a Location<'a>,
    args: fmt::Arguments<'a>,
}

impl<'a> TraceEvent<'a> {
    /// Constructor.
    #[must_use]
    pub fn new(
        logger: &'a str,
        severity: Severity,
        location: &'a Location<'a>,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            logger,
            severity,
            location,
            args,
        }
    }

    /// Name of the logger that emitted the event.
    #[must_use]
    pub fn logger(&self) -> &'a str {
        self.logger
    }

    /// The severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Where the event comes from.
    #[must_use]
    pub fn location(&self) -> &'a Location<'a> {
        self.location
    }

    /// The message.
    #[must_use]
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }
}

/// Turns `my_crate::module::my_fn::__here` into `my_fn`,
/// skipping the `{{closure}}` segments that closures add.
#[doc(hidden)]
#[must_use]
pub fn __function_from_type_name(type_name: &'static str) -> &'static str {
    let path = type_name.strip_suffix("::__here").unwrap_or(type_name);
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or(path)
}

/// Splits the type name of a function item, e.g. `my_crate::parsing::parse_len`,
/// into its module path and its name, ignoring generic arguments.
#[doc(hidden)]
#[must_use]
pub fn __module_and_name(type_name: &'static str) -> (&'static str, &'static str) {
    let path = strip_generic_args(type_name);
    let bytes = path.as_bytes();
    let mut depth = 0_usize;
    for index in (1..bytes.len()).rev() {
        match bytes[index] {
            b'>' => depth += 1,
            b'<' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes[index - 1] == b':' => {
                return (&path[..index - 1], &path[index + 1..]);
            }
            _ => {}
        }
    }
    ("", path)
}

fn strip_generic_args(path: &str) -> &str {
    if !path.ends_with('>') {
        return path;
    }
    let mut depth = 0_usize;
    for (index, c) in path.char_indices().rev() {
        match c {
            '>' => depth += 1,
            '<' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &path[..index];
                }
            }
            _ => {}
        }
    }
    path
}
