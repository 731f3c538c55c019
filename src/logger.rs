use crate::{
    formats::{console_format, file_format},
    writers::{ConsoleSink, ConsoleTarget, LogSink, RotatingFileSink},
    FileSpec, FormatFunction, LoggerHandle, LoggerRegistry, Rotation, Severity, TwinLoggerError,
    WriteMode,
};
use std::path::{Path, PathBuf};

/// The immutable configuration of a logger.
///
/// Is assembled by [`Logger`] and can be read from a running logger with
/// [`LoggerHandle::config`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SinkConfig {
    name: String,
    write_mode: WriteMode,
    file_severity: Severity,
    console_severity: Severity,
    directory: PathBuf,
    rotation: Rotation,
}

impl SinkConfig {
    /// The logical name; part of the log file name, and the registry key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// How an existing log file is treated.
    #[must_use]
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }
    /// Minimum severity of the lines in the log file.
    #[must_use]
    pub fn file_severity(&self) -> Severity {
        self.file_severity
    }
    /// Minimum severity of the lines on the console.
    #[must_use]
    pub fn console_severity(&self) -> Severity {
        self.console_severity
    }
    /// The folder of the log file.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
    /// The rotation parameters of the log file.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

/// The entry-point for creating a logger.
///
/// `Logger` is a builder; it collects the configuration and creates a [`LoggerHandle`]
/// with one of its finishing methods:
///
/// * [`Logger::start`] registers the logger in the process-wide [`LoggerRegistry`],
///   so that later calls with the same name get the same handle,
/// * [`Logger::start_in`] does the same with an explicitly given registry,
/// * [`Logger::build`] creates a handle that is not registered at all.
///
/// The handle writes to a rotating log file (see [`FileSpec`] for its name and [`Rotation`]
/// for the size limits) and to the console; both outputs have their own minimum severity
/// and their own line format.
///
/// ```rust,ignore
/// use twin_logger::{Logger, Severity, WriteMode};
///
/// let logger = Logger::new("Template_Repo")
///     .write_mode(WriteMode::Truncate)
///     .file_severity(Severity::Debug)
///     .console_severity(Severity::Warning)
///     .directory("logs")
///     .start()?;
/// twin_logger::warning!(logger, "This is the end!");
/// ```
pub struct Logger {
    config: SinkConfig,
    file_format: FormatFunction,
    console_format: FormatFunction,
    console_target: ConsoleTarget,
    additional_sinks: Vec<Box<dyn LogSink>>,
}

impl Logger {
    /// Default minimum severity for the log file.
    pub const DEFAULT_FILE_SEVERITY: Severity = Severity::Debug;
    /// Default minimum severity for the console.
    pub const DEFAULT_CONSOLE_SEVERITY: Severity = Severity::Warning;

    /// Starts the configuration of a logger with the given logical name.
    ///
    /// Defaults: [`WriteMode::Append`], all lines into the file, warnings and above
    /// to stderr, the folder [`default_log_directory`](crate::default_log_directory),
    /// and [`Rotation::default`].
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            config: SinkConfig {
                name: name.into(),
                write_mode: WriteMode::default(),
                file_severity: Self::DEFAULT_FILE_SEVERITY,
                console_severity: Self::DEFAULT_CONSOLE_SEVERITY,
                directory: crate::default_log_directory(),
                rotation: Rotation::default(),
            },
            file_format,
            console_format,
            console_target: ConsoleTarget::default(),
            additional_sinks: Vec::new(),
        }
    }

    /// Specifies how an existing log file is treated; see [`WriteMode`].
    #[must_use]
    pub fn write_mode(mut self, write_mode: WriteMode) -> Self {
        self.config.write_mode = write_mode;
        self
    }

    /// Minimum severity of the lines that are written to the log file.
    #[must_use]
    pub fn file_severity(mut self, severity: Severity) -> Self {
        self.config.file_severity = severity;
        self
    }

    /// Minimum severity of the lines that are written to the console.
    #[must_use]
    pub fn console_severity(mut self, severity: Severity) -> Self {
        self.config.console_severity = severity;
        self
    }

    /// Specifies the folder for the log file.
    ///
    /// If the folder does not exist, it is created, including missing parents.
    #[must_use]
    pub fn directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.config.directory = directory.into();
        self
    }

    /// Specifies the folder for the log file,
    /// or [`default_log_directory`](crate::default_log_directory) with `None`.
    #[must_use]
    pub fn o_directory<P: Into<PathBuf>>(mut self, directory: Option<P>) -> Self {
        self.config.directory = directory.map_or_else(crate::default_log_directory, Into::into);
        self
    }

    /// Specifies the size limits of the log file.
    #[must_use]
    pub fn rotate(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Uses the given format function for the log file, rather than
    /// [`file_format`](crate::file_format).
    #[must_use]
    pub fn file_format(mut self, format: FormatFunction) -> Self {
        self.file_format = format;
        self
    }

    /// Uses the given format function for the console, rather than
    /// [`console_format`](crate::console_format).
    #[must_use]
    pub fn console_format(mut self, format: FormatFunction) -> Self {
        self.console_format = format;
        self
    }

    /// Chooses the stream for the console output, stderr by default.
    #[must_use]
    pub fn console_target(mut self, target: ConsoleTarget) -> Self {
        self.console_target = target;
        self
    }

    /// Attaches an additional sink, besides the log file and the console.
    #[must_use]
    pub fn add_sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.additional_sinks.push(sink);
        self
    }

    /// The configuration collected so far.
    #[must_use]
    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// Creates the sinks and returns a handle that is not registered anywhere.
    ///
    /// # Errors
    ///
    /// `TwinLoggerError::CreateDirectory` or `TwinLoggerError::BadDirectory` if the log
    /// folder is not usable, `TwinLoggerError::OpenFile` if the log file cannot be opened.
    pub fn build(self) -> Result<LoggerHandle, TwinLoggerError> {
        let file_spec = FileSpec::default()
            .directory(self.config.directory.clone())
            .basename(self.config.name.clone());
        let file_sink = RotatingFileSink::try_new(
            &file_spec,
            self.config.write_mode,
            self.config.rotation,
            self.config.file_severity,
            self.file_format,
        )?;
        let console_sink = ConsoleSink::new(
            self.console_target,
            self.config.console_severity,
            self.console_format,
        );

        let mut sinks: Vec<Box<dyn LogSink>> = Vec::with_capacity(2 + self.additional_sinks.len());
        sinks.push(Box::new(file_sink));
        sinks.push(Box::new(console_sink));
        sinks.extend(self.additional_sinks);

        Ok(LoggerHandle::new(self.config, sinks))
    }

    /// Returns the handle that is registered in the process-wide registry under this
    /// logger's name, and creates and registers it if there is none yet.
    ///
    /// **Note** that if a handle with this name exists already,
    /// the configuration of this `Logger` is ignored.
    ///
    /// # Errors
    ///
    /// See [`Logger::build`]; `TwinLoggerError::Poison` if the registry is poisoned.
    pub fn start(self) -> Result<LoggerHandle, TwinLoggerError> {
        LoggerRegistry::global().get_or_create(self)
    }

    /// Like [`Logger::start`], with the given registry.
    ///
    /// # Errors
    ///
    /// See [`Logger::start`].
    pub fn start_in(self, registry: &LoggerRegistry) -> Result<LoggerHandle, TwinLoggerError> {
        registry.get_or_create(self)
    }
}

/// Creates a logger that writes to a rotating file and to stderr,
/// or returns the existing one with the same name.
///
/// The log file is `<directory>/<YYYY-MM-DD>_<name>.log`;
/// with `None` as directory, [`default_log_directory`](crate::default_log_directory) is used.
/// Missing folders are created.
///
/// The file keeps at most 1 MiB and 5 backups. Because of the rotation,
/// [`WriteMode::Truncate`] behaves like [`WriteMode::Append`].
///
/// Loggers are registered by name in the process-wide [`LoggerRegistry`]:
/// calling `create_logger` again with the same name returns the first handle,
/// and the other parameters of the later call have no effect.
///
/// # Errors
///
/// See [`Logger::start`].
pub fn create_logger<S: Into<String>>(
    name: S,
    write_mode: WriteMode,
    file_severity: Severity,
    console_severity: Severity,
    directory: Option<&Path>,
) -> Result<LoggerHandle, TwinLoggerError> {
    Logger::new(name)
        .write_mode(write_mode)
        .file_severity(file_severity)
        .console_severity(console_severity)
        .o_directory(directory)
        .start()
}
