use crate::{
    file_spec::backup_path,
    util::{eprint_err, io_err, with_formatted, ErrorCode},
    writers::{LogSink, SinkKind},
    DeferredNow, FileSpec, FormatFunction, Rotation, Severity, TraceEvent, TwinLoggerError,
    WriteMode,
};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

/// Writes the log lines into a file whose size is bounded by rotation.
///
/// Before a line is written that would let the file reach
/// [`Rotation::max_bytes`], the file is renamed to `<path>.1`, older backups move
/// one number up (`.1` to `.2`, and so on), the backup beyond
/// [`Rotation::backup_count`] is dropped, and a fresh file is started.
///
/// So a file exceeds the threshold only if a single line is bigger than the threshold.
///
/// Every line is written directly to the file, without buffering.
pub struct RotatingFileSink {
    format: FormatFunction,
    min_severity: Severity,
    path: PathBuf,
    rotation: Rotation,
    state: Mutex<State>,
}

struct State {
    o_file: Option<File>,
    current_size: u64,
}

impl RotatingFileSink {
    /// Creates the log directory, if necessary, and opens the log file.
    ///
    /// With a size threshold, [`WriteMode::Truncate`] is treated as [`WriteMode::Append`].
    ///
    /// # Errors
    ///
    /// `TwinLoggerError::CreateDirectory`, `TwinLoggerError::BadDirectory`,
    /// or `TwinLoggerError::OpenFile`.
    pub fn try_new(
        file_spec: &FileSpec,
        write_mode: WriteMode,
        rotation: Rotation,
        min_severity: Severity,
        format: FormatFunction,
    ) -> Result<Self, TwinLoggerError> {
        file_spec.ensure_directory()?;
        let path = file_spec.as_pathbuf();
        let write_mode = write_mode.effective(rotation.is_size_limited());
        let (file, current_size) = open_file(&path, write_mode)
            .map_err(|source| TwinLoggerError::OpenFile {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            format,
            min_severity,
            path,
            rotation,
            state: Mutex::new(State {
                o_file: Some(file),
                current_size,
            }),
        })
    }

    /// The path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rotation parameters.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn lock_state(&self) -> std::io::Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| io_err("RotatingFileSink is poisoned"))
    }

    fn rotation_necessary(&self, current_size: u64, additional: usize) -> bool {
        self.rotation.is_active()
            && current_size > 0
            && current_size + additional as u64 >= self.rotation.max_bytes
    }

    fn rotate(&self, state: &mut State) -> std::io::Result<()> {
        // some platforms refuse to rename open files
        state.o_file = None;

        let shifted = self.shift_backups();

        let (file, current_size) = open_file(&self.path, WriteMode::Append)?;
        state.o_file = Some(file);
        state.current_size = current_size;
        shifted
    }

    fn shift_backups(&self) -> std::io::Result<()> {
        let count = self.rotation.backup_count;
        for index in (1..count).rev() {
            let source = backup_path(&self.path, index);
            if source.exists() {
                let target = backup_path(&self.path, index + 1);
                remove_if_exists(&target)?;
                std::fs::rename(&source, &target)?;
            }
        }
        let first = backup_path(&self.path, 1);
        remove_if_exists(&first)?;
        if self.path.exists() {
            std::fs::rename(&self.path, &first)?;
        }
        Ok(())
    }
}

impl LogSink for RotatingFileSink {
    fn write(&self, now: &mut DeferredNow, event: &TraceEvent) -> std::io::Result<()> {
        with_formatted(self.format, now, event, |bytes| {
            let mut state = self.lock_state()?;
            if self.rotation_necessary(state.current_size, bytes.len()) {
                // a failed rotation must not lose the line, we continue in whatever file is open
                if let Err(e) = self.rotate(&mut state) {
                    eprint_err(ErrorCode::Rotate, "rotating the log file failed", &e);
                }
            }
            let file = state
                .o_file
                .as_mut()
                .ok_or_else(|| io_err("log file is not open"))?;
            file.write_all(bytes)?;
            state.current_size += bytes.len() as u64;
            Ok(())
        })
    }

    fn flush(&self) -> std::io::Result<()> {
        let mut state = self.lock_state()?;
        match state.o_file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    fn min_severity(&self) -> Severity {
        self.min_severity
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn file_path(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

fn open_file(path: &Path, write_mode: WriteMode) -> std::io::Result<(File, u64)> {
    let mut options = OpenOptions::new();
    options.create(true);
    match write_mode {
        WriteMode::Append => options.append(true),
        WriteMode::Truncate => options.write(true).truncate(true),
    };
    let file = options.open(path)?;
    let size = file.metadata()?.len();
    Ok((file, size))
}

fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}
