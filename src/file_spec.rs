use crate::{DeferredNow, TwinLoggerError};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Builder object for specifying the name and path of the log file.
///
/// The file name is built from the current date and a basename:
///
/// ```<directory>/<YYYY-MM-DD>_<basename>.<suffix>```
///
/// e.g. `logs/2026-10-16_Template_Repo.log`.
/// Since the date is part of the name, all loggers that are created on the same day
/// with the same basename write into the same file.
///
/// Rotated backups get a numeric extension on top, e.g. `2026-10-16_Template_Repo.log.1`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileSpec {
    pub(crate) directory: PathBuf,
    pub(crate) basename: String,
    pub(crate) o_suffix: Option<String>,
    date: String,
}
impl Default for FileSpec {
    /// Describes a file in [`default_log_directory`],
    /// using the program name as basename, today's date, and the suffix "log".
    fn default() -> Self {
        FileSpec {
            directory: default_log_directory(),
            basename: Self::default_basename(),
            o_suffix: Some(String::from("log")),
            date: DeferredNow::new().format_date(),
        }
    }
}
impl FileSpec {
    fn default_basename() -> String {
        let arg0 = std::env::args().next().unwrap_or_else(|| "rs".to_owned());
        Path::new(&arg0)
            .file_stem()
            .map_or_else(|| "rs".to_owned(), |stem| stem.to_string_lossy().to_string())
    }

    /// The specified String is used as the basename of the log file,
    /// instead of the program name.
    /// Using a file separator within the argument is discouraged.
    #[must_use]
    pub fn basename<S: Into<String>>(mut self, basename: S) -> Self {
        self.basename = basename.into();
        self
    }

    /// Specifies a folder for the log files.
    ///
    /// If the specified folder does not exist, it will be created.
    #[must_use]
    pub fn directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    /// Specifies a folder for the log files, or [`default_log_directory`] with `None`.
    #[must_use]
    pub fn o_directory<P: Into<PathBuf>>(mut self, directory: Option<P>) -> Self {
        self.directory = directory.map_or_else(default_log_directory, Into::into);
        self
    }

    /// Specifies a suffix for the log files. The default suffix is "log".
    #[must_use]
    pub fn suffix<S: Into<String>>(self, suffix: S) -> Self {
        self.o_suffix(Some(suffix))
    }

    /// Specifies a suffix for the log files, or suppresses the use of a suffix completely.
    #[must_use]
    pub fn o_suffix<S: Into<String>>(mut self, o_suffix: Option<S>) -> Self {
        self.o_suffix = o_suffix.map(Into::into);
        self
    }

    /// Uses the given date (`YYYY-MM-DD`) rather than today's date.
    #[must_use]
    pub fn date<S: Into<String>>(mut self, date: S) -> Self {
        self.date = date.into();
        self
    }

    /// The folder of the log files.
    #[must_use]
    pub fn get_directory(&self) -> &Path {
        &self.directory
    }

    /// The path of the active log file.
    #[must_use]
    pub fn as_pathbuf(&self) -> PathBuf {
        let mut filename = self.date.clone();
        if !self.basename.is_empty() {
            filename.push('_');
            filename.push_str(&self.basename);
        }
        if let Some(suffix) = &self.o_suffix {
            filename.push('.');
            filename.push_str(suffix);
        }
        self.directory.join(filename)
    }

    /// The path of the backup with the given number (starting with 1).
    #[must_use]
    pub fn backup_path(&self, index: u32) -> PathBuf {
        backup_path(&self.as_pathbuf(), index)
    }

    // Creates the directory, including missing parents.
    pub(crate) fn ensure_directory(&self) -> Result<(), TwinLoggerError> {
        if self.directory.exists() {
            if self.directory.is_dir() {
                Ok(())
            } else {
                Err(TwinLoggerError::BadDirectory(self.directory.clone()))
            }
        } else {
            std::fs::create_dir_all(&self.directory).map_err(|source| {
                TwinLoggerError::CreateDirectory {
                    path: self.directory.clone(),
                    source,
                }
            })
        }
    }
}

pub(crate) fn backup_path(path: &Path, index: u32) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// The folder `logs` next to the running executable, or `./logs` if that cannot be determined.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("logs")))
        .unwrap_or_else(|| Path::new(".").join(OsStr::new("logs")))
}
