/// Describes how an already existing log file is treated when the logger is created.
///
/// **Note** that with a size threshold (the default, see [`Rotation`](crate::Rotation)),
/// `Truncate` behaves like `Append`: the file sink always appends within the lifetime
/// of a file, and new files are only started by a rotation.
/// Only with `max_bytes == 0`, e.g. with [`Rotation::disabled`](crate::Rotation::disabled),
/// is an existing file really truncated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum WriteMode {
    /// Continue an existing log file (default).
    #[default]
    Append,

    /// Start with an empty log file, unless rotation is active.
    Truncate,
}

impl WriteMode {
    /// The mode that is really used, given whether a size threshold is set.
    #[must_use]
    pub fn effective(self, size_limited: bool) -> WriteMode {
        if size_limited {
            WriteMode::Append
        } else {
            self
        }
    }
}

/// Size threshold and number of kept backups for the file sink.
///
/// When writing the next line would let the active file reach `max_bytes`,
/// the file is renamed to `<path>.1` (older backups move one number up,
/// the oldest beyond `backup_count` is removed), and a fresh file is started.
///
/// Rotation needs both values to be positive. With `backup_count == 0` the file grows
/// without limits, but [`WriteMode::Truncate`] still appends as long as `max_bytes > 0`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rotation {
    /// Size threshold in bytes; `0` switches rotation off.
    pub max_bytes: u64,
    /// Maximal number of kept backups; `0` switches rotation off.
    pub backup_count: u32,
}

impl Rotation {
    /// Default threshold: 1 MiB.
    pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
    /// Default number of backups.
    pub const DEFAULT_BACKUP_COUNT: u32 = 5;

    /// Rotation with the given parameters.
    #[must_use]
    pub fn new(max_bytes: u64, backup_count: u32) -> Self {
        Self {
            max_bytes,
            backup_count,
        }
    }

    /// The log file grows without limits.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    /// Whether rotation is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.max_bytes > 0 && self.backup_count > 0
    }

    /// Whether a size threshold is set, which lets [`WriteMode::Truncate`] append.
    #[must_use]
    pub fn is_size_limited(&self) -> bool {
        self.max_bytes > 0
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BYTES, Self::DEFAULT_BACKUP_COUNT)
    }
}
