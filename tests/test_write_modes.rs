
use twin_logger::{plain_format, Logger, LoggerHandle, Rotation, Severity, WriteMode};

fn write_once(
    dir: &std::path::Path,
    write_mode: WriteMode,
    rotation: Rotation,
    text: &str,
) -> LoggerHandle {
    let logger = Logger::new("modes")
        .directory(dir)
        .write_mode(write_mode)
        .rotate(rotation)
        .console_severity(Severity::Critical)
        .file_format(plain_format)
        .build()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));
    twin_logger::info!(logger, "{text}");
    logger.flush();
    logger
}

fn content(logger: &LoggerHandle) -> String {
    std::fs::read_to_string(&logger.file_paths()[0]).unwrap()
}

#[test]
fn test_append() {
    let dir = test_utils::dir();
    write_once(dir.path(), WriteMode::Append, Rotation::default(), "first");
    let logger = write_once(dir.path(), WriteMode::Append, Rotation::default(), "second");
    assert_eq!(content(&logger), "INFO first\nINFO second\n");
}

#[test]
fn test_truncate_appends_with_rotation() {
    let dir = test_utils::dir();
    write_once(dir.path(), WriteMode::Truncate, Rotation::default(), "first");
    let logger = write_once(dir.path(), WriteMode::Truncate, Rotation::default(), "second");
    assert_eq!(content(&logger), "INFO first\nINFO second\n");
}

#[test]
fn test_truncate_without_rotation() {
    let dir = test_utils::dir();
    write_once(dir.path(), WriteMode::Truncate, Rotation::disabled(), "first");
    let logger = write_once(dir.path(), WriteMode::Truncate, Rotation::disabled(), "second");
    assert_eq!(content(&logger), "INFO second\n");
}

#[test]
fn test_appending_counts_existing_size() {
    let dir = test_utils::dir();
    // "INFO " + 20 + "\n" = 26 bytes per line
    let line = "a".repeat(20);
    write_once(dir.path(), WriteMode::Append, Rotation::new(55, 1), &line);
    write_once(dir.path(), WriteMode::Append, Rotation::new(55, 1), &line);
    // 52 bytes exist already, so this line starts a new file
    let logger = write_once(dir.path(), WriteMode::Append, Rotation::new(55, 1), "b");
    assert_eq!(content(&logger), "INFO b\n");
    assert_eq!(test_utils::log_files(dir.path()).len(), 2);
}

#[test]
fn test_no_backups_never_rotates() {
    let dir = test_utils::dir();
    let line = "a".repeat(20);
    for _ in 0..3 {
        write_once(dir.path(), WriteMode::Truncate, Rotation::new(55, 0), &line);
    }
    let logger = write_once(dir.path(), WriteMode::Truncate, Rotation::new(55, 0), "b");
    // beyond the threshold, but nothing is lost, and Truncate still appends
    assert_eq!(content(&logger).lines().count(), 4);
    assert!(content(&logger).ends_with("INFO b\n"));
    assert_eq!(test_utils::log_files(dir.path()).len(), 1);
}
