
use twin_logger::{
    create_logger, writers::SinkKind, LoggerRegistry, Severity, TwinLoggerError, WriteMode,
};

#[test]
fn test_creates_nested_directory_and_dated_file() {
    let dir = test_utils::dir();
    let log_dir = dir.path().join("a").join("b").join("logs");
    let logger = create_logger(
        "nested",
        WriteMode::Append,
        Severity::Debug,
        Severity::Critical,
        Some(log_dir.as_path()),
    )
    .unwrap_or_else(|e| panic!("Logger initialization failed with {e}"));

    assert!(log_dir.is_dir());
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(
        logger.file_paths(),
        vec![log_dir.join(format!("{date}_nested.log"))]
    );

    twin_logger::info!(logger, "This is an info message");
    logger.flush();
    let content = std::fs::read_to_string(&logger.file_paths()[0]).unwrap();
    assert!(content.ends_with("INFO     This is an info message\n"));
    assert!(content.contains("test_create_logger.rs"));
    assert!(content.contains("test_creates_nested_directory_and_dated_file"));
}

#[test]
fn test_idempotent_per_name() {
    let dir = test_utils::dir();
    let first = create_logger(
        "idempotent",
        WriteMode::Append,
        Severity::Debug,
        Severity::Critical,
        Some(dir.path()),
    )
    .unwrap();
    // later parameters are ignored
    let second = create_logger(
        "idempotent",
        WriteMode::Truncate,
        Severity::Error,
        Severity::Debug,
        Some(dir.path()),
    )
    .unwrap();

    assert!(first.ptr_eq(&second));
    assert_eq!(second.sink_kinds(), vec![SinkKind::File, SinkKind::Console]);
    assert_eq!(second.config().file_severity(), Severity::Debug);
    assert_eq!(second.config().console_severity(), Severity::Critical);
    assert_eq!(second.config().write_mode(), WriteMode::Append);
    assert!(LoggerRegistry::global().get("idempotent").is_some());

    twin_logger::debug!(second, "only once");
    second.flush();
    let content = std::fs::read_to_string(&first.file_paths()[0]).unwrap();
    assert_eq!(content.matches("only once").count(), 1);
}

#[test]
fn test_different_names_are_independent() {
    let dir = test_utils::dir();
    let alpha = create_logger(
        "alpha",
        WriteMode::Append,
        Severity::Debug,
        Severity::Critical,
        Some(dir.path()),
    )
    .unwrap();
    let beta = create_logger(
        "beta",
        WriteMode::Append,
        Severity::Error,
        Severity::Critical,
        Some(dir.path()),
    )
    .unwrap();
    assert!(!alpha.ptr_eq(&beta));
    assert_ne!(alpha.file_paths(), beta.file_paths());

    twin_logger::info!(alpha, "alpha info");
    twin_logger::info!(beta, "beta info");
    alpha.flush();
    beta.flush();
    let alpha_content = std::fs::read_to_string(&alpha.file_paths()[0]).unwrap();
    let beta_content = std::fs::read_to_string(&beta.file_paths()[0]).unwrap();
    assert!(alpha_content.contains("alpha info"));
    assert!(!alpha_content.contains("beta info"));
    assert!(beta_content.is_empty());
}

#[test]
fn test_file_instead_of_directory() {
    let dir = test_utils::dir();
    let file = dir.path().join("not_a_dir");
    std::fs::write(&file, "x").unwrap();
    let result = create_logger(
        "bad_dir",
        WriteMode::Append,
        Severity::Debug,
        Severity::Warning,
        Some(file.as_path()),
    );
    assert!(matches!(result, Err(TwinLoggerError::BadDirectory(_))));
}

#[cfg(unix)]
#[test]
fn test_directory_cannot_be_created() {
    let dir = test_utils::dir();
    let file = dir.path().join("plain");
    std::fs::write(&file, "x").unwrap();
    // a folder below a plain file cannot exist
    let result = create_logger(
        "no_dir",
        WriteMode::Append,
        Severity::Debug,
        Severity::Warning,
        Some(file.join("logs").as_path()),
    );
    let err = result.unwrap_err();
    assert!(matches!(err, TwinLoggerError::CreateDirectory { .. }));
    assert!(err.io_kind().is_some());
}

#[test]
fn test_default_directory() {
    let logger = create_logger(
        "default_dir",
        WriteMode::Append,
        Severity::Debug,
        Severity::Critical,
        None,
    )
    .unwrap();
    let paths = logger.file_paths();
    let path = &paths[0];
    assert_eq!(
        path.parent().unwrap(),
        twin_logger::default_log_directory().as_path()
    );
}
