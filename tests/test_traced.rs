
use std::panic::{self, AssertUnwindSafe};
use test_utils::count_lines_with;

#[derive(Debug, PartialEq)]
enum ParseError {
    Empty,
}

fn parse_len(input: &str) -> Result<usize, ParseError> {
    if input.is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(input.len())
    }
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn add_checked(a: i32, b: i32) -> Result<i32, String> {
    Ok(add(a, b))
}

fn explode(_: u8) {
    panic!("boom");
}

fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

mod app {
    pub mod parsing {
        pub fn parse_len(input: &str) -> Result<usize, String> {
            Ok(input.len())
        }
    }
}

#[test]
fn test_success_passes_value_through() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_ok", dir.path());

    let traced_add = twin_logger::traced!(logger, add_checked);
    assert_eq!(traced_add.call(|f| f(2, 3)), Ok(5));

    assert_eq!(
        buffer.lines(),
        vec![
            "DEBUG Starting add_checked from module:\ttest_traced",
            "DEBUG Ending add_checked from module:\ttest_traced",
        ]
    );
}

#[test]
fn test_error_is_returned_unchanged() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_err", dir.path());

    let traced_parse = twin_logger::traced!(logger, parse_len);
    assert_eq!(traced_parse.call(|f| f("")), Err(ParseError::Empty));
    assert_eq!(traced_parse.call(|f| f("four")), Ok(4));

    let lines = buffer.lines();
    assert_eq!(count_lines_with(&lines, "Starting parse_len"), 2);
    assert_eq!(count_lines_with(&lines, "Ending parse_len"), 2);
    assert_eq!(count_lines_with(&lines, "CRITICAL"), 1);

    // the failure is reported before the call's closing line
    let critical = lines.iter().position(|l| l == "CRITICAL Empty").unwrap();
    let first_end = lines
        .iter()
        .position(|l| l.contains("Ending parse_len"))
        .unwrap();
    assert_eq!(critical + 1, first_end);
}

#[test]
fn test_panic_is_resumed_and_traced() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_panic", dir.path());

    let traced_explode = twin_logger::traced!(logger, explode);
    let result = panic::catch_unwind(AssertUnwindSafe(|| traced_explode.call(|f| f(1))));
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));

    assert_eq!(
        buffer.lines(),
        vec![
            "DEBUG Starting explode from module:\ttest_traced",
            "CRITICAL panic: boom",
            "DEBUG Ending explode from module:\ttest_traced",
        ]
    );
}

#[test]
fn test_unit_functions_and_nesting() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_nested", dir.path());

    let traced_add = twin_logger::traced!(logger, add_checked);
    let traced_outer = twin_logger::traced!(logger, test_unit_functions_and_nesting);
    traced_outer.call(|_| {
        traced_add.call(|f| f(1, 1)).unwrap();
    });

    let lines = buffer.lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Starting test_unit_functions_and_nesting"));
    assert!(lines[1].contains("Starting add_checked"));
    assert!(lines[2].contains("Ending add_checked"));
    assert!(lines[3].contains("Ending test_unit_functions_and_nesting"));
}

#[test]
fn test_accessors() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_access", dir.path());

    let traced_parse = twin_logger::traced!(logger, parse_len);
    assert_eq!(traced_parse.identity().qualname(), "parse_len");
    assert_eq!(traced_parse.identity().module(), "test_traced");
    assert!(traced_parse.identity().file().ends_with("test_traced.rs"));

    // the undecorated function writes nothing
    assert_eq!(traced_parse.inner()("abc"), Ok(3));
    assert!(buffer.lines().is_empty());
    assert_eq!(traced_parse.into_inner()(""), Err(ParseError::Empty));
    assert!(buffer.lines().is_empty());
}

#[test]
fn test_trace_lines_in_file_carry_function_name() {
    let dir = test_utils::dir();
    let (logger, _buffer) = test_utils::logger_with_buffer("traced_file", dir.path());

    let traced_parse = twin_logger::traced!(logger, parse_len);
    traced_parse.call(|f| f("")).unwrap_err();
    logger.flush();

    let paths = logger.file_paths();
    let content = std::fs::read_to_string(&paths[0]).unwrap();
    let critical = content
        .lines()
        .find(|l| l.contains("CRITICAL"))
        .unwrap();
    assert!(critical.contains("test_traced.rs"));
    assert!(critical.contains("parse_len"));
    assert!(critical.ends_with("Empty"));
}

#[test]
fn test_plain_return_values() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_plain", dir.path());

    let traced_add = twin_logger::traced!(logger, add);
    assert_eq!(traced_add.call_infallible(|f| f(2, 3)), 5);

    let traced_first_word = twin_logger::traced!(logger, first_word);
    assert_eq!(traced_first_word.call_infallible(|f| f("hello world")), Some("hello"));
    // `None` is a value like any other
    assert_eq!(traced_first_word.call_infallible(|f| f("   ")), None);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(count_lines_with(&lines, "CRITICAL"), 0);
    assert_eq!(lines[0], "DEBUG Starting add from module:\ttest_traced");
    assert_eq!(lines[1], "DEBUG Ending add from module:\ttest_traced");
    assert_eq!(count_lines_with(&lines, "Ending first_word"), 2);
}

#[test]
fn test_plain_return_value_with_panic() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_plain_panic", dir.path());

    let traced_explode = twin_logger::traced!(logger, explode);
    let result =
        panic::catch_unwind(AssertUnwindSafe(|| traced_explode.call_infallible(|f| f(2))));
    assert!(result.is_err());

    let lines = buffer.lines();
    assert_eq!(lines[1], "CRITICAL panic: boom");
    assert_eq!(count_lines_with(&lines, "Ending explode"), 1);
}

#[test]
fn test_identity_of_function_from_other_module() {
    let dir = test_utils::dir();
    let (logger, buffer) = test_utils::logger_with_buffer("traced_module", dir.path());

    let traced_parse = twin_logger::traced!(logger, app::parsing::parse_len);
    assert_eq!(traced_parse.identity().qualname(), "parse_len");
    assert_eq!(traced_parse.identity().module(), "test_traced::app::parsing");
    assert_eq!(traced_parse.call(|f| f("abc")), Ok(3));

    assert_eq!(
        buffer.lines(),
        vec![
            "DEBUG Starting parse_len from module:\ttest_traced::app::parsing",
            "DEBUG Ending parse_len from module:\ttest_traced::app::parsing",
        ]
    );
}
