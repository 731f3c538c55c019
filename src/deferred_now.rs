use chrono::{DateTime, Local};

/// Deferred timestamp creation.
///
/// Is used to ensure that a log line that is sent to multiple sinks
/// (in maybe different formats) always uses the same timestamp.
#[derive(Debug, Default)]
pub struct DeferredNow(Option<DateTime<Local>>);

impl<'a> DeferredNow {
    /// Constructs a new instance, but does not generate the timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the timestamp.
    pub fn now(&'a mut self) -> &'a DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    /// Convert into a formatted String.
    ///
    /// `fmt` uses the syntax of [`chrono::format::strftime`].
    pub fn format(&'a mut self, fmt: &str) -> String {
        self.now().format(fmt).to_string()
    }

    /// The timestamp in the format that is used in log lines, e.g. `2026-10-16 14:03:55`.
    pub fn format_log_timestamp(&'a mut self) -> String {
        self.format(TIMESTAMP_FORMAT)
    }

    /// The date part of the timestamp, e.g. `2026-10-16`.
    pub fn format_date(&'a mut self) -> String {
        self.format(DATE_FORMAT)
    }
}

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[cfg(test)]
mod test {
    #[test]
    fn test_deferred_now() {
        let mut deferred_now = super::DeferredNow::new();
        let now = deferred_now.now().to_string();
        println!("This should be the current timestamp: {now}");
        std::thread::sleep(std::time::Duration::from_millis(300));
        let again = deferred_now.now().to_string();
        println!("This must be the same timestamp:      {again}");
        assert_eq!(now, again);
    }

    #[test]
    fn test_formats() {
        let mut deferred_now = super::DeferredNow::new();
        let date = deferred_now.format_date();
        let timestamp = deferred_now.format_log_timestamp();
        assert_eq!(date.len(), 10);
        assert_eq!(timestamp.len(), 19);
        assert!(timestamp.starts_with(&date));
    }
}
