use std::{fmt, io};

use chrono::{DateTime, Utc};

use crate::severity::Severity;

/// Where a line was logged from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Location<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

/// Builds one complete log line, newline included.
///
/// `<sec>.<usec>: <pid>: [TAG] <file>:<line>: in <function>(): <message>\n`
pub(crate) fn format_line(
    time: DateTime<Utc>,
    pid: u32,
    level: Severity,
    location: Location<'_>,
    message: fmt::Arguments<'_>,
) -> String {
    let Location {
        file,
        line,
        function,
    } = location;
    // leap seconds report up to 1_999_999
    let micros = time.timestamp_subsec_micros().min(999_999);
    format!(
        "{}.{micros:06}: {pid:05}: {} {file}:{line}: in {function}(): {message}\n",
        time.timestamp(),
        level.tag(),
    )
}

/// Human readable description of an OS error code.
pub fn error_description(code: i32) -> String {
    let description = io::Error::from_raw_os_error(code).to_string();
    match description.strip_suffix(&format!(" (os error {code})")) {
        Some(stripped) => stripped.to_owned(),
        None => description,
    }
}
