mod common;

use std::time::{SystemTime, UNIX_EPOCH};

use common::{SharedBuffer, line_regex};
use pidlog::{
    Error, Logger, Severity, log_bug_nopanic, log_entering, log_leaving, log_leaving_err,
    log_perror, log_perror_io, log_printf, log_unexpected,
};

fn lines(buffer: &SharedBuffer) -> Vec<String> {
    buffer.contents().lines().map(String::from).collect()
}

#[test]
fn round_trip_fixed_inputs() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    logger
        .printf_at("x.c", 42, "f", Severity::Info, format_args!("hello {}", 7))
        .unwrap();
    logger.close().unwrap();

    let output = buffer.contents();
    assert!(output.ends_with('\n'));
    assert_eq!(output.matches('\n').count(), 1);
    let line = output.trim_end_matches('\n');
    let captures = line_regex().captures(line).expect("line matches the grammar");

    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    let secs: u64 = captures[1].parse().unwrap();
    assert!(secs <= now && now - secs < 60);
    assert_eq!(captures[3].parse::<u32>().unwrap(), std::process::id());
    assert!(line.ends_with(": [INF] x.c:42: in f(): hello 7"));
}

#[test]
fn every_severity_has_its_tag() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    for severity in Severity::ALL {
        log_printf!(logger, severity, "level {}", severity.as_u8()).unwrap();
    }
    let expected = ["PAN", "ERR", "WRN", "INF", "TRC", "DBG"];
    let regex = line_regex();
    let lines = lines(&buffer);
    assert_eq!(lines.len(), expected.len());
    for (i, (line, tag)) in lines.iter().zip(expected).enumerate() {
        let captures = regex.captures(line).unwrap();
        assert_eq!(&captures[4], tag);
        assert_eq!(&captures[8], format!("level {i}"));
    }
}

#[test]
fn invalid_severity_writes_nothing() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    assert!(matches!(
        log_printf!(logger, 6u8, "never written"),
        Err(Error::InvalidLevel(6))
    ));
    assert!(matches!(
        log_printf!(logger, -1i32, "never written"),
        Err(Error::InvalidLevel(-1))
    ));
    log_printf!(logger, 3u8, "raw info").unwrap();
    let lines = lines(&buffer);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" [INF] ") && lines[0].ends_with("raw info"));
}

#[test]
fn macros_fill_in_location() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    let line = line!() + 1;
    log_printf!(logger, Severity::Warning, "disk {}% full", 93).unwrap();
    let lines = lines(&buffer);
    let captures = line_regex().captures(&lines[0]).unwrap();
    assert_eq!(&captures[5], file!());
    assert_eq!(captures[6].parse::<u32>().unwrap(), line);
    assert_eq!(&captures[7], "macros_fill_in_location");
    assert_eq!(&captures[8], "disk 93% full");
}

#[cfg(target_os = "linux")]
#[test]
fn perror_describes_the_error_code() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    log_perror!(logger, Severity::Error, "open(/etc/app.conf)", 2).unwrap();
    log_perror!(logger, Severity::Warning, "bind", 98).unwrap();
    let lines = lines(&buffer);
    assert!(lines[0].contains(" [ERR] "));
    assert!(lines[0].ends_with("in perror_describes_the_error_code(): open(/etc/app.conf): No such file or directory"));
    assert!(lines[1].ends_with("bind: Address already in use"));
}

#[test]
fn perror_rejects_invalid_severity() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    assert!(matches!(
        log_perror!(logger, 42u8, "read", 5),
        Err(Error::InvalidLevel(42))
    ));
    assert!(buffer.contents().is_empty());
}

fn traced(logger: &Logger, a: u32, b: &str) -> i32 {
    log_entering!(logger);
    log_entering!(logger, "{a}, {b:?}");
    log_leaving!(logger);
    log_leaving!(logger, "{}", a + 1);
    log_leaving_err!(logger, 0);
    log_leaving_err!(logger, -22);
    0
}

#[test]
fn tracing_macros() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    traced(&logger, 1, "two");
    let regex = line_regex();
    let lines = lines(&buffer);
    let messages: Vec<_> = lines
        .iter()
        .map(|line| {
            let captures = regex.captures(line).unwrap();
            assert_eq!(&captures[4], "DBG");
            assert_eq!(&captures[7], "traced");
            captures[8].to_string()
        })
        .collect();
    assert_eq!(messages[0], "entering traced()");
    assert_eq!(messages[1], "entering traced(1, \"two\")");
    assert_eq!(messages[2], "leaving traced()");
    assert_eq!(messages[3], "leaving traced() = 2");
    assert_eq!(messages[4], "leaving traced() = 0");
    assert_eq!(
        messages[5],
        format!("leaving traced() = -22 ({})", pidlog::error_description(22))
    );
}

#[test]
fn non_fatal_sugar() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    log_unexpected!(logger);
    log_bug_nopanic!(logger);
    let lines = lines(&buffer);
    assert!(lines[0].contains(" [ERR] ") && lines[0].ends_with("in non_fatal_sugar(): unexpected condition"));
    assert!(lines[1].contains(" [PAN] ") && lines[1].ends_with("*** oops, a bug! don't panic..."));
}

#[test]
fn function_name_inside_closure() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    let log_from_closure = || log_printf!(logger, Severity::Info, "from closure").unwrap();
    log_from_closure();
    assert!(lines(&buffer)[0].ends_with("in function_name_inside_closure(): from closure"));
}

#[cfg(target_os = "linux")]
#[test]
fn perror_io_uses_os_code_or_display() {
    let buffer = SharedBuffer::default();
    let logger = Logger::open(buffer.clone());
    let missing = std::fs::File::open("/nonexistent-pidlog/file").unwrap_err();
    log_perror_io!(logger, Severity::Error, "open", &missing).unwrap();
    let custom = std::io::Error::other("checksum mismatch");
    log_perror_io!(logger, Severity::Warning, "verify", &custom).unwrap();
    let lines = lines(&buffer);
    assert!(lines[0].ends_with("open: No such file or directory"));
    assert!(lines[1].ends_with("verify: checksum mismatch"));
}
