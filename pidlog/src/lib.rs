//! # pidlog
//! Thread-safe, pid-stamped line logger with an abort path for unrecoverable errors.
//!
//! Every line looks like
//! ```text
//! 1700000000.123456: 04242: [INF] src/main.rs:12: in main(): hello 7
//! ```
//! and is written in one piece while the logger's lock is held, so lines from
//! concurrent threads never mix.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! pidlog = "0.1.0"
//! ```
//!
//! ```rust
//! use pidlog::{Logger, Severity, log_printf};
//!
//! let logger = Logger::stderr();
//! log_printf!(logger, Severity::Info, "hello {}", 7).unwrap();
//! logger.close().unwrap();
//! ```
//!
//! ## Multi-threaded logging
//! ```rust
//! use std::sync::Arc;
//! use pidlog::{Logger, Severity, log_printf};
//!
//! let logger = Arc::new(Logger::stderr());
//! let handles: Vec<_> = (0..5).map(|i| {
//!     let logger = logger.clone();
//!     std::thread::spawn(move || {
//!         log_printf!(logger, Severity::Warning, "Hello, world from thread {i}!").unwrap();
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Logging to files
//! The log file is created if it does not exist. Owned sinks are closed by
//! [`Logger::close`]; stderr never is.
//!
//! ```rust
//! use pidlog::{Logger, Severity, log_printf};
//!
//! let logger = Logger::open_file("/tmp/pidlog_app.log", false).expect("Unable to create log file");
//! log_printf!(logger, Severity::Info, "Hello, world!").unwrap();
//! logger.close().unwrap();
//! assert!(std::fs::read_to_string("/tmp/pidlog_app.log").unwrap().ends_with("Hello, world!\n"));
//! ```
//!
//! `Logger::from_env()` picks the sink from `PIDLOG_FILE` (`-` for stderr,
//! the default) and `PIDLOG_APPEND`.
//!
//! ## Fatal errors
//! `log_abort!`, `log_panic!`, `log_bug!`, `log_assert!` and a zero error code
//! passed to `log_perror!` write a final `[PAN]` line, flush the sink and abort
//! the process.
//!
//! ## `log` facade
//! ```rust
//! let logger = pidlog::init_global(pidlog::Logger::stderr()).unwrap();
//! log::trace!("written, levels are never filtered");
//! # let _ = logger;
//! ```

mod macros;

use log::LevelFilter;

pub use pidlog_core::{
    Error, IntoSeverity, Logger, Ownership, PIDLOG_CONFIG, PidLogConfig, Result, Severity,
    error_description, pidlog_config,
};

/// Installs `logger` as the `log` crate backend, with no level filtering.
///
/// On success the logger lives for the rest of the program; the returned
/// reference can still be used directly. If a backend is already installed,
/// `logger` is dropped (closing an owned sink) and `Error::SetLogger` returned.
pub fn init_global(logger: Logger) -> Result<&'static Logger> {
    let raw = Box::into_raw(Box::new(logger));
    // SAFETY: `raw` comes from `Box::into_raw` and is only freed below, when
    // `set_logger` rejected it and therefore kept no reference.
    let installed: &'static Logger = unsafe { &*raw };
    if let Err(err) = log::set_logger(installed) {
        drop(unsafe { Box::from_raw(raw) });
        return Err(err.into());
    }
    log::set_max_level(LevelFilter::Trace);
    Ok(installed)
}

#[doc(hidden)]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::f").unwrap_or(path);
    while let Some(parent) = path.strip_suffix("::{{closure}}") {
        path = parent;
    }
    path.rsplit("::").next().unwrap_or(path)
}

#[test]
fn test_short_function_name() {
    assert_eq!(short_function_name("app::server::run::f"), "run");
    assert_eq!(short_function_name("app::run::{{closure}}::f"), "run");
    assert_eq!(short_function_name("app::run::{{closure}}::{{closure}}::f"), "run");
    assert_eq!(short_function_name("main::f"), "main");
}

#[test]
fn test_function_macro() {
    assert_eq!(function!(), "test_function_macro");
    let from_closure = || function!();
    assert_eq!(from_closure(), "test_function_macro");
}
