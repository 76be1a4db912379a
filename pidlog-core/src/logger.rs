use std::{
    fmt,
    fs::File,
    io::{self, Write},
    path::Path,
    process,
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Utc;

use crate::{
    config::pidlog_config,
    error::{Error, Result},
    log_writer::{LogStderr, LogStream, LogWriter, Ownership, Sink, Stream},
    severity::{IntoSeverity, Severity},
    utils::{Location, error_description, format_line},
};

/// Shared log handle.
///
/// Every line is composed and written while holding the handle's lock, so
/// lines from concurrent threads never interleave. Share it by reference
/// (or behind an `Arc`) across threads.
pub struct Logger {
    pid: u32,
    sink: Mutex<Sink>,
}

impl Logger {
    fn with_sink(sink: Sink) -> Self {
        Self {
            pid: process::id(),
            sink: Mutex::new(sink),
        }
    }

    /// Logs to `writer`, line buffered. `ownership` decides what
    /// [`Logger::close`] does with it.
    pub fn open_with<W: Write + Send + 'static>(writer: W, ownership: Ownership) -> Self {
        Self::with_sink(Sink::Stream(LogStream::new(writer, ownership)))
    }

    /// Logs to `writer` and closes it when the logger is closed.
    pub fn open<W: Write + Send + 'static>(writer: W) -> Self {
        Self::open_with(writer, Ownership::Owned)
    }

    /// Logs to `writer` and hands it back, still open, from [`Logger::close`]
    /// or [`Logger::close_into`].
    ///
    /// Dropping the logger without closing it drops `writer` too.
    pub fn open_borrowed<W: Write + Send + 'static>(writer: W) -> Self {
        Self::open_with(writer, Ownership::Borrowed)
    }

    /// Logs to the process standard error stream.
    pub fn stderr() -> Self {
        Self::with_sink(Sink::Stderr(LogStderr))
    }

    /// Logs to a file, created if missing.
    pub fn open_file<P: AsRef<Path>>(path: P, append: bool) -> Result<Self> {
        let file = File::options()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self::open(file))
    }

    /// Opens the sink selected by `PIDLOG_FILE` and `PIDLOG_APPEND`.
    ///
    /// Fails with [`Error::Config`](crate::Error::Config) if either variable
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let config = pidlog_config()?;
        match config.FILE.as_str() {
            "-" => Ok(Self::stderr()),
            path => Self::open_file(path, config.APPEND),
        }
    }

    /// Process id written in every line.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Flushes and releases the sink.
    ///
    /// Borrowed streams are returned still open. Owned streams are closed and
    /// stderr is left untouched; both yield `None`.
    pub fn close(self) -> Result<Option<Box<dyn Write + Send>>> {
        Ok(self.release()?.map(|stream| stream.into_write()))
    }

    /// Like [`Logger::close`], giving a borrowed stream back as the type it
    /// was opened with.
    ///
    /// Fails with [`Error::StreamType`](crate::Error::StreamType) if `W` is not
    /// that type; the stream is dropped in that case.
    pub fn close_into<W: Write + Send + 'static>(self) -> Result<Option<W>> {
        self.release()?
            .map(|stream| match stream.into_any().downcast::<W>() {
                Ok(writer) => Ok(*writer),
                Err(_) => Err(Error::StreamType(std::any::type_name::<W>())),
            })
            .transpose()
    }

    fn release(self) -> io::Result<Option<Box<dyn Stream>>> {
        let sink = self.sink.into_inner().unwrap_or_else(PoisonError::into_inner);
        sink.release()
    }

    // A panicking writer cannot leave half a line behind (lines go out in a
    // single write_all), so a poisoned sink is still usable.
    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes one line. Prefer the `log_printf!` macro, which fills in the
    /// location.
    ///
    /// Fails with [`Error::InvalidLevel`](crate::Error::InvalidLevel), without
    /// writing anything, if `level` is not one of the six severities.
    pub fn printf_at(
        &self,
        file: &str,
        line: u32,
        function: &str,
        level: impl IntoSeverity,
        message: fmt::Arguments<'_>,
    ) -> Result<()> {
        let level = level.into_severity()?;
        let location = Location {
            file,
            line,
            function,
        };
        let mut sink = self.lock();
        let line = format_line(Utc::now(), self.pid, level, location, message);
        sink.regular(&line)?;
        Ok(())
    }

    /// Writes `"<message>: <description of code>"`.
    ///
    /// A zero `code` is a caller bug and aborts the process.
    pub fn perror_at(
        &self,
        file: &str,
        line: u32,
        function: &str,
        level: impl IntoSeverity,
        message: &str,
        code: i32,
    ) -> Result<()> {
        if code == 0 {
            self.abort_at(
                file,
                line,
                function,
                "perror_at() called with a zero error code",
            );
        }
        let description = error_description(code);
        self.printf_at(
            file,
            line,
            function,
            level,
            format_args!("{message}: {description}"),
        )
    }

    /// Like [`Logger::perror_at`], for an [`io::Error`]. Errors without an OS
    /// code are described by their `Display` text.
    pub fn perror_io_at(
        &self,
        file: &str,
        line: u32,
        function: &str,
        level: impl IntoSeverity,
        message: &str,
        err: &io::Error,
    ) -> Result<()> {
        match err.raw_os_error() {
            Some(code) => self.perror_at(file, line, function, level, message, code),
            None => self.printf_at(file, line, function, level, format_args!("{message}: {err}")),
        }
    }

    /// Logs a critical line, flushes the sink and aborts the process.
    pub fn abort_at(&self, file: &str, line: u32, function: &str, message: &str) -> ! {
        let _ = self.printf_at(
            file,
            line,
            function,
            Severity::Critical,
            format_args!("{message}"),
        );
        // The guard is never dropped: no other thread may write once the
        // process is going down.
        let mut sink = self.lock();
        let _ = sink.flush();
        process::abort()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("pid", &self.pid).finish_non_exhaustive()
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let _ = self.printf_at(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            record.module_path().unwrap_or(record.target()),
            record.level(),
            *record.args(),
        );
    }

    fn flush(&self) {
        let _ = self.lock().flush();
    }
}
