use thiserror::Error;

/// Errors returned by the logger.
///
/// Misuse that cannot be recovered from (zero error codes, failed
/// assertions) never shows up here: it goes through [`Logger::abort_at`].
///
/// [`Logger::abort_at`]: crate::Logger::abort_at
#[derive(Error, Debug)]
pub enum Error {
    /// The level does not name one of the six severities.
    #[error("Invalid log level: {0}")]
    InvalidLevel(i64),

    #[error("Log sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `Logger::close_into` was asked for a type other than the stream's.
    #[error("Borrowed stream is not a {0}")]
    StreamType(&'static str),

    /// A `PIDLOG_*` environment variable could not be parsed.
    #[error("Invalid PIDLOG environment configuration: {0}")]
    Config(String),

    /// A global `log` backend is already installed.
    #[error("Unable to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
