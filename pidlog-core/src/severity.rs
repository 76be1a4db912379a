use std::fmt;

use crate::error::{Error, Result};

/// Severity of a log line, from most to least severe.
///
/// Severities only tag lines. Nothing is ever filtered out.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Critical errors, system instability. Also used by the abort path.
    Critical = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    /// Error events and function call tracing.
    Trace = 4,
    Debug = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Trace,
        Severity::Debug,
    ];

    /// Bracketed tag written in every line.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Critical => "[PAN]",
            Severity::Error => "[ERR]",
            Severity::Warning => "[WRN]",
            Severity::Info => "[INF]",
            Severity::Trace => "[TRC]",
            Severity::Debug => "[DBG]",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Critical),
            1 => Some(Severity::Error),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Info),
            4 => Some(Severity::Trace),
            5 => Some(Severity::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

/// Anything a logging call accepts as its level.
///
/// Raw integers are checked at call time and rejected with
/// [`Error::InvalidLevel`] when they fall outside the six severities.
pub trait IntoSeverity {
    fn into_severity(self) -> Result<Severity>;
}

impl IntoSeverity for Severity {
    fn into_severity(self) -> Result<Severity> {
        Ok(self)
    }
}

impl IntoSeverity for log::Level {
    fn into_severity(self) -> Result<Severity> {
        Ok(self.into())
    }
}

impl IntoSeverity for u8 {
    fn into_severity(self) -> Result<Severity> {
        Severity::from_u8(self).ok_or(Error::InvalidLevel(self.into()))
    }
}

impl IntoSeverity for i32 {
    fn into_severity(self) -> Result<Severity> {
        u8::try_from(self)
            .ok()
            .and_then(Severity::from_u8)
            .ok_or(Error::InvalidLevel(self.into()))
    }
}
