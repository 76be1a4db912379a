use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::error::Error;

/// Sink selection for [`Logger::from_env`](crate::Logger::from_env).
#[derive(FromEnv)]
#[from_env(prefix = "PIDLOG")]
#[allow(non_snake_case)]
pub struct PidLogConfig {
    /// Log file path, `-` for stderr.
    #[from_env(default = "-")]
    pub FILE: String,
    /// Append to an existing file instead of truncating it.
    #[from_env(default = "true")]
    pub APPEND: bool,
}

/// Environment is read once; a malformed value stays an error for the
/// lifetime of the process.
pub static PIDLOG_CONFIG: LazyLock<std::result::Result<PidLogConfig, String>> =
    LazyLock::new(|| PidLogConfig::from_env().map_err(|e| format!("{e:?}")));

/// The parsed `PIDLOG_*` settings.
pub fn pidlog_config() -> crate::error::Result<&'static PidLogConfig> {
    PIDLOG_CONFIG
        .as_ref()
        .map_err(|reason| Error::Config(reason.clone()))
}
