//! # pidlog-core
//! Core of pidlog - the synchronized line writer shared by every pidlog handle.

mod config;
mod error;
mod log_writer;
mod logger;
mod severity;
mod utils;

pub use config::{PIDLOG_CONFIG, PidLogConfig, pidlog_config};
pub use error::{Error, Result};
pub use log_writer::Ownership;
pub use logger::Logger;
pub use severity::{IntoSeverity, Severity};
pub use utils::error_description;
