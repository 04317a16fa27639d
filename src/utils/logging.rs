//! Audit log bootstrap.
//!
//! Every command writes its outcome to `<data_dir>/<basename>.log` so that
//! the history of accepted and rejected meetings can be reviewed later.
//! Lines are written directly (unbuffered) because the binary leaves through
//! `process::exit`, which never runs destructors.

use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;
use crate::utils::error::{AgendaError, Result};

/// Prefix tag carried by every audit line of the `cm` command
pub const CM_LOG_TAG: &str = "[agenda cm]";

/// Start the file logger. `RUST_LOG` wins over `level` when set.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(level: &str, log_dir: &Path, basename: &str) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)?;

    Logger::try_with_env_or_str(level.trim().to_ascii_lowercase())
        .map_err(|e| AgendaError::ConfigError(format!("Invalid log level '{}': {}", level, e)))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(basename)
                .suppress_timestamp(),
        )
        .duplicate_to_stderr(Duplicate::None)
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| AgendaError::ConfigError(format!("Failed to start logger: {}", e)))
}
