// src/utils/logging.rs
//! Logging configuration and utilities
//!
//! Uses `env_logger` under the hood with custom formatting. All log output
//! goes to stderr: stdout is reserved for the block parameters and the
//! found genesis hash, so it stays machine-consumable.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;

/// Initializes the logging subsystem with sensible defaults
///
/// # Configuration
/// - Logs to stderr (stdout carries the result)
/// - Default log level: Info
/// - Custom timestamp and source location formatting
/// - Respects `RUST_LOG` environment variable if set
pub fn init_logging() {
    let mut builder = common_log_config();

    if env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Info);
    } else {
        builder.parse_env("RUST_LOG");
    }

    builder.init();
}

/// Creates and configures a base logger builder with common settings
///
/// Format: `[<epoch seconds> <level> <module>:<line>] <message>`
fn common_log_config() -> Builder {
    let mut builder = Builder::new();

    builder
        .format(|buf, record| {
            use std::io::Write;
            let ts = buf.timestamp_seconds();
            let level = record.level();
            let module = record.module_path().unwrap_or_default();
            let line = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                ts,
                level,
                module,
                line,
                record.args()
            )
        })
        .target(Target::Stderr);

    builder
}
