//! Logger initialization.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` for stderr output so logs never mix with rendered
/// results on stdout. The logger reads `RUST_LOG` first, then the provided
/// `level` overrides it, which keeps `RUST_LOG=debug` available for quick
/// debugging while `--log-level` stays authoritative.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // hickory warns about malformed or truncated UDP responses it already
    // handles; keep those out of normal output.
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("domain_records", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };
                writeln!(buf, "[{}] {} {}", colored_level, record.target().cyan(), record.args())
            });
        }
    }

    // try_init() so tests that initialize repeatedly do not panic.
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
