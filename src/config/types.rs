//! CLI option types and parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format.
///
/// Deliberately not a closed clap `ValueEnum`: an unrecognized `--format`
/// value falls back to plain text instead of failing the invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text rendering to stdout (default).
    Stdout,
    /// Single-line JSON rendering.
    Json,
}

impl OutputFormat {
    /// Maps a `--format` tag to a renderer; anything but "json" is plain text.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Stdout,
        }
    }
}

/// Invocation configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_records",
    version,
    about = "Resolve DNS records for domains against configured nameservers"
)]
pub struct Config {
    /// Domain names to look up (at least one required)
    #[arg(required = true)]
    pub domains: Vec<String>,

    /// Output format: "stdout" or "json" (unrecognized values fall back to stdout)
    #[arg(short, long, default_value = "stdout")]
    pub format: String,

    /// Record types to query, comma-separated, overriding the settings file (e.g. -q a,mx)
    #[arg(short, long)]
    pub qtype: Option<String>,

    /// Settings file path (default: ~/.domain_records.toml, created on first run)
    #[arg(long = "config")]
    pub settings_file: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
