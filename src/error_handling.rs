//! Error type definitions.
//!
//! Only initialization and configuration failures are represented as error
//! types; per-query lookup failures are deliberately absent. Those are
//! converted into sentinel strings inside the result tree so the command
//! always completes with a full report (see [`crate::lookup`]).

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for settings-file loading.
///
/// All of these are fatal: they occur before any lookup starts and abort the
/// invocation with a non-zero exit.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No home directory to place the default settings file in.
    #[error("Could not determine the home directory for the settings file")]
    HomeDirUnavailable,

    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    ReadError {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::config::Settings`].
    #[error("Failed to parse settings file {path}: {source}")]
    ParseError {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The default settings file could not be written on first run.
    #[error("Failed to create default settings file {path}: {source}")]
    WriteError {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The default settings could not be serialized.
    #[error("Failed to serialize default settings: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
