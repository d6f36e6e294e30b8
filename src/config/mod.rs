//! Configuration: CLI options, constants, and the settings file.

mod constants;
mod file;
mod types;

pub use constants::*;
pub use file::{load_or_init_settings, Settings};
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
