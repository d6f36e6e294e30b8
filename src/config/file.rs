//! Settings-file loading and first-run bootstrap.
//!
//! The settings file supplies the nameserver list and the default record-type
//! list. Without `--config` it lives in the home directory and is created with
//! defaults on first run; an explicit `--config` path must already exist.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SETTINGS_FILE;
use crate::error_handling::SettingsError;

/// Resolved settings consumed by the lookup pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Nameserver addresses (IP or host, no port), queried in this order.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,
    /// Record types queried when no `--qtype` override is given.
    #[serde(default = "default_qtypes")]
    pub qtypes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            qtypes: default_qtypes(),
        }
    }
}

fn default_nameservers() -> Vec<String> {
    vec!["8.8.8.8".to_string()]
}

fn default_qtypes() -> Vec<String> {
    vec!["A".to_string()]
}

/// Loads settings from `explicit_path`, or from the default home-directory
/// location, bootstrapping the default file there on first run.
///
/// Record types are uppercased on load so the aggregation engine can use the
/// configured list verbatim.
pub fn load_or_init_settings(explicit_path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_settings_path()?;
            if !path.exists() {
                write_default_settings(&path)?;
            }
            path
        }
    };

    let contents = fs::read_to_string(&path).map_err(|source| SettingsError::ReadError {
        path: path.clone(),
        source,
    })?;
    let mut settings: Settings =
        toml::from_str(&contents).map_err(|source| SettingsError::ParseError {
            path: path.clone(),
            source,
        })?;

    for qtype in &mut settings.qtypes {
        *qtype = qtype.to_uppercase();
    }

    Ok(settings)
}

fn default_settings_path() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_SETTINGS_FILE))
        .ok_or(SettingsError::HomeDirUnavailable)
}

fn write_default_settings(path: &Path) -> Result<(), SettingsError> {
    let contents =
        toml::to_string_pretty(&Settings::default()).map_err(SettingsError::SerializeError)?;
    fs::write(path, contents).map_err(|source| SettingsError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Created settings file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn loads_explicit_settings_file() {
        let file = settings_file(
            "nameservers = [\"8.8.8.8\", \"1.1.1.1\"]\nqtypes = [\"A\", \"NS\"]\n",
        );

        let settings = load_or_init_settings(Some(file.path())).expect("Should load settings");
        assert_eq!(settings.nameservers, vec!["8.8.8.8", "1.1.1.1"]);
        assert_eq!(settings.qtypes, vec!["A", "NS"]);
    }

    #[test]
    fn qtypes_are_uppercased_on_load() {
        let file = settings_file("nameservers = [\"8.8.8.8\"]\nqtypes = [\"a\", \"mx\"]\n");

        let settings = load_or_init_settings(Some(file.path())).expect("Should load settings");
        assert_eq!(settings.qtypes, vec!["A", "MX"]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = settings_file("nameservers = [\"9.9.9.9\"]\n");

        let settings = load_or_init_settings(Some(file.path())).expect("Should load settings");
        assert_eq!(settings.nameservers, vec!["9.9.9.9"]);
        assert_eq!(settings.qtypes, vec!["A"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_or_init_settings(Some(Path::new("/nonexistent/settings.toml")));
        assert!(matches!(result, Err(SettingsError::ReadError { .. })));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = settings_file("nameservers = \"not a list\"\n");

        let result = load_or_init_settings(Some(file.path()));
        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }

    #[test]
    fn default_settings_round_trip_through_toml() {
        let rendered = toml::to_string_pretty(&Settings::default()).expect("Should serialize");
        let parsed: Settings = toml::from_str(&rendered).expect("Should parse");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn bootstrap_writes_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);

        write_default_settings(&path).expect("Should write default settings");
        let parsed: Settings =
            toml::from_str(&fs::read_to_string(&path).unwrap()).expect("Should parse");
        assert_eq!(parsed.nameservers, vec!["8.8.8.8"]);
        assert_eq!(parsed.qtypes, vec!["A"]);
    }
}
