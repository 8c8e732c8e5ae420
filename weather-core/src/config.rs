use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Result, WeatherError};

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

/// Optional settings stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "http://api.openweathermap.org"
/// dump_path = "/tmp/weather.xml"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Provider host, without the `/data/2.5/weather` path.
    pub base_url: Option<String>,

    /// When set, every raw provider response is written here.
    pub dump_path: Option<PathBuf>,
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Load config from the platform config directory, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            WeatherError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            WeatherError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "current-weather").ok_or_else(|| {
            WeatherError::Config("Could not determine platform config directory".into())
        })?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert!(cfg.dump_path.is_none());
    }

    #[test]
    fn reads_base_url_and_dump_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"http://localhost:8080\"\ndump_path = \"weather.xml\"\n")
            .unwrap();

        let cfg = Config::load_from(&path).unwrap();

        assert_eq!(cfg.base_url(), "http://localhost:8080");
        assert_eq!(cfg.dump_path, Some(PathBuf::from("weather.xml")));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = 42\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, WeatherError::Config(_)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
