use anyhow::{Context, Result, anyhow};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipinfo.io";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Cache file location relative to the home directory.
const CACHE_FILE_IN_HOME: &str = ".cache/.weather_cache";

/// Settings read from `config.toml`. Every field is optional in the file.
///
/// Example TOML:
/// ```toml
/// forecast_timeout_secs = 10
/// cache_file = "/tmp/weather"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geolocation_url: String,
    pub forecast_url: String,
    pub geolocation_timeout_secs: u64,
    pub forecast_timeout_secs: u64,

    /// Overrides `~/.cache/.weather_cache`.
    pub cache_file: Option<PathBuf>,

    pub write_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            geolocation_timeout_secs: 4,
            forecast_timeout_secs: 6,
            cache_file: None,
            write_cache: true,
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or return the
    /// default if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from an explicit path; a missing file yields the default.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "waybar-weather", "waybar-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Where the plain-text summary goes, or `None` if caching is disabled
    /// or no home directory can be found.
    pub fn cache_file_path(&self) -> Option<PathBuf> {
        if !self.write_cache {
            return None;
        }

        self.cache_file
            .clone()
            .or_else(|| BaseDirs::new().map(|d| d.home_dir().join(CACHE_FILE_IN_HOME)))
    }

    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_secs(self.geolocation_timeout_secs)
    }

    pub fn forecast_timeout(&self) -> Duration {
        Duration::from_secs(self.forecast_timeout_secs)
    }
}
