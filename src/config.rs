use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Base URL of the match authority API
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Seconds between full refreshes in `watch`
    pub refresh_interval: u32,
    pub clock_tick_ms: u64,
    pub time_format: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            api_base_url: "http://localhost:8080/api".to_string(),
            request_timeout_secs: 10,
            refresh_interval: 30,
            clock_tick_ms: 1000,
            time_format: "%H:%M:%S".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Clock tick cadence; never faster than 10ms
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms.max(10))
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval.max(1)))
    }

    /// Fill in fields derived from other settings
    fn finalize(mut self) -> Self {
        self.display.box_chars = BoxChars::from_use_unicode(self.display.use_unicode);
        self
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse a config file's contents. Missing keys take their defaults.
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content).map(Config::finalize)
}

/// Read the config at `path`, falling back to defaults if it is missing or invalid
pub fn read_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|_| Config::default())
}

pub fn read() -> Config {
    match get_config_path() {
        Some(path) => read_from(&path),
        None => Config::default(),
    }
}
