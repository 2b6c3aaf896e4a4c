use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::{
    fetcher::BRIGHTSKY_WEATHER_URL,
    transport::{DEFAULT_USER_AGENT, Timeouts},
};

/// Connect and total request timeouts, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_ms: u64,
    pub total_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: 5_000,
            total_ms: 10_000,
        }
    }
}

impl From<TimeoutConfig> for Timeouts {
    fn from(cfg: TimeoutConfig) -> Self {
        Timeouts {
            connect: Duration::from_millis(cfg.connect_ms),
            total: Duration::from_millis(cfg.total_ms),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "https://api.brightsky.dev/weather"
/// user_agent = "berlin-weather/0.1.0"
///
/// [timeouts]
/// connect_ms = 5000
/// total_ms = 10000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    pub timeouts: TimeoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: BRIGHTSKY_WEATHER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "berlin-weather", "berlin-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(anyhow!("`endpoint` must not be empty"));
        }
        if self.timeouts.connect_ms == 0 || self.timeouts.total_ms == 0 {
            return Err(anyhow!("timeouts must be greater than zero"));
        }
        if self.timeouts.connect_ms > self.timeouts.total_ms {
            return Err(anyhow!(
                "connect timeout ({} ms) exceeds total timeout ({} ms)",
                self.timeouts.connect_ms,
                self.timeouts.total_ms
            ));
        }
        Ok(())
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts.into()
    }
}
