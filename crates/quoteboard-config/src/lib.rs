//! Configuration management for quoteboard.
//!
//! Loads configuration from TOML files. The symbol basket and the market
//! holiday table are configuration data injected into the pipeline, not
//! in-source constants. Dates are written as `"YYYY-MM-DD"` strings.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./config.toml`
    /// 2. `~/.config/quoteboard/config.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("config.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("quoteboard").join("config.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("config.toml")
    }
}

/// General application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Symbol basket, in display order. Order matters: ranking ties keep it.
    pub basket: Vec<String>,
    /// Default baseline date when none is given on the command line.
    pub baseline_date: NaiveDate,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            basket: ["ISRG", "TSLL", "BOTZ", "XOM", "BBAI"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            baseline_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        }
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the quote-history proxy.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://yfinance-server.vercel.app".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Trading-calendar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Published market-closure dates. A stale table for past or future
    /// years is a known limitation, not a defect.
    pub holidays: Vec<NaiveDate>,
}

impl CalendarConfig {
    /// Holiday table as a set, for calendar construction.
    pub fn holiday_set(&self) -> BTreeSet<NaiveDate> {
        self.holidays.iter().copied().collect()
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        // 2025 US market closures.
        let holidays = [
            (1, 1),
            (1, 20),
            (2, 17),
            (4, 18),
            (5, 26),
            (7, 4),
            (9, 1),
            (11, 27),
            (12, 25),
        ]
        .iter()
        .map(|&(m, d)| NaiveDate::from_ymd_opt(2025, m, d).unwrap())
        .collect();

        Self { holidays }
    }
}
