//! Configuration management for loomcheck
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/loomcheck/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::core::error::{LoomcheckError, Result};

/// Main configuration for loomcheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target application configuration
    pub target: TargetConfig,
    /// Browser configuration
    pub browser: BrowserConfig,
    /// Screenshot output configuration
    pub output: OutputConfig,
    /// Runner behavior configuration
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Application-under-test configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base URL the scenario routes are joined onto
    /// Default: http://localhost:3001
    pub base_url: String,
    /// Whether to probe the target with an HTTP GET before launching the browser
    pub preflight: bool,
}

/// Browser automation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Session name for agent-browser
    pub session_name: String,
    /// Whether to run in headed mode (visible browser)
    pub headed: bool,
    /// Default timeout for required waits in ms
    pub timeout_ms: u64,
}

/// Evidence output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory screenshots are written to; re-runs overwrite in place
    pub dir: PathBuf,
}

/// Runner behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Whether to show debug output (raw CLI command lines)
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            browser: BrowserConfig::default(),
            output: OutputConfig::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("LOOMCHECK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            preflight: true,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            session_name: env::var("LOOMCHECK_BROWSER_SESSION")
                .unwrap_or_else(|_| "loomcheck".to_string()),
            headed: env::var("LOOMCHECK_BROWSER_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            timeout_ms: env::var("LOOMCHECK_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: env::var("LOOMCHECK_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("verification")),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            debug: env::var("LOOMCHECK_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loomcheck")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(LoomcheckError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| LoomcheckError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| LoomcheckError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| LoomcheckError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| LoomcheckError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| LoomcheckError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Parse and validate the configured base URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.target.base_url)
            .map_err(|e| LoomcheckError::config(format!("Invalid base URL '{}': {}", self.target.base_url, e)))
    }

    /// Join a scenario route path onto the base URL
    pub fn target_url(&self, path: &str) -> Result<Url> {
        self.base_url()?
            .join(path)
            .map_err(|e| LoomcheckError::config(format!("Invalid route '{}': {}", path, e)))
    }

    /// Update the base URL
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.target.base_url = base_url.into();
    }
}
