//! CLI configuration management.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file,
//! `ELEMENTA_*` environment variables (a `.env` file is honoured), then
//! command-line flags.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use elementa_automaton::config::{DEFAULT_WIDTH, MAX_ALLOWED_GENERATIONS};
use elementa_automaton::rule::RULE_30;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ELEMENTA_CONFIG";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cells per row.
    pub width: usize,

    /// Requested run length (the engine caps it at 3000).
    pub max_generations: usize,

    /// Delay between ticks in milliseconds.
    pub interval_ms: u64,

    /// Rule used when none is given on the command line.
    pub rule: i64,

    /// Glyph for live cells in text output.
    pub alive: char,

    /// Glyph for dead cells in text output.
    pub dead: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            max_generations: MAX_ALLOWED_GENERATIONS,
            interval_ms: 20,
            rule: i64::from(RULE_30),
            alive: '█',
            dead: ' ',
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Some(width) = env_value("ELEMENTA_WIDTH") {
            config.width = width;
        }
        if let Some(max) = env_value("ELEMENTA_MAX_GENERATIONS") {
            config.max_generations = max;
        }
        if let Some(interval) = env_value("ELEMENTA_INTERVAL_MS") {
            config.interval_ms = interval;
        }
        if let Some(rule) = env_value("ELEMENTA_RULE") {
            config.rule = rule;
        }

        debug!(?config, "config_loaded");
        Ok(config)
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()
            .context("No config directory available on this platform")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(path)
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "elementa", "elementa")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Set a single value by its command-line key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "width" => self.width = value.parse().context("width must be an integer")?,
            "max-generations" | "max" => {
                self.max_generations = value
                    .parse()
                    .context("max-generations must be an integer")?
            }
            "interval-ms" | "interval" => {
                self.interval_ms = value.parse().context("interval-ms must be an integer")?
            }
            "rule" => self.rule = value.parse().context("rule must be an integer")?,
            "alive" => self.alive = single_char(value)?,
            "dead" => self.dead = single_char(value)?,
            _ => anyhow::bail!(
                "Unknown config key: {}. Valid keys: width, max-generations, interval-ms, rule, alive, dead",
                key
            ),
        }
        Ok(())
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

fn single_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("expected a single character, got {:?}", value),
    }
}
