//! Configuration for the `ninja` program with a layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "NINJA_LOG";

/// Environment variable forcing colored output on or off
pub const COLOR_ENV: &str = "NINJA_COLOR";

/// Filter used when nothing else is configured
pub const DEFAULT_LOG: &str = "warn";

/// Ninja configuration
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter directive, e.g. `debug` or `cmdtree=trace`
    pub log: Option<String>,

    /// Force colored output on or off (default: detect the terminal)
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Global user config (~/.config/ninja/config.yaml)
        if let Some(global) = Self::global_config_path().and_then(|p| Self::from_file(&p)) {
            config.merge(global);
        }

        // 2. Environment variables
        config.apply_env(|key| std::env::var(key).ok());

        config
    }

    /// Read a config file, ignoring it when missing or malformed
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ninja")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.log.is_some() {
            self.log = other.log;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(log) = lookup(LOG_ENV) {
            self.log = Some(log);
        }
        if let Some(color) = lookup(COLOR_ENV).and_then(|v| parse_bool(&v)) {
            self.color = Some(color);
        }
    }

    /// The log filter to install
    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "always" => Some(true),
        "0" | "false" | "no" | "off" | "never" => Some(false),
        _ => None,
    }
}
