use std::default::Default;
use std::fs;
use std::path::Path;

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryProvider;
use crate::errors::ConfigError;

// @module: Report toggles and logging settings, stored as JSON

/// Top-level configuration file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Report toggles
    #[serde(default)]
    pub report: ReportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Toggles controlling what the change report shows
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    // @field: Report cues only present in the edited script
    #[serde(default)]
    pub show_added: bool,

    // @field: Report cues only present in the translated script
    #[serde(default)]
    pub show_deleted: bool,

    // @field: Print trailing-tag comments of edited cues
    #[serde(default = "default_true")]
    pub show_comments: bool,

    // @field: Prefix lines with the approximate cue index
    #[serde(default = "default_true")]
    pub show_indexes: bool,

    // @field: Prefix lines with the cue time range
    #[serde(default)]
    pub show_timecodes: bool,

    // @field: Underline changed words of modified cues
    #[serde(default = "default_true")]
    pub underline_changes: bool,

    // @field: Dictionary used for word lookup links
    #[serde(default)]
    pub dictionary: DictionaryProvider,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_added: false,
            show_deleted: false,
            show_comments: default_true(),
            show_indexes: default_true(),
            show_timecodes: false,
            underline_changes: default_true(),
            dictionary: DictionaryProvider::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Parse a configuration document.
    ///
    /// A JSON `null` means no configuration was supplied and is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Config> = serde_json::from_str(json)
            .map_err(|e| ConfigError::InvalidConfiguration(e.to_string()))?;

        parsed.ok_or_else(|| {
            ConfigError::InvalidConfiguration("configuration is absent".to_string())
        })
    }

    /// Load the configuration at `path`, writing a default one when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if path.exists() {
            let json = fs::read_to_string(path)?;
            return Self::from_json(&json);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidConfiguration(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }
}
