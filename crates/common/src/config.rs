use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

// Default constants
/// Cap used by every numeric-sequence emulation of unnest.
pub const DEFAULT_MAXIMUM_ARRAY_SIZE: u32 = 1000;
/// Cap used when a series has to cover a computed array length.
pub const DEFAULT_MAXIMUM_SERIES_SIZE: u32 = 10000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Deserialize, Default, Clone, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub array_functions: ArrayFunctionSettings,
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Knobs of the array function emulations.
#[derive(Debug, Deserialize, Clone, Copy, Validate)]
pub struct ArrayFunctionSettings {
    /// Arrays longer than this are silently truncated by the sequence-join
    /// emulations (H2, DB2).
    #[serde(default = "default_maximum_array_size")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub maximum_array_size: u32,

    #[serde(default = "default_maximum_series_size")]
    #[validate(range(min = 1, max = 10_000_000))]
    pub maximum_series_size: u32,

    #[serde(default = "default_warn_on_deprecated_overloads")]
    pub warn_on_deprecated_overloads: bool,
}

impl Default for ArrayFunctionSettings {
    fn default() -> Self {
        Self {
            maximum_array_size: default_maximum_array_size(),
            maximum_series_size: default_maximum_series_size(),
            warn_on_deprecated_overloads: default_warn_on_deprecated_overloads(),
        }
    }
}

impl ArrayFunctionSettings {
    pub fn with_maximum_array_size(mut self, maximum_array_size: u32) -> Self {
        self.maximum_array_size = maximum_array_size;
        self
    }
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    #[validate(custom(function = "validate_log_level"))]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_maximum_array_size() -> u32 {
    DEFAULT_MAXIMUM_ARRAY_SIZE
}

fn default_maximum_series_size() -> u32 {
    DEFAULT_MAXIMUM_SERIES_SIZE
}

fn default_warn_on_deprecated_overloads() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_log_level"))
    }
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).context("Failed to parse configuration YAML")?;
        config
            .validate()
            .context("Configuration failed validation")?;
        Ok(config)
    }
}

/// Load the configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    AppConfig::from_yaml(&content).with_context(|| format!("Invalid config: {}", path.display()))
}
