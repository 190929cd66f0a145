use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::services::DEFAULT_OUTPUT_PATH;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Path offered as the default location for saved qualifying loans
    #[serde(default = "default_output_path")]
    pub default_path: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_path: default_output_path(),
        }
    }
}

fn default_output_path() -> String { DEFAULT_OUTPUT_PATH.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Prompts share the terminal with log output, so only warnings show by default.
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with LOAN_QUALIFIER)
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LOAN_QUALIFIER__OUTPUT__DEFAULT_PATH -> output.default_path
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LOAN_QUALIFIER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
