//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patterns/patterns.toml`
//! 3. Environment variables: `PATTERNS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_MAX_DEPTH;

/// Unified configuration for the demonstrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Decimal places when printing composite values
    pub precision: usize,
    /// Recursion limit for composite evaluation
    pub max_depth: usize,
    /// Channel used by the factory method demo (`email` or `sms`)
    pub default_channel: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: 1,
            max_depth: DEFAULT_MAX_DEPTH,
            default_channel: "email".into(),
        }
    }
}

/// Get the XDG config directory for patterns.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patterns").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patterns.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// Defaults, then the global config file if present, then `PATTERNS_*`
    /// environment variables.
    pub fn load() -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), Self::env_source())
    }

    /// Load settings from an explicit file and environment source.
    pub fn load_from(
        file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("precision", defaults.precision as u64)
            .map_err(config_err)?
            .set_default("max_depth", defaults.max_depth as u64)
            .map_err(config_err)?
            .set_default("default_channel", defaults.default_channel.clone())
            .map_err(config_err)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder.add_source(env).build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Environment source for `PATTERNS_*` overrides.
    pub fn env_source() -> Environment {
        Environment::with_prefix("PATTERNS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_depth == 0 {
            return Err(ApplicationError::Config {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        if self.default_channel.parse::<crate::creational::Channel>().is_err() {
            return Err(ApplicationError::Config {
                message: format!("unknown default_channel: {}", self.default_channel),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# patterns configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/patterns/patterns.toml
#   Env:    PATTERNS_* environment variables (explicit overrides)

# Decimal places when printing composite values
# precision = 1

# Recursion limit for composite evaluation
# max_depth = 256

# Channel used by the factory method demo: "email" or "sms"
# default_channel = "email"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
