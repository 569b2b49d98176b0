use crate::domain::{IncrementTarget, TagParseMode};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "autosemver.toml";

/// File name looked up in the user's config directory
pub const USER_CONFIG_FILE: &str = ".autosemver.toml";

/// Represents the complete configuration file for auto-semver.
///
/// Every value can be overridden on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Default values for the command-line options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    /// Remote passed to `git ls-remote`; empty means git's default
    #[serde(default)]
    pub remote: String,

    #[serde(default)]
    pub highest_value: IncrementTarget,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Skip tags that are not semantic versions instead of failing
    #[serde(default)]
    pub skip_malformed_tags: bool,
}

/// Fully resolved settings for a single run.
///
/// Built once from the config file and the command line, then passed
/// explicitly through fetch, parse and increment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunConfig {
    pub remote: String,
    pub highest_value: IncrementTarget,
    pub parse_mode: TagParseMode,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overrides {
    pub remote: Option<String>,
    pub highest_value: Option<IncrementTarget>,
    pub skip_malformed: bool,
}

impl Config {
    /// Merge command-line overrides on top of this file's values
    pub fn resolve(&self, overrides: Overrides) -> RunConfig {
        let parse_mode = if overrides.skip_malformed || self.behavior.skip_malformed_tags {
            TagParseMode::SkipMalformed
        } else {
            TagParseMode::Strict
        };

        RunConfig {
            remote: overrides
                .remote
                .unwrap_or_else(|| self.defaults.remote.clone()),
            highest_value: overrides
                .highest_value
                .unwrap_or(self.defaults.highest_value),
            parse_mode,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autosemver.toml` in current directory
/// 3. `.autosemver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            log::debug!("no config file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
