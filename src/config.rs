use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::UnreleasedPlacement;
use crate::error::{ChangelogError, Result};
use crate::parser::ParseOptions;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// Represents the complete configuration for changelog.
///
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub init: InitConfig,

    #[serde(default)]
    pub parse: ParseConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_title() -> String {
    "Changelog".to_string()
}

fn default_preamble() -> String {
    // a single paragraph: only the first paragraph after the title is read back
    "All notable changes to this project will be documented in this file.
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/)
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html)."
        .to_string()
}

/// Title and preamble used by `init`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InitConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_preamble")]
    pub preamble: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        InitConfig {
            title: default_title(),
            preamble: default_preamble(),
        }
    }
}

/// How strictly existing changelogs are read.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ParseConfig {
    /// Accept unrecognized `##` headings as versions with an empty name
    #[serde(default)]
    pub lenient_version_headings: bool,
}

impl ParseConfig {
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            lenient_version_headings: self.lenient_version_headings,
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Put a newly created `[Unreleased]` above every release instead of below
    #[serde(default)]
    pub unreleased_first: bool,
}

impl BehaviorConfig {
    pub fn placement(&self) -> UnreleasedPlacement {
        if self.unreleased_first {
            UnreleasedPlacement::Front
        } else {
            UnreleasedPlacement::End
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        read_config_file(Path::new(CONFIG_FILE_NAME))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read_config_file(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| ChangelogError::config(e.to_string()))
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| ChangelogError::config(format!("cannot read {}: {}", path.display(), e)))
}
