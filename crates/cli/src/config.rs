// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is stored in a TOML file and includes:
//! - `data`: JSON Lines dataset to load instead of the built-in demo data
//! - `output`: default output format (`text`, `json`, `id`)
//! - `hotspot_limit`: how many locations `hotspots` shows by default
//! - `log_level`: tracing filter used when `SPOTFIX_LOG` is unset
//!
//! The file is looked up in this order: `--config`, `SPOTFIX_CONFIG`,
//! `./spotfix.toml`, then `<user config dir>/spotfix/config.toml`. A file
//! named explicitly must exist; discovered locations are optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "spotfix.toml";
const USER_CONFIG_DIR: &str = "spotfix";
const USER_CONFIG_FILE: &str = "config.toml";

const DEFAULT_HOTSPOT_LIMIT: usize = 5;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dataset path. Relative paths resolve against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    /// Default output format for commands that support `-o`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
    /// Default number of rows for `hotspots`.
    #[serde(default = "default_hotspot_limit")]
    pub hotspot_limit: usize,
    /// Tracing filter directive used when `SPOTFIX_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_hotspot_limit() -> usize {
    DEFAULT_HOTSPOT_LIMIT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: None,
            output: None,
            hotspot_limit: DEFAULT_HOTSPOT_LIMIT,
            log_level: default_log_level(),
        }
    }
}

/// Where config discovery should look.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    /// Path given with `--config`.
    pub explicit: Option<PathBuf>,
    /// Path from `SPOTFIX_CONFIG`.
    pub env: Option<PathBuf>,
    /// Working directory to check for `spotfix.toml`.
    pub cwd: Option<PathBuf>,
    /// Platform user config directory.
    pub user_dir: Option<PathBuf>,
}

impl SearchPaths {
    /// Search paths for the current process.
    pub fn from_process(explicit: Option<&Path>) -> Self {
        SearchPaths {
            explicit: explicit.map(Path::to_path_buf),
            env: crate::env::config_path(),
            cwd: std::env::current_dir().ok(),
            user_dir: dirs::config_dir(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if let Some(data) = config.data.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.data = Some(if data.is_absolute() {
                data
            } else {
                base.join(data)
            });
        }
        Ok(config)
    }

    /// Finds and loads the configuration, returning it with the file it came from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if an explicit or `SPOTFIX_CONFIG`
    /// path does not exist, or [`Error::Config`] if a file fails to parse.
    pub fn discover(paths: &SearchPaths) -> Result<(Self, Option<PathBuf>)> {
        if let Some(named) = paths.explicit.as_ref().or(paths.env.as_ref()) {
            if !named.is_file() {
                return Err(Error::ConfigNotFound(named.display().to_string()));
            }
            return Ok((Config::load(named)?, Some(named.clone())));
        }

        let candidates = [
            paths.cwd.as_ref().map(|d| d.join(LOCAL_CONFIG_FILE)),
            paths
                .user_dir
                .as_ref()
                .map(|d| d.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE)),
        ];
        for candidate in candidates.into_iter().flatten() {
            if candidate.is_file() {
                return Ok((Config::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Config::default(), None))
    }

    /// Output format to use when a command was given `requested`.
    pub fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.output).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
