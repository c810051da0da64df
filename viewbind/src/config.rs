// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub binding: BindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            binding: BindingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: String::new(),
        }
    }
}

fn default_app_name() -> String {
    "ViewBind".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfig {
    #[serde(default = "default_types_file")]
    pub types_file: String,
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            types_file: default_types_file(),
            content_dir: default_content_dir(),
        }
    }
}

fn default_types_file() -> String {
    "types.ron".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

/// A `Config` that passed validation.
pub type ValidatedConfig = Config;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    MissingAppName,
    InvalidPort,
    InvalidWorkers,
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O failed: {}", err),
            ConfigError::Yaml(err) => write!(f, "config parse failed: {}", err),
            ConfigError::MissingAppName => write!(f, "app.name must not be empty"),
            ConfigError::InvalidPort => write!(f, "server.port must be non-zero"),
            ConfigError::InvalidWorkers => write!(f, "server.workers must be at least 1"),
            ConfigError::InvalidLogLevel(level) => {
                write!(f, "logging.level '{}' is not recognized", level)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate(config: Config) -> Result<ValidatedConfig, ConfigError> {
    if config.app.name.trim().is_empty() {
        return Err(ConfigError::MissingAppName);
    }
    if config.server.port == 0 {
        return Err(ConfigError::InvalidPort);
    }
    if config.server.workers == 0 {
        return Err(ConfigError::InvalidWorkers);
    }
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::InvalidLogLevel(config.logging.level));
    }
    Ok(config)
}

/// Load `config.yaml` from the runtime root. A missing file means defaults;
/// a present but invalid file is an error.
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let config = if path.exists() {
        let raw = fs::read_to_string(path)?;
        serde_yaml::from_str(&raw)?
    } else {
        Config::default()
    };
    validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = validate(Config::default()).unwrap();
        assert_eq!(config.app.name, "ViewBind");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.binding.types_file, "types.ron");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str(
            r#"
app:
  name: Demo Site
server:
  port: 9090
"#,
        )
        .unwrap();
        let config = validate(config).unwrap();
        assert_eq!(config.app.name, "Demo Site");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(validate(config), Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            validate(config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn rejects_empty_app_name() {
        let mut config = Config::default();
        config.app.name = "  ".to_string();
        assert!(matches!(
            validate(config),
            Err(ConfigError::MissingAppName)
        ));
    }
}
