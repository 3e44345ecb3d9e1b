// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// How processed records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable message per record
    #[default]
    Text,
    /// One compact JSON object per record
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid("OUTPUT_FORMAT", other.to_string())),
        }
    }
}

/// Log output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with sensor packages; built-in samples when unset
    pub packages_file: Option<PathBuf>,
    /// Report layout on stdout
    pub output_format: OutputFormat,
    /// Log layout on stderr
    pub log_format: LogFormat,
    /// Default tracing filter directive
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_file: None,
            output_format: OutputFormat::Text,
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            packages_file: env::var("WORKOUT_PACKAGES_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            output_format: match env::var("OUTPUT_FORMAT") {
                Ok(v) => v.parse()?,
                Err(_) => OutputFormat::default(),
            },
            log_format: match env::var("LOG_FORMAT") {
                Ok(v) => v.parse()?,
                Err(_) => LogFormat::default(),
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("WORKOUT_PACKAGES_FILE", "data/packages.json");
        env::set_var("OUTPUT_FORMAT", "JSON");
        env::remove_var("LOG_FORMAT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.packages_file, Some(PathBuf::from("data/packages.json")));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);

        env::remove_var("WORKOUT_PACKAGES_FILE");
        env::remove_var("OUTPUT_FORMAT");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" Json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
