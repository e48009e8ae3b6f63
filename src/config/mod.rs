use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Default schedule export to analyze when no file argument is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_file: Option<String>,
    /// Sport tag applied as a filter when the CLI passes none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sport: Option<String>,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults rather than an error.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `MATCHUP_SCHEDULE_FILE` - Override default schedule file
    /// - `MATCHUP_DEFAULT_SPORT` - Override default sport filter
    /// - `MATCHUP_LOG_FILE` - Override log file path
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path())
    }

    /// Loads configuration from a custom file path, applying the same
    /// env-var overrides and validation as [`Config::load`].
    pub fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(schedule_file) = std::env::var("MATCHUP_SCHEDULE_FILE") {
            config.schedule_file = Some(schedule_file);
        }

        if let Ok(default_sport) = std::env::var("MATCHUP_DEFAULT_SPORT") {
            config.default_sport = Some(default_sport);
        }

        if let Ok(log_file_path) = std::env::var("MATCHUP_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.schedule_file, &self.default_sport, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Schedule File:");
            println!("{}", config.schedule_file.as_deref().unwrap_or("(not set)"));
            println!("────────────────────────────────────");
            println!("Default Sport:");
            println!("{}", config.default_sport.as_deref().unwrap_or("(not set)"));
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/matchup_matrix.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
