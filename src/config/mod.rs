use crate::constants::{self, env_vars};
use crate::data_fetcher::api::RetryPolicy;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing provider and cache settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the data provider. Joined with the competition path on use.
    pub api_base_url: String,
    /// Key sent in the provider's auth header.
    pub api_key: String,
    /// Competition whose teams are fetched, e.g. "PL".
    pub competition_code: String,
    /// How long a fetched roster is preferred over a refetch.
    pub cache_ttl_hours: u64,
    /// Additional attempts after a failed provider request.
    pub max_retries: u32,
    /// Backoff before the first retry in milliseconds; doubles per retry.
    pub retry_base_delay_ms: u64,
    /// HTTP timeout in seconds for provider requests.
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: constants::provider::DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            competition_code: constants::provider::DEFAULT_COMPETITION_CODE.to_string(),
            cache_ttl_hours: constants::cache_ttl::DEFAULT_TEAMS_HOURS,
            max_retries: constants::retry::DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: constants::retry::DEFAULT_BASE_DELAY_MS,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            log_file_path: None,
        }
    }
}

/// Reads an environment variable and parses it, ignoring unset or unparsable values.
fn env_override<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse::<T>().ok())
}

impl Config {
    /// Loads configuration from the default config file location, applies
    /// environment overrides and validates the result.
    ///
    /// # Environment Variables
    /// - `FOOTBALL_API_BASE` - Override provider base URL
    /// - `FOOTBALL_API_KEY` - Override API key
    /// - `FOOTBALL_COMPETITION` - Override competition code
    /// - `CACHE_TTL_HOURS` - Override cache TTL (hours)
    /// - `FOOTBALL_MAX_RETRIES` - Override retry count
    /// - `FOOTBALL_RETRY_BASE_DELAY_MS` - Override base backoff delay
    /// - `FOOTBALL_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `SQUAD_LOOKUP_LOG_FILE` - Override log file path
    ///
    /// # Notes
    /// - A missing config file is not an error; defaults are used
    /// - Environment variables take precedence over config file values
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::load_saved()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file as saved, or defaults if there is none.
    /// No environment overrides and no validation.
    pub fn load_saved() -> Result<Self, AppError> {
        let config_path = get_config_path();
        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Overrides fields from environment variables where present.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(code) = std::env::var(env_vars::COMPETITION_CODE) {
            self.competition_code = code;
        }

        if let Some(hours) = env_override(env_vars::CACHE_TTL_HOURS) {
            self.cache_ttl_hours = hours;
        }

        if let Some(retries) = env_override(env_vars::MAX_RETRIES) {
            self.max_retries = retries;
        }

        if let Some(delay) = env_override(env_vars::RETRY_BASE_DELAY_MS) {
            self.retry_base_delay_ms = delay;
        }

        if let Some(timeout) = env_override(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.api_key,
            &self.competition_code,
            &self.log_file_path,
        )
    }

    /// Cache TTL as a duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.saturating_mul(3600))
    }

    /// Retry policy for provider requests
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            Duration::from_millis(self.retry_base_delay_ms),
        )
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
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
    /// The API key is masked.
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load_saved()?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("API Key:");
        println!("{}", config.masked_api_key());
        println!("Competition:");
        println!("{}", config.competition_code);
        println!("────────────────────────────────────");
        println!("Cache TTL: {} hours", config.cache_ttl_hours);
        println!("Retries: {} (base delay {} ms)", config.max_retries, config.retry_base_delay_ms);
        println!("HTTP Timeout: {} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/squad_lookup.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.is_empty() {
            return "(not set)".to_string();
        }
        let visible = chars.len().saturating_sub(4);
        chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }

    /// Saves configuration to a custom file path, creating the parent directory
    /// if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path. Missing keys take defaults.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
