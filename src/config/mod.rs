use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_base_url, validate_config, validate_log_path, validate_timeout};

/// Configuration structure for the application.
/// Resolved from defaults, the environment and the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API-Football credential. Without it the sample season is shown.
    pub api_key: Option<String>,
    /// Base URL of the statistics API, without a trailing slash.
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 10 seconds if not specified.
    pub http_timeout_seconds: u64,
}

/// Settings as written in the config file.
///
/// Every key is optional so that only the keys actually present in the file
/// replace the values taken from the environment. Keys that are absent stay
/// absent when the file is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
}

impl ConfigFile {
    /// Reads the config file at `path`. A missing file yields `None`.
    pub async fn read(path: &str) -> Result<Option<Self>, AppError> {
        if !Path::new(path).exists() {
            debug!("No config file at {path}");
            return Ok(None);
        }
        debug!("Reading config file: {path}");
        let content = fs::read_to_string(path).await?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Writes the file to `path`, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the settings
    pub async fn write(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_file_path: None,
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

/// Adds an https:// scheme when none is given and drops trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.is_empty() {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Treats blank credentials as missing.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

impl Config {
    /// Loads configuration from the environment and the default config file location.
    ///
    /// # Environment Variables
    /// - `FOOTBALL_API_KEY` - API-Football credential
    /// - `FCZ_STATS_API_URL` - API base URL
    /// - `FCZ_STATS_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 10)
    /// - `FCZ_STATS_LOG_FILE` - Log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully resolved configuration
    /// * `Err(AppError)` - Config file unreadable or settings invalid
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Keys present in the config file take precedence over environment variables
    /// - A missing config file and a missing API key are both valid
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_env(&get_config_path(), process_env).await
    }

    /// Strict resolution from the file at `path` and an environment lookup.
    pub async fn load_with_env<F>(path: &str, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = ConfigFile::read(path).await?;
        let config = Config::from_sources(env, file);
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration without ever failing.
    ///
    /// An unreadable config file is skipped and invalid settings are reset to
    /// their defaults one by one, so a valid credential always survives. The
    /// skipped problems are returned for logging.
    pub async fn load_or_recover() -> (Self, Vec<AppError>) {
        Self::recover_with_env(&get_config_path(), process_env).await
    }

    pub async fn recover_with_env<F>(path: &str, env: F) -> (Self, Vec<AppError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();
        let file = ConfigFile::read(path).await.unwrap_or_else(|e| {
            problems.push(e);
            None
        });

        let (config, invalid) = Config::from_sources(env, file).repaired();
        problems.extend(invalid);
        (config, problems)
    }

    /// Resolves the configuration from an environment lookup and an optional config file.
    ///
    /// Values start from the defaults, environment values replace them and
    /// values present in the file replace those. A blank API key, from either
    /// source, leaves the application without a credential.
    pub fn from_sources<F>(env: F, file: Option<ConfigFile>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            api_key: env(env_vars::API_KEY),
            ..Config::default()
        };

        if let Some(url) = env(env_vars::API_URL) {
            config.api_base_url = url;
        }

        if let Some(log_file_path) = env(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = env(env_vars::HTTP_TIMEOUT).and_then(|s| s.trim().parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        if let Some(file) = file {
            if file.api_key.is_some() {
                config.api_key = file.api_key;
            }
            if let Some(url) = file.api_base_url {
                config.api_base_url = url;
            }
            if file.log_file_path.is_some() {
                config.log_file_path = file.log_file_path;
            }
            if let Some(timeout) = file.http_timeout_seconds {
                config.http_timeout_seconds = timeout;
            }
        }

        config.api_key = non_blank(config.api_key);
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config
    }

    /// Resets every invalid setting to its default, leaving the rest untouched.
    fn repaired(mut self) -> (Self, Vec<AppError>) {
        let mut problems = Vec::new();

        if let Err(e) = validate_base_url(&self.api_base_url) {
            problems.push(e);
            self.api_base_url = DEFAULT_API_BASE_URL.to_string();
        }
        if let Err(e) = validate_timeout(self.http_timeout_seconds) {
            problems.push(e);
            self.http_timeout_seconds = DEFAULT_HTTP_TIMEOUT_SECONDS;
        }
        if let Some(Err(e)) = self.log_file_path.as_deref().map(validate_log_path) {
            problems.push(e);
            self.log_file_path = None;
        }

        (self, problems)
    }

    /// Returns the configured API credential, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Stores or removes the API key in the default config file.
    ///
    /// Returns the path of the written file.
    pub async fn save_api_key(api_key: Option<&str>) -> Result<String, AppError> {
        let config_path = get_config_path();
        Self::save_api_key_to_path(&config_path, api_key).await?;
        Ok(config_path)
    }

    /// Stores or removes the API key in the config file at `path`.
    ///
    /// Only the `api_key` entry changes. Other keys keep their presence in the
    /// file, so settings that come from the environment are not shadowed by
    /// written-out defaults.
    pub async fn save_api_key_to_path(path: &str, api_key: Option<&str>) -> Result<(), AppError> {
        let mut file = ConfigFile::read(path).await?.unwrap_or_default();
        file.api_key = non_blank(api_key.map(str::to_string));
        file.write(path).await
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
    /// The API key is masked; only its first characters are shown.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let (config, problems) = Config::load_or_recover().await;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using environment)");
        }
        println!("────────────────────────────────────");
        println!("API Key:");
        match config.api_key() {
            Some(key) => println!("{}", mask_secret(key)),
            None => println!("(not set, sample data will be shown)"),
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/fcz_stats.log");
            println!("(Default location)");
        }
        if !problems.is_empty() {
            println!("────────────────────────────────────");
            println!("Ignored settings:");
            for problem in &problems {
                println!("{problem}");
            }
        }

        Ok(())
    }
}

/// Masks all but the first four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    let hidden = secret.chars().count().saturating_sub(4);
    format!("{visible}{}", "*".repeat(hidden))
}
