use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_base_url(api_base_url)?;
    validate_timeout(http_timeout_seconds)?;
    if let Some(log_path) = log_file_path {
        validate_log_path(log_path)?;
    }
    Ok(())
}

pub fn validate_base_url(api_base_url: &str) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    let host = api_base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    if host.is_empty() || host.starts_with('/') {
        return Err(AppError::config_error("API base URL is missing a host"));
    }

    Ok(())
}

pub fn validate_timeout(http_timeout_seconds: u64) -> Result<(), AppError> {
    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }
    Ok(())
}

/// Checks a log file path, creating its parent directory when missing.
pub fn validate_log_path(log_path: &str) -> Result<(), AppError> {
    if log_path.is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    if let Some(parent) = Path::new(log_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
