use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("fcz_stats")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("fcz_stats")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_app_dir() {
        let path = get_config_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.contains("fcz_stats"));
    }

    #[test]
    fn test_log_dir_path_is_next_to_config() {
        let log_dir = get_log_dir_path();
        assert!(log_dir.ends_with("logs"));
        let config_parent = Path::new(&get_config_path())
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap();
        assert_eq!(Path::new(&log_dir).parent(), Some(config_parent.as_path()));
    }
}
