use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("Could not connect to {url}: {message}")]
    Connection { url: String, message: String },

    // The API answered, but not with usable data
    #[error("API answered {status} {reason} (URL: {url})")]
    Status {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("API response could not be read: {message} (URL: {url})")]
    InvalidPayload { message: String, url: String },

    #[error("API response has no data: {message} (URL: {url})")]
    NoData { message: String, url: String },

    #[error("No live data available: {failed} lookups failed")]
    LiveDataUnavailable { failed: usize },

    // Output
    #[error("Failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration and startup
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Failed to read config file: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Maps a non-success HTTP status.
    pub fn status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
            url: url.into(),
        }
    }

    pub fn invalid_payload(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::NoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// The request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::Timeout { .. } | AppError::Connection { .. }
        )
    }

    /// The API was reachable but had nothing for this lookup.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            AppError::NoData { .. } | AppError::Status { status: 404, .. }
        )
    }

    /// Request quota exhausted or throttled.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::Status { status: 429, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const URL: &str = "https://v3.football.api-sports.io/fixtures?team=684&next=1";

    #[test]
    fn test_missing_data_covers_empty_lists_and_404() {
        assert!(AppError::no_data("Response contains no entries", URL).is_missing_data());
        assert!(AppError::status(404, "Not Found", URL).is_missing_data());
        assert!(!AppError::status(500, "Internal Server Error", URL).is_missing_data());
        assert!(!AppError::invalid_payload("not JSON", URL).is_missing_data());
    }

    #[test]
    fn test_transport_excludes_answered_requests() {
        assert!(AppError::Timeout { url: URL.to_string() }.is_transport());
        assert!(
            AppError::Connection {
                url: URL.to_string(),
                message: "Connection refused".to_string()
            }
            .is_transport()
        );
        assert!(!AppError::status(503, "Service Unavailable", URL).is_transport());
        assert!(!AppError::no_data("empty", URL).is_transport());
    }

    #[test]
    fn test_rate_limit_only_for_429() {
        assert!(AppError::status(429, "Too Many Requests", URL).is_rate_limited());
        assert!(!AppError::status(403, "Forbidden", URL).is_rate_limited());
    }

    #[test]
    fn test_status_message_names_code_and_url() {
        let error = AppError::status(499, "Unknown error", URL);
        assert_eq!(
            error.to_string(),
            format!("API answered 499 Unknown error (URL: {URL})")
        );
    }

    #[test]
    fn test_json_output_failure_is_a_serialization_error() {
        // Non-string map keys cannot be represented in JSON
        let mut bad = HashMap::new();
        bad.insert((1u8, 2u8), 3u8);
        let error: AppError = serde_json::to_string(&bad).unwrap_err().into();

        assert!(matches!(error, AppError::Serialize(_)));
        assert!(error.to_string().starts_with("Failed to serialize statistics"));
        assert!(!error.is_transport());
    }

    #[test]
    fn test_live_data_unavailable_message() {
        let error = AppError::LiveDataUnavailable { failed: 3 };
        assert_eq!(error.to_string(), "No live data available: 3 lookups failed");
    }
}
