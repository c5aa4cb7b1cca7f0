//! Authenticated JSON fetching with status-specific error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::{API_HOST, API_HOST_HEADER, API_KEY_HEADER};
use crate::error::AppError;

/// Fetches `url` with the API credential and parses the JSON body.
///
/// This function:
/// - Sends a single GET request, bounded by the client's timeout
/// - Maps non-success statuses to `AppError::Status`
/// - Separates empty, non-JSON and unexpectedly shaped bodies
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `api_key` - Credential sent in the `x-rapidapi-key` header
#[instrument(skip(client, api_key))]
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .header(API_KEY_HEADER, api_key)
        .header(API_HOST_HEADER, API_HOST)
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            if e.is_timeout() {
                AppError::Timeout { url: url.to_string() }
            } else if e.is_connect() {
                AppError::Connection {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            } else {
                AppError::Http(e)
            }
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(AppError::status(status_code, reason, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::Http(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    parse_body(&response_text, url)
}

/// Parses a response body, classifying failures by what the body looks like.
pub fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let trimmed = body.trim_start();
        if trimmed.is_empty() {
            AppError::no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::invalid_payload("Response is not valid JSON", url)
        } else {
            AppError::invalid_payload(e.to_string(), url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_fetcher::models::FixturesResponse;

    const URL: &str = "https://api.example.com/fixtures";

    #[test]
    fn test_parse_body_empty() {
        let result = parse_body::<FixturesResponse>("   ", URL);
        assert!(matches!(result, Err(AppError::NoData { .. })));
    }

    #[test]
    fn test_parse_body_not_json() {
        let result = parse_body::<FixturesResponse>("<html>Bad gateway</html>", URL);
        assert!(matches!(
            result,
            Err(AppError::InvalidPayload { ref message, .. }) if message == "Response is not valid JSON"
        ));
    }

    #[test]
    fn test_parse_body_wrong_shape() {
        let result = parse_body::<FixturesResponse>(r#"{"response": "nope"}"#, URL);
        assert!(matches!(
            result,
            Err(AppError::InvalidPayload { ref message, .. }) if message != "Response is not valid JSON"
        ));
    }

    #[test]
    fn test_parse_body_ok() {
        let parsed = parse_body::<FixturesResponse>(r#"{"errors": [], "response": []}"#, URL).unwrap();
        assert!(parsed.response.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_sends_credentials_and_maps_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/fixtures")
            .match_query(mockito::Matcher::Any)
            .match_header("x-rapidapi-key", "test-key")
            .match_header("x-rapidapi-host", "v3.football.api-sports.io")
            .with_status(429)
            .create_async()
            .await;

        let client = crate::stats_fetcher::api::create_http_client_with_timeout(5).unwrap();
        let url = format!("{}/fixtures?team=684&next=1", server.url());
        let result = fetch::<FixturesResponse>(&client, &url, "test-key").await;

        mock.assert_async().await;
        let error = result.unwrap_err();
        assert!(error.is_rate_limited());
        assert!(!error.is_transport());
    }

    #[tokio::test]
    async fn test_fetch_missing_resource_is_missing_data() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = crate::stats_fetcher::api::create_http_client_with_timeout(5).unwrap();
        let url = format!("{}/standings?league=207&season=2024", server.url());
        let error = fetch::<FixturesResponse>(&client, &url, "k").await.unwrap_err();
        assert!(error.is_missing_data());
    }

    #[tokio::test]
    async fn test_fetch_refused_connection_is_transport() {
        let client = crate::stats_fetcher::api::create_http_client_with_timeout(2).unwrap();
        let error = fetch::<FixturesResponse>(&client, "http://127.0.0.1:9/fixtures", "k")
            .await
            .unwrap_err();
        assert!(error.is_transport());
        assert!(!error.is_missing_data());
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/standings")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = crate::stats_fetcher::api::create_http_client_with_timeout(5).unwrap();
        let url = format!("{}/standings?league=207&season=2024", server.url());
        let result = fetch::<FixturesResponse>(&client, &url, "k").await;
        assert!(matches!(result, Err(AppError::Status { status: 503, .. })));
    }
}
