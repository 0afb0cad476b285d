//! Remote config override.
//!
//! One GET of the site's `config.json` at startup. There is no retry: on any
//! failure the caller keeps the configuration it already has.

use std::time::Duration;

use crate::config::ConfigOverride;
use crate::errors::{LandscapeError, LandscapeResult};

/// Path of the override document relative to the site root
pub const CONFIG_PATH: &str = "/config.json";

/// Upper bound on the single request so a blocking caller cannot hang
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Join a site base URL and [`CONFIG_PATH`]
pub fn config_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), CONFIG_PATH)
}

/// Fetch and parse the override document.
pub async fn try_fetch_override(url: &str) -> LandscapeResult<ConfigOverride> {
    let client = reqwest::Client::builder()
        .user_agent(format!("landscape-estimator/{}", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| LandscapeError::fetch_error(url, format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LandscapeError::fetch_error(url, format!("Network error: {}", e)))?;

    if !response.status().is_success() {
        return Err(LandscapeError::fetch_error(url, format!("Server returned {}", response.status())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LandscapeError::fetch_error(url, format!("Failed to read response: {}", e)))?;
    ConfigOverride::from_json_str(&body)
}

/// Fetch the override, logging and swallowing any failure.
pub async fn fetch_override(url: &str) -> Option<ConfigOverride> {
    match try_fetch_override(url).await {
        Ok(over) => {
            tracing::info!(url, "loaded remote config override");
            Some(over)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "remote config unavailable, keeping defaults");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_config_url() {
        assert_eq!(config_url("https://bateslandscapes.co.uk/"), "https://bateslandscapes.co.uk/config.json");
        assert_eq!(config_url("http://localhost:5173"), "http://localhost:5173/config.json");
    }

    #[tokio::test]
    async fn test_fetch_override_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"pricing": {"overheadRate": 0.07}}"#);
            })
            .await;

        let over = fetch_override(&config_url(&server.base_url())).await.unwrap();
        mock.assert_async().await;
        assert_eq!(over.pricing.unwrap().overhead_rate, Some(0.07));
    }

    #[tokio::test]
    async fn test_fetch_override_not_found_is_none() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(404);
            })
            .await;

        assert!(fetch_override(&config_url(&server.base_url())).await.is_none());
        // No retry
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_try_fetch_reports_bad_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = try_fetch_override(&config_url(&server.base_url())).await.unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
