//! API client for the dog.ceo breed listing endpoint.
//!
//! This module provides the `DogApiClient` struct for fetching the list of
//! sub-breeds of a named breed. The API wraps its payloads in a JSON envelope
//! with a `status` field and a `message` field; `message` holds the sub-breed
//! array on success and an explanatory string on failure.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::fetcher::{BreedFetcher, BreedNotFound};

use super::ApiError;

/// HTTP request timeout in seconds for clients built without a config.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Envelope status value the API uses for successful responses.
const STATUS_SUCCESS: &str = "success";

/// Response envelope for `/breed/{breed}/list`.
/// `message` stays untyped until the status check because error responses
/// carry a string where success responses carry an array.
#[derive(Debug, Deserialize)]
struct BreedListResponse {
    status: String,
    #[serde(default)]
    message: serde_json::Value,
}

/// API client for dog.ceo.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
}

impl DogApiClient {
    /// Create a client with the default base URL and timeout.
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Create a client against an explicit base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Fetch the sub-breed list for `breed`, keeping transport, status, and
    /// format failures distinct. The `BreedFetcher` impl collapses them.
    pub async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let url = format!("{}/breed/{}/list", self.base_url, breed);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        let text = response
            .text()
            .await
            .context("Failed to read breed list response body")?;
        let parsed: BreedListResponse =
            serde_json::from_str(&text).context("Failed to parse breed list response")?;

        if parsed.status != STATUS_SUCCESS {
            return Err(ApiError::ErrorStatus(parsed.status).into());
        }

        let sub_breeds: Vec<String> =
            serde_json::from_value(parsed.message).context("Failed to parse sub-breed list")?;

        debug!(breed, count = sub_breeds.len(), "Fetched sub-breeds");
        Ok(sub_breeds)
    }
}

#[async_trait]
impl BreedFetcher for DogApiClient {
    /// All failure modes collapse to `BreedNotFound` here; the underlying
    /// cause is logged before being discarded.
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        match self.fetch_sub_breeds(breed).await {
            Ok(sub_breeds) => Ok(sub_breeds),
            Err(e) => {
                warn!(breed, error = %e, "Sub-breed fetch failed");
                Err(BreedNotFound::new(breed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_envelope() {
        let json = r#"{"message": ["boston", "english", "french"], "status": "success"}"#;

        let parsed: BreedListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, STATUS_SUCCESS);

        let subs: Vec<String> = serde_json::from_value(parsed.message).unwrap();
        assert_eq!(subs, vec!["boston", "english", "french"]);
    }

    #[test]
    fn test_parse_empty_sub_breed_list() {
        let json = r#"{"message": [], "status": "success"}"#;

        let parsed: BreedListResponse = serde_json::from_str(json).unwrap();
        let subs: Vec<String> = serde_json::from_value(parsed.message).unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn test_parse_error_envelope() {
        // Unknown breeds carry a string message, not an array
        let json = r#"{"status": "error", "message": "Breed not found (master breed does not exist)", "code": 404}"#;

        let parsed: BreedListResponse = serde_json::from_str(json).unwrap();
        assert_ne!(parsed.status, STATUS_SUCCESS);
        assert!(serde_json::from_value::<Vec<String>>(parsed.message).is_err());
    }
}
