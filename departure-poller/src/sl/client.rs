//! SL Transport HTTP client.
//!
//! One request per station and cycle; no retries. The API is public and
//! needs no credentials.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT_MS, PollingConfig};
use crate::domain::Direction;

use super::error::FetchError;
use super::types::{DeparturesResponse, RawRecord};

/// Configuration for the SL client.
#[derive(Debug, Clone)]
pub struct SlConfig {
    /// Base URL for the API (defaults to production SL Transport)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional outbound proxy URL
    pub proxy: Option<String>,
}

impl SlConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            proxy: None,
        }
    }

    /// Take base URL, timeout and proxy from a polling configuration.
    pub fn from_polling(config: &PollingConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.fetch_timeout(),
            proxy: config.proxy.clone(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Route requests through a proxy.
    pub fn with_proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }
}

impl Default for SlConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// SL Transport API client.
#[derive(Debug, Clone)]
pub struct SlClient {
    http: reqwest::Client,
    base_url: String,
}

impl SlClient {
    /// Create a new client. Fails if the proxy URL is invalid.
    pub fn new(config: SlConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);

        if let Some(proxy) = &config.proxy {
            debug!(proxy = %proxy, "using proxy");
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the departures endpoint for a site.
    pub fn departures_url(&self, station_id: &str) -> String {
        format!("{}/sites/{}/departures", self.base_url, station_id)
    }

    /// Query parameters for a departures request.
    fn departures_query(forecast: u32, direction: Option<Direction>) -> Vec<(&'static str, String)> {
        let mut query = vec![("forecast", forecast.to_string())];
        if let Some(direction) = direction {
            query.push(("direction", direction.to_string()));
        }
        query
    }

    /// Get upcoming departures for a site.
    ///
    /// # Arguments
    ///
    /// * `station_id` - Provider site id
    /// * `forecast` - Minutes ahead to include
    /// * `direction` - Optional direction code to restrict results to
    pub async fn get_departures(
        &self,
        station_id: &str,
        forecast: u32,
        direction: Option<Direction>,
    ) -> Result<Vec<RawRecord>, FetchError> {
        let url = self.departures_url(station_id);
        debug!(station = %station_id, url = %url, "calling SL Transport");

        let response = self
            .http
            .get(&url)
            .query(&Self::departures_query(forecast, direction))
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = match status.canonical_reason() {
                Some(_) => None,
                None => match response.text().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        debug!(station = %station_id, error = %e, "failed to read error body");
                        None
                    }
                },
            };
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: status_message(status, body),
            });
        }

        let body = response.text().await?;

        let parsed: DeparturesResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Json {
                message: e.to_string(),
            })?;

        Ok(parsed.departures)
    }
}

/// Message for a non-OK reply: the reason phrase, else the body, else the
/// bare status number.
fn status_message(status: StatusCode, body: Option<String>) -> String {
    if let Some(reason) = status.canonical_reason() {
        return reason.to_string();
    }
    body.map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| status.as_str().to_string())
}
