//! NexTrip HTTP client.
//!
//! Provides async methods for querying the NexTrip v2 API. Every endpoint
//! goes through a single fetch-and-decode helper.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::NexTripError;
use super::provider::NexTripProvider;
use super::types::{Departure, Route, RouteDepartures, RouteDirection, StopPlace};

/// Default base URL for the NexTrip v2 API.
const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/nextripv2";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "NEXTRIP_BASE_URL";

/// Environment variable enabling a request timeout, in seconds.
const TIMEOUT_ENV: &str = "NEXTRIP_TIMEOUT_SECS";

/// How much of an undecodable body to keep in the error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the NexTrip client.
#[derive(Debug, Clone)]
pub struct NexTripConfig {
    /// Base URL for the API (defaults to production NexTrip)
    pub base_url: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for NexTripConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl NexTripConfig {
    /// Create a config pointing at production NexTrip with no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `NEXTRIP_BASE_URL` and `NEXTRIP_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config = config.with_timeout(secs),
                Err(e) => warn!(value = %raw, error = %e, "ignoring invalid NEXTRIP_TIMEOUT_SECS"),
            }
        }

        config
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// NexTrip API client.
///
/// Requests are issued one at a time by the caller; the client holds no
/// state beyond its connection pool.
#[derive(Debug, Clone)]
pub struct NexTripClient {
    http: reqwest::Client,
    base_url: String,
}

impl NexTripClient {
    /// Create a new NexTrip client with the given configuration.
    pub fn new(config: NexTripConfig) -> Result<Self, NexTripError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `{base_url}/{path}` and decode the JSON body as `T`.
    ///
    /// The body is always read to completion, including on error statuses,
    /// so the connection goes back to the pool.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NexTripError> {
        let url = self.url(path);
        debug!(%url, "NexTrip request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "NexTrip response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NexTripError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(%url, error = %e, "failed to decode NexTrip response");
            NexTripError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
            }
        })
    }
}

impl NexTripProvider for NexTripClient {
    async fn routes(&self) -> Result<Vec<Route>, NexTripError> {
        self.fetch_json("routes").await
    }

    async fn directions(&self, route_id: &str) -> Result<Vec<RouteDirection>, NexTripError> {
        self.fetch_json(&format!("directions/{route_id}")).await
    }

    async fn stops(
        &self,
        route_id: &str,
        direction_id: i64,
    ) -> Result<Vec<StopPlace>, NexTripError> {
        self.fetch_json(&format!("stops/{route_id}/{direction_id}"))
            .await
    }

    async fn departures(
        &self,
        route_id: &str,
        direction_id: i64,
        place_code: &str,
    ) -> Result<Vec<Departure>, NexTripError> {
        let board: RouteDepartures = self
            .fetch_json(&format!("{route_id}/{direction_id}/{place_code}"))
            .await?;
        Ok(board.departures)
    }
}
