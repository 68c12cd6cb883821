//! Directions HTTP adapter: fetches a route and decodes its overview geometry.

use std::env;
use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::coordinate::Coordinate;
use crate::error::{ConfigError, DecodeError, RouteError};
use crate::polyline::{self, Polyline};
use crate::traits::{ErrorReporter, RouteProvider, TracingReporter};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

#[derive(Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DirectionsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Reads `DIRECTIONS_API_KEY` (required), `DIRECTIONS_BASE_URL` and
    /// `DIRECTIONS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("DIRECTIONS_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("DIRECTIONS_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("DIRECTIONS_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(raw) = env::var("DIRECTIONS_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DIRECTIONS_TIMEOUT_SECS".to_string(),
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }

    fn endpoint(&self) -> String {
        format!("{}/directions/json", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsClient<R = TracingReporter> {
    config: DirectionsConfig,
    client: reqwest::Client,
    reporter: R,
}

impl DirectionsClient<TracingReporter> {
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        Self::with_reporter(config, TracingReporter)
    }
}

impl<R: ErrorReporter> DirectionsClient<R> {
    pub fn with_reporter(config: DirectionsConfig, reporter: R) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::from_parts(config, client, reporter))
    }

    /// Builds a client around an existing `reqwest::Client`, sharing its pool.
    pub fn from_parts(config: DirectionsConfig, client: reqwest::Client, reporter: R) -> Self {
        Self {
            config,
            client,
            reporter,
        }
    }

    pub fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    /// Fetches the route between two points.
    ///
    /// Network, HTTP, parse and service-status failures are sent to the
    /// reporter once and come back as an empty polyline. A corrupt polyline
    /// in an otherwise valid response is returned as an error. Dropping the
    /// future cancels the request.
    pub async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Polyline, DecodeError> {
        match self.try_fetch_route(origin, destination).await {
            Ok(route) => Ok(route),
            Err(RouteError::Decode(err)) => Err(err),
            Err(err) => {
                self.reporter.report(&err);
                Ok(Polyline::default())
            }
        }
    }

    /// Same request as [`fetch_route`](Self::fetch_route), with every
    /// failure returned as a typed error.
    pub async fn try_fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Polyline, RouteError> {
        let endpoint = self.config.endpoint();
        tracing::debug!(%endpoint, %origin, %destination, "requesting directions");

        let response = self
            .client
            .get(endpoint.as_str())
            .query(&[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()
            .await
            .map_err(RouteError::request)?;
        let status = response.status();
        let body = response.text().await.map_err(RouteError::request)?;

        if !status.is_success() {
            return Err(RouteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let document: DirectionsResponse = serde_json::from_str(&body)?;
        document.into_route()
    }
}

impl<R> RouteProvider for DirectionsClient<R>
where
    R: ErrorReporter + Send + Sync,
{
    fn route_between(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl std::future::Future<Output = Result<Polyline, DecodeError>> + Send {
        self.fetch_route(origin, destination)
    }
}

/// The subset of a directions document the adapter reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub overview_polyline: OverviewPolyline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}

impl DirectionsResponse {
    /// Decodes the first route's overview geometry.
    ///
    /// No routes is a valid, empty result unless the service flagged the
    /// request itself as failed.
    pub fn into_route(self) -> Result<Polyline, RouteError> {
        if let Some(status) = self.status.as_deref() {
            if status != "OK" && status != "ZERO_RESULTS" {
                return Err(RouteError::Api {
                    status: status.to_string(),
                    message: self.error_message,
                });
            }
        }

        let Some(route) = self.routes.into_iter().next() else {
            tracing::warn!("directions response contained no routes");
            return Ok(Polyline::default());
        };

        let decoded = polyline::decode(&route.overview_polyline.points)?;
        tracing::debug!(points = decoded.len(), "decoded overview polyline");
        Ok(decoded)
    }
}
