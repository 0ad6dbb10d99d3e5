//! National Weather Service API client.
//!
//! Every failure on this side (transport, non-2xx status, undecodable body) is
//! logged and collapsed to `None`. Callers turn `None` into a generic
//! "failed to retrieve" message; nothing here propagates an error.

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError};
use tracing::warn;

use crate::client::ClientError;
use crate::http::{add_extra_headers, build_http_client, ResponseExt};
use crate::options::TransportOptions;

pub const WEATHER_USER_AGENT: &str = "weather-app/1.0";
pub const GEO_JSON: &str = "application/geo+json";

/// `GET /alerts` response.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlertsResponse {
    #[serde_as(as = "DefaultOnError")]
    pub features: Vec<AlertFeature>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlertFeature {
    #[serde_as(as = "DefaultOnError")]
    pub properties: AlertProperties,
}

/// Alert fields we render. Any of them may be missing or malformed upstream.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertProperties {
    #[serde_as(as = "DefaultOnError")]
    pub event: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub area_desc: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub severity: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub status: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub headline: Option<String>,
}

/// `GET /points/{lat},{lon}` response.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PointsResponse {
    #[serde_as(as = "DefaultOnError")]
    pub properties: PointsProperties,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PointsProperties {
    /// Absolute URL of the grid forecast for this point.
    #[serde_as(as = "DefaultOnError")]
    pub forecast: Option<String>,
}

/// Grid forecast response.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastResponse {
    #[serde_as(as = "DefaultOnError")]
    pub properties: ForecastProperties,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastProperties {
    #[serde_as(as = "DefaultOnError")]
    pub periods: Vec<ForecastPeriod>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub temperature: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    pub temperature_unit: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub wind_speed: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub wind_direction: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub short_forecast: Option<String>,
}

/// Client for the weather provider.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    http: reqwest::Client,
    transport_options: TransportOptions,
}

impl WeatherClient {
    /// Create a new client.
    pub fn new(base_url: String, transport_options: TransportOptions) -> Result<Self, ClientError> {
        let http = build_http_client(&transport_options)?;
        Ok(Self {
            base_url,
            http,
            transport_options,
        })
    }

    /// Grid lookup URL for a coordinate, both parts fixed to 4 decimals.
    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{:.4},{:.4}", self.base_url, latitude, longitude)
    }

    /// Active alerts for an (already upper-cased) state code.
    pub async fn alerts(&self, state: &str) -> Option<AlertsResponse> {
        let url = format!("{}/alerts", self.base_url);
        self.fetch(&url, &[("area", state)]).await
    }

    /// Resolve a coordinate to its grid resource.
    pub async fn points(&self, latitude: f64, longitude: f64) -> Option<PointsResponse> {
        let url = self.points_url(latitude, longitude);
        self.fetch(&url, &[]).await
    }

    /// Fetch forecast periods from a URL handed out by [`WeatherClient::points`].
    pub async fn forecast(&self, forecast_url: &str) -> Option<ForecastResponse> {
        self.fetch(forecast_url, &[]).await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Option<T> {
        match self.try_fetch(url, query).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(url, status = ?e.status(), "Error making NWS request: {}", e);
                None
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let mut req = self
            .http
            .get(url)
            .header(USER_AGENT, WEATHER_USER_AGENT)
            .header(ACCEPT, GEO_JSON);

        if !query.is_empty() {
            req = req.query(query);
        }
        req = add_extra_headers(req, &self.transport_options);

        let response = req.send().await?.error_for_status_logged()?;
        response.json_logged().await
    }
}
