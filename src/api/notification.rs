//! Client for the local price notification service.
//!
//! Unlike the weather client, failures here are returned to the caller so the
//! tool can embed the error detail in its reply.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};

use crate::client::ClientError;
use crate::http::{add_extra_headers, build_http_client, RequestBuilderExt, ResponseExt};
use crate::options::TransportOptions;

/// Direction a price must cross for a notification to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Above,
    Below,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Above => f.write_str("above"),
            Condition::Below => f.write_str("below"),
        }
    }
}

/// Body of `POST /api/notification`.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationRequest<'a> {
    pub session_id: &'a str,
    pub token: &'a str,
    #[serde(rename = "targetPrice")]
    pub target_price: &'a str,
}

/// One stored price alert. A missing or mistyped field decodes as `None`
/// so a single bad entry cannot hide the rest of the list.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserNotification {
    pub id: Value,
    #[serde_as(as = "DefaultOnError")]
    pub session_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub token: Option<String>,
    #[serde(rename = "targetPrice")]
    #[serde_as(as = "DefaultOnError")]
    pub target_price: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub condition: Option<Condition>,
}

/// `GET /api/userNotification` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNotificationsResponse {
    #[serde(default)]
    pub user_notifications: Option<Vec<UserNotification>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/latestTokenPrice` response. The snapshot is passed through as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestTokenPriceResponse {
    #[serde(default)]
    pub latest_token_prices: Value,
}

/// Client for the notification and price provider.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    base_url: String,
    http: reqwest::Client,
    transport_options: TransportOptions,
}

impl NotificationClient {
    /// Create a new client.
    pub fn new(base_url: String, transport_options: TransportOptions) -> Result<Self, ClientError> {
        let http = build_http_client(&transport_options)?;
        Ok(Self {
            base_url,
            http,
            transport_options,
        })
    }

    /// Create a price alert. Returns the raw response body whatever the status.
    pub async fn register(
        &self,
        session_id: &str,
        token: &str,
        target_price: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/api/notification", self.base_url);
        let body = NotificationRequest {
            session_id,
            token,
            target_price,
        };

        let mut req = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json");
        req = add_extra_headers(req, &self.transport_options);

        let response = req.json_logged(&body).send().await?;
        response.text_logged().await
    }

    /// List the price alerts registered for a session.
    pub async fn user_notifications(
        &self,
        session_id: &str,
    ) -> Result<UserNotificationsResponse, ClientError> {
        let url = format!("{}/api/userNotification", self.base_url);

        let mut req = self
            .http
            .get(&url)
            .query(&[("session_id", session_id)])
            .header(CONTENT_TYPE, "application/json");
        req = add_extra_headers(req, &self.transport_options);

        let response = req.send().await?.error_for_status_logged()?;
        response.json_logged().await
    }

    /// Fetch the current token price snapshot.
    pub async fn latest_token_prices(&self) -> Result<LatestTokenPriceResponse, ClientError> {
        let url = format!("{}/api/latestTokenPrice", self.base_url);

        let mut req = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        req = add_extra_headers(req, &self.transport_options);

        let response = req.send().await?.error_for_status_logged()?;
        response.json_logged().await
    }
}
