//! Rendering of provider data into the text blocks returned by each tool.
//!
//! Nothing in here can fail: absent or empty fields fall back to fixed
//! placeholders, and every tool reply is exactly one text content block.

use itertools::Itertools;
use rmcp::model::{CallToolResult, Content};

use crate::api::notification::{LatestTokenPriceResponse, UserNotification, UserNotificationsResponse};
use crate::api::weather::{AlertProperties, AlertsResponse, ForecastPeriod};
use crate::client::ClientError;

const UNKNOWN: &str = "Unknown";
const SEPARATOR: &str = "---";

pub const ALERTS_UNAVAILABLE: &str = "Failed to retrieve alerts data";
pub const FORECAST_URL_MISSING: &str = "Failed to get forecast URL from grid point data";
pub const FORECAST_UNAVAILABLE: &str = "Failed to retrieve forecast data";
pub const NO_FORECAST_PERIODS: &str = "No forecast periods available";

/// Wrap rendered text as a tool reply with a single text block.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// Five labelled lines and a separator.
pub fn format_alert(props: &AlertProperties) -> String {
    [
        format!("Event: {}", or_placeholder(&props.event, UNKNOWN)),
        format!("Area: {}", or_placeholder(&props.area_desc, UNKNOWN)),
        format!("Severity: {}", or_placeholder(&props.severity, UNKNOWN)),
        format!("Status: {}", or_placeholder(&props.status, UNKNOWN)),
        format!("Headline: {}", or_placeholder(&props.headline, "No headline")),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Reply for `get-alerts`. `alerts` is `None` when the provider call failed.
pub fn format_alerts(state: &str, alerts: Option<&AlertsResponse>) -> String {
    let Some(alerts) = alerts else {
        return ALERTS_UNAVAILABLE.to_string();
    };

    if alerts.features.is_empty() {
        return format!("No active alerts for {state}");
    }

    let body = alerts
        .features
        .iter()
        .map(|feature| format_alert(&feature.properties))
        .join("\n");
    format!("Active alerts for {state}:\n\n{body}")
}

pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    [
        format!("{}:", or_placeholder(&period.name, UNKNOWN)),
        format!(
            "Temperature: {}°{}",
            temperature,
            or_placeholder(&period.temperature_unit, "F")
        ),
        format!(
            "Wind: {} {}",
            or_placeholder(&period.wind_speed, UNKNOWN),
            or_placeholder(&period.wind_direction, "")
        ),
        or_placeholder(&period.short_forecast, "No forecast available").to_string(),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Reply for a successful forecast fetch.
pub fn format_forecast(latitude: f64, longitude: f64, periods: &[ForecastPeriod]) -> String {
    if periods.is_empty() {
        return NO_FORECAST_PERIODS.to_string();
    }

    let body = periods.iter().map(format_period).join("\n");
    format!("Forecast for {latitude}, {longitude}:\n\n{body}")
}

/// Reply when the grid lookup for a coordinate fails.
pub fn grid_point_unavailable(latitude: f64, longitude: f64) -> String {
    format!(
        "Failed to retrieve grid point data for coordinates: {latitude}, {longitude}. \
         This location may not be supported by the NWS API (only US locations are supported)."
    )
}

/// Reply for `register-notification`.
pub fn format_registration(result: &Result<String, ClientError>) -> String {
    match result {
        Ok(body) => format!("Notification registered successfully: {body}"),
        Err(e) => format!("Failed to register notification: {e}"),
    }
}

pub fn format_notification(index: usize, notification: &UserNotification) -> String {
    let condition = notification
        .condition
        .map(|c| c.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    format!(
        "#{} - Token: {}, Target: {}, Condition: {}",
        index + 1,
        or_placeholder(&notification.token, UNKNOWN),
        or_placeholder(&notification.target_price, UNKNOWN),
        condition
    )
}

/// Reply for `get-user-notifications`.
pub fn format_user_notifications(
    session_id: &str,
    result: &Result<UserNotificationsResponse, ClientError>,
) -> String {
    let response = match result {
        Ok(response) => response,
        Err(e) => return format!("Failed to retrieve notifications: {e}"),
    };

    match response.user_notifications.as_deref() {
        Some(list) if !list.is_empty() => {
            let lines = list
                .iter()
                .enumerate()
                .map(|(i, n)| format_notification(i, n))
                .join("\n");
            format!("Notifications for session {session_id}:\n{lines}")
        }
        _ => format!("No notifications found for session {session_id}"),
    }
}

/// Reply for `get-latest-token-price`.
pub fn format_token_prices(result: &Result<LatestTokenPriceResponse, ClientError>) -> String {
    match result {
        Ok(response) => match serde_json::to_string_pretty(&response.latest_token_prices) {
            Ok(json) => format!("Latest token prices:\n{json}"),
            Err(e) => format!("Failed to retrieve latest token prices: {e}"),
        },
        Err(e) => format!("Failed to retrieve latest token prices: {e}"),
    }
}
