//! Tool input contracts.
//!
//! Constraints are declared once with `#[validate(...)]`: schemars publishes
//! them in the tool's input schema and [`validated`] enforces them before a
//! handler runs.

use rmcp::ErrorData as McpError;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct GetAlertsArgs {
    /// Two-letter state code (e.g. CA, NY)
    #[validate(length(equal = 2))]
    #[schemars(description = "Two-letter state code (e.g. CA, NY)")]
    pub state: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct GetForecastArgs {
    #[validate(range(min = -90.0, max = 90.0))]
    #[schemars(description = "Latitude of the location")]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[schemars(description = "Longitude of the location")]
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct RegisterNotificationArgs {
    #[schemars(description = "Session the alert belongs to")]
    pub session_id: String,
    #[schemars(description = "Token symbol to watch (e.g. BTC)")]
    pub token: String,
    #[serde(rename = "targetPrice")]
    #[schemars(description = "Price that triggers the notification")]
    pub target_price: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct GetUserNotificationsArgs {
    #[schemars(description = "Session whose alerts should be listed")]
    pub session_id: String,
}

/// Reject arguments that break their declared constraints.
pub fn validated<T: Validate>(args: T) -> Result<T, McpError> {
    args.validate()
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))?;
    Ok(args)
}
