//! The MCP server: tool registration and per-tool handlers.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use tracing::{debug, info};

use crate::client::ClientError;
use crate::format;
use crate::options::ServerConfig;
use crate::providers::{
    NationalWeatherService, NotificationClient, NotificationService, Provider, WeatherClient,
};
use crate::tools::{
    validated, GetAlertsArgs, GetForecastArgs, GetUserNotificationsArgs, RegisterNotificationArgs,
};

pub const SERVER_NAME: &str = "alertdesk";

const INSTRUCTIONS: &str = "Weather and token price alerts.\n\n\
     Tools:\n\
     - get-alerts: active weather alerts for a two-letter US state code\n\
     - get-forecast: forecast for a latitude/longitude (US locations only)\n\
     - register-notification: create a token price alert for a session\n\
     - get-user-notifications: list the price alerts of a session\n\
     - get-latest-token-price: current token price snapshot\n";

/// Tool server. Holds only immutable clients, so clones are cheap and
/// invocations never share mutable state.
#[derive(Debug, Clone)]
pub struct AlertDesk {
    weather: WeatherClient,
    notifications: NotificationClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AlertDesk {
    /// Build the server from process configuration.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let weather = NationalWeatherService::create_with_options(
            config.weather_base_url.clone(),
            config.transport.clone(),
        )?;
        let notifications = NotificationService::create_with_options(
            config.notification_base_url.clone(),
            config.transport.clone(),
        )?;
        Ok(Self::with_clients(weather, notifications))
    }

    pub fn with_clients(weather: WeatherClient, notifications: NotificationClient) -> Self {
        Self {
            weather,
            notifications,
            tool_router: Self::tool_router(),
        }
    }

    /// Descriptors of every registered tool.
    pub fn tools(&self) -> Vec<rmcp::model::Tool> {
        self.tool_router.list_all()
    }

    #[tool(name = "get-alerts", description = "Get weather alerts for a state")]
    pub async fn get_alerts(
        &self,
        Parameters(args): Parameters<GetAlertsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let args = validated(args)?;
        let state = args.state.to_uppercase();
        info!(state = %state, "get-alerts");

        let alerts = self.weather.alerts(&state).await;
        Ok(format::text_result(format::format_alerts(&state, alerts.as_ref())))
    }

    #[tool(name = "get-forecast", description = "Get weather forecast for a location")]
    pub async fn get_forecast(
        &self,
        Parameters(args): Parameters<GetForecastArgs>,
    ) -> Result<CallToolResult, McpError> {
        let GetForecastArgs {
            latitude,
            longitude,
        } = validated(args)?;
        info!(latitude, longitude, "get-forecast");

        let Some(points) = self.weather.points(latitude, longitude).await else {
            return Ok(format::text_result(format::grid_point_unavailable(
                latitude, longitude,
            )));
        };

        let Some(forecast_url) = points.properties.forecast.filter(|u| !u.is_empty()) else {
            return Ok(format::text_result(format::FORECAST_URL_MISSING));
        };
        debug!(%forecast_url, "resolved grid forecast");

        let Some(forecast) = self.weather.forecast(&forecast_url).await else {
            return Ok(format::text_result(format::FORECAST_UNAVAILABLE));
        };

        Ok(format::text_result(format::format_forecast(
            latitude,
            longitude,
            &forecast.properties.periods,
        )))
    }

    #[tool(
        name = "register-notification",
        description = "Register a token price notification for a session"
    )]
    pub async fn register_notification(
        &self,
        Parameters(args): Parameters<RegisterNotificationArgs>,
    ) -> Result<CallToolResult, McpError> {
        let args = validated(args)?;
        info!(session_id = %args.session_id, token = %args.token, "register-notification");

        let result = self
            .notifications
            .register(&args.session_id, &args.token, &args.target_price)
            .await;
        Ok(format::text_result(format::format_registration(&result)))
    }

    #[tool(
        name = "get-user-notifications",
        description = "List the token price notifications registered for a session"
    )]
    pub async fn get_user_notifications(
        &self,
        Parameters(args): Parameters<GetUserNotificationsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let args = validated(args)?;
        info!(session_id = %args.session_id, "get-user-notifications");

        let result = self.notifications.user_notifications(&args.session_id).await;
        if let Ok(response) = &result {
            if let Some(message) = &response.message {
                debug!("notification service says: {}", message);
            }
        }
        Ok(format::text_result(format::format_user_notifications(
            &args.session_id,
            &result,
        )))
    }

    #[tool(
        name = "get-latest-token-price",
        description = "Get the latest token price snapshot"
    )]
    pub async fn get_latest_token_price(&self) -> Result<CallToolResult, McpError> {
        info!("get-latest-token-price");

        let result = self.notifications.latest_token_prices().await;
        Ok(format::text_result(format::format_token_prices(&result)))
    }
}

#[tool_handler]
impl ServerHandler for AlertDesk {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}
