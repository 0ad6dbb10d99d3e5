//! Transport and server configuration.

use std::collections::HashMap;
use std::time::Duration;

use crate::providers::{NationalWeatherService, NotificationService, Provider};

/// Transport configuration options.
///
/// Controls how requests are sent over the network.
#[derive(Debug, Clone)]
pub enum TransportOptions {
    /// HTTP transport configuration
    Http {
        /// Request timeout. If None, default client timeout is used.
        timeout: Option<Duration>,
        /// HTTP proxy URL.
        proxy: Option<String>,
        /// Additional HTTP headers to send with every request.
        headers: Option<HashMap<String, String>>,
    },
}

impl Default for TransportOptions {
    fn default() -> Self {
        TransportOptions::Http {
            timeout: None,
            proxy: None,
            headers: None,
        }
    }
}

impl TransportOptions {
    /// Create new default HTTP transport options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, duration: Duration) -> Self {
        match &mut self {
            TransportOptions::Http { timeout, .. } => *timeout = Some(duration),
        }
        self
    }

    /// Set the proxy.
    pub fn with_proxy(mut self, proxy_url: String) -> Self {
        match &mut self {
            TransportOptions::Http { proxy, .. } => *proxy = Some(proxy_url),
        }
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: String, value: String) -> Self {
        match &mut self {
            TransportOptions::Http { headers, .. } => {
                headers.get_or_insert_with(HashMap::new).insert(key, value);
            }
        }
        self
    }
}

/// Process-wide configuration, fixed at startup and shared read-only by every
/// tool invocation.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the weather provider.
    pub weather_base_url: String,
    /// Base URL of the notification and price provider.
    pub notification_base_url: String,
    /// Transport options applied to both providers.
    pub transport: TransportOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            weather_base_url: NationalWeatherService::BASE_URL.to_string(),
            notification_base_url: NotificationService::BASE_URL.to_string(),
            transport: TransportOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Replace the weather provider base URL.
    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    /// Replace the notification provider base URL.
    pub fn with_notification_base_url(mut self, url: impl Into<String>) -> Self {
        self.notification_base_url = url.into();
        self
    }

    /// Replace the transport options.
    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }
}
