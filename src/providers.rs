//! Upstream provider factories.

use crate::client::ClientError;
use crate::options::TransportOptions;

/// Trait for upstream providers that can create configured clients.
pub trait Provider {
    /// The client type produced by this provider.
    type Client;

    /// Base URL used when none is configured.
    const BASE_URL: &'static str;

    /// Create a client with a custom base URL and transport options.
    fn create_with_options(
        base_url: String,
        transport_options: TransportOptions,
    ) -> Result<Self::Client, ClientError>;
}

pub mod notification;
pub mod weather;

// Re-export for convenience
pub use notification::{NotificationClient, NotificationService};
pub use weather::{NationalWeatherService, WeatherClient};
