//! Local price notification service provider.

pub use crate::api::notification::NotificationClient;
use crate::client::ClientError;
use crate::options::TransportOptions;
use crate::providers::Provider;

pub struct NotificationService;

impl Provider for NotificationService {
    type Client = NotificationClient;

    const BASE_URL: &'static str = "http://localhost:3001";

    fn create_with_options(
        base_url: String,
        transport_options: TransportOptions,
    ) -> Result<Self::Client, ClientError> {
        NotificationClient::new(base_url, transport_options)
    }
}
