//! National Weather Service provider.

pub use crate::api::weather::WeatherClient;
use crate::client::ClientError;
use crate::options::TransportOptions;
use crate::providers::Provider;

pub struct NationalWeatherService;

impl Provider for NationalWeatherService {
    type Client = WeatherClient;

    const BASE_URL: &'static str = "https://api.weather.gov";

    fn create_with_options(
        base_url: String,
        transport_options: TransportOptions,
    ) -> Result<Self::Client, ClientError> {
        WeatherClient::new(base_url, transport_options)
    }
}
