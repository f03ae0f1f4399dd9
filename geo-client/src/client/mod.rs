mod config;
mod geocode_response;

use reqwest::Client as ReqwestClient;
use tracing::{instrument, Level};

use shared::{secret_wrapper, tracing::record_error};

use crate::error::GeodecodingError;

pub use config::*;
pub use geocode_response::*;

secret_wrapper! { ApiKey }

#[derive(Clone, Debug)]
pub struct GeocodingClient {
    client: ReqwestClient,
    config: GeocodingConfig,
}

impl GeocodingClient {
    pub fn new(config: GeocodingConfig) -> Result<Self, GeodecodingError> {
        let client = ReqwestClient::builder().use_rustls_tls().build()?;
        Ok(Self { client, config })
    }

    /// Short country code (e.g. `"UA"`) for `"latitude,longitude"`, or an
    /// empty string when the point lies outside any country.
    #[instrument(
        name = "geocoding_client.country_code",
        skip(self),
        fields(error, error.level, error.message)
    )]
    pub async fn country_code(&self, latlng: &str) -> Result<String, GeodecodingError> {
        record_error(Level::WARN, || async move {
            let mut params = vec![
                ("latlng", latlng),
                ("language", self.config.language.as_str()),
                ("result_type", COUNTRY_RESULT_TYPE),
            ];
            if let Some(key) = &self.config.api_key {
                params.push(("key", key.expose()));
            }
            let response = self
                .client
                .get(&self.config.url)
                .query(&params)
                .send()
                .await?;
            let body = response.text().await?;
            serde_json::from_str::<GeocodeResponse>(&body)?.country_code()
        })
        .await
    }
}
