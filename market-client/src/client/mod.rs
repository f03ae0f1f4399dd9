mod config;
mod error;
mod market_response;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, Level};

use shared::tracing::record_error;
use units::{
    currency::CryptoCurrency,
    fiat::{PriceQuote, PriceQuoteProvider},
};

pub use config::*;
pub use error::*;
use market_response::*;

#[derive(Clone, Debug)]
pub struct MarketClient {
    client: ReqwestClient,
    config: MarketClientConfig,
}

impl MarketClient {
    pub fn new(config: MarketClientConfig) -> Result<Self, MarketClientError> {
        let client = ReqwestClient::builder()
            .use_rustls_tls()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Price of one unit of ticker `id` in the `convert` currency, with every
    /// digit the provider sent.
    #[instrument(
        name = "market_client.ticker_price",
        skip(self),
        fields(error, error.level, error.message)
    )]
    pub async fn ticker_price(&self, id: u32, convert: &str) -> Result<Decimal, MarketClientError> {
        record_error(Level::WARN, || async move {
            let response = self
                .client
                .get(self.url_for_ticker(id))
                .query(&[("convert", convert)])
                .send()
                .await?;
            let ticker = Self::extract_response_data::<TickerData>(response).await?;
            let price = ticker.price_in(convert)?;
            debug!(symbol = %ticker.symbol, %price, "received ticker");
            Ok::<_, MarketClientError>(price)
        })
        .await
    }

    fn url_for_ticker(&self, id: u32) -> String {
        format!("{}/ticker/{}/", self.config.url.trim_end_matches('/'), id)
    }

    async fn extract_response_data<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, MarketClientError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MarketClientError::UnexpectedResponse {
                msg: body,
                code: status.as_u16(),
            });
        }
        let MarketResponse { data } = serde_json::from_str::<MarketResponse<T>>(&body)?;
        Ok(data)
    }
}

#[async_trait]
impl PriceQuoteProvider for MarketClient {
    type Error = MarketClientError;

    async fn price_quote(
        &self,
        currency: CryptoCurrency,
        fiat: &str,
    ) -> Result<PriceQuote, Self::Error> {
        let id = currency
            .market_id()
            .ok_or(MarketClientError::UnlistedCurrency(currency))?;
        let price = self.ticker_price(id, fiat).await?;
        Ok(PriceQuote::try_from(price)?)
    }
}
