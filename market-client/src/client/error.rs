use thiserror::Error;

use units::{currency::CryptoCurrency, ConversionError};

#[derive(Error, Debug)]
pub enum MarketClientError {
    #[error("MarketClientError - Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("MarketClientError - SerdeJson: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("MarketClientError - UnexpectedResponse: {code:?} - {msg:?}")]
    UnexpectedResponse { msg: String, code: u16 },
    #[error("MarketClientError - MissingQuote: no {0} quote in ticker")]
    MissingQuote(String),
    #[error("MarketClientError - UnlistedCurrency: {0} has no market ticker")]
    UnlistedCurrency(CryptoCurrency),
    #[error("MarketClientError - Conversion: {0}")]
    Conversion(#[from] ConversionError),
}
