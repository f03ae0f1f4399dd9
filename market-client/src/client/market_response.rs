use rust_decimal::Decimal;
use serde::Deserialize;

use std::collections::HashMap;

use super::MarketClientError;

#[derive(Deserialize, Debug)]
pub struct MarketResponse<T> {
    pub data: T,
}

#[derive(Deserialize, Debug)]
pub struct TickerData {
    pub symbol: String,
    pub quotes: HashMap<String, QuoteData>,
}

#[derive(Deserialize, Debug)]
pub struct QuoteData {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl TickerData {
    pub fn price_in(&self, convert: &str) -> Result<Decimal, MarketClientError> {
        self.quotes
            .get(convert)
            .map(|quote| quote.price)
            .ok_or_else(|| MarketClientError::MissingQuote(convert.to_string()))
    }
}
