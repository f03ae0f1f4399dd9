use async_trait::async_trait;

use crate::currency::CryptoCurrency;

use super::price_quote::PriceQuote;

#[async_trait]
pub trait PriceQuoteProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Price of one divisible unit of `currency` expressed in `fiat`.
    async fn price_quote(
        &self,
        currency: CryptoCurrency,
        fiat: &str,
    ) -> Result<PriceQuote, Self::Error>;
}


#[cfg(test)]
pub use dummy_impls::*;
