use tracing::instrument;

use crate::{currency::CryptoCurrency, error::ConversionError};

use super::{convert::*, price_quote::PriceQuote, traits::PriceQuoteProvider};

pub const EUR: &str = "EUR";

/// Fetches EUR quotes from a provider (or derives them for BUL) and applies
/// the exact fiat conversions.
pub struct FiatConverter<P> {
    provider: P,
    bul_stroops_price: u64,
}

impl<P: PriceQuoteProvider> FiatConverter<P> {
    pub fn new(provider: P, bul_stroops_price: u64) -> Self {
        Self {
            provider,
            bul_stroops_price,
        }
    }

    pub async fn eur_price_quote(&self, currency: CryptoCurrency) -> Result<PriceQuote, ConversionError> {
        match currency {
            CryptoCurrency::Bul => PriceQuote::from_bul_stroops_price(self.bul_stroops_price),
            _ => self
                .provider
                .price_quote(currency, EUR)
                .await
                .map_err(|e| ConversionError::PriceProvider(Box::new(e))),
        }
    }

    #[instrument(name = "fiat_converter.crypto_amount_to_euro_cents", skip(self), err)]
    pub async fn crypto_amount_to_euro_cents(
        &self,
        currency: CryptoCurrency,
        amount: u128,
    ) -> Result<u128, ConversionError> {
        let price_quote = self.eur_price_quote(currency).await?;
        crypto_amount_to_euro_cents(currency, amount, &price_quote)
    }

    #[instrument(name = "fiat_converter.euro_cents_to_xlm_stroops", skip(self), err)]
    pub async fn euro_cents_to_xlm_stroops(&self, euro_cents: u128) -> Result<u128, ConversionError> {
        let price_quote = self.eur_price_quote(CryptoCurrency::Xlm).await?;
        euro_cents_to_xlm_stroops(euro_cents, &price_quote)
    }

    pub fn euro_cents_to_bul_stroops(&self, euro_cents: u128) -> Result<u128, ConversionError> {
        euro_cents_to_bul_stroops(euro_cents, u128::from(self.bul_stroops_price))
    }

    /// Euro cents to stroops of a stellar currency (XLM or BUL).
    pub async fn euro_cents_to_stroops(
        &self,
        currency: CryptoCurrency,
        euro_cents: u128,
    ) -> Result<u128, ConversionError> {
        match currency {
            CryptoCurrency::Xlm => self.euro_cents_to_xlm_stroops(euro_cents).await,
            CryptoCurrency::Bul => self.euro_cents_to_bul_stroops(euro_cents),
            _ => Err(ConversionError::UnsupportedCurrency(currency.to_string())),
        }
    }
}
