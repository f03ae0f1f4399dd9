use rust_decimal::Decimal;

use std::{fmt, str::FromStr};

use crate::{
    amount::{DecimalAmount, IntoDecimalAmount},
    currency::STELLAR_DECIMALS,
    error::ConversionError,
    scale::Decimals,
};

/// Fiat units per one divisible crypto unit, e.g. `"5862.1234"` EUR per BTC.
///
/// Keeps the exact text of the quote: its number of fractional digits drives
/// the precision of every conversion made with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceQuote(DecimalAmount);

impl PriceQuote {
    pub fn price_decimals(&self) -> Decimals {
        Decimals::new(self.0.fractional_part().len() as u32)
    }

    pub fn amount(&self) -> &DecimalAmount {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.integer_part() == "0" && self.0.fractional_part().bytes().all(|b| b == b'0')
    }

    /// Synthetic EUR quote for BUL derived from its stroops price:
    /// `bul_stroops_price * 100 / 10^7`, computed exactly.
    pub fn from_bul_stroops_price(bul_stroops_price: u64) -> Result<Self, ConversionError> {
        let price = Decimal::try_from_i128_with_scale(
            i128::from(bul_stroops_price) * 100,
            STELLAR_DECIMALS.value(),
        )?;
        Self::try_from(price.normalize())
    }
}

impl FromStr for PriceQuote {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl TryFrom<Decimal> for PriceQuote {
    type Error = ConversionError;

    fn try_from(price: Decimal) -> Result<Self, Self::Error> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ConversionError::InvalidAmount(price.to_string()));
        }
        price.abs().to_string().parse()
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoDecimalAmount for &PriceQuote {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        Ok(self.0.clone())
    }
}
