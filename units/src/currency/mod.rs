use serde::{Deserialize, Serialize};

use std::{fmt, str::FromStr};

use crate::{amount::IntoDecimalAmount, error::ConversionError, scale::*};

pub const BTC_DECIMALS: Decimals = Decimals::new(8);
pub const ETH_DECIMALS: Decimals = Decimals::new(18);
pub const STELLAR_DECIMALS: Decimals = Decimals::new(7);

macro_rules! currency_units {
    ($to_base:ident, $from_base:ident, $decimals:ident, $unit:literal, $base_unit:literal) => {
        #[doc = concat!("Converts ", $unit, " into ", $base_unit, ".")]
        pub fn $to_base(amount: impl IntoDecimalAmount) -> Result<u128, ConversionError> {
            scale_up(amount, $decimals)
        }

        #[doc = concat!("Converts ", $base_unit, " into ", $unit, ".")]
        pub fn $from_base(amount: impl IntoDecimalAmount) -> Result<String, ConversionError> {
            scale_down(amount, $decimals)
        }
    };
}

currency_units! { btc_to_satoshi, satoshi_to_btc, BTC_DECIMALS, "bitcoin", "satoshi" }
currency_units! { eth_to_wei, wei_to_eth, ETH_DECIMALS, "ether", "wei" }
currency_units! { units_to_stroops, stroops_to_units, STELLAR_DECIMALS, "stellar units", "stroops" }

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CryptoCurrency {
    Btc,
    Eth,
    Xlm,
    Bul,
}

impl CryptoCurrency {
    pub fn code(&self) -> &'static str {
        match self {
            CryptoCurrency::Btc => "BTC",
            CryptoCurrency::Eth => "ETH",
            CryptoCurrency::Xlm => "XLM",
            CryptoCurrency::Bul => "BUL",
        }
    }

    pub fn decimals(&self) -> Decimals {
        match self {
            CryptoCurrency::Btc => BTC_DECIMALS,
            CryptoCurrency::Eth => ETH_DECIMALS,
            CryptoCurrency::Xlm | CryptoCurrency::Bul => STELLAR_DECIMALS,
        }
    }

    /// Ticker id on the market data provider. BUL is not listed.
    pub fn market_id(&self) -> Option<u32> {
        match self {
            CryptoCurrency::Btc => Some(1),
            CryptoCurrency::Eth => Some(1027),
            CryptoCurrency::Xlm => Some(512),
            CryptoCurrency::Bul => None,
        }
    }

    pub fn to_base_units(&self, amount: impl IntoDecimalAmount) -> Result<u128, ConversionError> {
        scale_up(amount, self.decimals())
    }

    pub fn from_base_units(&self, amount: impl IntoDecimalAmount) -> Result<String, ConversionError> {
        scale_down(amount, self.decimals())
    }
}

impl FromStr for CryptoCurrency {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" => Ok(CryptoCurrency::Btc),
            "ETH" => Ok(CryptoCurrency::Eth),
            "XLM" => Ok(CryptoCurrency::Xlm),
            "BUL" => Ok(CryptoCurrency::Bul),
            _ => Err(ConversionError::UnsupportedCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for CryptoCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
