use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("ConversionError - InvalidType: only strings and integers can be converted, got {0}")]
    InvalidType(&'static str),
    #[error("ConversionError - InvalidAmount: {0:?}")]
    InvalidAmount(String),
    #[error("ConversionError - UnsupportedCurrency: {0} (must be BTC, ETH, XLM or BUL)")]
    UnsupportedCurrency(String),
    #[error("ConversionError - Overflow: {0} does not fit into 128 bits")]
    Overflow(String),
    #[error("ConversionError - ZeroPrice: cannot divide by a zero price quote")]
    ZeroPrice,
    #[error("ConversionError - Decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),
    #[error("ConversionError - PriceProvider: {0}")]
    PriceProvider(#[source] Box<dyn std::error::Error + Send + Sync>),
}
