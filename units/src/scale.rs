use serde::{Deserialize, Serialize};

use std::fmt;

use crate::{amount::IntoDecimalAmount, error::ConversionError};

/// Number of fractional digits between a divisible unit and its base unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimals(u32);

impl Decimals {
    pub const fn new(decimals: u32) -> Self {
        Self(decimals)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    fn width(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Decimals {
    fn from(decimals: u32) -> Self {
        Self(decimals)
    }
}

impl Decimals {
    pub fn checked_add(self, rhs: Self) -> Result<Self, ConversionError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| ConversionError::Overflow(format!("{} + {} decimals", self, rhs)))
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, ConversionError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| ConversionError::Overflow(format!("{} - {} decimals", self, rhs)))
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a divisible amount into base units, keeping the result as a digit
/// string so it is never limited by an integer width.
///
/// Fractional digits beyond `decimals` are truncated, not rounded.
pub fn scale_up_to_string(
    amount: impl IntoDecimalAmount,
    decimals: Decimals,
) -> Result<String, ConversionError> {
    let amount = amount.into_decimal_amount()?;
    let width = decimals.width();
    let fractional_part = amount.fractional_part();
    let fractional_part = format!(
        "{:0<width$}",
        &fractional_part[..fractional_part.len().min(width)]
    );

    // a zero integer part must not leave leading zeros in front of the base units
    let digits = if amount.integer_part() != "0" {
        format!("{}{}", amount.integer_part(), fractional_part)
    } else {
        fractional_part.trim_start_matches('0').to_string()
    };

    if digits.is_empty() {
        return Ok("0".to_string());
    }
    Ok(digits)
}

/// Converts a divisible amount (e.g. `"10.00000001"` BTC) into base units
/// (e.g. `1000000001` satoshi).
pub fn scale_up(amount: impl IntoDecimalAmount, decimals: Decimals) -> Result<u128, ConversionError> {
    let digits = scale_up_to_string(amount, decimals)?;
    digits
        .parse::<u128>()
        .map_err(|_| ConversionError::Overflow(digits))
}

/// Converts an amount of base units into its canonical divisible string.
///
/// The fractional part carries no trailing zeros but always has at least one
/// digit, so `0` becomes `"0.0"`.
pub fn scale_down(amount: impl IntoDecimalAmount, decimals: Decimals) -> Result<String, ConversionError> {
    let amount = amount.into_decimal_amount()?;
    if amount.has_decimal_point() {
        return Err(ConversionError::InvalidAmount(amount.to_string()));
    }
    let digits = amount.integer_part();
    let width = decimals.width();

    let (integer_part, fractional_part) = if digits.len() > width {
        let (integer_part, fractional_part) = digits.split_at(digits.len() - width);
        (integer_part.to_string(), fractional_part.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits))
    };

    let stripped = fractional_part.trim_end_matches('0');
    let fractional_part = if stripped.is_empty() { "0" } else { stripped };
    Ok(format!("{}.{}", integer_part, fractional_part))
}

/// Like [`scale_down`] but returns a native float.
///
/// Values needing more than ~15 significant digits (common with 18 decimals)
/// lose precision here. Prefer [`scale_down`] whenever the result is stored.
pub fn scale_down_f64(amount: impl IntoDecimalAmount, decimals: Decimals) -> Result<f64, ConversionError> {
    let divisible = scale_down(amount, decimals)?;
    divisible
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidAmount(divisible))
}
