use tracing::warn;

use std::cmp::Ordering;

use crate::{
    currency::{CryptoCurrency, STELLAR_DECIMALS},
    error::ConversionError,
    scale::*,
};

use super::price_quote::PriceQuote;

/// EUR to euro cents.
pub const EURO_CENT_DECIMALS: Decimals = Decimals::new(2);

/// Converts `amount` base units of `currency` into euro cents at `price_quote`
/// EUR per divisible unit.
///
/// The product is computed exactly in fictitious units (fractions of a euro
/// cent) and rounded to whole cents once, half to even.
///
/// The fictitious-unit product must fit a `u128` (about 3.4 * 10^38). With
/// 18 decimals (ETH) and a quote carrying 12 fractional digits that caps the
/// amount near 10^5 ETH at a 4-digit price; larger products fail with
/// [`ConversionError::Overflow`] rather than losing digits.
pub fn crypto_amount_to_euro_cents(
    currency: CryptoCurrency,
    amount: u128,
    price_quote: &PriceQuote,
) -> Result<u128, ConversionError> {
    let price_decimals = price_quote.price_decimals();
    let fictitious_units_price = scale_up(price_quote, price_decimals)?;
    let fictitious_units_amount = fictitious_units_price
        .checked_mul(amount)
        .ok_or_else(|| ConversionError::Overflow(format!("{fictitious_units_price} * {amount}")))?;

    let cents_decimals = price_decimals
        .checked_add(currency.decimals())?
        .checked_sub(EURO_CENT_DECIMALS)?;
    let euro_cents = scale_down(fictitious_units_amount, cents_decimals)?;
    let rounded = round_half_to_even(fictitious_units_amount, cents_decimals);
    warn!(
        %currency,
        %price_quote,
        %amount,
        %euro_cents,
        %rounded,
        "precision loss: {} converted to {}",
        euro_cents,
        rounded
    );
    Ok(rounded)
}

/// Converts euro cents into XLM stroops at `price_quote` EUR per XLM,
/// flooring to whole stroops.
///
/// Both scaled operands must fit a `u128`, otherwise
/// [`ConversionError::Overflow`] is returned.
pub fn euro_cents_to_xlm_stroops(
    euro_cents: u128,
    price_quote: &PriceQuote,
) -> Result<u128, ConversionError> {
    if price_quote.is_zero() {
        return Err(ConversionError::ZeroPrice);
    }
    let price_decimals = price_quote.price_decimals();
    let fictitious_units_amount =
        scale_up(euro_cents, STELLAR_DECIMALS.checked_add(price_decimals)?)?;
    let fictitious_units_price =
        scale_up(price_quote, price_decimals.checked_add(EURO_CENT_DECIMALS)?)?;
    let stroops = fictitious_units_amount / fictitious_units_price;
    warn!(
        %euro_cents,
        %price_quote,
        "precision loss: {} / {} = {}",
        fictitious_units_amount,
        fictitious_units_price,
        stroops
    );
    Ok(stroops)
}

/// Converts euro cents into BUL stroops. Exact.
pub fn euro_cents_to_bul_stroops(
    euro_cents: u128,
    bul_stroops_price: u128,
) -> Result<u128, ConversionError> {
    euro_cents
        .checked_mul(bul_stroops_price)
        .ok_or_else(|| ConversionError::Overflow(format!("{euro_cents} * {bul_stroops_price}")))
}

/// Rounds `value / 10^decimals` to an integer, ties to even.
fn round_half_to_even(value: u128, decimals: Decimals) -> u128 {
    let divisor = match 10u128.checked_pow(decimals.value()) {
        Some(divisor) => divisor,
        // any u128 is below half of 10^39
        None => return 0,
    };
    let (quotient, remainder) = (value / divisor, value % divisor);
    match (remainder * 2).cmp(&divisor) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient % 2,
    }
}
