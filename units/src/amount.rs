use serde_json::Value;

use std::{fmt, str::FromStr};

use crate::error::ConversionError;

pub const DECIMAL_POINT: char = '.';

/// A non-negative decimal quantity such as `"10.00000001"` or `1000000001`.
///
/// The integer part is kept without leading zeros (`"0"` for zero). The
/// fractional part is kept verbatim, trailing zeros included, because
/// scaling relies on its exact digit count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecimalAmount {
    integer_part: String,
    fractional_part: Option<String>,
}

impl DecimalAmount {
    pub fn integer_part(&self) -> &str {
        &self.integer_part
    }

    /// Digits after the decimal point, empty when there is no point.
    pub fn fractional_part(&self) -> &str {
        self.fractional_part.as_deref().unwrap_or("")
    }

    pub fn has_decimal_point(&self) -> bool {
        self.fractional_part.is_some()
    }

    fn from_digits(digits: String) -> Self {
        let integer_part = match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            integer_part,
            fractional_part: None,
        }
    }
}

impl FromStr for DecimalAmount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (integer_part, fractional_part) = match s.split_once(DECIMAL_POINT) {
            Some((integer_part, fractional_part)) => (integer_part, Some(fractional_part)),
            None => (s, None),
        };
        // a second point lands in the fractional part and fails the digit check
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(integer_part) || !fractional_part.map_or(true, is_digits) {
            return Err(ConversionError::InvalidAmount(s.to_string()));
        }
        if integer_part.is_empty() && fractional_part.map_or(true, str::is_empty) {
            return Err(ConversionError::InvalidAmount(s.to_string()));
        }

        let mut amount = Self::from_digits(integer_part.to_string());
        amount.fractional_part = fractional_part.map(str::to_string);
        Ok(amount)
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fractional_part {
            Some(fractional_part) => write!(f, "{}.{}", self.integer_part, fractional_part),
            None => write!(f, "{}", self.integer_part),
        }
    }
}

macro_rules! unsigned_amount {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DecimalAmount {
                fn from(value: $ty) -> Self {
                    Self::from_digits(value.to_string())
                }
            }
        )*
    };
}

unsigned_amount! { u8, u16, u32, u64, u128, usize }

impl TryFrom<&Value> for DecimalAmount {
    type Error = ConversionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => {
                if let Some(n) = n.as_u64() {
                    return Ok(Self::from(n));
                }
                if n.is_i64() {
                    return Err(ConversionError::InvalidType("negative integer"));
                }
                // integers wider than u64 only survive with arbitrary precision numbers
                let text = n.to_string();
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    Ok(Self::from_digits(text))
                } else {
                    Err(ConversionError::InvalidType("float"))
                }
            }
            Value::Bool(_) => Err(ConversionError::InvalidType("bool")),
            Value::Null => Err(ConversionError::InvalidType("null")),
            Value::Array(_) => Err(ConversionError::InvalidType("array")),
            Value::Object(_) => Err(ConversionError::InvalidType("object")),
        }
    }
}

/// Anything the scaling functions accept as an amount.
pub trait IntoDecimalAmount {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError>;
}

impl IntoDecimalAmount for DecimalAmount {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        Ok(self)
    }
}

impl IntoDecimalAmount for &DecimalAmount {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        Ok(self.clone())
    }
}

impl IntoDecimalAmount for &str {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        self.parse()
    }
}

impl IntoDecimalAmount for String {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        self.parse()
    }
}

impl IntoDecimalAmount for &String {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        self.parse()
    }
}

impl IntoDecimalAmount for &Value {
    fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
        DecimalAmount::try_from(self)
    }
}

macro_rules! unsigned_into_amount {
    ($($ty:ty),*) => {
        $(
            impl IntoDecimalAmount for $ty {
                fn into_decimal_amount(self) -> Result<DecimalAmount, ConversionError> {
                    Ok(DecimalAmount::from(self))
                }
            }
        )*
    };
}

unsigned_into_amount! { u8, u16, u32, u64, u128, usize }
