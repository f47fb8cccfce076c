//! Shared numeric primitives used by every scenario calculator.
//!
//! - [`NumericInput`] accepts a number or a text amount such as `"1,185.50"`
//! - [`percent_to_fraction`] turns `17.5` into `0.175`
//! - [`Precision`] and [`round_half_up`] quantize results for presentation

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

use super::error::CalculationError;

/// A numeric field as supplied by a caller: either an exact decimal or
/// free text that still has to pass the amount grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericInput {
    Number(Decimal),
    Text(String),
}

impl NumericInput {
    /// Resolve the input to a finite decimal.
    ///
    /// Text must match:
    ///
    /// ```text
    /// number  := sign? body
    /// body    := integer ( "." digits? )? | "." digits
    /// integer := digit ( digit | "," digit )*
    /// ```
    ///
    /// Surrounding whitespace is ignored and grouping commas are dropped.
    pub fn parse(&self, field: &'static str) -> Result<Decimal, CalculationError> {
        match self {
            NumericInput::Number(value) => Ok(normalize_zero(*value)),
            NumericInput::Text(text) => parse_amount_text(text)
                .ok_or_else(|| CalculationError::invalid_input(field, text.as_str())),
        }
    }

    /// Parse the input as a percentage and convert it to a fraction
    pub fn parse_rate(&self, field: &'static str) -> Result<Decimal, CalculationError> {
        self.parse(field).map(percent_to_fraction)
    }

    fn from_json_number(number: &Number) -> Self {
        let text = number.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map(NumericInput::Number)
            .unwrap_or(NumericInput::Text(text))
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(value) => write!(f, "{}", value),
            NumericInput::Text(text) => write!(f, "{:?}", text),
        }
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything that is not a number or a string is kept as text so the
        // calculator can reject it with the field name attached.
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => NumericInput::from_json_number(&number),
            Value::String(text) => NumericInput::Text(text),
            other => NumericInput::Text(other.to_string()),
        })
    }
}

/// Parse a text amount according to the grammar on [`NumericInput::parse`].
///
/// Returns `None` for anything outside the grammar or outside the range
/// of a 96-bit decimal.
pub fn parse_amount_text(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };

    if !fraction.map_or(true, |digits| digits.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let integer_digits = if integer.is_empty() {
        // ".5" is fine, "." and "" are not
        if fraction.map_or(true, str::is_empty) {
            return None;
        }
        "0".to_string()
    } else if is_grouped_integer(integer) {
        integer.replace(',', "")
    } else {
        return None;
    };

    let cleaned = match fraction {
        Some(digits) if !digits.is_empty() => format!("{}{}.{}", sign, integer_digits, digits),
        _ => format!("{}{}", sign, integer_digits),
    };

    Decimal::from_str(&cleaned).ok().map(normalize_zero)
}

fn is_grouped_integer(integer: &str) -> bool {
    let bytes = integer.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_digit()
                && last.is_ascii_digit()
                && bytes.iter().all(|b| b.is_ascii_digit() || *b == b',')
                && !integer.contains(",,")
        }
        _ => false,
    }
}

fn normalize_zero(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Convert a percentage (`17.5`) into its fraction (`0.175`)
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Round half away from zero and pad to exactly `places` fractional digits
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

/// Number of decimal places used for rounded result fields.
///
/// Deserializes leniently: any non-negative integer is accepted (values
/// above [`Precision::MAX_PLACES`] are clamped), anything else falls back
/// to [`Precision::DEFAULT_PLACES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Precision(u32);

impl Precision {
    pub const DEFAULT_PLACES: u32 = 2;
    /// Largest scale a `Decimal` can carry
    pub const MAX_PLACES: u32 = 28;

    pub fn new(places: u32) -> Self {
        Self(places.min(Self::MAX_PLACES))
    }

    pub fn places(self) -> u32 {
        self.0
    }

    pub fn round(self, value: Decimal) -> Decimal {
        round_half_up(value, self.0)
    }

    /// Interpret an arbitrary JSON value as a precision
    pub fn from_json(value: &Value) -> Self {
        let places = match value {
            Value::Number(number) => number
                .as_u64()
                .map(|places| u32::try_from(places).unwrap_or(u32::MAX))
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|places| places.is_finite() && *places >= 0.0 && places.fract() == 0.0)
                        .map(|places| places as u32)
                }),
            _ => None,
        };

        places.map(Self::new).unwrap_or_default()
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(Self::DEFAULT_PLACES)
    }
}

impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Precision::from_json(&value))
    }
}
