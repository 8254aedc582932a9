//! Numeric decoding policy
//!
//! Response bodies are parsed with `serde_json`'s `arbitrary_precision`
//! feature, so every number token still carries its literal digits. The
//! [`NumberPolicy`] then rewrites each token: tokens containing `.`, `e` or
//! `E` go through the float decoder, all others through the integer decoder.
//!
//! The default keeps floats as exact decimals, so `123.45000001` reaches a
//! `Decimal` field as `123.45000001` and not as the nearest binary double.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Decoder applied to the literal text of one number token
pub type NumberDecoder = fn(&str) -> Result<Value, String>;

/// Pair of decoders applied to number tokens while decoding a response
#[derive(Debug, Clone, Copy)]
pub struct NumberPolicy {
    /// Decoder for tokens with a fraction or exponent
    pub parse_float: NumberDecoder,
    /// Decoder for plain integer tokens
    pub parse_int: NumberDecoder,
}

impl Default for NumberPolicy {
    fn default() -> Self {
        Self {
            parse_float: exact_decimal,
            parse_int: integer,
        }
    }
}

impl NumberPolicy {
    /// Create a policy from explicit decoders
    pub fn new(parse_float: NumberDecoder, parse_int: NumberDecoder) -> Self {
        Self {
            parse_float,
            parse_int,
        }
    }

    /// Replace the float decoder
    pub fn with_float(mut self, parse_float: NumberDecoder) -> Self {
        self.parse_float = parse_float;
        self
    }

    /// Replace the integer decoder
    pub fn with_int(mut self, parse_int: NumberDecoder) -> Self {
        self.parse_int = parse_int;
        self
    }

    /// Parse a response body and apply the policy to every number token
    pub fn decode(&self, body: &str) -> Result<Value, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        self.apply(value)
    }

    /// Apply the policy to every number token of an already parsed value
    pub fn apply(&self, value: Value) -> Result<Value, serde_json::Error> {
        match value {
            Value::Number(number) => {
                let literal = number.to_string();
                let decoder = if is_integer_literal(&literal) {
                    self.parse_int
                } else {
                    self.parse_float
                };
                decoder(&literal).map_err(serde_json::Error::custom)
            }
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.apply(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(members) => members
                .into_iter()
                .map(|(key, member)| self.apply(member).map(|member| (key, member)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object),
            other => Ok(other),
        }
    }
}

fn is_integer_literal(literal: &str) -> bool {
    !literal.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}

fn parse_decimal(literal: &str) -> Result<Decimal, String> {
    let parsed = if literal.bytes().any(|b| matches!(b, b'e' | b'E')) {
        Decimal::from_scientific(literal)
    } else {
        Decimal::from_str_exact(literal)
    };
    parsed.map_err(|e| format!("cannot represent {} as a decimal: {}", literal, e))
}

fn number_from_literal(literal: &str) -> Result<Value, String> {
    serde_json::from_str::<Number>(literal)
        .map(Value::Number)
        .map_err(|e| format!("invalid number {}: {}", literal, e))
}

/// Float decoder keeping the exact decimal digits (default)
///
/// Tokens wider than `Decimal` can hold keep their literal digits; only a
/// `Decimal`-typed field reading them will fail.
pub fn exact_decimal(literal: &str) -> Result<Value, String> {
    match parse_decimal(literal) {
        Ok(decimal) => number_from_literal(&decimal.to_string()),
        Err(_) => number_from_literal(literal),
    }
}

/// Float decoder rounding to the nearest `f64`
pub fn binary_float(literal: &str) -> Result<Value, String> {
    let float: f64 = literal
        .parse()
        .map_err(|e| format!("invalid float {}: {}", literal, e))?;
    Number::from_f64(float)
        .map(Value::Number)
        .ok_or_else(|| format!("non-finite float {}", literal))
}

/// Float decoder producing the exact decimal as a JSON string
pub fn decimal_string(literal: &str) -> Result<Value, String> {
    parse_decimal(literal).map(|decimal| Value::String(decimal.to_string()))
}

/// Integer decoder keeping the token as a JSON integer (default)
pub fn integer(literal: &str) -> Result<Value, String> {
    number_from_literal(literal)
}

/// Integer decoder producing the digits as a JSON string
pub fn integer_string(literal: &str) -> Result<Value, String> {
    Ok(Value::String(literal.to_string()))
}

/// Read a decoded value as a decimal
///
/// Accepts numbers and numeric strings, so it works under every policy
/// shipped here.
pub fn decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()).ok(),
        Value::String(text) => Decimal::from_str(text).ok(),
        _ => None,
    }
}
