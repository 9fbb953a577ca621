//! Literal values and their canonical text form.
//!
//! Every string-producing emitter renders literals through [`serialize_primitive`],
//! so the same literal prints identically in Zod code, TypeBox code, and
//! TypeScript declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text used for the `undefined` value.
pub const SERIALIZED_UNDEFINED: &str = "undefined";

/// A literal type's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
    #[serde(rename = "bigint")]
    BigInt(BigIntLiteral),
    Null,
}

impl Literal {
    /// Name of the value's kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::String(_) => "string literal",
            Literal::Number(_) => "number literal",
            Literal::Boolean(_) => "boolean literal",
            Literal::BigInt(_) => "bigint literal",
            Literal::Null => "null literal",
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(f64::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<BigIntLiteral> for Literal {
    fn from(value: BigIntLiteral) -> Self {
        Literal::BigInt(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_primitive(self))
    }
}

/// An arbitrary-precision integer literal, kept as sign plus base-10 magnitude.
///
/// Type checkers commonly represent big integer literals structurally rather than
/// as a native integer, so the magnitude stays textual. It is normalized: no
/// leading zeros, and zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BigIntLiteral {
    negative: bool,
    magnitude: String,
}

impl BigIntLiteral {
    /// Build from a sign flag and a base-10 digit string.
    ///
    /// Returns `None` if `base10` is empty or contains a non-digit.
    pub fn from_parts(negative: bool, base10: &str) -> Option<Self> {
        if base10.is_empty() || !base10.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = base10.trim_start_matches('0');
        let magnitude = if trimmed.is_empty() { "0" } else { trimmed };

        Some(Self {
            negative: negative && magnitude != "0",
            magnitude: magnitude.to_string(),
        })
    }

    /// Parse decimal text with an optional leading `-` (no `n` suffix).
    pub fn parse(text: &str) -> Option<Self> {
        match text.strip_prefix('-') {
            Some(digits) => Self::from_parts(true, digits),
            None => Self::from_parts(false, text),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }
}

impl From<i64> for BigIntLiteral {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            magnitude: value.unsigned_abs().to_string(),
        }
    }
}

impl fmt::Display for BigIntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude)
    }
}

impl TryFrom<String> for BigIntLiteral {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid bigint literal `{value}`"))
    }
}

impl From<BigIntLiteral> for String {
    fn from(value: BigIntLiteral) -> Self {
        value.to_string()
    }
}

/// Render a literal as source text.
///
/// - strings are JSON-quoted
/// - numbers print the way JavaScript's `Number.prototype.toString` does:
///   `0`, `-3.5`, `1e+21`, `1e-7`; `-0` prints as `0`, non-finite values use
///   `NaN` / `Infinity`
/// - booleans print as `true` / `false`
/// - bigints print their digits followed by `n`
/// - null prints as `null`
pub fn serialize_primitive(value: &Literal) -> String {
    match value {
        Literal::String(s) => quote_string(s),
        Literal::Number(n) => serialize_number(*n),
        Literal::Boolean(true) => "true".to_string(),
        Literal::Boolean(false) => "false".to_string(),
        Literal::BigInt(b) => format!("{b}n"),
        Literal::Null => "null".to_string(),
    }
}

fn quote_string(s: &str) -> String {
    // Serializing a str into JSON cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}

fn serialize_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0, which JavaScript also prints as `0`.
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-7`.
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let count = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{integer}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let sign = if exponent >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exponent.unsigned_abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exponent.unsigned_abs())
        }
    };
    if n < 0.0 { format!("-{body}") } else { body }
}
