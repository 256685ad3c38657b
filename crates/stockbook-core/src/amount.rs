//! # Numeric Fields
//!
//! Every numeric record field (ids, sizes, prices, counters, totals) is an
//! [`Amount`]: the JSON number exactly as the client sent it.
//!
//! ```text
//! request      stored / returned
//! ─────────    ─────────────────
//! 115000   ──► 115000            integers stay integers
//! 110000.5 ──► 110000.5          fractions are kept
//! null     ──► null              null is a value, not an error
//! "12"     ──► 12                numeric text is read as a number
//! ""       ──► null
//! true     ──► 1
//! (absent) ──► 0                 #[serde(default)] on the record
//! ```
//!
//! Only text that isn't a number (`"abc"`), arrays and objects are refused.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A JSON number, or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amount(Option<Number>);

/// What a numeric field may hold on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Number(Number),
    Flag(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = match Option::<WireAmount>::deserialize(deserializer)? {
            Some(wire) => wire,
            None => return Ok(Amount::NULL),
        };

        match wire {
            WireAmount::Number(number) => Ok(Amount(Some(number))),
            WireAmount::Flag(flag) => Ok(Amount::from(i64::from(flag))),
            WireAmount::Text(text) => parse_text(&text)
                .ok_or_else(|| de::Error::custom(format!("cannot read {:?} as a number", text))),
        }
    }
}

fn parse_text(text: &str) -> Option<Amount> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Amount::NULL);
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(Amount::from(value));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(|number| Amount(Some(number)))
}

impl Amount {
    /// The JSON `null` value.
    pub const NULL: Amount = Amount(None);

    /// Returns the value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_ref().and_then(Number::as_i64)
    }

    /// Returns the value as a float (`None` only for `null`).
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_ref().and_then(Number::as_f64)
    }

    /// Builds an amount from a float; non-finite values have no JSON form
    /// and become `null`.
    pub fn from_f64(value: f64) -> Self {
        Amount(Number::from_f64(value))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::from(0i64)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Some(Number::from(value)))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::from(i64::from(value))
    }
}

impl PartialEq<i64> for Amount {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for Amount {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(number) => write!(f, "{}", number),
            None => f.write_str("null"),
        }
    }
}
