//! Placeholder values.
//!
//! [`Values`] keeps insertion order. Substitution walks keys in that order,
//! and later keys see the text produced by earlier ones.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scalar substituted into a `{{key}}` placeholder.
///
/// Floats print in their shortest round-trip form. Magnitudes from `1e21`
/// up and below `1e-6` use exponent notation with a signed exponent
/// (`1e+21`, `1.5e-7`). Non-finite values print as `Infinity`, `-Infinity`
/// and `NaN`, and negative zero prints as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write_float(f, *n),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&n.abs()) {
        return write!(f, "{}", n);
    }

    let exponential = format!("{:e}", n);
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&exponential),
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Scalar::Text(s.clone())
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(n: $t) -> Self {
                Scalar::Int(i64::from(n))
            }
        })*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Scalar::Float(n as f64), Scalar::Int)
    }
}

impl From<usize> for Scalar {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Scalar::Float(n as f64), Scalar::Int)
    }
}

impl From<f32> for Scalar {
    fn from(n: f32) -> Self {
        Scalar::Float(f64::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

/// Errors loading [`Values`] from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuesError {
    /// The top-level value was not an object.
    #[error("values must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A member was an array or object.
    #[error("value for `{key}` is not a scalar")]
    NotScalar { key: String },
}

/// Insertion-ordered map from placeholder key to [`Scalar`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: Vec<(String, Scalar)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, returning the previous value. An existing key keeps its
    /// position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        let key = key.into();
        let value = value.into();
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in substitution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds values from a JSON object, keeping document key order.
    ///
    /// Strings and numbers map directly, booleans become their text and
    /// `null` becomes empty text. Arrays and objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValuesError> {
        let serde_json::Value::Object(map) = value else {
            return Err(ValuesError::NotAnObject(json_kind(value)));
        };

        map.iter()
            .map(|(key, value)| scalar_from_json(key, value).map(|scalar| (key.clone(), scalar)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

fn scalar_from_json(key: &str, value: &serde_json::Value) -> Result<Scalar, ValuesError> {
    use serde_json::Value;

    match value {
        Value::String(s) => Ok(Scalar::Text(s.clone())),
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::Bool(b) => Ok(Scalar::Text(b.to_string())),
        Value::Null => Ok(Scalar::Text(String::new())),
        Value::Array(_) | Value::Object(_) => Err(ValuesError::NotScalar {
            key: key.to_string(),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
