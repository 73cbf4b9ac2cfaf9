//! Primitive style values.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::tokens::TOKEN_SIGIL;

/// A single property value inside a [`StyleObject`](super::StyleObject).
///
/// Before token substitution a [`StyleValue::String`] starting with `$` is a
/// token reference (`$colors.primary`); after substitution it is a plain
/// literal like any other.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Boolean flag (`true` / `false`).
    Bool(bool),
    /// Numeric value: lengths, font sizes, opacities, line heights.
    Number(f64),
    /// String value: colors, font families, enumerated keywords.
    String(String),
}

impl StyleValue {
    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` if this value is a string beginning with the token sigil.
    ///
    /// This only checks the prefix; whether the reference is well formed or
    /// resolvable is decided during substitution.
    pub fn is_token_reference(&self) -> bool {
        self.as_str().is_some_and(|s| s.starts_with(TOKEN_SIGIL))
    }

    /// Short lowercase name of the value's type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Bool(_) => "boolean",
            StyleValue::Number(_) => "number",
            StyleValue::String(_) => "string",
        }
    }
}

/// Formats a number the way authors write it: `8` rather than `8.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn as_integer(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15).then_some(n as i64)
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

impl From<&String> for StyleValue {
    fn from(s: &String) -> Self {
        StyleValue::String(s.clone())
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StyleValue {
                fn from(n: $t) -> Self {
                    StyleValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Bool(b) => serializer.serialize_bool(*b),
            StyleValue::Number(n) => match as_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            StyleValue::String(s) => serializer.serialize_str(s),
        }
    }
}

struct StyleValueVisitor;

impl<'de> Visitor<'de> for StyleValueVisitor {
    type Value = StyleValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean style value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<StyleValue, E> {
        Ok(StyleValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleValue, E> {
        Ok(StyleValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<StyleValue, E> {
        Ok(StyleValue::String(v))
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StyleValueVisitor)
    }
}

/// A map key that may be written as a string, number or boolean.
///
/// Stylesheets use numeric keys (`level: { 1: ..., 2: ... }`, `space: { 4: 16 }`)
/// and boolean keys (`disabled: { true: ..., false: ... }`). All of them are
/// normalized to their string form on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ScalarKey(pub(crate) String);

impl<'de> Deserialize<'de> for ScalarKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = match StyleValue::deserialize(deserializer)? {
            StyleValue::Bool(b) => b.to_string(),
            StyleValue::Number(n) => format_number(n),
            StyleValue::String(s) => s,
        };
        Ok(ScalarKey(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_drops_integral_fraction() {
        assert_eq!(StyleValue::Number(8.0).to_string(), "8");
        assert_eq!(StyleValue::Number(1.5).to_string(), "1.5");
        assert_eq!(StyleValue::from("red").to_string(), "red");
        assert_eq!(StyleValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_is_token_reference() {
        assert!(StyleValue::from("$colors.primary").is_token_reference());
        assert!(StyleValue::from("$").is_token_reference());
        assert!(!StyleValue::from("colors.primary").is_token_reference());
        assert!(!StyleValue::from(4).is_token_reference());
    }

    #[test]
    fn test_serialize_integral_numbers_as_integers() {
        let json = serde_json::to_string(&StyleValue::Number(8.0)).unwrap();
        assert_eq!(json, "8");
        let json = serde_json::to_string(&StyleValue::Number(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn test_deserialize_scalars() {
        let v: StyleValue = serde_json::from_str("12").unwrap();
        assert_eq!(v, StyleValue::Number(12.0));
        let v: StyleValue = serde_json::from_str("\"#FC8181\"").unwrap();
        assert_eq!(v, StyleValue::from("#FC8181"));
        let v: StyleValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, StyleValue::Bool(false));
    }

    #[test]
    fn test_deserialize_rejects_compound_values() {
        let result: Result<StyleValue, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_scalar_key_normalization() {
        let key: ScalarKey = serde_yaml::from_str("3").unwrap();
        assert_eq!(key.0, "3");
        let key: ScalarKey = serde_yaml::from_str("true").unwrap();
        assert_eq!(key.0, "true");
        let key: ScalarKey = serde_yaml::from_str("sm").unwrap();
        assert_eq!(key.0, "sm");
    }
}
