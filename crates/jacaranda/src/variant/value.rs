//! Variant values and caller selections.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::style::{format_number, ScalarKey};

/// A value selected on a variant axis.
///
/// Axes are keyed by strings, but callers naturally select with booleans
/// (`disabled: true`) or numbers (`level: 3`). Every value is normalized to its
/// string key when constructed, so `true` and `"true"` (or `3` and `"3"`)
/// name the same variant.
///
/// # Example
///
/// ```rust
/// use jacaranda::VariantValue;
///
/// assert_eq!(VariantValue::from(true), VariantValue::from("true"));
/// assert_eq!(VariantValue::from(3), VariantValue::from("3"));
/// assert_eq!(VariantValue::from(1.5).as_str(), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantValue(String);

impl VariantValue {
    /// Returns the normalized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantValue {
    fn from(s: &str) -> Self {
        VariantValue(s.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(s: String) -> Self {
        VariantValue(s)
    }
}

impl From<&String> for VariantValue {
    fn from(s: &String) -> Self {
        VariantValue(s.clone())
    }
}

impl From<&VariantValue> for VariantValue {
    fn from(v: &VariantValue) -> Self {
        v.clone()
    }
}

impl From<bool> for VariantValue {
    fn from(b: bool) -> Self {
        VariantValue(b.to_string())
    }
}

impl From<f64> for VariantValue {
    fn from(n: f64) -> Self {
        VariantValue(format_number(n))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VariantValue {
                fn from(n: $t) -> Self {
                    VariantValue(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Serialize for VariantValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VariantValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ScalarKey::deserialize(deserializer).map(|key| VariantValue(key.0))
    }
}

/// A partial mapping from axis name to selected value.
///
/// Axes left out of a selection fall back to the configuration's defaults.
/// Any axis that *is* present is honored, including `false` and `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: IndexMap<String, VariantValue>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a value on an axis, returning the updated selection.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.set(axis, value);
        self
    }

    /// Selects a value only when one is given.
    ///
    /// Handy for prop structs whose fields are `Option`s: `None` leaves the
    /// axis to its default instead of clearing it.
    pub fn with_opt<V: Into<VariantValue>>(self, axis: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(axis, value),
            None => self,
        }
    }

    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<VariantValue>) {
        self.values.insert(axis.into(), value.into());
    }

    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.values.get(axis)
    }

    pub fn remove(&mut self, axis: &str) -> Option<VariantValue> {
        self.values.shift_remove(axis)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(axis, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values.iter().map(|(axis, value)| (axis.as_str(), value))
    }

    /// Returns a copy of `self` with every entry of `other` written over it.
    pub fn overlaid(&self, other: &Selection) -> Selection {
        let mut values = self.values.clone();
        for (axis, value) in &other.values {
            values.insert(axis.clone(), value.clone());
        }
        Selection { values }
    }
}

impl<K: Into<String>, V: Into<VariantValue>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (axis, value) in iter {
            selection.set(axis, value);
        }
        selection
    }
}

/// Conversion into a [`Selection`] at resolve time.
///
/// Implemented for the usual ad-hoc shapes (pair arrays, vectors, hash maps,
/// `()` and `Option`) and meant to be implemented by typed prop structs, so a
/// component can expose its own closed set of axes and values:
///
/// ```rust
/// use jacaranda::{IntoSelection, Selection, VariantValue};
///
/// enum Tone { Primary, Secondary }
///
/// impl From<Tone> for VariantValue {
///     fn from(tone: Tone) -> Self {
///         match tone {
///             Tone::Primary => "primary".into(),
///             Tone::Secondary => "secondary".into(),
///         }
///     }
/// }
///
/// struct ButtonProps { tone: Option<Tone>, disabled: Option<bool> }
///
/// impl IntoSelection for ButtonProps {
///     fn into_selection(self) -> Selection {
///         Selection::new()
///             .with_opt("tone", self.tone)
///             .with_opt("disabled", self.disabled)
///     }
/// }
///
/// let selection = ButtonProps { tone: Some(Tone::Secondary), disabled: None }.into_selection();
/// assert_eq!(selection.get("tone"), Some(&VariantValue::from("secondary")));
/// assert!(selection.get("disabled").is_none());
/// ```
pub trait IntoSelection {
    fn into_selection(self) -> Selection;
}

impl IntoSelection for Selection {
    fn into_selection(self) -> Selection {
        self
    }
}

impl IntoSelection for &Selection {
    fn into_selection(self) -> Selection {
        self.clone()
    }
}

impl IntoSelection for () {
    fn into_selection(self) -> Selection {
        Selection::new()
    }
}

impl<T: IntoSelection> IntoSelection for Option<T> {
    fn into_selection(self) -> Selection {
        self.map(IntoSelection::into_selection).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<VariantValue>, const N: usize> IntoSelection for [(K, V); N] {
    fn into_selection(self) -> Selection {
        self.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<VariantValue>> IntoSelection for Vec<(K, V)> {
    fn into_selection(self) -> Selection {
        self.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<VariantValue>, S: BuildHasher> IntoSelection for HashMap<K, V, S> {
    fn into_selection(self) -> Selection {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_normalization() {
        assert_eq!(VariantValue::from(true).as_str(), "true");
        assert_eq!(VariantValue::from(false).as_str(), "false");
    }

    #[test]
    fn test_numeric_normalization() {
        assert_eq!(VariantValue::from(0).as_str(), "0");
        assert_eq!(VariantValue::from(3.0).as_str(), "3");
        assert_eq!(VariantValue::from(0.25).as_str(), "0.25");
    }

    #[test]
    fn test_overlay_replaces_without_merging() {
        let defaults = Selection::new().with("visual", "solid").with("size", "sm");
        let given = Selection::new().with("visual", "outline");
        let effective = defaults.overlaid(&given);

        assert_eq!(effective.get("visual"), Some(&VariantValue::from("outline")));
        assert_eq!(effective.get("size"), Some(&VariantValue::from("sm")));
    }

    #[test]
    fn test_overlay_honors_falsy_values() {
        let defaults = Selection::new().with("disabled", true).with("level", 3);
        let given = Selection::new().with("disabled", false).with("level", 0);
        let effective = defaults.overlaid(&given);

        assert_eq!(effective.get("disabled"), Some(&VariantValue::from(false)));
        assert_eq!(effective.get("level"), Some(&VariantValue::from(0)));
    }

    #[test]
    fn test_with_opt_skips_none() {
        let selection = Selection::new()
            .with_opt("size", Some("lg"))
            .with_opt("tone", None::<&str>);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_into_selection_shapes() {
        assert!(().into_selection().is_empty());
        assert!(None::<Selection>.into_selection().is_empty());

        let from_array = [("size", "lg"), ("tone", "primary")].into_selection();
        assert_eq!(from_array.len(), 2);

        let mut map = HashMap::new();
        map.insert("disabled", true);
        assert_eq!(
            map.into_selection().get("disabled"),
            Some(&VariantValue::from("true"))
        );
    }

    #[test]
    fn test_deserialize_from_yaml_scalars() {
        let values: Vec<VariantValue> = serde_yaml::from_str("[sm, 2, true]").unwrap();
        assert_eq!(
            values,
            vec![
                VariantValue::from("sm"),
                VariantValue::from(2),
                VariantValue::from(true)
            ]
        );
    }
}
