//! Flat style objects and shallow merging.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// A flat mapping from property name to [`StyleValue`].
///
/// Iteration follows insertion order. Equality ignores order, so two objects
/// with the same properties compare equal no matter how they were built.
///
/// Merging is shallow: a property written later replaces the earlier value but
/// keeps the position where the key first appeared.
///
/// # Example
///
/// ```rust
/// use jacaranda::{style, StyleObject};
///
/// let mut accumulated = style! { "display" => "flex", "padding" => 4 };
/// accumulated.merge(&style! { "padding" => 8, "fontSize" => 24 });
///
/// assert_eq!(accumulated, style! {
///     "display" => "flex",
///     "padding" => 8,
///     "fontSize" => 24,
/// });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject {
    props: IndexMap<String, StyleValue>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the updated object for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.props.insert(property.into(), value.into())
    }

    /// Removes a property, preserving the order of the remaining ones.
    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.props.shift_remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.props.get(property)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.props.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.props.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// Writes every property of `other` on top of this object.
    pub fn merge(&mut self, other: &StyleObject) {
        for (property, value) in &other.props {
            self.props.insert(property.clone(), value.clone());
        }
    }

    /// Consuming variant of [`merge`](Self::merge).
    pub fn merged(mut self, other: &StyleObject) -> Self {
        self.merge(other);
        self
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = StyleObject::new();
        object.extend(iter);
        object
    }
}

impl<K: Into<String>, V: Into<StyleValue>> Extend<(K, V)> for StyleObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (property, value) in iter {
            self.insert(property, value);
        }
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleValue);
    type IntoIter = IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}
