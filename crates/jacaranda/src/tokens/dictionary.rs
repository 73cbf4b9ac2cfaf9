//! Token dictionaries.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::category::TokenCategory;
use super::error::TokenError;
use super::reference::TokenRef;
use crate::style::{ScalarKey, StyleValue};

/// A dictionary of design tokens, grouped by [`TokenCategory`].
///
/// Only the fixed categories can be stored; loading a dictionary from a file
/// with any other category name fails. Values are not checked against their
/// category on insertion; call [`validate`](Self::validate) for that.
///
/// # Example
///
/// ```rust
/// use jacaranda::{TokenCategory, Tokens};
///
/// let tokens = Tokens::new()
///     .add(TokenCategory::Colors, "primary500", "#06b6d4")
///     .add(TokenCategory::Colors, "secondary500", "#027a7b")
///     .category(TokenCategory::Spacing, [("1", 4), ("2", 8), ("3", 12)]);
///
/// assert_eq!(tokens.get(TokenCategory::Spacing, "2"), Some(&8.into()));
/// assert!(tokens.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tokens {
    categories: IndexMap<TokenCategory, IndexMap<String, StyleValue>>,
}

impl Tokens {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated dictionary for chaining.
    pub fn add(
        mut self,
        category: TokenCategory,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.insert(category, name, value);
        self
    }

    /// Adds every `(name, value)` pair to a category.
    pub fn category<K, V>(mut self, category: TokenCategory, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<StyleValue>,
    {
        for (name, value) in entries {
            self.insert(category, name, value);
        }
        self
    }

    /// Sets a token, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        category: TokenCategory,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.categories
            .entry(category)
            .or_default()
            .insert(name.into(), value.into())
    }

    pub fn get(&self, category: TokenCategory, name: &str) -> Option<&StyleValue> {
        self.categories.get(&category)?.get(name)
    }

    /// Looks up a parsed reference.
    pub fn lookup(&self, reference: &TokenRef) -> Option<&StyleValue> {
        self.get(reference.category(), reference.name())
    }

    /// Returns the tokens of one category, in insertion order.
    pub fn tokens(&self, category: TokenCategory) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(|(name, value)| (name.as_str(), value)))
    }

    /// Returns the categories that hold at least one entry.
    pub fn categories(&self) -> impl Iterator<Item = TokenCategory> + '_ {
        self.categories
            .iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(category, _)| *category)
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks every token's value against its category.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidValue`] for the first mistyped token.
    pub fn validate(&self) -> Result<(), TokenError> {
        for (category, tokens) in &self.categories {
            for (name, value) in tokens {
                if !category.accepts(value) {
                    return Err(TokenError::InvalidValue {
                        category: *category,
                        name: name.clone(),
                        found: value.kind(),
                        expected: category.expected(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Tokens {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Token names may be written as numbers (`space: { 1: 4, 2: 8 }`).
        let raw = IndexMap::<TokenCategory, IndexMap<ScalarKey, StyleValue>>::deserialize(deserializer)?;
        let mut tokens = Tokens::new();
        for (category, entries) in raw {
            for (name, value) in entries {
                tokens.insert(category, name.0, value);
            }
        }
        Ok(tokens)
    }
}
