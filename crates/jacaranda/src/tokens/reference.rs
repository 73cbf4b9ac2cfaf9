//! Parsed token references.

use std::fmt;
use std::str::FromStr;

use super::category::TokenCategory;
use super::error::TokenError;

/// Prefix marking a string value as a token reference.
pub const TOKEN_SIGIL: char = '$';

/// A parsed `$category.name` reference.
///
/// The path is split on the first `.`: `$spacing.1.5` names the token `1.5`
/// in the `spacing` category.
///
/// # Example
///
/// ```rust
/// use jacaranda::{TokenCategory, TokenRef};
///
/// let reference = TokenRef::parse("$space.sm").unwrap();
/// assert_eq!(reference.category(), TokenCategory::Spacing);
/// assert_eq!(reference.name(), "sm");
/// assert_eq!(reference.to_string(), "$spacing.sm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef {
    category: TokenCategory,
    name: String,
}

impl TokenRef {
    pub fn new(category: TokenCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    /// Parses a reference string.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] when the sigil is missing, there is no `.`,
    ///   or either segment is empty
    /// - [`TokenError::UnknownCategory`] when the category is not supported
    pub fn parse(reference: &str) -> Result<TokenRef, TokenError> {
        let malformed = || TokenError::Malformed {
            reference: reference.to_string(),
        };

        let path = reference.strip_prefix(TOKEN_SIGIL).ok_or_else(malformed)?;
        let (category, name) = path.split_once('.').ok_or_else(malformed)?;
        if category.is_empty() || name.is_empty() {
            return Err(malformed());
        }

        Ok(TokenRef {
            category: category.parse()?,
            name: name.to_string(),
        })
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for TokenRef {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenRef::parse(s)
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", TOKEN_SIGIL, self.category, self.name)
    }
}
