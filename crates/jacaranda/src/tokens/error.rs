//! Token errors.
//!
//! These only surface through the strict entry points
//! ([`Binder::try_styles`](crate::Binder::try_styles),
//! [`try_substitute`](super::try_substitute), [`Tokens::validate`](super::Tokens::validate)).
//! The default path drops unresolvable properties instead of failing.

use thiserror::Error;

use super::category::TokenCategory;

/// Error returned by strict token handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// A `$` string that is not of the form `$category.name`.
    #[error("malformed token reference '{reference}': expected $category.name")]
    Malformed { reference: String },

    /// A category name outside the supported set.
    #[error("unknown token category '{0}'")]
    UnknownCategory(String),

    /// A well-formed reference with no matching token.
    #[error("property '{property}' references undefined token '{reference}'")]
    Unresolved { property: String, reference: String },

    /// A token whose value does not fit its category.
    #[error("token '{category}.{name}' is a {found}, expected {expected}")]
    InvalidValue {
        category: TokenCategory,
        name: String,
        found: &'static str,
        expected: &'static str,
    },
}
