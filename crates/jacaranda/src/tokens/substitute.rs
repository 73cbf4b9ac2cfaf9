//! Token substitution over style fragments.

use super::dictionary::Tokens;
use super::error::TokenError;
use super::reference::TokenRef;
use crate::style::{StyleObject, StyleValue};

/// Resolves a single property value against the dictionary.
fn resolve_value(property: &str, value: &StyleValue, tokens: &Tokens) -> Result<StyleValue, TokenError> {
    let Some(raw) = value.as_str().filter(|_| value.is_token_reference()) else {
        return Ok(value.clone());
    };

    let reference = TokenRef::parse(raw)?;
    tokens
        .lookup(&reference)
        .cloned()
        .ok_or_else(|| TokenError::Unresolved {
            property: property.to_string(),
            reference: raw.to_string(),
        })
}

/// Replaces every token reference in `fragment` with its concrete value.
///
/// Values that are not `$` strings are copied unchanged. A reference that
/// cannot be resolved (unknown category, unknown name, or malformed) drops its
/// property from the result entirely, so whatever the host would use by
/// default takes effect. Sibling properties are unaffected.
///
/// # Example
///
/// ```rust
/// use jacaranda::{style, substitute, TokenCategory, Tokens};
///
/// let tokens = Tokens::new().add(TokenCategory::Colors, "primary", "#000000");
/// let resolved = substitute(
///     &style! {
///         "backgroundColor" => "$colors.nonexistent",
///         "color" => "$colors.primary",
///     },
///     &tokens,
/// );
/// assert_eq!(resolved, style! { "color" => "#000000" });
/// ```
pub fn substitute(fragment: &StyleObject, tokens: &Tokens) -> StyleObject {
    fragment
        .iter()
        .filter_map(|(property, value)| match resolve_value(property, value, tokens) {
            Ok(resolved) => Some((property.clone(), resolved)),
            Err(err) => {
                tracing::debug!(property = %property, error = %err, "dropping unresolved style property");
                None
            }
        })
        .collect()
}

/// Strict counterpart of [`substitute`].
///
/// # Errors
///
/// Fails on the first reference that [`substitute`] would have dropped.
pub fn try_substitute(fragment: &StyleObject, tokens: &Tokens) -> Result<StyleObject, TokenError> {
    fragment
        .iter()
        .map(|(property, value)| {
            resolve_value(property, value, tokens).map(|resolved| (property.clone(), resolved))
        })
        .collect()
}
