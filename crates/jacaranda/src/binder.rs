//! Token-bound style factories.
//!
//! A [`Binder`] is built once from a [`Tokens`] dictionary and passed around
//! explicitly. Every configuration compiled through it has its token
//! references substituted first, so the resulting [`Resolver`] only ever sees
//! concrete values.
//!
//! # Example
//!
//! ```rust
//! use jacaranda::{style, Binder, TokenCategory, Tokens, VariantConfig, VariantGroup};
//!
//! let binder = Binder::new(
//!     Tokens::new()
//!         .add(TokenCategory::Colors, "primary500", "#06b6d4")
//!         .add(TokenCategory::Colors, "secondary500", "#027a7b")
//!         .category(TokenCategory::Spacing, [("2", 8), ("3", 12), ("8", 32)]),
//! );
//!
//! let button = binder.styles(
//!     VariantConfig::new()
//!         .with_base(style! {
//!             "paddingHorizontal" => "$spacing.8",
//!             "paddingVertical" => "$spacing.3",
//!             "borderRadius" => "$spacing.2",
//!         })
//!         .with_variant(
//!             "color",
//!             VariantGroup::new()
//!                 .with("primary", style! { "backgroundColor" => "$colors.primary500" })
//!                 .with("secondary", style! { "backgroundColor" => "$colors.secondary500" }),
//!         )
//!         .with_default("color", "primary"),
//! );
//!
//! assert_eq!(
//!     button.resolve([("color", "secondary")]),
//!     style! {
//!         "paddingHorizontal" => 32,
//!         "paddingVertical" => 12,
//!         "borderRadius" => 8,
//!         "backgroundColor" => "#027a7b",
//!     }
//! );
//! ```

use std::convert::Infallible;
use std::sync::Arc;

use crate::style::StyleObject;
use crate::styled::{Component, Styled};
use crate::tokens::{substitute, try_substitute, TokenError, Tokens};
use crate::variant::{Resolver, VariantConfig};

/// Style factories bound to one token dictionary.
///
/// The default entry points ([`styles`](Self::styles), [`styled`](Self::styled))
/// drop properties whose token cannot be resolved. The `try_` variants are the
/// opt-in strict mode and fail instead.
#[derive(Debug, Clone)]
pub struct Binder {
    tokens: Arc<Tokens>,
}

impl Binder {
    /// Binds a token dictionary without checking it.
    pub fn new(tokens: Tokens) -> Self {
        Self {
            tokens: Arc::new(tokens),
        }
    }

    /// Binds a token dictionary after checking every value against its category.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidValue`] for the first mistyped token.
    pub fn validated(tokens: Tokens) -> Result<Self, TokenError> {
        tokens.validate()?;
        Ok(Self::new(tokens))
    }

    /// The bound dictionary.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Substitutes tokens in one style fragment.
    pub fn substitute(&self, fragment: &StyleObject) -> StyleObject {
        substitute(fragment, &self.tokens)
    }

    /// Substitutes tokens in every style fragment of `config`.
    ///
    /// Defaults and compound conditions are copied unchanged.
    pub fn bind_config(&self, config: &VariantConfig) -> VariantConfig {
        let bound = config.try_map_styles(|fragment| Ok::<_, Infallible>(self.substitute(fragment)));
        match bound {
            Ok(bound) => bound,
            Err(never) => match never {},
        }
    }

    /// Substitutes tokens in `config` and compiles it.
    pub fn styles(&self, config: VariantConfig) -> Resolver {
        self.bind_config(&config).compile()
    }

    /// Strict counterpart of [`styles`](Self::styles).
    ///
    /// # Errors
    ///
    /// Fails on the first malformed or unresolvable token reference in the
    /// base, a variant fragment, or a compound rule's style.
    pub fn try_styles(&self, config: VariantConfig) -> Result<Resolver, TokenError> {
        config
            .try_map_styles(|fragment| try_substitute(fragment, &self.tokens))
            .map(VariantConfig::compile)
    }

    /// Attaches a token-resolved static style to a host component.
    ///
    /// Tokens are resolved here, once; rendering only composes styles.
    pub fn styled<C: Component>(&self, component: C, style: StyleObject) -> Styled<C> {
        Styled::new(component, self.substitute(&style))
    }

    /// Strict counterpart of [`styled`](Self::styled).
    pub fn try_styled<C: Component>(
        &self,
        component: C,
        style: StyleObject,
    ) -> Result<Styled<C>, TokenError> {
        Ok(Styled::new(component, try_substitute(&style, &self.tokens)?))
    }
}

/// Binds a token dictionary; shorthand for [`Binder::new`].
pub fn define_tokens(tokens: Tokens) -> Binder {
    Binder::new(tokens)
}
