//! # Jacaranda - variant-driven styles with design tokens
//!
//! Jacaranda flattens a declarative style description into a single style
//! object for whatever set of variants a caller picks.
//!
//! A description has four parts:
//!
//! - a **base** style applied every time
//! - **variants**: named axes (`size`, `color`, `disabled`) mapping each value
//!   to a partial style
//! - **compound variants**: extra styles applied when several axes hold given
//!   values at once
//! - **default variants**: the value an axis takes when the caller leaves it out
//!
//! String values of the form `$category.name` are **token references**. A
//! [`Binder`] built from a [`Tokens`] dictionary replaces them with concrete
//! values before the description is compiled.
//!
//! ## Quick start
//!
//! ```rust
//! use jacaranda::{style, define_tokens, CompoundRule, TokenCategory, Tokens, VariantConfig, VariantGroup};
//!
//! let binder = define_tokens(
//!     Tokens::new()
//!         .add(TokenCategory::Colors, "danger", "#FC8181")
//!         .add(TokenCategory::Spacing, "sm", 4)
//!         .add(TokenCategory::Spacing, "lg", 8),
//! );
//!
//! let button = binder.styles(
//!     VariantConfig::new()
//!         .with_base(style! { "display" => "flex" })
//!         .with_variant(
//!             "visual",
//!             VariantGroup::new()
//!                 .with("solid", style! { "backgroundColor" => "$colors.danger", "color" => "white" })
//!                 .with("outline", style! { "borderWidth" => 1, "borderColor" => "$colors.danger" }),
//!         )
//!         .with_variant(
//!             "size",
//!             VariantGroup::new()
//!                 .with("sm", style! { "padding" => "$space.sm", "fontSize" => 12 })
//!                 .with("lg", style! { "padding" => "$space.lg", "fontSize" => 24 }),
//!         )
//!         .with_compound(
//!             CompoundRule::new()
//!                 .when("visual", "solid")
//!                 .when("size", "lg")
//!                 .with_style(style! { "fontWeight" => "bold" }),
//!         )
//!         .with_default("visual", "solid")
//!         .with_default("size", "sm"),
//! );
//!
//! assert_eq!(
//!     button.resolve(()),
//!     style! {
//!         "display" => "flex",
//!         "backgroundColor" => "#FC8181",
//!         "color" => "white",
//!         "padding" => 4,
//!         "fontSize" => 12,
//!     }
//! );
//! assert_eq!(button.resolve([("size", "lg")]).get("fontWeight"), Some(&"bold".into()));
//! ```
//!
//! ## Degrading instead of failing
//!
//! Styling is cosmetic, so the default paths never fail:
//!
//! - an axis the configuration doesn't declare is ignored
//! - a value an axis doesn't define contributes nothing
//! - a token reference that can't be resolved drops only its own property
//!
//! Strict alternatives exist for build-time checks: [`Binder::try_styles`],
//! [`Binder::try_styled`], [`Tokens::validate`] and [`Stylesheet::compile_strict`].
//!
//! ## Modules
//!
//! - [`style`]: [`StyleValue`], [`StyleObject`] and the [`style!`] macro
//! - [`variant`]: configurations and the compiled [`Resolver`]
//! - [`tokens`]: categories, dictionaries, references and substitution
//! - [`binder`]: token-bound factories
//! - [`styled`]: static styles attached to host components
//! - [`stylesheet`]: YAML / JSON loading

pub mod binder;
pub mod style;
pub mod styled;
pub mod stylesheet;
pub mod tokens;
pub mod variant;

pub use binder::{define_tokens, Binder};
pub use style::{StyleObject, StyleValue};
pub use styled::{Component, FnComponent, StyleProp, Styled};
pub use stylesheet::{CompiledStylesheet, Stylesheet, StylesheetError};
pub use tokens::{
    substitute, try_substitute, TokenCategory, TokenError, TokenRef, Tokens, BORDER_STYLES,
    TOKEN_SIGIL,
};
pub use variant::{
    compile, CompoundRule, IntoSelection, Resolver, Selection, VariantConfig, VariantGroup,
    VariantValue,
};
