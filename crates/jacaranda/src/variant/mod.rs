//! Variant resolution.
//!
//! This module turns a declarative [`VariantConfig`] into a [`Resolver`]:
//!
//! - [`VariantGroup`]: The values of one axis and the fragments they contribute
//! - [`CompoundRule`]: A fragment applied when several axes match together
//! - [`VariantConfig`]: Base style, ordered axes, compound rules, defaults
//! - [`Resolver`]: The compiled, reusable form of a configuration
//! - [`Selection`] / [`IntoSelection`]: What the caller picks at resolve time
//!
//! Nothing here knows about tokens. The [`Binder`](crate::Binder) substitutes
//! tokens into a configuration before handing it to [`compile`].

mod config;
mod resolver;
mod value;

pub use config::{CompoundRule, VariantConfig, VariantGroup};
pub use resolver::{compile, Resolver};
pub use value::{IntoSelection, Selection, VariantValue};
