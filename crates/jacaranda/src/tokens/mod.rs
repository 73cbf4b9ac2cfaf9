//! Design tokens and token substitution.
//!
//! This module provides:
//!
//! - [`TokenCategory`]: The fixed set of categories (colors, spacing, ...)
//! - [`Tokens`]: A dictionary of named values per category
//! - [`TokenRef`]: A parsed `$category.name` reference
//! - [`substitute`] / [`try_substitute`]: Replacing references in a style fragment
//! - [`TokenError`]: Errors from the strict entry points
//!
//! Substitution runs before variant resolution; a resolver never sees an
//! unresolved reference.

mod category;
mod dictionary;
mod error;
mod reference;
mod substitute;

pub use category::{TokenCategory, BORDER_STYLES};
pub use dictionary::Tokens;
pub use error::TokenError;
pub use reference::{TokenRef, TOKEN_SIGIL};
pub use substitute::{substitute, try_substitute};
