//! Style primitives shared by every other module.
//!
//! This module provides:
//!
//! - [`StyleValue`]: A single property value (string, number or boolean)
//! - [`StyleObject`]: An insertion-ordered map of property names to values
//! - [`style!`](crate::style!): A literal constructor for [`StyleObject`]
//!
//! Property names are opaque: the engine copies and overwrites them but never
//! interprets them. Whatever rendering surface consumes the result decides what
//! `backgroundColor` or `padding` means.

mod object;
mod value;

pub use object::StyleObject;
pub use value::StyleValue;

pub(crate) use value::{format_number, ScalarKey};

/// Builds a [`StyleObject`] from `key => value` pairs.
///
/// Values go through [`StyleValue::from`], so string, numeric and boolean
/// literals can be mixed freely.
///
/// # Example
///
/// ```rust
/// use jacaranda::style;
///
/// let button = style! {
///     "display" => "flex",
///     "padding" => 8,
///     "backgroundColor" => "$colors.primary",
/// };
/// assert_eq!(button.len(), 3);
/// ```
#[macro_export]
macro_rules! style {
    () => {
        $crate::StyleObject::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::StyleObject::new();
        $(
            object.insert($key, $value);
        )+
        object
    }};
}
