//! Styled wrappers around host components.
//!
//! The host rendering framework is abstracted as a [`Component`]: something
//! that takes its own props plus a [`StyleProp`] and produces output. A
//! [`Styled`] wrapper holds a fixed, already token-resolved style and puts it
//! in front of whatever style the caller passes at render time.

use std::marker::PhantomData;

use crate::style::StyleObject;

/// The style handed to a host component.
///
/// Hosts accept either one style object or an ordered list of them, where a
/// later entry overrides earlier ones property by property.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleProp {
    /// A single style object.
    Single(StyleObject),
    /// An ordered composition; later entries win.
    List(Vec<StyleObject>),
}

impl StyleProp {
    /// Iterates over the composed style objects in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleObject> {
        match self {
            StyleProp::Single(style) => std::slice::from_ref(style).iter(),
            StyleProp::List(styles) => styles.iter(),
        }
    }

    /// Collapses the composition into one object, the way a host that
    /// supports array styles would.
    pub fn flatten(&self) -> StyleObject {
        self.iter()
            .fold(StyleObject::new(), |acc, style| acc.merged(style))
    }
}

impl Default for StyleProp {
    fn default() -> Self {
        StyleProp::Single(StyleObject::new())
    }
}

impl From<StyleObject> for StyleProp {
    fn from(style: StyleObject) -> Self {
        StyleProp::Single(style)
    }
}

impl From<Vec<StyleObject>> for StyleProp {
    fn from(styles: Vec<StyleObject>) -> Self {
        StyleProp::List(styles)
    }
}

/// A host rendering primitive.
///
/// `Props` carries everything except the style (children included); the
/// wrapper forwards it untouched.
pub trait Component {
    type Props;
    type Output;

    fn render(&self, props: Self::Props, style: StyleProp) -> Self::Output;
}

/// Adapts a closure into a [`Component`].
///
/// # Example
///
/// ```rust
/// use jacaranda::{FnComponent, StyleProp, Component};
///
/// let view = FnComponent::new(|label: String, style: StyleProp| {
///     format!("{label}: {} props", style.flatten().len())
/// });
/// assert_eq!(view.render("view".to_string(), StyleProp::default()), "view: 0 props");
/// ```
pub struct FnComponent<P, F> {
    f: F,
    _props: PhantomData<fn(P)>,
}

impl<P, F: Clone> Clone for FnComponent<P, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _props: PhantomData,
        }
    }
}

impl<P, F> std::fmt::Debug for FnComponent<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComponent").finish_non_exhaustive()
    }
}

impl<P, O, F> FnComponent<P, F>
where
    F: Fn(P, StyleProp) -> O,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _props: PhantomData,
        }
    }
}

impl<P, O, F> Component for FnComponent<P, F>
where
    F: Fn(P, StyleProp) -> O,
{
    type Props = P;
    type Output = O;

    fn render(&self, props: P, style: StyleProp) -> O {
        (self.f)(props, style)
    }
}

/// A host component with a fixed style attached.
///
/// Built by [`Binder::styled`](crate::Binder::styled), which resolves tokens in
/// the static style once up front.
#[derive(Debug, Clone)]
pub struct Styled<C> {
    component: C,
    style: StyleObject,
}

impl<C: Component> Styled<C> {
    /// Wraps `component` with an already-resolved static style.
    pub fn new(component: C, style: StyleObject) -> Self {
        Self { component, style }
    }

    /// The static style applied on every render.
    pub fn style(&self) -> &StyleObject {
        &self.style
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    /// Combines the static style with an optional caller override.
    ///
    /// Without an override the static style is passed alone. With one, the
    /// result is a list with the static style first so the override wins.
    pub fn compose(&self, style: Option<StyleProp>) -> StyleProp {
        match style {
            None => StyleProp::Single(self.style.clone()),
            Some(StyleProp::Single(extra)) => StyleProp::List(vec![self.style.clone(), extra]),
            Some(StyleProp::List(extra)) => {
                let mut styles = Vec::with_capacity(extra.len() + 1);
                styles.push(self.style.clone());
                styles.extend(extra);
                StyleProp::List(styles)
            }
        }
    }

    /// Renders the wrapped component with the composed style.
    pub fn render(&self, props: C::Props, style: Option<StyleProp>) -> C::Output {
        self.component.render(props, self.compose(style))
    }
}

impl<C: Component> Component for Styled<C> {
    type Props = C::Props;
    type Output = C::Output;

    fn render(&self, props: C::Props, style: StyleProp) -> C::Output {
        Styled::render(self, props, Some(style))
    }
}
