//! Variant configurations: base style, axes, compound rules and defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::resolver::Resolver;
use super::value::{Selection, VariantValue};
use crate::style::StyleObject;

/// One variant axis: a mapping from variant value to the style fragment it
/// contributes.
///
/// # Example
///
/// ```rust
/// use jacaranda::{style, VariantGroup};
///
/// let disabled = VariantGroup::new()
///     .with(true, style! { "opacity" => 0.5 })
///     .with(false, style! { "opacity" => 1 });
///
/// assert!(disabled.get(&true.into()).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantGroup {
    options: IndexMap<VariantValue, StyleObject>,
}

impl VariantGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the axis, returning the updated group for chaining.
    pub fn with(mut self, value: impl Into<VariantValue>, style: StyleObject) -> Self {
        self.options.insert(value.into(), style);
        self
    }

    pub fn get(&self, value: &VariantValue) -> Option<&StyleObject> {
        self.options.get(value)
    }

    pub fn values(&self) -> impl Iterator<Item = &VariantValue> {
        self.options.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariantValue, &StyleObject)> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn try_map_styles<E>(
        &self,
        f: &mut impl FnMut(&StyleObject) -> Result<StyleObject, E>,
    ) -> Result<VariantGroup, E> {
        let mut options = IndexMap::with_capacity(self.options.len());
        for (value, style) in &self.options {
            options.insert(value.clone(), f(style)?);
        }
        Ok(VariantGroup { options })
    }
}

/// Extra style applied when several axes hold specific values at once.
///
/// Conditions are written under `variants:` in stylesheets, matching how
/// configuration authors already spell them; `conditions:` is accepted too.
///
/// # Example
///
/// ```rust
/// use jacaranda::{style, CompoundRule, Selection};
///
/// let rule = CompoundRule::new()
///     .when("visual", "solid")
///     .when("size", "lg")
///     .with_style(style! { "fontWeight" => "bold" });
///
/// let hit = Selection::new().with("visual", "solid").with("size", "lg");
/// let miss = Selection::new().with("visual", "solid").with("size", "sm");
/// assert!(rule.matches(&hit));
/// assert!(!rule.matches(&miss));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundRule {
    #[serde(rename = "variants", alias = "conditions", default)]
    conditions: IndexMap<String, VariantValue>,
    #[serde(default)]
    style: StyleObject,
}

impl CompoundRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `axis` to hold `value`, returning the updated rule.
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.conditions.insert(axis.into(), value.into());
        self
    }

    /// Sets the style applied when the rule fires.
    pub fn with_style(mut self, style: StyleObject) -> Self {
        self.style = style;
        self
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.conditions.iter().map(|(axis, value)| (axis.as_str(), value))
    }

    pub fn style(&self) -> &StyleObject {
        &self.style
    }

    /// Returns `true` when every condition holds in `effective`.
    ///
    /// Values compare by normalized key, so a rule written with `true`
    /// matches a selection of `"true"` and vice versa. A rule with no
    /// conditions always matches.
    pub fn matches(&self, effective: &Selection) -> bool {
        self.conditions
            .iter()
            .all(|(axis, expected)| effective.get(axis) == Some(expected))
    }
}

/// Declarative description of a styled element's variants.
///
/// Axes keep the order they were declared in; that order decides which
/// variant wins when two axes write the same property.
///
/// # Example
///
/// ```rust
/// use jacaranda::{style, CompoundRule, VariantConfig, VariantGroup};
///
/// let button = VariantConfig::new()
///     .with_base(style! { "display" => "flex" })
///     .with_variant(
///         "visual",
///         VariantGroup::new()
///             .with("solid", style! { "backgroundColor" => "#FC8181", "color" => "white" })
///             .with("outline", style! { "borderWidth" => 1, "borderColor" => "#FC8181" }),
///     )
///     .with_variant(
///         "size",
///         VariantGroup::new()
///             .with("sm", style! { "padding" => 4, "fontSize" => 12 })
///             .with("lg", style! { "padding" => 8, "fontSize" => 24 }),
///     )
///     .with_compound(
///         CompoundRule::new()
///             .when("visual", "solid")
///             .when("size", "lg")
///             .with_style(style! { "fontWeight" => "bold" }),
///     )
///     .with_default("visual", "solid")
///     .compile();
///
/// assert_eq!(
///     button.resolve([("size", "lg")]),
///     style! {
///         "display" => "flex",
///         "backgroundColor" => "#FC8181",
///         "color" => "white",
///         "padding" => 8,
///         "fontSize" => 24,
///         "fontWeight" => "bold",
///     }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantConfig {
    base: StyleObject,
    variants: IndexMap<String, VariantGroup>,
    compound_variants: Vec<CompoundRule>,
    default_variants: IndexMap<String, VariantValue>,
}

impl VariantConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base style, returning the updated configuration.
    pub fn with_base(mut self, base: StyleObject) -> Self {
        self.base = base;
        self
    }

    /// Declares an axis. Redeclaring an axis replaces its group but keeps
    /// its original position.
    pub fn with_variant(mut self, axis: impl Into<String>, group: VariantGroup) -> Self {
        self.variants.insert(axis.into(), group);
        self
    }

    /// Appends a compound rule.
    pub fn with_compound(mut self, rule: CompoundRule) -> Self {
        self.compound_variants.push(rule);
        self
    }

    /// Sets the value an axis takes when the caller leaves it out.
    pub fn with_default(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.default_variants.insert(axis.into(), value.into());
        self
    }

    pub fn base(&self) -> &StyleObject {
        &self.base
    }

    pub fn variant(&self, axis: &str) -> Option<&VariantGroup> {
        self.variants.get(axis)
    }

    /// Iterates over axes in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &VariantGroup)> {
        self.variants.iter().map(|(axis, group)| (axis.as_str(), group))
    }

    pub fn compound_variants(&self) -> &[CompoundRule] {
        &self.compound_variants
    }

    /// The default values as a [`Selection`].
    pub fn default_variants(&self) -> Selection {
        self.default_variants
            .iter()
            .map(|(axis, value)| (axis.as_str(), value))
            .collect()
    }

    /// Freezes the configuration into a reusable [`Resolver`].
    pub fn compile(self) -> Resolver {
        Resolver::new(self)
    }

    /// Rebuilds the configuration with `f` applied to every style fragment:
    /// the base, each variant value, and each compound rule's style.
    ///
    /// Defaults and compound conditions hold selection values, not styles,
    /// and are copied unchanged.
    pub(crate) fn try_map_styles<E>(
        &self,
        mut f: impl FnMut(&StyleObject) -> Result<StyleObject, E>,
    ) -> Result<VariantConfig, E> {
        let base = f(&self.base)?;

        let mut variants = IndexMap::with_capacity(self.variants.len());
        for (axis, group) in &self.variants {
            variants.insert(axis.clone(), group.try_map_styles(&mut f)?);
        }

        let mut compound_variants = Vec::with_capacity(self.compound_variants.len());
        for rule in &self.compound_variants {
            compound_variants.push(CompoundRule {
                conditions: rule.conditions.clone(),
                style: f(&rule.style)?,
            });
        }

        Ok(VariantConfig {
            base,
            variants,
            compound_variants,
            default_variants: self.default_variants.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;
    use std::convert::Infallible;

    #[test]
    fn test_variant_redeclaration_keeps_position() {
        let config = VariantConfig::new()
            .with_variant("a", VariantGroup::new())
            .with_variant("b", VariantGroup::new())
            .with_variant("a", VariantGroup::new().with("x", style! {}));

        let axes: Vec<&str> = config.variants().map(|(axis, _)| axis).collect();
        assert_eq!(axes, vec!["a", "b"]);
        assert_eq!(config.variant("a").map(VariantGroup::len), Some(1));
    }

    #[test]
    fn test_empty_compound_rule_always_matches() {
        assert!(CompoundRule::new().matches(&Selection::new()));
    }

    #[test]
    fn test_compound_rule_missing_axis_does_not_match() {
        let rule = CompoundRule::new().when("size", "lg");
        assert!(!rule.matches(&Selection::new()));
    }

    #[test]
    fn test_compound_rule_boolean_condition() {
        let rule = CompoundRule::new().when("disabled", true);
        assert!(rule.matches(&Selection::new().with("disabled", "true")));
        assert!(!rule.matches(&Selection::new().with("disabled", false)));
    }

    #[test]
    fn test_try_map_styles_touches_only_styles() {
        let config = VariantConfig::new()
            .with_base(style! { "a" => 1 })
            .with_variant("size", VariantGroup::new().with("sm", style! { "b" => 2 }))
            .with_compound(
                CompoundRule::new()
                    .when("size", "sm")
                    .with_style(style! { "c" => 3 }),
            )
            .with_default("size", "sm");

        let mapped = config
            .try_map_styles(|s| Ok::<_, Infallible>(s.clone().with("mapped", true)))
            .unwrap();

        assert_eq!(mapped.base().get("mapped"), Some(&true.into()));
        let sm = mapped.variant("size").and_then(|g| g.get(&"sm".into()));
        assert_eq!(sm.and_then(|s| s.get("mapped")), Some(&true.into()));
        assert_eq!(
            mapped.compound_variants()[0].style().get("mapped"),
            Some(&true.into())
        );
        assert_eq!(mapped.default_variants(), config.default_variants());
        assert!(mapped.compound_variants()[0].matches(&Selection::new().with("size", "sm")));
    }

    #[test]
    fn test_deserialize_camel_case_sections() {
        let config: VariantConfig = serde_yaml::from_str(
            r#"
base: { display: flex }
variants:
  disabled:
    true: { opacity: 0.5 }
    false: { opacity: 1 }
  level:
    1: { fontSize: 24 }
    2: { fontSize: 20 }
compoundVariants:
  - variants: { disabled: true, level: 1 }
    style: { fontStyle: italic }
defaultVariants:
  disabled: false
  level: 2
"#,
        )
        .unwrap();

        let axes: Vec<&str> = config.variants().map(|(axis, _)| axis).collect();
        assert_eq!(axes, vec!["disabled", "level"]);
        assert!(config
            .variant("level")
            .and_then(|g| g.get(&VariantValue::from(1)))
            .is_some());
        assert_eq!(
            config.default_variants().get("disabled"),
            Some(&VariantValue::from(false))
        );
        assert_eq!(config.compound_variants().len(), 1);
    }

    #[test]
    fn test_deserialize_missing_sections_are_empty() {
        let config: VariantConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VariantConfig::new());
    }
}
