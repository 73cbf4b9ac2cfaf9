//! Variant resolution through a token binder with an empty dictionary.

use jacaranda::{
    define_tokens, style, CompoundRule, IntoSelection, Resolver, Selection, StyleObject, Tokens,
    VariantConfig, VariantGroup, VariantValue,
};

fn visual() -> VariantGroup {
    VariantGroup::new()
        .with("solid", style! { "backgroundColor" => "#FC8181", "color" => "white" })
        .with("outline", style! { "borderWidth" => 1, "borderColor" => "#FC8181" })
}

fn size() -> VariantGroup {
    VariantGroup::new()
        .with("sm", style! { "padding" => 4, "fontSize" => 12 })
        .with("lg", style! { "padding" => 8, "fontSize" => 24 })
}

fn disabled() -> VariantGroup {
    VariantGroup::new()
        .with(true, style! { "opacity" => 0.5 })
        .with(false, style! { "opacity" => 1 })
}

fn styles(config: VariantConfig) -> Resolver {
    define_tokens(Tokens::new()).styles(config)
}

#[test]
fn test_base_only() {
    let resolver = styles(VariantConfig::new().with_base(style! { "display" => "flex" }));
    assert_eq!(resolver.resolve(()), style! { "display" => "flex" });
}

#[test]
fn test_applies_selected_variants() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("visual", visual())
            .with_variant("size", size()),
    );

    assert_eq!(
        resolver.resolve([("visual", "solid"), ("size", "sm")]),
        style! {
            "display" => "flex",
            "backgroundColor" => "#FC8181",
            "color" => "white",
            "padding" => 4,
            "fontSize" => 12,
        }
    );
}

#[test]
fn test_falls_back_to_default_variants() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("visual", visual())
            .with_default("visual", "solid"),
    );

    assert_eq!(resolver.resolve(()), resolver.resolve([("visual", "solid")]));
    assert_eq!(
        resolver.resolve_default(),
        style! { "display" => "flex", "backgroundColor" => "#FC8181", "color" => "white" }
    );
}

#[test]
fn test_explicit_selection_replaces_default() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("visual", visual())
            .with_default("visual", "solid"),
    );

    assert_eq!(
        resolver.resolve([("visual", "outline")]),
        style! { "display" => "flex", "borderWidth" => 1, "borderColor" => "#FC8181" }
    );
}

#[test]
fn test_unknown_value_leaves_base() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("visual", visual()),
    );

    assert_eq!(
        resolver.resolve([("visual", "nonexistent")]),
        style! { "display" => "flex" }
    );
}

#[test]
fn test_compound_rule_fires_only_on_full_match() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("visual", visual())
            .with_variant("size", size())
            .with_compound(
                CompoundRule::new()
                    .when("visual", "solid")
                    .when("size", "lg")
                    .with_style(style! { "fontWeight" => "bold" }),
            ),
    );

    assert_eq!(
        resolver.resolve([("visual", "solid"), ("size", "lg")]),
        style! {
            "display" => "flex",
            "backgroundColor" => "#FC8181",
            "color" => "white",
            "padding" => 8,
            "fontSize" => 24,
            "fontWeight" => "bold",
        }
    );
    assert!(!resolver
        .resolve([("visual", "solid"), ("size", "sm")])
        .contains_key("fontWeight"));
}

#[test]
fn test_boolean_variants() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("disabled", disabled())
            .with_default("disabled", false),
    );

    assert_eq!(
        resolver.resolve([("disabled", true)]),
        style! { "display" => "flex", "opacity" => 0.5 }
    );
    assert_eq!(
        resolver.resolve([("disabled", false)]),
        style! { "display" => "flex", "opacity" => 1 }
    );
    assert_eq!(
        resolver.resolve(()),
        style! { "display" => "flex", "opacity" => 1 }
    );
}

#[test]
fn test_explicit_false_overrides_true_default() {
    let resolver = styles(
        VariantConfig::new()
            .with_variant("disabled", disabled())
            .with_default("disabled", true),
    );

    assert_eq!(resolver.resolve([("disabled", false)]), style! { "opacity" => 1 });
}

#[test]
fn test_explicit_zero_is_honored() {
    let resolver = styles(
        VariantConfig::new()
            .with_variant(
                "level",
                VariantGroup::new()
                    .with(0, style! { "fontSize" => 32 })
                    .with(3, style! { "fontSize" => 16 }),
            )
            .with_default("level", 3),
    );

    assert_eq!(resolver.resolve([("level", 0)]), style! { "fontSize" => 32 });
    assert_eq!(resolver.resolve(()), style! { "fontSize" => 16 });
}

#[test]
fn test_compound_rule_with_boolean_condition() {
    let resolver = styles(
        VariantConfig::new()
            .with_base(style! { "display" => "flex" })
            .with_variant("disabled", disabled())
            .with_variant(
                "size",
                VariantGroup::new()
                    .with("sm", style! { "padding" => 4 })
                    .with("lg", style! { "padding" => 8 }),
            )
            .with_compound(
                CompoundRule::new()
                    .when("disabled", true)
                    .when("size", "lg")
                    .with_style(style! { "fontStyle" => "italic" }),
            )
            .with_default("disabled", false)
            .with_default("size", "sm"),
    );

    assert_eq!(
        resolver.resolve(Selection::new().with("disabled", true).with("size", "lg")),
        style! {
            "display" => "flex",
            "opacity" => 0.5,
            "padding" => 8,
            "fontStyle" => "italic",
        }
    );
    assert_eq!(
        resolver.resolve(Selection::new().with("disabled", true).with("size", "sm")),
        style! { "display" => "flex", "opacity" => 0.5, "padding" => 4 }
    );
}

#[test]
fn test_string_selection_matches_boolean_axis() {
    let resolver = styles(VariantConfig::new().with_variant("disabled", disabled()));
    assert_eq!(resolver.resolve([("disabled", "true")]), style! { "opacity" => 0.5 });
}

#[test]
fn test_numeric_axis_levels() {
    let resolver = styles(
        VariantConfig::new()
            .with_variant(
                "level",
                VariantGroup::new()
                    .with(1, style! { "fontSize" => 24 })
                    .with(2, style! { "fontSize" => 20 })
                    .with(3, style! { "fontSize" => 16 }),
            )
            .with_variant(
                "weight",
                VariantGroup::new()
                    .with("regular", style! { "fontWeight" => "normal" })
                    .with("bold", style! { "fontWeight" => "bold" }),
            )
            .with_default("level", 3)
            .with_default("weight", "regular"),
    );

    assert_eq!(
        resolver.resolve([("level", 1)]),
        style! { "fontSize" => 24, "fontWeight" => "normal" }
    );
}

#[derive(Clone, Copy)]
enum Visual {
    Solid,
    Outline,
}

impl From<Visual> for VariantValue {
    fn from(visual: Visual) -> Self {
        match visual {
            Visual::Solid => "solid".into(),
            Visual::Outline => "outline".into(),
        }
    }
}

#[derive(Default)]
struct ButtonProps {
    visual: Option<Visual>,
    disabled: Option<bool>,
}

impl IntoSelection for ButtonProps {
    fn into_selection(self) -> Selection {
        Selection::new()
            .with_opt("visual", self.visual)
            .with_opt("disabled", self.disabled)
    }
}

#[test]
fn test_typed_props_drive_resolution() {
    let resolver = styles(
        VariantConfig::new()
            .with_variant("visual", visual())
            .with_variant("disabled", disabled())
            .with_default("visual", "solid")
            .with_default("disabled", false),
    );

    let outline = resolver.resolve(ButtonProps {
        visual: Some(Visual::Outline),
        disabled: Some(true),
    });
    assert_eq!(
        outline,
        style! { "borderWidth" => 1, "borderColor" => "#FC8181", "opacity" => 0.5 }
    );

    let defaults: StyleObject = resolver.resolve(ButtonProps::default());
    assert_eq!(defaults, resolver.resolve([("visual", Visual::Solid)]).merged(&style! { "opacity" => 1 }));
}
