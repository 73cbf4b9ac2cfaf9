//! The closed set of token categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::TokenError;
use crate::style::StyleValue;

/// Keywords accepted by the [`TokenCategory::BorderStyles`] category.
pub const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "none"];

/// A design-token category.
///
/// Categories are fixed; each expects a particular kind of value:
///
/// | Category | Name in references | Values |
/// |----------|--------------------|--------|
/// | `Colors` | `colors` | strings |
/// | `Spacing` | `spacing` or `space` | numbers |
/// | `FontSizes` | `fontSizes` | numbers |
/// | `Fonts` | `fonts` | strings |
/// | `LineHeight` | `lineHeight` or `lineHeights` | numbers |
/// | `BorderWidth` | `borderWidth` or `borderWidths` | numbers |
/// | `BorderStyles` | `borderStyles` | `solid`, `dashed`, `dotted`, `none` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Colors,
    Spacing,
    FontSizes,
    Fonts,
    LineHeight,
    BorderWidth,
    BorderStyles,
}

impl TokenCategory {
    /// Every category, in canonical order.
    pub const ALL: [TokenCategory; 7] = [
        TokenCategory::Colors,
        TokenCategory::Spacing,
        TokenCategory::FontSizes,
        TokenCategory::Fonts,
        TokenCategory::LineHeight,
        TokenCategory::BorderWidth,
        TokenCategory::BorderStyles,
    ];

    /// Canonical name used in references and stylesheets.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::FontSizes => "fontSizes",
            TokenCategory::Fonts => "fonts",
            TokenCategory::LineHeight => "lineHeight",
            TokenCategory::BorderWidth => "borderWidth",
            TokenCategory::BorderStyles => "borderStyles",
        }
    }

    /// Looks a category up by canonical name or alias.
    pub fn from_name(name: &str) -> Option<TokenCategory> {
        match name {
            "colors" => Some(TokenCategory::Colors),
            "spacing" | "space" => Some(TokenCategory::Spacing),
            "fontSizes" => Some(TokenCategory::FontSizes),
            "fonts" => Some(TokenCategory::Fonts),
            "lineHeight" | "lineHeights" => Some(TokenCategory::LineHeight),
            "borderWidth" | "borderWidths" => Some(TokenCategory::BorderWidth),
            "borderStyles" => Some(TokenCategory::BorderStyles),
            _ => None,
        }
    }

    /// Human description of the values this category takes.
    pub fn expected(self) -> &'static str {
        match self {
            TokenCategory::Colors | TokenCategory::Fonts => "a string",
            TokenCategory::Spacing
            | TokenCategory::FontSizes
            | TokenCategory::LineHeight
            | TokenCategory::BorderWidth => "a number",
            TokenCategory::BorderStyles => "one of solid, dashed, dotted, none",
        }
    }

    /// Returns `true` if `value` is acceptable for this category.
    pub fn accepts(self, value: &StyleValue) -> bool {
        match self {
            TokenCategory::Colors | TokenCategory::Fonts => value.as_str().is_some(),
            TokenCategory::Spacing
            | TokenCategory::FontSizes
            | TokenCategory::LineHeight
            | TokenCategory::BorderWidth => value.as_f64().is_some(),
            TokenCategory::BorderStyles => value
                .as_str()
                .is_some_and(|style| BORDER_STYLES.contains(&style)),
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::from_name(s).ok_or_else(|| TokenError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for TokenCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TokenCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_for_every_category() {
        for category in TokenCategory::ALL {
            assert_eq!(TokenCategory::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(TokenCategory::from_name("space"), Some(TokenCategory::Spacing));
        assert_eq!(
            TokenCategory::from_name("lineHeights"),
            Some(TokenCategory::LineHeight)
        );
        assert_eq!(
            TokenCategory::from_name("borderWidths"),
            Some(TokenCategory::BorderWidth)
        );
    }

    #[test]
    fn test_unknown_category() {
        let err = "shadows".parse::<TokenCategory>().unwrap_err();
        assert_eq!(err, TokenError::UnknownCategory("shadows".to_string()));
    }

    #[test]
    fn test_accepts() {
        assert!(TokenCategory::Colors.accepts(&"#000".into()));
        assert!(!TokenCategory::Colors.accepts(&4.into()));
        assert!(TokenCategory::Spacing.accepts(&8.into()));
        assert!(!TokenCategory::Spacing.accepts(&"8px".into()));
        assert!(TokenCategory::BorderStyles.accepts(&"dashed".into()));
        assert!(!TokenCategory::BorderStyles.accepts(&"groove".into()));
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let result: Result<TokenCategory, _> = serde_json::from_str("\"zIndices\"");
        assert!(result.is_err());
    }
}
