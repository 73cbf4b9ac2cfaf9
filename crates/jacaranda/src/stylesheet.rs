//! Stylesheet files: a token dictionary plus named variant configurations.
//!
//! Stylesheets let tokens and component styles live in YAML or JSON rather
//! than in code. The format mirrors the programmatic API one to one:
//!
//! ```yaml
//! tokens:
//!   colors:
//!     primary500: "#06b6d4"
//!     secondary500: "#027a7b"
//!   space:
//!     2: 8
//!     3: 12
//!     8: 32
//!
//! styles:
//!   button:
//!     base:
//!       paddingHorizontal: $space.8
//!       paddingVertical: $space.3
//!       borderRadius: $space.2
//!     variants:
//!       color:
//!         primary: { backgroundColor: $colors.primary500 }
//!         secondary: { backgroundColor: $colors.secondary500 }
//!     compoundVariants:
//!       - variants: { color: secondary }
//!         style: { borderWidth: 1 }
//!     defaultVariants:
//!       color: primary
//! ```
//!
//! Unknown token categories are rejected while loading. Unresolvable token
//! references are not: [`Stylesheet::compile`] drops them like the rest of the
//! engine, and [`Stylesheet::compile_strict`] reports them.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::binder::Binder;
use crate::style::StyleObject;
use crate::tokens::{TokenError, Tokens};
use crate::variant::{IntoSelection, Resolver, VariantConfig};

/// Error returned when loading or strictly compiling a stylesheet.
#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON stylesheet: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported stylesheet format for {}: expected .yaml, .yml or .json", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid tokens: {0}")]
    Tokens(#[source] TokenError),

    #[error("style '{style}': {source}")]
    Style {
        style: String,
        #[source]
        source: TokenError,
    },
}

/// A parsed, not yet compiled, stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stylesheet {
    tokens: Tokens,
    styles: IndexMap<String, VariantConfig>,
}

impl Stylesheet {
    /// Builds a stylesheet programmatically.
    pub fn new(tokens: Tokens) -> Self {
        Self {
            tokens,
            styles: IndexMap::new(),
        }
    }

    /// Adds a named configuration, returning the updated stylesheet.
    pub fn with_style(mut self, name: impl Into<String>, config: VariantConfig) -> Self {
        self.styles.insert(name.into(), config);
        self
    }

    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, StylesheetError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a stylesheet, picking the parser from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        let is_json = extension.eq_ignore_ascii_case("json");
        let is_yaml = ["yaml", "yml"]
            .iter()
            .any(|known| extension.eq_ignore_ascii_case(known));
        if !is_json && !is_yaml {
            return Err(StylesheetError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let source = fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading stylesheet");
        if is_json {
            Self::from_json(&source)
        } else {
            Self::from_yaml(&source)
        }
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn style(&self, name: &str) -> Option<&VariantConfig> {
        self.styles.get(name)
    }

    /// Iterates over named configurations in file order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &VariantConfig)> {
        self.styles.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Binds the tokens and compiles every style, dropping unresolved tokens.
    pub fn compile(&self) -> CompiledStylesheet {
        let binder = Binder::new(self.tokens.clone());
        let resolvers = self
            .styles
            .iter()
            .map(|(name, config)| (name.clone(), binder.styles(config.clone())))
            .collect();
        CompiledStylesheet { binder, resolvers }
    }

    /// Validates the tokens and compiles every style strictly.
    ///
    /// # Errors
    ///
    /// - [`StylesheetError::Tokens`] if a token value does not fit its category
    /// - [`StylesheetError::Style`] for the first style with a bad reference
    pub fn compile_strict(&self) -> Result<CompiledStylesheet, StylesheetError> {
        let binder = Binder::validated(self.tokens.clone()).map_err(StylesheetError::Tokens)?;
        let mut resolvers = IndexMap::with_capacity(self.styles.len());
        for (name, config) in &self.styles {
            let resolver = binder
                .try_styles(config.clone())
                .map_err(|source| StylesheetError::Style {
                    style: name.clone(),
                    source,
                })?;
            resolvers.insert(name.clone(), resolver);
        }
        Ok(CompiledStylesheet { binder, resolvers })
    }
}

/// A stylesheet whose styles are compiled into resolvers.
#[derive(Debug, Clone)]
pub struct CompiledStylesheet {
    binder: Binder,
    resolvers: IndexMap<String, Resolver>,
}

impl CompiledStylesheet {
    /// The binder built from the sheet's tokens, for further styles.
    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    pub fn get(&self, name: &str) -> Option<&Resolver> {
        self.resolvers.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    /// Resolves a named style; `None` if the sheet has no such style.
    pub fn resolve(&self, name: &str, selection: impl IntoSelection) -> Option<StyleObject> {
        self.get(name).map(|resolver| resolver.resolve(selection))
    }
}
