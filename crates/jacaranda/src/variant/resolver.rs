//! Compiled variant resolvers.

use std::sync::Arc;

use super::config::VariantConfig;
use super::value::{IntoSelection, Selection};
use crate::style::StyleObject;

/// A compiled [`VariantConfig`], callable any number of times.
///
/// Resolvers are meant to be built once per call site and shared. Cloning
/// one is cheap, and since the configuration is never mutated they can be
/// used from several threads at once.
///
/// Resolution never fails. Unknown axes, unknown values and compound rules
/// that don't match contribute nothing, so a typo degrades the style rather
/// than breaking the caller.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: Arc<VariantConfig>,
}

impl Resolver {
    pub(crate) fn new(config: VariantConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration this resolver was compiled from.
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Computes the selection actually in force: the configured defaults with
    /// every axis given by the caller written over them.
    pub fn effective_selection(&self, selection: impl IntoSelection) -> Selection {
        self.config
            .default_variants()
            .overlaid(&selection.into_selection())
    }

    /// Flattens the configuration for `selection` into a single style.
    ///
    /// Properties are written in this order, later writes winning:
    ///
    /// 1. the base style
    /// 2. one fragment per axis, in declaration order, for the axis' effective value
    /// 3. every matching compound rule, in declaration order
    pub fn resolve(&self, selection: impl IntoSelection) -> StyleObject {
        let effective = self.effective_selection(selection);
        let mut style = self.config.base().clone();

        for (axis, group) in self.config.variants() {
            let Some(value) = effective.get(axis) else {
                continue;
            };
            match group.get(value) {
                Some(fragment) => style.merge(fragment),
                None => {
                    tracing::trace!(axis, value = %value, "no variant for selected value");
                }
            }
        }

        for rule in self.config.compound_variants() {
            if rule.matches(&effective) {
                style.merge(rule.style());
            }
        }

        style
    }

    /// Resolves with no selection, using only the configured defaults.
    pub fn resolve_default(&self) -> StyleObject {
        self.resolve(())
    }
}

/// Compiles a configuration into a [`Resolver`].
///
/// Equivalent to [`VariantConfig::compile`].
pub fn compile(config: VariantConfig) -> Resolver {
    config.compile()
}
