//! Subcommand implementations. Each returns the text to print.

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use console::Style;
use jacaranda::{Binder, Selection, StyleObject, Stylesheet};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Terminal styles for text output.
pub struct Palette {
    name: Style,
    key: Style,
    muted: Style,
}

impl Palette {
    pub fn styled() -> Self {
        Self {
            name: Style::new().bold(),
            key: Style::new().cyan(),
            muted: Style::new().dim(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            name: Style::new(),
            key: Style::new(),
            muted: Style::new(),
        }
    }
}

/// Parses `axis=value` arguments into a selection.
///
/// Values stay textual; variant keys are normalized, so `disabled=true`
/// selects a boolean variant and `level=3` a numeric one.
pub fn parse_selection(pairs: &[String]) -> Result<Selection> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((axis, value)) if !axis.is_empty() => Ok((axis.to_string(), value.to_string())),
            _ => Err(anyhow!("invalid selection '{pair}': expected axis=value")),
        })
        .collect()
}

pub fn list(sheet: &Stylesheet, format: OutputFormat, palette: &Palette) -> Result<String> {
    if format == OutputFormat::Json {
        let styles: Vec<_> = sheet
            .styles()
            .map(|(name, config)| {
                let defaults = config.default_variants();
                let axes: Vec<_> = config
                    .variants()
                    .map(|(axis, group)| {
                        json!({
                            "axis": axis,
                            "values": group.values().collect::<Vec<_>>(),
                            "default": defaults.get(axis),
                        })
                    })
                    .collect();
                json!({
                    "name": name,
                    "axes": axes,
                    "compoundVariants": config.compound_variants().len(),
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&styles)?);
    }

    let mut lines = Vec::new();
    for (name, config) in sheet.styles() {
        lines.push(palette.name.apply_to(name).to_string());
        let defaults = config.default_variants();
        for (axis, group) in config.variants() {
            let values: Vec<&str> = group.values().map(|value| value.as_str()).collect();
            let mut line = format!("  {}: {}", palette.key.apply_to(axis), values.join(" | "));
            if let Some(default) = defaults.get(axis) {
                line.push_str(&format!(" {}", palette.muted.apply_to(format!("(default {default})"))));
            }
            lines.push(line);
        }
        let compounds = config.compound_variants().len();
        if compounds > 0 {
            lines.push(format!(
                "  {}",
                palette.muted.apply_to(format!("{compounds} compound rule(s)"))
            ));
        }
    }
    Ok(lines.join("\n"))
}

pub fn tokens(sheet: &Stylesheet, format: OutputFormat, palette: &Palette) -> Result<String> {
    let tokens = sheet.tokens();
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(tokens)?);
    }

    let mut lines = Vec::new();
    for category in tokens.categories() {
        lines.push(palette.name.apply_to(category.name()).to_string());
        for (name, value) in tokens.tokens(category) {
            lines.push(format!("  {}: {value}", palette.key.apply_to(name)));
        }
    }
    Ok(lines.join("\n"))
}

pub fn resolve(
    sheet: &Stylesheet,
    style: &str,
    selection: Selection,
    strict: bool,
    format: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    let Some(config) = sheet.style(style) else {
        let available: Vec<&str> = sheet.styles().map(|(name, _)| name).collect();
        bail!(
            "no style named '{style}' (available: {})",
            available.join(", ")
        );
    };

    // Strict mode checks the tokens and this one style, not its siblings.
    let resolver = if strict {
        Binder::validated(sheet.tokens().clone())
            .context("invalid tokens")?
            .try_styles(config.clone())
            .with_context(|| format!("style '{style}'"))?
    } else {
        Binder::new(sheet.tokens().clone()).styles(config.clone())
    };
    let resolved = resolver.resolve(selection);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Text => Ok(render_text(&resolved, palette)),
    }
}

fn render_text(style: &StyleObject, palette: &Palette) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {value}", palette.key.apply_to(key)))
        .collect::<Vec<_>>()
        .join("\n")
}
