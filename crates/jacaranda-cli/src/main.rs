//! `jacaranda` - resolve styles from a stylesheet file.
//!
//! ```text
//! jacaranda theme.yaml list
//! jacaranda theme.yaml tokens
//! jacaranda theme.yaml resolve button color=secondary disabled=true --output json
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use jacaranda::Stylesheet;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::commands::{OutputFormat, Palette};

/// Resolve variant styles from a jacaranda stylesheet
#[derive(Parser, Debug)]
#[command(name = "jacaranda")]
#[command(version)]
struct Args {
    /// Stylesheet to load (.yaml, .yml or .json)
    sheet: PathBuf,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List styles with their axes and values
    List,
    /// Print the token dictionary
    Tokens,
    /// Resolve one style for a selection
    Resolve {
        /// Style name
        style: String,

        /// Variant selections as axis=value
        selection: Vec<String>,

        /// Fail on unresolved token references instead of dropping them
        #[arg(long)]
        strict: bool,
    },
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "jacaranda=debug",
        _ => "jacaranda=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let sheet = Stylesheet::from_file(&args.sheet)
        .with_context(|| format!("could not load {}", args.sheet.display()))?;
    tracing::debug!(
        styles = sheet.styles().count(),
        tokens = sheet.tokens().len(),
        "stylesheet loaded"
    );
    let palette = Palette::styled();

    let output = match args.command {
        Command::List => commands::list(&sheet, args.output, &palette)?,
        Command::Tokens => commands::tokens(&sheet, args.output, &palette)?,
        Command::Resolve {
            style,
            selection,
            strict,
        } => {
            let selection = commands::parse_selection(&selection)?;
            commands::resolve(&sheet, &style, selection, strict, args.output, &palette)?
        }
    };

    println!("{output}");
    Ok(())
}
