//! Command-line interface wiring for regnews.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod analyze;
pub mod enrich;
pub mod lexicon;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Regulatory news enrichment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Enrich(args) => enrich::run(args, settings).await,
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Lexicon => lexicon::run(settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enrich a JSON-lines batch of scraped articles.
    Enrich(enrich::Args),
    /// Enrich one ad-hoc article and print the record.
    Analyze(analyze::Args),
    /// Load the lexicon and report table sizes.
    Lexicon,
}

/// Export encoding for enriched rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Spreadsheet-style rows with the historical column names.
    Csv,
    /// One full `EnrichedRecord` JSON object per line.
    Jsonl,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
        }
    }
}
