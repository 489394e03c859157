//! Command line argument parsing for the Suggestree CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AutocompleteConfig;
use crate::error::{Result, SuggestreeError};
use crate::records::TitleMode;

/// Suggestree - frequency-ranked prefix autocomplete over scraped titles
#[derive(Parser, Debug, Clone)]
#[command(name = "suggestree")]
#[command(about = "Frequency-ranked prefix autocomplete over scraped titles")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct SuggestreeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(
        short,
        long,
        value_name = "CONFIG_FILE",
        env = "SUGGESTREE_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SuggestreeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Read prefixes from stdin and print ranked completions
    Interactive(SourceArgs),

    /// Print ranked completions for a single prefix
    Query(QueryArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Where the records come from and how they are indexed
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Records file (JSON) produced by the collector
    #[arg(short, long, value_name = "DATA_FILE", env = "SUGGESTREE_DATA")]
    pub data: Option<PathBuf>,

    /// Index each word of a title instead of the whole title
    #[arg(short, long)]
    pub words: bool,

    /// Maximum number of suggestions to print per prefix
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl SourceArgs {
    /// Overlay these flags on a configuration.
    ///
    /// `--limit 0` is rejected before it touches the configuration.
    pub fn apply_to(&self, config: &mut AutocompleteConfig) -> Result<()> {
        if self.limit == Some(0) {
            return Err(SuggestreeError::invalid_argument("--limit must be at least 1"));
        }
        if let Some(data) = &self.data {
            config.data_file = data.clone();
        }
        if self.words {
            config.title_mode = TitleMode::Words;
        }
        if self.limit.is_some() {
            config.max_suggestions = self.limit;
        }
        Ok(())
    }
}

/// Arguments for a one-shot query
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Prefix to complete (empty matches every word)
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for index statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Verify tree ordering, heights and balance
    #[arg(long)]
    pub validate: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
