//! Command implementations for the Suggestree CLI.

use std::io::{self, BufRead, Write};

use log::{debug, error, info, warn};

use crate::autocomplete::{AutocompleteIndex, Suggestion};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AutocompleteConfig;
use crate::error::Result;
use crate::records::ScrapedData;

/// Execute a CLI command.
pub fn execute_command(args: SuggestreeArgs) -> Result<()> {
    let mut config = load_config(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Interactive(source) => {
            source.apply_to(&mut config)?;
            config.validate()?;
            let index = load_index_or_empty(&config);
            let stdin = io::stdin();
            run_interactive(&index, &config, args.output_format, stdin.lock(), &mut out)?;
            Ok(())
        }
        Command::Query(query_args) => {
            query_args.source.apply_to(&mut config)?;
            config.validate()?;
            let (index, _) = load_index(&config)?;
            let result = query_index(&index, &query_args.prefix, config.max_suggestions);
            output_result(&mut out, &result, &args)
        }
        Command::Stats(stats_args) => {
            stats_args.source.apply_to(&mut config)?;
            config.validate()?;
            let stats = show_stats(&config, stats_args.validate)?;
            output_result(&mut out, &stats, &args)
        }
    }
}

/// Read the configuration file named on the command line, or use defaults.
pub fn load_config(args: &SuggestreeArgs) -> Result<AutocompleteConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            AutocompleteConfig::load_from_file(path)
        }
        None => Ok(AutocompleteConfig::default()),
    }
}

/// Load the records file and build an index from its titles.
///
/// Returns the index and the number of records skipped for lacking a title.
pub fn load_index(config: &AutocompleteConfig) -> Result<(AutocompleteIndex, usize)> {
    let data = ScrapedData::load_from_file(&config.data_file)?;
    Ok((data.build_index(config.title_mode), data.skipped_titles()))
}

/// Like [`load_index`], but a missing or malformed file yields an empty index.
pub fn load_index_or_empty(config: &AutocompleteConfig) -> AutocompleteIndex {
    match load_index(config) {
        Ok((index, _)) => index,
        Err(e) => {
            error!(
                "could not load records from {}: {e}",
                config.data_file.display()
            );
            warn!("continuing with an empty index");
            AutocompleteIndex::new()
        }
    }
}

/// Run a prefix query and keep at most `limit` results.
pub fn query_index(index: &AutocompleteIndex, prefix: &str, limit: Option<usize>) -> QueryResult {
    let mut suggestions: Vec<Suggestion> = index.suggest(prefix);
    let total_matches = suggestions.len();
    if let Some(limit) = limit {
        suggestions.truncate(limit);
    }
    QueryResult {
        prefix: prefix.to_string(),
        total_matches,
        suggestions,
    }
}

/// Read prefixes line by line and print ranked completions for each.
///
/// The loop ends at end of input or when a line equals the exit command.
/// Returns the number of queries answered.
pub fn run_interactive<R: BufRead, W: Write>(
    index: &AutocompleteIndex,
    config: &AutocompleteConfig,
    format: OutputFormat,
    input: R,
    output: &mut W,
) -> Result<usize> {
    if format == OutputFormat::Human {
        writeln!(
            output,
            "Enter a prefix to autocomplete (type '{}' to quit):",
            config.exit_command
        )?;
        output.flush()?;
    }

    let mut queries = 0;
    for line in input.lines() {
        let line = line?;
        let prefix = line.trim();
        if config.is_exit_command(prefix) {
            break;
        }

        let result = query_index(index, prefix, config.max_suggestions);
        match format {
            OutputFormat::Human => result.write_human(output)?,
            OutputFormat::Json => output_json(output, &result, false)?,
        }
        output.flush()?;
        queries += 1;
    }

    info!("interactive session answered {queries} queries");
    Ok(queries)
}

/// Build the index and collect its statistics.
fn show_stats(config: &AutocompleteConfig, validate: bool) -> Result<IndexStats> {
    let (index, skipped_records) = load_index(config)?;

    let valid = if validate {
        match index.check_invariants() {
            Ok(()) => Some(true),
            Err(e) => {
                error!("{e}");
                Some(false)
            }
        }
    } else {
        None
    };

    Ok(IndexStats {
        data_file: config.data_file.display().to_string(),
        distinct_words: index.len(),
        total_occurrences: index.total_count(),
        tree_height: index.height(),
        skipped_records,
        valid,
    })
}
