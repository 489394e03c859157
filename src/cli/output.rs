//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::autocomplete::Suggestion;
use crate::cli::args::{OutputFormat, SuggestreeArgs};
use crate::error::Result;

/// Result structure for a prefix query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub prefix: String,
    pub total_matches: usize,
    pub suggestions: Vec<Suggestion>,
}

/// Index statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub data_file: String,
    pub distinct_words: usize,
    pub total_occurrences: u64,
    pub tree_height: usize,
    pub skipped_records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanOutput for QueryResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        write_suggestions_human(out, &self.prefix, &self.suggestions)?;
        if self.total_matches > self.suggestions.len() {
            writeln!(
                out,
                "... {} more not shown",
                self.total_matches - self.suggestions.len()
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for IndexStats {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Index Statistics:")?;
        writeln!(out, "════════════════")?;
        writeln!(out, "Data file: {}", self.data_file)?;
        writeln!(out, "Distinct words: {}", self.distinct_words)?;
        writeln!(out, "Total occurrences: {}", self.total_occurrences)?;
        writeln!(out, "Tree height: {}", self.tree_height)?;
        writeln!(out, "Skipped records: {}", self.skipped_records)?;
        if let Some(valid) = self.valid {
            let status = if valid { "ok" } else { "FAILED" };
            writeln!(out, "Validation: {status}")?;
        }
        Ok(())
    }
}

/// Print the ranked suggestions for one prefix.
pub fn write_suggestions_human(
    out: &mut dyn Write,
    input: &str,
    suggestions: &[Suggestion],
) -> Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No suggestions found for: {input}")?;
        return Ok(());
    }

    writeln!(out, "Autocomplete results for '{input}': ")?;
    for suggestion in suggestions {
        writeln!(out, "{suggestion}")?;
    }
    Ok(())
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    out: &mut dyn Write,
    result: &T,
    args: &SuggestreeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(out, result, args.pretty),
    }
}

/// Output as JSON, one document per line unless pretty-printed.
pub fn output_json<T: Serialize>(out: &mut dyn Write, result: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
