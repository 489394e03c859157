//! Configuration for building and querying an autocomplete session.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestreeError};
use crate::records::TitleMode;

/// Default location of the scraped records.
pub const DEFAULT_DATA_FILE: &str = "scraped_data.json";

/// Default command that ends an interactive session.
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

/// Settings for an autocomplete session.
///
/// Every field is optional in the JSON file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// JSON file with the scraped records.
    pub data_file: PathBuf,
    /// Whether titles are indexed whole or word by word.
    pub title_mode: TitleMode,
    /// Maximum number of suggestions printed per query (unlimited if None).
    pub max_suggestions: Option<usize>,
    /// Input that ends an interactive session, compared case-insensitively.
    pub exit_command: String,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            title_mode: TitleMode::Whole,
            max_suggestions: None,
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
        }
    }
}

impl AutocompleteConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: AutocompleteConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.exit_command.trim().is_empty() {
            return Err(SuggestreeError::invalid_config("exit_command must not be empty"));
        }
        if self.max_suggestions == Some(0) {
            return Err(SuggestreeError::invalid_config("max_suggestions must be at least 1"));
        }
        Ok(())
    }

    /// Whether `input` is the command that ends a session.
    pub fn is_exit_command(&self, input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(self.exit_command.trim())
    }
}
