//! Scraped records that feed the autocomplete index.
//!
//! The upstream collector writes a JSON document with a list of travel
//! packages and a list of FAQ entries. Only package titles are indexed;
//! the other fields are carried so the file round-trips without loss.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::autocomplete::AutocompleteIndex;
use crate::error::Result;

/// One scraped package listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
}

impl PackageRecord {
    /// Create a record that only carries a title.
    pub fn with_title<S: Into<String>>(title: S) -> Self {
        PackageRecord {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// The title with surrounding whitespace trimmed, if present and not
    /// blank. This trimmed form is what gets indexed, so `"  Paris "` is
    /// stored as `"paris"`.
    pub fn usable_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

/// One scraped FAQ entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqRecord {
    pub question: Option<String>,
    pub answers: Vec<String>,
}

/// How titles are turned into index entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleMode {
    /// Each title is a single entry.
    #[default]
    Whole,
    /// Each Unicode word of a title is its own entry.
    Words,
}

/// The full document produced by the collector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedData {
    pub packages: Vec<PackageRecord>,
    pub faqs: Vec<FaqRecord>,
}

impl ScrapedData {
    /// Parse records from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load records from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let data = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} packages and {} faqs from {}",
            data.packages.len(),
            data.faqs.len(),
            path.display()
        );
        Ok(data)
    }

    /// Number of packages whose title is absent or blank.
    pub fn skipped_titles(&self) -> usize {
        self.packages
            .iter()
            .filter(|package| package.usable_title().is_none())
            .count()
    }

    /// Index entries derived from the package titles.
    pub fn titles(&self, mode: TitleMode) -> Vec<&str> {
        let titles = self.packages.iter().filter_map(PackageRecord::usable_title);
        match mode {
            TitleMode::Whole => titles.collect(),
            TitleMode::Words => titles.flat_map(|title| title.unicode_words()).collect(),
        }
    }

    /// Build an index from the package titles.
    pub fn build_index(&self, mode: TitleMode) -> AutocompleteIndex {
        let skipped = self.skipped_titles();
        if skipped > 0 {
            debug!("skipping {skipped} packages without a title");
        }

        let mut index = AutocompleteIndex::new();
        let accepted = index.insert_all(self.titles(mode));
        info!(
            "indexed {accepted} entries as {} distinct words",
            index.len()
        );
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "packages": [
            {"title": "Paris Getaway", "description": "3 nights", "price": "$999", "link": "https://example.com/1"},
            {"title": "paris getaway", "price": "$899"},
            {"title": "Rome Escape"},
            {"title": ""},
            {"title": "   "},
            {"description": "no title here"},
            {"title": null}
        ],
        "faqs": [
            {"question": "Can I cancel?", "answers": ["Yes", "Within 24 hours"]}
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let data = ScrapedData::from_json_str(SAMPLE).unwrap();
        assert_eq!(data.packages.len(), 7);
        assert_eq!(data.faqs.len(), 1);
        assert_eq!(data.faqs[0].answers.len(), 2);
        assert_eq!(data.packages[0].price.as_deref(), Some("$999"));
        assert_eq!(data.skipped_titles(), 4);
    }

    #[test]
    fn test_missing_sections_default() {
        let data = ScrapedData::from_json_str("{}").unwrap();
        assert!(data.packages.is_empty());
        assert!(data.faqs.is_empty());

        let data = ScrapedData::from_json_str(r#"{"packages": [{"title": "Oslo"}]}"#).unwrap();
        assert_eq!(data.titles(TitleMode::Whole), vec!["Oslo"]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(ScrapedData::from_json_str("{\"packages\": [").is_err());
        assert!(ScrapedData::from_json_str("{\"packages\": 5}").is_err());
    }

    #[test]
    fn test_whole_titles_index() {
        let data = ScrapedData::from_json_str(SAMPLE).unwrap();
        let index = data.build_index(TitleMode::Whole);

        assert_eq!(index.len(), 2);
        assert_eq!(index.count("paris getaway"), 2);
        assert_eq!(index.count("rome escape"), 1);
    }

    #[test]
    fn test_word_titles_index() {
        let data = ScrapedData::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            data.titles(TitleMode::Words),
            vec!["Paris", "Getaway", "paris", "getaway", "Rome", "Escape"]
        );

        let index = data.build_index(TitleMode::Words);
        assert_eq!(index.len(), 4);
        assert_eq!(index.count("getaway"), 2);
        assert_eq!(index.count("escape"), 1);
    }

    #[test]
    fn test_titles_are_trimmed_before_indexing() {
        assert_eq!(PackageRecord::with_title("  Paris ").usable_title(), Some("Paris"));
        assert_eq!(PackageRecord::with_title(" \t ").usable_title(), None);
        assert_eq!(PackageRecord::default().usable_title(), None);

        let data = ScrapedData {
            packages: vec![
                PackageRecord::with_title("  Paris "),
                PackageRecord::with_title("Paris"),
            ],
            faqs: Vec::new(),
        };
        let index = data.build_index(TitleMode::Whole);
        assert_eq!(index.len(), 1);
        assert_eq!(index.count("paris"), 2);
        assert!(!index.contains("  paris "));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{SAMPLE}").unwrap();
        temp_file.flush().unwrap();

        let data = ScrapedData::load_from_file(temp_file.path()).unwrap();
        assert_eq!(data.packages.len(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScrapedData::load_from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(crate::error::SuggestreeError::Io(_))));
    }
}
