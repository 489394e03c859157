//! Ranked autocomplete results.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A completion for a prefix together with how often the word was seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The normalized (lowercase) word.
    pub word: String,
    /// Aggregated occurrence count.
    pub count: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, count: u64) -> Self {
        Suggestion {
            word: word.into(),
            count,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher counts come first, equal counts fall back to the word
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (frequency: {})", self.word, self.count)
    }
}

impl From<(String, u64)> for Suggestion {
    fn from((word, count): (String, u64)) -> Self {
        Suggestion { word, count }
    }
}

impl From<Suggestion> for (String, u64) {
    fn from(suggestion: Suggestion) -> Self {
        (suggestion.word, suggestion.count)
    }
}
