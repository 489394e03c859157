//! # Suggestree
//!
//! Frequency-ranked prefix autocomplete for Rust.
//!
//! ## Features
//!
//! - Case-insensitive word aggregation in a self-balancing AVL tree
//! - Prefix queries ranked by occurrence count, ties broken alphabetically
//! - Lock-protected shared handle for multi-threaded embedders
//! - Loading of scraped JSON records and an interactive CLI

pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod error;
pub mod records;

pub mod prelude {
    pub use crate::autocomplete::{AutocompleteIndex, SharedAutocompleteIndex, Suggestion};
    pub use crate::error::{Result, SuggestreeError};
    pub use crate::records::{ScrapedData, TitleMode};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
