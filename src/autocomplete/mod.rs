//! Frequency-ranked prefix autocomplete.
//!
//! Words are aggregated in a self-balancing AVL tree keyed by their
//! lowercase form. A prefix query returns every stored word that starts
//! with the prefix, ordered by descending count and then alphabetically.

pub mod index;
pub mod node;
pub mod shared;
pub mod suggestion;

// Re-export commonly used types
pub use index::*;
pub use node::WordNode;
pub use shared::*;
pub use suggestion::*;
