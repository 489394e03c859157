//! A lock-protected handle for sharing one index between threads.
//!
//! Rotations rewrite several ownership edges at once, so readers and
//! writers go through the same exclusive lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::autocomplete::index::AutocompleteIndex;
use crate::autocomplete::suggestion::Suggestion;

/// Cloneable handle to an [`AutocompleteIndex`] behind a single mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedAutocompleteIndex {
    inner: Arc<Mutex<AutocompleteIndex>>,
}

impl SharedAutocompleteIndex {
    /// Create a handle to a new empty index.
    pub fn new() -> Self {
        SharedAutocompleteIndex::default()
    }

    /// Wrap an existing index.
    pub fn from_index(index: AutocompleteIndex) -> Self {
        SharedAutocompleteIndex {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    pub fn insert(&self, word: &str) -> bool {
        self.inner.lock().insert(word)
    }

    pub fn insert_with_count(&self, word: &str, count: i64) -> bool {
        self.inner.lock().insert_with_count(word, count)
    }

    /// Insert a batch of words under one lock acquisition.
    pub fn insert_all<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.lock().insert_all(words)
    }

    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        self.inner.lock().suggest(prefix)
    }

    pub fn suggest_top(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        self.inner.lock().suggest_top(prefix, limit)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` against the index while holding the lock.
    pub fn with_index<R>(&self, f: impl FnOnce(&AutocompleteIndex) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Take the index out of the handle if this is the last reference.
    pub fn into_inner(self) -> Option<AutocompleteIndex> {
        Arc::into_inner(self.inner).map(Mutex::into_inner)
    }
}
