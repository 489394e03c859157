//! The prefix autocomplete index.

use std::cmp::Ordering;

use log::debug;

use crate::autocomplete::node::{self, InsertOutcome, WordNode};
use crate::autocomplete::suggestion::Suggestion;
use crate::error::{Result, SuggestreeError};

/// Normalize a word or prefix to the case used for storage and comparison.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// A frequency-aggregating autocomplete index backed by an AVL tree.
///
/// Words are lowercased before they are stored or compared, so `"Apple"`
/// and `"apple"` share one entry. Re-inserting a word adds to its count
/// instead of creating a second node.
///
/// # Examples
///
/// ```
/// use suggestree::autocomplete::{AutocompleteIndex, Suggestion};
///
/// let mut index = AutocompleteIndex::new();
/// index.insert_with_count("Cat", 3);
/// index.insert("car");
///
/// assert_eq!(
///     index.suggest("ca"),
///     vec![Suggestion::new("cat", 3), Suggestion::new("car", 1)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutocompleteIndex {
    root: Option<Box<WordNode>>,
    /// Number of distinct words.
    len: usize,
    /// Sum of all counts.
    total: u64,
}

impl AutocompleteIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        AutocompleteIndex::default()
    }

    /// Record one occurrence of `word`.
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_with_count(word, 1)
    }

    /// Record `count` occurrences of `word`.
    ///
    /// Words that are empty after normalization and counts of zero or less
    /// are ignored. Returns whether the index changed.
    pub fn insert_with_count(&mut self, word: &str, count: i64) -> bool {
        if count <= 0 {
            return false;
        }
        let key = normalize(word);
        if key.is_empty() {
            return false;
        }

        let count = count as u64;
        let mut outcome = InsertOutcome::Created;
        self.root = Some(node::insert(self.root.take(), &key, count, &mut outcome));

        if outcome == InsertOutcome::Created {
            self.len += 1;
        }
        self.total = self.total.saturating_add(count);
        true
    }

    /// Insert every word once. Returns the number of words accepted.
    pub fn insert_all<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = words
            .into_iter()
            .filter(|word| self.insert(word.as_ref()))
            .count();
        debug!(
            "bulk insert accepted {accepted} words ({} distinct in index)",
            self.len
        );
        accepted
    }

    /// Insert `(word, count)` pairs. Returns the number of pairs accepted.
    pub fn insert_all_counted<I, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let accepted = entries
            .into_iter()
            .filter(|(word, count)| self.insert_with_count(word.as_ref(), *count))
            .count();
        debug!(
            "bulk insert accepted {accepted} counted entries ({} distinct in index)",
            self.len
        );
        accepted
    }

    /// All stored words starting with `prefix`, most frequent first.
    ///
    /// Equal counts are ordered alphabetically. An empty prefix matches
    /// every word; a prefix with no matches yields an empty vector.
    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        let prefix = normalize(prefix);
        let mut matches = Vec::new();

        // Keys starting with the prefix form a contiguous range in key order,
        // so whole subtrees outside that range are skipped.
        let mut stack: Vec<&WordNode> = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            if node.key.starts_with(&prefix) {
                matches.push(Suggestion::new(node.key.clone(), node.count));
                stack.extend(node.left.as_deref());
                stack.extend(node.right.as_deref());
            } else if node.key.as_str() < prefix.as_str() {
                stack.extend(node.right.as_deref());
            } else {
                stack.extend(node.left.as_deref());
            }
        }

        matches.sort_unstable();
        matches
    }

    /// Like [`suggest`](Self::suggest) but keeps at most `limit` results.
    pub fn suggest_top(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        let mut suggestions = self.suggest(prefix);
        suggestions.truncate(limit);
        suggestions
    }

    /// Aggregated count for `word`, or 0 when it was never inserted.
    pub fn count(&self, word: &str) -> u64 {
        let key = normalize(word);
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.as_str().cmp(node.key.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return node.count,
            };
        }
        0
    }

    /// Check if a word exists in the index.
    pub fn contains(&self, word: &str) -> bool {
        self.count(word) > 0
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sum of the counts of all words.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> usize {
        node::subtree_height(&self.root)
    }

    /// Root node of the tree, for inspecting its shape.
    pub fn root(&self) -> Option<&WordNode> {
        self.root.as_deref()
    }

    /// Iterate over `(word, count)` in ascending word order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.total = 0;
    }

    /// Verify search order, cached heights, balance and the cached sizes.
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        let mut previous: Option<&str> = None;
        for (word, count) in self.iter() {
            if let Some(prev) = previous
                && prev >= word
            {
                return Err(SuggestreeError::invariant(format!(
                    "keys out of order: '{prev}' before '{word}'"
                )));
            }
            if count == 0 {
                return Err(SuggestreeError::invariant(format!(
                    "word '{word}' has a zero count"
                )));
            }
            previous = Some(word);
        }

        check_subtree(self.root.as_deref())?;

        let (len, total) = self
            .iter()
            .fold((0usize, 0u64), |(len, total), (_, count)| {
                (len + 1, total.saturating_add(count))
            });
        if len != self.len {
            return Err(SuggestreeError::invariant(format!(
                "cached length {} but tree holds {len} words",
                self.len
            )));
        }
        if total != self.total {
            return Err(SuggestreeError::invariant(format!(
                "cached total {} but counts sum to {total}",
                self.total
            )));
        }
        Ok(())
    }
}

/// Check heights and balance below `node`, returning the subtree height.
fn check_subtree(node: Option<&WordNode>) -> Result<usize> {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };

    let left = check_subtree(node.left.as_deref())?;
    let right = check_subtree(node.right.as_deref())?;
    let expected = 1 + left.max(right);

    if node.height != expected {
        return Err(SuggestreeError::invariant(format!(
            "node '{}' caches height {} but has height {expected}",
            node.key, node.height
        )));
    }
    if left.abs_diff(right) > 1 {
        return Err(SuggestreeError::invariant(format!(
            "node '{}' is unbalanced ({left} vs {right})",
            node.key
        )));
    }
    Ok(expected)
}

/// In-order iterator over the words of an [`AutocompleteIndex`].
pub struct Iter<'a> {
    stack: Vec<&'a WordNode>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a WordNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.key.as_str(), node.count))
    }
}

impl<'a> IntoIterator for &'a AutocompleteIndex {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for AutocompleteIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for AutocompleteIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = AutocompleteIndex::new();
        index.insert_all(iter);
        index
    }
}
