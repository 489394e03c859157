//! AVL tree nodes and the rotations that keep them balanced.
//!
//! Every function here takes ownership of a subtree and hands back the
//! (possibly different) root of that subtree; the caller stores it in the
//! slot it came from. Nodes are never shared and never point back to their
//! parent.

use std::cmp::Ordering;

use log::trace;

/// A single word in the tree together with its aggregated occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    pub(crate) key: String,
    pub(crate) count: u64,
    pub(crate) left: Option<Box<WordNode>>,
    pub(crate) right: Option<Box<WordNode>>,
    pub(crate) height: usize,
}

impl WordNode {
    /// Create a leaf node.
    pub(crate) fn new(key: String, count: u64) -> Self {
        WordNode {
            key,
            count,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The normalized word stored in this node.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of occurrences aggregated under this word.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Cached height of the subtree rooted here. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&WordNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&WordNode> {
        self.right.as_deref()
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        subtree_height(&self.left) as isize - subtree_height(&self.right) as isize
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + subtree_height(&self.left).max(subtree_height(&self.right));
    }
}

/// Height of an optional subtree; an absent child has height 0.
pub(crate) fn subtree_height(node: &Option<Box<WordNode>>) -> usize {
    node.as_ref().map_or(0, |n| n.height)
}

/// Whether `insert` created a new node or merged into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertOutcome {
    Created,
    Merged,
}

/// Insert `key` with `count` into the subtree and return its new root.
///
/// `key` must already be normalized and non-empty, and `count` positive.
pub(crate) fn insert(
    node: Option<Box<WordNode>>,
    key: &str,
    count: u64,
    outcome: &mut InsertOutcome,
) -> Box<WordNode> {
    let mut node = match node {
        Some(node) => node,
        None => {
            *outcome = InsertOutcome::Created;
            return Box::new(WordNode::new(key.to_string(), count));
        }
    };

    match key.cmp(node.key.as_str()) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key, count, outcome)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key, count, outcome)),
        Ordering::Equal => {
            node.count = node.count.saturating_add(count);
            *outcome = InsertOutcome::Merged;
            return node;
        }
    }

    // A merge somewhere below leaves every height on this path unchanged.
    if *outcome == InsertOutcome::Merged {
        return node;
    }

    node.update_height();
    rebalance(node, key)
}

/// Restore the balance of `node` after `key` was inserted beneath it.
///
/// The rotation is chosen by comparing the inserted key against the heavy
/// child's key, which distinguishes the left-left/left-right and
/// right-right/right-left cases.
fn rebalance(mut node: Box<WordNode>, key: &str) -> Box<WordNode> {
    let balance = node.balance_factor();

    if balance > 1 {
        let goes_left = node
            .left
            .as_ref()
            .is_some_and(|left| key < left.key.as_str());
        if goes_left {
            trace!("right rotation at '{}'", node.key);
            return rotate_right(node);
        }
        trace!("left-right rotation at '{}'", node.key);
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if balance < -1 {
        let goes_right = node
            .right
            .as_ref()
            .is_some_and(|right| key > right.key.as_str());
        if goes_right {
            trace!("left rotation at '{}'", node.key);
            return rotate_left(node);
        }
        trace!("right-left rotation at '{}'", node.key);
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}

/// Rotate `y` right around its left child and return the new subtree root.
///
/// ```text
///       y            x
///      / \          / \
///     x   C   =>   A   y
///    / \              / \
///   A   B            B   C
/// ```
pub(crate) fn rotate_right(mut y: Box<WordNode>) -> Box<WordNode> {
    let mut x = match y.left.take() {
        Some(x) => x,
        None => return y,
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Rotate `x` left around its right child and return the new subtree root.
pub(crate) fn rotate_left(mut x: Box<WordNode>) -> Box<WordNode> {
    let mut y = match x.right.take() {
        Some(y) => y,
        None => return x,
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: &str) -> Option<Box<WordNode>> {
        Some(Box::new(WordNode::new(key.to_string(), 1)))
    }

    fn build(keys: &[&str]) -> Option<Box<WordNode>> {
        let mut root = None;
        for key in keys {
            let mut outcome = InsertOutcome::Created;
            root = Some(insert(root, key, 1, &mut outcome));
        }
        root
    }

    #[test]
    fn test_leaf_height_and_balance() {
        let node = WordNode::new("apple".to_string(), 3);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert_eq!(node.count(), 3);
        assert_eq!(subtree_height(&None), 0);
    }

    #[test]
    fn test_rotate_right_moves_inner_subtree() {
        let mut x = Box::new(WordNode::new("b".to_string(), 1));
        x.left = leaf("a");
        x.right = leaf("c");
        x.update_height();

        let mut y = Box::new(WordNode::new("d".to_string(), 1));
        y.left = Some(x);
        y.right = leaf("e");
        y.update_height();
        assert_eq!(y.height(), 3);

        let root = rotate_right(y);
        assert_eq!(root.key(), "b");
        assert_eq!(root.left().unwrap().key(), "a");
        let new_right = root.right().unwrap();
        assert_eq!(new_right.key(), "d");
        assert_eq!(new_right.left().unwrap().key(), "c");
        assert_eq!(new_right.right().unwrap().key(), "e");
        assert_eq!(new_right.height(), 2);
        assert_eq!(root.height(), 3);
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let node = Box::new(WordNode::new("solo".to_string(), 1));
        let node = rotate_left(node);
        assert_eq!(node.key(), "solo");
        let node = rotate_right(node);
        assert_eq!(node.key(), "solo");
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn test_ascending_inserts_rotate_left() {
        let root = build(&["a", "b", "c"]).unwrap();
        assert_eq!(root.key(), "b");
        assert_eq!(root.height(), 2);
        assert_eq!(root.left().unwrap().key(), "a");
        assert_eq!(root.right().unwrap().key(), "c");
        assert_eq!(root.left().unwrap().height(), 1);
        assert_eq!(root.right().unwrap().height(), 1);
    }

    #[test]
    fn test_descending_inserts_rotate_right() {
        let root = build(&["c", "b", "a"]).unwrap();
        assert_eq!(root.key(), "b");
        assert_eq!(root.left().unwrap().key(), "a");
        assert_eq!(root.right().unwrap().key(), "c");
    }

    #[test]
    fn test_left_right_case() {
        let root = build(&["c", "a", "b"]).unwrap();
        assert_eq!(root.key(), "b");
        assert_eq!(root.left().unwrap().key(), "a");
        assert_eq!(root.right().unwrap().key(), "c");
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn test_right_left_case() {
        let root = build(&["a", "c", "b"]).unwrap();
        assert_eq!(root.key(), "b");
        assert_eq!(root.left().unwrap().key(), "a");
        assert_eq!(root.right().unwrap().key(), "c");
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn test_merge_keeps_shape() {
        let root = build(&["b", "a", "c"]).unwrap();
        let before = root.clone();

        let mut outcome = InsertOutcome::Created;
        let root = insert(Some(root), "c", 4, &mut outcome);
        assert_eq!(outcome, InsertOutcome::Merged);
        assert_eq!(root.key(), before.key());
        assert_eq!(root.height(), before.height());
        assert_eq!(root.right().unwrap().count(), 5);
    }

    #[test]
    fn test_merge_saturates() {
        let mut outcome = InsertOutcome::Created;
        let root = insert(None, "max", u64::MAX - 1, &mut outcome);
        let root = insert(Some(root), "max", 10, &mut outcome);
        assert_eq!(root.count(), u64::MAX);
    }
}
