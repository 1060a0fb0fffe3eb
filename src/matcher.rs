//! Structural identity and subtree containment.

use crate::binary_search_tree::{BinarySearchTree, TreeNode};

/// Same keys in the same shape. Two absent subtrees are identical.
pub fn identical(a: Option<&TreeNode>, b: Option<&TreeNode>) -> bool {
    let mut pending = vec![(a, b)];
    while let Some(pair) = pending.pop() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) if x.key() == y.key() => {
                // right pushed first so the left pair is compared first
                pending.push((x.right(), y.right()));
                pending.push((x.left(), y.left()));
            }
            _ => return false,
        }
    }
    true
}

/// Whether `needle` appears, shape and keys, rooted at some node of
/// `haystack`. An absent needle is contained in anything.
pub fn contains_subtree(haystack: Option<&TreeNode>, needle: Option<&TreeNode>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    let mut stack: Vec<&TreeNode> = haystack.into_iter().collect();
    while let Some(n) = stack.pop() {
        if identical(Some(n), Some(needle)) {
            return true;
        }
        stack.extend(n.right());
        stack.extend(n.left());
    }
    false
}

impl BinarySearchTree {
    pub fn contains_subtree(&self, needle: &BinarySearchTree) -> bool {
        contains_subtree(self.root(), needle.root())
    }
}
