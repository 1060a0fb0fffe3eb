//! Shape metrics: height, balance factor and the AVL predicate.
//!
//! Balance factor is `height(right) - height(left)`, so a positive value
//! means the node leans right. An absent node has height 0 and balance 0.

use crate::Key;
use crate::binary_search_tree::{BinarySearchTree, TreeNode};
use std::collections::HashMap;

/// Allowed balance factor range for an AVL-valid node.
pub const AVL_RANGE: std::ops::RangeInclusive<i32> = -1..=1;

/// Number of levels below and including `node`, counted level by level.
pub fn height(node: Option<&TreeNode>) -> usize {
    let mut level: Vec<&TreeNode> = node.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }
    height
}

pub fn balance_factor(node: Option<&TreeNode>) -> i32 {
    match node {
        None => 0,
        Some(n) => height(n.right()) as i32 - height(n.left()) as i32,
    }
}

pub fn is_avl_balanced(balance: i32) -> bool {
    AVL_RANGE.contains(&balance)
}

/// Balance factor of every node under `root`, keyed by node key.
///
/// One post-order pass: each height is computed once from its children's,
/// instead of calling `height` again at every node.
pub fn balance_factors(root: Option<&TreeNode>) -> HashMap<Key, i32> {
    let mut heights: HashMap<Key, usize> = HashMap::new();
    let mut balances = HashMap::new();
    let mut stack: Vec<(&TreeNode, bool)> = root.map(|n| (n, false)).into_iter().collect();

    while let Some((n, children_done)) = stack.pop() {
        if children_done {
            let left = n.left().map_or(0, |l| heights[&l.key()]);
            let right = n.right().map_or(0, |r| heights[&r.key()]);
            heights.insert(n.key(), 1 + left.max(right));
            balances.insert(n.key(), right as i32 - left as i32);
        } else {
            stack.push((n, true));
            stack.extend(n.right().map(|r| (r, false)));
            stack.extend(n.left().map(|l| (l, false)));
        }
    }
    balances
}

/// True iff every node's balance factor lies within [`AVL_RANGE`].
pub fn is_avl(tree: &BinarySearchTree) -> bool {
    balance_factors(tree.root())
        .values()
        .all(|&balance| is_avl_balanced(balance))
}

impl BinarySearchTree {
    pub fn height(&self) -> usize {
        height(self.root())
    }

    pub fn is_avl(&self) -> bool {
        is_avl(self)
    }
}
