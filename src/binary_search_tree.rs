use crate::Key;
use crate::error::{TreeError, TreeResult};
use std::cmp::Ordering;
use tracing::trace;

/// Plain, never rebalanced binary search tree over `Key`s.
///
/// Keys equal to one already present are absorbed by `insert`, so the tree
/// holds exactly one node per distinct key, shaped by insertion order.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
    len: usize,
}

#[derive(Debug)]
pub struct TreeNode {
    key: Key,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting `keys` in the order given.
    pub fn new_with_keys(keys: &[Key]) -> Self {
        let mut tree = Self::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `false` when `key` was already present and nothing was added.
    pub fn insert(&mut self, key: Key) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(key, "duplicate key absorbed");
                    return false;
                }
            };
        }
        *slot = Some(Box::new(TreeNode::new(key)));
        self.len += 1;
        true
    }

    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    pub fn search(&self, key: Key) -> Option<&TreeNode> {
        let mut current = self.root();
        while let Some(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
                Ordering::Equal => return Some(n),
            };
        }
        None
    }

    pub fn min(&self) -> TreeResult<Key> {
        let mut n = self.root().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = n.left() {
            n = left;
        }
        Ok(n.key)
    }

    pub fn max(&self) -> TreeResult<Key> {
        let mut n = self.root().ok_or(TreeError::EmptyTree)?;
        while let Some(right) = n.right() {
            n = right;
        }
        Ok(n.key)
    }

    /// Nodes in ascending key order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter().map(TreeNode::key)
    }

    /// Sideways dump: right subtrees above, left subtrees below.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(&TreeNode, String, bool)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, String::new(), true));
        }

        while let Some((n, prefix, is_tail)) = stack.pop() {
            out.push_str(&format!(
                "{}{} {}\n",
                prefix,
                if is_tail { "└──" } else { "├──" },
                n.key
            ));

            let new_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });

            // popped right first
            if let Some(left) = n.left() {
                stack.push((left, new_prefix.clone(), true));
            }
            if let Some(right) = n.right() {
                stack.push((right, new_prefix, n.left.is_none()));
            }
        }
        out
    }

    pub fn pretty_print(&self) {
        println!("\n=== Binary Search Tree ===");
        if self.is_empty() {
            println!("  (empty tree)");
        } else {
            print!("{}", self.render());
        }
        println!("=========================\n");
    }
}

impl Drop for BinarySearchTree {
    // unlinks nodes one by one; a skewed chain would otherwise drop recursively
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl FromIterator<Key> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = &'a TreeNode;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order walk with an explicit stack of pending ancestors.
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InOrder<'a> {
    pub fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right());
        Some(n)
    }
}
