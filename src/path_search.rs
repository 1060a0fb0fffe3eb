use crate::Key;
use crate::binary_search_tree::{BinarySearchTree, TreeNode};
use std::cmp::Ordering;

/// Keys visited on the BST-directed walk from `root` to `key`, ending with
/// `key` itself. `None` when the walk runs off the tree; a failed walk
/// never leaks its dead-end keys.
pub fn search_path(root: Option<&TreeNode>, key: Key) -> Option<Vec<Key>> {
    let mut path = Vec::new();
    let mut current = root;
    while let Some(n) = current {
        path.push(n.key());
        current = match key.cmp(&n.key()) {
            Ordering::Less => n.left(),
            Ordering::Greater => n.right(),
            Ordering::Equal => return Some(path),
        };
    }
    None
}

impl BinarySearchTree {
    pub fn search_path(&self, key: Key) -> Option<Vec<Key>> {
        search_path(self.root(), key)
    }
}
