//! In-order analyses over a finished tree.
//!
//! Everything here is read-only and returns plain data; turning it into text
//! is left to [`crate::report`].

use crate::Key;
use crate::binary_search_tree::BinarySearchTree;
use crate::metrics::{balance_factors, is_avl_balanced};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceEntry {
    pub key: Key,
    pub balance: i32,
    pub violation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    /// One entry per node, ascending by key.
    pub entries: Vec<BalanceEntry>,
    pub is_avl: bool,
}

impl BalanceReport {
    pub fn violations(&self) -> impl Iterator<Item = &BalanceEntry> {
        self.entries.iter().filter(|e| e.violation)
    }
}

/// Aggregates folded in during the in-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub min: Option<Key>,
    pub max: Option<Key>,
    pub sum: i64,
    pub count: usize,
}

impl TreeStats {
    fn visit(&mut self, key: Key) {
        self.min = Some(self.min.map_or(key, |m| m.min(key)));
        self.max = Some(self.max.map_or(key, |m| m.max(key)));
        self.sum += i64::from(key);
        self.count += 1;
    }

    /// `sum / count`, or 0.0 when nothing was counted.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

pub fn balance_report(tree: &BinarySearchTree) -> BalanceReport {
    let balances = balance_factors(tree.root());
    let entries: Vec<BalanceEntry> = tree
        .iter()
        .map(|n| {
            let balance = balances[&n.key()];
            BalanceEntry {
                key: n.key(),
                balance,
                violation: !is_avl_balanced(balance),
            }
        })
        .collect();
    let is_avl = entries.iter().all(|e| !e.violation);

    debug!(nodes = entries.len(), is_avl, "balance report");
    BalanceReport { entries, is_avl }
}

pub fn stats(tree: &BinarySearchTree) -> TreeStats {
    let stats = tree.keys().fold(TreeStats::default(), |mut acc, key| {
        acc.visit(key);
        acc
    });
    debug!(?stats, "tree stats");
    stats
}
