//! Text rendering of analysis results, one search tree / subtree pair at a
//! time.

use crate::Key;
use crate::analysis::{BalanceEntry, BalanceReport, TreeStats, balance_report, stats};
use crate::binary_search_tree::BinarySearchTree;
use std::fmt;
use tracing::debug;

pub const SEPARATOR: &str = "====================================";

/// One decimal, halves rounded away from zero (4.25 -> "4.3").
pub fn format_average(avg: f64) -> String {
    // `+ 0.0` folds a rounded -0.0 into 0.0
    let rounded = (avg * 10.0).round() / 10.0 + 0.0;
    format!("{:.1}", rounded)
}

impl fmt::Display for BalanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bal({}) = {}", self.key, self.balance)?;
        if self.violation {
            write!(f, " (AVL violation!)")?;
        }
        Ok(())
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        write!(f, "AVL: {}", if self.is_avl { "yes" } else { "no" })
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |k: Option<Key>| k.map_or_else(|| "n/a".to_string(), |k| k.to_string());
        write!(
            f,
            "min: {}, max: {}, avg: {}",
            show(self.min),
            show(self.max),
            format_average(self.average())
        )
    }
}

/// What was asked of the subtree input and what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtreeOutcome {
    /// The subtree input held a single key: path search for it.
    Path { key: Key, path: Option<Vec<Key>> },
    /// Any other count, zero included: containment search.
    Containment(bool),
}

impl fmt::Display for SubtreeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtreeOutcome::Path { key, path: Some(path) } => {
                let joined: Vec<String> = path.iter().map(|k| k.to_string()).collect();
                write!(f, "{} found {}", key, joined.join(", "))
            }
            SubtreeOutcome::Path { key, path: None } => write!(f, "{} not found!", key),
            SubtreeOutcome::Containment(true) => write!(f, "Subtree found"),
            SubtreeOutcome::Containment(false) => write!(f, "Subtree not found!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    pub balance: BalanceReport,
    pub stats: TreeStats,
    pub subtree: SubtreeOutcome,
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.balance)?;
        writeln!(f, "{}", self.stats)?;
        writeln!(f, "{}", self.subtree)?;
        writeln!(f, "{}", SEPARATOR)
    }
}

/// Runs every analysis for one search tree and its subtree input.
///
/// `subtree_keys` is taken raw: its length, duplicates included, picks
/// between path search and containment.
pub fn analyze_pair(tree: &BinarySearchTree, subtree_keys: &[Key]) -> PairReport {
    let subtree = match subtree_keys {
        [key] => SubtreeOutcome::Path {
            key: *key,
            path: tree.search_path(*key),
        },
        keys => {
            let needle = BinarySearchTree::new_with_keys(keys);
            SubtreeOutcome::Containment(tree.contains_subtree(&needle))
        }
    };
    debug!(?subtree, "subtree search");

    PairReport {
        balance: balance_report(tree),
        stats: stats(tree),
        subtree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_average_rounds_half_away_from_zero() {
        assert_eq!(format_average(4.25), "4.3");
        assert_eq!(format_average(-4.25), "-4.3");
        assert_eq!(format_average(0.05), "0.1");
        assert_eq!(format_average(4.0), "4.0");
        assert_eq!(format_average(-0.01), "0.0");
        assert_eq!(format_average(0.0), "0.0");
    }

    #[test]
    fn test_balance_lines() {
        let bst = BinarySearchTree::new_with_keys(&[10, 5, 1]);
        assert_eq!(
            balance_report(&bst).to_string(),
            "bal(1) = 0\nbal(5) = -1\nbal(10) = -2 (AVL violation!)\nAVL: no"
        );
    }

    #[test]
    fn test_stats_line() {
        let bst = BinarySearchTree::new_with_keys(&[5, 3, 8, 1]);
        assert_eq!(stats(&bst).to_string(), "min: 1, max: 8, avg: 4.3");
        assert_eq!(
            stats(&BinarySearchTree::new()).to_string(),
            "min: n/a, max: n/a, avg: 0.0"
        );
    }

    #[test]
    fn test_single_key_subtree_runs_path_search() {
        let bst = BinarySearchTree::new_with_keys(&[8, 3, 10, 1, 6, 14]);
        let report = analyze_pair(&bst, &[6]);
        assert_eq!(
            report.subtree,
            SubtreeOutcome::Path { key: 6, path: Some(vec![8, 3, 6]) }
        );
        assert_eq!(report.subtree.to_string(), "6 found 8, 3, 6");

        let missing = analyze_pair(&bst, &[99]);
        assert_eq!(missing.subtree.to_string(), "99 not found!");
    }

    #[test]
    fn test_duplicate_keys_still_count_as_subtree_input() {
        // two lines, one distinct key: containment, not path search
        let bst = BinarySearchTree::new_with_keys(&[8, 3, 10, 1, 6, 14]);
        let report = analyze_pair(&bst, &[14, 14]);
        assert_eq!(report.subtree, SubtreeOutcome::Containment(true));
    }

    #[test]
    fn test_empty_subtree_input_is_found() {
        let bst = BinarySearchTree::new_with_keys(&[1]);
        assert_eq!(analyze_pair(&bst, &[]).subtree.to_string(), "Subtree found");
    }

    #[test]
    fn test_full_pair_report() {
        let bst = BinarySearchTree::new_with_keys(&[8, 3, 10, 1, 6, 14]);
        let report = analyze_pair(&bst, &[3, 1, 7]);
        let expected = "\
bal(1) = 0
bal(3) = 0
bal(6) = 0
bal(8) = 0
bal(10) = 1
bal(14) = 0
AVL: yes
min: 1, max: 14, avg: 7.0
Subtree not found!
====================================
";
        assert_eq!(report.to_string(), expected);
    }
}
