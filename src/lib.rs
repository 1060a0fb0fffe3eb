pub mod analysis;
pub mod binary_search_tree;
pub mod cli;
pub mod data_gen;
pub mod error;
pub mod exitcode;
pub mod input;
pub mod matcher;
pub mod metrics;
pub mod path_search;
pub mod report;

pub use analysis::{BalanceEntry, BalanceReport, TreeStats, balance_report, stats};
pub use binary_search_tree::{BinarySearchTree, TreeNode};
pub use error::{TreeError, TreeResult};
pub use report::{PairReport, SubtreeOutcome, analyze_pair};

pub type Key = i32;
