//! Command line surface: argument definitions and the per-pair driver.

use crate::binary_search_tree::BinarySearchTree;
use crate::error::TreeError;
use crate::exitcode;
use crate::input::read_keys;
use crate::report::analyze_pair;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Builds a binary search tree per input file and reports its balance,
/// key statistics and a subtree or path search.
#[derive(Parser, Debug)]
#[command(name = "treecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Also draw each search tree
    #[arg(long)]
    pub tree: bool,

    /// Pairs of files: <search tree> <subtree> [<search tree> <subtree> ...]
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// The file arguments grouped as (search tree, subtree).
    pub fn pairs(&self) -> Result<Vec<(PathBuf, PathBuf)>, CliError> {
        if self.files.is_empty() || self.files.len() % 2 != 0 {
            return Err(CliError::Usage(format!(
                "expected pairs of files, got {} argument(s)\n\
                 Usage: treecheck <search_tree_1> <subtree_1> [<search_tree_2> <subtree_2> ...]",
                self.files.len()
            )));
        }
        Ok(self
            .files
            .chunks(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect())
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Tree(TreeError::Parse { .. }) => exitcode::DATAERR,
            CliError::Tree(TreeError::Io { .. }) => exitcode::NOINPUT,
            CliError::Tree(TreeError::EmptyTree) => exitcode::DATAERR,
            CliError::Output(_) => exitcode::IOERR,
        }
    }
}

/// Processes every pair in argument order, stopping at the first error.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let pairs = cli.pairs()?;
    info!(pairs = pairs.len(), "processing");

    for (tree_path, subtree_path) in pairs {
        writeln!(
            out,
            "Processing files: {} and {}",
            tree_path.display(),
            subtree_path.display()
        )?;

        let tree_keys = read_keys(&tree_path)?;
        let subtree_keys = read_keys(&subtree_path)?;

        let tree = BinarySearchTree::new_with_keys(&tree_keys);
        debug!(
            keys = tree_keys.len(),
            nodes = tree.len(),
            height = tree.height(),
            "built search tree"
        );
        if cli.tree {
            write!(out, "{}", tree.render())?;
        }

        let report = analyze_pair(&tree, &subtree_keys);
        write!(out, "{}", report)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["treecheck", "-dd", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.debug, 2);
        assert!(!cli.tree);
        assert_eq!(
            cli.pairs().unwrap(),
            vec![(PathBuf::from("a.txt"), PathBuf::from("b.txt"))]
        );
    }

    #[test]
    fn test_odd_file_count_is_usage_error() {
        let cli = Cli::try_parse_from(["treecheck", "a.txt", "b.txt", "c.txt"]).unwrap();
        let err = cli.pairs().unwrap_err();
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn test_no_files_rejected_by_clap() {
        assert!(Cli::try_parse_from(["treecheck"]).is_err());
    }

    #[test]
    fn test_missing_file_exit_code() {
        let cli = Cli::try_parse_from(["treecheck", "/no/such/tree", "/no/such/subtree"]).unwrap();
        let mut out = Vec::new();
        let err = run(&cli, &mut out).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
        assert!(String::from_utf8(out).unwrap().starts_with("Processing files:"));
    }
}
