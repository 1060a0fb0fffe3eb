//! Errors raised by the tree and its input layer.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// min/max asked of a tree without nodes. Distinct from a key miss,
    /// which is never an error.
    #[error("the tree is empty")]
    EmptyTree,

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: invalid key {content:?}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },
}

pub type TreeResult<T> = Result<T, TreeError>;
