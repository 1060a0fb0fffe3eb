//! Line-oriented key input: one integer per line.

use crate::Key;
use crate::error::{TreeError, TreeResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parses every line of `reader` as a key, keeping their order and any
/// duplicates. The first malformed line (an empty one included) fails the
/// whole read; `path` only labels the error.
pub fn parse_keys<R: BufRead>(reader: R, path: &Path) -> TreeResult<Vec<Key>> {
    let mut keys = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let key = line.trim().parse::<Key>().map_err(|source| TreeError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.clone(),
            source,
        })?;
        keys.push(key);
    }
    Ok(keys)
}

pub fn read_keys(path: &Path) -> TreeResult<Vec<Key>> {
    let file = File::open(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let keys = parse_keys(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = keys.len(), "read keys");
    Ok(keys)
}
