// File: ./src/skiplist.rs
//! Loads skip lists: one entry per line, `#` comment lines ignored.
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a skip list. A missing file is reported and treated as empty; any
/// other read failure is an error.
pub fn load(path: &Path) -> Result<HashSet<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse(&contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("File not found!  {}", path.display());
            Ok(HashSet::new())
        }
        Err(e) => Err(e).with_context(|| format!("Error reading file!  {}", path.display())),
    }
}

/// Lines are kept as written; only comments and blank lines are dropped.
pub fn parse(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .filter(|line| !line.trim().starts_with('#'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
