//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Create a repository root: a directory containing a `.git` marker.
pub fn make_repo(root: &Path, rel: &str) {
    fs::create_dir_all(root.join(rel).join(".git")).unwrap();
}

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
