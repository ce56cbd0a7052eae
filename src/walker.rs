//! # Repository Discovery
//!
//! Locates repository roots within a mirrored directory tree. A directory is
//! a repository root iff it directly contains a `.git` marker directory (a
//! `.git` file, as used by worktrees and submodules, does not count).
//!
//! The walk is depth-first with lexicographic sibling ordering, so repeated
//! runs over unchanged input always discover repositories in the same order.
//! The walker never descends into `.git` directories themselves, and an
//! unreadable directory is skipped with a warning rather than aborting the
//! walk.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

/// Marker directory identifying a repository root.
pub const GIT_MARKER: &str = ".git";

/// A repository discovered beneath a scan root.
///
/// Immutable once found; downstream stages read paths from it but never
/// modify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRoot {
    /// Absolute (or scan-root-joined) path of the repository.
    pub path: PathBuf,
    /// Path relative to the scan root. Empty when the scan root itself is a
    /// repository.
    pub relative_path: PathBuf,
}

impl RepositoryRoot {
    /// Does the named subtree exist directly under this repository root?
    pub fn has_subtree(&self, name: &str) -> bool {
        self.path.join(name).is_dir()
    }

    /// The repository's directory name.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The relative path rendered for reporting; `.` when the scan root
    /// itself is the repository.
    pub fn relative_display(&self) -> String {
        if self.relative_path.as_os_str().is_empty() {
            ".".to_string()
        } else {
            self.relative_path.display().to_string()
        }
    }
}

/// Walks a directory tree and yields every repository root beneath it.
pub struct RepoWalker {
    root: PathBuf,
}

impl RepoWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A lazy, finite iterator over repository roots, in stable traversal
    /// order. Calling this again restarts the walk from scratch.
    pub fn repos(&self) -> impl Iterator<Item = RepositoryRoot> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !(entry.file_type().is_dir() && entry.file_name() == GIT_MARKER))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if entry.file_type().is_dir() && entry.path().join(GIT_MARKER).is_dir() {
                        let relative_path = entry
                            .path()
                            .strip_prefix(&self.root)
                            .unwrap_or_else(|_| entry.path())
                            .to_path_buf();
                        Some(RepositoryRoot {
                            path: entry.path().to_path_buf(),
                            relative_path,
                        })
                    } else {
                        None
                    }
                }
                Err(err) => {
                    warn!("Skipping unreadable directory during walk: {}", err);
                    None
                }
            })
    }
}
