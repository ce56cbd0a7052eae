//! # Run Statistics
//!
//! Record types describing what each pipeline stage did, plus the
//! aggregates built from them. Each stage owns the records it creates;
//! totals are maintained by the `record` methods so they always equal the
//! sum (or count) of the per-item records.
//!
//! Serialization is reserved for the external statistics-file boundary;
//! between stages these records travel as plain in-memory values.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// One repository's extraction outcome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkeletonEntry {
    /// Path relative to the scan root.
    pub path: String,
    pub has_github: bool,
    pub files_copied: u64,
}

/// Aggregate over a skeleton extraction run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SkeletonManifest {
    pub total_repos: u64,
    pub repos_with_github: u64,
    pub repos_without_github: u64,
    pub total_files: u64,
    pub repositories: Vec<SkeletonEntry>,
}

impl SkeletonManifest {
    pub fn record(&mut self, entry: SkeletonEntry) {
        self.total_repos += 1;
        if entry.has_github {
            self.repos_with_github += 1;
        } else {
            self.repos_without_github += 1;
        }
        self.total_files += entry.files_copied;
        self.repositories.push(entry);
    }
}

/// Match outcome for one overlay repository directory.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverlayStatus {
    Updated,
    Unmatched,
}

/// Outcome of merging one overlay repository directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverlayEntry {
    /// Repository name as spelled in the overlay tree.
    pub name: String,
    pub status: OverlayStatus,
    pub files_copied: u64,
    pub files_overwritten: u64,
}

impl OverlayEntry {
    pub fn unmatched(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: OverlayStatus::Unmatched,
            files_copied: 0,
            files_overwritten: 0,
        }
    }
}

/// Aggregate over an overlay merge run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverlayStats {
    pub overlay_dir: String,
    pub target_dir: String,
    pub project_slug: String,
    /// Matched repositories that received at least one file.
    pub repos_updated: u64,
    pub files_copied: u64,
    pub files_overwritten: u64,
    pub repositories: Vec<OverlayEntry>,
}

impl OverlayStats {
    pub fn new(overlay_dir: &Path, target_dir: &Path, project_slug: &str) -> Self {
        Self {
            overlay_dir: overlay_dir.display().to_string(),
            target_dir: target_dir.display().to_string(),
            project_slug: project_slug.to_string(),
            repos_updated: 0,
            files_copied: 0,
            files_overwritten: 0,
            repositories: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: OverlayEntry) {
        if entry.status == OverlayStatus::Updated && entry.files_copied > 0 {
            self.repos_updated += 1;
        }
        self.files_copied += entry.files_copied;
        self.files_overwritten += entry.files_overwritten;
        self.repositories.push(entry);
    }
}

/// Outcome of publishing the skeleton tree to its dedicated repository.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkeletonPushStats {
    /// Remote coordinate as `org/name`.
    pub repository: String,
    pub success: bool,
    /// Branch that accepted the push; absent when nothing was pushed.
    pub branch: Option<String>,
    pub files_pushed: u64,
    /// Present iff `success` is false.
    pub error: Option<String>,
}

/// Outcome of publishing one mirrored repository in overlay mode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverlayPushEntry {
    pub name: String,
    pub success: bool,
    pub branch: Option<String>,
    pub error: Option<String>,
}

/// Aggregate over an overlay-mode publish run. Repositories with no local
/// changes are skipped before recording, so `repos_updated + repos_failed`
/// always equals the record count.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OverlayPushStats {
    pub repos_updated: u64,
    pub repos_failed: u64,
    pub repositories: Vec<OverlayPushEntry>,
}

impl OverlayPushStats {
    pub fn record(&mut self, entry: OverlayPushEntry) {
        if entry.success {
            self.repos_updated += 1;
        } else {
            self.repos_failed += 1;
        }
        self.repositories.push(entry);
    }
}

/// Serialize a statistics record to `path` as pretty JSON, creating parent
/// directories as needed. This is the only place pipeline records touch
/// disk.
pub fn write_stats_file<T: Serialize>(path: &Path, stats: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut rendered = serde_json::to_string_pretty(stats)?;
    rendered.push('\n');
    fs::write(path, rendered)?;
    Ok(())
}
