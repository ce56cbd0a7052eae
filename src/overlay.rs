//! # Overlay Merging
//!
//! Layers externally supplied overlay files onto mirrored repositories.
//! Overlays are organized as `overlay-root/<project-slug>/<repo-name>/...`;
//! each overlay repository directory is matched against the mirrored
//! repositories by case-insensitive directory name and its files are copied
//! in, overwriting whatever is already there (overlay always wins).
//!
//! An overlay with no directory for the project slug is a valid no-op: not
//! every project ships overlays. An overlay repository with no matching
//! target is recorded and warned about but never fails the run. A name that
//! matches more than one target is ambiguous input and aborts the merge.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};
use crate::filesystem;
use crate::stats::{OverlayEntry, OverlayStats, OverlayStatus};
use crate::walker::{RepoWalker, RepositoryRoot};

/// Merge the overlay tree for `project_slug` into the repositories beneath
/// `target_root`.
pub fn apply(overlay_root: &Path, target_root: &Path, project_slug: &str) -> Result<OverlayStats> {
    if !overlay_root.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: overlay_root.display().to_string(),
        });
    }
    if !target_root.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: target_root.display().to_string(),
        });
    }

    let mut stats = OverlayStats::new(overlay_root, target_root, project_slug);

    let project_dir = overlay_root.join(project_slug);
    if !project_dir.is_dir() {
        info!(
            "No overlay found for project slug '{}' in {}",
            project_slug,
            overlay_root.display()
        );
        return Ok(stats);
    }

    // Snapshot the target repositories once; every overlay repository is
    // matched against this same list.
    let targets: Vec<RepositoryRoot> = RepoWalker::new(target_root).repos().collect();

    for overlay_repo in overlay_repo_dirs(&project_dir)? {
        let name = overlay_repo
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let matched = find_target(&targets, &name)?;
        let target = match matched {
            Some(target) => target,
            None => {
                warn!("Repository '{}' not found in target directory", name);
                stats.record(OverlayEntry::unmatched(name));
                continue;
            }
        };

        let outcome = filesystem::copy_tree(&overlay_repo, &target.path)?;
        info!(
            "Applied {} files to {} ({} overwritten)",
            outcome.files_copied,
            target.relative_display(),
            outcome.files_overwritten
        );
        stats.record(OverlayEntry {
            name,
            status: OverlayStatus::Updated,
            files_copied: outcome.files_copied,
            files_overwritten: outcome.files_overwritten,
        });
    }

    Ok(stats)
}

/// Immediate child directories of the project overlay, in lexicographic
/// order so entry ordering is deterministic.
fn overlay_repo_dirs(project_dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(project_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Find the target repository whose directory name matches `name`
/// case-insensitively. More than one match is ambiguous input.
fn find_target<'a>(
    targets: &'a [RepositoryRoot],
    name: &str,
) -> Result<Option<&'a RepositoryRoot>> {
    let wanted = name.to_lowercase();
    let matches: Vec<&RepositoryRoot> = targets
        .iter()
        .filter(|t| t.name().to_lowercase() == wanted)
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0])),
        _ => Err(Error::AmbiguousOverlayTarget {
            name: name.to_string(),
            candidates: matches.iter().map(|t| t.relative_display()).collect(),
        }),
    }
}
