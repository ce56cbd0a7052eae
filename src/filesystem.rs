//! Disk copy helpers shared by the pipeline stages

use std::fs;
use std::path::Path;

use filetime::FileTime;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::walker::GIT_MARKER;

/// Counters produced by a recursive tree copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Every file written at the destination, including overwrites.
    pub files_copied: u64,
    /// The subset of copied files that replaced an existing file.
    pub files_overwritten: u64,
}

/// Copy a single file, preserving permissions and modification time.
pub fn copy_file_preserving(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy '{}' to '{}': {}",
            src.display(),
            dst.display(),
            e
        ),
    })?;

    // fs::copy carries permissions across; the modification time has to be
    // transferred separately.
    let metadata = fs::metadata(src)?;
    if let Ok(modified) = metadata.modified() {
        filetime::set_file_mtime(dst, FileTime::from_system_time(modified)).map_err(|e| {
            Error::Filesystem {
                message: format!(
                    "Failed to set modification time on '{}': {}",
                    dst.display(),
                    e
                ),
            }
        })?;
    }

    Ok(())
}

/// Recursively copy every file beneath `src` into `dst`, preserving relative
/// paths and file metadata. Missing destination directories are created;
/// existing files are overwritten and counted as such. `.git` directories
/// are never copied.
///
/// Files are visited in sorted order so the outcome (and any logging driven
/// by it) is deterministic.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyOutcome> {
    let mut outcome = CopyOutcome::default();

    let entries = WalkDir::new(src)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && entry.file_name() == GIT_MARKER));

    for entry in entries {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("Failed to read '{}': {}", src.display(), e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(src).map_err(|_| Error::Filesystem {
            message: format!(
                "Path '{}' escapes copy source '{}'",
                entry.path().display(),
                src.display()
            ),
        })?;
        let target = dst.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", parent.display(), e),
            })?;
        }

        let existed = target.exists();
        copy_file_preserving(entry.path(), &target)?;
        outcome.files_copied += 1;
        if existed {
            outcome.files_overwritten += 1;
        }
    }

    Ok(outcome)
}
