//! # Skeleton Extraction
//!
//! Copies the metadata subtree (`.github` by default) out of every mirrored
//! repository into an output tree that mirrors the repositories' relative
//! paths. The result is the content of the "skeleton" repository: a single
//! tree holding only CI/metadata configuration for a whole project, organized
//! the way the mirrored repositories are.
//!
//! Repositories without the subtree are pruned from the output by default;
//! with pruning disabled they appear as empty directories. Either way they
//! are counted in the manifest, so the totals always describe the full scan.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::filesystem;
use crate::stats::{SkeletonEntry, SkeletonManifest};
use crate::walker::RepoWalker;

/// Metadata subtree extracted when no override is given.
pub const DEFAULT_SUBTREE: &str = ".github";

/// Options controlling a skeleton extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Omit repositories without the subtree from the output tree.
    pub prune_empty: bool,
    /// Name of the metadata subtree to extract.
    pub subtree: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            prune_empty: true,
            subtree: DEFAULT_SUBTREE.to_string(),
        }
    }
}

/// Extract the metadata subtree from every repository beneath `source_root`
/// into `output_root`.
///
/// A missing source root is a structural error. Per-repository copy
/// failures are not: the repository is excluded from the output, a warning
/// is logged, and the run continues.
pub fn extract(
    source_root: &Path,
    output_root: &Path,
    options: &ExtractOptions,
) -> Result<SkeletonManifest> {
    if !source_root.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: source_root.display().to_string(),
        });
    }
    fs::create_dir_all(output_root)?;

    let walker = RepoWalker::new(source_root);
    let mut manifest = SkeletonManifest::default();

    for repo in walker.repos() {
        let rel = repo.relative_display();

        if !repo.has_subtree(&options.subtree) {
            if options.prune_empty {
                debug!("Skipped: {} (no {} content)", rel, options.subtree);
            } else if let Err(err) = fs::create_dir_all(output_root.join(&repo.relative_path)) {
                warn!("Failed to create empty output for {}: {}", rel, err);
            } else {
                debug!("Created empty: {} (no {} content)", rel, options.subtree);
            }
            manifest.record(SkeletonEntry {
                path: rel,
                has_github: false,
                files_copied: 0,
            });
            continue;
        }

        let source_subtree = repo.path.join(&options.subtree);
        let target_subtree = output_root
            .join(&repo.relative_path)
            .join(&options.subtree);

        match filesystem::copy_tree(&source_subtree, &target_subtree) {
            Ok(outcome) => {
                info!(
                    "Extracted: {} ({} files in {}/)",
                    rel, outcome.files_copied, options.subtree
                );
                manifest.record(SkeletonEntry {
                    path: rel,
                    has_github: true,
                    files_copied: outcome.files_copied,
                });
            }
            Err(err) => {
                warn!("Skipping {}: {}", rel, err);
                // Drop whatever partial output the failed copy left behind.
                let _ = fs::remove_dir_all(output_root.join(&repo.relative_path));
                manifest.record(SkeletonEntry {
                    path: rel,
                    has_github: false,
                    files_copied: 0,
                });
            }
        }
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_repo(root: &Path, rel: &str) {
        fs::create_dir_all(root.join(rel).join(".git")).unwrap();
    }

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Three repositories: A has two metadata files, B has none, C has one.
    fn scenario_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        make_repo(root, "A");
        write_file(&root.join("A/.github/workflows/ci.yml"), "on: push");
        write_file(&root.join("A/.github/CODEOWNERS"), "* @team");
        make_repo(root, "B");
        write_file(&root.join("B/src/main.rs"), "fn main() {}");
        make_repo(root, "C");
        write_file(&root.join("C/.github/dependabot.yml"), "version: 2");
        temp
    }

    #[test]
    fn test_extract_with_prune() {
        let source = scenario_tree();
        let output = TempDir::new().unwrap();

        let manifest = extract(
            source.path(),
            output.path(),
            &ExtractOptions::default(),
        )
        .unwrap();

        assert_eq!(manifest.total_repos, 3);
        assert_eq!(manifest.repos_with_github, 2);
        assert_eq!(manifest.repos_without_github, 1);
        assert_eq!(manifest.total_files, 3);

        assert!(output.path().join("A/.github/workflows/ci.yml").exists());
        assert!(output.path().join("C/.github/dependabot.yml").exists());
        assert!(!output.path().join("B").exists());
    }

    #[test]
    fn test_extract_without_prune_creates_empty_directories() {
        let source = scenario_tree();
        let output = TempDir::new().unwrap();

        let options = ExtractOptions {
            prune_empty: false,
            ..ExtractOptions::default()
        };
        let manifest = extract(source.path(), output.path(), &options).unwrap();

        assert_eq!(manifest.total_repos, 3);
        let b = output.path().join("B");
        assert!(b.is_dir());
        assert!(fs::read_dir(&b).unwrap().next().is_none());
    }

    #[test]
    fn test_extract_mirrors_relative_layout() {
        let temp = TempDir::new().unwrap();
        make_repo(temp.path(), "group/deep/repo");
        write_file(
            &temp.path().join("group/deep/repo/.github/workflows/ci.yml"),
            "jobs: {}",
        );
        let output = TempDir::new().unwrap();

        let manifest = extract(
            temp.path(),
            output.path(),
            &ExtractOptions::default(),
        )
        .unwrap();

        assert_eq!(manifest.repositories[0].path, "group/deep/repo");
        assert!(output
            .path()
            .join("group/deep/repo/.github/workflows/ci.yml")
            .exists());
    }

    #[test]
    fn test_extract_only_copies_subtree_content() {
        let temp = TempDir::new().unwrap();
        make_repo(temp.path(), "repo");
        write_file(&temp.path().join("repo/.github/config.yml"), "a: 1");
        write_file(&temp.path().join("repo/src/lib.rs"), "pub fn f() {}");
        let output = TempDir::new().unwrap();

        extract(temp.path(), output.path(), &ExtractOptions::default()).unwrap();

        assert!(output.path().join("repo/.github/config.yml").exists());
        assert!(!output.path().join("repo/src").exists());
    }

    #[test]
    fn test_extract_missing_source_is_structural_error() {
        let output = TempDir::new().unwrap();
        let result = extract(
            Path::new("/nonexistent/mirror"),
            output.path(),
            &ExtractOptions::default(),
        );
        assert!(matches!(result, Err(Error::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_extract_counts_match_entries() {
        let source = scenario_tree();
        let output = TempDir::new().unwrap();

        let manifest = extract(
            source.path(),
            output.path(),
            &ExtractOptions::default(),
        )
        .unwrap();

        let with: u64 = manifest
            .repositories
            .iter()
            .filter(|r| r.has_github)
            .count() as u64;
        let files: u64 = manifest.repositories.iter().map(|r| r.files_copied).sum();
        assert_eq!(manifest.repos_with_github, with);
        assert_eq!(manifest.total_files, files);
        assert_eq!(
            manifest.total_repos,
            manifest.repositories.len() as u64
        );
    }

    #[test]
    fn test_entry_with_files_implies_content() {
        let source = scenario_tree();
        let output = TempDir::new().unwrap();

        let manifest = extract(
            source.path(),
            output.path(),
            &ExtractOptions::default(),
        )
        .unwrap();

        for entry in &manifest.repositories {
            if entry.files_copied > 0 {
                assert!(entry.has_github, "{} has files but no content flag", entry.path);
            }
        }
    }

    #[test]
    fn test_extract_custom_subtree() {
        let temp = TempDir::new().unwrap();
        make_repo(temp.path(), "repo");
        write_file(&temp.path().join("repo/.ci/pipeline.yml"), "stages: []");
        let output = TempDir::new().unwrap();

        let options = ExtractOptions {
            prune_empty: true,
            subtree: ".ci".to_string(),
        };
        let manifest = extract(temp.path(), output.path(), &options).unwrap();

        assert_eq!(manifest.repos_with_github, 1);
        assert!(output.path().join("repo/.ci/pipeline.yml").exists());
    }
}
