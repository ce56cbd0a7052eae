//! Integration tests running the extraction and overlay stages together
//! against realistic mirror trees.

mod common;

use common::{make_repo, write_file};
use repo_relay::overlay;
use repo_relay::skeleton::{self, ExtractOptions};
use repo_relay::stats::OverlayStatus;
use tempfile::TempDir;

/// A mirror tree shaped like a small project: three repositories, two with
/// metadata content, nested one level under a project directory.
fn mirror_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    make_repo(root, "proj/server");
    write_file(
        &root.join("proj/server/.github/workflows/ci.yml"),
        "on: push",
    );
    write_file(&root.join("proj/server/.github/CODEOWNERS"), "* @team");
    write_file(&root.join("proj/server/src/main.c"), "int main(void) {}");

    make_repo(root, "proj/docs");
    write_file(&root.join("proj/docs/index.md"), "# Docs");

    make_repo(root, "proj/Client-App");
    write_file(
        &root.join("proj/Client-App/.github/dependabot.yml"),
        "version: 2",
    );

    temp
}

#[test]
fn test_extract_then_overlay_full_pipeline() {
    let mirror = mirror_tree();
    let skeleton_out = TempDir::new().unwrap();
    let overlays = TempDir::new().unwrap();

    // Stage 1: skeleton extraction
    let manifest = skeleton::extract(
        mirror.path(),
        skeleton_out.path(),
        &ExtractOptions::default(),
    )
    .unwrap();

    assert_eq!(manifest.total_repos, 3);
    assert_eq!(manifest.repos_with_github, 2);
    assert_eq!(manifest.repos_without_github, 1);
    assert_eq!(manifest.total_files, 3);
    assert!(skeleton_out
        .path()
        .join("proj/server/.github/workflows/ci.yml")
        .exists());
    assert!(!skeleton_out.path().join("proj/docs").exists());

    // Stage 2: overlay merge into the same mirror tree, matching the
    // overlay's casing against the mirrored directory names
    write_file(
        &overlays
            .path()
            .join("myproj/client-app/.github/workflows/deploy.yml"),
        "jobs: {}",
    );
    write_file(
        &overlays.path().join("myproj/server/.github/CODEOWNERS"),
        "* @new-team",
    );

    let result = overlay::apply(overlays.path(), mirror.path(), "myproj").unwrap();

    assert_eq!(result.repos_updated, 2);
    assert_eq!(result.files_copied, 2);
    assert_eq!(result.files_overwritten, 1); // CODEOWNERS replaced

    // Overlay wins over mirrored content
    assert_eq!(
        std::fs::read_to_string(mirror.path().join("proj/server/.github/CODEOWNERS")).unwrap(),
        "* @new-team"
    );
    assert!(mirror
        .path()
        .join("proj/Client-App/.github/workflows/deploy.yml")
        .exists());
}

#[test]
fn test_prune_flag_controls_output_shape() {
    let mirror = mirror_tree();

    let pruned_out = TempDir::new().unwrap();
    skeleton::extract(
        mirror.path(),
        pruned_out.path(),
        &ExtractOptions::default(),
    )
    .unwrap();
    assert!(!pruned_out.path().join("proj/docs").exists());

    let kept_out = TempDir::new().unwrap();
    skeleton::extract(
        mirror.path(),
        kept_out.path(),
        &ExtractOptions {
            prune_empty: false,
            ..ExtractOptions::default()
        },
    )
    .unwrap();
    let docs = kept_out.path().join("proj/docs");
    assert!(docs.is_dir());
    assert!(std::fs::read_dir(&docs).unwrap().next().is_none());
}

#[test]
fn test_extraction_is_repeatable_with_identical_results() {
    let mirror = mirror_tree();

    let first_out = TempDir::new().unwrap();
    let first = skeleton::extract(
        mirror.path(),
        first_out.path(),
        &ExtractOptions::default(),
    )
    .unwrap();

    let second_out = TempDir::new().unwrap();
    let second = skeleton::extract(
        mirror.path(),
        second_out.path(),
        &ExtractOptions::default(),
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_overlay_without_project_slug_leaves_mirror_untouched() {
    let mirror = mirror_tree();
    let overlays = TempDir::new().unwrap();
    write_file(
        &overlays.path().join("other-project/server/file.txt"),
        "data",
    );

    let result = overlay::apply(overlays.path(), mirror.path(), "myproj").unwrap();

    assert_eq!(result.repos_updated, 0);
    assert!(result.repositories.is_empty());
    assert!(!mirror.path().join("proj/server/file.txt").exists());
}

#[test]
fn test_unmatched_overlay_reported_alongside_matches() {
    let mirror = mirror_tree();
    let overlays = TempDir::new().unwrap();
    write_file(&overlays.path().join("myproj/server/new.txt"), "x");
    write_file(&overlays.path().join("myproj/retired-repo/old.txt"), "y");

    let result = overlay::apply(overlays.path(), mirror.path(), "myproj").unwrap();

    assert_eq!(result.repositories.len(), 2);
    assert_eq!(result.repos_updated, 1);
    let unmatched: Vec<&str> = result
        .repositories
        .iter()
        .filter(|r| r.status == OverlayStatus::Unmatched)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(unmatched, vec!["retired-repo"]);
}
