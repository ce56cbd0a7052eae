//! Thin wrappers around the system `git` binary.
//!
//! Using the system git command means the usual credential helpers and
//! host configuration keep working. Remote URLs carrying an access token
//! are passed per invocation and recorded in errors only as `<remote>`;
//! captured stderr is scrubbed by the publishing layer before it reaches
//! logs or statistics.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Push rejections that must not fall through to the next branch
/// candidate: authentication problems and genuine conflicts.
const FATAL_PUSH_MARKERS: &[&str] = &[
    "Authentication failed",
    "Permission denied",
    "could not read Username",
    "invalid credentials",
    "403",
    "non-fast-forward",
    "[rejected]",
    "fetch first",
];

fn run(dir: Option<&Path>, args: &[&str], display: &str) -> Result<std::process::Output> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    cmd.output().map_err(|e| Error::GitCommand {
        command: display.to_string(),
        dir: dir.map(|d| d.display().to_string()).unwrap_or_default(),
        stderr: e.to_string(),
    })
}

fn run_checked(dir: Option<&Path>, args: &[&str], display: &str) -> Result<String> {
    let output = run(dir, args, display)?;
    if !output.status.success() {
        return Err(Error::GitCommand {
            command: display.to_string(),
            dir: dir.map(|d| d.display().to_string()).unwrap_or_default(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Clone `url` into `target`. The URL never appears in the recorded
/// command.
pub fn clone(url: &str, target: &Path) -> Result<()> {
    let target_str = target.display().to_string();
    run_checked(
        None,
        &["clone", url, &target_str],
        "clone <remote>",
    )?;
    Ok(())
}

/// Initialize a fresh repository with a deterministic initial branch.
pub fn init(dir: &Path, initial_branch: &str) -> Result<()> {
    run_checked(
        Some(dir),
        &["init", "--initial-branch", initial_branch],
        "init",
    )?;
    Ok(())
}

/// Stage all tracked and untracked changes.
pub fn stage_all(dir: &Path) -> Result<()> {
    run_checked(Some(dir), &["add", "-A"], "add -A")?;
    Ok(())
}

/// Does the working tree differ from HEAD (including untracked files)?
pub fn has_changes(dir: &Path) -> Result<bool> {
    let stdout = run_checked(Some(dir), &["status", "--porcelain"], "status --porcelain")?;
    Ok(!stdout.trim().is_empty())
}

/// Commit staged changes with an explicit author identity. The identity is
/// passed with `-c` so no ambient git configuration is read or written.
pub fn commit(dir: &Path, message: &str, author_name: &str, author_email: &str) -> Result<()> {
    let user_name = format!("user.name={}", author_name);
    let user_email = format!("user.email={}", author_email);
    run_checked(
        Some(dir),
        &[
            "-c", &user_name, "-c", &user_email, "commit", "-m", message,
        ],
        "commit",
    )?;
    Ok(())
}

/// Push the named branch to `remote` (a URL passed per invocation, never
/// stored in the repository configuration).
pub fn push(dir: &Path, remote: &str, branch: &str) -> Result<()> {
    let display = format!("push <remote> {}", branch);
    run_checked(Some(dir), &["push", remote, branch], &display)?;
    Ok(())
}

/// Classify a push rejection: fatal rejections (auth, conflicts) must not
/// be retried against another branch name.
pub fn is_fatal_push_rejection(stderr: &str) -> bool {
    FATAL_PUSH_MARKERS.iter().any(|m| stderr.contains(m))
}
