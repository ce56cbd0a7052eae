//! # Error Handling
//!
//! Centralized error type for the `repo-relay` pipeline, built with
//! `thiserror`. Two broad categories of failure flow through the code:
//!
//! - **Structural errors** — a stage cannot run at all (missing source
//!   directory, unreadable overlay root, ambiguous overlay target). These
//!   surface through `Result` and abort the stage.
//! - **Per-item errors** — one repository failed to extract, match, or
//!   publish. These are absorbed into the statistics records by the stage
//!   that produced them and never unwind the run.
//!
//! The variants below cover both categories; which category a variant falls
//! into is decided by the call site (a `GitCommand` failure is structural
//! when staging a working copy cannot even start, per-item when one of many
//! repositories fails to push).

use thiserror::Error;

/// Main error type for repo-relay operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory a stage requires does not exist or is not a directory.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// A filesystem copy or write operation failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// More than one target repository matches an overlay directory under
    /// case-insensitive comparison. The input is ambiguous and the merge
    /// refuses to pick one.
    #[error("Ambiguous overlay target for '{name}': matches {}", candidates.join(", "))]
    AmbiguousOverlayTarget {
        name: String,
        candidates: Vec<String>,
    },

    /// A git invocation failed. `stderr` carries the captured diagnostics;
    /// callers that record this into statistics scrub credentials first.
    #[error("Git command failed in {dir}: git {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// The hosting API answered with an unexpected status.
    #[error("Hosting API error for {repository}: HTTP {status} - {message}")]
    Api {
        repository: String,
        status: u16,
        message: String,
    },

    /// A network transport failure talking to the hosting API, after the
    /// retry budget was exhausted.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// Pushing a repository failed on every configured branch candidate.
    #[error("Push failed for {repository}: {message}")]
    PushFailed { repository: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
