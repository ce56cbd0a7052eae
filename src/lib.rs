//! # Repo Relay Library
//!
//! Core functionality for the `repo-relay` content pipeline: taking a tree
//! of mirrored repositories, extracting a metadata-only "skeleton",
//! layering externally supplied overlay files onto matched repositories,
//! and publishing the results back to a hosting platform.
//!
//! ## Core Concepts
//!
//! - **Repository Discovery (`walker`)**: Finds repository roots (directories
//!   containing a `.git` marker) beneath a scan root, in a stable traversal
//!   order.
//! - **Skeleton Extraction (`skeleton`)**: Copies the metadata subtree from
//!   every discovered repository into an output tree mirroring the relative
//!   layout, pruning repositories without content by default.
//! - **Overlay Merging (`overlay`)**: Matches per-project overlay
//!   directories against mirrored repositories by case-insensitive name and
//!   copies their files in, overwriting existing content.
//! - **Publishing (`publish`, `forge`, `git`)**: Ensures the remote
//!   repository exists (creating it through the hosting API when absent),
//!   stages and commits local changes, and pushes through an ordered list
//!   of branch-name candidates. Idempotent: an unchanged tree publishes
//!   nothing.
//! - **Statistics (`stats`)**: Per-item records and aggregates for every
//!   stage, with totals that always match the per-item records.
//!
//! ## Execution Flow
//!
//! ```text
//! mirrored tree  -> skeleton::extract -> skeleton tree -> publish (skeleton mode)
//! overlay tree   -> overlay::apply    -> mutated tree  -> publish (overlay mode)
//! ```
//!
//! Stages communicate through in-memory records; per-repository failures
//! are absorbed into the statistics and never abort a run, while
//! structural failures (missing inputs, ambiguous overlay targets) surface
//! as errors.

pub mod error;
pub mod filesystem;
pub mod forge;
pub mod git;
pub mod output;
pub mod overlay;
pub mod publish;
pub mod skeleton;
pub mod stats;
pub mod walker;
