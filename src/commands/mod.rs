//! # CLI Command Implementations
//!
//! One module per subcommand. Each module defines a clap `Args` struct and
//! an `execute` function that calls into the `repo_relay` library, prints a
//! human-readable summary, and optionally writes the statistics record to
//! a JSON file.
//!
//! Exit semantics: `execute` returns an error only for structural failures;
//! per-repository failures are reported in the summary and statistics but
//! leave the exit code at zero.

pub mod extract;
pub mod overlay;
pub mod push;
