//! # Repo Relay CLI
//!
//! Binary entry point for the `repo-relay` command-line tool. Parses
//! arguments with `clap` and dispatches to the command implementations;
//! the pipeline logic lives in the library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
