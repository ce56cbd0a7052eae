//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use repo_relay::output::OutputConfig;

use crate::commands;

/// Repo Relay - Mirror-content pipeline for skeletons, overlays, and publishing
#[derive(Parser, Debug)]
#[command(name = "repo-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract metadata-directory skeletons from mirrored repositories
    Extract(commands::extract::ExtractArgs),
    /// Apply per-project workflow overlays onto mirrored repositories
    Overlay(commands::overlay::OverlayArgs),
    /// Publish skeleton or overlay content to the hosting platform
    Push(commands::push::PushArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Extract(args) => commands::extract::execute(args, &output),
            Commands::Overlay(args) => commands::overlay::execute(args, &output),
            Commands::Push(args) => commands::push::execute(args, &output),
        }
    }
}

fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    // Ignore a second initialization (tests call execute repeatedly)
    let _ = builder.try_init();
}
