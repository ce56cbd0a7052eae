//! Push command implementation
//!
//! Publishes pipeline output to the hosting platform. Skeleton mode pushes
//! one generated tree into a dedicated repository; overlay mode pushes
//! every mirrored repository with local changes. Per-repository failures
//! land in the statistics, not in the exit code.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, ValueEnum};

use repo_relay::forge::AccessToken;
use repo_relay::output::{emoji, OutputConfig};
use repo_relay::publish::{PublishClient, PublishConfig};
use repo_relay::stats;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushMode {
    /// Publish a skeleton tree to a single dedicated repository
    Skeleton,
    /// Publish every changed mirrored repository
    Overlay,
}

/// Arguments for the push command
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Push mode
    #[arg(long, value_enum)]
    pub mode: PushMode,

    /// Source directory (skeleton tree, or target tree with overlays)
    #[arg(long, value_name = "PATH")]
    pub source_dir: PathBuf,

    /// Organization on the hosting platform
    #[arg(long, value_name = "ORG")]
    pub org: String,

    /// Repository name (required for skeleton mode)
    #[arg(long, value_name = "NAME")]
    pub repo: Option<String>,

    /// Access token for the hosting platform
    #[arg(long, value_name = "TOKEN", env = "REPO_RELAY_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Project display name used in commit messages
    #[arg(long, value_name = "NAME")]
    pub project_name: String,

    /// Branch candidate tried when pushing; may be given multiple times,
    /// candidates are tried in order (default: main, then master)
    #[arg(long = "branch", value_name = "NAME")]
    pub branches: Vec<String>,

    /// Output file for push statistics (JSON)
    #[arg(long, value_name = "PATH")]
    pub stats_file: Option<PathBuf>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the push command
pub fn execute(args: PushArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    let mut config = PublishConfig::new(&args.org, AccessToken::new(&args.token));
    if !args.branches.is_empty() {
        config.branches = args.branches.clone();
    }
    let client = PublishClient::new(config)?;

    if !args.quiet {
        println!(
            "{} Publishing to organization '{}'",
            emoji(output, "🚀", "[PUSH]"),
            args.org
        );
        if args.verbose {
            println!("   Source directory: {}", args.source_dir.display());
        }
        println!();
    }

    match args.mode {
        PushMode::Skeleton => {
            let repo = args
                .repo
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--repo is required for skeleton mode"))?;

            let result = client.push_skeleton(&args.source_dir, repo, &args.project_name)?;

            if !args.quiet {
                let duration = start_time.elapsed();
                println!(
                    "{} Completed in {:.2}s",
                    emoji(output, "✅", "[OK]"),
                    duration.as_secs_f64()
                );
                println!("   Repository: {}", result.repository);
                println!("   Success: {}", result.success);
                println!("   Files pushed: {}", result.files_pushed);
                if let Some(branch) = &result.branch {
                    println!("   Branch: {}", branch);
                }
                if let Some(error) = &result.error {
                    println!(
                        "   {} Error: {}",
                        emoji(output, "⚠️", "[WARN]"),
                        error
                    );
                }
            }

            if let Some(stats_file) = &args.stats_file {
                stats::write_stats_file(stats_file, &result)?;
                if !args.quiet {
                    println!("   Statistics written to: {}", stats_file.display());
                }
            }
        }
        PushMode::Overlay => {
            let result = client.push_overlays(&args.source_dir, &args.project_name)?;

            if !args.quiet {
                let duration = start_time.elapsed();
                println!(
                    "{} Completed in {:.2}s",
                    emoji(output, "✅", "[OK]"),
                    duration.as_secs_f64()
                );
                println!("   Repositories updated: {}", result.repos_updated);
                println!("   Repositories failed: {}", result.repos_failed);
                for entry in &result.repositories {
                    if let Some(error) = &entry.error {
                        println!(
                            "   {} {}: {}",
                            emoji(output, "⚠️", "[WARN]"),
                            entry.name,
                            error
                        );
                    } else if args.verbose {
                        println!(
                            "   {}: pushed ({})",
                            entry.name,
                            entry.branch.as_deref().unwrap_or("-")
                        );
                    }
                }
            }

            if let Some(stats_file) = &args.stats_file {
                stats::write_stats_file(stats_file, &result)?;
                if !args.quiet {
                    println!("   Statistics written to: {}", stats_file.display());
                }
            }
        }
    }

    Ok(())
}
