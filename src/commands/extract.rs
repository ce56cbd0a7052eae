//! Extract command implementation
//!
//! Walks the mirrored source tree, copies each repository's metadata
//! subtree into the output tree, and reports the extraction manifest.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use repo_relay::output::{emoji, OutputConfig};
use repo_relay::skeleton::{self, ExtractOptions};
use repo_relay::stats;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Source directory containing mirrored repositories
    #[arg(long, value_name = "PATH")]
    pub source_dir: PathBuf,

    /// Output directory for the skeleton tree
    #[arg(long, value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Keep repositories without metadata content as empty directories
    #[arg(long)]
    pub no_prune_empty: bool,

    /// Metadata subtree to extract from each repository
    #[arg(long, value_name = "NAME", default_value = skeleton::DEFAULT_SUBTREE)]
    pub subtree: String,

    /// Output file for extraction statistics (JSON)
    #[arg(long, value_name = "PATH")]
    pub stats_file: Option<PathBuf>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the extract command
pub fn execute(args: ExtractArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    if !args.quiet {
        println!(
            "{} Extracting {} content from: {}",
            emoji(output, "🔍", "[SCAN]"),
            args.subtree,
            args.source_dir.display()
        );
        if args.verbose {
            println!("   Output directory: {}", args.output_dir.display());
            println!("   Prune empty repositories: {}", !args.no_prune_empty);
        }
        println!();
    }

    let options = ExtractOptions {
        prune_empty: !args.no_prune_empty,
        subtree: args.subtree.clone(),
    };
    let manifest = skeleton::extract(&args.source_dir, &args.output_dir, &options)?;

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} Extracted in {:.2}s",
            emoji(output, "✅", "[OK]"),
            duration.as_secs_f64()
        );
        println!("   Total repositories: {}", manifest.total_repos);
        println!(
            "   Repositories with {}: {}",
            args.subtree, manifest.repos_with_github
        );
        println!(
            "   Repositories without {}: {}",
            args.subtree, manifest.repos_without_github
        );
        println!("   Total files copied: {}", manifest.total_files);
    }

    if let Some(stats_file) = &args.stats_file {
        stats::write_stats_file(stats_file, &manifest)?;
        if !args.quiet {
            println!("   Statistics written to: {}", stats_file.display());
        }
    }

    Ok(())
}
