//! Overlay command implementation
//!
//! Applies the overlay tree for one project slug onto the mirrored
//! repositories and reports what was copied where.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use repo_relay::output::{emoji, OutputConfig};
use repo_relay::overlay;
use repo_relay::stats::{self, OverlayStatus};

/// Arguments for the overlay command
#[derive(Args, Debug)]
pub struct OverlayArgs {
    /// Directory containing workflow-deployment overlays
    #[arg(long, value_name = "PATH")]
    pub overlay_dir: PathBuf,

    /// Target directory with the mirrored repository structure
    #[arg(long, value_name = "PATH")]
    pub target_dir: PathBuf,

    /// Project slug to match in the overlay structure
    #[arg(long, value_name = "SLUG")]
    pub project_slug: String,

    /// Output file for overlay statistics (JSON)
    #[arg(long, value_name = "PATH")]
    pub stats_file: Option<PathBuf>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the overlay command
pub fn execute(args: OverlayArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    if !args.quiet {
        println!(
            "{} Applying overlays for project '{}'",
            emoji(output, "📦", "[OVERLAY]"),
            args.project_slug
        );
        if args.verbose {
            println!("   Overlay directory: {}", args.overlay_dir.display());
            println!("   Target directory: {}", args.target_dir.display());
        }
        println!();
    }

    let result = overlay::apply(&args.overlay_dir, &args.target_dir, &args.project_slug)?;

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} Applied in {:.2}s",
            emoji(output, "✅", "[OK]"),
            duration.as_secs_f64()
        );
        println!("   Repositories updated: {}", result.repos_updated);
        println!("   Total files copied: {}", result.files_copied);
        println!("   Files overwritten: {}", result.files_overwritten);

        for entry in &result.repositories {
            if entry.status == OverlayStatus::Unmatched {
                println!(
                    "   {} No target repository for '{}'",
                    emoji(output, "⚠️", "[WARN]"),
                    entry.name
                );
            } else if args.verbose {
                println!(
                    "   {}: {} files ({} overwritten)",
                    entry.name, entry.files_copied, entry.files_overwritten
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

    Ok(())
}
