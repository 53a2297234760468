//! modship - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use modship::config::resolve_remote;
use modship::release::preflight::check_tools_installed;
use modship::release::{ReleaseConfig, run_release};
use modship::{BumpType, SystemTools};

const EXAMPLES: &str = "\
Examples:
  modship --type patch            # Bump patch version (1.0.0 -> 1.0.1)
  modship --type minor            # Bump minor version (1.0.0 -> 1.1.0)
  modship --type major            # Bump major version (1.0.0 -> 2.0.0)
  modship --type patch --dry-run  # Show what would happen";

/// Tag and push the next semantic version of a module.
#[derive(Parser, Debug)]
#[command(name = "modship")]
#[command(about = "Tag and push the next semantic version of a module")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Version bump type: major, minor, or patch
    #[arg(long = "type", value_name = "BUMP_TYPE")]
    bump: BumpType,

    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,

    /// Path inside the repository to release
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Remote to push to (defaults to $MODSHIP_REMOTE, then origin)
    #[arg(long)]
    remote: Option<String>,

    /// Print the release report as JSON instead of progress lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    check_tools_installed(cli.bump, cli.dry_run).context("Missing required tools")?;

    let tools = SystemTools::open(&cli.repo).context("Could not open repository")?;

    let config = ReleaseConfig {
        bump: cli.bump,
        dry_run: cli.dry_run,
        remote: resolve_remote(cli.remote),
        json: cli.json,
    };

    let report = run_release(&config, &tools).context("Release failed")?;

    if config.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else if report.module_path.is_some() && !report.dry_run {
        println!("Module path updated for major version bump");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
