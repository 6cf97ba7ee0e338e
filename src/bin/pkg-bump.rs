//! pkg-bump - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use pkg_release::bump::run_bump;
use pkg_release::version::BumpOptions;

/// Bump the version in ./package.json.
///
/// Flag priority: --version, --prerelease, --major, --minor, --patch.
/// Only the highest-priority flag given is applied. No flags means --patch.
#[derive(Parser, Debug)]
#[command(name = "pkg-bump")]
#[command(about = "Bump the version in ./package.json")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Increment the major version
    #[arg(short = '1', long)]
    major: bool,

    /// Increment the minor version
    #[arg(short = '2', long)]
    minor: bool,

    /// Increment the patch version
    #[arg(short = '3', long)]
    patch: bool,

    /// Advance the prerelease train (alpha -> beta -> rc -> release)
    #[arg(short = 'p', long)]
    prerelease: bool,

    /// Set this exact version
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    version: Option<String>,

    /// Accepted for compatibility; has no effect
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Print the new version without writing package.json
    #[arg(long)]
    dry_run: bool,
}

impl From<&Cli> for BumpOptions {
    fn from(cli: &Cli) -> Self {
        BumpOptions {
            major: cli.major,
            minor: cli.minor,
            patch: cli.patch,
            prerelease: cli.prerelease,
            version: cli.version.clone(),
            recursive: cli.recursive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    pkg_release::logging::init();

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;

    let outcome = run_bump(&cwd, &BumpOptions::from(&cli), cli.dry_run)
        .context("Failed to bump version")?;

    if outcome.written {
        println!("Version updated to: {}", outcome.version);
    } else {
        println!(
            "Dry run: version would change {} -> {}",
            outcome.previous.as_deref().unwrap_or("none"),
            outcome.version
        );
    }

    Ok(())
}
