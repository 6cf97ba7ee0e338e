//! pkg-publish - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use pkg_release::config::PublishConfig;
use pkg_release::error::PublishError;
use pkg_release::publish::{MirrorSync, NpmExecutor, PublishOptions, run_publish};

/// Publish ./package.json to npm, then ask the mirror to sync it.
#[derive(Parser, Debug)]
#[command(name = "pkg-publish")]
#[command(about = "Publish the package with npm and trigger a mirror sync")]
#[command(version)]
struct Cli {
    /// One-time password for the registry (required)
    #[arg(long, value_name = "TOKEN", num_args = 0..=1, default_missing_value = "")]
    otp: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    pkg_release::logging::init();

    let options = PublishOptions { otp: cli.otp };

    // Checked here as well so a missing OTP fails before any setup
    if options.otp.as_deref().is_none_or(|otp| otp.trim().is_empty()) {
        return Err(PublishError::MissingOtp.into());
    }

    let config = PublishConfig::from_env();
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let executor = NpmExecutor::new(&config.npm);
    let mirror = MirrorSync::new(&config.mirror_url, config.sync_timeout)
        .context("Failed to set up mirror sync client")?;

    let report = run_publish(&cwd, &options, &executor, &mirror)
        .await
        .context("Publish failed")?;

    // Outcome is already logged by the task; exit status does not depend on it
    let _ = report.wait_for_sync(config.sync_timeout).await;

    Ok(())
}
