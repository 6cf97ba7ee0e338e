//! Publish pipeline: check the OTP, publish, then kick off the mirror sync.

pub mod executor;
pub mod mirror;

use std::path::Path;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::debug;

use crate::error::PublishError;
use crate::manifest::Manifest;

pub use self::executor::{NpmExecutor, PublishExecutor};
pub use self::mirror::{MirrorSync, SyncOutcome};

/// Options for the publish command, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    pub otp: Option<String>,
}

/// A completed publish with its mirror sync still in flight.
#[derive(Debug)]
pub struct PublishReport {
    pub package: String,
    pub sync: JoinHandle<SyncOutcome>,
}

impl PublishReport {
    /// Give the mirror sync up to `grace` to finish so its outcome gets logged.
    ///
    /// Returns `None` if the sync is still running after `grace` or its task
    /// panicked. Either way the publish itself has already succeeded.
    pub async fn wait_for_sync(self, grace: Duration) -> Option<SyncOutcome> {
        match timeout(grace, self.sync).await {
            Ok(Ok(outcome)) => Some(outcome),
            Ok(Err(e)) => {
                debug!("Mirror sync task failed: {}", e);
                None
            }
            Err(_) => {
                debug!("Mirror sync still pending after {:?}, not waiting", grace);
                None
            }
        }
    }
}

/// Publish the package in `dir`.
///
/// Steps:
/// 1. Require a non-empty OTP before touching anything else
/// 2. Read the package name from the manifest
/// 3. Run the publish command
/// 4. Spawn the mirror sync (only after a successful publish)
pub async fn run_publish<E: PublishExecutor + ?Sized>(
    dir: &Path,
    options: &PublishOptions,
    executor: &E,
    mirror: &MirrorSync,
) -> Result<PublishReport, PublishError> {
    let otp = options
        .otp
        .as_deref()
        .map(str::trim)
        .filter(|otp| !otp.is_empty())
        .ok_or(PublishError::MissingOtp)?;

    let manifest = Manifest::load(dir)?;
    let package = manifest.name()?.to_string();

    println!("Publishing {}...", package);
    executor.publish(dir, otp).await?;
    println!("✓ Published {}", package);

    let sync = mirror.spawn(&package);

    Ok(PublishReport { package, sync })
}
