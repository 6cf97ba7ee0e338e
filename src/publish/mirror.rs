//! Best-effort mirror sync after a successful publish.
//!
//! The request runs on a detached task. Its outcome is logged and handed back
//! through the task's `JoinHandle`, but never decides the exit status.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::SyncError;

/// What happened to a mirror sync request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The mirror answered 200.
    Synced,
    /// The mirror answered with another status code.
    Rejected(u16),
    /// The request never produced a response.
    Failed(String),
}

/// Client for the mirror's sync endpoint.
#[derive(Debug, Clone)]
pub struct MirrorSync {
    client: Client,
    base_url: String,
}

impl MirrorSync {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SyncError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// `<base>/<package>/sync?sync_upstream=true`
    pub fn sync_url(&self, package: &str) -> Result<Url, SyncError> {
        let raw = format!("{}/{}/sync", self.base_url.trim_end_matches('/'), package);
        let mut url = Url::parse(&raw).map_err(|_| SyncError::InvalidUrl(raw.clone()))?;
        url.query_pairs_mut().append_pair("sync_upstream", "true");
        Ok(url)
    }

    /// Send the sync request and return the response status.
    pub async fn sync(&self, package: &str) -> Result<StatusCode, SyncError> {
        let url = self.sync_url(package)?;
        debug!(%url, "Requesting mirror sync");
        let response = self.client.put(url).send().await?;
        Ok(response.status())
    }

    /// Start the sync on a detached task.
    ///
    /// The caller may drop the handle; the task logs its own outcome.
    pub fn spawn(&self, package: &str) -> JoinHandle<SyncOutcome> {
        let mirror = self.clone();
        let package = package.to_string();

        tokio::spawn(async move {
            let outcome = match mirror.sync(&package).await {
                Ok(status) if status == StatusCode::OK => SyncOutcome::Synced,
                Ok(status) => SyncOutcome::Rejected(status.as_u16()),
                Err(e) => SyncOutcome::Failed(e.to_string()),
            };

            match &outcome {
                SyncOutcome::Synced => println!("✓ Mirror sync requested for {}", package),
                SyncOutcome::Rejected(status) => {
                    warn!("Mirror sync failed for {}: HTTP {}", package, status)
                }
                SyncOutcome::Failed(reason) => {
                    debug!("Mirror sync for {} did not complete: {}", package, reason)
                }
            }

            outcome
        })
    }
}
