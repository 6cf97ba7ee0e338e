//! Environment-driven settings shared by both tools.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default mirror that pulls freshly published packages from npm.
pub const DEFAULT_MIRROR_URL: &str = "https://registry-direct.npmmirror.com";

/// Default timeout for the mirror sync request (30 seconds).
const DEFAULT_SYNC_TIMEOUT_SECS: u64 = 30;

/// Default npm executable.
const DEFAULT_NPM: &str = "npm";

/// Environment variable overriding the mirror base URL.
pub const MIRROR_URL_ENV_VAR: &str = "PKG_RELEASE_MIRROR_URL";

/// Environment variable overriding the sync timeout (seconds).
pub const SYNC_TIMEOUT_ENV_VAR: &str = "PKG_RELEASE_SYNC_TIMEOUT";

/// Environment variable overriding the npm executable.
pub const NPM_ENV_VAR: &str = "PKG_RELEASE_NPM";

/// Settings for the publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    pub mirror_url: String,
    pub sync_timeout: Duration,
    pub npm: String,
}

impl PublishConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self {
            mirror_url: non_empty_var(MIRROR_URL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_MIRROR_URL.to_string()),
            sync_timeout: get_sync_timeout(),
            npm: non_empty_var(NPM_ENV_VAR).unwrap_or_else(|| DEFAULT_NPM.to_string()),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            mirror_url: DEFAULT_MIRROR_URL.to_string(),
            sync_timeout: Duration::from_secs(DEFAULT_SYNC_TIMEOUT_SECS),
            npm: DEFAULT_NPM.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read the sync timeout, warning and falling back to the default on
/// non-numeric or zero values.
fn get_sync_timeout() -> Duration {
    match env::var(SYNC_TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    SYNC_TIMEOUT_ENV_VAR, v, DEFAULT_SYNC_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_SYNC_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_SYNC_TIMEOUT_SECS),
    }
}
