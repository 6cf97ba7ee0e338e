//! Error types for pkg-release modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the package manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {} is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Manifest {} has no string field '{field}'", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Failed to write manifest {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    SerializeFailed(#[source] serde_json::Error),
}

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),

    #[error("Unknown prerelease tag '{tag}' in {version}; expected one of alpha, beta, rc")]
    UnknownPrereleaseTag { version: String, tag: String },

    #[error("Cannot bump {version}: {component} version would overflow")]
    Overflow {
        version: String,
        component: &'static str,
    },
}

/// Errors from the bump command.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Explicit version must not be empty")]
    EmptyVersion,
}

/// Errors from the publish command.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Missing required --otp <token> argument")]
    MissingOtp,

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Publish command '{0}' not found in PATH")]
    NotInstalled(String),

    #[error("Failed to spawn publish command: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error(
        "Publish command exited with {}",
        code.map_or("a signal".to_string(), |c| format!("code {c}"))
    )]
    NonZeroExit { code: Option<i32> },
}

/// Errors from the mirror sync request. Never escalated past logging.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid mirror URL '{0}'")]
    InvalidUrl(String),

    #[error("Mirror sync request failed: {0}")]
    Request(#[from] reqwest::Error),
}
