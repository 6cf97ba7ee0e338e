//! pkg-release - release helpers for npm packages.
//!
//! # Overview
//!
//! Two tools share this library:
//! - `pkg-bump` rewrites the `version` in `package.json` (major, minor, patch,
//!   the alpha → beta → rc prerelease train, or an explicit version).
//! - `pkg-publish` runs `npm publish` with a one-time password and then asks
//!   the npm mirror to sync the new release, without letting the mirror decide
//!   the outcome.
//!
//! Library entry points take the package directory and their collaborators as
//! parameters; only the binaries read the working directory or exit the process.

pub mod bump;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod publish;
pub mod version;

// Re-export commonly used types
pub use bump::{BumpOutcome, run_bump};
pub use error::{BumpError, ManifestError, PublishError, SyncError, VersionError};
pub use manifest::{Manifest, PackageInfo};
pub use publish::{PublishOptions, PublishReport, SyncOutcome, run_publish};
pub use version::{BumpAction, BumpOptions, BumpType, PrereleaseStage};
