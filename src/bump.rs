//! Bump pipeline: read the manifest, resolve the flags, write the new version.

use std::path::Path;

use semver::Version;
use tracing::{debug, warn};

use crate::error::BumpError;
use crate::manifest::Manifest;
use crate::version::{BumpAction, BumpOptions};

/// Result of a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Version found in the manifest before the bump, if any.
    pub previous: Option<String>,
    pub version: String,
    /// False for dry runs.
    pub written: bool,
}

/// Bump the version of the package in `dir`.
///
/// Nothing is written unless the new version was computed successfully, and
/// nothing is written at all when `dry_run` is set.
pub fn run_bump(
    dir: &Path,
    options: &BumpOptions,
    dry_run: bool,
) -> Result<BumpOutcome, BumpError> {
    if options.recursive {
        debug!("--recursive has no effect; only {} is updated", dir.display());
    }

    let action = BumpAction::resolve(options);
    debug!(?action, "Resolved bump action");

    if let BumpAction::Explicit(literal) = &action {
        if literal.trim().is_empty() {
            return Err(BumpError::EmptyVersion);
        }
        if Version::parse(literal).is_err() {
            warn!("Explicit version '{}' is not valid semver; writing it as given", literal);
        }
    }

    let mut manifest = Manifest::load(dir)?;

    let previous = manifest.version().ok().map(str::to_string);
    let version = match &action {
        BumpAction::Explicit(_) => action.apply(previous.as_deref())?,
        // Relative bumps need the field to exist, not just parse
        _ => action.apply(Some(manifest.version()?))?,
    };

    if dry_run {
        return Ok(BumpOutcome {
            previous,
            version,
            written: false,
        });
    }

    manifest.set_version(&version);
    manifest.save()?;
    debug!(path = %manifest.path().display(), %version, "Manifest updated");

    Ok(BumpOutcome {
        previous,
        version,
        written: true,
    })
}
