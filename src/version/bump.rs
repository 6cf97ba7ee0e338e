//! Semver increments and bump-flag resolution.

use semver::Version;

use crate::error::VersionError;

use super::prerelease;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

/// Flags accepted by the bump command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BumpOptions {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub prerelease: bool,
    pub version: Option<String>,
    /// Accepted for compatibility; has no effect.
    pub recursive: bool,
}

/// The single action a set of flags resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpAction {
    /// Use this string verbatim as the new version.
    Explicit(String),
    /// Advance along the alpha → beta → rc → stable train.
    Prerelease,
    Increment(BumpType),
}

impl BumpAction {
    /// Resolve flags by priority: explicit version, prerelease, major, minor,
    /// patch, then a default patch. Lower-priority flags are ignored.
    pub fn resolve(options: &BumpOptions) -> BumpAction {
        options
            .version
            .clone()
            .map(BumpAction::Explicit)
            .or_else(|| options.prerelease.then_some(BumpAction::Prerelease))
            .or_else(|| options.major.then_some(BumpAction::Increment(BumpType::Major)))
            .or_else(|| options.minor.then_some(BumpAction::Increment(BumpType::Minor)))
            .or_else(|| options.patch.then_some(BumpAction::Increment(BumpType::Patch)))
            .unwrap_or(BumpAction::Increment(BumpType::Patch))
    }

    /// Compute the new version string from the current one.
    ///
    /// `current` is only parsed for relative bumps, so an explicit version
    /// works even when the manifest holds no valid version.
    pub fn apply(&self, current: Option<&str>) -> Result<String, VersionError> {
        let next = match self {
            BumpAction::Explicit(literal) => return Ok(literal.clone()),
            BumpAction::Prerelease => prerelease::advance(&parse_current(current)?)?,
            BumpAction::Increment(bump_type) => {
                apply_bump_to_version(&parse_current(current)?, *bump_type)?
            }
        };

        Ok(next.to_string())
    }
}

fn parse_current(current: Option<&str>) -> Result<Version, VersionError> {
    let raw = current.unwrap_or_default();
    Version::parse(raw).map_err(|e| VersionError::ParseFailed(raw.to_string(), e))
}

/// Apply a bump to a version.
///
/// A prerelease that already sits on the target release is promoted instead
/// of incremented again: `1.2.4-rc.0` + patch is `1.2.4`, `1.3.0-alpha.0` +
/// minor is `1.3.0`, `2.0.0-beta.1` + major is `2.0.0`. Build metadata and any
/// prerelease tag are always cleared.
///
/// Fails with [`VersionError::Overflow`] when the incremented component
/// would exceed `u64::MAX`.
pub fn apply_bump_to_version(
    version: &Version,
    bump_type: BumpType,
) -> Result<Version, VersionError> {
    let is_pre = !version.pre.is_empty();

    let next = match bump_type {
        BumpType::Major => {
            if is_pre && version.minor == 0 && version.patch == 0 {
                Version::new(version.major, 0, 0)
            } else {
                Version::new(increment(version, version.major, "major")?, 0, 0)
            }
        }
        BumpType::Minor => {
            if is_pre && version.patch == 0 {
                Version::new(version.major, version.minor, 0)
            } else {
                Version::new(version.major, increment(version, version.minor, "minor")?, 0)
            }
        }
        BumpType::Patch => {
            if is_pre {
                Version::new(version.major, version.minor, version.patch)
            } else {
                let patch = increment(version, version.patch, "patch")?;
                Version::new(version.major, version.minor, patch)
            }
        }
    };

    Ok(next)
}

/// Add one to a version component.
pub(crate) fn increment(
    version: &Version,
    value: u64,
    component: &'static str,
) -> Result<u64, VersionError> {
    value.checked_add(1).ok_or_else(|| VersionError::Overflow {
        version: version.to_string(),
        component,
    })
}
