//! The alpha → beta → rc prerelease train.

use std::fmt;
use std::str::FromStr;

use semver::{Prerelease, Version};

use crate::error::VersionError;

use super::bump::increment;

/// Recognized prerelease stages, in release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrereleaseStage {
    Alpha,
    Beta,
    Rc,
}

impl PrereleaseStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrereleaseStage::Alpha => "alpha",
            PrereleaseStage::Beta => "beta",
            PrereleaseStage::Rc => "rc",
        }
    }

    /// The stage after this one, or `None` once the train reaches a stable release.
    pub fn next(self) -> Option<PrereleaseStage> {
        match self {
            PrereleaseStage::Alpha => Some(PrereleaseStage::Beta),
            PrereleaseStage::Beta => Some(PrereleaseStage::Rc),
            PrereleaseStage::Rc => None,
        }
    }

    /// First prerelease of this stage, e.g. `beta.0`.
    fn first(self) -> Prerelease {
        // "<stage>.0" is always a valid prerelease identifier
        Prerelease::new(&format!("{}.0", self.as_str())).unwrap_or(Prerelease::EMPTY)
    }
}

impl fmt::Display for PrereleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrereleaseStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(PrereleaseStage::Alpha),
            "beta" => Ok(PrereleaseStage::Beta),
            "rc" => Ok(PrereleaseStage::Rc),
            _ => Err(()),
        }
    }
}

/// Current stage of a version, judged by its first prerelease identifier.
///
/// Returns `Ok(None)` for stable versions and an error for tags outside the
/// alpha/beta/rc train.
pub fn current_stage(version: &Version) -> Result<Option<PrereleaseStage>, VersionError> {
    if version.pre.is_empty() {
        return Ok(None);
    }

    let tag = version.pre.as_str().split('.').next().unwrap_or_default();
    tag.parse::<PrereleaseStage>()
        .map(Some)
        .map_err(|_| VersionError::UnknownPrereleaseTag {
            version: version.to_string(),
            tag: tag.to_string(),
        })
}

/// Advance a version one step along the prerelease train.
///
/// - stable `1.2.3` → `1.2.4-alpha.0`
/// - `1.2.4-alpha.N` → `1.2.4-beta.0`
/// - `1.2.4-beta.N` → `1.2.4-rc.0`
/// - `1.2.4-rc.N` → `1.2.4`
///
/// Starting a train on a stable version whose patch is `u64::MAX` fails with
/// [`VersionError::Overflow`].
pub fn advance(version: &Version) -> Result<Version, VersionError> {
    let mut next = Version::new(version.major, version.minor, version.patch);

    match current_stage(version)? {
        None => {
            next.patch = increment(version, version.patch, "patch")?;
            next.pre = PrereleaseStage::Alpha.first();
        }
        Some(stage) => {
            if let Some(following) = stage.next() {
                next.pre = following.first();
            }
        }
    }

    Ok(next)
}
