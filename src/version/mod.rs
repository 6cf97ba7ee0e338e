//! Version management and semver bumping.

pub mod bump;
pub mod prerelease;

pub use bump::{BumpAction, BumpOptions, BumpType, apply_bump_to_version};
pub use prerelease::PrereleaseStage;
