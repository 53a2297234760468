//! Semver bump calculation.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::Serialize;

use crate::error::VersionError;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    /// All accepted bump types, lowest first.
    pub const ALL: [BumpType; 3] = [BumpType::Patch, BumpType::Minor, BumpType::Major];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BumpType::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| VersionError::InvalidBumpType(s.to_string()))
    }
}

/// Apply a bump to a version, resetting the lower components.
///
/// - `major`: (M+1, 0, 0)
/// - `minor`: (M, m+1, 0)
/// - `patch`: (M, m, p+1)
///
/// Fails with `VersionError::Overflow` when the bumped component is already
/// `u64::MAX`.
pub fn apply_bump_to_version(current: &Version, bump: BumpType) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        version: tag_name(current),
        bump,
    };
    let next = match bump {
        BumpType::Major => Version::new(current.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        BumpType::Minor => Version::new(
            current.major,
            current.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        BumpType::Patch => Version::new(
            current.major,
            current.minor,
            current.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };
    Ok(next)
}

/// Canonical tag name for a version (`v<major>.<minor>.<patch>`).
pub fn tag_name(version: &Version) -> String {
    format!("v{}.{}.{}", version.major, version.minor, version.patch)
}
