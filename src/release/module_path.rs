//! Module path handling for major version bumps.
//!
//! Major versions 2 and above are encoded in the module's import path as a
//! `/vN` suffix; v0 and v1 use the bare path.

use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;

use crate::version::BumpType;

static MAJOR_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/v\d+$").expect("Invalid regex"));

/// Whether a bump requires rewriting the module path.
///
/// Every major bump rewrites the path, whatever the current major version.
pub fn module_update_required(bump: BumpType, _current: &Version) -> bool {
    bump == BumpType::Major
}

/// Derive the module path for a new major version.
///
/// Strips any existing `/vN` suffix, then appends `/v<new_major>` when
/// `new_major >= 2`.
pub fn derive_module_path(current: &str, new_major: u64) -> String {
    let base = MAJOR_SUFFIX_RE.replace(current, "");
    if new_major >= 2 {
        format!("{}/v{}", base, new_major)
    } else {
        base.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_existing_suffix() {
        assert_eq!(derive_module_path("example.com/mod/v3", 4), "example.com/mod/v4");
    }

    #[test]
    fn test_bare_path_below_v2() {
        assert_eq!(derive_module_path("example.com/mod", 1), "example.com/mod");
    }

    #[test]
    fn test_strips_suffix_below_v2() {
        assert_eq!(derive_module_path("example.com/mod/v2", 1), "example.com/mod");
    }

    #[test]
    fn test_adds_suffix_at_v2() {
        assert_eq!(derive_module_path("example.com/mod", 2), "example.com/mod/v2");
    }

    #[test]
    fn test_only_trailing_suffix_is_stripped() {
        assert_eq!(
            derive_module_path("example.com/v2/mod", 3),
            "example.com/v2/mod/v3"
        );
        assert_eq!(
            derive_module_path("example.com/mod/version", 2),
            "example.com/mod/version/v2"
        );
    }

    #[test]
    fn test_update_required_only_for_major() {
        for current in [Version::new(0, 0, 0), Version::new(1, 4, 2), Version::new(7, 0, 0)] {
            assert!(module_update_required(BumpType::Major, &current));
            assert!(!module_update_required(BumpType::Minor, &current));
            assert!(!module_update_required(BumpType::Patch, &current));
        }
    }
}
