//! Version detection from tag names.

use std::sync::LazyLock;

use regex_lite::Regex;
use semver::Version;
use tracing::debug;

static VERSION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)").expect("Invalid regex"));

/// Extract a version from a tag name.
///
/// Handles both "v1.2.3" and "1.2.3". Anything after the third numeric group
/// (pre-release identifiers, build metadata, arbitrary suffixes) is ignored,
/// so "v1.0.0-beta.1" yields 1.0.0.
pub fn parse_version_tag(tag: &str) -> Option<Version> {
    let caps = VERSION_TAG_RE.captures(tag)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    let patch = caps[3].parse().ok()?;
    Some(Version::new(major, minor, patch))
}

/// Resolve the current version from tags ordered by descending precedence.
///
/// Returns the version of the first tag that parses. Malformed tags are
/// skipped; if nothing parses (or there are no tags) the result is 0.0.0.
pub fn resolve_current_version<S: AsRef<str>>(tags: &[S]) -> Version {
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        match parse_version_tag(tag) {
            Some(version) => {
                debug!(tag, %version, "Resolved current version from tag");
                return version;
            }
            None => debug!(tag, "Skipping non-version tag"),
        }
    }

    debug!("No version tags found, starting from 0.0.0");
    Version::new(0, 0, 0)
}
