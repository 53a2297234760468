//! Version management and semver bumping.

pub mod bump;

pub use bump::{BumpType, apply_bump_to_version, tag_name};
