//! modship - A CLI tool that computes the next semantic version from git tags
//! and ships a module release.
//!
//! # Overview
//!
//! modship reads the existing version tags, bumps the latest one by the
//! requested kind, rewrites the module path on major bumps (versions 2 and
//! above carry a `/vN` suffix), then commits, tags, and pushes.

pub mod config;
pub mod error;
pub mod git;
pub mod release;
pub mod version;

// Re-export commonly used types
pub use error::{ReleaseError, ToolError, VersionError};
pub use git::SystemTools;
pub use release::{ReleaseConfig, ReleasePlan, ReleaseReport, plan_release, run_release};
pub use version::BumpType;
