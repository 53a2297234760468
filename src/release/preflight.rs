//! Preflight checks for the release pipeline.
//!
//! Validates that the required tools are installed and that the release tag
//! is still free before anything is changed.

use tracing::debug;

use crate::error::ReleaseError;
use crate::version::BumpType;

/// Version-control tool, always required.
pub const GIT_TOOL: &str = "git";

/// Module tool, required for major bumps.
pub const MODULE_TOOL: &str = "go";

/// Check that every tool the release will invoke is on `PATH`.
///
/// The module tool is only required when a major bump will rewrite the
/// manifest; a dry run previews without it.
pub fn check_tools_installed(bump: BumpType, dry_run: bool) -> Result<(), ReleaseError> {
    check_tool(GIT_TOOL)?;
    if module_tool_required(bump, dry_run) {
        check_tool(MODULE_TOOL)?;
    }
    Ok(())
}

fn module_tool_required(bump: BumpType, dry_run: bool) -> bool {
    bump == BumpType::Major && !dry_run
}

fn check_tool(name: &str) -> Result<(), ReleaseError> {
    match which::which(name) {
        Ok(path) => {
            debug!(tool = name, path = %path.display(), "Found tool");
            Ok(())
        }
        Err(_) => Err(ReleaseError::ToolNotInstalled(name.to_string())),
    }
}

/// Check that the release tag does not already exist.
pub fn check_tag_available<S: AsRef<str>>(tags: &[S], tag: &str) -> Result<(), ReleaseError> {
    if tags.iter().any(|t| t.as_ref().trim() == tag) {
        return Err(ReleaseError::TagAlreadyExists(tag.to_string()));
    }
    Ok(())
}
