//! Mutating release operations: manifest rewrite, commit, tag, and push.
//!
//! No rollback is attempted. The first failing operation aborts the release
//! and leaves earlier operations in place.

use crate::error::ReleaseError;

use super::ReleaseStep;
use super::tools::ReleaseTools;

/// Whether the manifest commit actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestCommit {
    Committed,
    NothingToCommit,
}

/// Rewrite the module path and reconcile dependencies.
pub fn update_module_path<T: ReleaseTools + ?Sized>(
    tools: &T,
    new_path: &str,
) -> Result<(), ReleaseError> {
    tools
        .set_module_path(new_path)
        .map_err(|e| ReleaseError::step(ReleaseStep::UpdateModulePath, e))?;
    tools
        .tidy_modules()
        .map_err(|e| ReleaseError::step("tidy module dependencies", e))?;
    Ok(())
}

/// Stage and commit manifest changes for a release.
///
/// Steps:
/// 1. Skip if the manifest files are unchanged
/// 2. Stage the manifest files
/// 3. `chore: update module path for vX.Y.Z`
pub fn commit_manifest<T: ReleaseTools + ?Sized>(
    tools: &T,
    tag: &str,
) -> Result<ManifestCommit, ReleaseError> {
    let changed = tools
        .manifest_changed()
        .map_err(|e| ReleaseError::step("check manifest changes", e))?;
    if !changed {
        return Ok(ManifestCommit::NothingToCommit);
    }

    tools
        .stage_manifest()
        .map_err(|e| ReleaseError::step("stage manifest changes", e))?;

    let message = format!("chore: update module path for {}", tag);
    tools
        .commit(&message)
        .map_err(|e| ReleaseError::step(ReleaseStep::CommitManifest, e))?;

    Ok(ManifestCommit::Committed)
}

/// Push the manifest commit.
pub fn push_manifest<T: ReleaseTools + ?Sized>(
    tools: &T,
    remote: &str,
) -> Result<(), ReleaseError> {
    tools
        .push_head(remote)
        .map_err(|e| ReleaseError::step(ReleaseStep::PushManifest, e))
}

/// Create the release tag locally.
pub fn create_tag<T: ReleaseTools + ?Sized>(tools: &T, tag: &str) -> Result<(), ReleaseError> {
    tools
        .create_tag(tag)
        .map_err(|e| ReleaseError::step(ReleaseStep::CreateTag, e))
}

/// Push the release tag.
pub fn push_tag<T: ReleaseTools + ?Sized>(
    tools: &T,
    remote: &str,
    tag: &str,
) -> Result<(), ReleaseError> {
    tools
        .push_tag(remote, tag)
        .map_err(|e| ReleaseError::step(ReleaseStep::PushTag, e))
}
