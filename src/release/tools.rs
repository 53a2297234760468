//! External collaborators of the release pipeline.

use crate::error::ToolError;

/// Trait for the version-control and module tooling a release drives.
///
/// This abstraction allows mocking the git and go subprocesses in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseTools {
    /// Existing tags, sorted by descending version precedence.
    fn list_tags(&self) -> Result<Vec<String>, ToolError>;

    /// The module path currently declared in the manifest.
    fn current_module_path(&self) -> Result<String, ToolError>;

    /// Rewrite the module path declared in the manifest.
    fn set_module_path(&self, module_path: &str) -> Result<(), ToolError>;

    /// Reconcile the manifest's dependency requirements.
    fn tidy_modules(&self) -> Result<(), ToolError>;

    /// Whether the manifest files differ from what is committed.
    fn manifest_changed(&self) -> Result<bool, ToolError>;

    /// Stage the manifest files.
    fn stage_manifest(&self) -> Result<(), ToolError>;

    /// Create a commit from the staged changes.
    fn commit(&self, message: &str) -> Result<(), ToolError>;

    /// Push the current branch to the remote.
    fn push_head(&self, remote: &str) -> Result<(), ToolError>;

    /// Create a lightweight tag at HEAD.
    fn create_tag(&self, tag: &str) -> Result<(), ToolError>;

    /// Push a single tag to the remote.
    fn push_tag(&self, remote: &str, tag: &str) -> Result<(), ToolError>;
}
