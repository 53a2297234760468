//! Error types for modship modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::BumpType;

/// Errors from version operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid bump type '{0}'. Must be 'major', 'minor', or 'patch'")]
    InvalidBumpType(String),

    #[error("Cannot apply a {bump} bump to {version}: component would overflow")]
    Overflow { version: String, bump: BumpType },
}

/// Errors from invoking an external tool (git or go).
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Git repository error: {0}")]
    Git(#[source] git2::Error),
}

/// Errors from the release pipeline.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Not a git repository (or any parent): {}", path.display())]
    OpenRepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Bare repository not supported")]
    BareRepository,

    #[error("{0} is required but was not found in PATH")]
    ToolNotInstalled(String),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Tag {0} already exists")]
    TagAlreadyExists(String),

    #[error("Failed to {step}: {source}")]
    Step {
        step: String,
        #[source]
        source: ToolError,
    },
}

impl ReleaseError {
    /// Wrap a tool failure with the name of the step that produced it.
    pub fn step(step: impl std::fmt::Display, source: ToolError) -> Self {
        ReleaseError::Step {
            step: step.to_string(),
            source,
        }
    }
}
