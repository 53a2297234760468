//! Release tools backed by the system `git` and `go` binaries.
//!
//! Mutating operations shell out so they inherit the user's existing git
//! config, SSH agent, and credential store. The repository is opened once with
//! git2 and every subprocess runs from its working directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{Repository, StatusOptions};
use tracing::debug;

use crate::error::{ReleaseError, ToolError};
use crate::release::preflight::{GIT_TOOL, MODULE_TOOL};
use crate::release::tools::ReleaseTools;

/// Manifest files touched by a module path rewrite.
pub const MANIFEST_FILES: [&str; 2] = ["go.mod", "go.sum"];

/// Release tools operating on one repository checkout.
pub struct SystemTools {
    repo: Repository,
    workdir: PathBuf,
}

impl SystemTools {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self, ReleaseError> {
        let repo = Repository::discover(path).map_err(|source| ReleaseError::OpenRepository {
            path: path.to_path_buf(),
            source,
        })?;
        let workdir = repo
            .workdir()
            .ok_or(ReleaseError::BareRepository)?
            .to_path_buf();
        debug!(workdir = %workdir.display(), "Opened repository");
        Ok(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn git(&self, args: &[&str]) -> Result<String, ToolError> {
        run_tool(&self.workdir, GIT_TOOL, args)
    }

    fn go(&self, args: &[&str]) -> Result<String, ToolError> {
        run_tool(&self.workdir, MODULE_TOOL, args)
    }

    /// Manifest files present on disk or tracked in the index, so that a
    /// file removed by tidying is staged as a deletion.
    fn stageable_manifest_files(&self) -> Result<Vec<&'static str>, ToolError> {
        let mut index = self.repo.index().map_err(ToolError::Git)?;
        index.read(false).map_err(ToolError::Git)?;
        Ok(MANIFEST_FILES
            .into_iter()
            .filter(|f| self.workdir.join(f).exists() || index.get_path(Path::new(f), 0).is_some())
            .collect())
    }
}

impl ReleaseTools for SystemTools {
    fn list_tags(&self) -> Result<Vec<String>, ToolError> {
        let stdout = self.git(&["tag", "-l", "--sort=-version:refname"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn current_module_path(&self) -> Result<String, ToolError> {
        Ok(self.go(&["list", "-m"])?.trim().to_string())
    }

    fn set_module_path(&self, module_path: &str) -> Result<(), ToolError> {
        let arg = format!("-module={}", module_path);
        self.go(&["mod", "edit", &arg]).map(drop)
    }

    fn tidy_modules(&self) -> Result<(), ToolError> {
        self.go(&["mod", "tidy"]).map(drop)
    }

    fn manifest_changed(&self) -> Result<bool, ToolError> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true).include_ignored(false);
        for file in MANIFEST_FILES {
            opts.pathspec(file);
        }

        let statuses = self.repo.statuses(Some(&mut opts)).map_err(ToolError::Git)?;
        let changed = statuses.iter().any(|entry| {
            let status = entry.status();
            !status.is_empty() && !status.is_ignored()
        });
        Ok(changed)
    }

    fn stage_manifest(&self) -> Result<(), ToolError> {
        let files = self.stageable_manifest_files()?;
        if files.is_empty() {
            debug!("No manifest files to stage");
            return Ok(());
        }
        let mut args = vec!["add", "-A", "--"];
        args.extend(files);
        self.git(&args).map(drop)
    }

    fn commit(&self, message: &str) -> Result<(), ToolError> {
        self.git(&["commit", "-m", message]).map(drop)
    }

    fn push_head(&self, remote: &str) -> Result<(), ToolError> {
        self.git(&["push", remote, "HEAD"]).map(drop)
    }

    fn create_tag(&self, tag: &str) -> Result<(), ToolError> {
        self.git(&["tag", tag]).map(drop)
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<(), ToolError> {
        self.git(&["push", remote, tag]).map(drop)
    }
}

/// Run a tool in `dir` and return its stdout, or a descriptive error.
fn run_tool(dir: &Path, program: &str, args: &[&str]) -> Result<String, ToolError> {
    let command = format!("{} {}", program, args.join(" "));
    debug!(%command, "Running");

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|source| ToolError::SpawnFailed {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::NonZeroExit {
            command,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
