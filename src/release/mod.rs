//! Release pipeline: compute the next version and ship it.
//!
//! Orchestrates version resolution, the module path rewrite on major bumps,
//! and git commit/tag/push. With `dry_run` set nothing is changed; every
//! mutating step is reported as skipped instead.

pub mod executor;
pub mod module_path;
pub mod preflight;
pub mod tools;

use std::fmt;

use semver::Version;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ReleaseError, VersionError};
use crate::git::tags::resolve_current_version;
use crate::version::{BumpType, apply_bump_to_version, tag_name};

use self::executor::ManifestCommit;
use self::module_path::{derive_module_path, module_update_required};
use self::preflight::check_tag_available;
use self::tools::ReleaseTools;

/// Configuration for a release, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub bump: BumpType,
    pub dry_run: bool,
    pub remote: String,
    /// Suppress progress lines; the caller prints the report instead.
    pub json: bool,
}

/// The computed release, before anything is changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    pub bump: BumpType,
    pub current: Version,
    pub next: Version,
    pub tag: String,
    pub module_update: bool,
}

/// Plan a release from tags sorted by descending version precedence.
pub fn plan_release<S: AsRef<str>>(
    tags: &[S],
    bump: BumpType,
) -> Result<ReleasePlan, VersionError> {
    let current = resolve_current_version(tags);
    let next = apply_bump_to_version(&current, bump)?;
    let module_update = module_update_required(bump, &current);
    Ok(ReleasePlan {
        bump,
        tag: tag_name(&next),
        current,
        next,
        module_update,
    })
}

/// A side-effecting step of the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStep {
    UpdateModulePath,
    CommitManifest,
    PushManifest,
    CreateTag,
    PushTag,
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReleaseStep::UpdateModulePath => "update module path",
            ReleaseStep::CommitManifest => "commit manifest changes",
            ReleaseStep::PushManifest => "push manifest changes",
            ReleaseStep::CreateTag => "create tag",
            ReleaseStep::PushTag => "push tag",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Done,
    /// Not run because of dry run.
    Skipped,
    /// Not run because there was nothing to do.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: ReleaseStep,
    pub status: StepStatus,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePathChange {
    pub from: String,
    pub to: String,
}

/// Outcome of a release run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseReport {
    pub plan: ReleasePlan,
    pub dry_run: bool,
    pub module_path: Option<ModulePathChange>,
    pub steps: Vec<StepRecord>,
}

impl ReleaseReport {
    pub fn status_of(&self, step: ReleaseStep) -> Option<StepStatus> {
        self.steps.iter().find(|r| r.step == step).map(|r| r.status)
    }
}

/// Records steps and prints progress lines.
struct Progress {
    quiet: bool,
    steps: Vec<StepRecord>,
}

impl Progress {
    fn line(&self, text: impl fmt::Display) {
        if !self.quiet {
            println!("{}", text);
        }
    }

    fn record(&mut self, step: ReleaseStep, status: StepStatus, detail: String) {
        let marker = match status {
            StepStatus::Done => "DONE",
            StepStatus::Skipped | StepStatus::Unchanged => "SKIP",
        };
        self.line(format_args!("  [{}] {}", marker, detail));
        self.steps.push(StepRecord {
            step,
            status,
            detail,
        });
    }
}

/// Run the full release pipeline.
///
/// Sequence:
/// 1. Resolve the current version from existing tags
/// 2. Compute the new version and refuse an existing tag
/// 3. On a major bump, rewrite the module path, then commit and push it
/// 4. Create and push the release tag
pub fn run_release<T: ReleaseTools + ?Sized>(
    config: &ReleaseConfig,
    tools: &T,
) -> Result<ReleaseReport, ReleaseError> {
    let mut progress = Progress {
        quiet: config.json,
        steps: Vec::new(),
    };

    if config.dry_run {
        progress.line("DRY RUN MODE - No changes will be made");
    }

    // ── Stage 1: Version calculation ──
    let tags = tools
        .list_tags()
        .map_err(|e| ReleaseError::step("list tags", e))?;
    debug!(count = tags.len(), "Listed tags");

    let plan = plan_release(&tags, config.bump)?;
    progress.line(format_args!("Current version: {}", tag_name(&plan.current)));
    progress.line(format_args!("New version: {}", plan.tag));

    check_tag_available(&tags, &plan.tag)?;

    // ── Stage 2: Module path ──
    let mut module_path = None;
    if plan.module_update {
        progress.line("Major version bump detected - module path needs update");

        if config.dry_run {
            // Best effort: a preview works without a module toolchain.
            let detail = match tools.current_module_path() {
                Ok(from) => {
                    let change = ModulePathChange {
                        to: derive_module_path(&from, plan.next.major),
                        from,
                    };
                    let detail =
                        format!("Would update module path: {} -> {}", change.from, change.to);
                    module_path = Some(change);
                    detail
                }
                Err(e) => {
                    warn!(error = %e, "Could not query module path during dry run");
                    format!(
                        "Would update module path for major version {} (current module path unavailable)",
                        plan.next.major
                    )
                }
            };
            progress.record(ReleaseStep::UpdateModulePath, StepStatus::Skipped, detail);
            progress.record(
                ReleaseStep::CommitManifest,
                StepStatus::Skipped,
                format!("Would commit module path changes for {}", plan.tag),
            );
            progress.record(
                ReleaseStep::PushManifest,
                StepStatus::Skipped,
                format!("Would push module path changes to {}", config.remote),
            );
        } else {
            let from = tools
                .current_module_path()
                .map_err(|e| ReleaseError::step("query module path", e))?;
            let change = ModulePathChange {
                to: derive_module_path(&from, plan.next.major),
                from,
            };

            executor::update_module_path(tools, &change.to)?;
            progress.record(
                ReleaseStep::UpdateModulePath,
                StepStatus::Done,
                format!("Updated module path: {} -> {}", change.from, change.to),
            );

            match executor::commit_manifest(tools, &plan.tag)? {
                ManifestCommit::Committed => {
                    progress.record(
                        ReleaseStep::CommitManifest,
                        StepStatus::Done,
                        format!("Committed module path changes for {}", plan.tag),
                    );
                    executor::push_manifest(tools, &config.remote)?;
                    progress.record(
                        ReleaseStep::PushManifest,
                        StepStatus::Done,
                        format!("Pushed module path changes to {}", config.remote),
                    );
                }
                ManifestCommit::NothingToCommit => {
                    progress.record(
                        ReleaseStep::CommitManifest,
                        StepStatus::Unchanged,
                        "No module manifest changes to commit".to_string(),
                    );
                    progress.record(
                        ReleaseStep::PushManifest,
                        StepStatus::Unchanged,
                        "Nothing to push".to_string(),
                    );
                }
            }

            module_path = Some(change);
        }
    }

    // ── Stage 3: Tag ──
    if config.dry_run {
        progress.record(
            ReleaseStep::CreateTag,
            StepStatus::Skipped,
            format!("Would create tag: {}", plan.tag),
        );
        progress.record(
            ReleaseStep::PushTag,
            StepStatus::Skipped,
            format!("Would push tag {} to {}", plan.tag, config.remote),
        );
        progress.line("");
        progress.line(format_args!("Dry run complete. Would release {}", plan.tag));
    } else {
        executor::create_tag(tools, &plan.tag)?;
        progress.record(
            ReleaseStep::CreateTag,
            StepStatus::Done,
            format!("Created tag: {}", plan.tag),
        );
        executor::push_tag(tools, &config.remote, &plan.tag)?;
        progress.record(
            ReleaseStep::PushTag,
            StepStatus::Done,
            format!("Pushed tag {} to {}", plan.tag, config.remote),
        );
        progress.line("");
        progress.line(format_args!("Release {} shipped!", plan.tag));
    }

    Ok(ReleaseReport {
        plan,
        dry_run: config.dry_run,
        module_path,
        steps: progress.steps,
    })
}
