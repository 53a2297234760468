//! Integration tests for the release pipeline against real git repositories.
//!
//! These use the system `git` binary through `SystemTools` and a bare
//! repository as the `origin` remote.

mod common;

use modship::release::tools::ReleaseTools;
use modship::release::{ReleaseConfig, ReleaseStep, StepStatus, run_release};
use modship::{BumpType, ReleaseError, SystemTools};
use semver::Version;

use common::{TestRepo, has_tag};

fn config(bump: BumpType, dry_run: bool) -> ReleaseConfig {
    ReleaseConfig {
        bump,
        dry_run,
        remote: "origin".to_string(),
        json: true,
    }
}

#[test]
fn test_list_tags_sorted_by_version() {
    let repo = TestRepo::new();
    repo.commit("feat: first");
    repo.tag_head(&["v1.9.0", "v1.10.0", "v1.2.0", "not-a-version"]);

    let tools = SystemTools::open(repo.path()).expect("Failed to open repo");
    let tags = tools.list_tags().expect("Failed to list tags");

    let versions: Vec<&str> = tags.iter().map(String::as_str).filter(|t| t.starts_with('v')).collect();
    assert_eq!(versions, ["v1.10.0", "v1.9.0", "v1.2.0"]);
    assert!(tags.iter().any(|t| t == "not-a-version"));
}

#[test]
fn test_list_tags_empty_repository() {
    let repo = TestRepo::new();
    repo.commit("feat: first");

    let tools = SystemTools::open(repo.path()).expect("Failed to open repo");
    assert!(tools.list_tags().expect("Failed to list tags").is_empty());
}

#[test]
fn test_patch_release_tags_and_pushes() {
    let repo = TestRepo::new();
    repo.commit("feat: first");
    repo.tag_head(&["v1.2.3", "v1.2.2"]);
    repo.commit("fix: second");
    let (_remote_dir, bare) = repo.add_bare_origin();

    let tools = SystemTools::open(repo.path()).expect("Failed to open repo");
    let report = run_release(&config(BumpType::Patch, false), &tools).expect("Release failed");

    assert_eq!(report.plan.current, Version::new(1, 2, 3));
    assert_eq!(report.plan.tag, "v1.2.4");
    assert_eq!(report.status_of(ReleaseStep::PushTag), Some(StepStatus::Done));

    assert!(has_tag(&repo.repo, "v1.2.4"));
    assert!(has_tag(&bare, "v1.2.4"));
}

#[test]
fn test_dry_run_leaves_repository_untouched() {
    let repo = TestRepo::new();
    repo.commit("feat: first");
    repo.tag_head(&["v0.3.0"]);
    let (_remote_dir, bare) = repo.add_bare_origin();

    let tools = SystemTools::open(repo.path()).expect("Failed to open repo");
    let report = run_release(&config(BumpType::Minor, true), &tools).expect("Dry run failed");

    assert_eq!(report.plan.tag, "v0.4.0");
    assert_eq!(report.status_of(ReleaseStep::CreateTag), Some(StepStatus::Skipped));
    assert_eq!(report.status_of(ReleaseStep::PushTag), Some(StepStatus::Skipped));

    assert!(!has_tag(&repo.repo, "v0.4.0"));
    assert!(!has_tag(&bare, "v0.4.0"));
}

#[test]
fn test_push_failure_keeps_local_tag() {
    let repo = TestRepo::new();
    repo.commit("feat: first");
    // No origin remote configured, so the push fails after tagging.

    let tools = SystemTools::open(repo.path()).expect("Failed to open repo");
    let err = run_release(&config(BumpType::Minor, false), &tools).unwrap_err();

    assert!(matches!(err, ReleaseError::Step { ref step, .. } if step == "push tag"));
    assert!(has_tag(&repo.repo, "v0.1.0"));
}
