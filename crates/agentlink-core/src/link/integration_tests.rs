//! End-to-end scenarios for the link engine

#![cfg(unix)]

use std::fs;
use std::os::unix::fs as unix_fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::config::Config;
use crate::error::ErrorKind;

fn setup_project(content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("CLAUDE.md");
    fs::write(&source, content).unwrap();
    (tmp, source)
}

fn engine(dry_run: bool, force: bool) -> LinkEngine {
    LinkEngine::new(ManagerOptions::new(dry_run, force, false))
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Snapshot of an entry for before/after comparisons
fn snapshot(path: &Path) -> Option<(bool, Option<PathBuf>, Option<Vec<u8>>)> {
    let metadata = fs::symlink_metadata(path).ok()?;
    let link = fs::read_link(path).ok();
    let content = if metadata.is_file() {
        fs::read(path).ok()
    } else {
        None
    };
    Some((metadata.file_type().is_symlink(), link, content))
}

#[test]
fn test_sync_creates_missing_link() {
    let (tmp, source) = setup_project("X");
    let agents = tmp.path().join("AGENTS.md");
    let config = Config::new(&source, [&agents]);

    let report = engine(false, false).sync(&config).unwrap();

    assert_eq!(report.created(), 1);
    assert!(!report.has_errors());
    assert!(is_symlink(&agents));
    assert_eq!(fs::read_link(&agents).unwrap(), PathBuf::from("CLAUDE.md"));
    assert_eq!(fs::read_to_string(&agents).unwrap(), "X");
}

#[test]
fn test_sync_twice_is_idempotent() {
    let (tmp, source) = setup_project("X");
    let agents = tmp.path().join("AGENTS.md");
    let nested = tmp.path().join(".codex/instructions.md");
    let config = Config::new(&source, [&agents, &nested]);
    let engine = engine(false, false);

    engine.sync(&config).unwrap();
    let before = snapshot(&nested);
    let second = engine.sync(&config).unwrap();

    assert_eq!(second.created(), 0);
    assert_eq!(second.skipped(), 2);
    assert!(second.outcomes.iter().all(|o| matches!(o.result, Ok(LinkAction::Skip))));
    assert_eq!(snapshot(&nested), before);

    let check = engine.check(&config);
    assert!(!check.has_problems());
}

#[test]
fn test_sync_regular_file_conflict_then_force() {
    let (tmp, source) = setup_project("X");
    let agents = tmp.path().join("AGENTS.md");
    fs::write(&agents, "Y").unwrap();
    let config = Config::new(&source, [&agents]);

    let report = engine(false, false).sync(&config).unwrap();
    let (_, err) = report.failures().next().unwrap();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(!is_symlink(&agents));
    assert_eq!(fs::read_to_string(&agents).unwrap(), "Y");

    let report = engine(false, true).sync(&config).unwrap();
    assert!(matches!(report.outcomes[0].result, Ok(LinkAction::Replace)));
    assert!(is_symlink(&agents));
    assert_eq!(fs::read_to_string(&agents).unwrap(), "X");
}

#[test]
fn test_check_and_force_fix_wrong_target() {
    let (tmp, source) = setup_project("X");
    fs::write(tmp.path().join("other.md"), "other").unwrap();
    let agents = tmp.path().join("AGENTS.md");
    unix_fs::symlink("other.md", &agents).unwrap();
    let config = Config::new(&source, [&agents]);

    let check = engine(false, false).check(&config);
    assert!(check.has_problems());
    assert_eq!(check.links[0].status, LinkStatus::WrongTarget);
    assert_eq!(check.links[0].target, Some(PathBuf::from("other.md")));

    let before = snapshot(&agents);
    let report = engine(false, false).sync(&config).unwrap();
    assert!(matches!(
        report.outcomes[0].result,
        Err(crate::Error::WrongTarget { .. })
    ));
    assert_eq!(snapshot(&agents), before);

    let report = engine(false, true).sync(&config).unwrap();
    assert!(matches!(report.outcomes[0].result, Ok(LinkAction::Fix)));
    assert_eq!(fs::read_link(&agents).unwrap(), PathBuf::from("CLAUDE.md"));
}

#[test]
fn test_missing_source_fails_before_links() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("CLAUDE.md");
    let agents = tmp.path().join("AGENTS.md");
    let config = Config::new(&source, [&agents]);

    let err = engine(false, true).sync(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSource);
    assert!(fs::symlink_metadata(&agents).is_err());

    let check = engine(false, false).check(&config);
    assert!(check.source_error.is_some());
    assert!(check.has_problems());
}

#[test]
fn test_symlinked_source_under_force() {
    let (tmp, real) = setup_project("X");
    let source = tmp.path().join("SOURCE.md");
    unix_fs::symlink("CLAUDE.md", &source).unwrap();
    let agents = tmp.path().join("AGENTS.md");
    let config = Config::new(&source, [&agents]);
    let forced = engine(false, true);

    let first = forced.sync(&config).unwrap();
    assert!(matches!(first.outcomes[0].result, Ok(LinkAction::Create)));
    let second = forced.sync(&config).unwrap();
    assert!(matches!(second.outcomes[0].result, Ok(LinkAction::Skip)));
    assert_eq!(fs::read_link(&agents).unwrap(), PathBuf::from("SOURCE.md"));

    fs::remove_file(&real).unwrap();
    let err = forced.sync(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSource);
    assert!(is_symlink(&agents));
}

#[test]
fn test_dangling_link_fixed_without_force() {
    let (tmp, source) = setup_project("X");
    fs::write(tmp.path().join("old.md"), "old").unwrap();
    let agents = tmp.path().join("AGENTS.md");
    unix_fs::symlink("old.md", &agents).unwrap();
    fs::remove_file(tmp.path().join("old.md")).unwrap();
    let config = Config::new(&source, [&agents]);

    let check = engine(false, false).check(&config);
    assert_eq!(check.links[0].status, LinkStatus::Broken);

    let report = engine(false, false).sync(&config).unwrap();
    assert!(matches!(report.outcomes[0].result, Ok(LinkAction::FixBroken)));
    assert_eq!(fs::read_to_string(&agents).unwrap(), "X");
}

#[test]
fn test_failure_does_not_stop_later_links() {
    let (tmp, source) = setup_project("X");
    let blocked = tmp.path().join("BLOCKED.md");
    fs::write(&blocked, "keep").unwrap();
    let agents = tmp.path().join("AGENTS.md");
    let config = Config::new(&source, [&blocked, &agents]);

    let report = engine(false, false).sync(&config).unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.created(), 1);
    assert_eq!(report.outcomes[0].link, blocked);
    assert_eq!(report.outcomes[1].link, agents);
    assert!(is_symlink(&agents));
}

#[test]
fn test_dry_run_mutates_nothing() {
    let (tmp, source) = setup_project("X");
    let missing = tmp.path().join("nested/AGENTS.md");
    let regular = tmp.path().join("GEMINI.md");
    fs::write(&regular, "Y").unwrap();
    fs::write(tmp.path().join("other.md"), "other").unwrap();
    let wrong = tmp.path().join("OPENCODE.md");
    unix_fs::symlink("other.md", &wrong).unwrap();
    let dangling = tmp.path().join("BROKEN.md");
    unix_fs::symlink("gone.md", &dangling).unwrap();

    let all = [&missing, &regular, &wrong, &dangling];
    let before: Vec<_> = all.iter().map(|p| snapshot(p)).collect();
    let config = Config::new(&source, all);

    let report = engine(true, true).sync(&config).unwrap();
    let actions: Vec<_> = report
        .outcomes
        .iter()
        .map(|o| *o.result.as_ref().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec![
            LinkAction::Create,
            LinkAction::Replace,
            LinkAction::Fix,
            LinkAction::FixBroken
        ]
    );

    let after: Vec<_> = all.iter().map(|p| snapshot(p)).collect();
    assert_eq!(before, after);
    assert!(!tmp.path().join("nested").exists());

    let clean = engine(true, false).clean(&config);
    assert_eq!(clean.removed(), 1);
    assert!(is_symlink(&dangling));
}

#[test]
fn test_clean_removes_only_managed_and_broken() {
    let (tmp, source) = setup_project("X");
    let managed = tmp.path().join("AGENTS.md");
    unix_fs::symlink("CLAUDE.md", &managed).unwrap();
    let regular = tmp.path().join("GEMINI.md");
    fs::write(&regular, "Y").unwrap();
    fs::write(tmp.path().join("other.md"), "other").unwrap();
    let wrong = tmp.path().join("OPENCODE.md");
    unix_fs::symlink("other.md", &wrong).unwrap();
    let dangling = tmp.path().join("BROKEN.md");
    unix_fs::symlink("gone.md", &dangling).unwrap();
    let missing = tmp.path().join("MISSING.md");

    let config = Config::new(&source, [&managed, &regular, &wrong, &dangling, &missing]);
    let report = engine(false, true).clean(&config);

    assert_eq!(report.removed(), 2);
    assert_eq!(report.skipped(), 3);
    assert!(matches!(report.outcomes[0].result, Ok(CleanAction::Removed)));
    assert!(matches!(report.outcomes[3].result, Ok(CleanAction::RemovedBroken)));
    assert!(matches!(
        &report.outcomes[2].result,
        Ok(CleanAction::Skipped(CleanSkip::WrongTarget { target }))
            if target == Path::new("other.md")
    ));

    assert!(fs::symlink_metadata(&managed).is_err());
    assert!(fs::symlink_metadata(&dangling).is_err());
    assert_eq!(fs::read_to_string(&regular).unwrap(), "Y");
    assert!(is_symlink(&wrong));
    assert_eq!(fs::read_to_string(&source).unwrap(), "X");
}

#[test]
fn test_source_survives_every_operation() {
    let (tmp, source) = setup_project("X");
    let agents = tmp.path().join("AGENTS.md");
    let config = Config::new(&source, [&agents]);

    let forced = engine(false, true);
    forced.sync(&config).unwrap();
    assert_eq!(forced.clean(&config).removed(), 1);
    forced.sync(&config).unwrap();
    forced.manager().remove_link(&agents, &source).unwrap();
    forced.manager().remove_link(&source, &source).unwrap();

    assert!(!is_symlink(&source));
    assert_eq!(fs::read_to_string(&source).unwrap(), "X");
}
