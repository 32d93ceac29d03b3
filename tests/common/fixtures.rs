//! Predefined repository scenarios
//!
//! Provides functions for creating repositories with specific file states to test
//! the triage loop and its sibling commands consistently.

#![allow(dead_code)]

use super::repository::*;
use yag::core::error::Result;

/// Scenario: one committed file modified, one untracked file
///
/// `git status --short` reads ` M a.go` then `?? b.txt`.
pub fn create_triage_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["a.go"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["a.go"])?;
    create_test_files(&repo.path, &["b.txt"])?;

    Ok(repo)
}

/// Scenario: files committed below nested directories, plus untracked ones
pub fn create_nested_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["cmd/main.go", "cmd/sub/deep/lib.go"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_test_files(&repo.path, &["cmd/zeta.go", "docs/notes.md", "alpha.go"])?;

    Ok(repo)
}
