//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating yag command output, error messages and
//! expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the branch line of the overview
pub fn has_branch_info() -> impl Predicate<str> {
    predicates::str::contains("Branch:")
}

/// Creates a predicate that checks for the error prefix printed by `yag`
pub fn has_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}

/// Creates a predicate matching a `git status --short` line
pub fn has_status_line(indicators: &str, path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{indicators} {path}"))
}
