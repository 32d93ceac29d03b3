//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories in various states, plus a
//! `yag` command builder isolated from the operator's own configuration.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use yag::core::error::Result;

/// Test repository setup result. The TempDirs must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    /// Scratch space outside the work tree (selector scripts, captured menus)
    pub tools: TempDir,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `yag` running in the repository root with an empty configuration.
    pub fn yag(&self) -> anyhow::Result<Command> {
        self.yag_in(&self.path)
    }

    /// `yag` running in `dir` with an empty configuration.
    pub fn yag_in(&self, dir: &Path) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("yag")?;
        cmd.current_dir(dir)
            .env("XDG_CONFIG_HOME", self.tools.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("YAG_SELECTOR")
            .env_remove("YAG_SRCDIR")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

/// Runs git in `repo_path`, returning its output whatever the exit status
pub fn git(repo_path: &Path, args: &[&str]) -> Result<std::process::Output> {
    Ok(Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?)
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository on branch
/// `trunk` and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let tools = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "--quiet", "--initial-branch=trunk"])?;

    // Set git config to avoid prompts during tests
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        tools,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file (and its parent directories) with specified content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the git index ("." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "--quiet", "-m", message])?;
    Ok(())
}

/// `git status --short` output of the repository
pub fn git_status_short(repo_path: &Path) -> Result<String> {
    let output = git(repo_path, &["-c", "core.quotePath=false", "status", "--short"])?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Tags present in the repository, one per line
pub fn git_tags(repo_path: &Path) -> Result<String> {
    let output = git(repo_path, &["tag", "--list"])?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Creates multiple test files with sequential content
pub fn create_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("content{}\nline 2\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Modifies multiple test files with new content
pub fn modify_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("modified content{}\nline 2\nnew line\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Writes an executable `sh` script into the repository's tool directory.
#[cfg(unix)]
pub fn write_script(repo: &TestRepo, name: &str, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = repo.tools.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

/// Writes `config.json` where the isolated `yag` command looks for it.
pub fn write_config(repo: &TestRepo, json: &str) -> Result<()> {
    let dir = repo.tools.path().join("config").join("yag");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.json"), json)?;
    Ok(())
}

/// Full message of the HEAD commit
pub fn git_head_message(repo_path: &Path) -> Result<String> {
    let output = git(repo_path, &["log", "-1", "--format=%B"])?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Creates a bare repository in the tool directory and registers it as `remote`.
pub fn add_bare_remote(repo: &TestRepo, remote: &str) -> Result<PathBuf> {
    let bare = repo.tools.path().join(format!("{remote}.git"));
    git(repo.tools.path(), &["init", "--quiet", "--bare", &format!("{remote}.git")])?;
    git(&repo.path, &["remote", "add", remote, &bare.to_string_lossy()])?;
    Ok(bare)
}
