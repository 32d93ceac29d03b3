//! Git command-line collaborator.
//!
//! The triage loop only ever talks to git through the [`Vcs`] trait, which keeps the
//! state machine testable with in-memory fakes. [`GitCli`] is the real implementation
//! and shells out to the `git` binary in the current (or a given) directory.
//!
//! # Public API
//! - [`Vcs`]: Status query, stage and unstage
//! - [`GitCli`]: `git` subprocess implementation, plus the extra calls other commands need

use crate::core::error::{Result, YagError};
use crate::core::process;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Arguments of the status query, relative to the working directory like `git add`.
///
/// The `-c` overrides and flags pin the `XY path` line format whatever the user's
/// git config says about colors, branch headers, path quoting or untracked files.
const STATUS_ARGS: [&str; 10] = [
    "-c",
    "core.quotePath=false",
    "-c",
    "color.status=false",
    "-c",
    "status.relativePaths=true",
    "status",
    "--short",
    "--no-branch",
    "--untracked-files=normal",
];

pub trait Vcs {
    /// Short-format status text, one `XY path` line per path
    fn status_query(&self) -> Result<String>;
    fn stage(&self, paths: &[&str]) -> Result<()>;
    fn unstage(&self, paths: &[&str]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            workdir: None,
        }
    }

    /// Run every command from `workdir` instead of the process working directory.
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
            ..Self::new()
        }
    }

    pub fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run a git command attached to the terminal.
    pub fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        process::run_inherited(&mut self.command(args))
    }

    pub fn add<P: AsRef<Path>>(&self, paths: &[P]) -> Result<()> {
        let mut cmd = self.command(["add", "--"]);
        for path in paths {
            cmd.arg(path.as_ref());
        }
        process::run_inherited(&mut cmd)
    }

    pub fn restore_staged<P: AsRef<Path>>(&self, paths: &[P]) -> Result<()> {
        let mut cmd = self.command(["restore", "--staged", "--"]);
        for path in paths {
            cmd.arg(path.as_ref());
        }
        process::run_inherited(&mut cmd)
    }

    pub fn diff_cached(&self) -> Result<String> {
        process::capture(&mut self.command(["diff", "--cached"]))
    }

    /// `git commit -F -` with the message fed on stdin.
    pub fn commit_with_message(&self, message: &str) -> Result<()> {
        process::run_with_input(&mut self.command(["commit", "-F", "-"]), message)
    }
}

impl Vcs for GitCli {
    fn status_query(&self) -> Result<String> {
        let mut cmd = self.command(STATUS_ARGS);
        let command = process::describe(&cmd);
        log::debug!("Querying status with `{command}`");

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| YagError::tool_not_found(&self.program, e))?;
        if !output.status.success() {
            return Err(YagError::external_tool(
                command,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn stage(&self, paths: &[&str]) -> Result<()> {
        self.add(paths)
    }

    fn unstage(&self, paths: &[&str]) -> Result<()> {
        self.restore_staged(paths)
    }
}
