//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`YagError`] which covers every failure the tool can hit, from
//! the status query and the fuzzy selector down to the sub-flows spawned by the triage
//! loop. It uses `thiserror` for ergonomic error definitions and includes constructors
//! for the variants that carry context.
//!
//! # Public API
//! - [`YagError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, YagError>`
//!
//! # Error Categories
//! - **Snapshot**: status query failures and malformed status lines
//! - **Triage**: selector failures, unrecognized choices, failed dispatches
//! - **Processes**: child processes that could not start or exited non-zero
//! - **Configuration**: unreadable config files, missing source directory

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for yag
#[derive(Error, Debug)]
pub enum YagError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no commits yet")]
    NoCommitsYet,

    #[error("HEAD commit has an empty title, nothing to tag")]
    EmptyCommitTitle,

    // Snapshot errors
    #[error("`{command}` failed{}: {stderr}", exit_suffix(.code))]
    ExternalTool {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Malformed status line: {line:?}")]
    MalformedStatusLine { line: String },

    // Triage errors
    #[error("Selector `{program}` failed{}", exit_suffix(.code))]
    SelectorFailed { program: String, code: Option<i32> },

    #[error("Unrecognized choice: {choice:?}")]
    UnrecognizedChoice { choice: String },

    #[error("{target}: {source}")]
    DispatchFailed {
        target: String,
        source: Box<YagError>,
    },

    // Process errors
    #[error("`{command}` failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Could not run `{program}`: {source}")]
    ToolNotFound {
        program: String,
        source: std::io::Error,
    },

    // File errors
    #[error("File does not exist: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No source directory configured. Set YAG_SRCDIR or src_dir in the config file")]
    SourceDirNotConfigured,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using YagError
pub type Result<T> = std::result::Result<T, YagError>;

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit {code})"),
        None => " (terminated by signal)".to_string(),
    }
}

impl YagError {
    /// Create an external tool error for a failed status query
    pub fn external_tool(
        command: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ExternalTool {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Create a malformed status line error
    pub fn malformed_status_line(line: impl Into<String>) -> Self {
        Self::MalformedStatusLine { line: line.into() }
    }

    /// Create a selector failure error
    pub fn selector_failed(program: impl Into<String>, code: Option<i32>) -> Self {
        Self::SelectorFailed {
            program: program.into(),
            code,
        }
    }

    /// Create an unrecognized choice error
    pub fn unrecognized_choice(choice: impl Into<String>) -> Self {
        Self::UnrecognizedChoice {
            choice: choice.into(),
        }
    }

    /// Wrap the failure of a dispatched action with the verb or path that failed
    pub fn dispatch_failed(target: impl Into<String>, source: YagError) -> Self {
        Self::DispatchFailed {
            target: target.into(),
            source: Box::new(source),
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a tool not found error
    pub fn tool_not_found(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::ToolNotFound {
            program: program.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Process exit code to report for this error.
    ///
    /// Failures of a child process propagate the child's own non-zero code so that
    /// wrappers around `yag` can tell them apart; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SelectorFailed { code, .. }
            | Self::CommandFailed { code, .. }
            | Self::ExternalTool { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
            Self::DispatchFailed { source, .. } => source.exit_code(),
            _ => 1,
        }
    }
}
