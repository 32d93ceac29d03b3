//! Candidate menu handed to the selector on every triage iteration.
//!
//! The menu is a pure function of a status snapshot: stage candidates first (snapshot
//! order), then staged paths offered for unstaging, then the fixed control verbs, so
//! the operator sees data before commands.
//!
//! Unstage entries are encoded as `"<path> [u]"`. A real path ending in that literal
//! suffix cannot be told apart from an unstage entry; [`UNSTAGE_SUFFIX`] is the only
//! place the encoding lives so a structural encoding can replace it in one spot.

use crate::core::status::StatusRecord;
use std::fmt;

pub const UNSTAGE_SUFFIX: &str = " [u]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlVerb {
    Help,
    Done,
    TagLastCommit,
    Commit,
    CommitDry,
}

impl ControlVerb {
    /// Menu order of the trailing verbs
    pub const ALL: [ControlVerb; 5] = [
        ControlVerb::Help,
        ControlVerb::Done,
        ControlVerb::TagLastCommit,
        ControlVerb::Commit,
        ControlVerb::CommitDry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlVerb::Help => "help",
            ControlVerb::Done => "done",
            ControlVerb::TagLastCommit => "tag-last-commit",
            ControlVerb::Commit => "commit",
            ControlVerb::CommitDry => "commit-dry",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ControlVerb::Help => "show this help",
            ControlVerb::Done => "leave the triage loop",
            ControlVerb::TagLastCommit => "tag HEAD with its trailing title word and push the tag",
            ControlVerb::Commit => "draft a commit message, edit it, commit",
            ControlVerb::CommitDry => "print the tag and copy the staged diff to the clipboard",
        }
    }

    pub fn parse(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.as_str() == line)
    }
}

impl fmt::Display for ControlVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    /// Paths whose choice stages them
    pub stage: Vec<String>,
    /// Staged paths whose choice unstages them
    pub unstage: Vec<String>,
}

impl Menu {
    /// Modified paths are always offered; untracked ones only with `include_untracked`.
    /// Renamed and copied records are offered under their destination path.
    pub fn build(records: &[StatusRecord], include_untracked: bool) -> Self {
        let stage = records
            .iter()
            .filter(|r| r.modified() || (include_untracked && r.untracked()))
            .map(|r| r.target_path().to_string())
            .collect();
        let unstage = records
            .iter()
            .filter(|r| r.staged_any())
            .map(|r| r.target_path().to_string())
            .collect();
        Self { stage, unstage }
    }

    pub fn lines(&self) -> Vec<String> {
        self.stage
            .iter()
            .cloned()
            .chain(self.unstage.iter().map(|path| format!("{path}{UNSTAGE_SUFFIX}")))
            .chain(ControlVerb::ALL.iter().map(|verb| verb.as_str().to_string()))
            .collect()
    }

    /// Newline-terminated selector input
    pub fn render(&self) -> String {
        let mut text = String::new();
        for line in self.lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}
