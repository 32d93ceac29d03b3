//! Core functionality for yag.
//!
//! This module provides the building blocks the commands are made of: the status
//! model, the external collaborators (git, the fuzzy selector, child processes) and
//! the triage state machine that ties them together.

pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod menu;
pub mod output;
pub mod process;
pub mod repo;
pub mod root;
pub mod selector;
pub mod status;
pub mod timestamp;
pub mod triage;

// === Error handling ===
pub use error::{Result, YagError};

// === Configuration ===
// Built once in main and passed to every command
pub use config::{ProgramConfig, YagConfig};

// === Status model ===
// Parsed `git status --short` records and their classifications
pub use status::{parse_status, snapshot, Classification, StatusRecord};

// === External collaborators ===
pub use git::{GitCli, Vcs};
pub use repo::GitRepo;
pub use root::GitRoot;
pub use selector::{ExternalSelector, Selection, Selector};

// === Triage ===
pub use menu::{ControlVerb, Menu, UNSTAGE_SUFFIX};
pub use triage::{Action, Subflow, Subflows, Triage, TriageOutcome, TriageState};

// === Command initialization ===
pub use command_init::{CommandContext, CommandInit};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
