//! yag - yet another git: a personal git workflow accelerator.
//!
//! The centerpiece is the triage loop behind `yag sk`: it classifies the working tree
//! from `git status --short`, hands a candidate menu to an external fuzzy selector and
//! stages, unstages or launches a sub-flow for whatever the operator picks, until they
//! choose `done` or cancel the selector.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Status records and classification predicates
//! - The triage state machine and its collaborator traits
//! - Configuration and error types

pub mod commands;
pub mod core;

pub use core::{
    // Triage
    Action,
    Classification,
    ControlVerb,
    // External collaborators
    ExternalSelector,
    GitCli,
    GitRoot,
    Menu,
    Result,
    Selection,
    Selector,
    // Status model
    StatusRecord,
    Subflow,
    Subflows,
    Triage,
    TriageOutcome,
    TriageState,
    Vcs,
    // Configuration and errors
    YagConfig,
    YagError,
};
