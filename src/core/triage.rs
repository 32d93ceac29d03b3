//! Interactive triage loop ("skim"): snapshot, menu, selector, dispatch, repeat.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! Building ──> AwaitingChoice ──> Dispatching ──> Building ...
//!                    │
//!                    └──> Terminated (done / no match / interrupted)
//! ```
//!
//! Every iteration rebuilds the snapshot from scratch, so the menu always reflects the
//! index after the previous stage or unstage. The loop performs no retries: any error
//! from the status query, the selector or a dispatched action aborts it.
//!
//! All effects go through the [`Vcs`], [`Selector`] and [`Subflows`] traits.

use crate::core::error::{Result, YagError};
use crate::core::git::Vcs;
use crate::core::menu::{ControlVerb, Menu, UNSTAGE_SUFFIX};
use crate::core::selector::{Selection, Selector};
use crate::core::status::snapshot;
use std::fmt;

/// Interactive child flows launched from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subflow {
    TagLastCommit,
    Commit,
    CommitDry,
}

impl Subflow {
    pub fn name(self) -> &'static str {
        match self {
            Subflow::TagLastCommit => ControlVerb::TagLastCommit.as_str(),
            Subflow::Commit => ControlVerb::Commit.as_str(),
            Subflow::CommitDry => ControlVerb::CommitDry.as_str(),
        }
    }
}

/// What the operator's choice asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Stage(String),
    Unstage(String),
    RunSubflow(Subflow),
    ShowHelp,
    Done,
}

impl Action {
    /// Turn a trimmed selector line into an action.
    ///
    /// The unstage suffix is checked first, then the control verbs; anything else is a
    /// path to stage.
    pub fn parse(choice: &str) -> Result<Self> {
        if choice.is_empty() || choice.contains('\n') {
            return Err(YagError::unrecognized_choice(choice));
        }

        if let Some(path) = choice.strip_suffix(UNSTAGE_SUFFIX) {
            if path.is_empty() {
                return Err(YagError::unrecognized_choice(choice));
            }
            return Ok(Action::Unstage(path.to_string()));
        }

        Ok(match ControlVerb::parse(choice) {
            Some(ControlVerb::Done) => Action::Done,
            Some(ControlVerb::Help) => Action::ShowHelp,
            Some(ControlVerb::TagLastCommit) => Action::RunSubflow(Subflow::TagLastCommit),
            Some(ControlVerb::Commit) => Action::RunSubflow(Subflow::Commit),
            Some(ControlVerb::CommitDry) => Action::RunSubflow(Subflow::CommitDry),
            None => Action::Stage(choice.to_string()),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Stage(path) => write!(f, "stage {path}"),
            Action::Unstage(path) => write!(f, "unstage {path}"),
            Action::RunSubflow(subflow) => f.write_str(subflow.name()),
            Action::ShowHelp => f.write_str(ControlVerb::Help.as_str()),
            Action::Done => f.write_str(ControlVerb::Done.as_str()),
        }
    }
}

/// Interactive collaborators that take over the terminal while they run.
pub trait Subflows {
    fn run(&self, subflow: Subflow) -> Result<()>;
    fn show_help(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageOutcome {
    Done,
    NoMatch,
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageState {
    Building,
    AwaitingChoice(Menu),
    Dispatching(Action),
    Terminated(TriageOutcome),
}

pub struct Triage<'a> {
    vcs: &'a dyn Vcs,
    selector: &'a dyn Selector,
    subflows: &'a dyn Subflows,
    include_untracked: bool,
}

impl<'a> Triage<'a> {
    pub fn new(
        vcs: &'a dyn Vcs,
        selector: &'a dyn Selector,
        subflows: &'a dyn Subflows,
        include_untracked: bool,
    ) -> Self {
        Self {
            vcs,
            selector,
            subflows,
            include_untracked,
        }
    }

    /// Drive the state machine until it terminates or fails.
    pub fn run(&self) -> Result<TriageOutcome> {
        let mut state = TriageState::Building;
        loop {
            state = match self.step(state)? {
                TriageState::Terminated(outcome) => {
                    log::debug!("Triage terminated: {outcome:?}");
                    return Ok(outcome);
                }
                next => next,
            };
        }
    }

    /// Perform one transition.
    pub fn step(&self, state: TriageState) -> Result<TriageState> {
        match state {
            TriageState::Building => {
                let records = snapshot(self.vcs)?;
                let menu = Menu::build(&records, self.include_untracked);
                log::debug!(
                    "Menu built: {} to stage, {} to unstage",
                    menu.stage.len(),
                    menu.unstage.len()
                );
                Ok(TriageState::AwaitingChoice(menu))
            }
            TriageState::AwaitingChoice(menu) => match self.selector.select(&menu.render())? {
                Selection::Chosen(choice) => {
                    log::debug!("Selector chose {choice:?}");
                    match Action::parse(&choice)? {
                        Action::Done => Ok(TriageState::Terminated(TriageOutcome::Done)),
                        action => Ok(TriageState::Dispatching(action)),
                    }
                }
                Selection::NoMatch => Ok(TriageState::Terminated(TriageOutcome::NoMatch)),
                Selection::Interrupted => Ok(TriageState::Terminated(TriageOutcome::Interrupted)),
            },
            TriageState::Dispatching(action) => {
                self.dispatch(&action)?;
                Ok(TriageState::Building)
            }
            TriageState::Terminated(outcome) => Ok(TriageState::Terminated(outcome)),
        }
    }

    /// Execute one action. Failures carry the verb or path that failed.
    pub fn dispatch(&self, action: &Action) -> Result<()> {
        log::debug!("Dispatching {action}");
        let result = match action {
            Action::Stage(path) => self.vcs.stage(&[path.as_str()]),
            Action::Unstage(path) => self.vcs.unstage(&[path.as_str()]),
            Action::RunSubflow(subflow) => self.subflows.run(*subflow),
            Action::ShowHelp => self.subflows.show_help(),
            // Terminal verb, handled by the state machine before dispatch
            Action::Done => Ok(()),
        };
        result.map_err(|e| YagError::dispatch_failed(action.to_string(), e))
    }
}
