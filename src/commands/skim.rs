use crate::core::{
    command_init::CommandInit,
    config::YagConfig,
    error::Result,
    menu::{ControlVerb, UNSTAGE_SUFFIX},
    print_info, print_success, process,
    selector::ExternalSelector,
    triage::{Subflow, Subflows, Triage, TriageOutcome},
};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

/// Arguments passed to the yag executable to run a sub-flow.
pub fn subflow_args(subflow: Subflow) -> &'static [&'static str] {
    match subflow {
        Subflow::TagLastCommit => &["tag"],
        Subflow::Commit => &["commit"],
        Subflow::CommitDry => &["commit", "--dry"],
    }
}

/// Sub-flows run as child `yag` processes that own the terminal until they exit.
pub struct ChildSubflows {
    exe: PathBuf,
}

impl ChildSubflows {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }
}

impl Subflows for ChildSubflows {
    fn run(&self, subflow: Subflow) -> Result<()> {
        let mut cmd = Command::new(&self.exe);
        cmd.args(subflow_args(subflow));
        process::run_inherited(&mut cmd)
    }

    fn show_help(&self) -> Result<()> {
        println!("\n{}", "Pick a line in the selector:".blue());
        println!("   {}  stage that path", "<path>".white());
        println!(
            "   {}  unstage that path",
            format!("<path>{UNSTAGE_SUFFIX}").white()
        );
        for verb in ControlVerb::ALL {
            println!(
                "   {:<16} {}",
                verb.as_str().white(),
                verb.description().bright_black()
            );
        }
        print!("\n{} ", "Press Enter to go back to the menu".blue());
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(())
    }
}

/// `yag sk`: the interactive triage loop.
pub fn execute_skim(config: &YagConfig, list_untracked: bool) -> Result<()> {
    let context = CommandInit::initialize(config)?;
    let selector = ExternalSelector::new(config.selector.clone());
    let subflows = ChildSubflows::new(config.self_exe()?);
    let include_untracked = list_untracked || config.list_untracked;

    let triage = Triage::new(&context.git, &selector, &subflows, include_untracked);
    match triage.run()? {
        TriageOutcome::Done => print_success("Triage done"),
        TriageOutcome::NoMatch => print_info("exit no match"),
        TriageOutcome::Interrupted => print_info("exit interrupted"),
    }
    Ok(())
}
