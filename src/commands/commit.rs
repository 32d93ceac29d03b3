use super::timestamp::current_timestamp_tag;
use crate::core::{
    command_init::{CommandContext, CommandInit},
    config::YagConfig,
    error::{Result, YagError},
    print_info, print_success, process,
    status::snapshot,
    timestamp::StampStyle,
};
use colored::*;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Scratch file holding the message being edited, at the repository root.
pub const COMMIT_STASH: &str = ".commit-stash";

/// `yag commit [--dry]`
pub fn execute_commit(config: &YagConfig, dry: bool) -> Result<()> {
    let context = CommandInit::initialize(config)?;

    let records = snapshot(&context.git)?;
    if !records.iter().any(|r| r.staged_any()) {
        print_info("🤔 nothing to commit");
        return Ok(());
    }

    let tag = current_timestamp_tag(&context.root, StampStyle::Compact);
    if dry {
        copy_staged_diff(&context, &tag)
    } else {
        edit_and_commit(&context, &tag)
    }
}

fn copy_staged_diff(context: &CommandContext<'_>, tag: &str) -> Result<()> {
    println!("{} {}", "tag:".white(), tag.blue());
    let diff = context.git.diff_cached()?;
    print!("{diff}");

    let clipboard = &context.config.clipboard;
    let mut cmd = Command::new(&clipboard.program);
    cmd.args(&clipboard.args);
    process::run_with_input(&mut cmd, &diff)?;
    print_success("📋 pasted into the os clipboard");
    Ok(())
}

fn edit_and_commit(context: &CommandContext<'_>, tag: &str) -> Result<()> {
    let draft = process::capture(&mut shell_words_command(&context.config.commit_drafter)?)?;
    print!("{draft}");

    let stash = context.root.root.join(COMMIT_STASH);
    fs::write(&stash, compose_commit_message(tag, &draft))?;
    log::debug!("Wrote draft to {}", stash.display());

    // The scratch file never outlives the command; its text is already on screen
    let result = edit_stash(context, &stash)
        .and_then(|message| context.git.commit_with_message(&message));
    remove_stash(&stash);
    result
}

/// Open the editor on the scratch file and echo what came back.
fn edit_stash(context: &CommandContext<'_>, stash: &Path) -> Result<String> {
    let mut editor = shell_words_command(&context.config.editor)?;
    editor.arg(stash);
    process::run_inherited(&mut editor)?;

    let message = fs::read_to_string(stash)?;
    println!("\n\n{}\n", "[EDIT]".yellow());
    println!("{message}");
    Ok(message)
}

/// Tag line, blank line, then the drafted body.
pub fn compose_commit_message(tag: &str, draft: &str) -> String {
    format!("{tag}\n\n{draft}")
}

/// Split a configured command line such as `code --wait` on whitespace.
fn shell_words_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| YagError::tool_not_found(line, std::io::ErrorKind::NotFound.into()))?;
    let mut cmd = Command::new(program);
    cmd.args(words);
    Ok(cmd)
}

fn remove_stash(stash: &Path) {
    if let Err(e) = fs::remove_file(stash) {
        log::warn!("Could not remove {}: {e}", stash.display());
    }
}
