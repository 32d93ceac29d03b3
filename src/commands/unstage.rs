use crate::core::{command_init::CommandInit, config::YagConfig, error::Result};
use std::path::PathBuf;

/// `yag unstage <file>...`: `git restore --staged <file>...`
pub fn execute_unstage(config: &YagConfig, files: Vec<PathBuf>) -> Result<()> {
    let context = CommandInit::initialize(config)?;
    context.git.restore_staged(&files)
}
