use crate::core::{command_init::CommandInit, config::YagConfig, error::Result};

/// `yag uno`: status of tracked files below the working directory.
pub fn execute_uno(config: &YagConfig) -> Result<()> {
    let context = CommandInit::initialize(config)?;
    context.git.run(["status", "-uno", "."])
}
