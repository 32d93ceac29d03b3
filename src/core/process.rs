//! Thin helpers around `std::process::Command` shared by every external collaborator.
//!
//! All of them block until the child exits. None of them retries, and every non-zero
//! exit becomes an error that names the command line.

use crate::core::error::{Result, YagError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Human readable command line, used in error messages and logs.
pub fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn spawn_error(cmd: &Command, source: std::io::Error) -> YagError {
    YagError::tool_not_found(cmd.get_program().to_string_lossy(), source)
}

/// Run with the operator's terminal attached (stdin, stdout and stderr inherited).
pub fn run_inherited(cmd: &mut Command) -> Result<()> {
    let command = describe(cmd);
    log::debug!("Running `{command}`");

    let status = cmd.status().map_err(|e| spawn_error(cmd, e))?;
    if !status.success() {
        return Err(YagError::command_failed(command, status.code()));
    }
    Ok(())
}

/// Capture stdout, leaving stderr on the terminal.
pub fn capture(cmd: &mut Command) -> Result<String> {
    let command = describe(cmd);
    log::debug!("Capturing `{command}`");

    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| spawn_error(cmd, e))?;
    if !output.status.success() {
        return Err(YagError::command_failed(command, output.status.code()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Feed `input` on stdin while stdout and stderr stay on the terminal.
pub fn run_with_input(cmd: &mut Command, input: &str) -> Result<()> {
    let command = describe(cmd);
    log::debug!("Running `{command}` with {} byte(s) on stdin", input.len());

    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(cmd, e))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }
    let status = child.wait()?;
    if !status.success() {
        return Err(YagError::command_failed(command, status.code()));
    }
    Ok(())
}
