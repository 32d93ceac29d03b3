//! External fuzzy selector (`sk`, `fzf`, ...) and the meaning of its exit codes.
//!
//! The selector reads the menu on stdin, talks to the operator on the terminal and
//! prints the chosen line on stdout. Its exit code is part of the protocol:
//!
//! | exit | meaning |
//! |------|---------|
//! | 0    | a line was chosen |
//! | 1    | no match, normal termination |
//! | 130  | interrupted (Ctrl-C / Esc), normal termination |
//! | else | selector error |

use crate::core::config::ProgramConfig;
use crate::core::error::{Result, YagError};
use crate::core::process;
use std::io::Write;
use std::process::{Command, Stdio};

pub const EXIT_NO_MATCH: i32 = 1;
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Chosen line, trailing whitespace trimmed
    Chosen(String),
    NoMatch,
    Interrupted,
}

impl Selection {
    /// Interpret a finished selector run. `code` is `None` when a signal killed it.
    pub fn from_exit(program: &str, code: Option<i32>, stdout: &str) -> Result<Self> {
        match code {
            Some(0) => Ok(Selection::Chosen(stdout.trim_end().to_string())),
            Some(EXIT_NO_MATCH) => Ok(Selection::NoMatch),
            Some(EXIT_INTERRUPTED) | None => Ok(Selection::Interrupted),
            Some(other) => Err(YagError::selector_failed(program, Some(other))),
        }
    }
}

pub trait Selector {
    fn select(&self, menu: &str) -> Result<Selection>;
}

/// Selector run as a child process; stderr and the controlling terminal stay with it.
pub struct ExternalSelector {
    config: ProgramConfig,
}

impl ExternalSelector {
    pub fn new(config: ProgramConfig) -> Self {
        Self { config }
    }
}

impl Selector for ExternalSelector {
    fn select(&self, menu: &str) -> Result<Selection> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        log::debug!("Handing {} menu line(s) to `{}`", menu.lines().count(), process::describe(&cmd));

        let mut child = cmd
            .spawn()
            .map_err(|e| YagError::tool_not_found(&self.config.program, e))?;
        if let Some(mut stdin) = child.stdin.take() {
            // A selector that exits before reading everything closes the pipe early
            if let Err(e) = stdin.write_all(menu.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Selection::from_exit(&self.config.program, output.status.code(), &stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_zero_trims_trailing_whitespace() {
        assert_eq!(
            Selection::from_exit("sk", Some(0), "src/main.rs\n").unwrap(),
            Selection::Chosen("src/main.rs".to_string())
        );
        assert_eq!(
            Selection::from_exit("sk", Some(0), "a.go [u] \r\n").unwrap(),
            Selection::Chosen("a.go [u]".to_string())
        );
    }

    #[test]
    fn test_normal_terminations() {
        assert_eq!(
            Selection::from_exit("sk", Some(1), "").unwrap(),
            Selection::NoMatch
        );
        assert_eq!(
            Selection::from_exit("sk", Some(130), "").unwrap(),
            Selection::Interrupted
        );
        assert_eq!(
            Selection::from_exit("sk", None, "").unwrap(),
            Selection::Interrupted
        );
    }

    #[test]
    fn test_other_exit_codes_are_errors() {
        for code in [2, 3, 127, 255] {
            match Selection::from_exit("sk", Some(code), "ignored") {
                Err(YagError::SelectorFailed { program, code: got }) => {
                    assert_eq!(program, "sk");
                    assert_eq!(got, Some(code));
                }
                other => panic!("exit {code} gave {other:?}"),
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_external_selector_reads_menu() {
        let selector = ExternalSelector::new(ProgramConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "grep '^b'".to_string()],
        });
        assert_eq!(
            selector.select("a.go\nb.txt\ndone\n").unwrap(),
            Selection::Chosen("b.txt".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_external_selector_no_match() {
        let selector = ExternalSelector::new(ProgramConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "grep '^zzz'".to_string()],
        });
        assert_eq!(selector.select("a.go\n").unwrap(), Selection::NoMatch);
    }

    #[test]
    fn test_missing_selector_is_tool_not_found() {
        let selector = ExternalSelector::new(ProgramConfig::new("yag-test-no-such-selector"));
        assert!(matches!(
            selector.select("done\n"),
            Err(YagError::ToolNotFound { .. })
        ));
    }
}
