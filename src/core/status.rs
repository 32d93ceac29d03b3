//! Short-format status records and the classification vocabulary built on them.
//!
//! A [`StatusRecord`] is one line of `git status --short`: a staged indicator, an
//! unstaged indicator and the path as git printed it. Records are rebuilt from scratch
//! on every [`snapshot`] and never mutated afterwards.
//!
//! # Public API
//! - [`StatusRecord`]: One path with its indicator pair
//! - [`Classification`]: Derived, overlapping views of a record
//! - [`parse_status`]: Parse a whole status report
//! - [`snapshot`]: Run the status query through a [`Vcs`] and parse it
//!
//! # Classification rules
//! - **UntrackedNew**: staged `A`, unstaged ` ` (newly added, no further edits)
//! - **Modified**: unstaged `M`, whatever the staged side says
//! - **Untracked**: `??`
//! - **StagedAny**: staged side is anything but ` `, `?` or `!`

use crate::core::error::{Result, YagError};
use crate::core::git::Vcs;
use std::fmt;

/// Every indicator byte `git status --short` can emit.
pub const STATUS_ALPHABET: [u8; 10] = [b' ', b'M', b'T', b'A', b'D', b'R', b'C', b'U', b'?', b'!'];

/// Two indicator bytes plus the separating space.
const PREFIX_LEN: usize = 3;

/// Separator between the source and destination of a rename or copy.
const RENAME_ARROW: &str = " -> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub staged: u8,
    pub unstaged: u8,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    UntrackedNew,
    Modified,
    Untracked,
    StagedAny,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::UntrackedNew,
        Classification::Modified,
        Classification::Untracked,
        Classification::StagedAny,
    ];

    pub fn holds_for(self, record: &StatusRecord) -> bool {
        match self {
            Classification::UntrackedNew => record.untracked_new_file(),
            Classification::Modified => record.modified(),
            Classification::Untracked => record.untracked(),
            Classification::StagedAny => record.staged_any(),
        }
    }
}

impl StatusRecord {
    pub fn new(staged: u8, unstaged: u8, path: impl Into<String>) -> Self {
        Self {
            staged,
            unstaged,
            path: path.into(),
        }
    }

    /// Parse one `XY path` line. The path is kept verbatim after the three byte prefix.
    pub fn parse_line(line: &str) -> Result<Self> {
        let bytes = line.as_bytes();
        if bytes.len() <= PREFIX_LEN || bytes[2] != b' ' {
            return Err(YagError::malformed_status_line(line));
        }

        let (staged, unstaged) = (bytes[0], bytes[1]);
        if !STATUS_ALPHABET.contains(&staged) || !STATUS_ALPHABET.contains(&unstaged) {
            return Err(YagError::malformed_status_line(line));
        }

        // Both indicators are ASCII, so byte 3 is a char boundary.
        Ok(Self::new(staged, unstaged, &line[PREFIX_LEN..]))
    }

    /// Newly added to the index with no further working tree edits
    pub fn untracked_new_file(&self) -> bool {
        self.staged == b'A' && self.unstaged == b' '
    }

    /// Modified in the working tree
    pub fn modified(&self) -> bool {
        self.unstaged == b'M'
    }

    pub fn untracked(&self) -> bool {
        self.staged == b'?' && self.unstaged == b'?'
    }

    /// Something about this path is recorded in the index
    pub fn staged_any(&self) -> bool {
        !matches!(self.staged, b' ' | b'?' | b'!')
    }

    pub fn classifications(&self) -> Vec<Classification> {
        Classification::ALL
            .into_iter()
            .filter(|c| c.holds_for(self))
            .collect()
    }

    /// Path a pathspec must name to act on this record.
    ///
    /// Renames and copies print as `old -> new`; only `new` exists in the index and
    /// the working tree. Every other record is addressed by its verbatim path.
    pub fn target_path(&self) -> &str {
        let renamed = [self.staged, self.unstaged]
            .iter()
            .any(|&indicator| indicator == b'R' || indicator == b'C');
        if renamed {
            if let Some((_, new)) = self.path.split_once(RENAME_ARROW) {
                return new;
            }
        }
        &self.path
    }

    /// The indicator pair as git printed it, e.g. `" M"` or `"??"`.
    pub fn indicators(&self) -> String {
        format!("{}{}", self.staged as char, self.unstaged as char)
    }
}

impl fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.indicators(), self.path)
    }
}

/// Parse a full short-format status report, preserving line order.
pub fn parse_status(output: &str) -> Result<Vec<StatusRecord>> {
    output.lines().map(StatusRecord::parse_line).collect()
}

/// Run the status query once and parse its output. Never retries.
pub fn snapshot(vcs: &dyn Vcs) -> Result<Vec<StatusRecord>> {
    let output = vcs.status_query()?;
    let records = parse_status(&output)?;
    log::debug!("Status snapshot: {} record(s)", records.len());
    Ok(records)
}
