//! Timestamp tags such as `cmd.dev-202410211530.42.sub` naming the current location.

use crate::core::root::GitRoot;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StampStyle {
    /// `202410211530.42`
    #[default]
    Compact,
    /// `Mon.Oct.21.330PM`
    Literate,
}

impl StampStyle {
    pub fn format_str(self) -> &'static str {
        match self {
            StampStyle::Compact => "%Y%m%d%H%M.%S",
            StampStyle::Literate => "%a.%b.%-d.%-l%M%p",
        }
    }

    pub fn format<Tz>(self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        at.format(self.format_str()).to_string()
    }
}

/// Build the tag for `stamp` taken while standing in `location`.
///
/// The first part names the top-level directory below the root (`root` at the root
/// itself). Deeper locations append the last component, or the last two components
/// from three levels down.
pub fn timestamp_tag(location: &GitRoot, stamp: &str) -> String {
    let components = location.relative_components();
    let depth = components.len();

    let part1 = components.first().map(String::as_str).unwrap_or("root");
    let part2 = match depth {
        0 | 1 => String::new(),
        2 => components[1].clone(),
        _ => components[depth - 2..].join("."),
    };

    let mut tag = format!("{part1}.dev-{stamp}.{part2}");
    if tag.ends_with('.') {
        tag.pop();
    }
    tag
}
