//! Indicator-aware coloring of status lines.
//!
//! # Color Scheme
//! - **Modified / type changed**: yellow
//! - **Added**: green
//! - **Deleted**: red
//! - **Renamed / copied**: blue
//! - **Untracked**: cyan
//! - **Unmerged**: red bold

use crate::core::status::StatusRecord;
use colored::*;

/// Color function for one indicator byte
pub fn get_indicator_color_style(indicator: u8) -> Box<dyn Fn(&str) -> ColoredString> {
    match indicator {
        b'M' | b'T' => Box::new(|text: &str| text.yellow()),
        b'A' => Box::new(|text: &str| text.green()),
        b'D' => Box::new(|text: &str| text.red()),
        b'R' | b'C' => Box::new(|text: &str| text.blue()),
        b'?' => Box::new(|text: &str| text.cyan()),
        b'U' => Box::new(|text: &str| text.red().bold()),
        _ => Box::new(|text: &str| text.normal()),
    }
}

/// The indicator that best describes a record: the unstaged side when it says
/// something, the staged side otherwise.
pub fn dominant_indicator(record: &StatusRecord) -> u8 {
    if record.unstaged != b' ' {
        record.unstaged
    } else {
        record.staged
    }
}

/// `XY path` with the indicator pair and the path colored
pub fn format_record(record: &StatusRecord) -> String {
    let staged = get_indicator_color_style(record.staged)(&(record.staged as char).to_string());
    let unstaged =
        get_indicator_color_style(record.unstaged)(&(record.unstaged as char).to_string());
    let path = get_indicator_color_style(dominant_indicator(record))(&record.path);
    format!("{staged}{unstaged} {path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_indicator() {
        assert_eq!(dominant_indicator(&StatusRecord::new(b'A', b' ', "f")), b'A');
        assert_eq!(dominant_indicator(&StatusRecord::new(b'A', b'M', "f")), b'M');
        assert_eq!(dominant_indicator(&StatusRecord::new(b'?', b'?', "f")), b'?');
    }

    #[test]
    fn test_format_record_keeps_text() {
        colored::control::set_override(false);
        let line = format_record(&StatusRecord::new(b' ', b'M', "src/main.rs"));
        assert_eq!(line, " M src/main.rs");
    }

    #[test]
    fn test_color_style_is_consistent() {
        for indicator in [b'M', b'A', b'D', b'R', b'?', b'U', b' '] {
            let color_fn = get_indicator_color_style(indicator);
            assert_eq!(color_fn("x").to_string(), color_fn("x").to_string());
        }
    }
}
