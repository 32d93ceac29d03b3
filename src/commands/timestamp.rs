use crate::core::{
    error::Result,
    root::GitRoot,
    timestamp::{timestamp_tag, StampStyle},
};
use chrono::Local;

/// Timestamp tag for the current location, taken now.
pub fn current_timestamp_tag(root: &GitRoot, style: StampStyle) -> String {
    timestamp_tag(root, &style.format(&Local::now()))
}

/// `yag timestamp` / `yag ts` / `yag timestamp litt`
pub fn execute_timestamp(style: StampStyle) -> Result<()> {
    let root = GitRoot::discover()?;
    println!("{}", current_timestamp_tag(&root, style));
    Ok(())
}
