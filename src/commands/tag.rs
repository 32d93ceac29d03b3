use crate::core::{
    command_init::CommandInit,
    config::YagConfig,
    error::{Result, YagError},
    print_success,
    repo::{tag_from_summary, GitRepo},
};

/// `yag tag`: tag HEAD with the last word of its title and push the tag.
pub fn execute_tag(config: &YagConfig, remote: Option<String>) -> Result<()> {
    let context = CommandInit::initialize(config)?;
    let remote = remote.unwrap_or_else(|| config.tag_remote.clone());

    let summary = GitRepo::open(&context.root.cwd)?.last_commit_summary()?;
    let tag = tag_from_summary(&summary).ok_or(YagError::EmptyCommitTitle)?;
    log::debug!("Tagging HEAD ({summary:?}) as {tag}");

    context.git.run(["tag", tag])?;
    context.git.run(["push", remote.as_str(), tag])?;
    print_success(&format!("Tagged and pushed {tag} to {remote}"));
    Ok(())
}
