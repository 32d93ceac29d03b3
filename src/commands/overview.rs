use crate::core::{
    colors::format_record,
    command_init::CommandInit,
    config::YagConfig,
    error::{Result, YagError},
    print_info, print_section_header,
    repo::GitRepo,
    status::{snapshot, StatusRecord},
};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

/// `yag` with no arguments: staged new files and unstaged modifications, then
/// `git status -uno` in full.
pub fn execute_overview(config: &YagConfig) -> Result<()> {
    let context = CommandInit::initialize(config)?;

    let branch = GitRepo::open(&context.root.cwd)
        .and_then(|repo| repo.current_branch())
        .unwrap_or_else(|e| {
            log::warn!("Could not read current branch: {e}");
            "-none-".to_string()
        });
    println!("\n{} {}", "Branch:".white(), branch.blue());

    let records = snapshot(&context.git)?;
    let (new_files, modified) = split_overview(&records);

    if new_files.is_empty() && modified.is_empty() {
        print_info("Nothing newly staged or modified");
    }

    if !new_files.is_empty() {
        print_section_header("💣 Staged new files");
        for record in &new_files {
            println!("   {}", format_record(record));
        }
    }

    if !modified.is_empty() {
        print_section_header("🧨 Unstaged modified files");
        for record in &modified {
            println!("   {}", format_record(record));
        }
    }

    println!("\n💥💥💥💥💥");
    context.git.run(["status", "-uno"])
}

/// Records shown by the overview, in snapshot order: staged new files and modified files.
pub fn split_overview(records: &[StatusRecord]) -> (Vec<&StatusRecord>, Vec<&StatusRecord>) {
    let new_files = records.iter().filter(|r| r.untracked_new_file()).collect();
    let modified = records
        .iter()
        .filter(|r| !r.untracked_new_file() && r.modified())
        .collect();
    (new_files, modified)
}

/// `yag <file>...`: stage the files, or review a directory instead of staging it.
pub fn execute_add_paths(config: &YagConfig, files: Vec<PathBuf>) -> Result<()> {
    let context = CommandInit::initialize(config)?;

    for file in &files {
        let metadata = fs::metadata(file).map_err(|_| YagError::file_not_found(file))?;
        if metadata.is_dir() {
            println!(
                "{} is a directory, please cherry-pick its entries\n",
                format!("{:?}", file.display().to_string()).white()
            );
            for line in directory_listing(file)? {
                println!("{line}");
            }
            println!();
            return context.git.run([Path::new("status"), file.as_path()]);
        }
    }

    context.git.add(&files)
}

/// One colored line per directory entry, sub-directories marked with `D`.
fn directory_listing(dir: &Path) -> Result<Vec<String>> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let note = if entry.file_type()?.is_dir() { "D " } else { "  " };
        let path = dir.join(entry.file_name());
        lines.push(format!(
            "{} {}",
            note.yellow(),
            format!("{:?}", path.display().to_string()).green()
        ));
    }
    Ok(lines)
}
