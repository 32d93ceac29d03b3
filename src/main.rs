use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use yag::commands::*;
use yag::core::{config::YagConfig, error::Result, print_error, timestamp::StampStyle};

#[derive(Parser)]
#[command(name = "yag")]
#[command(about = "Yet another git: stage, unstage and commit from a fuzzy selector")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Files to stage; without files and without a command, show an overview
    files: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive triage loop: stage, unstage, tag and commit from a fuzzy selector
    Sk {
        /// Offer untracked files too
        #[arg(long)]
        list_untracked: bool,
    },
    /// Unstage files (git restore --staged)
    Unstage {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List untracked files relative to the repository root
    U,
    /// Status of tracked files below the current directory
    Uno,
    /// Show the repository root and the current directory
    Root,
    /// Print a timestamp tag for the current location
    #[command(alias = "ts")]
    Timestamp {
        #[command(subcommand)]
        style: Option<TimestampStyle>,
    },
    /// Tag HEAD with the last word of its title and push the tag
    Tag {
        /// Remote to push the tag to
        #[arg(long)]
        remote: Option<String>,
    },
    /// Draft, edit and commit the staged changes
    Commit {
        /// Print the tag and copy the staged diff to the clipboard instead
        #[arg(long)]
        dry: bool,
    },
    /// Rebuild and install yag from its source checkout
    Install,
    /// List the paths a status classification selects
    Test {
        #[command(subcommand)]
        list: TestList,
    },
}

#[derive(Subcommand)]
enum TestList {
    /// Modified paths with something staged
    #[command(name = "list_changed_staged")]
    ChangedStaged,
    /// Newly added paths with no further edits
    #[command(name = "list_untracked_staged")]
    UntrackedStaged,
    /// Modified paths with nothing staged
    #[command(name = "list_changed_unstaged")]
    ChangedUnstaged,
    /// Untracked paths
    #[command(name = "list_untracked_unstaged")]
    UntrackedUnstaged,
}

impl From<TestList> for ClassList {
    fn from(list: TestList) -> Self {
        match list {
            TestList::ChangedStaged => ClassList::ChangedStaged,
            TestList::UntrackedStaged => ClassList::UntrackedStaged,
            TestList::ChangedUnstaged => ClassList::ChangedUnstaged,
            TestList::UntrackedUnstaged => ClassList::UntrackedUnstaged,
        }
    }
}

#[derive(Subcommand)]
enum TimestampStyle {
    /// Literate stamp such as Mon.Oct.21.330PM
    Litt,
}

fn run(cli: Cli, config: &YagConfig) -> Result<()> {
    match cli.command {
        None if cli.files.is_empty() => execute_overview(config),
        None => execute_add_paths(config, cli.files),
        Some(Commands::Sk { list_untracked }) => execute_skim(config, list_untracked),
        Some(Commands::Unstage { files }) => execute_unstage(config, files),
        Some(Commands::U) => execute_untracked(config),
        Some(Commands::Uno) => execute_uno(config),
        Some(Commands::Root) => execute_git_root(),
        Some(Commands::Timestamp { style }) => execute_timestamp(match style {
            Some(TimestampStyle::Litt) => StampStyle::Literate,
            None => StampStyle::Compact,
        }),
        Some(Commands::Tag { remote }) => execute_tag(config, remote),
        Some(Commands::Commit { dry }) => execute_commit(config, dry),
        Some(Commands::Install) => execute_install(config),
        Some(Commands::Test { list }) => execute_class_list(config, list.into()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = YagConfig::load().and_then(|config| run(cli, &config));
    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
