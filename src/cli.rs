//! CLI argument parsing for the manifest commands.
//!
//! The CLI stays thin: it resolves settings and paths, then hands plain lines
//! to the ordering functions.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "reorder-editable",
    version,
    about = "Manage your editable packages - your easy-install.pth file",
    after_help = "Examples:\n  reorder-editable cat\n  reorder-editable locate\n  reorder-editable check ./path/to/repo /another/path/to/repo\n  reorder-editable reorder ./path/to/repo /another/path/to/repo",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logs on stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print easy-install.pth contents
    Cat(CatArgs),
    /// Print easy-install.pth file location
    Locate(LocateArgs),
    /// Fail unless the directories appear in easy-install.pth in the given order
    Check(OrderArgs),
    /// Reorder easy-install.pth so the directories appear in the given order
    #[command(
        after_help = "Reordered directories are always placed at the end of easy-install.pth,\nso include every entry whose order you care about."
    )]
    Reorder(OrderArgs),
}

/// Options shared by every command that reads the manifest.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Manually provide path to easy-install.pth
    #[arg(short = 'e', long = "easy-install-location", value_name = "PATH")]
    pub easy_install_location: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Parser, Debug)]
pub struct LocateArgs {
    #[command(flatten)]
    pub location: LocationArgs,
}

// Shared by `check` and `reorder`: the first DIRECTORY must appear above the second, and so on.
#[derive(Parser, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Emit a machine-readable JSON report
    #[arg(long)]
    pub json: bool,

    /// Directories in the order they should appear
    #[arg(value_name = "DIRECTORY", required = true, num_args = 1..)]
    pub directories: Vec<String>,
}
