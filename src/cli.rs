use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Depsweep - a dependency-cache cleanup utility
#[derive(Parser, Debug)]
#[command(name = "depsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List dependency-cache directories under a root
    Scan(ScanArgs),

    /// Delete dependency-cache directories after confirmation
    Clean(CleanArgs),

    /// Launch interactive TUI
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Folder basenames to match (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub target: Vec<String>,

    /// Maximum recursion depth (unlimited if omitted)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Folder basenames to match (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub target: Vec<String>,

    /// Maximum recursion depth (unlimited if omitted)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Starting directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Folder basenames to match (can be specified multiple times)
    #[arg(short, long, value_name = "NAME")]
    pub target: Vec<String>,
}
