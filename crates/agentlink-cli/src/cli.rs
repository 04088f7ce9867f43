use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keep your AI instruction files in sync with zero magic, just symlinks
///
/// Different tools want different files at project root: AGENTS.md, CLAUDE.md,
/// GEMINI.md, etc. Agentlink maintains one source file and creates symlinks to it.
#[derive(Parser, Debug)]
#[command(name = "agentlink")]
#[command(about, long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Show what would be done without making changes
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Force replacement of conflicting files
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", env = "AGENTLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .agentlink.yaml in the current directory
    Init,

    /// Create or fix symlinks based on configuration
    Sync,

    /// Check status of symlinks
    Check,

    /// Remove managed symlinks (never the source or regular files)
    Clean,

    /// Check environment and permissions
    Doctor,
}
