//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::ShellType;

#[derive(Parser)]
#[command(name = "modelenv")]
#[command(about = "Switch AI model API configurations via shell environment variables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile store path (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Shell startup file path (defaults to the shell's rc file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell type (detected from $SHELL when omitted)
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configured profiles
    #[command(visible_alias = "ls")]
    List,

    /// Add or update a profile interactively
    Add,

    /// Switch to a profile and export its variables
    Use {
        /// Profile name (prompted when omitted)
        name: Option<String>,
    },

    /// Remove a profile
    #[command(visible_alias = "rm")]
    Remove {
        /// Profile name (prompted when omitted)
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the current profile and live environment variables
    Status,

    /// Startup-file backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups
    List,
    /// Restore a backup over the startup file
    Restore {
        /// Backup ID
        id: String,
    },
    /// Clean old backups
    Clean {
        /// Number to keep
        #[arg(long, default_value = "20")]
        keep: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Bash,
    Zsh,
}

impl From<ShellArg> for ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Bash => ShellType::Bash,
            ShellArg::Zsh => ShellType::Zsh,
        }
    }
}
