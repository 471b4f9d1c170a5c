//! Command execution context

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::env::EnvWriter;
use crate::model::ShellType;
use crate::store::ConfigStore;

/// Common context for command execution
pub struct Context {
    pub store: ConfigStore,
    pub shell_type: ShellType,
    pub rc_file: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        let store = match &cli.config {
            Some(path) => ConfigStore::new(path.clone()),
            None => ConfigStore::open_default(),
        };
        let shell_type = ShellType::resolve(cli.shell.map(Into::into));
        let rc_file = cli
            .file
            .clone()
            .unwrap_or_else(|| shell_type.rc_path());

        Self {
            store,
            shell_type,
            rc_file,
        }
    }

    pub fn writer(&self) -> EnvWriter {
        EnvWriter::new(self.shell_type, self.rc_file.clone())
    }

    /// Backups live next to the profile store, so a relocated store
    /// keeps its backups with it.
    pub fn backup_manager(&self) -> BackupManager {
        let root = self
            .store
            .path()
            .parent()
            .unwrap_or_else(|| Path::new("."));
        BackupManager::new(root, self.shell_type)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print reload hint after modifying the startup file
    pub fn print_reload_hint(&self) {
        println!();
        println!("{}", "■ Next step:".yellow());
        println!(
            "  {}",
            format!(
                "Restart your terminal or run: source {}",
                self.rc_file.display()
            )
            .dimmed()
        );
    }
}
