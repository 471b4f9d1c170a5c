//! Backup command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::BackupCommands;
use crate::cli::Context;

pub fn execute(ctx: &Context, cmd: &BackupCommands) -> Result<()> {
    let manager = ctx.backup_manager();

    match cmd {
        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("{}", "No backups yet.".dimmed());
                return Ok(());
            }
            for backup in &backups {
                println!(
                    "  {} {}",
                    backup.id.cyan(),
                    format!("({} bytes)", backup.size).dimmed()
                );
            }
        }
        BackupCommands::Restore { id } => {
            manager.restore_backup(id, &ctx.rc_file)?;
            ctx.print_success(&format!(
                "Restored backup '{}' to {}",
                id,
                ctx.rc_file.display()
            ));
            ctx.print_reload_hint();
        }
        BackupCommands::Clean { keep } => {
            let removed = manager.prune(*keep)?;
            ctx.print_success(&format!("Removed {} old backup(s)", removed));
        }
    }
    Ok(())
}
