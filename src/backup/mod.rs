//! Startup-file backup management
//!
//! A copy of the startup file is taken before every rewrite, stored
//! next to the profile store and pruned to a fixed count.

use anyhow::Result;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use crate::model::ShellType;

/// Backups kept per shell before the oldest are pruned.
pub const DEFAULT_KEEP: usize = 20;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub size: u64,
}

pub struct BackupManager {
    backup_dir: PathBuf,
    keep: usize,
}

impl BackupManager {
    /// Backups live under `<root>/backups/<shell>/`, where `root` is
    /// the directory holding the profile store.
    pub fn new(root: impl Into<PathBuf>, shell: ShellType) -> Self {
        BackupManager {
            backup_dir: root.into().join("backups").join(shell.name()),
            keep: DEFAULT_KEEP,
        }
    }

    /// Create a timestamped backup of the specified file.
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.backup_dir)?;

        let now = OffsetDateTime::now_utc();
        let timestamp = format!(
            "{:04}-{:02}-{:02}_{:02}{:02}{:02}",
            now.year(),
            now.month() as u8,
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        );

        let filename = source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "rcfile".to_string());

        let backup_path = self.backup_dir.join(format!("{}_{}.bak", timestamp, filename));
        std::fs::copy(source_file, &backup_path)?;

        self.prune(self.keep)?;

        Ok(backup_path)
    }

    /// List all backups, newest first. The timestamp prefix makes the
    /// lexicographic order the chronological one.
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == "bak").unwrap_or(false) {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                entries.push(BackupEntry {
                    id: filename.trim_end_matches(".bak").to_string(),
                    path: path.clone(),
                    size: entry.metadata()?.len(),
                });
            }
        }

        entries.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(entries)
    }

    /// Restore a backup by ID over the target file.
    pub fn restore_backup(&self, id: &str, target_file: &Path) -> Result<()> {
        let backups = self.list_backups()?;
        let backup = backups
            .iter()
            .find(|b| b.id == id || b.id.contains(id))
            .ok_or_else(|| anyhow::anyhow!("Backup not found: {}", id))?;

        std::fs::copy(&backup.path, target_file)?;
        Ok(())
    }

    /// Remove all but the newest `keep` backups; returns how many
    /// were deleted.
    pub fn prune(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;
        let mut removed = 0;
        for backup in backups.iter().skip(keep) {
            std::fs::remove_file(&backup.path)?;
            removed += 1;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_and_list_backup() {
        let dir = tempdir().unwrap();
        let rc = dir.path().join(".bashrc");
        std::fs::write(&rc, "export EDITOR=nvim\n").unwrap();

        let manager = BackupManager::new(dir.path(), ShellType::Bash);
        let path = manager.create_backup(&rc).unwrap();

        assert!(path.to_string_lossy().ends_with(".bashrc.bak"));
        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert!(backups[0].id.contains(".bashrc"));
    }

    #[test]
    fn test_restore_backup() {
        let dir = tempdir().unwrap();
        let rc = dir.path().join(".zshrc");
        std::fs::write(&rc, "original\n").unwrap();

        let manager = BackupManager::new(dir.path(), ShellType::Zsh);
        manager.create_backup(&rc).unwrap();
        std::fs::write(&rc, "clobbered\n").unwrap();

        let id = manager.list_backups().unwrap()[0].id.clone();
        manager.restore_backup(&id, &rc).unwrap();
        assert_eq!(std::fs::read_to_string(&rc).unwrap(), "original\n");
    }

    #[test]
    fn test_restore_unknown_id_fails() {
        let dir = tempdir().unwrap();
        let manager = BackupManager::new(dir.path(), ShellType::Bash);
        assert!(manager
            .restore_backup("nope", &dir.path().join(".bashrc"))
            .is_err());
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = tempdir().unwrap();
        let manager = BackupManager::new(dir.path(), ShellType::Bash);
        let backup_dir = dir.path().join("backups").join("bash");
        std::fs::create_dir_all(&backup_dir).unwrap();
        for i in 0..5 {
            std::fs::write(
                backup_dir.join(format!("2026-01-0{}_000000_.bashrc.bak", i + 1)),
                "x",
            )
            .unwrap();
        }

        let removed = manager.prune(2).unwrap();
        assert_eq!(removed, 3);

        let remaining = manager.list_backups().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining[0].id.starts_with("2026-01-05"));
    }

    #[test]
    fn test_list_without_backup_dir_is_empty() {
        let dir = tempdir().unwrap();
        let manager = BackupManager::new(dir.path(), ShellType::Zsh);
        assert!(manager.list_backups().unwrap().is_empty());
    }
}
