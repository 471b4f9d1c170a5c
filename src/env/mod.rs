//! Environment writer
//!
//! Translates a profile into the current process environment and into
//! a managed export block at the tail of a shell startup file, and
//! reports what it did. The writer itself never prints; the CLI
//! renders the report.

mod process;
mod rcfile;

pub use process::{Environment, ProcessEnv};
pub use rcfile::{rewrite, MARKER};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{Profile, SettingKey, ShellType};

/// Per-key outcome of an apply.
#[derive(Debug, Clone)]
pub struct AppliedKey {
    pub key: SettingKey,
    /// Value now exported, or `None` when the key was cleared.
    pub value: Option<String>,
}

/// What one apply did.
#[derive(Debug)]
pub struct ApplyReport {
    pub shell: ShellType,
    pub rc_path: PathBuf,
    pub keys: Vec<AppliedKey>,
}

pub struct EnvWriter {
    shell: ShellType,
    rc_path: PathBuf,
}

impl EnvWriter {
    pub fn new(shell: ShellType, rc_path: impl Into<PathBuf>) -> Self {
        EnvWriter {
            shell,
            rc_path: rc_path.into(),
        }
    }

    /// Writer targeting the shell's default startup file.
    pub fn for_shell(shell: ShellType) -> Self {
        Self::new(shell, shell.rc_path())
    }

    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }

    /// Apply a profile: set every recognized key the profile has a
    /// value for, remove the rest (profiles are exclusive; nothing of
    /// the previous profile survives a switch), then rewrite the
    /// managed block in the startup file.
    pub fn apply(
        &self,
        profile: &Profile,
        keys: &[SettingKey],
        env: &mut dyn Environment,
    ) -> Result<ApplyReport> {
        let mut applied = Vec::with_capacity(keys.len());
        for key in keys {
            let value = profile.value(&key.key);
            match value {
                Some(v) => env.set(&key.key, v),
                None => env.remove(&key.key),
            }
            applied.push(AppliedKey {
                key: key.clone(),
                value: value.map(str::to_string),
            });
        }

        let content = match fs::read_to_string(&self.rc_path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => return Err(Error::read(&self.rc_path, source)),
        };

        let rewritten = rcfile::rewrite(&content, keys, profile);
        if let Some(parent) = self.rc_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::write(&self.rc_path, e))?;
        }
        fs::write(&self.rc_path, rewritten).map_err(|e| Error::write(&self.rc_path, e))?;

        Ok(ApplyReport {
            shell: self.shell,
            rc_path: self.rc_path.clone(),
            keys: applied,
        })
    }

    /// Read only the recognized keys from the environment; the startup
    /// file is not consulted.
    pub fn snapshot(
        keys: &[SettingKey],
        env: &dyn Environment,
    ) -> Vec<(SettingKey, Option<String>)> {
        keys.iter().map(|k| (k.clone(), env.get(&k.key))).collect()
    }
}
