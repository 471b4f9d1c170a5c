//! Profile store persistence
//!
//! Each CLI invocation is one short-lived process, so every operation
//! is a full load/mutate/persist cycle against the JSON store file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{Profile, SettingKey, Store};

/// Owns the store file path and all read/modify/write cycles on it.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ConfigStore { path: path.into() }
    }

    /// Get the modelenv configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("modelenv")
    }

    /// Default store file location.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("profiles.json")
    }

    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store, synthesizing and persisting an empty default
    /// when the file does not exist yet.
    pub fn load(&self) -> Result<Store> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let store = Store::default();
                self.save(&store)?;
                Ok(store)
            }
            Err(source) => Err(Error::read(&self.path, source)),
        }
    }

    /// Persist pretty-printed JSON via a sibling temp file and rename,
    /// so a reader never observes a half-written store.
    pub fn save(&self, store: &Store) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::write(&self.path, e))?;
        }
        let mut json = serde_json::to_string_pretty(store).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;
        json.push('\n');

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| Error::write(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| Error::write(&self.path, e))
    }

    pub fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.load()?.profiles)
    }

    /// Resolve the current-profile pointer; unset or dangling is `None`.
    pub fn current_profile(&self) -> Result<Option<Profile>> {
        Ok(self.load()?.current().cloned())
    }

    pub fn set_current(&self, name: &str) -> Result<()> {
        let mut store = self.load()?;
        if store.find_profile(name).is_none() {
            return Err(Error::NotFound(name.to_string()));
        }
        store.current_profile = Some(name.to_string());
        self.save(&store)
    }

    /// Replace the profile with the same name wholesale, or append.
    /// Nothing of a replaced profile survives.
    pub fn upsert(&self, profile: Profile) -> Result<()> {
        let mut store = self.load()?;
        match store.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(slot) => *slot = profile,
            None => store.profiles.push(profile),
        }
        self.save(&store)
    }

    /// Remove a profile by name. Removing the current profile clears
    /// the pointer; it is never silently reassigned.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut store = self.load()?;
        let before = store.profiles.len();
        store.profiles.retain(|p| p.name != name);
        if store.profiles.len() == before {
            return Err(Error::NotFound(name.to_string()));
        }
        if store.current_profile.as_deref() == Some(name) {
            store.current_profile = None;
        }
        self.save(&store)
    }

    /// The key schema the environment writer and CLI must honor.
    pub fn recognized_keys(&self) -> Result<Vec<SettingKey>> {
        Ok(self.load()?.keys)
    }
}
