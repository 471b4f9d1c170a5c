//! Profiles and the recognized-key schema

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One environment variable managed by the tool.
///
/// The set of managed variables is data carried in the store rather
/// than a closed enum, so a store can declare its own schema without
/// code changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SettingKey {
    pub key: String,
    #[serde(default)]
    pub required: bool,
}

impl SettingKey {
    pub fn new(key: impl Into<String>, required: bool) -> Self {
        SettingKey {
            key: key.into(),
            required,
        }
    }

    /// Whether the key holds a credential that must never be printed
    /// in full.
    pub fn is_secret(&self) -> bool {
        self.key.contains("TOKEN") || self.key.contains("SECRET") || self.key.contains("API_KEY")
    }
}

/// A named set of environment variable values for one backend/model.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Profile {
            name: name.into(),
            ..Profile::default()
        }
    }

    /// Usable value for a key; whitespace-only counts as unset.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Required keys this profile has no usable value for.
    pub fn missing_required<'a>(&self, keys: &'a [SettingKey]) -> Vec<&'a str> {
        keys.iter()
            .filter(|k| k.required && self.value(&k.key).is_none())
            .map(|k| k.key.as_str())
            .collect()
    }

    pub fn is_complete(&self, keys: &[SettingKey]) -> bool {
        self.missing_required(keys).is_empty()
    }

    /// Creation-time validation: the name and every required key must
    /// be non-empty. A stored profile may later become incomplete if
    /// the key schema changes; that is reported by consumers, not
    /// rejected here.
    pub fn validate(&self, keys: &[SettingKey]) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("profile name".to_string()));
        }
        if let Some(key) = self.missing_required(keys).first() {
            return Err(Error::Validation(key.to_string()));
        }
        Ok(())
    }
}
