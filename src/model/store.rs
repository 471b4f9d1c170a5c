//! Persisted store structure

use serde::{Deserialize, Serialize};

use super::{Profile, SettingKey};

/// The persisted collection of profiles, the current-profile pointer,
/// and the recognized-key schema.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Store {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_profile: Option<String>,
    #[serde(default = "default_setting_keys")]
    pub keys: Vec<SettingKey>,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            profiles: Vec::new(),
            current_profile: None,
            keys: default_setting_keys(),
        }
    }
}

/// Variables managed when a store does not declare its own schema.
/// Declaration order is also the export order in the startup file.
pub fn default_setting_keys() -> Vec<SettingKey> {
    vec![
        SettingKey::new("ANTHROPIC_BASE_URL", true),
        SettingKey::new("ANTHROPIC_AUTH_TOKEN", true),
        SettingKey::new("ANTHROPIC_MODEL", false),
        SettingKey::new("ANTHROPIC_SMALL_FAST_MODEL", false),
        SettingKey::new("ANTHROPIC_MAX_TOKENS", false),
    ]
}

impl Store {
    pub fn find_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Resolve the current pointer; a dangling name resolves to `None`
    /// rather than an error.
    pub fn current(&self) -> Option<&Profile> {
        self.current_profile
            .as_deref()
            .and_then(|name| self.find_profile(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_order() {
        let keys = default_setting_keys();
        assert_eq!(keys[0].key, "ANTHROPIC_BASE_URL");
        assert_eq!(keys[1].key, "ANTHROPIC_AUTH_TOKEN");
        assert!(keys[0].required && keys[1].required);
        assert!(keys[2..].iter().all(|k| !k.required));
    }

    #[test]
    fn test_keys_default_when_missing_from_json() {
        let store: Store = serde_json::from_str(r#"{"profiles": []}"#).unwrap();
        assert_eq!(store.keys, default_setting_keys());
        assert!(store.current_profile.is_none());
    }

    #[test]
    fn test_current_dangling_pointer_resolves_to_none() {
        let store = Store {
            current_profile: Some("gone".to_string()),
            ..Store::default()
        };
        assert!(store.current().is_none());
    }

    #[test]
    fn test_current_resolves_profile() {
        let mut store = Store::default();
        store.profiles.push(Profile::new("work"));
        store.current_profile = Some("work".to_string());
        assert_eq!(store.current().unwrap().name, "work");
    }
}
