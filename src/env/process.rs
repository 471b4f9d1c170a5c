//! Process environment abstraction
//!
//! The writer mutates an `Environment` instead of `std::env` directly;
//! only the CLI boundary touches real process state, which keeps the
//! core testable against an in-memory map.

use std::env;

pub trait Environment {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Adapter over the real process environment.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
    }

    fn remove(&mut self, key: &str) {
        env::remove_var(key);
    }
}

/// In-memory environment for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MapEnv(pub std::collections::BTreeMap<String, String>);

#[cfg(test)]
impl Environment for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_roundtrip() {
        let mut env = MapEnv::default();
        env.set("K", "v");
        assert_eq!(env.get("K"), Some("v".to_string()));
        env.remove("K");
        assert_eq!(env.get("K"), None);
    }

    #[test]
    fn test_process_env_roundtrip() {
        let mut env = ProcessEnv;
        env.set("MODELENV_PROCESS_ENV_TEST", "1");
        assert_eq!(
            env.get("MODELENV_PROCESS_ENV_TEST"),
            Some("1".to_string())
        );
        env.remove("MODELENV_PROCESS_ENV_TEST");
        assert_eq!(env.get("MODELENV_PROCESS_ENV_TEST"), None);
    }
}
