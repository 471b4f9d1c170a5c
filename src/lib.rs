//! modelenv - Model Profile Manager
//!
//! A command-line tool for switching between named AI model
//! configurations (API endpoint, credentials, model names) by
//! exporting them as shell environment variables.
//!
//! # Features
//!
//! - Named profiles persisted as pretty-printed JSON
//! - Switch profiles and rewrite the shell startup file (bash, zsh)
//! - Idempotent managed export block; user lines stay untouched
//! - Live environment status with secret-safe reporting
//! - Automatic startup-file backups before every rewrite

pub mod backup;
pub mod cli;
pub mod env;
pub mod error;
pub mod model;
pub mod store;

pub use env::{ApplyReport, EnvWriter, Environment, ProcessEnv, MARKER};
pub use error::Error;
pub use model::{default_setting_keys, Profile, SettingKey, ShellType, Store};
pub use store::ConfigStore;
