//! Shell kind detection and startup-file paths

use std::env;
use std::path::PathBuf;

use crate::error::Error;

/// Supported shell kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
}

impl ShellType {
    /// Detect the shell kind from the `$SHELL` environment variable.
    pub fn detect() -> Option<Self> {
        let shell = env::var("SHELL").ok()?;
        if shell.contains("zsh") {
            Some(ShellType::Zsh)
        } else if shell.contains("bash") {
            Some(ShellType::Bash)
        } else {
            None
        }
    }

    /// Resolve the shell to operate on: explicit choice first, then
    /// detection, then bash.
    pub fn resolve(specified: Option<Self>) -> Self {
        specified.or_else(Self::detect).unwrap_or(ShellType::Bash)
    }

    /// The startup file this tool rewrites for the shell kind.
    pub fn rc_path(&self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        match self {
            ShellType::Bash => home.join(".bashrc"),
            ShellType::Zsh => home.join(".zshrc"),
        }
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            _ => Err(Error::UnsupportedShell(s.to_string())),
        }
    }
}
