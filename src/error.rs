//! Error taxonomy for the core managers
//!
//! The store and the environment writer surface these to the caller;
//! presentation is the CLI layer's job.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The profile store or a shell startup file could not be read or
    /// written (absence of either file is not an error).
    #[error("failed to {action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The profile store exists but does not hold valid JSON.
    #[error("malformed profile store {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A referenced profile name does not exist.
    #[error("profile '{0}' not found")]
    NotFound(String),

    /// The shell kind is not one of the supported variants.
    #[error("unsupported shell '{0}' (supported: bash, zsh)")]
    UnsupportedShell(String),

    /// A required field was empty during profile creation.
    #[error("{0} must not be empty")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Error::Persistence {
            action: "read",
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Error::Persistence {
            action: "write",
            path: path.to_path_buf(),
            source,
        }
    }
}
