use std::path::PathBuf;

use thiserror::Error;

use crate::core::UserDirectory;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The data file could not be opened or read.
    #[error("failed to read users file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    /// The data file is not a `{ "users": [...] }` document.
    #[error("failed to parse users file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Somewhere a user directory can be loaded from.
pub trait UserSource {
    fn load(&self) -> Result<UserDirectory>;
}
