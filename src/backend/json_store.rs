use std::{fs, path::{Path, PathBuf}};

use crate::backend::interface::{BackendError, Result, UserSource};
use crate::core::UserDirectory;

/// Reads users from a JSON file shaped as `{ "users": [ ... ] }`.
pub struct JsonStore {
    path: PathBuf
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_owned() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(content: &str) -> serde_json::Result<UserDirectory> {
        serde_json::from_str(content)
    }
}

impl UserSource for JsonStore {
    fn load(&self) -> Result<UserDirectory> {
        let content = fs::read_to_string(&self.path)
            .map_err(|source| BackendError::Read { path: self.path.clone(), source })?;
        let directory = JsonStore::parse(&content)
            .map_err(|source| BackendError::Parse { path: self.path.clone(), source })?;
        return Ok(directory);
    }
}
