use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

pub const DEFAULT_CONFIG: &str = "resources/server.toml";
pub const DEFAULT_USERS_FILE: &str = "resources/db.json";

/// Port the service listens on, fixed rather than read from `AppConfig`.
pub const LISTEN_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON file holding the `users` array
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf
}

fn default_users_file() -> PathBuf {
    PathBuf::from(DEFAULT_USERS_FILE)
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { users_file: default_users_file() }
    }
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(&filepath)
            .with_context(|| format!("failed to read config file {}", filepath.as_ref().display()))?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Reads `resources/server.toml` when present, otherwise defaults.
    pub fn load_default() -> anyhow::Result<Self> {
        if Path::new(DEFAULT_CONFIG).exists() {
            return AppConfig::read(DEFAULT_CONFIG);
        }
        return Ok(AppConfig::default());
    }
}
