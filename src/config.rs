use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::{AppDirs, SESSION_DB, SESSION_JSON};
use crate::error::StoreError;
use crate::store::{FileSessionStore, SessionStore, SqliteSessionStore};

/// Backend used to keep the in-progress game between runs
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Json,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store: StoreKind,
    pub state_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreKind::Json,
            state_dir: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(AppDirs::state_dir)
    }

    /// Opens the configured session store
    pub fn open_store(&self) -> Result<Box<dyn SessionStore>, StoreError> {
        let dir = self.state_dir();
        let store: Box<dyn SessionStore> = match self.store {
            StoreKind::Json => Box::new(FileSessionStore::with_path(dir.join(SESSION_JSON))),
            StoreKind::Sqlite => Box::new(SqliteSessionStore::open(dir.join(SESSION_DB))?),
        };
        Ok(store)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
