use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "scramble";
pub const SESSION_JSON: &str = "session.json";
pub const SESSION_DB: &str = "session.db";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Where saved games live: `$HOME/.local/state/scramble`, else the platform data dir
    pub fn state_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME)
        } else if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            proj_dirs.data_local_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        }
    }

    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", APP_NAME) {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("scramble_config.json")
        }
    }
}
