//! Runtime configuration.
//!
//! An optional `config.json` in the platform config dir overrides the
//! defaults; a missing or malformed file just means defaults.

use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "taskbook";
const DATA_FILE: &str = "taskbook.dat";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit task-file location; when unset the platform data dir is
    /// used, falling back to the current directory.
    pub data_file: Option<PathBuf>,
    /// Colored terminal feedback.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            color: true,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)) else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("ignoring malformed {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Where the binary task file lives. The data directory is created on
    /// demand; if that fails the file lands in the current directory.
    pub fn data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        match dirs::data_dir() {
            Some(dir) => {
                let dir = dir.join(APP_DIR);
                if fs::create_dir_all(&dir).is_err() {
                    return PathBuf::from(DATA_FILE);
                }
                dir.join(DATA_FILE)
            }
            None => PathBuf::from(DATA_FILE),
        }
    }
}
