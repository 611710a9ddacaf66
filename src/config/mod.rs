use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Which session store to use: "local" (JSON file) or "remote" (SQLite).
    #[serde(default = "default_store")]
    pub store: String,
    pub database: String,
    pub entries_file: String,
    pub identity_file: String,
}

fn default_store() -> String {
    "local".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            database: Self::database_file().to_string_lossy().to_string(),
            entries_file: Self::entries_file_path().to_string_lossy().to_string(),
            identity_file: Self::identity_file_path().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".focuslog")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("focuslog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("focuslog.sqlite")
    }

    pub fn entries_file_path() -> PathBuf {
        Self::config_dir().join("sessions.json")
    }

    pub fn identity_file_path() -> PathBuf {
        Self::config_dir().join("identity")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Create the config directory, the config file and the selected
    /// backend's storage.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml = serde_yaml::to_string(self)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
