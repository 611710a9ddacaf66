//! Local session store: the whole collection lives in one JSON document.
//!
//! Read failures are absorbed here — `load` always hands the caller a usable
//! (possibly empty) list. Write failures are logged and returned; whether
//! they are surfaced or swallowed is the caller's call.

use crate::errors::{AppError, AppResult};
use crate::models::SessionEntry;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire persisted collection.
    ///
    /// An absent file, unreadable file, or a payload that is not a JSON array
    /// of entries all yield an empty list. Never fails.
    pub fn load(&self) -> Vec<SessionEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warning(format!(
                    "Could not read {} ({}) — starting with an empty list",
                    self.path.display(),
                    e
                ));
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SessionEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warning(format!(
                    "Malformed session data in {} ({}) — starting with an empty list",
                    self.path.display(),
                    e
                ));
                Vec::new()
            }
        }
    }

    /// Serialize and write the full collection, overwriting any prior value.
    pub fn save(&self, entries: &[SessionEntry]) -> AppResult<()> {
        let payload = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AppError::StorageWrite(e.to_string()))?;
        }

        fs::write(&self.path, payload).map_err(|e| {
            warning(format!("Could not write {}: {}", self.path.display(), e));
            AppError::StorageWrite(e.to_string())
        })?;

        Ok(())
    }

    /// Client-side id generation for locally created entries.
    pub fn next_id(entries: &[SessionEntry]) -> i64 {
        entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}
