//! Session Service: maps between the flat entry shape the workflow handles
//! and each store's native shape.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::identity::FileIdentity;
use crate::models::{EntryDraft, SessionEntry};
use crate::store::LocalStore;

pub mod local;
pub mod remote;

pub use local::LocalService;
pub use remote::RemoteService;

/// The seam the workflow talks through. Two implementations: a local JSON
/// store (no identity precondition) and a remote SQLite store gated on an
/// authenticated identity.
pub trait EntryService {
    /// Whether an identity is present. The local variant has no such
    /// precondition and always reports true.
    fn identity_present(&self) -> bool {
        true
    }

    /// Current list of entries, most recent first.
    fn fetch_entries(&mut self) -> AppResult<Vec<SessionEntry>>;

    /// Persist a validated draft; returns the stored entry.
    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<SessionEntry>;

    /// Remove an entry by id.
    fn delete_entry(&mut self, id: i64) -> AppResult<()>;
}

/// Build the service selected by the configuration.
pub fn for_config(cfg: &Config) -> AppResult<Box<dyn EntryService>> {
    match cfg.store.as_str() {
        "local" => Ok(Box::new(LocalService::new(LocalStore::new(
            &cfg.entries_file,
        )))),
        "remote" => {
            let hub = FileIdentity::new(&cfg.identity_file).hub();
            Ok(Box::new(RemoteService::open(&cfg.database, hub)?))
        }
        other => Err(AppError::Config(format!(
            "unknown store '{}' (expected 'local' or 'remote')",
            other
        ))),
    }
}
