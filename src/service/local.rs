use crate::errors::{AppError, AppResult};
use crate::models::{EntryDraft, SessionEntry};
use crate::service::EntryService;
use crate::store::LocalStore;
use crate::ui::messages::warning;

/// Service over the local JSON store. Owns id generation; keeps the
/// newest-first order by prepending on create.
pub struct LocalService {
    store: LocalStore,
}

impl LocalService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    fn entry_from_draft(draft: &EntryDraft, id: i64) -> AppResult<SessionEntry> {
        let actual_minutes = draft
            .actual_minutes
            .ok_or_else(|| AppError::Validation("actual minutes is required".into()))?;

        Ok(SessionEntry {
            id,
            date: draft.date,
            session_type: draft.session_type,
            planned_minutes: draft.effective_planned_minutes(),
            actual_minutes,
            tasks_completed: draft.tasks_completed,
            energy_after: draft.energy_after,
            notes: draft.notes.clone(),
        })
    }
}

impl EntryService for LocalService {
    fn fetch_entries(&mut self) -> AppResult<Vec<SessionEntry>> {
        Ok(self.store.load())
    }

    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<SessionEntry> {
        let mut entries = self.store.load();
        let entry = Self::entry_from_draft(draft, LocalStore::next_id(&entries))?;

        entries.insert(0, entry.clone());
        self.store.save(&entries)?;

        Ok(entry)
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        let mut entries = self.store.load();
        entries.retain(|e| e.id != id);

        // A failed rewrite here loses only the delete; it is logged, not
        // surfaced, because no explicit save initiated it.
        if let Err(e) = self.store.save(&entries) {
            warning(format!("Delete was not persisted: {}", e));
        }
        Ok(())
    }
}
