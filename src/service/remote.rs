use crate::db::pool::DbPool;
use crate::db::{log as audit_log, queries};
use crate::errors::{AppError, AppResult};
use crate::identity::IdentityHub;
use crate::models::rows::{NewSession, NewTask, SessionWithTasks};
use crate::models::{EntryDraft, SessionEntry};
use crate::service::EntryService;
use crate::ui::messages::warning;

/// Service over the remote SQLite store. Every operation first resolves the
/// current identity; without one it fails before any store call.
pub struct RemoteService {
    pool: DbPool,
    identity: IdentityHub,
}

impl RemoteService {
    pub fn new(pool: DbPool, identity: IdentityHub) -> Self {
        Self { pool, identity }
    }

    pub fn open(database: &str, identity: IdentityHub) -> AppResult<Self> {
        let pool = DbPool::new(database)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(Self::new(pool, identity))
    }

    /// Owner id of the authenticated identity, or [`AppError::AuthRequired`].
    /// Never silently defaulted.
    pub fn require_session(&self) -> AppResult<String> {
        self.identity
            .current_identity()
            .map(|i| i.id)
            .ok_or(AppError::AuthRequired)
    }

    /// Flatten the two-table shape into the entry shape.
    ///
    /// `tasks_completed` is write-only: it is not represented remotely and
    /// always reloads as None, regardless of the fetched tasks. NULL notes
    /// become the empty string.
    pub fn entry_from_row(row: &SessionWithTasks) -> SessionEntry {
        SessionEntry {
            id: row.session.id,
            date: row.session.session_date,
            session_type: row.session.session_type,
            planned_minutes: row.session.planned_minutes,
            actual_minutes: row.session.actual_minutes,
            tasks_completed: None,
            energy_after: row.session.energy_after,
            notes: row.session.notes.clone().unwrap_or_default(),
        }
    }

    /// Map a validated draft to the session-row shape. `tasks_completed` is
    /// dropped; empty notes become NULL.
    pub fn row_from_draft(draft: &EntryDraft, owner: &str) -> AppResult<NewSession> {
        let actual_minutes = draft
            .actual_minutes
            .ok_or_else(|| AppError::Validation("actual minutes is required".into()))?;

        Ok(NewSession {
            session_date: draft.date,
            session_type: draft.session_type,
            planned_minutes: draft.effective_planned_minutes(),
            actual_minutes,
            energy_after: draft.energy_after,
            notes: if draft.notes.is_empty() {
                None
            } else {
                Some(draft.notes.clone())
            },
            user_id: owner.to_string(),
        })
    }

    /// Named sub-tasks from the draft, `sort_order` = position in the form.
    pub fn tasks_from_draft(draft: &EntryDraft) -> Vec<NewTask> {
        draft
            .tasks
            .iter()
            .enumerate()
            .map(|(i, name)| NewTask {
                task_name: name.clone(),
                sort_order: Some(i as i32),
                planned_minutes: None,
                completed: false,
            })
            .collect()
    }

    /// Flip one task's completed flag. Exposed for the `task` command; the
    /// session flow itself never updates rows in place.
    pub fn set_task_completed(&mut self, task_id: i64, completed: bool) -> AppResult<()> {
        let owner = self.require_session()?;
        queries::update_task_completed(&self.pool, &owner, task_id, completed)?;
        Ok(())
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl EntryService for RemoteService {
    fn identity_present(&self) -> bool {
        self.identity.current_identity().is_some()
    }

    fn fetch_entries(&mut self) -> AppResult<Vec<SessionEntry>> {
        let owner = self.require_session()?;
        let rows = queries::fetch_all(&self.pool, &owner)?;
        Ok(rows.iter().map(Self::entry_from_row).collect())
    }

    fn create_entry(&mut self, draft: &EntryDraft) -> AppResult<SessionEntry> {
        let owner = self.require_session()?;
        let new = Self::row_from_draft(draft, &owner)?;
        let tasks = Self::tasks_from_draft(draft);

        let stored = queries::create_session_with_tasks(&self.pool, &new, &tasks)?;

        if let Err(e) = audit_log::audit(
            &self.pool.conn,
            "create_session",
            &stored.session.id.to_string(),
            &format!("{} {}", stored.session.session_date, owner),
        ) {
            warning(format!("Audit log write failed: {}", e));
        }

        Ok(Self::entry_from_row(&stored))
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        let owner = self.require_session()?;
        let deleted = queries::delete_session(&self.pool, &owner, id)?;

        if deleted > 0
            && let Err(e) =
                audit_log::audit(&self.pool.conn, "delete_session", &id.to_string(), &owner)
        {
            warning(format!("Audit log write failed: {}", e));
        }

        Ok(())
    }
}
