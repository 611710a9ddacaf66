//! Entry workflow: holds the draft, the current list and the load state, and
//! drives create/list/delete through the session service.

use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::{EnergyAfter, EntryDraft, SessionEntry, SessionType};
use crate::service::EntryService;
use crate::ui::messages::warning;
use crate::utils::date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Uninitialized,
    Loading,
    Unauthenticated,
    Ready,
}

/// Draft fields addressable by raw user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    SessionType,
    PlannedMinutes,
    ActualMinutes,
    TasksCompleted,
    EnergyAfter,
    Notes,
}

pub struct EntryWorkflow {
    service: Box<dyn EntryService>,
    pub state: WorkflowState,
    pub entries: Vec<SessionEntry>,
    pub draft: EntryDraft,
    pub last_error: Option<String>,
    /// Raised while a store operation is in flight; save/delete are not
    /// re-entrant.
    pub busy: bool,
}

impl EntryWorkflow {
    pub fn new(service: Box<dyn EntryService>) -> Self {
        Self {
            service,
            state: WorkflowState::Uninitialized,
            entries: Vec::new(),
            draft: EntryDraft::default(),
            last_error: None,
            busy: false,
        }
    }

    /// Resolve identity and load the list. Settles in `Unauthenticated`
    /// (empty list, no store call) or `Ready`.
    pub fn mount(&mut self) {
        self.state = WorkflowState::Loading;

        if !self.service.identity_present() {
            self.entries.clear();
            self.state = WorkflowState::Unauthenticated;
            return;
        }

        match self.service.fetch_entries() {
            Ok(entries) => {
                self.entries = entries;
                self.last_error = None;
            }
            Err(e) => {
                self.entries.clear();
                self.last_error = Some(e.to_string());
            }
        }
        self.state = WorkflowState::Ready;
    }

    /// Sign-in/sign-out notifications re-trigger the mount transition from
    /// any state.
    pub fn identity_changed(&mut self) {
        self.mount();
    }

    /// Pure draft mutation from raw input. Empty numeric input parses to
    /// "unset" and is kept that way, never defaulted to zero.
    pub fn update_field(&mut self, field: DraftField, raw: &str) -> AppResult<()> {
        match field {
            DraftField::Date => {
                self.draft.date = date::parse_date(raw)
                    .ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            }
            DraftField::SessionType => {
                let t = SessionType::from_input(raw)
                    .ok_or_else(|| AppError::InvalidSessionType(raw.to_string()))?;
                self.change_type(t);
            }
            DraftField::PlannedMinutes => {
                self.draft.planned_minutes = parse_minutes(raw, "planned minutes")?;
            }
            DraftField::ActualMinutes => {
                self.draft.actual_minutes = parse_minutes(raw, "actual minutes")?;
            }
            DraftField::TasksCompleted => {
                self.draft.tasks_completed = parse_minutes(raw, "tasks completed")?;
            }
            DraftField::EnergyAfter => {
                self.draft.energy_after = EnergyAfter::from_input(raw)
                    .ok_or_else(|| AppError::InvalidEnergy(raw.to_string()))?;
            }
            DraftField::Notes => {
                self.draft.notes = raw.to_string();
            }
        }
        Ok(())
    }

    /// Set the intensity tier and reset planned minutes to its lookup
    /// default, discarding any manual edit.
    pub fn change_type(&mut self, t: SessionType) {
        self.draft.session_type = t;
        self.draft.planned_minutes = Some(t.default_minutes());
    }

    /// Validate, persist, reload the full list, reset the draft. On any
    /// failure the draft is left untouched and the error text recorded.
    pub fn save(&mut self) -> AppResult<()> {
        if self.busy {
            return Err(AppError::Other("another operation is in flight".into()));
        }

        if let Err(e) = validate::validate(&self.draft) {
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        self.busy = true;
        let result = self.save_inner();
        self.busy = false;

        if let Err(e) = &result {
            self.last_error = Some(e.to_string());
        }
        result
    }

    fn save_inner(&mut self) -> AppResult<()> {
        self.service.create_entry(&self.draft)?;
        // Full reload before the list reflects the write; the displayed list
        // is never an optimistic projection.
        self.entries = self.service.fetch_entries()?;
        self.draft = EntryDraft::default();
        self.last_error = None;
        Ok(())
    }

    /// Remove an entry by id, then reload the list.
    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        if self.busy {
            return Err(AppError::Other("another operation is in flight".into()));
        }

        self.busy = true;
        let result = self.delete_inner(id);
        self.busy = false;

        if let Err(e) = &result {
            self.last_error = Some(e.to_string());
        }
        result
    }

    fn delete_inner(&mut self, id: i64) -> AppResult<()> {
        self.service.delete_entry(id)?;
        match self.service.fetch_entries() {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                // The delete itself went through; keep the filtered view.
                warning(format!("Reload after delete failed: {}", e));
                self.entries.retain(|entry| entry.id != id);
            }
        }
        Ok(())
    }
}

fn parse_minutes(raw: &str, what: &str) -> AppResult<Option<i32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("{} must be a whole number", what)))
}
