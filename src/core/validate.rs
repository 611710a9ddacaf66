use crate::errors::{AppError, AppResult};
use crate::models::{EnergyAfter, EntryDraft, SessionType};

/// Presence checks applied before every save, short-circuiting at the first
/// failing rule: session type tag, energy tag, then actual minutes.
///
/// The tag checks are structural once the draft carries parsed enums; they
/// stay explicit to pin the failure order. No range checks: zero or negative
/// minutes are accepted, notes have no length limit.
pub fn validate(draft: &EntryDraft) -> AppResult<()> {
    if SessionType::from_db_str(draft.session_type.to_db_str()).is_none() {
        return Err(AppError::Validation("unknown session type".into()));
    }

    if EnergyAfter::from_db_str(draft.energy_after.to_db_str()).is_none() {
        return Err(AppError::Validation("unknown energy rating".into()));
    }

    if draft.actual_minutes.is_none() {
        return Err(AppError::Validation("actual minutes is required".into()));
    }

    Ok(())
}
