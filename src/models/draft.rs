use super::{energy::EnergyAfter, session_type::SessionType};
use crate::utils::date;
use chrono::NaiveDate;

/// The in-progress entry held by the workflow before a save.
///
/// Numeric fields are `Option` because empty input parses to "unset" and must
/// be propagated as such, never defaulted to zero. `actual_minutes` unset is
/// a validation failure; `planned_minutes` unset falls back to the tier
/// default at save time; `tasks_completed` unset simply stays null.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub session_type: SessionType,
    pub planned_minutes: Option<i32>,
    pub actual_minutes: Option<i32>,
    pub tasks_completed: Option<i32>,
    pub energy_after: EnergyAfter,
    pub notes: String,
    /// Named sub-tasks to persist with the session, in entry order.
    pub tasks: Vec<String>,
}

impl Default for EntryDraft {
    /// The fresh draft: today's date, Green tier with its planned default,
    /// actual minutes unset, no notes, no tasks.
    fn default() -> Self {
        let tier = SessionType::Green;
        Self {
            date: date::today(),
            session_type: tier,
            planned_minutes: Some(tier.default_minutes()),
            actual_minutes: None,
            tasks_completed: None,
            energy_after: EnergyAfter::Better,
            notes: String::new(),
            tasks: Vec::new(),
        }
    }
}

impl EntryDraft {
    /// Planned minutes to persist: the drafted value, or the tier default if
    /// the user blanked the field.
    pub fn effective_planned_minutes(&self) -> i32 {
        self.planned_minutes
            .unwrap_or_else(|| self.session_type.default_minutes())
    }
}
