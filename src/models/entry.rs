use super::{energy::EnergyAfter, session_type::SessionType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A focus session as the user sees it: one flat record.
///
/// This is also the persisted shape of the local store (a single JSON array of
/// these objects, camelCase field names). The remote store decomposes it into
/// a session row plus child task rows; see [`crate::models::rows`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub id: i64,
    pub date: NaiveDate, // ⇔ sessions.session_date (TEXT "YYYY-MM-DD")
    pub session_type: SessionType,
    pub planned_minutes: i32,
    pub actual_minutes: i32,
    #[serde(default)]
    pub tasks_completed: Option<i32>,
    pub energy_after: EnergyAfter,
    #[serde(default)]
    pub notes: String,
}

impl SessionEntry {
    /// Notes for display: an empty string is treated as absent.
    pub fn display_notes(&self) -> Option<&str> {
        if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.as_str())
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
