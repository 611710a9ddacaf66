use super::{energy::EnergyAfter, session_type::SessionType};
use chrono::NaiveDate;
use serde::Serialize;

/// A persisted session row from the remote store.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRow {
    pub id: i64,
    pub session_date: NaiveDate,
    pub session_type: SessionType,
    pub planned_minutes: i32,
    pub actual_minutes: i32,
    pub energy_after: EnergyAfter,
    pub notes: Option<String>,
    pub created_at: String, // ISO 8601, stamped by the store at insert time
    pub user_id: String,
}

/// A persisted sub-task row. `session_id` always references an existing
/// session row; rows are interpreted in `sort_order` ascending order.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    pub id: i64,
    pub session_id: i64,
    pub task_name: String,
    pub sort_order: Option<i32>,
    pub planned_minutes: Option<i32>,
    pub completed: bool,
    pub created_at: String,
    pub user_id: String,
}

/// One session together with its ordered tasks, as returned by every remote
/// read and by a successful create.
#[derive(Debug, Clone, Serialize)]
pub struct SessionWithTasks {
    pub session: SessionRow,
    pub tasks: Vec<TaskRow>,
}

/// A session about to be inserted: the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub session_date: NaiveDate,
    pub session_type: SessionType,
    pub planned_minutes: i32,
    pub actual_minutes: i32,
    pub energy_after: EnergyAfter,
    pub notes: Option<String>,
    pub user_id: String,
}

/// A task about to be inserted: the store assigns `id`, `created_at`, the
/// owning `session_id` and the owner.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub task_name: String,
    pub sort_order: Option<i32>,
    pub planned_minutes: Option<i32>,
    pub completed: bool,
}
