//! Remote session store: two related tables with per-user row ownership.
//!
//! Every query here is scoped by `user_id`; ownership is this layer's
//! responsibility, callers only supply the owner id.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::energy::EnergyAfter;
use crate::models::rows::{NewSession, NewTask, SessionRow, SessionWithTasks, TaskRow};
use crate::models::session_type::SessionType;
use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, Result, Row, params};
use std::collections::HashMap;

fn map_session_row(row: &Row) -> Result<SessionRow> {
    let date_str: String = row.get("session_date")?;
    let session_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let type_str: String = row.get("session_type")?;
    let session_type = SessionType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSessionType(type_str.clone())),
        )
    })?;

    let energy_str: String = row.get("energy_after")?;
    let energy_after = EnergyAfter::from_db_str(&energy_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEnergy(energy_str.clone())),
        )
    })?;

    Ok(SessionRow {
        id: row.get("id")?,
        session_date,
        session_type,
        planned_minutes: row.get("planned_minutes")?,
        actual_minutes: row.get("actual_minutes")?,
        energy_after,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        user_id: row.get("user_id")?,
    })
}

fn map_task_row(row: &Row) -> Result<TaskRow> {
    Ok(TaskRow {
        id: row.get("id")?,
        session_id: row.get("session_id")?,
        task_name: row.get("task_name")?,
        sort_order: row.get("sort_order")?,
        planned_minutes: row.get("planned_minutes")?,
        completed: row.get::<_, i32>("completed")? == 1,
        created_at: row.get("created_at")?,
        user_id: row.get("user_id")?,
    })
}

fn fetch_sessions(conn: &Connection, owner: &str) -> Result<Vec<SessionRow>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sessions
         WHERE user_id = ?1
         ORDER BY session_date DESC, created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([owner], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Fetch the tasks for a whole set of sessions in one query, keyed by
/// session id. Within each session, tasks come back in `sort_order`
/// ascending with NULLs last, ties broken by insertion id.
fn fetch_tasks_for(
    conn: &Connection,
    owner: &str,
    session_ids: &[i64],
) -> Result<HashMap<i64, Vec<TaskRow>>> {
    let mut by_session: HashMap<i64, Vec<TaskRow>> = HashMap::new();
    if session_ids.is_empty() {
        return Ok(by_session);
    }

    let placeholders = vec!["?"; session_ids.len()].join(",");
    let sql = format!(
        "SELECT * FROM session_tasks
         WHERE user_id = ? AND session_id IN ({})
         ORDER BY sort_order ASC NULLS LAST, id ASC",
        placeholders
    );

    let mut params: Vec<&dyn rusqlite::ToSql> = vec![&owner as &dyn rusqlite::ToSql];
    params.extend(session_ids.iter().map(|id| id as &dyn rusqlite::ToSql));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_task_row)?;

    for r in rows {
        let task = r?;
        by_session.entry(task.session_id).or_default().push(task);
    }
    Ok(by_session)
}

/// Fetch every session visible to `owner`, most recent first
/// (`session_date` descending, ties broken by `created_at` descending),
/// each composed with its ordered tasks.
///
/// Any query failure aborts the whole call; partial results are never
/// returned.
pub fn fetch_all(pool: &DbPool, owner: &str) -> AppResult<Vec<SessionWithTasks>> {
    let sessions =
        fetch_sessions(&pool.conn, owner).map_err(|e| AppError::Fetch(e.to_string()))?;

    let ids: Vec<i64> = sessions.iter().map(|s| s.id).collect();
    let mut tasks = fetch_tasks_for(&pool.conn, owner, &ids)
        .map_err(|e| AppError::Fetch(e.to_string()))?;

    Ok(sessions
        .into_iter()
        .map(|session| {
            let tasks = tasks.remove(&session.id).unwrap_or_default();
            SessionWithTasks { session, tasks }
        })
        .collect())
}

/// Insert a session and then its tasks.
///
/// The session row is committed first; only if that insert succeeds are the
/// tasks attempted. A task-batch failure leaves the session row persisted
/// (no rollback) and reports [`AppError::TasksFailedSessionPersisted`].
/// An empty task slice is not an error.
pub fn create_session_with_tasks(
    pool: &DbPool,
    new: &NewSession,
    tasks: &[NewTask],
) -> AppResult<SessionWithTasks> {
    let conn = &pool.conn;
    let created_at = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO sessions
           (session_date, session_type, planned_minutes, actual_minutes,
            energy_after, notes, created_at, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            new.session_date.format("%Y-%m-%d").to_string(),
            new.session_type.to_db_str(),
            new.planned_minutes,
            new.actual_minutes,
            new.energy_after.to_db_str(),
            new.notes,
            created_at,
            new.user_id,
        ],
    )
    .map_err(|e| AppError::CreateSession(e.to_string()))?;

    let session_id = conn.last_insert_rowid();

    let mut inserted = Vec::with_capacity(tasks.len());
    for task in tasks {
        let task_created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO session_tasks
               (session_id, task_name, sort_order, planned_minutes,
                completed, created_at, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                session_id,
                task.task_name,
                task.sort_order,
                task.planned_minutes,
                if task.completed { 1 } else { 0 },
                task_created_at,
                new.user_id,
            ],
        )
        .map_err(|e| AppError::TasksFailedSessionPersisted {
            session_id,
            cause: e.to_string(),
        })?;

        inserted.push(TaskRow {
            id: conn.last_insert_rowid(),
            session_id,
            task_name: task.task_name.clone(),
            sort_order: task.sort_order,
            planned_minutes: task.planned_minutes,
            completed: task.completed,
            created_at: task_created_at,
            user_id: new.user_id.clone(),
        });
    }

    Ok(SessionWithTasks {
        session: SessionRow {
            id: session_id,
            session_date: new.session_date,
            session_type: new.session_type,
            planned_minutes: new.planned_minutes,
            actual_minutes: new.actual_minutes,
            energy_after: new.energy_after,
            notes: new.notes.clone(),
            created_at,
            user_id: new.user_id.clone(),
        },
        tasks: inserted,
    })
}

/// Targeted single-field update of a task's completed flag.
pub fn update_task_completed(
    pool: &DbPool,
    owner: &str,
    task_id: i64,
    completed: bool,
) -> AppResult<TaskRow> {
    let conn = &pool.conn;

    let changed = conn
        .execute(
            "UPDATE session_tasks SET completed = ?1 WHERE id = ?2 AND user_id = ?3",
            params![if completed { 1 } else { 0 }, task_id, owner],
        )
        .map_err(|e| AppError::UpdateTask(e.to_string()))?;

    if changed == 0 {
        return Err(AppError::UpdateTask(format!(
            "no task with id {} for this user",
            task_id
        )));
    }

    let mut stmt = conn
        .prepare("SELECT * FROM session_tasks WHERE id = ?1 AND user_id = ?2")
        .map_err(|e| AppError::UpdateTask(e.to_string()))?;
    stmt.query_row(params![task_id, owner], map_task_row)
        .map_err(|e| AppError::UpdateTask(e.to_string()))
}

/// Delete a session and its tasks by id. Returns how many session rows went
/// away (0 when the id did not exist for this owner).
pub fn delete_session(pool: &DbPool, owner: &str, id: i64) -> AppResult<usize> {
    let conn = &pool.conn;

    conn.execute(
        "DELETE FROM session_tasks WHERE session_id = ?1 AND user_id = ?2",
        params![id, owner],
    )?;
    let deleted = conn.execute(
        "DELETE FROM sessions WHERE id = ?1 AND user_id = ?2",
        params![id, owner],
    )?;

    Ok(deleted)
}
