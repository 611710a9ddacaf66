use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `sessions` table.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            session_date    TEXT NOT NULL,
            session_type    TEXT NOT NULL CHECK(session_type IN ('green','yellow','red')),
            planned_minutes INTEGER NOT NULL,
            actual_minutes  INTEGER NOT NULL,
            energy_after    TEXT NOT NULL CHECK(energy_after IN ('better','same','worse')),
            notes           TEXT,
            created_at      TEXT NOT NULL,
            user_id         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_user_date
            ON sessions(user_id, session_date, created_at);
        "#,
    )?;
    Ok(())
}

/// Create the `session_tasks` table.
fn create_session_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session_tasks (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id      INTEGER NOT NULL REFERENCES sessions(id),
            task_name       TEXT NOT NULL,
            sort_order      INTEGER,
            planned_minutes INTEGER,
            completed       INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL,
            user_id         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_session_tasks_session
            ON session_tasks(session_id, sort_order);
        "#,
    )?;
    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "sessions")? {
        create_sessions_table(conn)?;
    }
    if !table_exists(conn, "session_tasks")? {
        create_session_tasks_table(conn)?;
    }

    // Indexes are idempotent; re-assert them for databases created before
    // the composite index on (user_id, session_date, created_at).
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_sessions_user_date
            ON sessions(user_id, session_date, created_at);
        CREATE INDEX IF NOT EXISTS idx_session_tasks_session
            ON session_tasks(session_id, sort_order);
        "#,
    )?;

    Ok(())
}
