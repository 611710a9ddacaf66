use chrono::NaiveDate;
use focuslog::db::pool::DbPool;
use focuslog::db::{initialize, queries};
use focuslog::errors::AppError;
use focuslog::identity::{Identity, IdentityHub};
use focuslog::models::{EnergyAfter, EntryDraft, NewSession, NewTask, SessionType};
use focuslog::service::{EntryService, RemoteService};

fn test_pool() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    initialize::init_db(&pool.conn).unwrap();
    pool
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn new_session(owner: &str, day: &str, notes: Option<&str>) -> NewSession {
    NewSession {
        session_date: date(day),
        session_type: SessionType::Green,
        planned_minutes: 90,
        actual_minutes: 80,
        energy_after: EnergyAfter::Better,
        notes: notes.map(str::to_string),
        user_id: owner.to_string(),
    }
}

fn task(name: &str, sort_order: Option<i32>) -> NewTask {
    NewTask {
        task_name: name.to_string(),
        sort_order,
        planned_minutes: None,
        completed: false,
    }
}

#[test]
fn create_with_no_tasks_returns_id_and_created_at() {
    let pool = test_pool();

    let stored =
        queries::create_session_with_tasks(&pool, &new_session("alice", "2025-05-01", None), &[])
            .unwrap();

    assert!(stored.session.id > 0);
    assert!(!stored.session.created_at.is_empty());
    assert!(stored.tasks.is_empty());
}

#[test]
fn fetch_all_is_sorted_most_recent_first() {
    let pool = test_pool();

    let a = queries::create_session_with_tasks(&pool, &new_session("alice", "2025-05-02", None), &[])
        .unwrap();
    let b = queries::create_session_with_tasks(&pool, &new_session("alice", "2025-05-01", None), &[])
        .unwrap();
    let c = queries::create_session_with_tasks(&pool, &new_session("alice", "2025-05-02", None), &[])
        .unwrap();

    let rows = queries::fetch_all(&pool, "alice").unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.session.id).collect();

    // Same date: the later insert (c) wins on created_at; older date last.
    assert_eq!(ids, vec![c.session.id, a.session.id, b.session.id]);

    for pair in rows.windows(2) {
        let (x, y) = (&pair[0].session, &pair[1].session);
        assert!(
            x.session_date > y.session_date
                || (x.session_date == y.session_date && x.created_at >= y.created_at)
        );
    }
}

#[test]
fn tasks_come_back_in_sort_order_with_nulls_last() {
    let pool = test_pool();

    let stored = queries::create_session_with_tasks(
        &pool,
        &new_session("alice", "2025-05-01", None),
        &[
            task("second", Some(2)),
            task("unordered", None),
            task("first", Some(1)),
        ],
    )
    .unwrap();
    assert_eq!(stored.tasks.len(), 3);

    let rows = queries::fetch_all(&pool, "alice").unwrap();
    let names: Vec<&str> = rows[0].tasks.iter().map(|t| t.task_name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "unordered"]);
}

#[test]
fn delete_removes_session_and_its_tasks() {
    let pool = test_pool();

    let stored = queries::create_session_with_tasks(
        &pool,
        &new_session("alice", "2025-05-01", None),
        &[task("one", Some(1))],
    )
    .unwrap();

    let deleted = queries::delete_session(&pool, "alice", stored.session.id).unwrap();
    assert_eq!(deleted, 1);

    let rows = queries::fetch_all(&pool, "alice").unwrap();
    assert!(rows.iter().all(|r| r.session.id != stored.session.id));

    let orphans: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM session_tasks WHERE session_id = ?1",
            [stored.session.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn rows_are_scoped_to_their_owner() {
    let pool = test_pool();

    let mine =
        queries::create_session_with_tasks(&pool, &new_session("alice", "2025-05-01", None), &[])
            .unwrap();
    let theirs =
        queries::create_session_with_tasks(&pool, &new_session("bob", "2025-05-01", None), &[])
            .unwrap();

    let rows = queries::fetch_all(&pool, "alice").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].session.id, mine.session.id);

    // Deleting someone else's row is a no-op.
    let deleted = queries::delete_session(&pool, "alice", theirs.session.id).unwrap();
    assert_eq!(deleted, 0);
    assert_eq!(queries::fetch_all(&pool, "bob").unwrap().len(), 1);
}

#[test]
fn update_task_completed_flips_the_flag() {
    let pool = test_pool();

    let stored = queries::create_session_with_tasks(
        &pool,
        &new_session("alice", "2025-05-01", None),
        &[task("one", Some(1))],
    )
    .unwrap();
    let task_id = stored.tasks[0].id;
    assert!(!stored.tasks[0].completed);

    let updated = queries::update_task_completed(&pool, "alice", task_id, true).unwrap();
    assert!(updated.completed);

    let missing = queries::update_task_completed(&pool, "alice", 9999, true);
    assert!(matches!(missing, Err(AppError::UpdateTask(_))));

    // Another owner cannot touch the task.
    let foreign = queries::update_task_completed(&pool, "bob", task_id, false);
    assert!(matches!(foreign, Err(AppError::UpdateTask(_))));
}

#[test]
fn failed_task_insert_leaves_session_persisted() {
    let pool = test_pool();
    pool.conn.execute("DROP TABLE session_tasks", []).unwrap();

    let result = queries::create_session_with_tasks(
        &pool,
        &new_session("alice", "2025-05-01", None),
        &[task("doomed", Some(1))],
    );

    let session_id = match result {
        Err(AppError::TasksFailedSessionPersisted { session_id, .. }) => session_id,
        other => panic!("expected TasksFailedSessionPersisted, got {:?}", other.err()),
    };

    // No rollback: the session row is still there.
    let count: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sessions WHERE id = ?1",
            [session_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn saved_entry_reloads_with_tier_default_and_empty_notes() {
    let pool = test_pool();
    let hub = IdentityHub::new(Some(Identity::new("alice")));
    let mut service = RemoteService::new(pool, hub);

    let draft = EntryDraft {
        date: date("2024-01-01"),
        session_type: SessionType::Red,
        planned_minutes: Some(SessionType::Red.default_minutes()),
        actual_minutes: Some(10),
        tasks_completed: Some(4),
        energy_after: EnergyAfter::Worse,
        notes: String::new(),
        tasks: Vec::new(),
    };

    service.create_entry(&draft).unwrap();
    let entries = service.fetch_entries().unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.planned_minutes, 15);
    assert_eq!(entry.notes, "");
    // tasks_completed is write-only: stored nowhere remotely, always None
    // after a reload.
    assert_eq!(entry.tasks_completed, None);
}

#[test]
fn empty_notes_are_stored_as_null() {
    let pool = test_pool();
    let hub = IdentityHub::new(Some(Identity::new("alice")));
    let mut service = RemoteService::new(pool, hub);

    let mut draft = EntryDraft::default();
    draft.actual_minutes = Some(30);
    draft.notes = String::new();
    service.create_entry(&draft).unwrap();

    let notes: Option<String> = service
        .pool()
        .conn
        .query_row("SELECT notes FROM sessions LIMIT 1", [], |row| row.get(0))
        .unwrap();
    assert_eq!(notes, None);
}

#[test]
fn operations_without_identity_fail_before_touching_the_store() {
    let pool = test_pool();
    let mut service = RemoteService::new(pool, IdentityHub::signed_out());

    assert!(matches!(
        service.fetch_entries(),
        Err(AppError::AuthRequired)
    ));

    let mut draft = EntryDraft::default();
    draft.actual_minutes = Some(30);
    assert!(matches!(
        service.create_entry(&draft),
        Err(AppError::AuthRequired)
    ));

    let count: i64 = service
        .pool()
        .conn
        .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
