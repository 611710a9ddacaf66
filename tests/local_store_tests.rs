use chrono::NaiveDate;
use focuslog::models::{EnergyAfter, SessionEntry, SessionType};
use focuslog::store::LocalStore;
use std::fs;

mod common;
use common::setup_entries_file;

fn entry(id: i64, date: &str, notes: &str) -> SessionEntry {
    SessionEntry {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        session_type: SessionType::Yellow,
        planned_minutes: 45,
        actual_minutes: 50,
        tasks_completed: Some(3),
        energy_after: EnergyAfter::Same,
        notes: notes.to_string(),
    }
}

#[test]
fn save_then_load_round_trips() {
    let path = setup_entries_file("local_round_trip");
    let store = LocalStore::new(&path);

    let entries = vec![
        entry(2, "2025-03-02", "deep work"),
        entry(1, "2025-03-01", ""),
    ];

    store.save(&entries).unwrap();
    assert_eq!(store.load(), entries);
}

#[test]
fn load_of_absent_file_is_empty() {
    let path = setup_entries_file("local_absent");
    let store = LocalStore::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn load_of_malformed_payload_is_empty() {
    let path = setup_entries_file("local_malformed");
    fs::write(&path, "this is not json").unwrap();
    assert!(LocalStore::new(&path).load().is_empty());
}

#[test]
fn load_of_non_array_payload_is_empty() {
    let path = setup_entries_file("local_non_array");
    fs::write(&path, r#"{"id": 1}"#).unwrap();
    assert!(LocalStore::new(&path).load().is_empty());
}

#[test]
fn save_overwrites_prior_content() {
    let path = setup_entries_file("local_overwrite");
    let store = LocalStore::new(&path);

    store.save(&[entry(1, "2025-03-01", "")]).unwrap();
    store.save(&[entry(7, "2025-04-01", "only one")]).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 7);
}

#[test]
fn next_id_is_max_plus_one() {
    assert_eq!(LocalStore::next_id(&[]), 1);
    let entries = vec![entry(3, "2025-03-01", ""), entry(9, "2025-03-02", "")];
    assert_eq!(LocalStore::next_id(&entries), 10);
}

#[test]
fn camel_case_field_names_on_disk() {
    let path = setup_entries_file("local_field_names");
    let store = LocalStore::new(&path);
    store.save(&[entry(1, "2025-03-01", "n")]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"sessionType\""));
    assert!(raw.contains("\"plannedMinutes\""));
    assert!(raw.contains("\"actualMinutes\""));
    assert!(raw.contains("\"tasksCompleted\""));
    assert!(raw.contains("\"energyAfter\""));
}
