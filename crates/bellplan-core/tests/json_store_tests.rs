use std::fs;

use tempfile::tempdir;

use bellplan_core::schedule::{NewPeriod, PeriodKind, ScheduleConfig};
use bellplan_core::store::{JsonFileStore, ProfileStore, FORMAT_VERSION};
use bellplan_core::ScheduleError;

#[test]
fn test_create_fetch_save_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");

    let mut store = JsonFileStore::create(&path, "Northside Primary").expect("create");
    assert!(path.exists());

    let mut schedule = store.fetch_schedule().expect("fetch");
    assert!(schedule.period_definitions.is_empty());

    schedule.add_period(NewPeriod::new(PeriodKind::Assembly).with_name("Assembly"));
    schedule.add_period(
        NewPeriod::new(PeriodKind::Break)
            .with_name("Lunch")
            .with_duration(30),
    );
    store.save_schedule(&schedule).expect("save");

    // A fresh store over the same file sees the saved schedule.
    let reopened = JsonFileStore::open(&path);
    let fetched = reopened.fetch_schedule().expect("fetch");
    assert_eq!(fetched.period_definitions.len(), 2);
    assert_eq!(fetched.period_definitions[1].name, "Lunch");
}

#[test]
fn test_missing_file_fetches_empty_default() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::open(&dir.path().join("absent.json"));

    let schedule = store.fetch_schedule().expect("fetch");
    assert!(schedule.period_definitions.is_empty());
    assert_eq!(schedule, ScheduleConfig::default());
}

#[test]
fn test_save_rejects_duplicate_names() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    let mut store = JsonFileStore::create(&path, "Northside Primary").expect("create");

    let mut schedule = store.fetch_schedule().expect("fetch");
    schedule.add_period(NewPeriod::new(PeriodKind::Class).with_name("Period 1"));
    schedule.add_period(NewPeriod::new(PeriodKind::Class).with_name("Period 1"));

    let result = store.save_schedule(&schedule);
    assert!(matches!(result, Err(ScheduleError::DuplicateNames(_))));

    // The rejected config never reached the file.
    let fetched = JsonFileStore::open(&path).fetch_schedule().expect("fetch");
    assert!(fetched.period_definitions.is_empty());
}

#[test]
fn test_save_derives_break_list() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    let mut store = JsonFileStore::create(&path, "Northside Primary").expect("create");

    let mut schedule = store.fetch_schedule().expect("fetch");
    schedule.add_period(NewPeriod::new(PeriodKind::Class).with_name("Math"));
    schedule.add_period(
        NewPeriod::new(PeriodKind::Break)
            .with_name("Recess")
            .with_duration(15),
    );

    let canonical = store.save_schedule(&schedule).expect("save");
    assert_eq!(canonical.break_periods.len(), 1);
    assert_eq!(canonical.break_periods[0].name, "Recess");
    assert_eq!(canonical.break_periods[0].period, 2);

    let document = store.read_document().expect("read").expect("document");
    assert_eq!(document.schedule.break_periods, canonical.break_periods);
}

#[test]
fn test_save_preserves_meta_and_bumps_last_modified() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    let mut store = JsonFileStore::create(&path, "Northside Primary").expect("create");

    let created = store.read_document().expect("read").expect("document");
    let mut schedule = store.fetch_schedule().expect("fetch");
    schedule.add_period(NewPeriod::new(PeriodKind::Class));
    store.save_schedule(&schedule).expect("save");

    let saved = store.read_document().expect("read").expect("document");
    assert_eq!(saved.meta.school_id, created.meta.school_id);
    assert_eq!(saved.meta.school_name, "Northside Primary");
    assert_eq!(saved.meta.format_version, FORMAT_VERSION);
    assert_eq!(saved.meta.created_at, created.meta.created_at);
    assert!(saved.meta.last_modified >= created.meta.last_modified);
}

#[test]
fn test_saved_file_is_parseable_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    let mut store = JsonFileStore::create(&path, "Northside Primary").expect("create");

    let mut schedule = store.fetch_schedule().expect("fetch");
    schedule.add_period(NewPeriod::new(PeriodKind::Class).with_name("Math"));
    store.save_schedule(&schedule).expect("save");
    store.save_schedule(&schedule).expect("second save");

    let contents = fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("parse");
    assert_eq!(value["schedule"]["period_definitions"][0]["name"], "Math");
    assert_eq!(value["schedule"]["day_start_time"], "08:00");

    // No temp file left behind after the atomic replace.
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_malformed_document_is_a_validation_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    fs::write(&path, "{ not json").expect("write");

    let store = JsonFileStore::open(&path);
    let result = store.fetch_schedule();
    assert!(matches!(result, Err(ScheduleError::Validation(_))));
}
