//! End-to-end sessions driven through the menu against an on-disk database.

use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};
use worklog::console::ScriptedConsole;
use worklog::ops::{run_results, search, SearchMode};
use worklog::{Database, Entry, EntryRepository, MenuController, NewEntry};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn open_db(dir: &TempDir) -> Database {
    let db = Database::open(&dir.path().join("work_log.db")).unwrap();
    db.initialize_schema().unwrap();
    db
}

fn add(db: &mut Database, name: &str, title: &str, d: &str, time: i64, notes: &str) -> Entry {
    db.create(NewEntry {
        name: name.to_string(),
        title: title.to_string(),
        date: date(d),
        time,
        notes: notes.to_string(),
    })
    .unwrap()
}

fn run_search(db: &mut Database, mode: SearchMode, inputs: &[&str]) -> (Vec<Entry>, ScriptedConsole) {
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    let results = search(mode, &mut console, &*db).unwrap();
    (results, console)
}

#[test]
fn test_time_search_exact_match_only() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let entry = add(
        &mut db,
        "Redha Achour",
        "Project 4",
        "2017-12-17",
        45,
        "work log using database",
    );

    let (results, _) = run_search(&mut db, SearchMode::Time, &["45"]);
    assert_eq!(results, vec![entry]);

    let (results, _) = run_search(&mut db, SearchMode::Time, &["46"]);
    assert!(results.is_empty());
}

#[test]
fn test_date_range_is_inclusive_and_newest_first() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let first = add(&mut db, "Ann", "a", "2017-12-01", 10, "");
    let middle = add(&mut db, "Ann", "b", "2017-12-15", 10, "");
    let last = add(&mut db, "Ann", "c", "2017-12-31", 10, "");
    add(&mut db, "Ann", "d", "2018-01-01", 10, "");
    add(&mut db, "Ann", "e", "2017-11-30", 10, "");

    let (results, _) = run_search(&mut db, SearchMode::DateRange, &["2017-12-01", "2017-12-31"]);

    assert_eq!(results, vec![last, middle, first]);
}

#[test]
fn test_reversed_date_range_is_asked_again() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let entry = add(&mut db, "Ann", "a", "2017-12-10", 10, "");

    let (results, console) = run_search(
        &mut db,
        SearchMode::DateRange,
        &["2017-12-31", "2017-12-01", "2017-12-01", "2017-12-31"],
    );

    assert_eq!(results, vec![entry]);
    assert!(console
        .output()
        .contains("The first date must not be after the second one."));
    assert_eq!(console.remaining(), 0);
}

#[test]
fn test_term_search_is_case_sensitive_over_title_and_notes() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let in_title = add(&mut db, "Ann", "Database work", "2017-12-02", 10, "");
    let in_notes = add(&mut db, "Bob", "Cleanup", "2017-12-01", 10, "moved the Database");
    add(&mut db, "Cy", "lowercase database", "2017-12-03", 10, "");

    let (results, _) = run_search(&mut db, SearchMode::Term, &["Database"]);

    assert_eq!(results, vec![in_title, in_notes]);
}

#[test]
fn test_name_search_narrows_then_matches_exactly() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let redha = add(&mut db, "Redha Achour", "a", "2017-12-01", 10, "");
    add(&mut db, "Redha Smith", "b", "2017-12-02", 10, "");
    add(&mut db, "Ann", "c", "2017-12-03", 10, "");

    let (results, console) = run_search(&mut db, SearchMode::Name, &["Redha", "Redha Achour"]);

    assert_eq!(results, vec![redha]);
    let out = console.output();
    let matches = out
        .split("There is a list of possible matches:")
        .nth(1)
        .unwrap();
    assert!(matches.contains("Redha Smith"));
    assert!(!matches.contains("Ann"));
}

#[test]
fn test_exact_date_search() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let a = add(&mut db, "Ann", "a", "2017-12-17", 10, "");
    let b = add(&mut db, "Bob", "b", "2017-12-17", 20, "");
    add(&mut db, "Cy", "c", "2017-12-18", 30, "");

    let (results, console) = run_search(&mut db, SearchMode::Date, &["2017-12-17"]);

    assert_eq!(results, vec![b, a]);
    assert_eq!(console.output().matches("2017-12-18").count(), 1);
}

#[test]
fn test_paging_and_back_leave_store_untouched() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    add(&mut db, "Ann", "older", "2017-12-01", 30, "");
    add(&mut db, "Ann", "newer", "2017-12-02", 30, "");
    let results = db.all().unwrap();

    let mut console = ScriptedConsole::new(["n", "p", "n", "b"]);
    run_results(&mut console, &mut db, results.clone()).unwrap();

    assert_eq!(db.all().unwrap(), results);
    assert_eq!(console.output().matches("Result 2 of 2").count(), 2);
}

#[test]
fn test_session_edit_survives_reopen() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    add(
        &mut db,
        "Redha Achour",
        "Project 4",
        "2017-12-17",
        45,
        "work log using database",
    );

    let mut menu = MenuController::new(
        ScriptedConsole::new(["2", "2", "45", "e", "2", "120", "", "6", "3"]),
        db,
    );
    menu.run().unwrap();
    drop(menu);

    let reopened = open_db(&dir);
    let stored = reopened.all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].time, 120);
    assert_eq!(stored[0].title, "Project 4");
    assert_eq!(stored[0].date, date("2017-12-17"));
}

#[test]
fn test_empty_name_is_accepted() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);

    let mut menu = MenuController::new(
        ScriptedConsole::new(["1", "", "untitled", "2017-12-17", "5", "", "", "3"]),
        db,
    );
    menu.run().unwrap();

    let stored = menu.repository().all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "");
}

#[test]
fn test_range_bounds_need_four_digit_years() {
    let dir = tempdir().unwrap();
    let mut db = open_db(&dir);
    let entry = add(&mut db, "Ann", "a", "2017-12-10", 10, "");

    let (results, console) = run_search(
        &mut db,
        SearchMode::DateRange,
        &["-0001-01-01", "17-12-01", "2017-12-01", "2017-12-31"],
    );

    assert_eq!(results, vec![entry]);
    assert_eq!(console.output().matches("Wrong format. Try again.").count(), 2);
    assert_eq!(console.remaining(), 0);
}
