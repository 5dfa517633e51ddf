//! Integration tests for the entry store's public API

use propboard::{Entry, EntryStore};
use tempfile::tempdir;

fn entry(player: &str) -> Entry {
    Entry {
        player: Some(player.to_string()),
        ..Entry::default()
    }
}

#[test]
fn test_full_pick_lifecycle() {
    let dir = tempdir().unwrap();
    let store = EntryStore::new(dir.path().join("entries.json"));

    // Record two picks.
    let mut first = entry("Josh Allen");
    first.stat_category = Some("passing_yds".to_string());
    first.line_mode = Some("over".to_string());
    first.line_value = Some(250.5);
    store.upsert(first).unwrap();
    store.upsert(entry("Nikola Jokić")).unwrap();

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, Some(0));
    assert_eq!(listed[1].id, Some(1));

    // Correct the first pick in place.
    let mut corrected = entry("Josh Allen");
    corrected.id = Some(0);
    corrected.line_value = Some(260.5);
    let entries = store.upsert(corrected).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].line_value, Some(260.5));

    // Drop the first pick; the second slides down to id 0.
    let entries = store.delete(0).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, Some(0));
    assert_eq!(entries[0].player.as_deref(), Some("Nikola Jokić"));
}

#[test]
fn test_stored_json_is_human_inspectable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");
    let store = EntryStore::new(&path);
    store.upsert(entry("Saquon Barkley")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Saquon Barkley"));
    // Pretty-printed array, one field per line.
    assert!(raw.starts_with("[\n"));

    let parsed: Vec<Entry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn test_absent_fields_are_omitted_from_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");
    let store = EntryStore::new(&path);
    store.upsert(entry("Jalen Hurts")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"player\""));
    assert!(!raw.contains("\"pick\""));
    assert!(!raw.contains("\"multiplier\""));
}

#[test]
fn test_id_set_matches_positions_after_every_mutation() {
    let dir = tempdir().unwrap();
    let store = EntryStore::new(dir.path().join("entries.json"));

    let check = |entries: &[Entry]| {
        for (index, stored) in entries.iter().enumerate() {
            assert_eq!(stored.id, Some(index));
        }
    };

    for name in ["a", "b", "c", "d", "e", "f"] {
        check(&store.upsert(entry(name)).unwrap());
    }
    check(&store.delete(5).unwrap());
    check(&store.delete(0).unwrap());
    check(&store.delete(2).unwrap());
    check(&store.upsert(entry("g")).unwrap());

    let mut out_of_range = entry("h");
    out_of_range.id = Some(100);
    check(&store.upsert(out_of_range).unwrap());
}
