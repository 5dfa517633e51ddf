use super::*;
use tempfile::tempdir;

fn test_store(dir: &tempfile::TempDir) -> EntryStore {
    EntryStore::new(dir.path().join("entries.json"))
}

fn named_entry(player: &str) -> Entry {
    Entry {
        player: Some(player.to_string()),
        ..Entry::default()
    }
}

fn ids(entries: &[Entry]) -> Vec<usize> {
    entries.iter().map(|e| e.id.unwrap()).collect()
}

#[test]
fn test_missing_file_reads_empty() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);
    assert!(store.list().is_empty());
}

#[test]
fn test_corrupt_file_reads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");
    std::fs::write(&path, "not json {").unwrap();

    let store = EntryStore::new(path);
    assert!(store.list().is_empty());
}

#[test]
fn test_append_assigns_next_id() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);

    let entries = store.upsert(named_entry("Josh Allen")).unwrap();
    assert_eq!(ids(&entries), vec![0]);

    let entries = store.upsert(named_entry("Saquon Barkley")).unwrap();
    assert_eq!(ids(&entries), vec![0, 1]);
    assert_eq!(entries[1].player.as_deref(), Some("Saquon Barkley"));
}

#[test]
fn test_upsert_with_valid_id_replaces_in_place() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);
    store.upsert(named_entry("Josh Allen")).unwrap();
    store.upsert(named_entry("Saquon Barkley")).unwrap();

    let mut replacement = named_entry("Patrick Mahomes");
    replacement.id = Some(0);
    let entries = store.upsert(replacement).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].player.as_deref(), Some("Patrick Mahomes"));
    assert_eq!(entries[1].player.as_deref(), Some("Saquon Barkley"));
    assert_eq!(ids(&entries), vec![0, 1]);
}

#[test]
fn test_upsert_with_out_of_range_id_appends() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);
    store.upsert(named_entry("Josh Allen")).unwrap();

    let mut stray = named_entry("Travis Kelce");
    stray.id = Some(99);
    let entries = store.upsert(stray).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].id, Some(1));
    assert_eq!(entries[1].player.as_deref(), Some("Travis Kelce"));
}

#[test]
fn test_delete_renumbers_later_entries() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);
    for name in ["a", "b", "c", "d"] {
        store.upsert(named_entry(name)).unwrap();
    }

    let entries = store.delete(1).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(ids(&entries), vec![0, 1, 2]);
    assert_eq!(entries[0].player.as_deref(), Some("a"));
    assert_eq!(entries[1].player.as_deref(), Some("c"));
    assert_eq!(entries[2].player.as_deref(), Some("d"));
}

#[test]
fn test_delete_out_of_range_is_a_noop() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);
    store.upsert(named_entry("a")).unwrap();

    let entries = store.delete(5).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(ids(&entries), vec![0]);
}

#[test]
fn test_ids_stay_contiguous_across_mixed_operations() {
    let dir = tempdir().unwrap();
    let store = test_store(&dir);

    for name in ["a", "b", "c", "d", "e"] {
        store.upsert(named_entry(name)).unwrap();
    }
    store.delete(0).unwrap();
    store.delete(2).unwrap();
    store.upsert(named_entry("f")).unwrap();
    let mut replace = named_entry("g");
    replace.id = Some(1);
    let entries = store.upsert(replace).unwrap();

    let expected: Vec<usize> = (0..entries.len()).collect();
    assert_eq!(ids(&entries), expected);
}

#[test]
fn test_entries_persist_across_store_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("entries.json");

    let store = EntryStore::new(&path);
    let mut entry = named_entry("Josh Allen");
    entry.line_value = Some(250.5);
    entry.line_mode = Some("over".to_string());
    store.upsert(entry).unwrap();

    let reopened = EntryStore::new(&path);
    let entries = reopened.list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].line_value, Some(250.5));
    assert_eq!(entries[0].line_mode.as_deref(), Some("over"));
}

#[test]
fn test_unknown_fields_are_dropped() {
    let raw = r#"{"player": "Jose Ramirez", "parlay_leg": 3}"#;
    let entry: Entry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.player.as_deref(), Some("Jose Ramirez"));
    assert_eq!(entry.id, None);
}
