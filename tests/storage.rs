//! Integration tests for the storage backends.

use swiss_tournament_web::{JsonFileStore, MemoryStore, TournamentStore};

#[test]
fn memory_store_assigns_monotonic_ids() {
    let mut store = MemoryStore::new();
    let a = store.register_player("Alice").unwrap();
    let b = store.register_player("Bob").unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);

    let m1 = store.record_match(a.id, b.id).unwrap();
    let m2 = store.record_match(b.id, a.id).unwrap();
    assert_eq!(m1.id, 1);
    assert_eq!(m2.id, 2);
}

#[test]
fn ids_are_not_reused_after_clear() {
    let mut store = MemoryStore::new();
    store.register_player("Alice").unwrap();
    store.clear_players().unwrap();
    let b = store.register_player("Bob").unwrap();
    assert_eq!(b.id, 2);
}

#[test]
fn clear_matches_leaves_players_alone() {
    let mut store = MemoryStore::new();
    let a = store.register_player("Alice").unwrap();
    let b = store.register_player("Bob").unwrap();
    store.record_match(a.id, b.id).unwrap();

    store.clear_matches().unwrap();

    assert!(store.matches().unwrap().is_empty());
    assert_eq!(store.count_players().unwrap(), 2);
}

#[test]
fn clear_players_leaves_matches_alone() {
    // Deletes can arrive out of order; the engine copes with the
    // dangling records, storage just stores what it is told.
    let mut store = MemoryStore::new();
    let a = store.register_player("Alice").unwrap();
    let b = store.register_player("Bob").unwrap();
    store.record_match(a.id, b.id).unwrap();

    store.clear_players().unwrap();

    assert_eq!(store.count_players().unwrap(), 0);
    assert_eq!(store.matches().unwrap().len(), 1);
}

#[test]
fn count_players_tracks_registration() {
    let mut store = MemoryStore::new();
    assert_eq!(store.count_players().unwrap(), 0);
    store.register_player("Alice").unwrap();
    store.register_player("Bob").unwrap();
    assert_eq!(store.count_players().unwrap(), 2);
    store.clear_players().unwrap();
    assert_eq!(store.count_players().unwrap(), 0);
}

#[test]
fn json_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournament.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        let a = store.register_player("Alice").unwrap();
        let b = store.register_player("Bob").unwrap();
        store.record_match(a.id, b.id).unwrap();
    }

    let reopened = JsonFileStore::open(&path).unwrap();
    let players = reopened.players().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Alice");
    let matches = reopened.matches().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].winner, matches[0].loser), (1, 2));
}

#[test]
fn json_store_keeps_counters_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournament.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.register_player("Alice").unwrap();
        store.clear_players().unwrap();
    }

    let mut reopened = JsonFileStore::open(&path).unwrap();
    let b = reopened.register_player("Bob").unwrap();
    assert_eq!(b.id, 2);
}

#[test]
fn json_store_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("tournament.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.register_player("Alice").unwrap();

    assert!(path.exists());
}

#[test]
fn fresh_json_store_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("missing.json")).unwrap();
    assert_eq!(store.count_players().unwrap(), 0);
    assert!(store.matches().unwrap().is_empty());
}
