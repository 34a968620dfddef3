//! Integration tests for Swiss pairing generation.

use swiss_tournament_web::{
    pair_adjacent, player_standings, swiss_pairings, MemoryStore, TournamentError,
    TournamentStore,
};

fn store_with_players(names: &[&str]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for name in names {
        store.register_player(name).unwrap();
    }
    store
}

#[test]
fn pairs_adjacent_standings_entries() {
    let mut store = store_with_players(&["Alice", "Bob", "Carol", "Dave"]);
    store.record_match(1, 2).unwrap(); // Alice beats Bob
    store.record_match(3, 4).unwrap(); // Carol beats Dave

    let pairings = swiss_pairings(&store).unwrap();

    let rows: Vec<(u32, &str, u32, &str)> = pairings
        .iter()
        .map(|p| {
            (
                p.player1_id,
                p.player1_name.as_str(),
                p.player2_id,
                p.player2_name.as_str(),
            )
        })
        .collect();
    // Winners meet winners, losers meet losers.
    assert_eq!(
        rows,
        vec![(1, "Alice", 3, "Carol"), (2, "Bob", 4, "Dave")]
    );
}

#[test]
fn every_player_appears_in_exactly_one_pair() {
    let names = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let mut store = store_with_players(&names);
    store.record_match(1, 2).unwrap();
    store.record_match(3, 4).unwrap();
    store.record_match(5, 6).unwrap();
    store.record_match(7, 8).unwrap();

    let standings = player_standings(&store).unwrap();
    let pairings = pair_adjacent(&standings).unwrap();

    assert_eq!(pairings.len(), names.len() / 2);
    let mut seen: Vec<u32> = pairings
        .iter()
        .flat_map(|p| [p.player1_id, p.player2_id])
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (1..=8).collect::<Vec<u32>>());

    // Pair i is exactly (standings[2i], standings[2i+1]).
    for (i, p) in pairings.iter().enumerate() {
        assert_eq!(p.player1_id, standings[2 * i].id);
        assert_eq!(p.player2_id, standings[2 * i + 1].id);
    }
}

#[test]
fn odd_player_count_is_an_error() {
    let store = store_with_players(&["A", "B", "C"]);
    match swiss_pairings(&store) {
        Err(TournamentError::OddPlayerCount(3)) => {}
        other => panic!("expected OddPlayerCount(3), got {other:?}"),
    }
}

#[test]
fn no_players_means_no_pairings() {
    let store = MemoryStore::new();
    let pairings = swiss_pairings(&store).unwrap();
    assert!(pairings.is_empty());
}

#[test]
fn fresh_players_pair_in_name_order() {
    let store = store_with_players(&["B", "A"]);
    let pairings = swiss_pairings(&store).unwrap();

    assert_eq!(pairings.len(), 1);
    assert_eq!(pairings[0].player1_name, "A");
    assert_eq!(pairings[0].player2_name, "B");
}
