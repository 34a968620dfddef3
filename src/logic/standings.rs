//! Standings aggregation: raw match records in, ranked player list out.

use std::collections::HashMap;

use crate::models::{MatchRecord, Player, PlayerId, Standing};
use crate::storage::{StorageError, TournamentStore};

/// Aggregate matches into a ranked standings list, one entry per player.
///
/// Every registered player appears, including players with no matches
/// yet (0 wins, 0 matches) — the equivalent of an outer join, so a
/// fresh registrant is never dropped from standings or pairings.
///
/// A record whose winner or loser id is not in the player set is a
/// dangling reference (a player was cleared out from under it); such
/// records are skipped entirely rather than miscounting or failing.
///
/// Order: wins descending, then name ascending, then id ascending.
/// The id key makes the order fully deterministic even for players
/// with identical names and win counts.
pub fn rank_players(players: &[Player], matches: &[MatchRecord]) -> Vec<Standing> {
    let mut tally: HashMap<PlayerId, (u32, u32)> =
        players.iter().map(|p| (p.id, (0, 0))).collect();

    for m in matches {
        if !tally.contains_key(&m.winner) || !tally.contains_key(&m.loser) {
            continue;
        }
        if let Some((wins, played)) = tally.get_mut(&m.winner) {
            *wins += 1;
            *played += 1;
        }
        // The API rejects self-matches, but a stray record still counts
        // as one played match, not two.
        if m.loser != m.winner {
            if let Some((_, played)) = tally.get_mut(&m.loser) {
                *played += 1;
            }
        }
    }

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|p| {
            let (wins, played) = tally[&p.id];
            Standing {
                id: p.id,
                name: p.name.clone(),
                wins,
                matches: played,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    standings
}

/// Current standings from the store: one consistent snapshot of
/// players and matches, ranked by [`rank_players`]. Storage errors
/// surface unmodified; the computation itself cannot fail.
pub fn player_standings<S: TournamentStore>(store: &S) -> Result<Vec<Standing>, StorageError> {
    let players = store.players()?;
    let matches = store.matches()?;
    Ok(rank_players(&players, &matches))
}
