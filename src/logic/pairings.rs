//! Swiss pairing: adjacent pairs from the ranked standings.

use crate::logic::standings::player_standings;
use crate::models::{Pairing, Standing, TournamentError};
use crate::storage::TournamentStore;

/// Partition a ranked standings list into adjacent, non-overlapping
/// pairs: (1st, 2nd), (3rd, 4th), and so on. Pairing neighbours in
/// the standings is the standard Swiss heuristic: everyone meets an
/// opponent with an equal or nearly-equal record.
///
/// An odd player count is a hard error rather than silently dropping
/// the last-ranked player.
pub fn pair_adjacent(standings: &[Standing]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }
    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_standings(&pair[0], &pair[1]))
        .collect())
}

/// Next-round pairings for the current state of the store.
pub fn swiss_pairings<S: TournamentStore>(store: &S) -> Result<Vec<Pairing>, TournamentError> {
    let standings = player_standings(store)?;
    pair_adjacent(&standings)
}
