//! In-memory store: vectors plus id counters. No durability.

use crate::models::{MatchId, MatchRecord, Player, PlayerId};
use crate::storage::{StorageError, TournamentStore};

/// In-memory [`TournamentStore`]. The default backend for tests and
/// for running the server without a data file.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentStore for MemoryStore {
    fn players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.players.clone())
    }

    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.matches.clone())
    }

    fn register_player(&mut self, name: &str) -> Result<Player, StorageError> {
        let player = Player::new(self.next_player_id, name);
        self.next_player_id += 1;
        self.players.push(player.clone());
        Ok(player)
    }

    fn record_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchRecord, StorageError> {
        let record = MatchRecord::new(self.next_match_id, winner, loser);
        self.next_match_id += 1;
        self.matches.push(record.clone());
        Ok(record)
    }

    fn clear_matches(&mut self) -> Result<(), StorageError> {
        // Counters are deliberately left alone: ids are never reused.
        self.matches.clear();
        Ok(())
    }

    fn clear_players(&mut self) -> Result<(), StorageError> {
        self.players.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.players.len())
    }
}
