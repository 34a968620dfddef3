//! TournamentError: domain errors for registration, reporting, and pairing.

use crate::models::player::PlayerId;
use crate::storage::StorageError;

/// Errors that can occur during tournament operations.
#[derive(Debug)]
pub enum TournamentError {
    /// Player name is empty (or whitespace only).
    BlankPlayerName,
    /// A reported match references a player id that is not registered.
    PlayerNotFound(PlayerId),
    /// A match cannot have the same player as winner and loser.
    SelfMatch(PlayerId),
    /// Pairings require an even number of registered players.
    OddPlayerCount(usize),
    /// The storage layer failed; surfaced unmodified.
    Storage(StorageError),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::BlankPlayerName => write!(f, "Player name must not be blank"),
            TournamentError::PlayerNotFound(id) => write!(f, "No player with id {}", id),
            TournamentError::SelfMatch(id) => {
                write!(f, "Player {} cannot be both winner and loser", id)
            }
            TournamentError::OddPlayerCount(n) => {
                write!(f, "Cannot pair an odd number of players ({})", n)
            }
            TournamentError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<StorageError> for TournamentError {
    fn from(e: StorageError) -> Self {
        TournamentError::Storage(e)
    }
}
