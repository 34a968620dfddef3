//! Storage layer: the durable record of players and match outcomes.
//!
//! The engine never talks to a concrete backend; it takes a
//! [`TournamentStore`] capability. Two backends exist:
//! - [`MemoryStore`]: plain in-memory vectors (tests, ephemeral runs)
//! - [`JsonFileStore`]: whole-state JSON document on disk

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{MatchRecord, Player, PlayerId};
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Repository contract for tournament records.
///
/// Identity assignment belongs to the store: player and match ids are
/// monotonically increasing and never reused, even across bulk clears.
/// Each read returns one internally consistent snapshot.
///
/// The store does not enforce referential integrity on match records;
/// callers validate player ids before reporting, and the standings
/// aggregation skips any record whose ids dangle.
pub trait TournamentStore {
    /// All registered players.
    fn players(&self) -> Result<Vec<Player>, StorageError>;

    /// All recorded match outcomes.
    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError>;

    /// Register a player; the store assigns the id.
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError>;

    /// Record the outcome of one concluded match. Append-only.
    fn record_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchRecord, StorageError>;

    /// Remove all match records unconditionally.
    fn clear_matches(&mut self) -> Result<(), StorageError>;

    /// Remove all player records unconditionally.
    fn clear_players(&mut self) -> Result<(), StorageError>;

    /// Number of registered players.
    fn count_players(&self) -> Result<usize, StorageError>;
}
