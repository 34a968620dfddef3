//! Swiss-system tournament web app: library with models, storage, and pairing logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{pair_adjacent, player_standings, rank_players, swiss_pairings};
pub use models::{
    MatchId, MatchRecord, Pairing, Player, PlayerId, Standing, TournamentError,
};
pub use storage::{JsonFileStore, MemoryStore, StorageError, TournamentStore};
