//! JSON-file store: the whole tournament state as one JSON document.
//!
//! The file is the source of truth. It is read once at open and
//! rewritten in full after every mutation; tournaments are small
//! enough that snapshot-per-write beats an append log here.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{MatchId, MatchRecord, Player, PlayerId};
use crate::storage::{StorageError, TournamentStore};

/// On-disk document: records plus the id counters, so ids stay
/// monotonic across restarts and bulk clears.
#[derive(Debug, Serialize, Deserialize)]
struct StoreState {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

/// Durable [`TournamentStore`] backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: StoreState,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing state if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let state = if path.exists() {
            let file = File::open(&path)?;
            serde_json::from_reader(BufReader::new(file))?
        } else {
            StoreState::default()
        };
        Ok(Self { path, state })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from the current state.
    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.state)?;
        Ok(())
    }
}

impl TournamentStore for JsonFileStore {
    fn players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.state.players.clone())
    }

    fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.state.matches.clone())
    }

    fn register_player(&mut self, name: &str) -> Result<Player, StorageError> {
        let player = Player::new(self.state.next_player_id, name);
        self.state.next_player_id += 1;
        self.state.players.push(player.clone());
        self.persist()?;
        Ok(player)
    }

    fn record_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchRecord, StorageError> {
        let record = MatchRecord::new(self.state.next_match_id, winner, loser);
        self.state.next_match_id += 1;
        self.state.matches.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    fn clear_matches(&mut self) -> Result<(), StorageError> {
        self.state.matches.clear();
        self.persist()
    }

    fn clear_players(&mut self) -> Result<(), StorageError> {
        self.state.players.clear();
        self.persist()
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.state.players.len())
    }
}
