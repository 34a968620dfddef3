//! Derived views: standings entries and next-round pairings.
//!
//! Neither is persisted; both are computed fresh from the stored
//! players and matches on every request.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One row of the ranked standings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    /// Matches this player won.
    pub wins: u32,
    /// Matches this player appeared in, as winner or loser.
    pub matches: u32,
}

/// A next-round matchup between two adjacent players in the standings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    /// Build a pairing from two standings rows (higher-ranked first).
    pub fn from_standings(first: &Standing, second: &Standing) -> Self {
        Self {
            player1_id: first.id,
            player1_name: first.name.clone(),
            player2_id: second.id,
            player2_name: second.name.clone(),
        }
    }
}
