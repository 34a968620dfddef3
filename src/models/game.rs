//! Match record: the outcome of one concluded match.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match record (storage-assigned, monotonic).
pub type MatchId = u32;

/// The recorded outcome of a single match.
///
/// Reported exactly once, after the match concludes. There are no draws:
/// every match has exactly one winner and one loser. Records are
/// append-only; the only delete is the bulk clear.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    /// Id of the winning player.
    pub winner: PlayerId,
    /// Id of the losing player.
    pub loser: PlayerId,
    /// When the outcome was reported. Informational only; never used for ranking.
    pub reported_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(id: MatchId, winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id,
            winner,
            loser,
            reported_at: Utc::now(),
        }
    }
}
