//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player. Assigned by the storage layer:
/// monotonically increasing, never reused (not even after a bulk clear).
pub type PlayerId = u32;

/// A registered player.
///
/// Names are free text and need not be unique; the id is the identity.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
