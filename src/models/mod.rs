//! Data structures for the tournament: players, match records, derived views.

mod error;
mod game;
mod player;
mod standings;

pub use error::TournamentError;
pub use game::{MatchId, MatchRecord};
pub use player::{Player, PlayerId};
pub use standings::{Pairing, Standing};
