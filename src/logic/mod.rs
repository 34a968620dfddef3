//! Tournament engine: standings aggregation and Swiss pairing.
//!
//! Pure and stateless; reads go through the injected store, nothing
//! here ever mutates it.

mod pairings;
mod standings;

pub use pairings::{pair_adjacent, swiss_pairings};
pub use standings::{player_standings, rank_players};
