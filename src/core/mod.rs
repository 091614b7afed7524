//! Core engine types: players, RNG, errors.
//!
//! Everything here is independent of board geometry.

pub mod error;
pub mod player;
pub mod rng;

pub use error::MoveError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
