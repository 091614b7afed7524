//! Game orchestration.
//!
//! - `config`: `GameConfig`, building a game and tossing for first move
//! - `controller`: `TurnController`, alternation and the extra-turn rule
//! - `result`: `GameResult`

pub mod config;
pub mod controller;
pub mod result;

pub use config::{GameConfig, Opening};
pub use controller::{MoveRecord, TurnController, TurnError, TurnState};
pub use result::GameResult;
