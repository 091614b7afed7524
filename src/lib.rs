//! # dots-and-boxes
//!
//! A Dots and Boxes engine with a depth-limited minimax opponent.
//!
//! ## Design Principles
//!
//! 1. **Edges by id**: Dots are numbered row-major from 0. Every edge and
//!    box gets a dense id at board construction, so moves never scan the
//!    whole board.
//!
//! 2. **Cheap clones**: Claimed flags and box owners live in `im-rs`
//!    vectors and the geometry is shared, so search can clone a position
//!    per node.
//!
//! 3. **Selection is not application**: Players only pick an edge. The
//!    turn controller applies it and decides who moves next.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, move errors
//! - `board`: Geometry, board state, move application, rendering
//! - `search`: Depth-limited minimax
//! - `players`: Human and search participants
//! - `game`: Turn controller, game setup, results
//! - `console`: Terminal prompts and input parsing

pub mod core;
pub mod board;
pub mod search;
pub mod players;
pub mod game;
pub mod console;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MoveError, PlayerId, PlayerMap};

pub use crate::board::{BoardState, BoxId, Dot, Edge, EdgeId, Geometry, MoveOutcome};

pub use crate::search::{search_depth, MinimaxSearch, SearchConfig, SearchStats, TurnModel};

pub use crate::players::{MoveSource, Player, PlayerKind, ScriptedMoves};

pub use crate::game::{GameConfig, GameResult, MoveRecord, Opening, TurnController, TurnError, TurnState};

pub use crate::console::{Console, ConsoleSource, InputError};
