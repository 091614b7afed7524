//! Depth-limited minimax for the automated player.
//!
//! ## Overview
//!
//! - The depth is chosen per move so that roughly `node_budget` leaves are
//!   scored, whatever the board size (see [`search_depth`]).
//! - Positions are scored by raw box margin; there is no heuristic.
//! - By default the mover alternates every ply inside the tree, even after
//!   a box is completed. [`TurnModel::ExtraTurn`] grants the simulated extra
//!   turn instead.
//!
//! ## Usage
//!
//! ```rust
//! use dots_and_boxes::board::BoardState;
//! use dots_and_boxes::core::PlayerId;
//! use dots_and_boxes::search::{MinimaxSearch, SearchConfig};
//!
//! let mut board = BoardState::new(3, 3);
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_node_budget(500));
//!
//! let outcome = search.play_move(&mut board, PlayerId::A).unwrap();
//! assert_eq!(board.open_move_count(), board.edge_count() - 1);
//! println!("played {} after {} nodes", outcome.edge, search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::{SearchConfig, TurnModel};
pub use minimax::{search_depth, MinimaxSearch};
pub use stats::SearchStats;
