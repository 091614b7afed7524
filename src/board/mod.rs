//! Board representation and the move engine.
//!
//! - `edge`: dot pairs and dense edge/box ids
//! - `geometry`: the fixed edge and box sets of a grid
//! - `state`: `BoardState`, claim status, owners, scores
//! - `moves`: `BoardState::apply_move`, the only mutation
//! - `render`: plain-text drawing

pub mod edge;
pub mod geometry;
pub mod moves;
mod render;
pub mod state;

pub use edge::{BoxEdges, BoxId, Dot, Edge, EdgeId};
pub use geometry::Geometry;
pub use moves::MoveOutcome;
pub use state::BoardState;
