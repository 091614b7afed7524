//! Move rejection errors.
//!
//! A rejected move never mutates the board. Callers either retry
//! (interactive input) or treat the rejection as impossible (search,
//! which only proposes open edges).

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::board::Edge;

/// Why a move was rejected by [`BoardState::apply_move`](crate::board::BoardState::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The pair of dots does not name an edge of this board.
    #[display("{} {} is not an edge on this board", a, b)]
    InvalidEdge {
        /// First dot as supplied.
        a: usize,
        /// Second dot as supplied.
        b: usize,
    },

    /// The edge exists but has already been drawn.
    #[display("edge {} is already claimed", edge)]
    AlreadyClaimed {
        /// The normalized edge.
        edge: Edge,
    },
}
