//! Move application and box-completion scoring.
//!
//! [`BoardState::apply_move`] is the only way a board changes. A move is
//! either rejected with no side effects, or it claims one edge and awards
//! every box that edge closes to the mover. Ownership is decided exactly
//! once, at the moment the fourth side is drawn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::edge::{BoxId, Edge};
use super::state::BoardState;
use crate::core::{MoveError, PlayerId};

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The edge that was claimed (normalized).
    pub edge: Edge,
    /// Boxes closed by this move: at most the two the edge borders.
    pub completed: SmallVec<[BoxId; 2]>,
}

impl MoveOutcome {
    /// Number of boxes this move completed.
    #[must_use]
    pub fn boxes_completed(&self) -> usize {
        self.completed.len()
    }

    /// Whether the mover earns another turn.
    #[must_use]
    pub fn scored(&self) -> bool {
        !self.completed.is_empty()
    }
}

impl BoardState {
    /// Claim `edge` for `player`.
    ///
    /// ## Errors
    ///
    /// - [`MoveError::InvalidEdge`] if the dots are not adjacent on this grid
    /// - [`MoveError::AlreadyClaimed`] if the edge was drawn before
    ///
    /// On error the board is unchanged.
    pub fn apply_move(&mut self, edge: Edge, player: PlayerId) -> Result<MoveOutcome, MoveError> {
        let id = self.geometry.edge_id(edge).ok_or(MoveError::InvalidEdge {
            a: edge.low(),
            b: edge.high(),
        })?;

        if self.claimed[id.index()] {
            return Err(MoveError::AlreadyClaimed { edge });
        }
        self.claimed.set(id.index(), true);

        // Only boxes bordering the new edge can have just been closed.
        let mut completed = SmallVec::new();
        for &box_id in self.geometry.boxes_of(id) {
            if self.owners[box_id.index()].is_some() {
                continue;
            }
            let closed = self
                .geometry
                .box_edges(box_id)
                .iter()
                .all(|side| self.claimed[side.index()]);
            if closed {
                self.owners.set(box_id.index(), Some(player));
                completed.push(box_id);
            }
        }

        self.scores[player] += completed.len() as u32;

        Ok(MoveOutcome { edge, completed })
    }

    /// Claim the edge between two raw dot indices, in either order.
    pub fn apply_dots(&mut self, a: usize, b: usize, player: PlayerId) -> Result<MoveOutcome, MoveError> {
        self.apply_move(Edge::new(a, b), player).map_err(|err| match err {
            MoveError::InvalidEdge { .. } => MoveError::InvalidEdge { a, b },
            other => other,
        })
    }
}
