//! Board state: claimed edges, box owners, scores.
//!
//! `BoardState` is the single source of truth for a game. It is mutated
//! only through [`BoardState::apply_move`](super::moves); everything else
//! here is a read-only query.
//!
//! ## Cloning
//!
//! The search clones the board once per explored node. Geometry is shared
//! through an `Arc`, and claim/owner tables use `im` persistent vectors,
//! so a clone is cheap and never aliases mutable state with its parent.
//!
//! ## Invariants
//!
//! - `score(A) + score(B) == owned_box_count()`
//! - claims and owners only ever go from unset to set
//! - `is_over()` iff every box is owned

use std::sync::Arc;

use im::Vector;
use tracing::instrument;

use super::edge::{BoxId, Edge, EdgeId};
use super::geometry::Geometry;
use crate::core::{PlayerId, PlayerMap};

/// Mutable state of one game on a fixed grid.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub(super) geometry: Arc<Geometry>,
    pub(super) claimed: Vector<bool>,
    pub(super) owners: Vector<Option<PlayerId>>,
    pub(super) scores: PlayerMap<u32>,
}

impl BoardState {
    /// Create an empty board with `rows × columns` dots.
    #[instrument(level = "debug")]
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        let geometry = Geometry::new(rows, columns);
        let claimed = std::iter::repeat(false).take(geometry.edge_count()).collect();
        let owners = std::iter::repeat(None).take(geometry.box_count()).collect();

        Self {
            geometry: Arc::new(geometry),
            claimed,
            owners,
            scores: PlayerMap::default(),
        }
    }

    /// The fixed grid this board is played on.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.geometry.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.geometry.columns()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.geometry.edge_count()
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.geometry.box_count()
    }

    // === Edges ===

    /// Whether the edge with this id has been drawn.
    #[must_use]
    pub fn is_claimed(&self, id: EdgeId) -> bool {
        self.claimed[id.index()]
    }

    /// Claim status of an arbitrary dot pair; `None` if it is not an edge.
    #[must_use]
    pub fn edge_status(&self, edge: Edge) -> Option<bool> {
        self.geometry.edge_id(edge).map(|id| self.is_claimed(id))
    }

    /// All unclaimed edges, in edge-id order.
    #[must_use]
    pub fn open_moves(&self) -> Vec<Edge> {
        self.geometry
            .edges()
            .iter()
            .zip(self.claimed.iter())
            .filter(|(_, claimed)| !**claimed)
            .map(|(&edge, _)| edge)
            .collect()
    }

    /// Number of unclaimed edges.
    #[must_use]
    pub fn open_move_count(&self) -> usize {
        self.claimed.iter().filter(|&&claimed| !claimed).count()
    }

    // === Boxes ===

    /// Owner of a box, or `None` while any side is still open.
    #[must_use]
    pub fn owner(&self, id: BoxId) -> Option<PlayerId> {
        self.owners[id.index()]
    }

    /// Owner of the box whose upper-left dot is at `(row, column)`.
    #[must_use]
    pub fn owner_at(&self, row: usize, column: usize) -> Option<PlayerId> {
        self.geometry.box_at(row, column).and_then(|id| self.owner(id))
    }

    /// Number of boxes with an owner.
    #[must_use]
    pub fn owned_box_count(&self) -> usize {
        self.owners.iter().filter(|owner| owner.is_some()).count()
    }

    // === Scores ===

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.scores
    }

    /// `score(A) - score(B)`.
    #[must_use]
    pub fn margin(&self) -> i32 {
        self.scores[PlayerId::A] as i32 - self.scores[PlayerId::B] as i32
    }

    /// True once every box has been completed.
    ///
    /// Defined on box completion rather than edge exhaustion, so a board
    /// without boxes is over before any move.
    #[must_use]
    pub fn is_over(&self) -> bool {
        (self.scores[PlayerId::A] + self.scores[PlayerId::B]) as usize == self.box_count()
    }
}
