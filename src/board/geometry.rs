//! Fixed grid geometry: which edges and boxes exist.
//!
//! Built once per game from `(rows, columns)` and shared (behind an `Arc`)
//! by every clone of the board, so search clones only copy claim state.
//!
//! ## Edge ordering
//!
//! Edge ids are assigned horizontals first (row by row, left to right),
//! then verticals (row by row, left to right). This is also the order in
//! which open moves are enumerated, which keeps search tie-breaks
//! reproducible.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::edge::{BoxEdges, BoxId, Dot, Edge, EdgeId};

/// Immutable description of a rows×columns dot grid.
#[derive(Debug)]
pub struct Geometry {
    rows: usize,
    columns: usize,
    edges: Vec<Edge>,
    lookup: FxHashMap<Edge, EdgeId>,
    boxes: Vec<BoxEdges>,
    /// Boxes bordered by each edge: one on the boundary, two inside.
    edge_boxes: Vec<SmallVec<[BoxId; 2]>>,
}

impl Geometry {
    /// Generate every edge and box of the grid.
    ///
    /// Grids with fewer than two rows or columns are legal and simply have
    /// no boxes.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut edges = Vec::with_capacity(Self::expected_edges(rows, columns));

        for i in 0..rows {
            for j in 0..columns.saturating_sub(1) {
                let dot = j + i * columns;
                edges.push(Edge::new(dot, dot + 1));
            }
        }

        for i in 0..rows.saturating_sub(1) {
            for j in 0..columns {
                let dot = j + i * columns;
                edges.push(Edge::new(dot, dot + columns));
            }
        }

        let lookup: FxHashMap<Edge, EdgeId> = edges
            .iter()
            .enumerate()
            .map(|(i, &edge)| (edge, EdgeId(i as u32)))
            .collect();

        let mut boxes = Vec::with_capacity(rows.saturating_sub(1) * columns.saturating_sub(1));
        let mut edge_boxes = vec![SmallVec::new(); edges.len()];

        for i in 0..rows.saturating_sub(1) {
            for j in 0..columns.saturating_sub(1) {
                let ul = j + i * columns;
                let ur = ul + 1;
                let bl = ul + columns;
                let br = bl + 1;

                // Every corner pair is adjacent by construction.
                let id = |a: Dot, b: Dot| lookup[&Edge::new(a, b)];
                let sides: BoxEdges = [id(ul, ur), id(ul, bl), id(ur, br), id(bl, br)];

                let box_id = BoxId(boxes.len() as u32);
                for edge_id in sides {
                    edge_boxes[edge_id.index()].push(box_id);
                }
                boxes.push(sides);
            }
        }

        Self {
            rows,
            columns,
            edges,
            lookup,
            boxes,
            edge_boxes,
        }
    }

    /// `rows·(columns-1) + (rows-1)·columns`, saturating for degenerate grids.
    #[must_use]
    pub fn expected_edges(rows: usize, columns: usize) -> usize {
        rows * columns.saturating_sub(1) + rows.saturating_sub(1) * columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.rows * self.columns
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// All edges in id order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The dot pair for an edge id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id.index()]
    }

    /// Look up the id of an edge, or `None` if the dots are not adjacent.
    #[must_use]
    pub fn edge_id(&self, edge: Edge) -> Option<EdgeId> {
        self.lookup.get(&edge).copied()
    }

    /// The four edges of a box in top/left/right/bottom order.
    #[must_use]
    pub fn box_edges(&self, id: BoxId) -> BoxEdges {
        self.boxes[id.index()]
    }

    /// Boxes bordered by an edge.
    #[must_use]
    pub fn boxes_of(&self, id: EdgeId) -> &[BoxId] {
        &self.edge_boxes[id.index()]
    }

    /// The box whose upper-left dot is at `(row, column)`.
    #[must_use]
    pub fn box_at(&self, row: usize, column: usize) -> Option<BoxId> {
        if row + 1 < self.rows && column + 1 < self.columns {
            Some(BoxId((row * (self.columns - 1) + column) as u32))
        } else {
            None
        }
    }
}
