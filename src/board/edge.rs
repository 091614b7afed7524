//! Edge and box identifiers.
//!
//! Dots are plain `usize` indices in row-major order and are never
//! materialized. An [`Edge`] names a pair of dots and is always stored
//! normalized (`low <= high`). Edges and boxes also carry dense ids
//! ([`EdgeId`], [`BoxId`]) assigned once by [`Geometry`](super::Geometry);
//! every per-edge and per-box table in the engine is indexed by them.

use serde::{Deserialize, Serialize};

/// Row-major dot index.
pub type Dot = usize;

/// A line between two dots, normalized so that `low <= high`.
///
/// ```
/// use dots_and_boxes::board::Edge;
///
/// let edge = Edge::new(6, 1);
/// assert_eq!(edge.low(), 1);
/// assert_eq!(edge.high(), 6);
/// assert_eq!(edge, Edge::new(1, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    low: Dot,
    high: Dot,
}

impl Edge {
    /// Create an edge from two dots in either order.
    #[must_use]
    pub const fn new(a: Dot, b: Dot) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller dot index.
    #[must_use]
    pub const fn low(self) -> Dot {
        self.low
    }

    /// The larger dot index.
    #[must_use]
    pub const fn high(self) -> Dot {
        self.high
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl From<(Dot, Dot)> for Edge {
    fn from((a, b): (Dot, Dot)) -> Self {
        Self::new(a, b)
    }
}

/// Dense index of an edge, assigned at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Dense index of a box, row-major over grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoxId(pub u32);

impl BoxId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The four bounding edges of a box: top, left, right, bottom.
pub type BoxEdges = [EdgeId; 4];
