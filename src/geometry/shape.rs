use crate::math::Point2;

use super::Edge;

/// A square built on a known edge.
///
/// Corners are stored in drawing order: the two known points followed by the
/// two derived ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    /// `[p1, p2, p3, p4]`, where `p1 -> p2` is the base edge.
    pub corners: [Point2; 4],
}

impl Square {
    /// Returns the edge opposite the base, running `p3 -> p4`.
    ///
    /// This is the edge a triangle cap is built on.
    #[must_use]
    pub fn outer_edge(&self) -> Edge {
        Edge::new(self.corners[2], self.corners[3])
    }
}

/// A triangle cap built on a known edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The known edge `p1 -> p2`.
    pub base: Edge,
    /// The derived third point.
    pub apex: Point2,
}

impl Triangle {
    /// Returns the vertices `[p1, p2, apex]` in drawing order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [*self.base.start(), *self.base.end(), self.apex]
    }

    /// Returns the two legs as child edges: `(apex, p1)` then `(p2, apex)`.
    ///
    /// Both are oriented so the next square grows away from this triangle.
    #[must_use]
    pub fn child_edges(&self) -> [Edge; 2] {
        [
            Edge::new(self.apex, *self.base.start()),
            Edge::new(*self.base.end(), self.apex),
        ]
    }
}
