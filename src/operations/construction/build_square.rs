use crate::geometry::{Edge, Square};
use crate::math::quarter_turn;

/// Derives the two unknown corners of a square from one known side.
///
/// For a base `p1 -> p2` the offset is the quarter turn of `p1 - p2`; the new
/// corners are `p3 = p2 + offset` and `p4 = p1 + offset`. A zero-length base
/// yields four coincident corners.
pub struct BuildSquare {
    base: Edge,
}

impl BuildSquare {
    /// Creates a new `BuildSquare` operation.
    #[must_use]
    pub fn new(base: Edge) -> Self {
        Self { base }
    }

    /// Executes the construction.
    #[must_use]
    pub fn execute(&self) -> Square {
        let p1 = *self.base.start();
        let p2 = *self.base.end();
        let offset = quarter_turn(p1 - p2);
        Square {
            corners: [p1, p2, p2 + offset, p1 + offset],
        }
    }
}
