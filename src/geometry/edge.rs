use crate::math::{Point2, Vector2, TOLERANCE};

/// A directed segment from `start` to `end`.
///
/// Squares grow on the left-hand side of `start -> end` as seen on the y-down
/// canvas, so swapping the endpoints flips the side children are attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    start: Point2,
    end: Point2,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the vector from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the edge length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn length_and_midpoint() {
        let edge = Edge::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_abs_diff_eq!(edge.length(), 5.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(edge.midpoint().x, 2.5);
        assert_abs_diff_eq!(edge.midpoint().y, 3.0);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point2::new(7.0, 7.0);
        assert!(Edge::new(p, p).is_degenerate());
        assert!(!Edge::new(p, Point2::new(7.0, 8.0)).is_degenerate());
    }
}
