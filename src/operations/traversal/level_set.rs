use crate::geometry::Edge;

/// The ordered frontier of edges at one depth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelSet {
    edges: Vec<Edge>,
}

impl LevelSet {
    /// Creates the depth-0 frontier holding only `seed`.
    #[must_use]
    pub fn seed(seed: Edge) -> Self {
        Self { edges: vec![seed] }
    }

    /// Creates an empty frontier with room for `capacity` edges.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Appends edges, keeping their order.
    pub fn extend(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.extend(edges);
    }

    /// Removes every edge, keeping the allocation.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Reserves room for at least `additional` more edges.
    pub fn reserve(&mut self, additional: usize) {
        self.edges.reserve(additional);
    }
}
