use super::{Color, ShapeKind, Style, StylePolicy, BLACK};

/// Colors shapes by depth: trunk, then branch, then leaf.
///
/// Squares and triangles at the same depth share a style. Angle and mirror
/// are left to the traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthPalette {
    /// Fill for depths up to and including `trunk_depth`.
    pub trunk: Color,
    /// Fill for depths up to and including `branch_depth`.
    pub branch: Color,
    /// Fill for everything deeper.
    pub leaf: Color,
    /// Outline for every shape.
    pub outline: Color,
    /// Last depth painted as trunk.
    pub trunk_depth: u32,
    /// Last depth painted as branch.
    pub branch_depth: u32,
}

impl Default for DepthPalette {
    fn default() -> Self {
        Self {
            trunk: image::Rgba([100, 54, 15, 255]),
            branch: image::Rgba([162, 96, 41, 255]),
            leaf: image::Rgba([38, 196, 64, 255]),
            outline: BLACK,
            trunk_depth: 2,
            branch_depth: 5,
        }
    }
}

impl DepthPalette {
    /// Returns the fill color for `depth`.
    #[must_use]
    pub fn fill_for(&self, depth: u32) -> Color {
        if depth <= self.trunk_depth {
            self.trunk
        } else if depth <= self.branch_depth {
            self.branch
        } else {
            self.leaf
        }
    }
}

impl StylePolicy for DepthPalette {
    fn style(&self, depth: u32, _shape: ShapeKind) -> Style {
        Style::filled(self.fill_for(depth)).with_outline(Some(self.outline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_depth() {
        let palette = DepthPalette::default();
        for depth in 0..=2 {
            assert_eq!(palette.fill_for(depth), palette.trunk);
        }
        for depth in 3..=5 {
            assert_eq!(palette.fill_for(depth), palette.branch);
        }
        for depth in [6, 7, 12, 40] {
            assert_eq!(palette.fill_for(depth), palette.leaf);
        }
    }

    #[test]
    fn style_is_shape_independent() {
        let palette = DepthPalette::default();
        let square = palette.style(4, ShapeKind::Square);
        let triangle = palette.style(4, ShapeKind::Triangle);
        assert_eq!(square, triangle);
        assert_eq!(square.outline, Some(BLACK));
        assert_eq!(square.angle, None);
        assert_eq!(square.mirror, None);
    }

    #[test]
    fn thresholds_are_configurable() {
        let palette = DepthPalette {
            trunk_depth: 0,
            branch_depth: 1,
            ..DepthPalette::default()
        };
        assert_eq!(palette.fill_for(0), palette.trunk);
        assert_eq!(palette.fill_for(1), palette.branch);
        assert_eq!(palette.fill_for(2), palette.leaf);
    }
}
