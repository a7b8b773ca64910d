use tracing::{debug, warn};

use crate::error::{ParameterError, Result};
use crate::geometry::Edge;
use crate::operations::construction::{ApexRule, BuildApex, BuildSquare};
use crate::render::Surface;
use crate::style::{ShapeKind, StylePolicy};

use super::{LevelSet, MAX_DEPTH, PRACTICAL_DEPTH};

/// Counts produced by one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthStats {
    /// Number of levels expanded.
    pub levels: u32,
    /// Number of polygons drawn, squares and triangles together.
    pub polygons: u64,
    /// Size of the frontier left after the last level.
    pub leaf_edges: usize,
}

/// Expands a seed edge level by level, drawing a square and a triangle cap
/// on every edge.
///
/// Each edge yields exactly two child edges, so level `d` holds `2^d` edges
/// and a run of `depth` levels draws `2 * (2^depth - 1)` polygons.
pub struct GrowTree<'a, P: StylePolicy + ?Sized> {
    seed: Edge,
    depth: u32,
    rule: ApexRule,
    policy: &'a P,
}

impl<'a, P: StylePolicy + ?Sized> GrowTree<'a, P> {
    /// Creates a new `GrowTree` operation.
    #[must_use]
    pub fn new(seed: Edge, depth: u32, rule: ApexRule, policy: &'a P) -> Self {
        Self {
            seed,
            depth,
            rule,
            policy,
        }
    }

    /// Checks the depth and every triangle rule the policy will ask for,
    /// without drawing.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::DepthTooLarge` above [`MAX_DEPTH`], or the
    /// error of the first level whose apex rule does not form a triangle.
    pub fn validate(&self) -> Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(ParameterError::DepthTooLarge {
                depth: self.depth,
                max: MAX_DEPTH,
            }
            .into());
        }
        self.rule.base_angles()?;
        for level in 0..self.depth {
            self.triangle_rule(level).base_angles()?;
        }
        Ok(())
    }

    /// Executes the traversal onto `surface`.
    ///
    /// The surface is not cleared first. Validation runs before anything is
    /// drawn; a policy whose answers change between calls can still fail
    /// mid-way, in which case the traversal stops at the offending edge.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`GrowTree::validate`].
    pub fn execute<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<GrowthStats> {
        self.validate()?;
        if self.depth > PRACTICAL_DEPTH {
            warn!(
                depth = self.depth,
                edges = 1u64 << self.depth,
                "deep traversal, cost doubles with every level"
            );
        }

        let mut current = LevelSet::seed(self.seed);
        let mut next = LevelSet::with_capacity(2);
        let mut polygons = 0u64;

        for level in 0..self.depth {
            debug!(level, edges = current.edges().len(), "expanding level");
            next.reserve(current.edges().len() * 2);
            for edge in current.edges() {
                let style = self.policy.style(level, ShapeKind::Square);
                let square = BuildSquare::new(*edge).execute();
                surface.fill_polygon(&square.corners, style.fill, style.outline);

                let style = self.policy.style(level, ShapeKind::Triangle);
                let rule = self.rule.with_overrides(style.angle, style.mirror);
                let triangle = BuildApex::new(square.outer_edge(), rule).execute()?;
                surface.fill_polygon(&triangle.vertices(), style.fill, style.outline);

                polygons += 2;
                next.extend(triangle.child_edges());
            }
            std::mem::swap(&mut current, &mut next);
            next.clear();
        }

        Ok(GrowthStats {
            levels: self.depth,
            polygons,
            leaf_edges: current.edges().len(),
        })
    }

    fn triangle_rule(&self, level: u32) -> ApexRule {
        let style = self.policy.style(level, ShapeKind::Triangle);
        self.rule.with_overrides(style.angle, style.mirror)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::TreeError;
    use crate::math::Point2;
    use crate::render::DrawLog;
    use crate::style::{DepthPalette, Style};

    fn seed() -> Edge {
        Edge::new(Point2::new(860.0, 1080.0), Point2::new(1060.0, 1080.0))
    }

    #[test]
    fn polygon_and_edge_counts_double_per_level() {
        let palette = DepthPalette::default();
        for depth in 0..=8 {
            let mut log = DrawLog::new();
            let stats = GrowTree::new(seed(), depth, ApexRule::default(), &palette)
                .execute(&mut log)
                .unwrap();
            assert_eq!(stats.levels, depth);
            assert_eq!(stats.leaf_edges, 1usize << depth);
            assert_eq!(stats.polygons, 2 * ((1u64 << depth) - 1));
            assert_eq!(log.len() as u64, stats.polygons);
        }
    }

    #[test]
    fn shapes_alternate_square_then_triangle() {
        let palette = DepthPalette::default();
        let mut log = DrawLog::new();
        GrowTree::new(seed(), 3, ApexRule::default(), &palette)
            .execute(&mut log)
            .unwrap();
        for (i, call) in log.calls().iter().enumerate() {
            let expected = if i % 2 == 0 { 4 } else { 3 };
            assert_eq!(call.points.len(), expected);
        }
    }

    #[test]
    fn first_level_matches_hand_computed_geometry() {
        let palette = DepthPalette::default();
        let mut log = DrawLog::new();
        GrowTree::new(seed(), 2, ApexRule::Symmetric, &palette)
            .execute(&mut log)
            .unwrap();
        let calls = log.calls();
        assert_eq!(calls[0].points[2], Point2::new(1060.0, 880.0));
        assert_eq!(calls[0].points[3], Point2::new(860.0, 880.0));
        assert_abs_diff_eq!(calls[1].points[2].x, 960.0, epsilon = 1e-9);
        assert_abs_diff_eq!(calls[1].points[2].y, 780.0, epsilon = 1e-9);

        // The first child square sits on (apex, p3), to the upper right.
        let child = &calls[2].points;
        assert_abs_diff_eq!(child[0].x, 960.0, epsilon = 1e-9);
        assert_abs_diff_eq!(child[1].x, 1060.0, epsilon = 1e-9);
        assert_abs_diff_eq!(child[2].x, 1160.0, epsilon = 1e-9);
        assert_abs_diff_eq!(child[2].y, 780.0, epsilon = 1e-9);
    }

    #[test]
    fn policy_receives_literal_depths() {
        let mut log = DrawLog::new();
        let policy = |depth: u32, _shape: ShapeKind| {
            let shade = u8::try_from(depth).unwrap_or(u8::MAX);
            Style::filled(image::Rgba([shade, 0, 0, 255]))
        };
        GrowTree::new(seed(), 3, ApexRule::default(), &policy)
            .execute(&mut log)
            .unwrap();
        let depths: Vec<u8> = log
            .calls()
            .iter()
            .map(|call| call.fill.unwrap().0[0])
            .collect();
        assert_eq!(depths, [0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn depth_above_limit_is_rejected_before_drawing() {
        let palette = DepthPalette::default();
        let mut log = DrawLog::new();
        let err = GrowTree::new(seed(), MAX_DEPTH + 1, ApexRule::default(), &palette)
            .execute(&mut log)
            .unwrap_err();
        assert!(matches!(
            err,
            TreeError::Parameter(ParameterError::DepthTooLarge { .. })
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn invalid_rule_is_rejected_before_drawing() {
        let palette = DepthPalette::default();
        let mut log = DrawLog::new();
        let rule = ApexRule::Complementary {
            angle: 170.0,
            mirror: false,
        };
        assert!(GrowTree::new(seed(), 4, rule, &palette)
            .execute(&mut log)
            .is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn invalid_policy_override_is_rejected_before_drawing() {
        let mut log = DrawLog::new();
        let policy = |depth: u32, _shape: ShapeKind| {
            if depth == 2 {
                Style::default().with_angle(120.0)
            } else {
                Style::default()
            }
        };
        assert!(GrowTree::new(seed(), 4, ApexRule::default(), &policy)
            .execute(&mut log)
            .is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn policy_angle_overrides_apply_per_level() {
        let mut log = DrawLog::new();
        let policy = |depth: u32, _shape: ShapeKind| {
            if depth == 0 {
                Style::default().with_angle(30.0).with_mirror(true)
            } else {
                Style::default()
            }
        };
        GrowTree::new(seed(), 1, ApexRule::Symmetric, &policy)
            .execute(&mut log)
            .unwrap();
        // Mirrored 30° puts 60° at the right-hand corner, pulling the apex right.
        let apex = log.calls()[1].points[2];
        assert!(apex.x > 960.0);
    }

    #[test]
    fn zero_length_seed_is_harmless() {
        let palette = DepthPalette::default();
        let point = Point2::new(5.0, 5.0);
        let mut log = DrawLog::new();
        let stats = GrowTree::new(Edge::new(point, point), 4, ApexRule::default(), &palette)
            .execute(&mut log)
            .unwrap();
        assert_eq!(stats.polygons, 30);
        assert!(log
            .calls()
            .iter()
            .all(|call| call.points.iter().all(|p| *p == point)));
    }
}
