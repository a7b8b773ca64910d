use crate::error::Result;
use crate::geometry::{Edge, Triangle};
use crate::math::{Point2, Rotation2, Vector2};

use super::{ApexRule, BaseAngles};

/// Derives the apex of a triangle cap on a known base edge.
///
/// The apex is placed on the same side of `p1 -> p2` that [`super::BuildSquare`]
/// grows towards, so a cap on a square's outer edge points away from the square.
pub struct BuildApex {
    base: Edge,
    rule: ApexRule,
}

impl BuildApex {
    /// Creates a new `BuildApex` operation.
    #[must_use]
    pub fn new(base: Edge, rule: ApexRule) -> Self {
        Self { base, rule }
    }

    /// Executes the construction.
    ///
    /// A zero-length base yields a triangle whose apex coincides with the base.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule's angles do not form a triangle.
    pub fn execute(&self) -> Result<Triangle> {
        let apex = match self.rule.base_angles()? {
            None => symmetric_apex(&self.base),
            Some(angles) => angled_apex(&self.base, angles),
        };
        Ok(Triangle {
            base: self.base,
            apex,
        })
    }
}

/// Offsets the base midpoint by half the base, turned a quarter turn.
fn symmetric_apex(base: &Edge) -> Point2 {
    let half = (base.start() - base.end()) / 2.0;
    base.midpoint() + Vector2::new(half.y, -half.x)
}

/// Law of sines: the side `p1 -> apex` has length `|p1 p2| sin(a2) / sin(a3)`
/// and leaves `p1` at angle `a1` from the base.
fn angled_apex(base: &Edge, angles: BaseAngles) -> Point2 {
    let length = base.length();
    if base.is_degenerate() {
        return *base.start();
    }
    let a1 = angles.alpha1().to_radians();
    let a2 = angles.alpha2().to_radians();
    let a3 = angles.apex().to_radians();
    let side = length * a2.sin() / a3.sin();
    let direction = Rotation2::new(a1) * (base.vector() / length);
    base.start() + direction * side
}
