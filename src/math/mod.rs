pub mod polygon_2d;

/// 2D point type in canvas space (x right, y down).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotates `v` by a quarter turn: `(dx, dy)` becomes `(-dy, dx)`.
#[must_use]
pub fn quarter_turn(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn quarter_turn_matches_rotation() {
        let v = Vector2::new(3.0, -2.0);
        let expected = Rotation2::new(std::f64::consts::FRAC_PI_2) * v;
        let turned = quarter_turn(v);
        assert_abs_diff_eq!(turned.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(turned.y, expected.y, epsilon = 1e-12);
    }
}
