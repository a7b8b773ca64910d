use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, which reads as clockwise
/// on a y-down canvas.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon encloses no area.
#[must_use]
pub fn is_degenerate(points: &[Point2]) -> bool {
    signed_area(points).abs() < TOLERANCE
}

/// Returns the unsigned angle at `vertex` between the rays towards `a` and `b`,
/// in radians. Zero when either ray has zero length.
#[must_use]
pub fn interior_angle(vertex: &Point2, a: &Point2, b: &Point2) -> f64 {
    let u = a - vertex;
    let v = b - vertex;
    if u.norm() < TOLERANCE || v.norm() < TOLERANCE {
        return 0.0;
    }
    u.angle(&v)
}
