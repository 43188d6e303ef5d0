use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Parallelism is judged relative to the direction lengths.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() <= TOLERANCE * d1.norm() * d2.norm() {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Solves `a1*x + b1*y + c1 = 0`, `a2*x + b2*y + c2 = 0` by Cramer's rule.
///
/// Returns `None` when the determinant is exactly zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn solve_standard_form(first: (f64, f64, f64), second: (f64, f64, f64)) -> Option<(f64, f64)> {
    let (a1, b1, c1) = first;
    let (a2, b2, c2) = second;
    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    Some(((b1 * c2 - b2 * c1) / det, (a2 * c1 - a1 * c2) / det))
}

/// Parameter of `point` along `origin + t * dir`, by orthogonal projection.
#[must_use]
pub fn parameter_along(origin: &Point2, dir: &Vector2, point: &Point2) -> f64 {
    (point - origin).dot(dir) / dir.norm_squared()
}

/// Returns `true` if `t` lies in `[min, max]` with a small slack at both ends.
///
/// Infinite bounds describe rays and lines.
#[must_use]
pub fn param_in_range(t: f64, min: f64, max: f64) -> bool {
    t >= min - TOLERANCE && t <= max + TOLERANCE
}
