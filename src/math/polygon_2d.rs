use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
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

/// 2D cross product of `b - a` and `c - a`.
#[inline]
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Returns `true` if `a -> b -> c` turns clockwise.
#[inline]
#[must_use]
pub fn is_clockwise_turn(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient_2d(a, b, c) < 0.0
}

/// Winding number of `point` with respect to the closed ring `verts`.
///
/// Non-zero => inside, zero => outside. Points on the boundary are not
/// classified reliably; callers test the boundary first.
#[must_use]
pub fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = &verts[i];
        let b = &verts[(i + 1) % n];

        if a.y <= point.y {
            if b.y > point.y && orient_2d(a, b, point) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && orient_2d(a, b, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Area-weighted centroid of a simple polygon.
///
/// Returns `None` when the signed area is zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn centroid_2d(points: &[Point2]) -> Option<Point2> {
    let area = signed_area_2d(points);
    if area == 0.0 {
        return None;
    }
    let n = points.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    let scale = 1.0 / (6.0 * area);
    Some(Point2::new(cx * scale, cy * scale))
}

/// Second moments of area `(Ixx, Iyy, Ixy)` about the coordinate origin.
///
/// The sign follows the winding: clockwise rings yield negated values.
#[must_use]
pub fn second_moments_2d(points: &[Point2]) -> (f64, f64, f64) {
    let n = points.len();
    let (mut ixx, mut iyy, mut ixy) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        ixx += (p.y * p.y + p.y * q.y + q.y * q.y) * cross;
        iyy += (p.x * p.x + p.x * q.x + q.x * q.x) * cross;
        ixy += (p.x * q.y + 2.0 * p.x * p.y + 2.0 * q.x * q.y + q.x * p.y) * cross;
    }
    (ixx / 12.0, iyy / 12.0, ixy / 24.0)
}
