pub mod intersect_2d;
pub mod polygon_2d;
pub mod tolerance;

pub use tolerance::{nearly_eq, nearly_zero, Tolerance};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for parametric and angular comparisons.
///
/// Orientation tests scale it by the magnitudes of the vectors involved, so
/// it acts as a bound on the sine of the angle between them.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if `value` is negligible relative to `scale`.
///
/// A zero `scale` only accepts an exact zero.
#[inline]
#[must_use]
pub fn vanishes(value: f64, scale: f64) -> bool {
    value.abs() <= TOLERANCE * scale
}

/// Returns `true` if `a` and `b` agree up to [`TOLERANCE`], relative to
/// their magnitude once that exceeds one.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
