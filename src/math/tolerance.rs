//! Tolerant floating-point comparisons.
//!
//! Implements the relative/absolute scheme from
//! <http://floating-point-gui.de/errors/comparison/>: values are equal when
//! their difference is small relative to their magnitude, or below the
//! smallest normal float when one of them is zero.

/// Scaling bounds for [`nearly_eq`] and [`nearly_zero`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative precision, machine epsilon by default.
    pub epsilon: f64,
    /// Smallest positive normal value, used as the absolute scale.
    pub min_positive: f64,
    /// Upper bound applied to the magnitude sum.
    pub max: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: f64::EPSILON,
            min_positive: f64::MIN_POSITIVE,
            max: f64::MAX,
        }
    }
}

impl Tolerance {
    /// Returns `true` if `a` and `b` are equal within this tolerance.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn nearly_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let delta = (a - b).abs();
        if a == 0.0 || b == 0.0 || delta < self.min_positive {
            delta < self.epsilon * self.min_positive
        } else {
            delta / (a.abs() + b.abs()).min(self.max) < self.epsilon * 2.0
        }
    }

    /// Returns `true` if `value` is zero within this tolerance.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn nearly_zero(&self, value: f64) -> bool {
        value == 0.0 || value.abs() < self.epsilon * self.min_positive
    }
}

/// [`Tolerance::nearly_eq`] with machine defaults.
#[must_use]
pub fn nearly_eq(a: f64, b: f64) -> bool {
    Tolerance::default().nearly_eq(a, b)
}

/// [`Tolerance::nearly_zero`] with machine defaults.
///
/// Only exact and subnormal-scale zeros pass; it backs [`Point::is_zero`].
/// Orientation and distance tests scale their threshold instead, through
/// [`vanishes`](super::vanishes) and [`approx_eq`](super::approx_eq).
///
/// [`Point::is_zero`]: crate::geometry::Point::is_zero
#[must_use]
pub fn nearly_zero(value: f64) -> bool {
    Tolerance::default().nearly_zero(value)
}
