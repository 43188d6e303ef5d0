use std::fmt;

use super::{direction_between, write_entity, Intersection, Line, Linear, LinearEntity};
use crate::error::Result;
use crate::geometry::Point;
use crate::math::approx_eq;

/// A bounded line segment between two distinct points.
///
/// Equality ignores endpoint order.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    p1: Point,
    p2: Point,
    direction: Point,
}

impl Segment {
    /// Creates the segment from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are equal and
    /// `GeometryError::DimensionMismatch` if their dimensions differ.
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>) -> Result<Self> {
        let (p1, p2) = (p1.into(), p2.into());
        let direction = direction_between("Segment", &p1, &p2)?;
        Ok(Self { p1, p2, direction })
    }

    /// Builds a segment from points already known to be distinct and of
    /// equal dimension.
    pub(crate) fn from_validated(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            direction: p1.displacement(&p2),
        }
    }

    /// The segment between the defining points of any linear entity.
    #[must_use]
    pub fn from_linear(entity: &impl LinearEntity) -> Self {
        Self {
            p1: *entity.p1(),
            p2: *entity.p2(),
            direction: *entity.direction(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction.norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.p1.shifted(&self.p2) * 0.5
    }

    /// Returns `true` if `point` lies on the segment, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        if !self.p1.is_collinear(&[*point, self.p2])? {
            return Ok(false);
        }
        let around = self.p1.distance(point)? + point.distance(&self.p2)?;
        Ok(approx_eq(self.length(), around))
    }

    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_segment(&self, other: &Segment) -> Result<bool> {
        Ok(self.contains_point(&other.p1)? && self.contains_point(&other.p2)?)
    }

    /// Shortest distance from `point` to the segment.
    ///
    /// The signs of `(p1 - point)·d` and `(p2 - point)·d` tell whether the
    /// point lies beyond `p1`, beyond `p2`, or alongside the segment body.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn distance(&self, point: &Point) -> Result<f64> {
        if self.contains_point(point)? {
            return Ok(0.0);
        }
        let to_p1 = self.p1.checked_sub(point)?;
        let to_p2 = self.p2.checked_sub(point)?;
        if to_p1.dot(&self.direction)? >= 0.0 {
            Ok(to_p1.norm())
        } else if to_p2.dot(&self.direction)? <= 0.0 {
            Ok(to_p2.norm())
        } else {
            Line::from_linear(self).distance(point)
        }
    }

    /// Same unordered endpoint pair.
    #[must_use]
    pub fn equals(&self, other: &Segment) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }

    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn perpendicular_bisector(&self) -> Result<Line> {
        self.perpendicular_line(&self.midpoint())
    }

    /// Intersects two 2D segments.
    ///
    /// Collinear segments yield their overlap: a sub-segment, a single
    /// touching point, or nothing.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D segments and
    /// `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn intersection(&self, other: &Segment) -> Result<Intersection> {
        Linear::Segment(*self).intersection(&Linear::Segment(*other))
    }
}

impl LinearEntity for Segment {
    fn p1(&self) -> &Point {
        &self.p1
    }

    fn p2(&self) -> &Point {
        &self.p2
    }

    fn direction(&self) -> &Point {
        &self.direction
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entity(f, "Segment", self)
    }
}
