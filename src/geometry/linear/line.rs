use std::fmt;

use super::{direction_between, write_entity, LinearEntity, LinearEntity2D};
use crate::error::{ensure_planar, ensure_same_dimension, Result};
use crate::geometry::Point;
use crate::math::intersect_2d::solve_standard_form;

/// An infinite line through two distinct points.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    p1: Point,
    p2: Point,
    direction: Point,
}

/// Outcome of intersecting two 2D lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    Point(Point),
    /// Distinct parallel lines.
    Parallel,
    /// Both lines occupy the same points.
    Coincident,
}

impl Line {
    /// Creates a line through `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are equal and
    /// `GeometryError::DimensionMismatch` if their dimensions differ.
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>) -> Result<Self> {
        let (p1, p2) = (p1.into(), p2.into());
        let direction = direction_between("Line", &p1, &p2)?;
        Ok(Self { p1, p2, direction })
    }

    /// The line through the defining points of any linear entity.
    #[must_use]
    pub fn from_linear(entity: &impl LinearEntity) -> Self {
        Self {
            p1: *entity.p1(),
            p2: *entity.p2(),
            direction: *entity.direction(),
        }
    }

    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.p1.is_collinear(&[*point, self.p2])
    }

    /// Returns `true` if `other` is coincident with `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_line(&self, other: &Line) -> Result<bool> {
        Ok(self.p1.is_collinear(&[other.p1, other.p2])?
            && self.p2.is_collinear(&[other.p1, other.p2])?)
    }

    /// Lines are equal when coincident, not merely parallel.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn equals(&self, other: &Line) -> Result<bool> {
        self.p1.is_collinear(&[self.p2, other.p1, other.p2])
    }

    /// Perpendicular distance from `point`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn distance(&self, point: &Point) -> Result<f64> {
        if self.contains_point(point)? {
            return Ok(0.0);
        }
        let offset = point.checked_sub(&self.p1)?;
        let area = if offset.dimension() == 2 {
            self.direction.cross(&offset)?.abs()
        } else {
            self.direction.to_vector3().cross(&offset.to_vector3()).norm()
        };
        Ok(area / self.p1.distance(&self.p2)?)
    }

    /// Intersects two 2D lines using their standard-form coefficients.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D lines and
    /// `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn intersection(&self, other: &Line) -> Result<LineIntersection> {
        ensure_planar("line intersection", self.ambient_dimension())?;
        ensure_same_dimension(self.ambient_dimension(), other.ambient_dimension())?;

        if self.is_parallel(other)? {
            return Ok(if self.contains_line(other)? {
                LineIntersection::Coincident
            } else {
                LineIntersection::Parallel
            });
        }
        Ok(
            match solve_standard_form(self.coefficients()?, other.coefficients()?) {
                Some((x, y)) => LineIntersection::Point(Point::new(x, y)),
                None => LineIntersection::Parallel,
            },
        )
    }
}

impl LinearEntity for Line {
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

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entity(f, "Line", self)
    }
}
