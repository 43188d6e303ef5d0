use std::fmt;

use super::{direction_between, write_entity, Line, LinearEntity};
use crate::error::Result;
use crate::geometry::Point;
use crate::math::TOLERANCE;

/// A half-line starting at `source` (= `p1`) and passing through `p2`.
///
/// Unlike lines and segments, the order of the defining points matters.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    p1: Point,
    p2: Point,
    direction: Point,
}

impl Ray {
    /// Creates the ray from `source` through `through`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are equal and
    /// `GeometryError::DimensionMismatch` if their dimensions differ.
    pub fn new(source: impl Into<Point>, through: impl Into<Point>) -> Result<Self> {
        let (p1, p2) = (source.into(), through.into());
        let direction = direction_between("Ray", &p1, &p2)?;
        Ok(Self { p1, p2, direction })
    }

    /// The ray from the first through the second defining point of any
    /// linear entity.
    #[must_use]
    pub fn from_linear(entity: &impl LinearEntity) -> Self {
        Self {
            p1: *entity.p1(),
            p2: *entity.p2(),
            direction: *entity.direction(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &Point {
        &self.p1
    }

    /// Returns `true` if `point` is the source or lies ahead of it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        if !self.p1.is_collinear(&[*point, self.p2])? {
            return Ok(false);
        }
        let offset = point.checked_sub(&self.p1)?;
        let along = self.direction.dot(&offset)?;
        Ok(along >= -TOLERANCE * self.direction.norm() * offset.norm())
    }

    /// Returns `true` if `other` runs along `self` in the same direction
    /// from a source on `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_ray(&self, other: &Ray) -> Result<bool> {
        Ok(self.is_similar(other)?
            && self.direction.dot(&other.direction)? > 0.0
            && self.contains_point(&other.p1)?)
    }

    /// Same source, and the other ray's second point lies on `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn equals(&self, other: &Ray) -> Result<bool> {
        Ok(self.p1 == other.p1 && self.contains_point(&other.p2)?)
    }

    /// Shortest distance from `point` to the ray.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn distance(&self, point: &Point) -> Result<f64> {
        if self.contains_point(point)? {
            return Ok(0.0);
        }
        let offset = point.checked_sub(&self.p1)?;
        if self.direction.dot(&offset)? <= 0.0 {
            Ok(offset.norm())
        } else {
            Line::from_linear(self).distance(point)
        }
    }
}

impl LinearEntity for Ray {
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

impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entity(f, "Ray", self)
    }
}
