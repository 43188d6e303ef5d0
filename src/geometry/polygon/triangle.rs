use std::fmt;
use std::ops::Deref;

use super::{Polygon, Shape};
use crate::error::Result;
use crate::geometry::Point;

/// A polygon with exactly three non-collinear vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Builds a triangle through the polygon normalization pipeline.
    ///
    /// Repeated or collinear vertices collapse to a `Shape::Segment` or
    /// `Shape::Point`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the vertices disagree on
    /// dimension and `OperationError::Unimplemented` for 3D vertices.
    pub fn new(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> Result<Shape> {
        let vertices: [Point; 3] = [a.into(), b.into(), c.into()];
        Polygon::new(vertices)
    }

    pub(super) fn from_polygon(polygon: Polygon) -> Self {
        Self { polygon }
    }

    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn into_polygon(self) -> Polygon {
        self.polygon
    }
}

impl Deref for Triangle {
    type Target = Polygon;

    fn deref(&self) -> &Polygon {
        &self.polygon
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.polygon.write_vertices(f, "Triangle")
    }
}
