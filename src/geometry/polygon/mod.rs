mod normalize;
mod regular;
mod triangle;

pub use regular::RegularPolygon;
pub use triangle::Triangle;

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::linear::{Intersection, Linear, Segment};
use super::Point;
use crate::error::{ensure_same_dimension, GeometryError, Result};
use crate::math::polygon_2d::{
    centroid_2d, is_clockwise_turn, second_moments_2d, signed_area_2d, winding_number_2d,
};
use crate::math::{Point2, Vector2};

/// Result of polygon construction after normalization.
///
/// Input that collapses below three vertices comes back as the
/// lower-dimensional entity it describes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Segment(Segment),
    Triangle(Triangle),
    Polygon(Polygon),
}

impl Shape {
    /// The polygon, for the `Triangle` and `Polygon` variants.
    #[must_use]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Triangle(t) => Some(t.as_polygon()),
            Self::Polygon(p) => Some(p),
            Self::Point(_) | Self::Segment(_) => None,
        }
    }

    #[must_use]
    pub fn into_polygon(self) -> Option<Polygon> {
        match self {
            Self::Triangle(t) => Some(t.into_polygon()),
            Self::Polygon(p) => Some(p),
            Self::Point(_) | Self::Segment(_) => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Segment(_) => "segment",
            Self::Triangle(_) => "triangle",
            Self::Polygon(_) => "polygon",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => p.fmt(f),
            Self::Segment(s) => s.fmt(f),
            Self::Triangle(t) => t.fmt(f),
            Self::Polygon(p) => p.fmt(f),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

/// Points and segments shared by a polygon boundary and another entity.
///
/// Points lying on one of the segments are not listed separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonIntersection {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl PolygonIntersection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }

    fn record(&mut self, hit: Intersection) {
        match hit {
            Intersection::Point(p) => {
                if !self.points.contains(&p) {
                    self.points.push(p);
                }
            }
            Intersection::Segment(s) => {
                if !self.segments.contains(&s) {
                    self.segments.push(s);
                }
            }
            // One operand is always a bounded side.
            Intersection::Empty | Intersection::Ray(_) | Intersection::Line(_) => {}
        }
    }

    fn absorb_points(&mut self) {
        let segments = &self.segments;
        self.points.retain(|p| {
            !segments
                .iter()
                .any(|s| matches!(s.contains_point(p), Ok(true)))
        });
    }
}

/// A closed planar polygon with at least four normalized vertices.
///
/// Vertices are stored in input order; the last one connects back to the
/// first. Equality holds under cyclic rotation and reversal of that order.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Normalizes `vertices` and builds the shape they describe.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InsufficientPoints` for an empty vertex list,
    /// `GeometryError::DimensionMismatch` if the vertices disagree on
    /// dimension and `OperationError::Unimplemented` for 3D vertices.
    pub fn new<I>(vertices: I) -> Result<Shape>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let raw: Vec<Point> = vertices.into_iter().map(Into::into).collect();
        let given = raw.len();
        let vertices = normalize::normalize(raw)?;

        // Normalization leaves at least one vertex.
        let shape = match vertices.len() {
            1 => Shape::Point(vertices[0]),
            2 => Shape::Segment(Segment::from_validated(vertices[0], vertices[1])),
            3 => Shape::Triangle(Triangle::from_polygon(Self { vertices })),
            _ => Shape::Polygon(Self { vertices }),
        };
        debug!(given, shape = shape.kind(), "normalized polygon");
        Ok(shape)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn ambient_dimension(&self) -> usize {
        self.vertices.first().map_or(2, Point::dimension)
    }

    /// Sides in vertex order; side `i` runs from vertex `i` to `i + 1`.
    #[must_use]
    pub fn sides(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::from_validated(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().map(Segment::length).sum()
    }

    /// Signed shoelace area: positive for counter-clockwise vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.planar())
    }

    /// Interior angle at each vertex, in degrees.
    ///
    /// A vertex whose turn disagrees with the winding of the whole ring
    /// (the sign of [`area`](Self::area)) is reflex.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        let ring = self.planar();
        let n = ring.len();
        let clockwise = self.area() < 0.0;
        (0..n)
            .map(|i| {
                let (a, b, c) = (&ring[(i + n - 1) % n], &ring[i], &ring[(i + 1) % n]);
                let angle = (a - b).angle(&(c - b)).to_degrees();
                if is_clockwise_turn(a, b, c) == clockwise {
                    angle
                } else {
                    360.0 - angle
                }
            })
            .collect()
    }

    /// Returns `true` if `a -> b -> c` turns clockwise.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D points and
    /// `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn is_right(a: &Point, b: &Point, c: &Point) -> Result<bool> {
        let ab = b.checked_sub(a)?;
        let ac = c.checked_sub(a)?;
        Ok(ab.cross(&ac)? < 0.0)
    }

    /// Every vertex turns the same way and no two non-adjacent sides meet.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let ring = self.planar();
        let n = ring.len();
        let reference = is_clockwise_turn(&ring[n - 2], &ring[n - 1], &ring[0]);
        let turns_agree = (0..n).all(|i| {
            is_clockwise_turn(&ring[(i + n - 2) % n], &ring[(i + n - 1) % n], &ring[i]) == reference
        });
        if !turns_agree {
            return false;
        }

        let sides = self.sides();
        for i in 0..n {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if matches!(sides[i].intersection(&sides[j]), Ok(hit) if !hit.is_empty()) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if `point` lies strictly inside the polygon.
    ///
    /// Points on the boundary are not enclosed. The interior is decided by
    /// the winding number, so the inner part of a self-crossing polygon
    /// counts as enclosed.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if `point` is not 2D.
    pub fn encloses_point(&self, point: &Point) -> Result<bool> {
        if self.on_boundary(point)? {
            return Ok(false);
        }
        let target = Point2::new(point.x(), point.y());
        Ok(winding_number_2d(&target, &self.planar()) != 0)
    }

    /// Returns `true` if `point` is a vertex or lies on a side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if `point` is not 2D.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        if self.vertices.contains(point) {
            return Ok(true);
        }
        self.on_boundary(point)
    }

    /// Returns `true` if `segment` lies on one of the sides.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if `segment` is not 2D.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        for side in self.sides() {
            if side.contains_segment(segment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Shared boundary of two polygons.
    ///
    /// # Errors
    ///
    /// Propagates errors from side intersection; none occur for two valid
    /// polygons.
    pub fn intersection(&self, other: &Polygon) -> Result<PolygonIntersection> {
        let theirs: Vec<Linear> = other.sides().into_iter().map(Linear::from).collect();
        self.intersect_sides(&theirs)
    }

    /// Where `entity` meets the boundary.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for a 3D entity.
    pub fn intersection_with(&self, entity: &Linear) -> Result<PolygonIntersection> {
        self.intersect_sides(std::slice::from_ref(entity))
    }

    fn intersect_sides(&self, others: &[Linear]) -> Result<PolygonIntersection> {
        let mut result = PolygonIntersection::default();
        for side in self.sides() {
            let side = Linear::Segment(side);
            for other in others {
                result.record(side.intersection(other)?);
            }
        }
        result.absorb_points();
        debug!(
            points = result.points.len(),
            segments = result.segments.len(),
            "intersected polygon boundary"
        );
        Ok(result)
    }

    /// Area-weighted centroid, or `None` when the signed area is zero.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        centroid_2d(&self.planar()).map(Point::from)
    }

    /// Bounding box `(xmin, ymin, xmax, ymax)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.vertices.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(xmin, ymin, xmax, ymax), p| {
                (xmin.min(p.x()), ymin.min(p.y()), xmax.max(p.x()), ymax.max(p.y()))
            },
        )
    }

    /// Distance from `point` to the polygon: zero inside or on the boundary,
    /// otherwise the distance to the nearest side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if `point` is not 2D.
    pub fn distance(&self, point: &Point) -> Result<f64> {
        if self.contains_point(point)? || self.encloses_point(point)? {
            return Ok(0.0);
        }
        let mut best = f64::INFINITY;
        for side in self.sides() {
            best = best.min(side.distance(point)?);
        }
        Ok(best)
    }

    /// Second moments of area `(Ixx, Iyy, Ixy)` about `point`, or about the
    /// centroid when `point` is `None`.
    ///
    /// Values are reported for counter-clockwise orientation, so reversing
    /// the vertex order does not change them.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` when no point is given and the
    /// polygon has no centroid, and `GeometryError::DimensionMismatch` if
    /// `point` is not 2D.
    pub fn second_moment_of_area(&self, point: Option<&Point>) -> Result<(f64, f64, f64)> {
        let reference = match point {
            Some(p) => {
                ensure_same_dimension(self.ambient_dimension(), p.dimension())?;
                *p
            }
            None => self.centroid().ok_or_else(|| {
                GeometryError::Degenerate("polygon with zero area has no centroid".into())
            })?,
        };
        let offset = Vector2::new(reference.x(), reference.y());
        let shifted: Vec<Point2> = self.planar().into_iter().map(|v| v - offset).collect();
        let (ixx, iyy, ixy) = second_moments_2d(&shifted);
        Ok(if self.area() < 0.0 {
            (-ixx, -iyy, -ixy)
        } else {
            (ixx, iyy, ixy)
        })
    }

    fn on_boundary(&self, point: &Point) -> Result<bool> {
        ensure_same_dimension(self.ambient_dimension(), point.dimension())?;
        for side in self.sides() {
            if side.contains_point(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn planar(&self) -> Vec<Point2> {
        self.vertices
            .iter()
            .map(|p| Point2::new(p.x(), p.y()))
            .collect()
    }

    fn write_vertices(&self, f: &mut fmt::Formatter<'_>, kind: &str) -> fmt::Result {
        write!(f, "{kind}(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        let (ours, theirs) = (&self.vertices, &other.vertices);
        let n = ours.len();
        if n != theirs.len() {
            return false;
        }
        let Some(first) = theirs.first() else {
            return true;
        };
        (0..n).filter(|&i| ours[i] == *first).any(|start| {
            (1..n).all(|k| ours[(start + k) % n] == theirs[k])
                || (1..n).all(|k| ours[(start + n - k) % n] == theirs[k])
        })
    }
}

impl Eq for Polygon {}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent, so rotated and reversed rings agree.
        let combined = self.vertices.iter().fold(0u64, |acc, v| {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        self.vertices.len().hash(state);
        combined.hash(state);
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_vertices(f, "Polygon")
    }
}
