mod line;
mod planar;
mod ray;
mod segment;

pub use line::{Line, LineIntersection};
pub use planar::LinearEntity2D;
pub use ray::Ray;
pub use segment::Segment;

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use tracing::trace;

use super::Point;
use crate::error::{ensure_planar, ensure_same_dimension, GeometryError, OperationError, Result};
use crate::math::intersect_2d::{line_line_intersect_2d, param_in_range, parameter_along};
use crate::math::{vanishes, Point2, Vector2, TOLERANCE};

/// Validates the defining points of a linear entity and returns its direction.
fn direction_between(kind: &str, p1: &Point, p2: &Point) -> Result<Point> {
    ensure_same_dimension(p1.dimension(), p2.dimension())?;
    if p1 == p2 {
        let reason = format!("{kind} requires two distinct points");
        return Err(GeometryError::Degenerate(reason).into());
    }
    p2.checked_sub(p1)
}

/// Behavior shared by lines, rays and segments.
///
/// Every entity is defined by two distinct points of equal dimension;
/// the provided methods treat it as its infinite extension unless stated
/// otherwise.
pub trait LinearEntity {
    /// The first defining point.
    fn p1(&self) -> &Point;

    /// The second defining point.
    fn p2(&self) -> &Point;

    /// `p2 - p1`.
    fn direction(&self) -> &Point;

    fn points(&self) -> (&Point, &Point) {
        (self.p1(), self.p2())
    }

    /// Dimension of the space the entity lives in.
    fn ambient_dimension(&self) -> usize {
        self.p1().dimension()
    }

    /// The direction scaled to unit length.
    fn unit(&self) -> Point {
        self.direction().unit()
    }

    /// The direction rotated 90° clockwise, `(dy, -dx)`. Not normalized.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    fn normal_direction(&self) -> Result<Point> {
        ensure_planar("normal_direction", self.ambient_dimension())?;
        let d = self.direction();
        Ok(Point::new(d.y(), -d.x()))
    }

    /// Angle between the two directions, in `[0, π]` radians.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn angle_between<L: LinearEntity + ?Sized>(&self, other: &L) -> Result<f64> {
        let a = self.direction();
        let b = other.direction();
        let cos = a.dot(b)? / (a.norm() * b.norm());
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// [`angle_between`](Self::angle_between), with angles above π/2
    /// reduced by π/2.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn smallest_angle_between<L: LinearEntity + ?Sized>(&self, other: &L) -> Result<f64> {
        let angle = self.angle_between(other)?;
        Ok(if angle > FRAC_PI_2 {
            angle - FRAC_PI_2
        } else {
            angle
        })
    }

    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn is_parallel<L: LinearEntity + ?Sized>(&self, other: &L) -> Result<bool> {
        let d = self.direction();
        d.origin().is_collinear(&[*d, *other.direction()])
    }

    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn is_perpendicular<L: LinearEntity + ?Sized>(&self, other: &L) -> Result<bool> {
        let a = self.direction();
        let b = other.direction();
        Ok(vanishes(a.dot(b)?, a.norm() * b.norm()))
    }

    /// Returns `true` if the infinite extensions cross in exactly one point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn is_intersection<L: LinearEntity + ?Sized>(&self, other: &L) -> Result<bool> {
        if self.is_parallel(other)? {
            return Ok(false);
        }
        Point::are_coplanar(&[*self.p1(), *self.p2(), *other.p1(), *other.p2()])
    }

    /// Returns `true` if `other` lies on the infinite extension of `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn is_similar<L: LinearEntity + ?Sized>(&self, other: &L) -> Result<bool> {
        self.p1()
            .is_collinear(&[*self.p2(), *other.p1(), *other.p2()])
    }

    /// Orthogonal projection of `point` onto the infinite extension.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn projection(&self, point: &Point) -> Result<Point> {
        point
            .checked_sub(self.p1())?
            .project(self.direction())?
            .checked_add(self.p1())
    }

    /// The line through `point` parallel to `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn parallel_line(&self, point: &Point) -> Result<Line> {
        Line::new(*point, point.checked_add(self.direction())?)
    }

    /// A line through `point` perpendicular to `self`.
    ///
    /// In 2D it runs along [`normal_direction`](Self::normal_direction). In
    /// 3D it passes through the projection of `point`, or along an
    /// orthogonal direction when `point` lies on `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    fn perpendicular_line(&self, point: &Point) -> Result<Line> {
        ensure_same_dimension(self.ambient_dimension(), point.dimension())?;
        let offset = if self.ambient_dimension() == 2 {
            self.normal_direction()?
        } else if self.p1().is_collinear(&[*self.p2(), *point])? {
            self.direction().orthogonal_direction()
        } else {
            self.projection(point)?.checked_sub(point)?
        };
        Line::new(*point, point.checked_add(&offset)?)
    }

    /// The segment from `point` to its projection onto `self`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `point` lies on the infinite
    /// extension, and `GeometryError::DimensionMismatch` if the dimensions
    /// differ.
    fn perpendicular_segment(&self, point: &Point) -> Result<Segment> {
        if self.p1().is_collinear(&[*self.p2(), *point])? {
            return Err(GeometryError::Degenerate(format!("{point} lies on the line")).into());
        }
        Segment::new(*point, self.projection(point)?)
    }

    /// Whether `self` and `others` all pass through a single point.
    ///
    /// # Errors
    ///
    /// Always returns `OperationError::Unimplemented`.
    fn are_concurrent(&self, _others: &[Line]) -> Result<bool> {
        Err(OperationError::Unimplemented("are_concurrent").into())
    }
}

/// Any of the three linear entity kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Linear {
    Line(Line),
    Ray(Ray),
    Segment(Segment),
}

/// Outcome of intersecting two linear entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The entities share no point.
    Empty,
    Point(Point),
    /// Collinear entities overlapping along a bounded stretch.
    Segment(Segment),
    /// Collinear entities overlapping along a half-infinite stretch.
    Ray(Ray),
    /// Coincident lines.
    Line(Line),
}

impl Intersection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Linear {
    /// Returns `true` if `point` lies on this entity.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        match self {
            Self::Line(l) => l.contains_point(point),
            Self::Ray(r) => r.contains_point(point),
            Self::Segment(s) => s.contains_point(point),
        }
    }

    /// Shortest distance from `point` to this entity.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn distance(&self, point: &Point) -> Result<f64> {
        match self {
            Self::Line(l) => l.distance(point),
            Self::Ray(r) => r.distance(point),
            Self::Segment(s) => s.distance(point),
        }
    }

    /// Intersects two 2D linear entities.
    ///
    /// Crossing entities meet in a point when it lies within both. Parallel
    /// entities that are not collinear never meet. Collinear entities meet
    /// along the overlap of their extents, which may be a single touching
    /// point.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities and
    /// `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn intersection(&self, other: &Linear) -> Result<Intersection> {
        ensure_planar("linear intersection", self.ambient_dimension())?;
        ensure_same_dimension(self.ambient_dimension(), other.ambient_dimension())?;

        let result = if self.is_parallel(other)? {
            if self.is_similar(other)? {
                self.overlap(other)?
            } else {
                Intersection::Empty
            }
        } else {
            self.crossing(other)
        };
        trace!(?self, ?other, ?result, "classified linear intersection");
        Ok(result)
    }

    /// Intersection of two non-parallel 2D entities.
    fn crossing(&self, other: &Linear) -> Intersection {
        let (Some(p), Some(q)) = (self.p1().as_planar(), other.p1().as_planar()) else {
            return Intersection::Empty;
        };
        let d = planar_vector(self.direction());
        let e = planar_vector(other.direction());
        let Some((t, u)) = line_line_intersect_2d(p, &d, q, &e) else {
            return Intersection::Empty;
        };
        let (t_min, t_max) = self.param_range();
        let (u_min, u_max) = other.param_range();
        if !param_in_range(t, t_min, t_max) || !param_in_range(u, u_min, u_max) {
            return Intersection::Empty;
        }
        let t = t.clamp(t_min, t_max);
        let hit = Point::from(p + d * t);
        Intersection::Point(self.snap(other, hit))
    }

    /// Replaces `hit` by a defining point it coincides with, so shared
    /// vertices come back exactly.
    fn snap(&self, other: &Linear, hit: Point) -> Point {
        [self.p1(), self.p2(), other.p1(), other.p2()]
            .into_iter()
            .find(|c| c.displacement(&hit).norm() <= TOLERANCE * c.norm().max(1.0))
            .copied()
            .unwrap_or(hit)
    }

    /// Overlap of two collinear 2D entities, measured along `self`.
    fn overlap(&self, other: &Linear) -> Result<Intersection> {
        let (own_lo, own_hi) = self.bounds_along(self)?;
        let (other_lo, other_hi) = other.bounds_along(self)?;
        let lo = Bound::max_lower(own_lo, other_lo);
        let hi = Bound::min_upper(own_hi, other_hi);
        Ok(match (lo, hi) {
            (Bound::At(t0, a, _), Bound::At(t1, b, _)) => {
                if t1 < t0 - TOLERANCE {
                    Intersection::Empty
                } else if t1 - t0 <= TOLERANCE || a == b {
                    Intersection::Point(a)
                } else {
                    Intersection::Segment(Segment::new(a, b)?)
                }
            }
            // A half-infinite overlap is exactly the ray whose source bounds it.
            (Bound::At(_, _, Some(r)), Bound::Open) | (Bound::Open, Bound::At(_, _, Some(r))) => {
                Intersection::Ray(r)
            }
            (Bound::At(_, p, None), Bound::Open) | (Bound::Open, Bound::At(_, p, None)) => {
                return Err(GeometryError::Degenerate(format!(
                    "half-infinite overlap at {p} has no bounding ray"
                ))
                .into());
            }
            (Bound::Open, Bound::Open) => Intersection::Line(Line::new(*self.p1(), *self.p2())?),
        })
    }

    /// Parameter range along `p1 + t * direction`.
    fn param_range(&self) -> (f64, f64) {
        match self {
            Self::Line(_) => (f64::NEG_INFINITY, f64::INFINITY),
            Self::Ray(_) => (0.0, f64::INFINITY),
            Self::Segment(_) => (0.0, 1.0),
        }
    }

    /// Lower and upper extent of `self`, parametrized along `axis`.
    fn bounds_along(&self, axis: &Linear) -> Result<(Bound, Bound)> {
        let origin = axis.p1().as_planar().copied().unwrap_or_else(Point2::origin);
        let d = planar_vector(axis.direction());
        let param = |p: &Point| parameter_along(&origin, &d, &Point2::new(p.x(), p.y()));
        Ok(match self {
            Self::Line(_) => (Bound::Open, Bound::Open),
            Self::Ray(r) => {
                let start = Bound::At(param(r.source()), *r.source(), Some(*r));
                if r.direction().dot(axis.direction())? > 0.0 {
                    (start, Bound::Open)
                } else {
                    (Bound::Open, start)
                }
            }
            Self::Segment(s) => {
                let a = Bound::At(param(s.p1()), *s.p1(), None);
                let b = Bound::At(param(s.p2()), *s.p2(), None);
                match (a, b) {
                    (Bound::At(ta, ..), Bound::At(tb, ..)) if tb < ta => (b, a),
                    _ => (a, b),
                }
            }
        })
    }
}

fn planar_vector(p: &Point) -> Vector2 {
    Vector2::new(p.x(), p.y())
}

/// One end of an extent along a parametrized line.
#[derive(Debug, Clone, Copy)]
enum Bound {
    /// Unbounded in this direction.
    Open,
    /// Parameter and point of the end, plus the ray starting there if the
    /// end is a ray's source.
    At(f64, Point, Option<Ray>),
}

impl Bound {
    fn max_lower(a: Bound, b: Bound) -> Bound {
        match (a, b) {
            (Bound::Open, x) | (x, Bound::Open) => x,
            (Bound::At(ta, ..), Bound::At(tb, ..)) => {
                if tb > ta {
                    b
                } else {
                    a
                }
            }
        }
    }

    fn min_upper(a: Bound, b: Bound) -> Bound {
        match (a, b) {
            (Bound::Open, x) | (x, Bound::Open) => x,
            (Bound::At(ta, ..), Bound::At(tb, ..)) => {
                if tb < ta {
                    b
                } else {
                    a
                }
            }
        }
    }
}

impl LinearEntity for Linear {
    fn p1(&self) -> &Point {
        match self {
            Self::Line(l) => l.p1(),
            Self::Ray(r) => r.p1(),
            Self::Segment(s) => s.p1(),
        }
    }

    fn p2(&self) -> &Point {
        match self {
            Self::Line(l) => l.p2(),
            Self::Ray(r) => r.p2(),
            Self::Segment(s) => s.p2(),
        }
    }

    fn direction(&self) -> &Point {
        match self {
            Self::Line(l) => l.direction(),
            Self::Ray(r) => r.direction(),
            Self::Segment(s) => s.direction(),
        }
    }
}

impl From<Line> for Linear {
    fn from(l: Line) -> Self {
        Self::Line(l)
    }
}

impl From<Ray> for Linear {
    fn from(r: Ray) -> Self {
        Self::Ray(r)
    }
}

impl From<Segment> for Linear {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

/// Writes `Kind2D(p1, p2)` / `Kind3D(p1, p2)`.
fn write_entity(f: &mut fmt::Formatter<'_>, kind: &str, entity: &impl LinearEntity) -> fmt::Result {
    write!(
        f,
        "{kind}{}D({}, {})",
        entity.ambient_dimension(),
        entity.p1(),
        entity.p2()
    )
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(l) => l.fmt(f),
            Self::Ray(r) => r.fmt(f),
            Self::Segment(s) => s.fmt(f),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GeoError;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn seg(a: (f64, f64), b: (f64, f64)) -> Linear {
        Segment::new(a, b).unwrap().into()
    }

    #[test]
    fn angles() {
        let a = Line::new((0.0, 0.0), (1.0, 0.0)).unwrap();
        let b = Line::new((0.0, 0.0), (-1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(a.angle_between(&b).unwrap(), 3.0 * PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.smallest_angle_between(&b).unwrap(), PI / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_between(&a).unwrap(), 0.0);
    }

    #[test]
    fn parallel_and_perpendicular() {
        let a = Line::new((0.0, 0.0), (1.0, 1.0)).unwrap();
        let b = Segment::new((5.0, 0.0), (7.0, 2.0)).unwrap();
        let c = Ray::new((0.0, 0.0), (1.0, -1.0)).unwrap();
        assert!(a.is_parallel(&b).unwrap());
        assert!(!a.is_parallel(&c).unwrap());
        assert!(a.is_perpendicular(&c).unwrap());
        assert!(!a.is_perpendicular(&b).unwrap());
        assert!(a.is_intersection(&c).unwrap());
        assert!(!a.is_intersection(&b).unwrap());
    }

    #[test]
    fn skew_lines_do_not_intersect() {
        let a = Line::new((0.0, 0.0, 0.0), (1.0, 0.0, 0.0)).unwrap();
        let b = Line::new((0.0, 0.0, 1.0), (0.0, 1.0, 1.0)).unwrap();
        assert!(!a.is_parallel(&b).unwrap());
        assert!(!a.is_intersection(&b).unwrap());
    }

    #[test]
    fn normal_direction_is_clockwise() {
        let l = Line::new((0.0, 0.0), (1.0, 2.0)).unwrap();
        assert_eq!(l.normal_direction().unwrap(), p(2.0, -1.0));
        let l3 = Line::new((0.0, 0.0, 0.0), (1.0, 2.0, 3.0)).unwrap();
        assert!(matches!(
            l3.normal_direction(),
            Err(GeoError::Operation(OperationError::Unsupported { .. }))
        ));
    }

    #[test]
    fn projection_onto_extension() {
        let s = Segment::new((1.0, 0.0), (0.0, 1.0)).unwrap();
        assert_eq!(s.projection(&p(1.0, 1.0)).unwrap(), p(0.5, 0.5));
        // Beyond the segment body still projects onto the infinite line.
        assert_eq!(s.projection(&p(3.0, 0.0)).unwrap(), p(2.0, -1.0));
    }

    #[test]
    fn parallel_and_perpendicular_lines_through_point() {
        let l = Line::new((1.0, 0.0), (0.0, 1.0)).unwrap();
        let par = l.parallel_line(&p(1.0, 1.0)).unwrap();
        assert!(par.is_parallel(&l).unwrap());
        assert!(par.contains_point(&p(1.0, 1.0)).unwrap());

        let perp = l.perpendicular_line(&p(1.0, 1.0)).unwrap();
        assert!(perp.is_perpendicular(&l).unwrap());
        assert!(perp.contains_point(&p(0.5, 0.5)).unwrap());
    }

    #[test]
    fn perpendicular_line_in_3d() {
        let l = Line::new((0.0, 0.0, 0.0), (0.0, 0.0, 1.0)).unwrap();
        let off = Point::new_3d(1.0, 0.0, 5.0);
        let perp = l.perpendicular_line(&off).unwrap();
        assert!(perp.is_perpendicular(&l).unwrap());
        assert!(perp.contains_point(&Point::new_3d(0.0, 0.0, 5.0)).unwrap());

        let on = Point::new_3d(0.0, 0.0, 2.0);
        let perp = l.perpendicular_line(&on).unwrap();
        assert!(perp.is_perpendicular(&l).unwrap());
    }

    #[test]
    fn perpendicular_segment_from_point() {
        let l = Line::new((1.0, 0.0), (0.0, 1.0)).unwrap();
        let s = l.perpendicular_segment(&p(1.0, 1.0)).unwrap();
        assert_eq!(s, Segment::new((1.0, 1.0), (0.5, 0.5)).unwrap());
        assert!(matches!(
            l.perpendicular_segment(&p(2.0, -1.0)),
            Err(GeoError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn concurrency_is_unimplemented() {
        let l = Line::new((0.0, 0.0), (1.0, 0.0)).unwrap();
        assert_eq!(
            l.are_concurrent(&[l]).unwrap_err(),
            GeoError::Operation(OperationError::Unimplemented("are_concurrent"))
        );
    }

    #[test]
    fn crossing_segments() {
        let r = seg((0.0, 0.0), (2.0, 2.0))
            .intersection(&seg((0.0, 2.0), (2.0, 0.0)))
            .unwrap();
        assert_eq!(r, Intersection::Point(p(1.0, 1.0)));
    }

    #[test]
    fn segments_missing_each_other() {
        let r = seg((0.0, 0.0), (1.0, 1.0))
            .intersection(&seg((3.0, 0.0), (2.0, 1.0)))
            .unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn parallel_segments_are_empty() {
        let r = seg((0.0, 0.0), (1.0, 0.0))
            .intersection(&seg((0.0, 1.0), (1.0, 1.0)))
            .unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn touching_at_shared_endpoint_returns_exact_vertex() {
        let r = seg((0.0, 0.0), (0.3, 0.7))
            .intersection(&seg((0.3, 0.7), (1.0, 0.0)))
            .unwrap();
        assert_eq!(r, Intersection::Point(p(0.3, 0.7)));
    }

    #[test]
    fn collinear_partial_overlap() {
        let r = seg((0.0, 0.0), (2.0, 0.0))
            .intersection(&seg((3.0, 0.0), (1.0, 0.0)))
            .unwrap();
        assert_eq!(r, Intersection::Segment(Segment::new((1.0, 0.0), (2.0, 0.0)).unwrap()));
    }

    #[test]
    fn collinear_containment() {
        let r = seg((0.0, 0.0), (4.0, 0.0))
            .intersection(&seg((1.0, 0.0), (2.0, 0.0)))
            .unwrap();
        assert_eq!(r, Intersection::Segment(Segment::new((1.0, 0.0), (2.0, 0.0)).unwrap()));
    }

    #[test]
    fn collinear_end_to_end_touch() {
        let r = seg((0.0, 0.0), (1.0, 1.0))
            .intersection(&seg((1.0, 1.0), (2.0, 2.0)))
            .unwrap();
        assert_eq!(r, Intersection::Point(p(1.0, 1.0)));
    }

    #[test]
    fn collinear_disjoint() {
        let r = seg((0.0, 0.0), (1.0, 0.0))
            .intersection(&seg((2.0, 0.0), (3.0, 0.0)))
            .unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn ray_against_collinear_segment_and_line() {
        let ray: Linear = Ray::new((0.0, 0.0), (1.0, 0.0)).unwrap().into();
        let r = ray.intersection(&seg((-2.0, 0.0), (3.0, 0.0))).unwrap();
        assert_eq!(r, Intersection::Segment(Segment::new((0.0, 0.0), (3.0, 0.0)).unwrap()));

        let line: Linear = Line::new((5.0, 0.0), (6.0, 0.0)).unwrap().into();
        match ray.intersection(&line).unwrap() {
            Intersection::Ray(r) => {
                assert_eq!(*r.source(), p(0.0, 0.0));
                assert!(r.contains_point(&p(10.0, 0.0)).unwrap());
            }
            other => panic!("expected ray, got {other:?}"),
        }

        // A ray running against the line's direction.
        let backward = Ray::new((5.0, 0.0), (4.0, 0.0)).unwrap();
        match line.intersection(&backward.into()).unwrap() {
            Intersection::Ray(r) => {
                assert_eq!(r, backward);
                assert!(r.contains_point(&p(-100.0, 0.0)).unwrap());
                assert!(!r.contains_point(&p(6.0, 0.0)).unwrap());
            }
            other => panic!("expected ray, got {other:?}"),
        }
    }

    #[test]
    fn far_ray_on_short_line_is_returned_in_both_orders() {
        for (line, ray) in [
            (
                Line::new((0.0, 0.0), (1e-9, 0.0)).unwrap(),
                Ray::new((1e8, 0.0), (2e8, 0.0)).unwrap(),
            ),
            (
                Line::new((0.0, 0.0), (1.0, 0.0)).unwrap(),
                Ray::new((1e17, 0.0), (2e17, 0.0)).unwrap(),
            ),
        ] {
            let (l, r): (Linear, Linear) = (line.into(), ray.into());
            assert_eq!(l.intersection(&r).unwrap(), Intersection::Ray(ray));
            assert_eq!(r.intersection(&l).unwrap(), Intersection::Ray(ray));
        }
    }

    #[test]
    fn opposing_rays() {
        let a: Linear = Ray::new((0.0, 0.0), (1.0, 0.0)).unwrap().into();
        let b: Linear = Ray::new((2.0, 0.0), (1.0, 0.0)).unwrap().into();
        assert_eq!(
            a.intersection(&b).unwrap(),
            Intersection::Segment(Segment::new((0.0, 0.0), (2.0, 0.0)).unwrap())
        );
        let c: Linear = Ray::new((0.0, 0.0), (-1.0, 0.0)).unwrap().into();
        assert_eq!(a.intersection(&c).unwrap(), Intersection::Point(p(0.0, 0.0)));
    }

    #[test]
    fn coincident_lines_as_linear() {
        let a: Linear = Line::new((0.0, 0.0), (1.0, 1.0)).unwrap().into();
        let b: Linear = Line::new((2.0, 2.0), (3.0, 3.0)).unwrap().into();
        assert!(matches!(a.intersection(&b).unwrap(), Intersection::Line(_)));
    }

    #[test]
    fn ray_misses_segment_behind_source() {
        let ray: Linear = Ray::new((0.0, 0.0), (1.0, 0.0)).unwrap().into();
        let r = ray.intersection(&seg((-1.0, -1.0), (-1.0, 1.0))).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn spatial_intersection_is_unsupported() {
        let a: Linear = Segment::new((0.0, 0.0, 0.0), (1.0, 0.0, 0.0)).unwrap().into();
        assert!(matches!(
            a.intersection(&a),
            Err(GeoError::Operation(OperationError::Unsupported { .. }))
        ));
    }

    #[test]
    fn linear_display() {
        assert_eq!(
            seg((1.0, 0.0), (0.0, 1.0)).to_string(),
            "Segment2D(Point2D(1, 0), Point2D(0, 1))"
        );
    }
}
