use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;

use crate::error::{
    ensure_planar, ensure_same_dimension, GeoError, GeometryError, OperationError, Result,
};
use crate::math::{nearly_eq, nearly_zero, vanishes, Point2, Point3, Vector3};

/// A point in 2D or 3D space.
///
/// The dimension is fixed when the point is built and every binary
/// operation checks that both operands agree on it. Points double as
/// position vectors: `direction`, `unit` and `project` treat them as
/// vectors from the origin.
///
/// `==` compares coordinates exactly; use [`Point::equals`] for tolerant
/// comparison. Points with NaN coordinates are never equal to anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point {
    Planar(Point2),
    Spatial(Point3),
}

impl Point {
    /// Creates a 2D point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::Planar(Point2::new(x, y))
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self::Spatial(Point3::new(x, y, z))
    }

    /// Creates a point from a coordinate slice of length 2 or 3.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidDimension` for any other length.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::new_3d(x, y, z)),
            _ => Err(GeometryError::InvalidDimension(coords.len()).into()),
        }
    }

    /// Returns the number of coordinates (2 or 3).
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        match self {
            Self::Planar(p) => p.coords.as_slice(),
            Self::Spatial(p) => p.coords.as_slice(),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords()[0]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords()[1]
    }

    /// Returns the z coordinate, or `None` for a 2D point.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match self {
            Self::Planar(_) => None,
            Self::Spatial(p) => Some(p.z),
        }
    }

    /// Returns the underlying 2D point, if this is one.
    #[must_use]
    pub fn as_planar(&self) -> Option<&Point2> {
        match self {
            Self::Planar(p) => Some(p),
            Self::Spatial(_) => None,
        }
    }

    /// Embeds the point in 3D, with `z = 0` for 2D points.
    #[must_use]
    pub fn to_vector3(&self) -> Vector3 {
        match self {
            Self::Planar(p) => Vector3::new(p.x, p.y, 0.0),
            Self::Spatial(p) => p.coords,
        }
    }

    /// Returns the origin of the same dimension.
    #[must_use]
    pub fn origin(&self) -> Self {
        match self {
            Self::Planar(_) => Self::new(0.0, 0.0),
            Self::Spatial(_) => Self::new_3d(0.0, 0.0, 0.0),
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Planar(p) => Self::new(f(p.x), f(p.y)),
            Self::Spatial(p) => Self::new_3d(f(p.x), f(p.y), f(p.z)),
        }
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        match (self, other) {
            (Self::Planar(a), Self::Planar(b)) => Ok(Self::new(f(a.x, b.x), f(a.y, b.y))),
            (Self::Spatial(a), Self::Spatial(b)) => {
                Ok(Self::new_3d(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z)))
            }
            _ => Err(self.mismatch(other)),
        }
    }

    fn mismatch(&self, other: &Self) -> GeoError {
        GeometryError::DimensionMismatch {
            expected: self.dimension(),
            found: other.dimension(),
        }
        .into()
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        ensure_same_dimension(self.dimension(), other.dimension())
    }

    fn paired<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.coords().iter().copied().zip(other.coords().iter().copied())
    }

    /// Coordinate-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Coordinate-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a - b)
    }

    /// `to - self` for points already known to share a dimension.
    ///
    /// Mixed dimensions are embedded in 3D rather than rejected; callers
    /// validate dimensions at construction.
    pub(crate) fn displacement(&self, to: &Self) -> Self {
        match (self, to) {
            (Self::Planar(a), Self::Planar(b)) => Self::Planar(Point2::from(b - a)),
            _ => Self::Spatial(Point3::from(to.to_vector3() - self.to_vector3())),
        }
    }

    /// `self + offset` for points already known to share a dimension.
    pub(crate) fn shifted(&self, offset: &Self) -> Self {
        match (self, offset) {
            (Self::Planar(a), Self::Planar(b)) => Self::new(a.x + b.x, a.y + b.y),
            _ => Self::Spatial(Point3::from(self.to_vector3() + offset.to_vector3())),
        }
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.paired(other).map(|(a, b)| a * b).sum())
    }

    /// Signed 2D cross product `self.x * other.y - self.y * other.x`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D points and
    /// `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn cross(&self, other: &Self) -> Result<f64> {
        ensure_planar("cross product", self.dimension())?;
        self.check_dimension(other)?;
        Ok(self.x() * other.y() - self.y() * other.x())
    }

    /// Euclidean distance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn distance(&self, other: &Self) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self
            .paired(other)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt())
    }

    /// Sum of absolute coordinate differences.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn taxicab_distance(&self, other: &Self) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.paired(other).map(|(a, b)| (a - b).abs()).sum())
    }

    /// Midpoint between `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn midpoint(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| (a + b) / 2.0)
    }

    /// Distance from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.coords().iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Scales the position vector to unit length.
    ///
    /// The result is NaN for the origin.
    #[must_use]
    pub fn unit(&self) -> Self {
        let len = self.norm();
        self.map(|c| c / len)
    }

    /// Projects `self` onto the line through the origin and `onto`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn project(&self, onto: &Self) -> Result<Self> {
        let scale = self.dot(onto)? / onto.dot(onto)?;
        Ok(*onto * scale)
    }

    /// Returns `true` if every coordinate is [`nearly_zero`].
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coords().iter().all(|&c| nearly_zero(c))
    }

    /// A non-zero vector orthogonal to the line through the origin and `self`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn orthogonal_direction(&self) -> Self {
        let (x, y) = (self.x(), self.y());
        let (a, b) = if x == 0.0 {
            (1.0, 0.0)
        } else if y == 0.0 {
            (0.0, 1.0)
        } else {
            (-y, x)
        };
        match self {
            Self::Planar(_) => Self::new(a, b),
            Self::Spatial(_) => Self::new_3d(a, b, 0.0),
        }
    }

    /// Rotates counter-clockwise by `angle` radians about `pivot`.
    ///
    /// Coordinates are rounded to 6 decimal places.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D points and
    /// `GeometryError::DimensionMismatch` if `pivot` is not 2D.
    pub fn rotate(&self, angle: f64, pivot: &Self) -> Result<Self> {
        ensure_planar("rotate", self.dimension())?;
        let rel = self.checked_sub(pivot)?;
        let (s, c) = angle.sin_cos();
        let (x, y) = (rel.x(), rel.y());
        Ok(Self::new(
            round6(x * c - y * s + pivot.x()),
            round6(x * s + y * c + pivot.y()),
        ))
    }

    /// Moves a 2D point by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D points.
    pub fn translate(&self, dx: f64, dy: f64) -> Result<Self> {
        ensure_planar("translate", self.dimension())?;
        Ok(Self::new(self.x() + dx, self.y() + dy))
    }

    /// Multiplies coordinates component-wise by `factors`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the dimensions differ.
    pub fn scale(&self, factors: &Self) -> Result<Self> {
        self.zip_map(factors, |a, f| a * f)
    }

    /// Bounding box `(xmin, ymin, xmax, ymax)` of a 2D point.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D points.
    pub fn bounds(&self) -> Result<(f64, f64, f64, f64)> {
        ensure_planar("bounds", self.dimension())?;
        Ok((self.x(), self.y(), self.x(), self.y()))
    }

    /// Tolerant equality: same dimension and every coordinate `nearly_eq`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self.paired(other).all(|(a, b)| nearly_eq(a, b))
    }

    /// Returns `true` if `self` and all of `others` lie on one line.
    ///
    /// Zero or one other point is always collinear. In 3D the cross terms of
    /// the xy, yz and xz projections must all vanish.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if any dimension differs.
    pub fn is_collinear(&self, others: &[Self]) -> Result<bool> {
        for other in others {
            self.check_dimension(other)?;
        }
        let Some(anchor) = others.iter().find(|p| *p != self) else {
            return Ok(true);
        };
        let u = anchor.to_vector3() - self.to_vector3();
        let u_len = u.norm();
        Ok(others.iter().all(|p| {
            let v = p.to_vector3() - self.to_vector3();
            let scale = u_len * v.norm();
            vanishes(u.x * v.y - u.y * v.x, scale)
                && vanishes(u.y * v.z - u.z * v.y, scale)
                && vanishes(u.x * v.z - u.z * v.x, scale)
        }))
    }

    /// Returns `true` if there is a plane containing all `points`.
    ///
    /// 2D point sets are trivially coplanar.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the points disagree on
    /// dimension.
    pub fn are_coplanar(points: &[Self]) -> Result<bool> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(true);
        };
        for p in rest {
            first.check_dimension(p)?;
        }
        if first.dimension() == 2 || points.len() < 4 {
            return Ok(true);
        }
        let Some(second) = rest.iter().find(|p| *p != first) else {
            return Ok(true);
        };
        let mut third = None;
        for p in rest {
            if !first.is_collinear(&[*second, *p])? {
                third = Some(*p);
                break;
            }
        }
        let Some(third) = third else {
            return Ok(true);
        };
        let origin = first.to_vector3();
        let normal = (second.to_vector3() - origin).cross(&(third.to_vector3() - origin));
        let n_len = normal.norm();
        Ok(rest.iter().all(|p| {
            let v = p.to_vector3() - origin;
            vanishes(normal.dot(&v), n_len * v.norm())
        }))
    }

    /// Fails: concyclicity needs circles, which this kernel does not model.
    ///
    /// # Errors
    ///
    /// Always returns `OperationError::Unimplemented`.
    pub fn is_concyclic(&self, _others: &[Self]) -> Result<bool> {
        Err(OperationError::Unimplemented("is_concyclic").into())
    }
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

/// Reflexive only for points with non-NaN coordinates; a NaN point is not
/// equal to itself, so it must not be used as a map or set key.
impl Eq for Point {}

/// Consistent with `==` for non-NaN coordinates. A NaN point hashes
/// deterministically, but never matches an existing key.
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension().hash(state);
        for c in self.coords() {
            // -0.0 == 0.0, so both must hash alike.
            (c + 0.0).to_bits().hash(state);
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        self.map(|c| c * factor)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::Planar(p)
    }
}

impl From<Point3> for Point {
    fn from(p: Point3) -> Self {
        Self::Spatial(p)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar(p) => write!(f, "Point2D({}, {})", p.x, p.y),
            Self::Spatial(p) => write!(f, "Point3D({}, {}, {})", p.x, p.y, p.z),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn from_coords_dispatches_on_length() {
        assert_eq!(Point::from_coords(&[1.0, 2.0]).unwrap().dimension(), 2);
        assert_eq!(Point::from_coords(&[1.0, 2.0, 3.0]).unwrap().dimension(), 3);
        assert_eq!(
            Point::from_coords(&[1.0]).unwrap_err(),
            GeoError::Geometry(GeometryError::InvalidDimension(1))
        );
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a.checked_add(&b).unwrap(), Point::new(4.0, 1.0));
        assert_eq!(a.checked_sub(&b).unwrap(), Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_abs_diff_eq!(a.dot(&b).unwrap(), 1.0);
        assert_abs_diff_eq!(a.cross(&b).unwrap(), -7.0);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new_3d(1.0, 2.0, 3.0);
        let expected = GeoError::Geometry(GeometryError::DimensionMismatch {
            expected: 2,
            found: 3,
        });
        assert_eq!(a.distance(&b).unwrap_err(), expected);
        assert_eq!(a.checked_add(&b).unwrap_err(), expected);
        assert_eq!(a.dot(&b).unwrap_err(), expected);
    }

    #[test]
    fn cross_is_planar_only() {
        let a = Point::new_3d(1.0, 0.0, 0.0);
        assert!(matches!(
            a.cross(&a),
            Err(GeoError::Operation(OperationError::Unsupported { .. }))
        ));
    }

    #[test]
    fn distances() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert_abs_diff_eq!(a.distance(&b).unwrap(), 2.0_f64.sqrt());
        assert_abs_diff_eq!(a.taxicab_distance(&b).unwrap(), 2.0);
        assert_abs_diff_eq!(a.distance(&a).unwrap(), 0.0);
        assert_eq!(a.midpoint(&b).unwrap(), Point::new(0.5, 0.5));
    }

    #[test]
    fn unit_and_projection() {
        let v = Point::new(3.0, 4.0);
        let u = v.unit();
        assert_abs_diff_eq!(u.x(), 0.6);
        assert_abs_diff_eq!(u.y(), 0.8);

        let p = Point::new(2.0, 2.0);
        let proj = p.project(&Point::new(1.0, 0.0)).unwrap();
        assert_eq!(proj, Point::new(2.0, 0.0));
    }

    #[test]
    fn zero_and_origin() {
        assert!(Point::new(0.0, -0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
        assert!(!Point::new(0.0, 1e-300).is_zero());
        assert!(Point::new_3d(-0.0, 0.0, -0.0).is_zero());
        assert_eq!(Point::new_3d(1.0, 2.0, 3.0).origin(), Point::new_3d(0.0, 0.0, 0.0));
    }

    #[test]
    fn orthogonal_direction_cases() {
        assert_eq!(Point::new(0.0, 5.0).orthogonal_direction(), Point::new(1.0, 0.0));
        assert_eq!(Point::new(5.0, 0.0).orthogonal_direction(), Point::new(0.0, 1.0));
        assert_eq!(Point::new(2.0, 3.0).orthogonal_direction(), Point::new(-3.0, 2.0));
        let p = Point::new_3d(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(p.dot(&p.orthogonal_direction()).unwrap(), 0.0);
    }

    #[test]
    fn rotate_about_pivot() {
        let p = Point::new(2.0, 1.0);
        let r = p.rotate(PI / 2.0, &Point::new(1.0, 1.0)).unwrap();
        assert_eq!(r, Point::new(1.0, 2.0));
        let r = Point::new(1.0, 0.0).rotate(PI, &Point::new(0.0, 0.0)).unwrap();
        assert_eq!(r, Point::new(-1.0, 0.0));
    }

    #[test]
    fn collinear_2d() {
        let a = Point::new(0.0, 0.0);
        let pts = [Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(-3.0, -3.0)];
        assert!(a.is_collinear(&pts).unwrap());
        assert!(!a.is_collinear(&[Point::new(1.0, 1.0), Point::new(2.0, 2.1)]).unwrap());
        assert!(a.is_collinear(&[Point::new(5.0, 1.0)]).unwrap());
        assert!(a.is_collinear(&[]).unwrap());
    }

    #[test]
    fn collinear_with_repeated_base() {
        let a = Point::new(0.0, 0.0);
        let pts = [a, Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        assert!(!a.is_collinear(&pts).unwrap());
    }

    #[test]
    fn collinear_3d() {
        let a = Point::new_3d(1.0, 2.0, 3.0);
        let b = Point::new_3d(2.0, 4.0, 6.0);
        let c = Point::new_3d(3.0, 6.0, 9.0);
        assert!(a.is_collinear(&[b, c]).unwrap());
        let d = Point::new_3d(1.0, 2.0, 4.0);
        assert!(!a.is_collinear(&[b, d]).unwrap());
    }

    #[test]
    fn coplanar_points() {
        let pts = [
            Point::new_3d(0.0, 0.0, 1.0),
            Point::new_3d(1.0, 0.0, 1.0),
            Point::new_3d(0.0, 1.0, 1.0),
            Point::new_3d(5.0, 7.0, 1.0),
        ];
        assert!(Point::are_coplanar(&pts).unwrap());
        let mut off = pts;
        off[3] = Point::new_3d(5.0, 7.0, 2.0);
        assert!(!Point::are_coplanar(&off).unwrap());
    }

    #[test]
    fn tolerant_equals() {
        let a = Point::new(0.1 + 0.2, 1.0);
        assert_ne!(a, Point::new(0.3, 1.0));
        assert!(a.equals(&Point::new(0.3, 1.0)));
        assert!(!a.equals(&Point::new_3d(0.3, 1.0, 0.0)));
    }

    #[test]
    fn hash_treats_signed_zero_alike() {
        let mut set = HashSet::new();
        set.insert(Point::new(0.0, 1.0));
        assert!(set.contains(&Point::new(-0.0, 1.0)));
    }

    #[test]
    fn nan_point_is_not_equal_to_itself() {
        let nan = Point::new(f64::NAN, 1.0);
        let copy = nan;
        assert_ne!(nan, copy);
        assert!(!nan.equals(&copy));

        let mut set = HashSet::new();
        set.insert(nan);
        assert!(!set.contains(&nan));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "Point2D(1, 2.5)");
        assert_eq!(Point::new_3d(1.0, 2.0, 3.0).to_string(), "Point3D(1, 2, 3)");
    }
}
