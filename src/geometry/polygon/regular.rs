use std::f64::consts::{PI, TAU};

use super::{Polygon, Shape};
use crate::error::{ensure_planar, OperationError, Result};
use crate::geometry::Point;

/// A regular polygon described by its center, circumradius, side count and
/// the angle of its first vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    center: Point,
    radius: f64,
    side_count: usize,
    rotation: f64,
}

impl RegularPolygon {
    /// `rotation` is the angle in radians, measured counter-clockwise from
    /// the positive x axis, at which the first vertex sits.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for a 3D center and
    /// `OperationError::InvalidInput` for fewer than three sides or a radius
    /// that is not positive and finite.
    pub fn new(
        center: impl Into<Point>,
        radius: f64,
        side_count: usize,
        rotation: f64,
    ) -> Result<Self> {
        let center = center.into();
        ensure_planar("RegularPolygon", center.dimension())?;
        if side_count < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a regular polygon needs at least 3 sides, got {side_count}"
            ))
            .into());
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "radius must be positive and finite, got {radius}"
            ))
            .into());
        }
        Ok(Self {
            center,
            radius,
            side_count,
            rotation,
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Circumradius: distance from the center to every vertex.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn side_count(&self) -> usize {
        self.side_count
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Vertices in counter-clockwise order, starting at `rotation`.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        let step = self.central_angle();
        (0..self.side_count)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let angle = self.rotation + step * k as f64;
                Point::new(
                    self.center.x() + self.radius * angle.cos(),
                    self.center.y() + self.radius * angle.sin(),
                )
            })
            .collect()
    }

    /// The equivalent general polygon.
    ///
    /// # Errors
    ///
    /// Propagates polygon construction errors; none occur for a valid
    /// regular polygon.
    pub fn to_polygon(&self) -> Result<Polygon> {
        match Polygon::new(self.vertices())? {
            Shape::Triangle(t) => Ok(t.into_polygon()),
            Shape::Polygon(p) => Ok(p),
            Shape::Point(_) | Shape::Segment(_) => Err(OperationError::InvalidInput(
                "regular polygon collapsed during normalization".into(),
            )
            .into()),
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.sides() * self.radius * self.radius * self.central_angle().sin()
    }

    #[must_use]
    pub fn side_length(&self) -> f64 {
        2.0 * self.radius * (PI / self.sides()).sin()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.sides() * self.side_length()
    }

    /// Inradius: distance from the center to the midpoint of each side.
    #[must_use]
    pub fn apothem(&self) -> f64 {
        self.radius * (PI / self.sides()).cos()
    }

    /// Interior angle in radians.
    #[must_use]
    pub fn interior_angle(&self) -> f64 {
        (self.sides() - 2.0) * PI / self.sides()
    }

    /// Exterior angle in radians.
    #[must_use]
    pub fn exterior_angle(&self) -> f64 {
        self.central_angle()
    }

    /// # Errors
    ///
    /// Always returns `OperationError::Unimplemented`; circles are not
    /// modelled.
    pub fn circumcircle(&self) -> Result<()> {
        Err(OperationError::Unimplemented("circumcircle").into())
    }

    /// # Errors
    ///
    /// Always returns `OperationError::Unimplemented`; circles are not
    /// modelled.
    pub fn incircle(&self) -> Result<()> {
        Err(OperationError::Unimplemented("incircle").into())
    }

    fn central_angle(&self) -> f64 {
        TAU / self.sides()
    }

    #[allow(clippy::cast_precision_loss)]
    fn sides(&self) -> f64 {
        self.side_count as f64
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GeoError;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            RegularPolygon::new((0.0, 0.0), 1.0, 2, 0.0),
            Err(GeoError::Operation(OperationError::InvalidInput(_)))
        ));
        assert!(matches!(
            RegularPolygon::new((0.0, 0.0), -1.0, 4, 0.0),
            Err(GeoError::Operation(OperationError::InvalidInput(_)))
        ));
        assert!(matches!(
            RegularPolygon::new((0.0, 0.0, 0.0), 1.0, 4, 0.0),
            Err(GeoError::Operation(OperationError::Unsupported { .. }))
        ));
    }

    #[test]
    fn square_metrics() {
        // Axis-aligned square with side 2.
        let sq = RegularPolygon::new((1.0, 1.0), 2.0_f64.sqrt(), 4, FRAC_PI_4).unwrap();
        assert_abs_diff_eq!(sq.area(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.side_length(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.perimeter(), 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.apothem(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.interior_angle(), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.exterior_angle(), PI / 2.0, epsilon = 1e-12);

        let v = sq.vertices();
        assert_eq!(v.len(), 4);
        assert_abs_diff_eq!(v[0].x(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[0].y(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2].x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2].y(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn general_polygon_agrees() {
        let hex = RegularPolygon::new((3.0, -1.0), 2.0, 6, 0.3).unwrap();
        let poly = hex.to_polygon().unwrap();
        assert_eq!(poly.vertices().len(), 6);
        assert_abs_diff_eq!(poly.area(), hex.area(), epsilon = 1e-9);
        assert_abs_diff_eq!(poly.perimeter(), hex.perimeter(), epsilon = 1e-9);
        assert!(poly.is_convex());
        for angle in poly.angles() {
            assert_abs_diff_eq!(angle, hex.interior_angle().to_degrees(), epsilon = 1e-9);
        }
    }

    #[test]
    fn triangle_converts_too() {
        let tri = RegularPolygon::new((0.0, 0.0), 1.0, 3, 0.0).unwrap();
        assert_eq!(tri.to_polygon().unwrap().vertices().len(), 3);
    }

    #[test]
    fn circles_are_unimplemented() {
        let sq = RegularPolygon::new((0.0, 0.0), 1.0, 4, 0.0).unwrap();
        assert_eq!(
            sq.circumcircle().unwrap_err(),
            GeoError::Operation(OperationError::Unimplemented("circumcircle"))
        );
        assert!(sq.incircle().is_err());
    }
}
