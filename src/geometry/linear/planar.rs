use super::{Line, LinearEntity};
use crate::error::{ensure_planar, Result};
use crate::geometry::Point;

/// Capabilities that only make sense for 2D linear entities.
///
/// Implemented for every [`LinearEntity`]; each method fails with
/// `OperationError::Unsupported` when the entity is 3D.
pub trait LinearEntity2D: LinearEntity {
    /// `dy / dx`, or `None` for a vertical entity.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    #[allow(clippy::float_cmp)]
    fn slope(&self) -> Result<Option<f64>> {
        ensure_planar("slope", self.ambient_dimension())?;
        let d = self.direction();
        Ok((d.x() != 0.0).then(|| d.y() / d.x()))
    }

    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    #[allow(clippy::float_cmp)]
    fn is_vertical(&self) -> Result<bool> {
        ensure_planar("is_vertical", self.ambient_dimension())?;
        Ok(self.p1().x() == self.p2().x())
    }

    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    #[allow(clippy::float_cmp)]
    fn is_horizontal(&self) -> Result<bool> {
        ensure_planar("is_horizontal", self.ambient_dimension())?;
        Ok(self.p1().y() == self.p2().y())
    }

    /// Coefficients `(a, b, c)` of `ax + by + c = 0`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    fn coefficients(&self) -> Result<(f64, f64, f64)> {
        let (x1, y1) = (self.p1().x(), self.p1().y());
        let (x2, y2) = (self.p2().x(), self.p2().y());
        Ok(if self.is_vertical()? {
            (1.0, 0.0, -x1)
        } else if self.is_horizontal()? {
            (0.0, 1.0, -y1)
        } else {
            (y1 - y2, x2 - x1, x1 * y2 - y1 * x2)
        })
    }

    /// The standard-form equation, e.g. `-1x - 1y + 1 = 0`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    fn equation(&self) -> Result<String> {
        let (a, b, c) = self.coefficients()?;
        Ok(format!(
            "{}x{}{} = 0",
            a + 0.0,
            signed_term(b, "y"),
            signed_term(c, "")
        ))
    }

    /// The line through the origin perpendicular to `self`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    fn normal(&self) -> Result<Line> {
        ensure_planar("normal", self.ambient_dimension())?;
        let d = self.direction();
        Line::new(Point::new(-d.y(), d.x()), Point::new(d.y(), -d.x()))
    }

    /// Bounding box `(xmin, ymin, xmax, ymax)` of the defining points.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unsupported` for 3D entities.
    fn bounds(&self) -> Result<(f64, f64, f64, f64)> {
        ensure_planar("bounds", self.ambient_dimension())?;
        let (a, b) = self.points();
        Ok((
            a.x().min(b.x()),
            a.y().min(b.y()),
            a.x().max(b.x()),
            a.y().max(b.y()),
        ))
    }
}

impl<T: LinearEntity + ?Sized> LinearEntity2D for T {}

fn signed_term(value: f64, suffix: &str) -> String {
    // Adding zero folds -0.0 into 0.0.
    let value = value + 0.0;
    if value < 0.0 {
        format!(" - {}{suffix}", -value)
    } else {
        format!(" + {value}{suffix}")
    }
}
