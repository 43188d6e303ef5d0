//! Vertex-list normalization for polygon construction.

use std::iter;

use tracing::trace;

use crate::error::{ensure_same_dimension, GeometryError, OperationError, Result};
use crate::geometry::Point;

/// Normalizes a raw vertex list.
///
/// The result has no two cyclically adjacent vertices equal, no closing
/// duplicate of the first vertex, and no three cyclically consecutive
/// vertices collinear. It holds at least one vertex, and running it through
/// `normalize` again returns it unchanged.
///
/// # Errors
///
/// Returns `GeometryError::InsufficientPoints` for an empty list,
/// `GeometryError::DimensionMismatch` if the vertices disagree on dimension
/// and `OperationError::Unimplemented` for 3D vertices.
pub(super) fn normalize(raw: Vec<Point>) -> Result<Vec<Point>> {
    let Some(first) = raw.first() else {
        return Err(GeometryError::InsufficientPoints {
            expected: 1,
            actual: 0,
        }
        .into());
    };
    let dimension = first.dimension();
    for p in &raw {
        ensure_same_dimension(dimension, p.dimension())?;
    }
    if dimension != 2 {
        return Err(OperationError::Unimplemented("polygons in 3D").into());
    }

    let mut vertices = drop_repeats(raw);
    while let Some(next) = without_collinear_vertex(&vertices)? {
        vertices = drop_repeats(next);
    }
    Ok(vertices)
}

/// Removes cyclically adjacent duplicates, including a closing vertex equal
/// to the first one.
fn drop_repeats(vertices: Vec<Point>) -> Vec<Point> {
    let before = vertices.len();
    let mut kept: Vec<Point> = Vec::with_capacity(before);
    for p in vertices {
        if kept.last() != Some(&p) {
            kept.push(p);
        }
    }
    while kept.len() > 1 && kept.first() == kept.last() {
        kept.pop();
    }
    if kept.len() < before {
        trace!(dropped = before - kept.len(), "dropped repeated vertices");
    }
    kept
}

/// Returns a copy of `vertices` without the first middle vertex of a
/// collinear cyclic triple, or `None` when there is none.
///
/// Triples are scanned with the middle vertex at index 1, 2, ..., n - 1 and
/// finally 0, so an open collinear run keeps its first and last points.
fn without_collinear_vertex(vertices: &[Point]) -> Result<Option<Vec<Point>>> {
    let n = vertices.len();
    if n < 3 {
        return Ok(None);
    }
    for i in (1..n).chain(iter::once(0)) {
        let prev = vertices[(i + n - 1) % n];
        let next = vertices[(i + 1) % n];
        if prev.is_collinear(&[vertices[i], next])? {
            trace!(vertex = %vertices[i], "dropped collinear vertex");
            let kept = vertices
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, p)| *p)
                .collect();
            return Ok(Some(kept));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            normalize(Vec::new()).unwrap_err(),
            GeoError::Geometry(GeometryError::InsufficientPoints {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        let raw = vec![Point::new(0.0, 0.0), Point::new_3d(1.0, 0.0, 0.0)];
        assert!(matches!(
            normalize(raw),
            Err(GeoError::Geometry(GeometryError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn spatial_polygons_are_unimplemented() {
        let raw = vec![
            Point::new_3d(0.0, 0.0, 0.0),
            Point::new_3d(1.0, 0.0, 0.0),
            Point::new_3d(0.0, 1.0, 0.0),
        ];
        assert!(matches!(
            normalize(raw),
            Err(GeoError::Operation(OperationError::Unimplemented(_)))
        ));
    }

    #[test]
    fn drops_adjacent_and_closing_duplicates() {
        let raw = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(normalize(raw).unwrap(), pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
    }

    #[test]
    fn drops_collinear_middle_vertices() {
        let raw = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 1.0)]);
        assert_eq!(
            normalize(raw).unwrap(),
            pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
        );
    }

    #[test]
    fn collinear_run_keeps_its_ends() {
        let raw = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(normalize(raw).unwrap(), pts(&[(0.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn back_and_forth_collapses_completely() {
        let raw = pts(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(normalize(raw).unwrap(), pts(&[(0.0, 0.0), (1.0, 1.0)]));

        let raw = pts(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
        assert_eq!(normalize(raw).unwrap(), pts(&[(3.0, 3.0)]));
    }

    #[test]
    fn spike_removal_re_checks_duplicates() {
        // B sticks out and back, leaving A adjacent to itself.
        let raw = pts(&[(0.0, 0.0), (5.0, 0.0), (0.0, 0.0), (0.0, 3.0), (-2.0, 1.0)]);
        let out = normalize(raw).unwrap();
        assert_eq!(out, pts(&[(0.0, 0.0), (0.0, 3.0), (-2.0, 1.0)]));
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 1.0),
            (1.0, 1.5),
            (0.0, 0.0),
        ]);
        let once = normalize(raw).unwrap();
        let twice = normalize(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
