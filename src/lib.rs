pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeoError, GeometryError, OperationError, Result};
pub use geometry::{
    Intersection, Line, LineIntersection, Linear, LinearEntity, LinearEntity2D, Point, Polygon,
    PolygonIntersection, Ray, RegularPolygon, Segment, Shape, Triangle,
};
