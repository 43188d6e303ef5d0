pub mod linear;
pub mod point;
pub mod polygon;

pub use linear::{
    Intersection, Line, LineIntersection, Linear, LinearEntity, LinearEntity2D, Ray, Segment,
};
pub use point::Point;
pub use polygon::{Polygon, PolygonIntersection, RegularPolygon, Shape, Triangle};
