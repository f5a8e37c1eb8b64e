pub mod closure;
pub mod polygon;
pub mod segment;

pub use closure::{detect_closed_polygon, is_closed_polygon, PointKey};
pub use polygon::{polygon_area, polygon_centroid, polygon_edges, polygon_signed_area, Polygon};
pub use segment::Segment;
