use crate::math::vec2::Vec2;
use crate::shapes::segment::Segment;

/// A closed polygon as produced by closure detection.
///
/// `vertices` is in traversal order and repeats the first vertex at the end, so
/// consecutive pairs are exactly the polygon's directed edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Polygon { vertices }
    }

    /// The directed edges of the cycle, in traversal order.
    pub fn edges(&self) -> Vec<Segment> {
        polygon_edges(&self.vertices)
    }

    /// Unsigned area (shoelace formula).
    pub fn area(&self) -> f64 {
        polygon_area(&self.edges())
    }

    /// Area-weighted centroid, or `None` for a zero-area polygon.
    pub fn centroid(&self) -> Option<Vec2> {
        polygon_centroid(&self.edges())
    }
}

/// Edges between consecutive vertices of a closed vertex sequence.
pub fn polygon_edges(vertices: &[Vec2]) -> Vec<Segment> {
    vertices
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Shoelace area, positive for counter-clockwise edges and negative for clockwise.
///
/// The sum does not depend on the order the edges are listed in, but it does
/// depend on each edge's direction: a reversed edge contributes the negated term.
/// Feed it consistently oriented edges such as [`Polygon::edges`].
pub fn polygon_signed_area(edges: &[Segment]) -> f64 {
    edges.iter().map(Segment::cross).sum::<f64>() / 2.0
}

/// Absolute value of [`polygon_signed_area`].
pub fn polygon_area(edges: &[Segment]) -> f64 {
    polygon_signed_area(edges).abs()
}

/// Centroid of a closed polygon given as consistently oriented edges.
///
/// Returns `None` when the signed area is exactly zero.
pub fn polygon_centroid(edges: &[Segment]) -> Option<Vec2> {
    let mut doubled_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;

    for edge in edges {
        let cross = edge.cross();
        doubled_area += cross;
        cx += (edge.a.x + edge.b.x) * cross;
        cy += (edge.a.y + edge.b.y) * cross;
    }

    let area = doubled_area / 2.0;
    if area == 0.0 {
        return None;
    }

    Some(Vec2::new(cx / (6.0 * area), cy / (6.0 * area)))
}
