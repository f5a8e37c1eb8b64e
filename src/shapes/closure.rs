//! Closed-polygon detection over the undirected graph formed by an outline's segments.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::math::vec2::Vec2;
use crate::shapes::polygon::Polygon;
use crate::shapes::segment::Segment;

/// Hashable identity of an outline endpoint.
///
/// Endpoints come from the editor's grid snapping, so two segments share a vertex
/// only when their coordinates are bit-for-bit equal. `-0.0` is folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    fn bits(value: f64) -> u64 {
        if value == 0.0 {
            0.0f64.to_bits()
        } else {
            value.to_bits()
        }
    }

    pub fn point(self) -> Vec2 {
        Vec2::new(f64::from_bits(self.x), f64::from_bits(self.y))
    }
}

impl From<Vec2> for PointKey {
    fn from(p: Vec2) -> Self {
        PointKey {
            x: Self::bits(p.x),
            y: Self::bits(p.y),
        }
    }
}

/// Checks that `segments` form exactly one simple closed polygon.
///
/// Every endpoint must connect to exactly two distinct neighbours, and a walk
/// around the cycle must come back to its start having used every segment once.
/// The second condition rejects outlines made of several disjoint loops, which
/// pass the degree test on their own.
///
/// On success the polygon's vertices are returned in traversal order with the
/// starting vertex repeated at the end. Segment order and direction in the input
/// do not matter.
pub fn detect_closed_polygon(segments: &[Segment]) -> Option<Polygon> {
    let first = segments.first()?;

    let mut adjacency: HashMap<PointKey, BTreeSet<PointKey>> = HashMap::new();
    for segment in segments {
        let (a, b) = (PointKey::from(segment.a), PointKey::from(segment.b));
        adjacency.entry(a).or_default().insert(b);
        adjacency.entry(b).or_default().insert(a);
    }

    if adjacency.values().any(|neighbours| neighbours.len() != 2) {
        return None;
    }

    let start = PointKey::from(first.a);
    let mut visited_edges: HashSet<(PointKey, PointKey)> = HashSet::with_capacity(segments.len());
    let mut cycle = vec![start];
    let mut previous: Option<PointKey> = None;
    let mut current = start;

    loop {
        let next = adjacency
            .get(&current)?
            .iter()
            .copied()
            .find(|&n| Some(n) != previous)?;
        let edge = if current <= next { (current, next) } else { (next, current) };

        if !visited_edges.insert(edge) {
            break;
        }

        cycle.push(next);
        previous = Some(current);
        current = next;
    }

    let returned_to_start = cycle.last() == Some(&start);
    if returned_to_start && visited_edges.len() == segments.len() {
        Some(Polygon::new(cycle.into_iter().map(PointKey::point).collect()))
    } else {
        None
    }
}

/// Convenience wrapper around [`detect_closed_polygon`].
pub fn is_closed_polygon(segments: &[Segment]) -> bool {
    detect_closed_polygon(segments).is_some()
}
