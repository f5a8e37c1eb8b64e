use crate::math::{Aabb, Vec2};
use crate::shapes::Segment;

/// Index of a body in the collection a [`Simulation`](crate::world::Simulation) is built from.
pub type BodyId = usize;

/// Stroke width of drawn outlines, in drawing units.
pub const LINE_WIDTH: f64 = 3.0;

/// Link from one pivot to a point on another body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotLink {
    /// Body the pivot is pinned to.
    pub body: BodyId,
    /// Pivot point on that body, in its local coordinates.
    pub point: Vec2,
}

/// An attachment point on a body, in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub point: Vec2,
    pub link: Option<PivotLink>,
}

impl Pivot {
    pub fn new(point: Vec2) -> Self {
        Self { point, link: None }
    }

    pub fn linked(point: Vec2, link: PivotLink) -> Self {
        Self { point, link: Some(link) }
    }
}

/// A user-drawn shape: an outline of line segments plus pivot slots.
///
/// Pivot slots are positional handles owned by the editor. Removing a pivot
/// empties its slot instead of shifting the ones after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub visible: bool,
    /// Anchored bodies are held at rest every tick.
    pub anchored: bool,
    pub outline: Vec<Segment>,
    pub pivots: Vec<Option<Pivot>>,
}

impl Body {
    /// Creates a visible, free body with no geometry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            anchored: false,
            outline: Vec::new(),
            pivots: Vec::new(),
        }
    }

    /// Creates a body whose outline joins `vertices` in order and closes back to the first.
    pub fn from_vertices(name: impl Into<String>, vertices: &[Vec2]) -> Self {
        let mut body = Self::new(name);
        let n = vertices.len();
        for i in 0..n {
            body.add_segment(Segment::new(vertices[i], vertices[(i + 1) % n]));
        }
        body
    }

    /// Sets the anchored flag.
    #[must_use]
    pub fn anchored(mut self, anchored: bool) -> Self {
        self.anchored = anchored;
        self
    }

    /// Appends an outline segment and returns its index.
    pub fn add_segment(&mut self, segment: Segment) -> usize {
        self.outline.push(segment);
        self.outline.len() - 1
    }

    /// Appends an unlinked pivot and returns its slot.
    pub fn add_pivot(&mut self, point: Vec2) -> usize {
        self.pivots.push(Some(Pivot::new(point)));
        self.pivots.len() - 1
    }

    /// Empties a pivot slot, returning what it held. Later slots keep their indices.
    pub fn clear_pivot(&mut self, slot: usize) -> Option<Pivot> {
        self.pivots.get_mut(slot).and_then(Option::take)
    }

    /// Pins the pivot in `slot` to a point on another body.
    ///
    /// Returns `false` if the slot does not exist or is empty.
    pub fn link_pivot(&mut self, slot: usize, link: PivotLink) -> bool {
        match self.pivots.get_mut(slot) {
            Some(Some(pivot)) => {
                pivot.link = Some(link);
                true
            }
            _ => false,
        }
    }

    /// Occupied pivot slots with their indices.
    pub fn live_pivots(&self) -> impl Iterator<Item = (usize, &Pivot)> + '_ {
        self.pivots
            .iter()
            .enumerate()
            .filter_map(|(slot, pivot)| pivot.as_ref().map(|p| (slot, p)))
    }

    /// Bounds of all outline endpoints and pivots, padded by the stroke width.
    ///
    /// An empty body yields a zero box at the origin.
    pub fn bounds(&self) -> Aabb {
        let points = self
            .outline
            .iter()
            .flat_map(|s| [s.a, s.b])
            .chain(self.live_pivots().map(|(_, p)| p.point));

        match Aabb::from_points(points) {
            Some(bounds) => bounds.padded(LINE_WIDTH),
            None => Aabb::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Body {
        Body::from_vertices(
            "Square",
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(0.0, 2.0),
            ],
        )
    }

    #[test]
    fn test_body_new_defaults() {
        let body = Body::new("Unnamed Drawing");
        assert_eq!(body.name, "Unnamed Drawing");
        assert!(body.visible);
        assert!(!body.anchored);
        assert!(body.outline.is_empty());
        assert!(body.pivots.is_empty());
        assert!(Body::new("Ground").anchored(true).anchored);
    }

    #[test]
    fn test_from_vertices_closes_outline() {
        let body = square();
        assert_eq!(body.outline.len(), 4);
        assert_eq!(body.outline[3], Segment::new(Vec2::new(0.0, 2.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_clear_pivot_keeps_slot_indices() {
        let mut body = square();
        let first = body.add_pivot(Vec2::new(0.0, 0.0));
        let second = body.add_pivot(Vec2::new(1.0, 1.0));
        let third = body.add_pivot(Vec2::new(2.0, 2.0));
        assert_eq!((first, second, third), (0, 1, 2));

        let removed = body.clear_pivot(second).unwrap();
        assert_eq!(removed.point, Vec2::new(1.0, 1.0));
        assert_eq!(body.pivots.len(), 3);
        assert!(body.pivots[1].is_none());
        assert_eq!(body.pivots[2].unwrap().point, Vec2::new(2.0, 2.0));

        // Clearing twice or out of range is a no-op
        assert!(body.clear_pivot(second).is_none());
        assert!(body.clear_pivot(99).is_none());

        let live: Vec<usize> = body.live_pivots().map(|(slot, _)| slot).collect();
        assert_eq!(live, vec![0, 2]);
    }

    #[test]
    fn test_link_pivot() {
        let mut body = square();
        let slot = body.add_pivot(Vec2::new(2.0, 2.0));
        let link = PivotLink { body: 1, point: Vec2::new(0.0, 0.0) };
        assert!(body.link_pivot(slot, link));
        assert_eq!(body.pivots[slot].unwrap().link, Some(link));

        body.clear_pivot(slot);
        assert!(!body.link_pivot(slot, link));
        assert!(!body.link_pivot(42, link));
    }

    #[test]
    fn test_bounds_include_pivots_and_padding() {
        let mut body = square();
        body.add_pivot(Vec2::new(5.0, -1.0));
        let bounds = body.bounds();
        assert_eq!(bounds.min, Vec2::new(-3.0, -4.0));
        assert_eq!(bounds.max, Vec2::new(8.0, 5.0));

        assert_eq!(Body::new("Empty").bounds(), Aabb::empty());
    }
}
