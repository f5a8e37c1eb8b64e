// Axis-aligned bounds of a body's drawn geometry.

use crate::math::vec2::Vec2;

/// An axis-aligned bounding box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new box, swapping coordinates so that `min <= max` on both axes.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// A zero-sized box at the origin.
    pub fn empty() -> Self {
        Aabb::new(Vec2::ZERO, Vec2::ZERO)
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Aabb { min, max })
    }

    /// Grows the box by `margin` on every side.
    pub fn padded(self, margin: f64) -> Self {
        let pad = Vec2::new(margin, margin);
        Aabb {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
