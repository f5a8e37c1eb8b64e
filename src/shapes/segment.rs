use crate::math::vec2::Vec2;

/// One drawn line of a body outline, in local drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// The same segment traversed from `b` to `a`.
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Shoelace term `x1*y2 - x2*y1` for this directed edge.
    pub fn cross(&self) -> f64 {
        self.a.cross(self.b)
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from((a, b): ((f64, f64), (f64, f64))) -> Self {
        Segment::new(a.into(), b.into())
    }
}
