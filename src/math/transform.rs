use super::vec2::Vec2;

/// Rigid transform of a body: rotation about the local origin followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Angle in radians
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Applies the transform (rotation then translation) to a local point.
    pub fn apply(self, point: Vec2) -> Vec2 {
        transform_local_to_world(point, self.position, self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Maps a point from a body's local drawing space into world space.
///
/// The point is rotated counter-clockwise by `rotation` radians about the local
/// origin, then translated by `position`.
pub fn transform_local_to_world(point: Vec2, position: Vec2, rotation: f64) -> Vec2 {
    point.rotate(rotation) + position
}
