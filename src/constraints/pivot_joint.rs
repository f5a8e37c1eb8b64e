use tracing::warn;

use crate::error::{Result, SimulationError};
use crate::math::vec2::Vec2;
use crate::objects::body::{Body, BodyId};
use crate::objects::state::SimulatedBody;

/// A pivot on body A pinned to a point on body B. Anchors are in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotJoint {
    pub body_a: BodyId,
    /// Pivot slot on body A this joint was read from.
    pub slot: usize,
    pub anchor_a: Vec2,
    pub body_b: BodyId,
    pub anchor_b: Vec2,
}

impl PivotJoint {
    pub fn new(body_a: BodyId, slot: usize, anchor_a: Vec2, body_b: BodyId, anchor_b: Vec2) -> Self {
        Self {
            body_a,
            slot,
            anchor_a,
            body_b,
            anchor_b,
        }
    }

    /// World-space vector from anchor A to anchor B.
    pub fn separation(&self, bodies: &[SimulatedBody]) -> Option<Vec2> {
        let a = bodies.get(self.body_a)?;
        let b = bodies.get(self.body_b)?;
        Some(b.state.to_world(self.anchor_b) - a.state.to_world(self.anchor_a))
    }

    /// Moves the two bodies' positions toward making the anchors coincide.
    ///
    /// One pass, no iteration. Each body that is not anchored moves by half the
    /// separation, so a body pinned to an anchored one closes half the gap per
    /// call. Separations within `tolerance` are ignored.
    pub fn solve_position(&self, bodies: &mut [SimulatedBody], tolerance: f64) {
        let Some(delta) = self.separation(bodies) else {
            return;
        };
        if delta.magnitude() <= tolerance {
            return;
        }

        // A joint back onto its own body moves it by +d/2 and -d/2; nothing to do.
        let Some((body_a, body_b)) = super::get_mutable_body_pair(bodies, self.body_a, self.body_b)
        else {
            return;
        };

        let half = delta / 2.0;
        if !body_a.is_anchored() {
            body_a.state.position += half;
        }
        if !body_b.is_anchored() {
            body_b.state.position -= half;
        }
    }
}

/// Reads every linked pivot out of `bodies`, in body order then slot order.
///
/// Empty slots and unlinked pivots are skipped. A link to a body outside the
/// collection is an error.
pub fn collect_joints(bodies: &[Body]) -> Result<Vec<PivotJoint>> {
    let mut joints = Vec::new();

    for (body_id, body) in bodies.iter().enumerate() {
        for (slot, pivot) in body.live_pivots() {
            let Some(link) = pivot.link else {
                continue;
            };

            if link.body >= bodies.len() {
                return Err(SimulationError::DanglingPivotLink {
                    body: body_id,
                    slot,
                    target: link.body,
                });
            }
            if link.body == body_id {
                warn!(body = %body.name, slot, "pivot is linked to its own body and has no effect");
            }

            joints.push(PivotJoint::new(body_id, slot, pivot.point, link.body, link.point));
        }
    }

    Ok(joints)
}
