use crate::objects::state::SimulatedBody;

pub mod pivot_joint;

pub use pivot_joint::{collect_joints, PivotJoint};

/// Mutable references to two different bodies of a slice.
///
/// Returns `None` if the indices are equal or out of bounds.
pub(crate) fn get_mutable_body_pair(
    bodies: &mut [SimulatedBody],
    idx_a: usize,
    idx_b: usize,
) -> Option<(&mut SimulatedBody, &mut SimulatedBody)> {
    if idx_a == idx_b || idx_a >= bodies.len() || idx_b >= bodies.len() {
        return None;
    }

    // split_at_mut needs the lower index first
    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        Some((&mut slice_a[idx_a], &mut slice_b[0]))
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        Some((&mut slice_a[0], &mut slice_b[idx_b]))
    }
}
