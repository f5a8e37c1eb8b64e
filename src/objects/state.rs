use crate::math::{Transform, Vec2};
use crate::objects::body::Body;

/// Kinematic state the simulation keeps for each body.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorState {
    /// Last tick this body took part in; -1 before the first tick.
    pub tick: i64,
    /// Kilograms, always positive.
    pub mass: f64,
    /// Local-space centroid; `None` for zero-area outlines.
    pub center_of_mass: Option<Vec2>,

    pub rotation: f64,            // Radians
    pub rotational_velocity: f64, // Radians per second

    /// Offset applied to every local point after rotation.
    pub position: Vec2,
    pub linear_velocity: Vec2,

    /// Forces accumulated for the current tick. Cleared after integration.
    pub forces: Vec<Vec2>,
}

impl SimulatorState {
    /// A body at rest at the origin that has not been ticked yet.
    pub fn new(mass: f64, center_of_mass: Option<Vec2>) -> Self {
        Self {
            tick: -1,
            mass,
            center_of_mass,
            rotation: 0.0,
            rotational_velocity: 0.0,
            position: Vec2::ZERO,
            linear_velocity: Vec2::ZERO,
            forces: Vec::new(),
        }
    }

    /// Current rigid transform.
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }

    /// Maps a local point into world space.
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        self.transform().apply(local)
    }

    /// Queues a force for the next integration.
    pub fn apply_force(&mut self, force: Vec2) {
        self.forces.push(force);
    }

    /// Component-wise sum of the queued forces.
    pub fn net_force(&self) -> Vec2 {
        self.forces.iter().sum()
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    /// Puts the body back at the origin with no motion and no pending forces.
    pub fn reset_to_rest(&mut self) {
        self.position = Vec2::ZERO;
        self.linear_velocity = Vec2::ZERO;
        self.rotation = 0.0;
        self.rotational_velocity = 0.0;
        self.forces.clear();
    }
}

/// A body together with the state the simulation owns for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedBody {
    pub body: Body,
    pub state: SimulatorState,
}

impl SimulatedBody {
    pub fn is_anchored(&self) -> bool {
        self.body.anchored
    }
}
