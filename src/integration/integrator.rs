use crate::math::vec2::Vec2;
use crate::objects::state::{SimulatedBody, SimulatorState};
use crate::world::config::SimulationConfig;

/// Queues the gravitational force `(0, m * g)` on a body.
pub fn apply_gravity(state: &mut SimulatorState, gravity: f64) {
    let weight = Vec2::new(0.0, state.mass * gravity);
    state.apply_force(weight);
}

/// Integrates the body's state forward in time using Semi-Implicit Euler.
///
/// Position is advanced with the velocity already updated for this step.
/// Rotation advances by the current rotational velocity, which is never driven
/// by forces: torques are not modelled, so a spinning body keeps spinning at
/// whatever rate it was given. The force list is always cleared.
pub fn integrate(state: &mut SimulatorState, dt: f64) {
    // --- Linear Motion --- //
    let linear_acceleration = state.net_force() / state.mass;
    state.linear_velocity += linear_acceleration * dt;
    state.position += state.linear_velocity * dt;

    // --- Angular Motion --- //
    state.rotation += state.rotational_velocity * dt;

    state.clear_forces();
}

/// Runs force accumulation and integration for one body for tick `tick`.
///
/// Anchored bodies skip both and are forced back to rest.
pub fn advance(body: &mut SimulatedBody, config: &SimulationConfig, dt: f64, tick: i64) {
    let anchored = body.is_anchored();
    let state = &mut body.state;
    state.tick = tick;

    if anchored {
        state.reset_to_rest();
        return;
    }

    if config.use_gravity {
        apply_gravity(state, config.gravity);
    }
    integrate(state, dt);
}
