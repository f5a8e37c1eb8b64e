use tracing::{info, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::constraints::{collect_joints, PivotJoint};
use crate::error::{Result, SimulationError};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::{prepare_body, Body, BodyId, SimulatedBody, SimulatorState};
use crate::world::config::SimulationConfig;

/// A running simulation over a fixed set of drawn bodies.
///
/// Construction validates every outline and computes mass properties; after that
/// the outline and pivot topology are frozen until [`Simulation::into_bodies`]
/// hands the bodies back.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<SimulatedBody>,
    joints: Vec<PivotJoint>,
    config: SimulationConfig,
    current_tick: u64,
}

impl Simulation {
    /// Prepares every body and collects its pivot joints.
    ///
    /// Fails as a whole if any outline is not a single closed polygon or a pivot
    /// links to a body outside `bodies`; no partial simulation is built.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Result<Self> {
        let states = bodies
            .iter()
            .map(|body| prepare_body(body, &config))
            .collect::<Result<Vec<SimulatorState>>>()?;
        let joints = collect_joints(&bodies)?;

        let bodies: Vec<SimulatedBody> = bodies
            .into_iter()
            .zip(states)
            .map(|(body, state)| SimulatedBody { body, state })
            .collect();

        info!(
            bodies = bodies.len(),
            joints = joints.len(),
            gravity = config.use_gravity,
            "simulation created"
        );

        Ok(Self {
            bodies,
            joints,
            config,
            current_tick: 0,
        })
    }

    /// Default constants with gravity switched on or off.
    pub fn with_gravity(bodies: Vec<Body>, use_gravity: bool) -> Result<Self> {
        Self::new(bodies, SimulationConfig::default().use_gravity(use_gravity))
    }

    /// Advances the simulation by `delta_time` seconds.
    ///
    /// Forces and integration run per body first; pivot joints are then relaxed
    /// once each, in storage order, against the integrated positions.
    pub fn tick(&mut self, delta_time: f64) {
        let tick = self.tick_index();
        let config = self.config;

        #[cfg(feature = "parallel")]
        self.bodies
            .par_iter_mut()
            .for_each(|body| integrator::advance(body, &config, delta_time, tick));

        #[cfg(not(feature = "parallel"))]
        for body in self.bodies.iter_mut() {
            integrator::advance(body, &config, delta_time, tick);
        }

        for joint in &self.joints {
            joint.solve_position(&mut self.bodies, config.pivot_tolerance);
        }

        self.current_tick = self.current_tick.saturating_add(1);
        trace!(tick, delta_time, "tick complete");
    }

    /// Index stamped on body states for the tick about to run.
    fn tick_index(&self) -> i64 {
        i64::try_from(self.current_tick).unwrap_or(i64::MAX)
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[SimulatedBody] {
        &self.bodies
    }

    pub fn joints(&self) -> &[PivotJoint] {
        &self.joints
    }

    pub fn body(&self, id: BodyId) -> Result<&SimulatedBody> {
        self.bodies.get(id).ok_or(SimulationError::UnknownBody(id))
    }

    pub fn state(&self, id: BodyId) -> Result<&SimulatorState> {
        self.body(id).map(|b| &b.state)
    }

    fn state_mut(&mut self, id: BodyId) -> Result<&mut SimulatorState> {
        self.bodies
            .get_mut(id)
            .map(|b| &mut b.state)
            .ok_or(SimulationError::UnknownBody(id))
    }

    /// Queues a force on a body for the next tick.
    pub fn apply_force(&mut self, id: BodyId, force: Vec2) -> Result<()> {
        self.state_mut(id)?.apply_force(force);
        Ok(())
    }

    pub fn set_position(&mut self, id: BodyId, position: Vec2) -> Result<()> {
        self.state_mut(id)?.position = position;
        Ok(())
    }

    pub fn set_linear_velocity(&mut self, id: BodyId, velocity: Vec2) -> Result<()> {
        self.state_mut(id)?.linear_velocity = velocity;
        Ok(())
    }

    /// Sets a body's spin. It stays constant from then on.
    pub fn set_rotational_velocity(&mut self, id: BodyId, velocity: f64) -> Result<()> {
        self.state_mut(id)?.rotational_velocity = velocity;
        Ok(())
    }

    /// Ends the simulation and returns the bodies for editing.
    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies.into_iter().map(|b| b.body).collect()
    }
}
