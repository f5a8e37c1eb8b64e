//! Error types for simulation construction and state access.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised by [`Simulation`](crate::world::Simulation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A body's outline is not exactly one closed polygon.
    #[error("unenclosed shape: {0}")]
    UnenclosedShape(String),

    /// A pivot is linked to a body that is not part of the simulation.
    #[error("pivot {slot} of body {body} is linked to unknown body {target}")]
    DanglingPivotLink {
        body: usize,
        slot: usize,
        target: usize,
    },

    /// A body id does not refer to a simulated body.
    #[error("unknown body id {0}")]
    UnknownBody(usize),
}

impl SimulationError {
    /// Create an unenclosed shape error for the named body.
    #[must_use]
    pub fn unenclosed_shape(body_name: &str) -> Self {
        Self::UnenclosedShape(format!(
            "body \"{body_name}\" is not enclosed or is made of multiple objects"
        ))
    }
}
