pub mod integrator;

pub use integrator::{advance, apply_gravity, integrate};
