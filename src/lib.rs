//! Simulation core for user-drawn 2D bodies joined by pivots.
//!
//! A [`Simulation`] is built from [`Body`] outlines drawn in an editor. Each
//! outline must be a single closed polygon; its area and centroid give the body
//! its mass properties. Every [`Simulation::tick`] applies gravity, integrates
//! with semi-implicit Euler and then pulls linked pivots back together.
//!
//! ```
//! use pivot_sim::{Body, PivotLink, Simulation, SimulationConfig, Vec2};
//!
//! let square = |name: &str| {
//!     Body::from_vertices(
//!         name,
//!         &[Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(50.0, 50.0), Vec2::new(0.0, 50.0)],
//!     )
//! };
//!
//! let mut ground = square("Ground").anchored(true);
//! let hinge = ground.add_pivot(Vec2::new(50.0, 50.0));
//! ground.link_pivot(hinge, PivotLink { body: 1, point: Vec2::new(0.0, 0.0) });
//!
//! let mut sim = Simulation::new(vec![ground, square("Door")], SimulationConfig::default())?;
//! for _ in 0..60 {
//!     sim.tick(1.0 / 60.0);
//! }
//! assert_eq!(sim.current_tick(), 60);
//! # Ok::<(), pivot_sim::SimulationError>(())
//! ```

pub mod constraints;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod render;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use constraints::PivotJoint;
pub use error::{Result, SimulationError};
pub use math::{transform_local_to_world, Aabb, Transform, Vec2};
pub use objects::{Body, BodyId, Pivot, PivotLink, SimulatedBody, SimulatorState};
pub use render::{MarkerSize, PivotMarker, Rasterizer, RenderFrame, ScreenLine, Viewport};
pub use shapes::{
    detect_closed_polygon, polygon_area, polygon_centroid, polygon_signed_area, Polygon, Segment,
};
pub use world::{Simulation, SimulationConfig};
