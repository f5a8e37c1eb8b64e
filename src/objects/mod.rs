pub mod body;
pub mod preparation;
pub mod state;

pub use body::{Body, BodyId, Pivot, PivotLink, LINE_WIDTH};
pub use preparation::prepare_body;
pub use state::{SimulatedBody, SimulatorState};
