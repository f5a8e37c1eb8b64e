//! Turns drawn bodies into simulation-ready state.

use tracing::{debug, warn};

use crate::error::{Result, SimulationError};
use crate::objects::body::Body;
use crate::objects::state::SimulatorState;
use crate::shapes::detect_closed_polygon;
use crate::world::config::SimulationConfig;

/// Validates a body's outline and computes its initial simulator state.
///
/// Area and centroid are measured over the edges of the traversed cycle rather
/// than the raw segment list, so segments drawn in either direction count the same.
pub fn prepare_body(body: &Body, config: &SimulationConfig) -> Result<SimulatorState> {
    let Some(polygon) = detect_closed_polygon(&body.outline) else {
        warn!(
            body = %body.name,
            segments = body.outline.len(),
            "outline is not a single closed polygon"
        );
        return Err(SimulationError::unenclosed_shape(&body.name));
    };

    let area = polygon.area();
    let mass = config.mass_for_area(area);
    let center_of_mass = polygon.centroid();

    if center_of_mass.is_none() {
        debug!(body = %body.name, "outline has zero area, using default mass and no centre of mass");
    }
    debug!(body = %body.name, area, mass, ?center_of_mass, "prepared body");

    Ok(SimulatorState::new(mass, center_of_mass))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::shapes::Segment;
    const EPSILON: f64 = 1e-12;

    fn rectangle(name: &str, w: f64, h: f64) -> Body {
        Body::from_vertices(
            name,
            &[Vec2::new(0.0, 0.0), Vec2::new(w, 0.0), Vec2::new(w, h), Vec2::new(0.0, h)],
        )
    }

    #[test]
    fn test_prepare_square_metre() {
        // 1000mm x 1000mm = 1 m² -> 0.05 kg
        let body = rectangle("Plate", 1000.0, 1000.0);
        let state = prepare_body(&body, &SimulationConfig::default()).unwrap();
        assert!((state.mass - 0.05).abs() < EPSILON);
        let com = state.center_of_mass.unwrap();
        assert!((com.x - 500.0).abs() < 1e-9);
        assert!((com.y - 500.0).abs() < 1e-9);
        assert_eq!(state.tick, -1);
        assert_eq!(state.position, Vec2::ZERO);
        assert!(state.forces.is_empty());
    }

    #[test]
    fn test_prepare_uses_configured_density() {
        let body = rectangle("Plate", 1000.0, 1000.0);
        let config = SimulationConfig::default().mass_per_area(2.0);
        let state = prepare_body(&body, &config).unwrap();
        assert!((state.mass - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_prepare_mixed_segment_directions() {
        let mut body = rectangle("Plate", 1000.0, 1000.0);
        body.outline[1] = body.outline[1].reversed();
        body.outline[3] = body.outline[3].reversed();
        let state = prepare_body(&body, &SimulationConfig::default()).unwrap();
        assert!((state.mass - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_prepare_zero_area_defaults_mass() {
        // Closed but collinear: out along the x axis and back via a midpoint
        let body = Body::from_vertices(
            "Sliver",
            &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)],
        );
        let state = prepare_body(&body, &SimulationConfig::default()).unwrap();
        assert_eq!(state.mass, 1.0);
        assert!(state.center_of_mass.is_none());
    }

    #[test]
    fn test_prepare_open_chain_fails() {
        let mut body = rectangle("Cup", 10.0, 10.0);
        body.outline.pop();
        let err = prepare_body(&body, &SimulationConfig::default()).unwrap_err();
        assert!(matches!(err, SimulationError::UnenclosedShape(_)));
    }

    #[test]
    fn test_prepare_empty_outline_fails() {
        let err = prepare_body(&Body::new("Blank"), &SimulationConfig::default()).unwrap_err();
        assert!(matches!(err, SimulationError::UnenclosedShape(_)));
    }

    #[test]
    fn test_prepare_branch_fails() {
        let mut body = rectangle("Flag", 10.0, 10.0);
        body.add_segment(Segment::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 20.0)));
        assert!(prepare_body(&body, &SimulationConfig::default()).is_err());
    }
}
