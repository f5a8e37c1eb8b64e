//! Physical constants and tunables for a [`Simulation`](super::Simulation).

/// Gravitational acceleration in m/s². Negative because +y is up.
pub const GRAVITY: f64 = -9.81;

/// Surface density of drawn bodies in kg/m².
pub const MASS_PER_AREA: f64 = 0.05;

/// Converts drawing-space area (mm²) to m².
pub const AREA_SCALE: f64 = 1e-6;

/// Mass given to bodies whose outline has no area, in kg.
pub const DEFAULT_MASS: f64 = 1.0;

/// Pivot separation below which a joint counts as satisfied.
pub const PIVOT_TOLERANCE: f64 = 1e-6;

/// Simulation parameters.
///
/// # Example
///
/// ```
/// use pivot_sim::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert!((config.gravity - -9.81).abs() < 1e-12);
///
/// // Zero-g sandbox
/// let floating = SimulationConfig::default().use_gravity(false);
/// assert!(!floating.use_gravity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Vertical gravitational acceleration (m/s²).
    pub gravity: f64,

    /// Whether gravity is applied to non-anchored bodies.
    pub use_gravity: bool,

    /// Surface density used for mass (kg/m²).
    pub mass_per_area: f64,

    /// Factor from outline area units to m².
    pub area_scale: f64,

    /// Mass used when the outline area is not positive (kg).
    pub default_mass: f64,

    /// Pivot separation tolerance.
    pub pivot_tolerance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            use_gravity: true,
            mass_per_area: MASS_PER_AREA,
            area_scale: AREA_SCALE,
            default_mass: DEFAULT_MASS,
            pivot_tolerance: PIVOT_TOLERANCE,
        }
    }
}

impl SimulationConfig {
    /// Set the gravitational acceleration.
    #[must_use]
    pub const fn gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Enable or disable gravity.
    #[must_use]
    pub const fn use_gravity(mut self, enabled: bool) -> Self {
        self.use_gravity = enabled;
        self
    }

    /// Set the surface density.
    #[must_use]
    pub const fn mass_per_area(mut self, density: f64) -> Self {
        self.mass_per_area = density;
        self
    }

    /// Set the area conversion factor.
    #[must_use]
    pub const fn area_scale(mut self, scale: f64) -> Self {
        self.area_scale = scale;
        self
    }

    /// Set the pivot separation tolerance.
    #[must_use]
    pub const fn pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Set the mass used when an outline's area gives no usable mass.
    #[must_use]
    pub const fn default_mass(mut self, mass: f64) -> Self {
        self.default_mass = mass;
        self
    }

    /// Mass of a body whose outline encloses `area` (in outline units).
    ///
    /// Falls back to `default_mass` unless the result is strictly positive.
    pub fn mass_for_area(&self, area: f64) -> f64 {
        let mass = self.mass_per_area * area * self.area_scale;
        if mass > 0.0 {
            mass
        } else {
            self.default_mass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.gravity, GRAVITY);
        assert!(config.use_gravity);
        assert_eq!(config.mass_per_area, 0.05);
        assert_eq!(config.area_scale, 1e-6);
        assert_eq!(config.pivot_tolerance, 1e-6);
    }

    #[test]
    fn test_builder_setters() {
        let config = SimulationConfig::default()
            .gravity(-1.0)
            .use_gravity(false)
            .mass_per_area(2.0)
            .area_scale(1.0)
            .default_mass(3.0)
            .pivot_tolerance(0.5);
        assert_eq!(config.gravity, -1.0);
        assert!(!config.use_gravity);
        assert_eq!(config.mass_per_area, 2.0);
        assert_eq!(config.area_scale, 1.0);
        assert_eq!(config.default_mass, 3.0);
        assert_eq!(config.pivot_tolerance, 0.5);
    }

    #[test]
    fn test_mass_for_area() {
        let config = SimulationConfig::default();
        // 1000mm x 1000mm = 1 m² at 0.05 kg/m²
        assert!((config.mass_for_area(1_000_000.0) - 0.05).abs() < EPSILON);
        assert_eq!(config.mass_for_area(0.0), DEFAULT_MASS);
        assert_eq!(config.mass_for_area(-5.0), DEFAULT_MASS);
    }

    #[test]
    fn test_mass_for_area_never_non_positive() {
        let area = 1_000_000.0;
        for density in [0.0, -2.0, f64::NAN] {
            let config = SimulationConfig::default().mass_per_area(density);
            assert_eq!(config.mass_for_area(area), DEFAULT_MASS);
        }
        let flipped = SimulationConfig::default().area_scale(-1.0);
        assert_eq!(flipped.mass_for_area(area), DEFAULT_MASS);

        let config = SimulationConfig::default().mass_per_area(0.0).default_mass(4.0);
        assert_eq!(config.mass_for_area(area), 4.0);
    }
}
