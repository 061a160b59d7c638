//! Forces acting on simulation bodies.
//!
//! The only force in this system is the central mass ("sun"): a fixed point
//! source of inverse-square gravity. The `ForceModel` seam exists so the
//! integrator can be exercised with synthetic fields in tests and so other
//! fields could be added without touching the stepping code.

use crate::types::{constants, BodyState, Vec2};

/// Computes the acceleration on a body from its current state.
///
/// Accelerations are in canvas units per tick².
pub trait ForceModel {
    fn acceleration(&self, state: &BodyState) -> Vec2;
}

/// Inverse-square gravity toward a fixed central mass.
///
/// `|a| = g / d²`, pointed from the body to the center, with `d` clamped
/// below by `min_distance` so the singularity at the center produces a
/// large-but-finite pull instead of a division by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralGravity {
    pub center: Vec2,
    pub g: f64,
    pub min_distance: f64,
}

impl CentralGravity {
    pub fn new(center: Vec2, g: f64) -> Self {
        Self {
            center,
            g,
            min_distance: constants::MIN_GRAVITY_DISTANCE,
        }
    }
}

impl ForceModel for CentralGravity {
    fn acceleration(&self, state: &BodyState) -> Vec2 {
        let delta = self.center - state.pos;
        let dist = delta.magnitude().max(self.min_distance);
        let theta = delta.angle();
        Vec2::from_angle(theta) * (self.g / (dist * dist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceleration_points_at_center() {
        let gravity = CentralGravity::new(Vec2::new(100.0, 0.0), 125.0);
        let body = BodyState::at_rest(Vec2::ZERO, 1.0);

        let acc = gravity.acceleration(&body);
        assert!(acc.x > 0.0, "should pull toward +x, got {:?}", acc);
        assert!(acc.y.abs() < constants::EPSILON);
    }

    #[test]
    fn test_inverse_square_magnitude() {
        let gravity = CentralGravity::new(Vec2::ZERO, 125.0);
        let near = BodyState::at_rest(Vec2::new(100.0, 0.0), 1.0);
        let far = BodyState::at_rest(Vec2::new(200.0, 0.0), 1.0);

        let a_near = gravity.acceleration(&near).magnitude();
        let a_far = gravity.acceleration(&far).magnitude();

        // Doubling the distance quarters the pull
        assert!((a_near / a_far - 4.0).abs() < 1e-9, "ratio {}", a_near / a_far);
        assert!((a_near - 0.0125).abs() < 1e-12);
    }

    #[test]
    fn test_singularity_is_clamped() {
        let gravity = CentralGravity::new(Vec2::ZERO, 125.0);
        let at_center = BodyState::at_rest(Vec2::ZERO, 1.0);

        let acc = gravity.acceleration(&at_center);
        assert!(acc.x.is_finite() && acc.y.is_finite());
        assert!(acc.magnitude() <= 125.0 / (constants::MIN_GRAVITY_DISTANCE.powi(2)) + 1e-9);
    }

    #[test]
    fn test_diagonal_pull_direction() {
        let gravity = CentralGravity::new(Vec2::new(10.0, 10.0), 125.0);
        let body = BodyState::at_rest(Vec2::ZERO, 1.0);

        let acc = gravity.acceleration(&body);
        // 45° pull: equal components, both positive
        assert!((acc.x - acc.y).abs() < constants::EPSILON);
        assert!(acc.x > 0.0);
    }
}
