//! Numerical integration for advancing bodies one tick at a time.
//!
//! The scheme is semi-explicit Euler in tick-native units: velocity is
//! displacement per tick, so there is no `dt` factor in the update.
//!
//! ## Ordering
//!
//! ```text
//! 1. a = forces(state)        // field sampled at the pre-move position
//! 2. pos += vel               // previous tick's velocity moves the body
//! 3. vel += a
//! ```
//!
//! Position advances BEFORE the new acceleration lands in the velocity.
//! This is not the symplectic ordering; it is kept deliberately because
//! the trajectories of the original game depend on it. Do not "fix" the
//! order without retuning the gravity constant.
//!
//! The step is a pure function of its inputs: the same state and force
//! model produce bit-identical results on every run.

use crate::forces::ForceModel;
use crate::types::{BodyState, Vec2};

/// Result of one integration step: the new state plus the acceleration that
/// was applied, for diagnostics and tests.
#[derive(Debug, Clone, Copy)]
pub struct TickStep {
    pub state: BodyState,
    pub acceleration: Vec2,
}

/// Semi-explicit Euler integrator, one body per call.
pub struct SemiExplicitEuler;

impl SemiExplicitEuler {
    /// Advance a body by one tick under the given force model.
    ///
    /// Orientation and mass pass through untouched; only the firing path
    /// changes those.
    pub fn step<F: ForceModel>(state: &BodyState, forces: &F) -> TickStep {
        let acceleration = forces.acceleration(state);

        let new_pos = state.pos + state.vel;
        let new_vel = state.vel + acceleration;

        TickStep {
            state: BodyState {
                pos: new_pos,
                vel: new_vel,
                theta: state.theta,
                mass: state.mass,
            },
            acceleration,
        }
    }

    /// Advance a body by `ticks` consecutive steps.
    pub fn step_n<F: ForceModel>(state: &BodyState, forces: &F, ticks: usize) -> TickStep {
        let mut current = TickStep {
            state: *state,
            acceleration: Vec2::ZERO,
        };
        for _ in 0..ticks {
            current = Self::step(&current.state, forces);
        }
        current
    }
}
