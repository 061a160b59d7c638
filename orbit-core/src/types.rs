//! Core types for the orbital simulation.
//!
//! Units are canvas-native and tick-native:
//! - Position: canvas units
//! - Velocity: canvas units per tick
//! - Angle: radians, measured from the +X axis
//! - Mass: abstract mass units (one missile = one unit)

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec2 - 2D Vector
// =============================================================================

/// A 2D vector used for positions, velocities, and accelerations.
///
/// Coordinate system follows the canvas convention:
/// - X: horizontal (positive to the right)
/// - Y: vertical (positive downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at the given angle from the +X axis.
    pub fn from_angle(theta: f64) -> Self {
        Self {
            x: theta.cos(),
            y: theta.sin(),
        }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or zero if magnitude is zero
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < constants::EPSILON {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle of this vector from the +X axis, in radians.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// A vector perpendicular to this one (rotated 90° counter-clockwise).
    pub fn perpendicular(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Operator overloads for Vec2
impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Body State
// =============================================================================

/// Kinematic state of a moving body at a given tick.
///
/// `mass` is strictly positive; it appears as a divisor in the recoil
/// calculation and must never reach zero (the firing path guards this).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub theta: f64,
    pub mass: f64,
}

impl BodyState {
    pub fn new(pos: Vec2, vel: Vec2, theta: f64, mass: f64) -> Self {
        Self {
            pos,
            vel,
            theta,
            mass,
        }
    }

    /// Body at rest at a given position
    pub fn at_rest(pos: Vec2, mass: f64) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            theta: 0.0,
            mass,
        }
    }
}

// =============================================================================
// Input Intents
// =============================================================================

/// Named boolean intents set by the input layer, read by the simulation at
/// the start of each tick. The core never sees raw input events.
///
/// `fire` is one-shot: the simulation clears it after acting on it, so a
/// held key fires once per press rather than once per tick unless the host
/// re-asserts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

// =============================================================================
// Render Snapshots
// =============================================================================

/// Which kind of body a draw state describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Ship,
    Missile,
    Star,
}

/// Read-only drawable state for one body, handed to the presentation layer
/// after each frame. The renderer never mutates core state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawState {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub theta: f64,
    pub size: f64,
    pub color: String,
}

/// State of one star trail particle, for particle-effect rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailState {
    pub radius: f64,
    pub angle: f64,
}

// =============================================================================
// Physical Constants
// =============================================================================

/// Constants used across the simulation.
pub mod constants {
    /// Small value for floating-point comparisons
    pub const EPSILON: f64 = 1e-10;

    /// Distance tolerance for near-equality in collision tests.
    ///
    /// Point-near-point and point-on-line tests accept anything within this
    /// slack, absorbing both float error and sub-pixel visual overlap.
    pub const POINT_BUFFER: f64 = 0.5;

    /// Minimum body-to-sun distance used by the gravity model.
    ///
    /// The inverse-square law is undefined at the singularity; distances
    /// below this are clamped rather than fed to the division.
    pub const MIN_GRAVITY_DISTANCE: f64 = 1.0;
}

// =============================================================================
// Tests
// =============================================================================
