//! The concrete bodies of the game world: player ship, missiles, and the
//! central star with its trail particles.
//!
//! Bodies own their kinematic state; the integrator mutates it once per
//! tick and nothing else touches it mid-tick. Input arrives only as intent
//! flags on the ship, applied at the start of a tick.

use crate::config::{MissileConfig, ShipConfig};
use crate::random::SeededRandom;
use crate::types::{BodyKind, BodyState, DrawState, Intents, TrailState, Vec2};

// =============================================================================
// Player Ship
// =============================================================================

/// The player-controlled craft.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub state: BodyState,
    pub ammo: u32,
    pub size: f64,
    pub color: String,
    pub intents: Intents,
}

impl Ship {
    pub fn new(pos: Vec2, config: &ShipConfig) -> Self {
        Self {
            state: BodyState {
                pos,
                vel: Vec2::ZERO,
                theta: -std::f64::consts::FRAC_PI_4,
                mass: config.mass,
            },
            ammo: config.ammo,
            size: config.size,
            color: config.color.clone(),
            intents: Intents::default(),
        }
    }

    /// Apply rotation and thrust intents. Called at the start of a tick,
    /// before integration; the fire intent is handled separately so the
    /// spawned missile can be inserted into the world.
    pub fn apply_intents(&mut self, config: &ShipConfig) {
        if self.intents.rotate_left {
            self.state.theta -= config.rotation_rate;
        }
        if self.intents.rotate_right {
            self.state.theta += config.rotation_rate;
        }
        if self.intents.thrust {
            self.state.vel += Vec2::from_angle(self.state.theta) * config.thrust;
        }
    }

    /// Consume the one-shot fire intent, if set.
    pub fn take_fire_intent(&mut self) -> bool {
        std::mem::take(&mut self.intents.fire)
    }

    /// Launch a missile along the ship's current heading.
    ///
    /// Momentum bookkeeping:
    /// - the missile leaves at `ship_vel + v0·(cosθ, sinθ)` (pre-recoil
    ///   ship velocity)
    /// - the ship recoils by `m·v0 / mass_after` opposite the launch axis
    /// - ammo and ship mass each drop by one missile's worth
    ///
    /// Refused (returns `None`) when ammunition is exhausted, and also when
    /// the launch would drive the ship's mass to zero or below; mass is a
    /// divisor here and must stay positive.
    pub fn fire(&mut self, config: &MissileConfig) -> Option<Missile> {
        if self.ammo == 0 {
            return None;
        }
        let mass_after = self.state.mass - config.mass;
        if mass_after <= 0.0 {
            return None;
        }

        let heading = Vec2::from_angle(self.state.theta);
        let missile_vel = self.state.vel + heading * config.speed;

        self.ammo -= 1;
        self.state.mass = mass_after;
        self.state.vel -= heading * (config.mass * config.speed / mass_after);

        Some(Missile {
            state: BodyState {
                // Spawn just off the nose so the missile clears the hull
                pos: self.state.pos + heading * self.size,
                vel: missile_vel,
                theta: self.state.theta,
                mass: config.mass,
            },
            size: config.size,
            color: self.color.clone(),
        })
    }

    pub fn draw_state(&self) -> DrawState {
        DrawState {
            kind: BodyKind::Ship,
            pos: self.state.pos,
            theta: self.state.theta,
            size: self.size,
            color: self.color.clone(),
        }
    }
}

// =============================================================================
// Missile
// =============================================================================

/// A fired projectile. Fixed mass, no further thrust; gravity does the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Missile {
    pub state: BodyState,
    pub size: f64,
    pub color: String,
}

impl Missile {
    pub fn draw_state(&self) -> DrawState {
        DrawState {
            kind: BodyKind::Missile,
            pos: self.state.pos,
            theta: self.state.theta,
            size: self.size,
            color: self.color.clone(),
        }
    }
}

// =============================================================================
// Star and Trails
// =============================================================================

/// One corona trail particle: a spoke at `angle` reaching `radius` out from
/// the star, spinning by `delta_angle` per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trail {
    pub radius: f64,
    pub angle: f64,
    pub delta_angle: f64,
}

impl Trail {
    fn new(rng: &mut SeededRandom) -> Self {
        Self {
            // Spin anywhere in (-π, π) per tick; radius in whole units
            delta_angle: std::f64::consts::PI * rng.next_range(-1.0, 1.0),
            radius: (10.0 * rng.next_f64()).floor(),
            angle: 0.0,
        }
    }

    fn update(&mut self) {
        self.angle += self.delta_angle;
    }
}

/// The central mass. Not a moving body: it anchors the gravity field and
/// carries the trail particle effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f64,
    trails: Vec<Trail>,
    max_trails: usize,
}

impl Star {
    pub fn new(pos: Vec2, size: f64, max_trails: usize) -> Self {
        Self {
            pos,
            size,
            trails: Vec::new(),
            max_trails,
        }
    }

    /// Per-tick trail churn: always keep at least one trail, sometimes grow
    /// up to the cap, otherwise retire the newest. Then spin them all.
    pub fn update(&mut self, rng: &mut SeededRandom) {
        if self.trails.is_empty() {
            self.trails.push(Trail::new(rng));
        } else if self.trails.len() <= self.max_trails && rng.next_below(2) == 1 {
            self.trails.push(Trail::new(rng));
        } else {
            self.trails.pop();
        }

        for trail in &mut self.trails {
            trail.update();
        }
    }

    pub fn trail_states(&self) -> Vec<TrailState> {
        self.trails
            .iter()
            .map(|t| TrailState {
                radius: t.radius,
                angle: t.angle,
            })
            .collect()
    }

    pub fn draw_state(&self) -> DrawState {
        DrawState {
            kind: BodyKind::Star,
            pos: self.pos,
            theta: 0.0,
            size: self.size,
            color: "white".to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
