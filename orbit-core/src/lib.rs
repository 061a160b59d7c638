//! # Orbit Core
//!
//! Physics core for a 2D orbital shooter: a ship orbits a central star,
//! thrusts, rotates, and fires recoiling missiles, all advanced on a fixed
//! deterministic timestep.
//!
//! ## Modules
//!
//! - `types` - Vec2, body state, input intents, render snapshots
//! - `geometry` - shape primitives (point, line, rectangle, circle, polygon)
//! - `collision` - narrow-phase tests, shape-pair dispatch, hitboxes
//! - `forces` - force models (central inverse-square gravity)
//! - `integrator` - semi-explicit Euler stepping
//! - `bodies` - ship, missile, star and its trail effect
//! - `random` - seeded deterministic RNG
//! - `config` - YAML-backed configuration
//! - `simulation` - the world, body storage, and the fixed-timestep driver
//!
//! ## Example
//!
//! ```
//! use orbit_core::config::SimConfig;
//! use orbit_core::simulation::Simulation;
//! use orbit_core::types::Intents;
//!
//! let mut sim = Simulation::new(SimConfig::default());
//! sim.set_intents(Intents { thrust: true, ..Intents::default() });
//! sim.tick();
//! assert_eq!(sim.tick_count(), 1);
//! ```

pub mod bodies;
pub mod collision;
pub mod config;
pub mod forces;
pub mod geometry;
pub mod integrator;
pub mod random;
pub mod simulation;
pub mod types;
