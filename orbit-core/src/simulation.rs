//! The simulation world and its driving loop.
//!
//! `Simulation` owns every body and advances the whole world one tick at a
//! time. `FixedTimestep` converts wall-clock frame times into a whole number
//! of ticks, so rendering rate and simulation rate stay decoupled and a
//! given seed always replays the same trajectory.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::bodies::{Missile, Ship, Star};
use crate::config::SimConfig;
use crate::forces::CentralGravity;
use crate::integrator::SemiExplicitEuler;
use crate::random::SeededRandom;
use crate::types::{DrawState, Intents, TrailState};

// =============================================================================
// Body storage
// =============================================================================

/// Stable reference to a body in the world.
///
/// Handles survive the removal of other bodies. A handle whose body has been
/// removed goes stale: its slot's generation moves on, and lookups through
/// the old handle return `None` instead of aliasing a newer occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

/// A dynamic body: anything the integrator moves.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Ship(Ship),
    Missile(Missile),
}

impl Body {
    pub fn draw_state(&self) -> DrawState {
        match self {
            Body::Ship(ship) => ship.draw_state(),
            Body::Missile(missile) => missile.draw_state(),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    body: Option<Body>,
}

// =============================================================================
// Simulation
// =============================================================================

/// The complete world state: bodies, star, gravity field, and RNG.
pub struct Simulation {
    config: SimConfig,
    gravity: CentralGravity,
    star: Star,
    slots: Vec<Slot>,
    free: Vec<usize>,
    ship: BodyHandle,
    rng: SeededRandom,
    tick_count: u64,
}

impl Simulation {
    /// Build a world from a configuration, using the configured seed.
    pub fn new(config: SimConfig) -> Self {
        let seed = config.world.seed;
        Self::with_seed(config, seed)
    }

    /// Build a world with an explicit seed, overriding the configured one.
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        let gravity = CentralGravity {
            center: config.world.sun_pos,
            g: config.gravity.g,
            min_distance: config.gravity.min_distance,
        };
        let star = Star::new(
            config.world.sun_pos,
            config.world.sun_size,
            config.world.max_trails,
        );
        let ship = Ship::new(config.world.ship_pos, &config.ship);

        let mut sim = Self {
            config,
            gravity,
            star,
            slots: Vec::new(),
            free: Vec::new(),
            ship: BodyHandle {
                index: 0,
                generation: 0,
            },
            rng: SeededRandom::new(seed),
            tick_count: 0,
        };
        sim.ship = sim.insert(Body::Ship(ship));
        sim
    }

    /// Insert a body, reusing a freed slot when one exists.
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.body = Some(body);
            BodyHandle {
                index: index as u32,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len();
            self.slots.push(Slot {
                generation: 0,
                body: Some(body),
            });
            BodyHandle {
                index: index as u32,
                generation: 0,
            }
        }
    }

    /// Remove a body. Returns it if the handle was still live.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation || slot.body.is_none() {
            return None;
        }
        let body = slot.body.take();
        // Bump the generation so the departing handle can never alias the
        // slot's next occupant
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index as usize);
        body
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_ref()
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_mut()
    }

    /// Handle of the player ship.
    pub fn ship_handle(&self) -> BodyHandle {
        self.ship
    }

    pub fn ship(&self) -> Option<&Ship> {
        match self.get(self.ship) {
            Some(Body::Ship(ship)) => Some(ship),
            _ => None,
        }
    }

    /// Number of live bodies (ship plus missiles in flight).
    pub fn body_count(&self) -> usize {
        self.slots.iter().filter(|s| s.body.is_some()).count()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Replace the ship's input intents for the coming tick.
    pub fn set_intents(&mut self, intents: Intents) {
        if let Some(Body::Ship(ship)) = self.get_mut(self.ship) {
            ship.intents = intents;
        }
    }

    /// Advance the world by exactly one tick.
    ///
    /// Order within the tick: ship controls first (rotation, thrust, fire),
    /// then gravity integration over every body in slot order, then the
    /// star's trail churn.
    pub fn tick(&mut self) {
        log::trace!("tick {}", self.tick_count);

        // Controls and firing before any body moves
        let mut fired = None;
        if let Some(Body::Ship(ship)) = self
            .slots
            .get_mut(self.ship.index as usize)
            .and_then(|s| s.body.as_mut())
        {
            ship.apply_intents(&self.config.ship);
            if ship.take_fire_intent() {
                fired = ship.fire(&self.config.missile);
            }
        }
        if let Some(missile) = fired {
            self.insert(Body::Missile(missile));
        }

        // Integrate every live body under the shared gravity field
        for slot in &mut self.slots {
            if let Some(body) = slot.body.as_mut() {
                let state = match body {
                    Body::Ship(ship) => &mut ship.state,
                    Body::Missile(missile) => &mut missile.state,
                };
                let step = SemiExplicitEuler::step(state, &self.gravity);
                *state = step.state;
            }
        }

        self.star.update(&mut self.rng);
        self.tick_count += 1;
    }

    /// Snapshot of everything a renderer needs: the star first, then every
    /// live body in slot order.
    pub fn draw_states(&self) -> Vec<DrawState> {
        let mut states = vec![self.star.draw_state()];
        states.extend(
            self.slots
                .iter()
                .filter_map(|s| s.body.as_ref())
                .map(Body::draw_state),
        );
        states
    }

    pub fn trail_states(&self) -> Vec<TrailState> {
        self.star.trail_states()
    }
}

// =============================================================================
// Loop control
// =============================================================================

/// Shared stop signal for the driving loop.
///
/// Cloned (via `Arc`) into whatever owns the loop; any holder can stop it.
#[derive(Debug, Default)]
pub struct LoopControl {
    stopped: AtomicBool,
}

impl LoopControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Fixed timestep
// =============================================================================

/// What a single frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Ticks actually executed this frame.
    pub ticks_run: u32,
    /// True when the catch-up ceiling was hit and backlog was discarded.
    pub truncated: bool,
}

/// Fixed-timestep driver: accumulates wall-clock time and drains it in
/// whole ticks.
///
/// If a frame arrives so late that more than `max_ticks_per_frame` ticks are
/// owed, the excess backlog is discarded rather than replayed. The world
/// slows down instead of spiraling: a simulation that falls behind would
/// otherwise owe ever more ticks per frame and never catch up.
pub struct FixedTimestep {
    tick_interval_ms: f64,
    max_ticks_per_frame: u32,
    accumulator: f64,
    last_time_ms: Option<f64>,
    control: Arc<LoopControl>,
}

impl FixedTimestep {
    pub fn new(tick_interval_ms: f64, max_ticks_per_frame: u32, control: Arc<LoopControl>) -> Self {
        Self {
            tick_interval_ms,
            max_ticks_per_frame,
            accumulator: 0.0,
            last_time_ms: None,
            control,
        }
    }

    /// Build a driver from a simulation's timestep configuration.
    pub fn from_config(config: &SimConfig, control: Arc<LoopControl>) -> Self {
        Self::new(
            config.timestep.tick_interval_ms,
            config.timestep.max_ticks_per_frame,
            control,
        )
    }

    /// Milliseconds of simulation time currently owed but not yet run.
    pub fn accumulator_ms(&self) -> f64 {
        self.accumulator
    }

    /// Advance the simulation to the given wall-clock time.
    ///
    /// The first call only establishes the time base and runs zero ticks.
    /// Returns immediately with zero ticks once the control has been stopped.
    pub fn advance(&mut self, sim: &mut Simulation, now_ms: f64) -> FrameReport {
        if self.control.is_stopped() {
            return FrameReport {
                ticks_run: 0,
                truncated: false,
            };
        }

        let last = match self.last_time_ms {
            Some(t) => t,
            None => {
                self.last_time_ms = Some(now_ms);
                return FrameReport {
                    ticks_run: 0,
                    truncated: false,
                };
            }
        };
        self.last_time_ms = Some(now_ms);

        // Clock went backwards: re-anchor, owe nothing
        let elapsed = (now_ms - last).max(0.0);
        self.accumulator += elapsed;

        let mut ticks_run = 0u32;
        while self.accumulator >= self.tick_interval_ms {
            if ticks_run >= self.max_ticks_per_frame {
                log::warn!(
                    "frame owed more than {} ticks; discarding {:.1} ms of backlog",
                    self.max_ticks_per_frame,
                    self.accumulator
                );
                self.accumulator = 0.0;
                return FrameReport {
                    ticks_run,
                    truncated: true,
                };
            }
            sim.tick();
            self.accumulator -= self.tick_interval_ms;
            ticks_run += 1;

            if self.control.is_stopped() {
                break;
            }
        }

        FrameReport {
            ticks_run,
            truncated: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;

    fn test_sim() -> Simulation {
        Simulation::with_seed(SimConfig::default(), 42)
    }

    #[test]
    fn test_world_starts_with_ship_only() {
        let sim = test_sim();
        assert_eq!(sim.body_count(), 1);
        assert!(sim.ship().is_some());
    }

    #[test]
    fn test_tick_moves_ship_toward_sun() {
        let mut sim = test_sim();
        let before = sim.ship().unwrap().state.pos;

        // Two ticks: the first only accrues velocity
        sim.tick();
        sim.tick();

        let ship = sim.ship().unwrap();
        let sun = SimConfig::default().world.sun_pos;
        assert!(
            (sun - ship.state.pos).magnitude() < (sun - before).magnitude(),
            "ship should fall toward the sun"
        );
    }

    #[test]
    fn test_fire_intent_spawns_missile() {
        let mut sim = test_sim();
        sim.set_intents(Intents {
            fire: true,
            ..Intents::default()
        });

        sim.tick();
        assert_eq!(sim.body_count(), 2);

        // Intent was one-shot: no second missile
        sim.tick();
        assert_eq!(sim.body_count(), 2);
    }

    #[test]
    fn test_handles_survive_removal_of_others() {
        let mut sim = test_sim();
        let m1 = sim.insert(Body::Missile(make_missile(1.0)));
        let m2 = sim.insert(Body::Missile(make_missile(2.0)));

        sim.remove(m1);

        match sim.get(m2) {
            Some(Body::Missile(m)) => assert_eq!(m.state.pos.x, 2.0),
            other => panic!("m2 should still resolve, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_handle_does_not_alias_new_body() {
        let mut sim = test_sim();
        let old = sim.insert(Body::Missile(make_missile(1.0)));
        sim.remove(old);

        // Reuses the freed slot under a new generation
        let new = sim.insert(Body::Missile(make_missile(9.0)));

        assert!(sim.get(old).is_none());
        assert!(sim.get(new).is_some());
        assert!(sim.remove(old).is_none());
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let mut a = Simulation::with_seed(SimConfig::default(), 7);
        let mut b = Simulation::with_seed(SimConfig::default(), 7);

        for _ in 0..100 {
            a.tick();
            b.tick();
        }

        assert_eq!(a.ship().unwrap().state, b.ship().unwrap().state);
        assert_eq!(a.trail_states(), b.trail_states());
    }

    #[test]
    fn test_draw_states_star_first() {
        let sim = test_sim();
        let states = sim.draw_states();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].kind, crate::types::BodyKind::Star);
        assert_eq!(states[1].kind, crate::types::BodyKind::Ship);
    }

    #[test]
    fn test_fixed_timestep_drains_whole_ticks() {
        let mut sim = test_sim();
        let mut driver = FixedTimestep::new(10.0, 300, LoopControl::new());

        // First call anchors the clock
        assert_eq!(driver.advance(&mut sim, 0.0).ticks_run, 0);

        let report = driver.advance(&mut sim, 35.0);
        assert_eq!(report.ticks_run, 3);
        assert!(!report.truncated);
        assert!((driver.accumulator_ms() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_timestep_ceiling_discards_backlog() {
        let mut sim = test_sim();
        let mut driver = FixedTimestep::new(1.0, 300, LoopControl::new());

        driver.advance(&mut sim, 0.0);
        // 1000 ms owed at 1 ms per tick, ceiling 300
        let report = driver.advance(&mut sim, 1000.0);

        assert_eq!(report.ticks_run, 300);
        assert!(report.truncated);
        assert_eq!(driver.accumulator_ms(), 0.0);
        assert_eq!(sim.tick_count(), 300);
    }

    #[test]
    fn test_stop_halts_advance() {
        let mut sim = test_sim();
        let control = LoopControl::new();
        let mut driver = FixedTimestep::new(10.0, 300, Arc::clone(&control));

        driver.advance(&mut sim, 0.0);
        control.stop();

        let report = driver.advance(&mut sim, 100.0);
        assert_eq!(report.ticks_run, 0);
        assert_eq!(sim.tick_count(), 0);
    }

    fn make_missile(x: f64) -> Missile {
        Missile {
            state: crate::types::BodyState::at_rest(Vec2::new(x, 0.0), 1.0),
            size: 4.0,
            color: "blue".to_string(),
        }
    }
}
