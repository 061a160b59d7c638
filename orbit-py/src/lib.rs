//! Python bindings for the orbit-core orbital shooter physics engine.
//!
//! Provides a simple Python API:
//!
//! ```python
//! from orbit_physics import Simulation
//!
//! sim = Simulation()
//! sim.set_intents(thrust=True)
//!
//! for frame in range(100):
//!     sim.advance(frame * 33.3)
//!     x, y = sim.ship_position().to_tuple()
//!     print(f"Ship at ({x:.1f}, {y:.1f})")
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use orbit_core::config::{ConfigLoader, SimConfig};
use orbit_core::simulation::{
    FixedTimestep, LoopControl, Simulation as CoreSimulation,
};
use orbit_core::types::{BodyKind, Intents, Vec2 as CoreVec2};

use std::sync::Arc;

/// 2D vector for positions and velocities.
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec2 {
    #[pyo3(get, set)]
    pub x: f64,
    #[pyo3(get, set)]
    pub y: f64,
}

#[pymethods]
impl Vec2 {
    #[new]
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn __repr__(&self) -> String {
        format!("Vec2({:.4}, {:.4})", self.x, self.y)
    }

    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<CoreVec2> for Vec2 {
    fn from(v: CoreVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2> for CoreVec2 {
    fn from(v: Vec2) -> Self {
        CoreVec2::new(v.x, v.y)
    }
}

/// Main simulation class.
///
/// Owns the world and its fixed-timestep driver; the host supplies input
/// intents and wall-clock frame times, and reads back drawable state.
#[pyclass]
pub struct Simulation {
    sim: CoreSimulation,
    driver: FixedTimestep,
    control: Arc<LoopControl>,
}

#[pymethods]
impl Simulation {
    /// Create a new simulation with default settings.
    #[new]
    fn new() -> Self {
        Self::from_sim_config(SimConfig::default())
    }

    /// Create a simulation from a named YAML config in the given directory.
    #[staticmethod]
    fn from_config(base_path: &str, name: &str) -> PyResult<Self> {
        let config = ConfigLoader::new(base_path)
            .load(name)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self::from_sim_config(config))
    }

    /// Current simulation tick count.
    #[getter]
    fn tick_count(&self) -> u64 {
        self.sim.tick_count()
    }

    /// Set the ship's input intents for upcoming ticks.
    ///
    /// `fire` is one-shot: the simulation clears it after launching.
    #[pyo3(signature = (rotate_left=false, rotate_right=false, thrust=false, fire=false))]
    fn set_intents(&mut self, rotate_left: bool, rotate_right: bool, thrust: bool, fire: bool) {
        self.sim.set_intents(Intents {
            rotate_left,
            rotate_right,
            thrust,
            fire,
        });
    }

    /// Advance the world to the given wall-clock time in milliseconds.
    ///
    /// Returns `(ticks_run, truncated)`; `truncated` is true when the frame
    /// was so late that owed ticks were discarded.
    fn advance(&mut self, now_ms: f64) -> (u32, bool) {
        let report = self.driver.advance(&mut self.sim, now_ms);
        (report.ticks_run, report.truncated)
    }

    /// Run exactly one simulation tick, ignoring wall-clock time.
    fn tick(&mut self) {
        self.sim.tick();
    }

    /// Get ship position as Vec2.
    fn ship_position(&self) -> PyResult<Vec2> {
        self.ship_field(|s| s.state.pos.into())
    }

    /// Get ship velocity as Vec2 (units per tick).
    fn ship_velocity(&self) -> PyResult<Vec2> {
        self.ship_field(|s| s.state.vel.into())
    }

    /// Get ship heading in radians.
    fn ship_heading(&self) -> PyResult<f64> {
        self.ship_field(|s| s.state.theta)
    }

    /// Get remaining missile count.
    fn ship_ammo(&self) -> PyResult<u32> {
        self.ship_field(|s| s.ammo)
    }

    /// Number of live bodies (ship plus missiles in flight).
    fn body_count(&self) -> usize {
        self.sim.body_count()
    }

    /// Drawable state for every body: a list of
    /// `(kind, x, y, theta, size, color)` tuples, star first.
    fn draw_states(&self) -> Vec<(String, f64, f64, f64, f64, String)> {
        self.sim
            .draw_states()
            .into_iter()
            .map(|d| {
                let kind = match d.kind {
                    BodyKind::Ship => "ship",
                    BodyKind::Missile => "missile",
                    BodyKind::Star => "star",
                };
                (kind.to_string(), d.pos.x, d.pos.y, d.theta, d.size, d.color)
            })
            .collect()
    }

    /// Star trail particles as `(radius, angle)` tuples.
    fn trail_states(&self) -> Vec<(f64, f64)> {
        self.sim
            .trail_states()
            .into_iter()
            .map(|t| (t.radius, t.angle))
            .collect()
    }

    /// Stop the driving loop; subsequent `advance` calls run zero ticks.
    fn stop(&self) {
        self.control.stop();
    }

    /// Get current state as dict for easy inspection.
    fn state_dict(&self) -> PyResult<PyObject> {
        Python::with_gil(|py| {
            let dict = pyo3::types::PyDict::new_bound(py);
            dict.set_item("tick_count", self.sim.tick_count())?;
            dict.set_item("body_count", self.sim.body_count())?;
            if let Some(ship) = self.ship() {
                dict.set_item("ship_x", ship.state.pos.x)?;
                dict.set_item("ship_y", ship.state.pos.y)?;
                dict.set_item("ship_vx", ship.state.vel.x)?;
                dict.set_item("ship_vy", ship.state.vel.y)?;
                dict.set_item("ship_theta", ship.state.theta)?;
                dict.set_item("ship_ammo", ship.ammo)?;
            }
            Ok(dict.into_any().unbind())
        })
    }
}

impl Simulation {
    fn from_sim_config(config: SimConfig) -> Self {
        let control = LoopControl::new();
        let driver = FixedTimestep::from_config(&config, Arc::clone(&control));
        Self {
            sim: CoreSimulation::new(config),
            driver,
            control,
        }
    }

    fn ship(&self) -> Option<&orbit_core::bodies::Ship> {
        self.sim.ship()
    }

    fn ship_field<T>(&self, f: impl FnOnce(&orbit_core::bodies::Ship) -> T) -> PyResult<T> {
        self.ship()
            .map(f)
            .ok_or_else(|| PyValueError::new_err("ship has been removed from the world"))
    }
}

/// Python module definition.
#[pymodule]
fn orbit_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Vec2>()?;
    m.add_class::<Simulation>()?;
    Ok(())
}
