//! Simulation configuration.
//!
//! Tunables are grouped into serde-derived sections and loaded from YAML
//! files, so gravity strength, tick rate, and craft parameters can change
//! without recompiling. Every section has defaults matching the original
//! game constants, so the library also runs with no file at all.
//!
//! ## Directory Structure
//!
//! ```text
//! configs/
//! └── default.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{constants, Vec2};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            ConfigError::NotFound(name) => write!(f, "config not found: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Central gravity field parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Gravity constant: acceleration at distance d is g / d².
    pub g: f64,
    /// Clamp floor for the body-to-sun distance.
    pub min_distance: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            g: 125.0,
            min_distance: constants::MIN_GRAVITY_DISTANCE,
        }
    }
}

/// Fixed-timestep loop parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestepConfig {
    /// Simulation tick interval in milliseconds.
    pub tick_interval_ms: f64,
    /// Hard ceiling on catch-up ticks in a single frame.
    pub max_ticks_per_frame: u32,
}

impl Default for TimestepConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000.0 / 30.0,
            max_ticks_per_frame: 300,
        }
    }
}

/// Player ship parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub mass: f64,
    pub ammo: u32,
    pub size: f64,
    /// Radians of rotation per tick while a rotate intent is held.
    pub rotation_rate: f64,
    /// Velocity gained per tick while the thrust intent is held.
    pub thrust: f64,
    pub color: String,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            mass: 1100.0,
            ammo: 100,
            size: 25.0,
            rotation_rate: 0.1,
            thrust: 0.2,
            color: "blue".to_string(),
        }
    }
}

/// Missile parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    pub mass: f64,
    /// Exit speed relative to the ship, units per tick.
    pub speed: f64,
    pub size: f64,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            speed: 15.0,
            size: 4.0,
        }
    }
}

/// World layout and determinism parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub sun_pos: Vec2,
    pub sun_size: f64,
    pub ship_pos: Vec2,
    /// Cap on simultaneous star trails.
    pub max_trails: usize,
    /// Seed for the trail-effect RNG.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sun_pos: Vec2::new(400.0, 300.0),
            sun_size: 25.0,
            ship_pos: Vec2::new(200.0, 200.0),
            max_trails: 4,
            seed: 42,
        }
    }
}

/// Complete simulation configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub gravity: GravityConfig,
    pub timestep: TimestepConfig,
    pub ship: ShipConfig,
    pub missile: MissileConfig,
}

// =============================================================================
// Loader
// =============================================================================

/// Config loader with a configurable base directory.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a configuration by name (without the .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = ConfigLoader::new("configs");
    /// let config = loader.load("default")?;
    /// ```
    pub fn load(&self, name: &str) -> Result<SimConfig, ConfigError> {
        let path = self.base_path.join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(ConfigError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let config: SimConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// List all available configurations.
    pub fn list(&self) -> Result<Vec<String>, ConfigError> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn get_configs_path() -> PathBuf {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(manifest_dir).join("..").join("configs")
    }

    #[test]
    fn test_defaults_match_game_constants() {
        let config = SimConfig::default();
        assert_eq!(config.gravity.g, 125.0);
        assert_eq!(config.ship.mass, 1100.0);
        assert_eq!(config.ship.ammo, 100);
        assert_eq!(config.missile.speed, 15.0);
        assert_eq!(config.missile.mass, 1.0);
        assert_eq!(config.timestep.max_ticks_per_frame, 300);
        assert!((config.timestep.tick_interval_ms - 1000.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_default_config() {
        let loader = ConfigLoader::new(get_configs_path());
        let result = loader.load("default");

        assert!(result.is_ok(), "should load default: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let loader = ConfigLoader::new(get_configs_path());
        let result = loader.load("nonexistent_config_xyz");

        assert!(result.is_err());
        match result {
            Err(ConfigError::NotFound(name)) => {
                assert_eq!(name, "nonexistent_config_xyz");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: SimConfig = serde_yaml::from_str("gravity:\n  g: 200.0\n").unwrap();
        assert_eq!(config.gravity.g, 200.0);
        // Everything unspecified keeps its default
        assert_eq!(config.ship.mass, 1100.0);
        assert_eq!(config.gravity.min_distance, GravityConfig::default().min_distance);
    }

    #[test]
    fn test_list_configs() {
        let loader = ConfigLoader::new(get_configs_path());
        let result = loader.list();

        assert!(result.is_ok());
        assert!(result.unwrap().contains(&"default".to_string()));
    }
}
