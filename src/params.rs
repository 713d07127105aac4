//! Simulation parameters and scenario loading.
//!
//! A scenario can be described in YAML; any field left out keeps its default:
//!
//! ```yaml
//! initial_velocity_x: 10.0   # m/s
//! initial_velocity_y: 10.0   # m/s
//! time_step: 0.1             # s
//! physics:
//!   drag_coefficient: 0.0    # k in F = -k·v²
//!   mass: 1.0                # kg
//!   gravity: -9.81           # m/s²
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DRAG_COEFFICIENT, DEFAULT_MASS_KG, DEFAULT_TIME_STEP_S, DEFAULT_VELOCITY_X_MPS,
    DEFAULT_VELOCITY_Y_MPS, GRAVITY_MPS2,
};
use crate::error::ProjectileError;

/// Physical configuration shared by the acceleration model and the integrator.
///
/// Defaults: no air resistance, 1 kg, standard gravity of -9.81 m/s².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Combined air resistance coefficient `k` in F = -k·v². Should be >= 0.
    pub drag_coefficient: f64,
    /// Mass of the projectile (kg). Must be > 0.
    pub mass: f64,
    /// Gravitational acceleration (m/s²), negative for "down".
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            mass: DEFAULT_MASS_KG,
            gravity: GRAVITY_MPS2,
        }
    }
}

impl PhysicsConfig {
    pub fn new(drag_coefficient: f64, mass: f64) -> Self {
        Self {
            drag_coefficient,
            mass,
            ..Default::default()
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn validate(&self) -> Result<(), ProjectileError> {
        require_finite("drag_coefficient", self.drag_coefficient)?;
        require_finite("mass", self.mass)?;
        require_finite("gravity", self.gravity)?;

        if self.drag_coefficient < 0.0 {
            return Err(invalid("drag_coefficient", self.drag_coefficient, "must not be negative"));
        }
        if self.mass <= 0.0 {
            return Err(invalid("mass", self.mass, "must be greater than zero"));
        }
        if self.gravity >= 0.0 {
            return Err(invalid("gravity", self.gravity, "must point downwards (negative)"));
        }
        Ok(())
    }
}

/// Everything needed for one simulation run. Immutable for the run's duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub initial_velocity_x: f64, // m/s
    pub initial_velocity_y: f64, // m/s
    pub time_step: f64,          // s
    pub physics: PhysicsConfig,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_velocity_x: DEFAULT_VELOCITY_X_MPS,
            initial_velocity_y: DEFAULT_VELOCITY_Y_MPS,
            time_step: DEFAULT_TIME_STEP_S,
            physics: PhysicsConfig::default(),
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ProjectileError> {
        require_finite("initial_velocity_x", self.initial_velocity_x)?;
        require_finite("initial_velocity_y", self.initial_velocity_y)?;
        require_finite("time_step", self.time_step)?;
        if self.time_step <= 0.0 {
            return Err(invalid("time_step", self.time_step, "must be greater than zero"));
        }
        self.physics.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ProjectileError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a scenario file. The result is not validated; see [`SimulationParams::validate`].
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ProjectileError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ProjectileError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> ProjectileError {
    ProjectileError::InvalidParameter { name, value, reason }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ProjectileError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value, "must be a finite number"))
    }
}
