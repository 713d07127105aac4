//! Fixed-step trajectory integrator.
//!
//! Each step records the current state, then advances both axes with the same
//! time step using constant-acceleration kinematics:
//!
//! ```text
//! distance = v·dt + ½·a·dt²
//! v       += a·dt
//! p       += distance
//! t       += dt
//! ```
//!
//! The run starts at the origin and ends as soon as the projectile is back at
//! or below ground level.

use nalgebra::Vector2;

use crate::acceleration::{acceleration_x, acceleration_y};
use crate::constants::DEFAULT_TIME_STEP_S;
use crate::params::{PhysicsConfig, SimulationParams};

/// Instantaneous state of the projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub time: f64,
    pub position: Vector2<f64>, // m
    pub velocity: Vector2<f64>, // m/s
}

impl KinematicState {
    /// State at launch: t = 0 at the origin.
    pub fn launch(initial_velocity_x: f64, initial_velocity_y: f64) -> Self {
        Self {
            time: 0.0,
            position: Vector2::zeros(),
            velocity: Vector2::new(initial_velocity_x, initial_velocity_y),
        }
    }

    /// Above ground, or on the ground and moving up.
    pub fn is_airborne(&self) -> bool {
        self.position.y > 0.0 || (self.position.y == 0.0 && self.velocity.y > 0.0)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Advance `state` by one step of length `dt` under constant `acceleration`.
pub fn update_state(state: KinematicState, acceleration: Vector2<f64>, dt: f64) -> KinematicState {
    let distance = state.velocity * dt + acceleration * (0.5 * dt * dt);
    KinematicState {
        time: state.time + dt,
        position: state.position + distance,
        velocity: state.velocity + acceleration * dt,
    }
}

/// Sampled states of one run, stored as five per-axis sequences.
///
/// States can only be appended whole, so the sequences always have equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryRecord {
    time: Vec<f64>,
    position_x: Vec<f64>,
    position_y: Vec<f64>,
    velocity_x: Vec<f64>,
    velocity_y: Vec<f64>,
}

impl TrajectoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            position_x: Vec::with_capacity(capacity),
            position_y: Vec::with_capacity(capacity),
            velocity_x: Vec::with_capacity(capacity),
            velocity_y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, state: &KinematicState) {
        self.time.push(state.time);
        self.position_x.push(state.position.x);
        self.position_y.push(state.position.y);
        self.velocity_x.push(state.velocity.x);
        self.velocity_y.push(state.velocity.y);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn position_x(&self) -> &[f64] {
        &self.position_x
    }

    pub fn position_y(&self) -> &[f64] {
        &self.position_y
    }

    pub fn velocity_x(&self) -> &[f64] {
        &self.velocity_x
    }

    pub fn velocity_y(&self) -> &[f64] {
        &self.velocity_y
    }

    /// Sample `index` rebuilt as a state, if it exists.
    pub fn state(&self, index: usize) -> Option<KinematicState> {
        if index >= self.len() {
            return None;
        }
        Some(KinematicState {
            time: self.time[index],
            position: Vector2::new(self.position_x[index], self.position_y[index]),
            velocity: Vector2::new(self.velocity_x[index], self.velocity_y[index]),
        })
    }

    pub fn first(&self) -> Option<KinematicState> {
        self.state(0)
    }

    pub fn last(&self) -> Option<KinematicState> {
        self.len().checked_sub(1).and_then(|i| self.state(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = KinematicState> + '_ {
        (0..self.len()).filter_map(move |i| self.state(i))
    }

    /// Hand the sequences over as `(time, pos_x, pos_y, vel_x, vel_y)`.
    pub fn into_sequences(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.time, self.position_x, self.position_y, self.velocity_x, self.velocity_y)
    }
}

/// Simulate a launch from the origin with the default 0.1 s step.
pub fn simulate(initial_velocity_x: f64, initial_velocity_y: f64, config: PhysicsConfig) -> TrajectoryRecord {
    simulate_with_time_step(initial_velocity_x, initial_velocity_y, config, DEFAULT_TIME_STEP_S)
}

pub fn simulate_params(params: &SimulationParams) -> TrajectoryRecord {
    simulate_with_time_step(
        params.initial_velocity_x,
        params.initial_velocity_y,
        params.physics,
        params.time_step,
    )
}

/// Simulate a launch from the origin until the projectile is back on the ground.
///
/// A launch with `initial_velocity_y <= 0` never leaves the ground and yields
/// an empty record. Inputs are not validated: a zero mass or non-finite
/// velocity produces non-finite samples rather than an error.
pub fn simulate_with_time_step(
    initial_velocity_x: f64,
    initial_velocity_y: f64,
    config: PhysicsConfig,
    dt: f64,
) -> TrajectoryRecord {
    let mut state = KinematicState::launch(initial_velocity_x, initial_velocity_y);
    let mut record = TrajectoryRecord::with_capacity(estimated_steps(initial_velocity_y, config.gravity, dt));

    while state.is_airborne() {
        let acceleration = Vector2::new(
            acceleration_x(state.velocity.x, config),
            acceleration_y(state.velocity.y, config),
        );

        record.push(&state);
        state = update_state(state, acceleration, dt);
    }

    record
}

// Drag-free flight time / dt; drag only shortens the flight.
fn estimated_steps(initial_velocity_y: f64, gravity: f64, dt: f64) -> usize {
    let flight_time = 2.0 * initial_velocity_y / gravity.abs();
    let steps = (flight_time / dt).ceil() + 1.0;
    if steps.is_finite() && steps > 0.0 {
        (steps as usize).min(1 << 20)
    } else {
        0
    }
}
