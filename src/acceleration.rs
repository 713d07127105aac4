//! Per-axis acceleration from gravity and quadratic air resistance.
//!
//! Air resistance follows F = -sign(v)·k·v², so it always opposes the current
//! direction of motion on that axis and vanishes when the axis is at rest.
//! Horizontal acceleration comes from drag alone; vertical adds gravity.

use crate::params::PhysicsConfig;

/// Sign of `v` with `sign(0) == 0`.
///
/// `f64::signum` returns 1.0 for +0.0, which would apply drag to a body at rest.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Quadratic air resistance force (N) on one axis.
#[inline]
pub fn drag_force(velocity: f64, drag_coefficient: f64) -> f64 {
    -sign(velocity) * drag_coefficient * velocity * velocity
}

/// Horizontal acceleration (m/s²): drag only.
pub fn acceleration_x(velocity: f64, config: PhysicsConfig) -> f64 {
    drag_force(velocity, config.drag_coefficient) / config.mass
}

/// Vertical acceleration (m/s²): gravity plus drag.
pub fn acceleration_y(velocity: f64, config: PhysicsConfig) -> f64 {
    let force_gravity = config.mass * config.gravity;
    let force_air = drag_force(velocity, config.drag_coefficient);
    (force_gravity + force_air) / config.mass
}
