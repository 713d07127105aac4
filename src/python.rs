//! Python bindings (enabled with the `python` feature).
//!
//! ```python
//! import projectile_engine
//!
//! t, x, y, vx, vy = projectile_engine.simulate(initial_velocity_x=12.0, k=0.05)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cli_api::TrajectorySolver;
use crate::integrator::simulate as simulate_record;
use crate::params::{PhysicsConfig, SimulationParams};

type Sequences = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);

/// Simulate a projectile launched from the origin.
///
/// Returns five equal-length lists: time, x position, y position,
/// x velocity and y velocity.
#[pyfunction]
#[pyo3(signature = (initial_velocity_x=10.0, initial_velocity_y=10.0, k=0.0, mass=1.0))]
fn simulate(initial_velocity_x: f64, initial_velocity_y: f64, k: f64, mass: f64) -> Sequences {
    simulate_record(initial_velocity_x, initial_velocity_y, PhysicsConfig::new(k, mass)).into_sequences()
}

/// Like `simulate`, but validates the inputs and accepts gravity and time step.
#[pyfunction]
#[pyo3(signature = (initial_velocity_x=10.0, initial_velocity_y=10.0, k=0.0, mass=1.0, gravity=-9.81, time_step=0.1))]
fn simulate_checked(
    initial_velocity_x: f64,
    initial_velocity_y: f64,
    k: f64,
    mass: f64,
    gravity: f64,
    time_step: f64,
) -> PyResult<Sequences> {
    let params = SimulationParams {
        initial_velocity_x,
        initial_velocity_y,
        time_step,
        physics: PhysicsConfig::new(k, mass).with_gravity(gravity),
    };
    let result = TrajectorySolver::new(params)
        .solve()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(result.record.into_sequences())
}

#[pymodule]
fn projectile_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_checked, m)?)?;
    Ok(())
}
