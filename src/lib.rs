//! # Projectile Engine
//!
//! Fixed-step simulation of a projectile launched from the origin in two
//! dimensions, under gravity and optional quadratic air resistance, until it
//! returns to ground level.
//!
//! ```
//! use projectile_engine::{simulate, PhysicsConfig};
//!
//! let record = simulate(10.0, 10.0, PhysicsConfig::default());
//! let (time, x, y, vx, vy) = record.into_sequences();
//! assert_eq!(time.len(), y.len());
//! assert_eq!((x[0], vx[0], vy[0]), (0.0, 10.0, 10.0));
//! ```

// Re-export the main types and functions
pub use acceleration::{acceleration_x, acceleration_y, drag_force};
pub use cli_api::{TrajectoryResult, TrajectorySolver, TrajectorySummary};
pub use error::ProjectileError;
pub use integrator::{
    simulate, simulate_params, simulate_with_time_step, update_state, KinematicState, TrajectoryRecord,
};
pub use params::{PhysicsConfig, SimulationParams};
pub use plot::LinePlot;

// Module declarations
pub mod acceleration;
pub mod cli_api;
pub mod constants;
mod error;
pub mod integrator;
pub mod params;
pub mod plot;
#[cfg(feature = "python")]
mod python;
