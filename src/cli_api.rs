// CLI API module - validated solver interface used by the command-line tool
use serde::Serialize;

use crate::error::ProjectileError;
use crate::integrator::{simulate_params, TrajectoryRecord};
use crate::params::SimulationParams;

/// Headline numbers for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySummary {
    pub sample_count: usize,
    pub flight_time: f64,    // s, time of the last sample
    pub range: f64,          // m, horizontal position of the last sample
    pub max_height: f64,     // m
    pub apex_time: f64,      // s
    pub final_velocity: f64, // m/s, speed at the last sample
}

impl TrajectorySummary {
    /// Summarize a record. An empty record summarizes to all zeros.
    pub fn from_record(record: &TrajectoryRecord) -> Self {
        let Some(last) = record.last() else {
            return Self {
                sample_count: 0,
                flight_time: 0.0,
                range: 0.0,
                max_height: 0.0,
                apex_time: 0.0,
                final_velocity: 0.0,
            };
        };

        let mut max_height = f64::NEG_INFINITY;
        let mut apex_time = 0.0;
        for (&t, &y) in record.time().iter().zip(record.position_y()) {
            if y > max_height {
                max_height = y;
                apex_time = t;
            }
        }

        Self {
            sample_count: record.len(),
            flight_time: last.time,
            range: last.position.x,
            max_height,
            apex_time,
            final_velocity: last.speed(),
        }
    }
}

// Trajectory result
#[derive(Debug, Clone)]
pub struct TrajectoryResult {
    pub summary: TrajectorySummary,
    pub record: TrajectoryRecord,
}

// Trajectory solver
pub struct TrajectorySolver {
    params: SimulationParams,
}

impl TrajectorySolver {
    pub fn new(params: SimulationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.params.time_step = step;
    }

    /// Validate the parameters and run the integrator.
    ///
    /// A launch that never leaves the ground is a successful, empty result.
    pub fn solve(&self) -> Result<TrajectoryResult, ProjectileError> {
        self.params.validate()?;

        let record = simulate_params(&self.params);
        let summary = TrajectorySummary::from_record(&record);

        Ok(TrajectoryResult { summary, record })
    }
}
