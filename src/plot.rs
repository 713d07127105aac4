//! Line plot description for the X/Y path of a trajectory.
//!
//! The plot carries the data, title and axis labels; drawing is left to
//! whatever consumes it (a JSON-reading plotting tool, or the coarse text
//! renderer below for terminals).

use serde::Serialize;

use crate::integrator::TrajectoryRecord;

pub const PLOT_TITLE: &str = "Projectile trajectory";
pub const X_LABEL: &str = "X / m";
pub const Y_LABEL: &str = "Y / m";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl LinePlot {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            title: PLOT_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x,
            y,
        }
    }

    /// Plot of the position sequences of `record`.
    pub fn from_record(record: &TrajectoryRecord) -> Self {
        Self::new(record.position_x().to_vec(), record.position_y().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Draw the path on a `width` x `height` character grid.
    ///
    /// Each point is scaled into the grid and marked with `*`. The Y axis grows
    /// upwards. Sizes below 2x2 are raised to 2x2.
    pub fn render_ascii(&self, width: usize, height: usize) -> String {
        let width = width.max(2);
        let height = height.max(2);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&self.y_label);
        out.push('\n');

        let mut grid = vec![vec![' '; width]; height];
        if !self.is_empty() {
            let (x_min, x_max) = bounds(&self.x);
            let (y_min, y_max) = bounds(&self.y);

            for (&x, &y) in self.x.iter().zip(&self.y) {
                let col = scale(x, x_min, x_max, width);
                let row = scale(y, y_min, y_max, height);
                grid[height - 1 - row][col] = '*';
            }
        }

        for row in &grid {
            out.push('|');
            out.extend(row.iter());
            out.push('\n');
        }
        out.push('+');
        out.push_str(&"-".repeat(width));
        out.push('\n');
        out.push_str(&format!("{:>w$}\n", self.x_label, w = width + 1));
        out
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn scale(value: f64, min: f64, max: f64, cells: usize) -> usize {
    let span = max - min;
    if !value.is_finite() || !span.is_finite() || span <= 0.0 {
        return 0;
    }
    let cell = ((value - min) / span * (cells - 1) as f64).round() as usize;
    cell.min(cells - 1)
}
