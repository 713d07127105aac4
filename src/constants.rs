/// Physical constants and defaults used in trajectory calculations

/// Gravitational acceleration in m/s² (negative: points down the Y axis)
pub const GRAVITY_MPS2: f64 = -9.81;

/// Default integration time step in seconds
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

/// Default launch velocity along the X axis (m/s)
pub const DEFAULT_VELOCITY_X_MPS: f64 = 10.0;

/// Default launch velocity along the Y axis (m/s)
pub const DEFAULT_VELOCITY_Y_MPS: f64 = 10.0;

/// Default combined air resistance coefficient in F = -k·v².
///
/// Zero disables air resistance entirely.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.0;

/// Default projectile mass (kg). Only matters when drag is enabled.
pub const DEFAULT_MASS_KG: f64 = 1.0;
