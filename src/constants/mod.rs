//! Constants module for rotation calculations

use std::f64::consts::PI;

// Tolerances
/// Default comparison tolerance for single precision rotations
pub const TOLERANCE_F32: f32 = 1e-5;
/// Default comparison tolerance for double precision rotations
pub const TOLERANCE_F64: f64 = 1e-9;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Degenerate cases
/// Axis reported for a rotation whose axis is undefined (the identity)
pub const IDENTITY_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

// Component counts of the flat representations
/// Angle followed by the three axis components
pub const ANGLE_AXIS_COMPONENTS: usize = 4;
/// w, x, y, z
pub const QUATERNION_COMPONENTS: usize = 4;
/// Row-major matrix entries
pub const MATRIX_COMPONENTS: usize = 9;
/// Three Euler angles
pub const EULER_COMPONENTS: usize = 3;
