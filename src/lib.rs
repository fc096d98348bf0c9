//! Rotations: mutually convertible 3D rotation representations
//!
//! This crate provides five encodings of the same abstract object, an element
//! of SO(3):
//!
//! - [`AngleAxis`]: a rotation angle about a unit axis
//! - [`RotationQuaternion`]: a unit quaternion
//! - [`RotationMatrix`]: an orthonormal 3×3 matrix with determinant +1
//! - [`EulerAnglesRpy`]: roll-pitch-yaw angles (X-Y'-Z'' sequence)
//! - [`EulerAnglesYpr`]: yaw-pitch-roll angles (Z-Y'-X'' sequence)
//!
//! Every representation implements the [`Rotation`] trait, composes with `*`,
//! acts on vectors and on batches of column vectors, and converts into every
//! other representation through [`convert`]. Conversions are routed through
//! the quaternion as a hub, so each representation only carries one formula
//! to and one formula from [`RotationQuaternion`].
//!
//! All rotations are active: `rotate` moves vectors while the frame stays put,
//! and `(a * b).rotate(v) == a.rotate(b.rotate(v))`. A frame-change view of a
//! quaternion is available through [`RotationQuaternion::get_passive`].
//!
//! ```rust
//! use nalgebra::Vector3;
//! use rotations::{convert, EulerAnglesRpyD, Rotation, RotationMatrixD, RotationQuaternionD};
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! let quarter_x = RotationQuaternionD::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);
//! let rotated = quarter_x.rotate(&Vector3::y());
//! assert!((rotated - Vector3::z()).norm() < 1e-12);
//!
//! let matrix: RotationMatrixD = convert(&quarter_x);
//! let rpy: EulerAnglesRpyD = convert(&matrix);
//! assert!((rpy.roll() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod rotations;
pub mod scalar;

// Re-export commonly used types
pub use conversions::{convert, hub_convert, FromRotation};
pub use errors::{Result, RotationError};
pub use rotations::angle_axis::{AngleAxis, AngleAxisD, AngleAxisF};
pub use rotations::euler::{
    EulerAnglesRpy, EulerAnglesRpyD, EulerAnglesRpyF, EulerAnglesYpr, EulerAnglesYprD,
    EulerAnglesYprF,
};
pub use rotations::matrix::{RotationMatrix, RotationMatrixD, RotationMatrixF};
pub use rotations::passive::{
    PassiveRotationQuaternion, PassiveRotationQuaternionD, PassiveRotationQuaternionF,
};
pub use rotations::quaternion::{RotationQuaternion, RotationQuaternionD, RotationQuaternionF};
pub use rotations::Rotation;
pub use scalar::Scalar;
