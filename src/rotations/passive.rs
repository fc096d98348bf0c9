//! # Passive Rotation Quaternion
//!
//! A passive rotation describes a change of frame instead of a motion. For the
//! same physical rotation the passive quaternion is the conjugate of the
//! active one, so `rotate_vector` on a passive quaternion returns the
//! coordinates of a fixed vector expressed in the rotated frame.
//!
//! ```rust
//! use nalgebra::Vector3;
//! use rotations::{Rotation, RotationQuaternionD};
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! let active = RotationQuaternionD::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
//! let passive = active.get_passive();
//! let coordinates = passive.rotate_vector(&Vector3::x());
//! assert!((coordinates - active.inverse_rotate(&Vector3::x())).norm() < 1e-12);
//! ```

use super::matrix::RotationMatrix;
use super::quaternion::RotationQuaternion;
use super::Rotation;
use crate::scalar::Scalar;
use nalgebra::Vector3;
use std::fmt;

/// Unit quaternion used as a frame transformation
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct PassiveRotationQuaternion<S: Scalar> {
    components: RotationQuaternion<S>,
}

/// Double precision passive rotation quaternion
pub type PassiveRotationQuaternionD = PassiveRotationQuaternion<f64>;
/// Single precision passive rotation quaternion
pub type PassiveRotationQuaternionF = PassiveRotationQuaternion<f32>;

impl<S: Scalar> PassiveRotationQuaternion<S> {
    /// Creates a passive quaternion from its own components, real part first
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self {
            components: RotationQuaternion::new(w, x, y, z),
        }
    }

    /// The frame change that describes the same physical rotation as `active`
    pub fn from_active(active: &RotationQuaternion<S>) -> Self {
        Self {
            components: active.conjugated(),
        }
    }

    /// The active rotation describing the same physical rotation
    pub fn get_active(&self) -> RotationQuaternion<S> {
        self.components.conjugated()
    }

    #[inline]
    pub fn w(&self) -> S {
        self.components.w()
    }

    #[inline]
    pub fn x(&self) -> S {
        self.components.x()
    }

    #[inline]
    pub fn y(&self) -> S {
        self.components.y()
    }

    #[inline]
    pub fn z(&self) -> S {
        self.components.z()
    }

    /// The passive rotation that undoes this frame change
    pub fn inverted(&self) -> Self {
        Self {
            components: self.components.conjugated(),
        }
    }

    /// Inverts in place
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    /// Frame change `other` followed by frame change `self`
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            components: self.components.compose(&other.components),
        }
    }

    /// Expresses a fixed vector in the rotated frame
    pub fn rotate_vector(&self, vector: &Vector3<S>) -> Vector3<S> {
        self.components.rotate_vector(vector)
    }

    /// Matrix mapping coordinates from the reference frame into the rotated frame
    pub fn to_rotation_matrix(&self) -> RotationMatrix<S> {
        self.components.to_rotation_matrix()
    }

    /// Whether both describe the same frame change within `tolerance` radians
    pub fn is_near(&self, other: &Self, tolerance: S) -> bool {
        self.get_active().is_near(&other.get_active(), tolerance)
    }
}

impl<S: Scalar> Default for PassiveRotationQuaternion<S> {
    fn default() -> Self {
        Self {
            components: RotationQuaternion::identity(),
        }
    }
}

impl<S: Scalar> From<RotationQuaternion<S>> for PassiveRotationQuaternion<S> {
    fn from(active: RotationQuaternion<S>) -> Self {
        Self::from_active(&active)
    }
}

impl<S: Scalar> From<PassiveRotationQuaternion<S>> for RotationQuaternion<S> {
    fn from(passive: PassiveRotationQuaternion<S>) -> Self {
        passive.get_active()
    }
}

impl<S: Scalar> fmt::Display for PassiveRotationQuaternion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (passive)", self.components)
    }
}

impl<S: Scalar> RotationQuaternion<S> {
    /// The frame change describing the same physical rotation
    pub fn get_passive(&self) -> PassiveRotationQuaternion<S> {
        PassiveRotationQuaternion::from_active(self)
    }
}
