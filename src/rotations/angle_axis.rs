//! # Angle-Axis Rotation
//!
//! A rotation by `angle` radians about a unit `axis`, right-handed.
//!
//! ## Double Cover
//!
//! `(θ, v)` and `(−θ, −v)` describe the same rotation and compare equal.
//! [`AngleAxis::get_unique`] picks between them with the same rule the
//! quaternion uses, applied to `angle, axis.x, axis.y, axis.z`.
//!
//! ## Identity Axis
//!
//! The identity has no well defined axis. Conversions that land on it report
//! an angle of zero about `+X`.

use super::matrix::RotationMatrix;
use super::quaternion::RotationQuaternion;
use super::{canonical_sign, Rotation};
use crate::constants::{ANGLE_AXIS_COMPONENTS, IDENTITY_AXIS};
use crate::errors::{check_component_count, check_invariant, Result};
use crate::scalar::Scalar;
use nalgebra::{Matrix3, Vector3};
use std::fmt;

/// Rotation of `angle` radians about a unit `axis`
///
/// The unit axis is a precondition; [`AngleAxis::try_new`] checks it.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct AngleAxis<S: Scalar> {
    angle: S,
    axis: Vector3<S>,
}

/// Double precision angle-axis
pub type AngleAxisD = AngleAxis<f64>;
/// Single precision angle-axis
pub type AngleAxisF = AngleAxis<f32>;

impl<S: Scalar> AngleAxis<S> {
    /// Creates an angle-axis rotation from the angle and the axis components
    pub fn new(angle: S, x: S, y: S, z: S) -> Self {
        Self::from_vector(angle, Vector3::new(x, y, z))
    }

    /// Creates an angle-axis rotation from the angle and an axis vector
    pub fn from_vector(angle: S, axis: Vector3<S>) -> Self {
        Self { angle, axis }
    }

    /// Creates an angle-axis rotation and checks the axis is unit length
    pub fn try_new(angle: S, x: S, y: S, z: S) -> Result<Self> {
        Self::new(angle, x, y, z).validated(S::TOLERANCE)
    }

    /// Returns `self` if the axis norm is within `tolerance` of one
    pub fn validated(self, tolerance: S) -> Result<Self> {
        let deviation = (self.axis.norm() - S::one()).abs();
        check_invariant(
            "angle-axis",
            "unit axis",
            deviation.into_f64(),
            tolerance.into_f64(),
        )?;
        Ok(self)
    }

    /// Creates an angle-axis rotation from `[angle, x, y, z]`
    pub fn from_slice(components: &[S]) -> Result<Self> {
        check_component_count("angle-axis", ANGLE_AXIS_COMPONENTS, components.len())?;
        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }

    /// Splits a rotation vector into its length and direction
    pub fn from_rotation_vector(vector: &Vector3<S>) -> Self {
        let angle = vector.norm();
        if angle < S::EPSILON {
            return Self::identity();
        }
        Self::from_vector(angle, vector / angle)
    }

    /// Rotation angle in radians
    #[inline]
    pub fn angle(&self) -> S {
        self.angle
    }

    /// Unit rotation axis
    #[inline]
    pub fn axis(&self) -> &Vector3<S> {
        &self.axis
    }

    #[inline]
    pub fn angle_mut(&mut self) -> &mut S {
        &mut self.angle
    }

    #[inline]
    pub fn axis_mut(&mut self) -> &mut Vector3<S> {
        &mut self.axis
    }

    pub fn set_angle(&mut self, angle: S) {
        self.angle = angle;
    }

    pub fn set_axis(&mut self, axis: Vector3<S>) {
        self.axis = axis;
    }

    /// The axis scaled by the angle
    pub fn to_rotation_vector(&self) -> Vector3<S> {
        self.axis * self.angle
    }

    /// The encoding of the same rotation whose leading nonzero value among
    /// `angle, axis.x, axis.y, axis.z` is non-negative
    pub fn get_unique(&self) -> Self {
        let sign = canonical_sign(&[self.angle, self.axis.x, self.axis.y, self.axis.z]);
        Self::from_vector(self.angle * sign, self.axis * sign)
    }

    /// Canonicalizes in place, see [`AngleAxis::get_unique`]
    pub fn set_unique(&mut self) -> &mut Self {
        *self = self.get_unique();
        self
    }

    /// Casts angle and axis into another precision without renormalizing
    pub fn cast<T: Scalar>(&self) -> AngleAxis<T> {
        AngleAxis::from_vector(self.angle.cast(), self.axis.map(|c| c.cast::<T>()))
    }
}

impl<S: Scalar> Rotation for AngleAxis<S> {
    type Scalar = S;

    fn identity() -> Self {
        Self::new(
            S::zero(),
            S::from_double(IDENTITY_AXIS[0]),
            S::from_double(IDENTITY_AXIS[1]),
            S::from_double(IDENTITY_AXIS[2]),
        )
    }

    /// Same axis, opposite angle
    fn inverse(&self) -> Self {
        Self::from_vector(-self.angle, self.axis)
    }

    /// Angle-axis has no closed form product, so both sides go through the quaternion
    fn compose(&self, other: &Self) -> Self {
        Self::from_quaternion(&self.to_quaternion().compose(&other.to_quaternion()))
    }

    fn to_quaternion(&self) -> RotationQuaternion<S> {
        let half = self.angle * S::from_double(0.5);
        RotationQuaternion::from_real_imaginary(half.cos(), self.axis * half.sin())
    }

    /// Angle in `[0, 2π]` from the clamped real part
    ///
    /// A vector part below machine epsilon has no usable direction and yields
    /// the identity.
    fn from_quaternion(quaternion: &RotationQuaternion<S>) -> Self {
        let imaginary = quaternion.imaginary();
        let sin_half = imaginary.norm();
        if sin_half < S::EPSILON {
            log::trace!(
                "quaternion {} has no rotation axis, using the identity axis",
                quaternion
            );
            return Self::identity();
        }
        let two = S::one() + S::one();
        let cos_half = quaternion.w().clamp(-S::one(), S::one());
        Self::from_vector(two * cos_half.acos(), imaginary / sin_half)
    }

    /// Rodrigues' formula
    fn to_rotation_matrix(&self) -> RotationMatrix<S> {
        let (sin, cos) = self.angle.sin_cos();
        let skew = self.axis.cross_matrix();
        RotationMatrix::from_matrix(
            Matrix3::identity() + skew * sin + skew * skew * (S::one() - cos),
        )
    }
}

impl_composition_operators!(AngleAxis);

impl<S: Scalar> Default for AngleAxis<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> PartialEq for AngleAxis<S> {
    /// Equal when angle and axis match exactly or are both exactly negated
    fn eq(&self, other: &Self) -> bool {
        (self.angle == other.angle && self.axis == other.axis)
            || (self.angle == -other.angle && self.axis == -other.axis)
    }
}

impl<S: Scalar> fmt::Display for AngleAxis<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {} {}",
            self.angle, self.axis.x, self.axis.y, self.axis.z
        )
    }
}
