//! # Rotation Matrix
//!
//! An orthonormal 3×3 matrix with determinant +1. The rotation action of every
//! other representation goes through this type, so its product with a vector
//! is the single authoritative definition of "rotating a vector".

use super::quaternion::RotationQuaternion;
use super::Rotation;
use crate::constants::MATRIX_COMPONENTS;
use crate::errors::{check_component_count, check_invariant, Result};
use crate::scalar::Scalar;
use nalgebra::{Matrix3, Rotation3};
use std::fmt;

/// Active rotation stored as a 3×3 matrix
///
/// Orthonormality is a precondition. [`RotationMatrix::try_from_matrix`]
/// checks it together with the sign of the determinant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct RotationMatrix<S: Scalar> {
    matrix: Matrix3<S>,
}

/// Double precision rotation matrix
pub type RotationMatrixD = RotationMatrix<f64>;
/// Single precision rotation matrix
pub type RotationMatrixF = RotationMatrix<f32>;

impl<S: Scalar> RotationMatrix<S> {
    /// Creates a rotation matrix from its entries in row-major order
    #[allow(clippy::too_many_arguments)]
    pub fn new(r11: S, r12: S, r13: S, r21: S, r22: S, r23: S, r31: S, r32: S, r33: S) -> Self {
        Self::from_matrix(Matrix3::new(r11, r12, r13, r21, r22, r23, r31, r32, r33))
    }

    /// Wraps a nalgebra matrix
    pub fn from_matrix(matrix: Matrix3<S>) -> Self {
        Self { matrix }
    }

    /// Wraps a matrix after checking it within the default tolerance
    pub fn try_from_matrix(matrix: Matrix3<S>) -> Result<Self> {
        Self::from_matrix(matrix).validated(S::TOLERANCE)
    }

    /// Returns `self` if it is orthonormal with determinant +1 within `tolerance`
    pub fn validated(self, tolerance: S) -> Result<Self> {
        let gram_error = (self.matrix.transpose() * self.matrix - Matrix3::identity()).norm();
        check_invariant(
            "rotation matrix",
            "orthonormality",
            gram_error.into_f64(),
            tolerance.into_f64(),
        )?;
        let determinant_error = (self.determinant() - S::one()).abs();
        check_invariant(
            "rotation matrix",
            "determinant",
            determinant_error.into_f64(),
            tolerance.into_f64(),
        )?;
        Ok(self)
    }

    /// Creates a rotation matrix from nine entries in row-major order
    pub fn from_slice(components: &[S]) -> Result<Self> {
        check_component_count("rotation matrix", MATRIX_COMPONENTS, components.len())?;
        Ok(Self::from_matrix(Matrix3::from_row_slice(components)))
    }

    /// The wrapped nalgebra matrix
    pub fn matrix(&self) -> &Matrix3<S> {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut Matrix3<S> {
        &mut self.matrix
    }

    pub fn determinant(&self) -> S {
        self.matrix.determinant()
    }

    /// Converts into nalgebra's rotation type without re-orthonormalizing
    pub fn to_rotation3(&self) -> Rotation3<S> {
        Rotation3::from_matrix_unchecked(self.matrix)
    }

    /// Casts every entry into another precision
    pub fn cast<T: Scalar>(&self) -> RotationMatrix<T> {
        RotationMatrix::from_matrix(self.matrix.map(|entry| entry.cast::<T>()))
    }
}

impl<S: Scalar> Rotation for RotationMatrix<S> {
    type Scalar = S;

    fn identity() -> Self {
        Self::from_matrix(Matrix3::identity())
    }

    /// The transpose
    fn inverse(&self) -> Self {
        Self::from_matrix(self.matrix.transpose())
    }

    fn compose(&self, other: &Self) -> Self {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Shepperd's method
    ///
    /// Whichever of `w², x², y², z²` is largest is recovered from the diagonal
    /// first and used as the divisor for the other three, so the division never
    /// happens by a small number.
    fn to_quaternion(&self) -> RotationQuaternion<S> {
        let m = &self.matrix;
        let one = S::one();
        let half = S::from_double(0.5);
        let quarter = S::from_double(0.25);
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];

        if trace >= m[(0, 0)] && trace >= m[(1, 1)] && trace >= m[(2, 2)] {
            let w = (one + trace).max(S::zero()).sqrt() * half;
            let k = quarter / w;
            RotationQuaternion::new(
                w,
                (m[(2, 1)] - m[(1, 2)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(1, 0)] - m[(0, 1)]) * k,
            )
        } else if m[(0, 0)] >= m[(1, 1)] && m[(0, 0)] >= m[(2, 2)] {
            let x = (one + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).max(S::zero()).sqrt() * half;
            let k = quarter / x;
            RotationQuaternion::new(
                (m[(2, 1)] - m[(1, 2)]) * k,
                x,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
            )
        } else if m[(1, 1)] >= m[(2, 2)] {
            let y = (one - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]).max(S::zero()).sqrt() * half;
            let k = quarter / y;
            RotationQuaternion::new(
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(0, 1)] + m[(1, 0)]) * k,
                y,
                (m[(1, 2)] + m[(2, 1)]) * k,
            )
        } else {
            let z = (one - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]).max(S::zero()).sqrt() * half;
            let k = quarter / z;
            RotationQuaternion::new(
                (m[(1, 0)] - m[(0, 1)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                z,
            )
        }
    }

    fn from_quaternion(quaternion: &RotationQuaternion<S>) -> Self {
        quaternion.to_rotation_matrix()
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<S> {
        *self
    }
}

impl_composition_operators!(RotationMatrix);

impl<S: Scalar> Default for RotationMatrix<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> From<Rotation3<S>> for RotationMatrix<S> {
    fn from(rotation: Rotation3<S>) -> Self {
        Self::from_matrix(rotation.into_inner())
    }
}

impl<S: Scalar> fmt::Display for RotationMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}
