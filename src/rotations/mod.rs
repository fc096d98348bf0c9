//! Rotation representations and the contract they share
//!
//! Each representation is a small `Copy` value wrapping the nalgebra type it is
//! made of. They all implement [`Rotation`], which fixes one native conversion
//! to and one from [`RotationQuaternion`]; everything else (rotation action,
//! near-equality, conversions to the other representations) is derived from
//! those two plus a direct route to [`RotationMatrix`].

use crate::scalar::Scalar;
use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix, Storage, U3};
use std::{fmt, ops};

/// Implements `*` and `*=` as [`Rotation::compose`] for a representation
macro_rules! impl_composition_operators {
    ($rotation:ident) => {
        impl<S: $crate::scalar::Scalar> std::ops::Mul for $rotation<S> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                $crate::rotations::Rotation::compose(&self, &rhs)
            }
        }

        impl<S: $crate::scalar::Scalar> std::ops::MulAssign for $rotation<S> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = $crate::rotations::Rotation::compose(self, &rhs);
            }
        }
    };
}

pub mod angle_axis;
pub mod euler;
pub mod matrix;
pub mod passive;
pub mod quaternion;

pub use self::matrix::RotationMatrix;
pub use self::quaternion::RotationQuaternion;

/// Contract shared by every rotation representation
///
/// Composition follows the active convention: `a.compose(&b)` applies `b`
/// first and `a` second. `a * b` is the same composition.
pub trait Rotation:
    Copy + PartialEq + fmt::Debug + fmt::Display + ops::Mul<Output = Self> + ops::MulAssign
{
    /// Precision the representation is stored in
    type Scalar: Scalar;

    /// The rotation that leaves every vector unchanged
    fn identity() -> Self;

    /// The rotation that undoes this one
    fn inverse(&self) -> Self;

    /// Group composition: apply `other`, then `self`
    fn compose(&self, other: &Self) -> Self;

    /// Native conversion into the hub representation
    fn to_quaternion(&self) -> RotationQuaternion<Self::Scalar>;

    /// Native conversion out of the hub representation
    fn from_quaternion(quaternion: &RotationQuaternion<Self::Scalar>) -> Self;

    /// Rotation matrix used for the rotation action
    fn to_rotation_matrix(&self) -> RotationMatrix<Self::Scalar>;

    /// Rotates a vector, or every column of a 3×N matrix
    fn rotate<C, St>(
        &self,
        points: &Matrix<Self::Scalar, U3, C, St>,
    ) -> OMatrix<Self::Scalar, U3, C>
    where
        C: Dim,
        St: Storage<Self::Scalar, U3, C>,
        DefaultAllocator: Allocator<Self::Scalar, U3, C>,
    {
        self.to_rotation_matrix().matrix() * points
    }

    /// Applies the inverse rotation to a vector or to every column of a 3×N matrix
    fn inverse_rotate<C, St>(
        &self,
        points: &Matrix<Self::Scalar, U3, C, St>,
    ) -> OMatrix<Self::Scalar, U3, C>
    where
        C: Dim,
        St: Storage<Self::Scalar, U3, C>,
        DefaultAllocator: Allocator<Self::Scalar, U3, C>,
    {
        self.inverse().rotate(points)
    }

    /// Same as [`Rotation::inverse`]
    fn inverted(&self) -> Self {
        self.inverse()
    }

    /// Inverts in place
    fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Resets to the identity in place
    fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Angle in `[0, π]` of the rotation taking `self` to `other`
    ///
    /// Insensitive to the encoding, so `q` and `-q` have zero disparity.
    fn disparity_angle(&self, other: &Self) -> Self::Scalar {
        self.to_quaternion()
            .inverse()
            .compose(&other.to_quaternion())
            .rotation_angle()
    }

    /// Whether both values describe the same physical rotation within `tolerance` radians
    fn is_near(&self, other: &Self, tolerance: Self::Scalar) -> bool {
        self.disparity_angle(other) <= tolerance
    }
}

/// Sign that makes the leading nonzero discriminant non-negative
///
/// Discriminants are inspected in order and exact zeros (either sign) are
/// skipped. Returns `1` when every discriminant is zero.
pub(crate) fn canonical_sign<S: Scalar>(discriminants: &[S]) -> S {
    for &value in discriminants {
        if value < S::zero() {
            return -S::one();
        }
        if value > S::zero() {
            return S::one();
        }
    }
    S::one()
}
