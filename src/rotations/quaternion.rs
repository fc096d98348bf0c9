//! # Rotation Quaternion
//!
//! The unit quaternion is the hub of the conversion graph: every other
//! representation knows how to turn itself into a [`RotationQuaternion`] and
//! how to build itself from one.
//!
//! ## Double Cover
//!
//! `q` and `-q` describe the same rotation. Equality accepts either encoding
//! and [`RotationQuaternion::get_unique`] picks one of the two
//! deterministically: the first nonzero component in the order `w, x, y, z`
//! is made non-negative.
//!
//! ## Examples
//!
//! ```rust
//! use rotations::RotationQuaternionD;
//!
//! let q = RotationQuaternionD::new(0.0, -1.0, 0.0, 0.0);
//! let unique = q.get_unique();
//! assert_eq!(unique.x(), 1.0);
//! assert_eq!(q, unique);
//! ```

use super::matrix::RotationMatrix;
use super::{canonical_sign, Rotation};
use crate::constants::QUATERNION_COMPONENTS;
use crate::errors::{check_component_count, check_invariant, Result};
use crate::scalar::Scalar;
use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};
use rand::Rng;
use std::fmt;

/// Unit quaternion `w + xi + yj + zk` describing an active rotation
///
/// The unit norm is a precondition and is not enforced by [`RotationQuaternion::new`];
/// use [`RotationQuaternion::try_new`] to check it.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct RotationQuaternion<S: Scalar> {
    quaternion: Quaternion<S>,
}

/// Double precision rotation quaternion
pub type RotationQuaternionD = RotationQuaternion<f64>;
/// Single precision rotation quaternion
pub type RotationQuaternionF = RotationQuaternion<f32>;

impl<S: Scalar> RotationQuaternion<S> {
    /// Creates a quaternion from its components, real part first
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self {
            quaternion: Quaternion::new(w, x, y, z),
        }
    }

    /// Wraps a nalgebra quaternion
    pub fn from_nalgebra(quaternion: Quaternion<S>) -> Self {
        Self { quaternion }
    }

    /// Creates a quaternion from its real part and imaginary vector
    pub fn from_real_imaginary(real: S, imaginary: Vector3<S>) -> Self {
        Self::new(real, imaginary.x, imaginary.y, imaginary.z)
    }

    /// Creates a quaternion and checks that it has unit norm within the default tolerance
    pub fn try_new(w: S, x: S, y: S, z: S) -> Result<Self> {
        Self::new(w, x, y, z).validated(S::TOLERANCE)
    }

    /// Returns `self` if its norm is within `tolerance` of one
    pub fn validated(self, tolerance: S) -> Result<Self> {
        let deviation = (self.norm() - S::one()).abs();
        check_invariant(
            "rotation quaternion",
            "unit norm",
            deviation.into_f64(),
            tolerance.into_f64(),
        )?;
        Ok(self)
    }

    /// Creates a quaternion from `[w, x, y, z]`
    pub fn from_slice(components: &[S]) -> Result<Self> {
        check_component_count("rotation quaternion", QUATERNION_COMPONENTS, components.len())?;
        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }

    /// Draws a rotation uniformly distributed over SO(3)
    ///
    /// Uses Shoemake's subgroup algorithm, which yields unit quaternions
    /// without rejection sampling.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let u3: f64 = rng.gen();
        let tau = std::f64::consts::TAU;

        let lower = (1.0 - u1).sqrt();
        let upper = u1.sqrt();
        Self::new(
            S::from_double(lower * (tau * u2).sin()),
            S::from_double(lower * (tau * u2).cos()),
            S::from_double(upper * (tau * u3).sin()),
            S::from_double(upper * (tau * u3).cos()),
        )
    }

    #[inline]
    pub fn w(&self) -> S {
        self.quaternion.w
    }

    #[inline]
    pub fn x(&self) -> S {
        self.quaternion.i
    }

    #[inline]
    pub fn y(&self) -> S {
        self.quaternion.j
    }

    #[inline]
    pub fn z(&self) -> S {
        self.quaternion.k
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut S {
        &mut self.quaternion.w
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut S {
        &mut self.quaternion.i
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut S {
        &mut self.quaternion.j
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut S {
        &mut self.quaternion.k
    }

    pub fn set_w(&mut self, w: S) {
        self.quaternion.w = w;
    }

    pub fn set_x(&mut self, x: S) {
        self.quaternion.i = x;
    }

    pub fn set_y(&mut self, y: S) {
        self.quaternion.j = y;
    }

    pub fn set_z(&mut self, z: S) {
        self.quaternion.k = z;
    }

    /// Real (scalar) part
    pub fn real(&self) -> S {
        self.quaternion.w
    }

    /// Imaginary (vector) part
    pub fn imaginary(&self) -> Vector3<S> {
        self.quaternion.imag()
    }

    /// The wrapped nalgebra quaternion
    pub fn quaternion(&self) -> &Quaternion<S> {
        &self.quaternion
    }

    /// Euclidean norm of the four components
    pub fn norm(&self) -> S {
        self.quaternion.norm()
    }

    /// Quaternion conjugate, which is the inverse for unit quaternions
    pub fn conjugated(&self) -> Self {
        Self::from_nalgebra(self.quaternion.conjugate())
    }

    /// Conjugates in place
    pub fn conjugate(&mut self) -> &mut Self {
        *self = self.conjugated();
        self
    }

    /// The encoding of the same rotation whose leading nonzero component is non-negative
    pub fn get_unique(&self) -> Self {
        let q = &self.quaternion;
        let sign = canonical_sign(&[q.w, q.i, q.j, q.k]);
        Self::new(q.w * sign, q.i * sign, q.j * sign, q.k * sign)
    }

    /// Canonicalizes in place, see [`RotationQuaternion::get_unique`]
    pub fn set_unique(&mut self) -> &mut Self {
        *self = self.get_unique();
        self
    }

    /// Rotation angle in `[0, π]`, independent of the encoding sign
    pub fn rotation_angle(&self) -> S {
        let two = S::one() + S::one();
        two * self.imaginary().norm().atan2(self.quaternion.w.abs())
    }

    /// Rotates a vector with the sandwich product `q v q*`
    ///
    /// Agrees with [`Rotation::rotate`] but skips building the matrix.
    pub fn rotate_vector(&self, vector: &Vector3<S>) -> Vector3<S> {
        let two = S::one() + S::one();
        let imaginary = self.imaginary();
        let t = imaginary.cross(vector) * two;
        vector + t * self.quaternion.w + imaginary.cross(&t)
    }

    /// Converts into nalgebra's unit quaternion without renormalizing
    pub fn to_unit_quaternion(&self) -> UnitQuaternion<S> {
        UnitQuaternion::new_unchecked(self.quaternion)
    }

    /// Casts every component into another precision without renormalizing
    pub fn cast<T: Scalar>(&self) -> RotationQuaternion<T> {
        RotationQuaternion::new(
            self.w().cast(),
            self.x().cast(),
            self.y().cast(),
            self.z().cast(),
        )
    }
}

impl<S: Scalar> Rotation for RotationQuaternion<S> {
    type Scalar = S;

    fn identity() -> Self {
        Self::from_nalgebra(Quaternion::identity())
    }

    fn inverse(&self) -> Self {
        self.conjugated()
    }

    fn compose(&self, other: &Self) -> Self {
        Self::from_nalgebra(self.quaternion * other.quaternion)
    }

    fn to_quaternion(&self) -> RotationQuaternion<S> {
        *self
    }

    fn from_quaternion(quaternion: &RotationQuaternion<S>) -> Self {
        *quaternion
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<S> {
        let two = S::one() + S::one();
        let one = S::one();
        let (w, x, y, z) = (self.w(), self.x(), self.y(), self.z());

        RotationMatrix::from_matrix(Matrix3::new(
            one - two * (y * y + z * z),
            two * (x * y - w * z),
            two * (x * z + w * y),
            two * (x * y + w * z),
            one - two * (x * x + z * z),
            two * (y * z - w * x),
            two * (x * z - w * y),
            two * (y * z + w * x),
            one - two * (x * x + y * y),
        ))
    }
}

impl_composition_operators!(RotationQuaternion);

impl<S: Scalar> Default for RotationQuaternion<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> PartialEq for RotationQuaternion<S> {
    /// Equal when the components match exactly or are exactly negated
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.quaternion, &other.quaternion);
        (a.w == b.w && a.i == b.i && a.j == b.j && a.k == b.k)
            || (a.w == -b.w && a.i == -b.i && a.j == -b.j && a.k == -b.k)
    }
}

impl<S: Scalar> From<UnitQuaternion<S>> for RotationQuaternion<S> {
    fn from(unit: UnitQuaternion<S>) -> Self {
        Self::from_nalgebra(unit.into_inner())
    }
}

impl<S: Scalar> fmt::Display for RotationQuaternion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.w(), self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn quat1() -> RotationQuaternionD {
        RotationQuaternion::new(0.0, 0.36, 0.48, 0.8)
    }

    fn quat2() -> RotationQuaternionD {
        RotationQuaternion::new(-0.48, -0.6, 0.0, 0.64)
    }

    fn quarter_x() -> RotationQuaternionD {
        RotationQuaternion::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0)
    }

    fn quarter_y() -> RotationQuaternionD {
        RotationQuaternion::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0)
    }

    fn quarter_z() -> RotationQuaternionD {
        RotationQuaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2)
    }

    fn assert_components(q: &RotationQuaternionD, expected: [f64; 4]) {
        assert_relative_eq!(q.w(), expected[0], epsilon = 1e-6);
        assert_relative_eq!(q.x(), expected[1], epsilon = 1e-6);
        assert_relative_eq!(q.y(), expected[2], epsilon = 1e-6);
        assert_relative_eq!(q.z(), expected[3], epsilon = 1e-6);
    }

    #[test]
    fn test_constructors_and_accessors() {
        let rot = RotationQuaternionD::default();
        assert_components(&rot, [1.0, 0.0, 0.0, 0.0]);

        let mut rot = RotationQuaternionD::identity();
        rot.set_w(0.0);
        rot.set_x(0.36);
        rot.set_y(0.48);
        rot.set_z(0.8);
        assert_components(&rot, [0.0, 0.36, 0.48, 0.8]);

        let from_parts = RotationQuaternion::from_real_imaginary(0.0, Vector3::new(0.36, 0.48, 0.8));
        assert_components(&from_parts, [0.0, 0.36, 0.48, 0.8]);
        assert_eq!(from_parts.real(), 0.0);
        assert_eq!(from_parts.imaginary(), Vector3::new(0.36, 0.48, 0.8));

        let wrapped = RotationQuaternion::from_nalgebra(Quaternion::new(0.0, 0.36, 0.48, 0.8));
        assert_components(&wrapped, [0.0, 0.36, 0.48, 0.8]);

        let copy = wrapped;
        assert_components(&copy, [0.0, 0.36, 0.48, 0.8]);

        let mut rot = quat1();
        *rot.w_mut() = 1.0;
        *rot.x_mut() = 0.0;
        *rot.y_mut() = 0.0;
        *rot.z_mut() = 0.0;
        assert_components(&rot, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_slice() {
        let q = RotationQuaternionD::from_slice(&[0.0, 0.36, 0.48, 0.8]).unwrap();
        assert_components(&q, [0.0, 0.36, 0.48, 0.8]);
        assert!(RotationQuaternionD::from_slice(&[1.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(RotationQuaternionD::try_new(0.0, 0.36, 0.48, 0.8).is_ok());
        assert!(RotationQuaternionD::try_new(1.0, 1.0, 0.0, 0.0).is_err());
        assert!(RotationQuaternionD::new(1.001, 0.0, 0.0, 0.0)
            .validated(1e-2)
            .is_ok());
    }

    #[test]
    fn test_inversion_and_conjugation() {
        let rot = quat1().inverse();
        assert_components(&rot, [0.0, -0.36, -0.48, -0.8]);

        let mut rot2 = rot;
        rot2.invert();
        assert_components(&rot2, [0.0, 0.36, 0.48, 0.8]);

        let conj = quat1().conjugated();
        assert_components(&conj, [0.0, -0.36, -0.48, -0.8]);
        let mut back = conj;
        back.conjugate();
        assert_components(&back, [0.0, 0.36, 0.48, 0.8]);
    }

    #[test]
    fn test_norm() {
        assert_relative_eq!(quat1().norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(quat2().norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(RotationQuaternionD::identity().norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_set_identity() {
        let mut rot = quat1();
        rot.set_identity();
        assert_components(&rot, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_comparison() {
        let rot = quat1();
        assert!(rot == quat1());
        assert!(rot != quat2());
        let negated = RotationQuaternion::new(-0.0, -0.36, -0.48, -0.8);
        assert_eq!(rot, negated);
        let partially_negated = RotationQuaternion::new(0.0, -0.36, 0.48, 0.8);
        assert_ne!(rot, partially_negated);
    }

    #[test]
    fn test_uniqueness() {
        let cases = [
            ([-1.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0]),
            ([0.0, -1.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]),
            ([0.0, 0.0, -1.0, 0.0], [0.0, 0.0, 1.0, 0.0]),
            ([0.0, 0.0, 0.0, -1.0], [0.0, 0.0, 0.0, 1.0]),
        ];
        for (input, expected) in cases {
            let rot = RotationQuaternionD::from_slice(&input).unwrap();
            assert_components(&rot.get_unique(), expected);

            let mut in_place = rot;
            in_place.set_unique();
            assert_components(&in_place, expected);
        }

        let already_unique = RotationQuaternion::new(0.5, -0.5, -0.5, -0.5);
        assert_components(&already_unique.get_unique(), [0.5, -0.5, -0.5, -0.5]);
    }

    #[test]
    fn test_concatenation() {
        let identity = RotationQuaternionD::identity();
        assert_eq!(quat1() * identity, quat1());
        assert_eq!(identity * quat1(), quat1());

        for quarter in [quarter_x(), quarter_y(), quarter_z()] {
            let full = quarter * quarter * quarter * quarter;
            assert_components(&full.get_unique(), [1.0, 0.0, 0.0, 0.0]);
        }

        // Conjugating one quarter turn by another permutes the axes
        let cases = [
            (quarter_x().inverted() * quarter_y() * quarter_x(), quarter_z().inverted()),
            (quarter_x().inverted() * quarter_z() * quarter_x(), quarter_y()),
            (quarter_y().inverted() * quarter_x() * quarter_y(), quarter_z()),
            (quarter_y().inverted() * quarter_z() * quarter_y(), quarter_x().inverted()),
            (quarter_z().inverted() * quarter_x() * quarter_z(), quarter_y().inverted()),
            (quarter_z().inverted() * quarter_y() * quarter_z(), quarter_x()),
        ];
        for (rot, expected) in cases {
            let expected = expected.get_unique();
            assert_components(
                &rot.get_unique(),
                [expected.w(), expected.x(), expected.y(), expected.z()],
            );
        }
    }

    #[test]
    fn test_mul_assign() {
        let mut rot = quarter_x();
        rot *= quarter_x();
        let half = RotationQuaternionD::new(0.0, 1.0, 0.0, 0.0);
        assert!(rot.is_near(&half, 1e-12));
    }

    #[test]
    fn test_vector_rotation() {
        let x = Vector3::x();
        let y = Vector3::y();
        let z = Vector3::z();

        let cases = [
            (quarter_x(), x, x),
            (quarter_x(), y, z),
            (quarter_x(), z, -y),
            (quarter_y(), x, -z),
            (quarter_y(), y, y),
            (quarter_y(), z, x),
            (quarter_z(), x, y),
            (quarter_z(), y, -x),
            (quarter_z(), z, z),
        ];
        for (rot, input, expected) in cases {
            assert_relative_eq!(rot.rotate(&input), expected, epsilon = 1e-6);
            assert_relative_eq!(rot.rotate_vector(&input), expected, epsilon = 1e-6);
            assert_relative_eq!(rot.inverse_rotate(&expected), input, epsilon = 1e-6);
        }

        let identity = RotationQuaternionD::identity();
        for v in [x, y, z] {
            assert_relative_eq!(identity.rotate(&v), v, epsilon = 1e-6);
            assert_relative_eq!(identity.inverse_rotate(&v), v, epsilon = 1e-6);
        }

        let vec = Vector3::new(1.3, -2.5, 3.6);
        let sequential = quat2().rotate(&quat1().rotate(&vec));
        let composed = (quat2() * quat1()).rotate(&vec);
        assert_relative_eq!(sequential, composed, epsilon = 1e-6);
    }

    #[test]
    fn test_sandwich_matches_matrix_path() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..100 {
            let rot = RotationQuaternionD::random(&mut rng);
            let v = Vector3::new(2.0, 10.0, -7.0);
            assert_relative_eq!(rot.rotate_vector(&v), rot.rotate(&v), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_random_is_unit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let rot = RotationQuaternionF::random(&mut rng);
            assert_relative_eq!(rot.norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let matrix = *RotationQuaternionD::random(&mut rng).to_rotation_matrix().matrix();
            assert_relative_eq!(matrix.transpose() * matrix, Matrix3::identity(), epsilon = 1e-12);
            assert_relative_eq!(matrix.determinant(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotation_angle_ignores_sign() {
        let half_x = RotationQuaternionD::new(0.0, 1.0, 0.0, 0.0);
        assert_relative_eq!(half_x.rotation_angle(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(quarter_x().rotation_angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        let negated = RotationQuaternionD::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0, 0.0);
        assert_relative_eq!(negated.rotation_angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_quaternion_interop() {
        let unit = quat1().to_unit_quaternion();
        assert_relative_eq!(unit.w, 0.0);
        let back: RotationQuaternionD = unit.into();
        assert_eq!(back, quat1());
    }

    #[test]
    fn test_cast() {
        let single: RotationQuaternionF = quat1().cast();
        assert_eq!(single.x(), 0.36_f32);
        let double: RotationQuaternionD = single.cast();
        assert_relative_eq!(double.x(), 0.36, epsilon = 1e-7);
    }

    #[test]
    fn test_display() {
        let rot = RotationQuaternionD::new(1.0, 0.0, 0.5, -0.5);
        assert_eq!(rot.to_string(), "1 0 0.5 -0.5");
    }
}
