//! # Euler Angles
//!
//! Two intrinsic sequences are provided:
//!
//! - [`EulerAnglesRpy`]: `(roll, pitch, yaw)` with `R = Rx(roll) · Ry(pitch) · Rz(yaw)`
//! - [`EulerAnglesYpr`]: `(yaw, pitch, roll)` with `R = Rz(yaw) · Ry(pitch) · Rx(roll)`
//!
//! Extracted angles lie in `(−π, π]` for roll and yaw and `[−π/2, π/2]` for
//! pitch.
//!
//! ## Gimbal Lock
//!
//! When the pitch reaches ±π/2 the first and last axes line up and only the
//! sum or difference of roll and yaw is observable. Extraction then sets the
//! pitch to exactly ±π/2, sets yaw to zero and puts the whole coupled angle in
//! roll. This applies to both sequences.
//!
//! Just outside the lock region one of the outer angles is recovered from
//! matrix entries of size `cos(pitch)`, so a round trip is only accurate to about
//! `4 * EPSILON / cos(pitch)` radians. In single precision this is roughly
//! `2.4e-2` at `cos(pitch) = 2e-5` and `4.8e-4` at `1e-3`; double precision
//! stays below `1e-6` over the same range.
//!
//! Neither sequence has a closed form product, so composition and inversion go
//! through the quaternion.

use super::matrix::RotationMatrix;
use super::quaternion::RotationQuaternion;
use super::Rotation;
use crate::constants::EULER_COMPONENTS;
use crate::errors::{check_component_count, Result};
use crate::scalar::Scalar;
use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};
use std::fmt;

fn about_x<S: Scalar>(angle: S) -> Matrix3<S> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle).into_inner()
}

fn about_y<S: Scalar>(angle: S) -> Matrix3<S> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle).into_inner()
}

fn about_z<S: Scalar>(angle: S) -> Matrix3<S> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle).into_inner()
}

fn quaternion_about_x<S: Scalar>(angle: S) -> UnitQuaternion<S> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle)
}

fn quaternion_about_y<S: Scalar>(angle: S) -> UnitQuaternion<S> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle)
}

fn quaternion_about_z<S: Scalar>(angle: S) -> UnitQuaternion<S> {
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle)
}

/// Pitch pinned to ±π/2 with the sign of `sin_pitch`
fn locked_pitch<S: Scalar>(sin_pitch: S) -> S {
    if sin_pitch >= S::zero() {
        S::frac_pi_2()
    } else {
        -S::frac_pi_2()
    }
}

/// Roll-pitch-yaw angles in radians, applied as `Rx(roll) · Ry(pitch) · Rz(yaw)`
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct EulerAnglesRpy<S: Scalar> {
    angles: Vector3<S>,
}

/// Double precision roll-pitch-yaw angles
pub type EulerAnglesRpyD = EulerAnglesRpy<f64>;
/// Single precision roll-pitch-yaw angles
pub type EulerAnglesRpyF = EulerAnglesRpy<f32>;

impl<S: Scalar> EulerAnglesRpy<S> {
    pub fn new(roll: S, pitch: S, yaw: S) -> Self {
        Self::from_vector(Vector3::new(roll, pitch, yaw))
    }

    /// Wraps a vector holding `(roll, pitch, yaw)`
    pub fn from_vector(angles: Vector3<S>) -> Self {
        Self { angles }
    }

    /// Creates the angles from `[roll, pitch, yaw]`
    pub fn from_slice(components: &[S]) -> Result<Self> {
        check_component_count("roll-pitch-yaw", EULER_COMPONENTS, components.len())?;
        Ok(Self::new(components[0], components[1], components[2]))
    }

    /// Extracts the angles from a rotation matrix
    pub fn from_rotation_matrix(rotation: &RotationMatrix<S>) -> Self {
        let m = rotation.matrix();
        let cos_pitch = (m[(0, 0)] * m[(0, 0)] + m[(0, 1)] * m[(0, 1)]).sqrt();

        if cos_pitch < S::TOLERANCE {
            log::trace!("roll-pitch-yaw extraction in gimbal lock, yaw pinned to zero");
            let pitch = locked_pitch(m[(0, 2)]);
            let roll = if pitch > S::zero() {
                m[(1, 0)].atan2(m[(1, 1)])
            } else {
                (-m[(1, 0)]).atan2(m[(1, 1)])
            };
            return Self::new(roll, pitch, S::zero());
        }

        Self::new(
            (-m[(1, 2)]).atan2(m[(2, 2)]),
            m[(0, 2)].atan2(cos_pitch),
            (-m[(0, 1)]).atan2(m[(0, 0)]),
        )
    }

    #[inline]
    pub fn roll(&self) -> S {
        self.angles.x
    }

    #[inline]
    pub fn pitch(&self) -> S {
        self.angles.y
    }

    #[inline]
    pub fn yaw(&self) -> S {
        self.angles.z
    }

    pub fn roll_mut(&mut self) -> &mut S {
        &mut self.angles.x
    }

    pub fn pitch_mut(&mut self) -> &mut S {
        &mut self.angles.y
    }

    pub fn yaw_mut(&mut self) -> &mut S {
        &mut self.angles.z
    }

    pub fn set_roll(&mut self, roll: S) {
        self.angles.x = roll;
    }

    pub fn set_pitch(&mut self, pitch: S) {
        self.angles.y = pitch;
    }

    pub fn set_yaw(&mut self, yaw: S) {
        self.angles.z = yaw;
    }

    /// `(roll, pitch, yaw)` as a vector
    pub fn vector(&self) -> &Vector3<S> {
        &self.angles
    }

    pub fn vector_mut(&mut self) -> &mut Vector3<S> {
        &mut self.angles
    }

    pub fn cast<T: Scalar>(&self) -> EulerAnglesRpy<T> {
        EulerAnglesRpy::from_vector(self.angles.map(|angle| angle.cast::<T>()))
    }
}

impl<S: Scalar> Rotation for EulerAnglesRpy<S> {
    type Scalar = S;

    fn identity() -> Self {
        Self::from_vector(Vector3::zeros())
    }

    fn inverse(&self) -> Self {
        Self::from_quaternion(&self.to_quaternion().inverse())
    }

    fn compose(&self, other: &Self) -> Self {
        Self::from_quaternion(&self.to_quaternion().compose(&other.to_quaternion()))
    }

    fn to_quaternion(&self) -> RotationQuaternion<S> {
        RotationQuaternion::from(
            quaternion_about_x(self.roll())
                * quaternion_about_y(self.pitch())
                * quaternion_about_z(self.yaw()),
        )
    }

    fn from_quaternion(quaternion: &RotationQuaternion<S>) -> Self {
        Self::from_rotation_matrix(&quaternion.to_rotation_matrix())
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<S> {
        RotationMatrix::from_matrix(
            about_x(self.roll()) * about_y(self.pitch()) * about_z(self.yaw()),
        )
    }
}

impl_composition_operators!(EulerAnglesRpy);

impl<S: Scalar> Default for EulerAnglesRpy<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> fmt::Display for EulerAnglesRpy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.roll(), self.pitch(), self.yaw())
    }
}

/// Yaw-pitch-roll angles in radians, applied as `Rz(yaw) · Ry(pitch) · Rx(roll)`
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct EulerAnglesYpr<S: Scalar> {
    angles: Vector3<S>,
}

/// Double precision yaw-pitch-roll angles
pub type EulerAnglesYprD = EulerAnglesYpr<f64>;
/// Single precision yaw-pitch-roll angles
pub type EulerAnglesYprF = EulerAnglesYpr<f32>;

impl<S: Scalar> EulerAnglesYpr<S> {
    pub fn new(yaw: S, pitch: S, roll: S) -> Self {
        Self::from_vector(Vector3::new(yaw, pitch, roll))
    }

    /// Wraps a vector holding `(yaw, pitch, roll)`
    pub fn from_vector(angles: Vector3<S>) -> Self {
        Self { angles }
    }

    /// Creates the angles from `[yaw, pitch, roll]`
    pub fn from_slice(components: &[S]) -> Result<Self> {
        check_component_count("yaw-pitch-roll", EULER_COMPONENTS, components.len())?;
        Ok(Self::new(components[0], components[1], components[2]))
    }

    /// Extracts the angles from a rotation matrix
    pub fn from_rotation_matrix(rotation: &RotationMatrix<S>) -> Self {
        let m = rotation.matrix();
        let cos_pitch = (m[(2, 1)] * m[(2, 1)] + m[(2, 2)] * m[(2, 2)]).sqrt();

        if cos_pitch < S::TOLERANCE {
            log::trace!("yaw-pitch-roll extraction in gimbal lock, yaw pinned to zero");
            let pitch = locked_pitch(-m[(2, 0)]);
            let roll = if pitch > S::zero() {
                m[(0, 1)].atan2(m[(1, 1)])
            } else {
                (-m[(0, 1)]).atan2(m[(1, 1)])
            };
            return Self::new(S::zero(), pitch, roll);
        }

        Self::new(
            m[(1, 0)].atan2(m[(0, 0)]),
            (-m[(2, 0)]).atan2(cos_pitch),
            m[(2, 1)].atan2(m[(2, 2)]),
        )
    }

    #[inline]
    pub fn yaw(&self) -> S {
        self.angles.x
    }

    #[inline]
    pub fn pitch(&self) -> S {
        self.angles.y
    }

    #[inline]
    pub fn roll(&self) -> S {
        self.angles.z
    }

    pub fn yaw_mut(&mut self) -> &mut S {
        &mut self.angles.x
    }

    pub fn pitch_mut(&mut self) -> &mut S {
        &mut self.angles.y
    }

    pub fn roll_mut(&mut self) -> &mut S {
        &mut self.angles.z
    }

    pub fn set_yaw(&mut self, yaw: S) {
        self.angles.x = yaw;
    }

    pub fn set_pitch(&mut self, pitch: S) {
        self.angles.y = pitch;
    }

    pub fn set_roll(&mut self, roll: S) {
        self.angles.z = roll;
    }

    /// `(yaw, pitch, roll)` as a vector
    pub fn vector(&self) -> &Vector3<S> {
        &self.angles
    }

    pub fn vector_mut(&mut self) -> &mut Vector3<S> {
        &mut self.angles
    }

    pub fn cast<T: Scalar>(&self) -> EulerAnglesYpr<T> {
        EulerAnglesYpr::from_vector(self.angles.map(|angle| angle.cast::<T>()))
    }
}

impl<S: Scalar> Rotation for EulerAnglesYpr<S> {
    type Scalar = S;

    fn identity() -> Self {
        Self::from_vector(Vector3::zeros())
    }

    fn inverse(&self) -> Self {
        Self::from_quaternion(&self.to_quaternion().inverse())
    }

    fn compose(&self, other: &Self) -> Self {
        Self::from_quaternion(&self.to_quaternion().compose(&other.to_quaternion()))
    }

    fn to_quaternion(&self) -> RotationQuaternion<S> {
        RotationQuaternion::from(
            quaternion_about_z(self.yaw())
                * quaternion_about_y(self.pitch())
                * quaternion_about_x(self.roll()),
        )
    }

    fn from_quaternion(quaternion: &RotationQuaternion<S>) -> Self {
        Self::from_rotation_matrix(&quaternion.to_rotation_matrix())
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<S> {
        RotationMatrix::from_matrix(
            about_z(self.yaw()) * about_y(self.pitch()) * about_x(self.roll()),
        )
    }
}

impl_composition_operators!(EulerAnglesYpr);

impl<S: Scalar> Default for EulerAnglesYpr<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> fmt::Display for EulerAnglesYpr<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.yaw(), self.pitch(), self.roll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotations::quaternion::RotationQuaternionD;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    fn sample_rpy() -> EulerAnglesRpyD {
        EulerAnglesRpy::new(0.3, -0.7, 2.1)
    }

    fn sample_ypr() -> EulerAnglesYprD {
        EulerAnglesYpr::new(2.1, -0.7, 0.3)
    }

    fn assert_angles(actual: &Vector3<f64>, expected: [f64; 3]) {
        assert_relative_eq!(*actual, Vector3::from(expected), epsilon = 1e-9);
    }

    #[test]
    fn test_accessors() {
        let mut rpy = sample_rpy();
        assert_eq!((rpy.roll(), rpy.pitch(), rpy.yaw()), (0.3, -0.7, 2.1));
        rpy.set_roll(1.0);
        rpy.set_pitch(0.5);
        rpy.set_yaw(-1.0);
        assert_eq!(*rpy.vector(), Vector3::new(1.0, 0.5, -1.0));
        *rpy.yaw_mut() = 0.25;
        rpy.vector_mut().x = 0.0;
        assert_eq!(rpy, EulerAnglesRpy::new(0.0, 0.5, 0.25));

        let mut ypr = sample_ypr();
        assert_eq!((ypr.yaw(), ypr.pitch(), ypr.roll()), (2.1, -0.7, 0.3));
        *ypr.roll_mut() = 0.0;
        *ypr.pitch_mut() = 0.0;
        ypr.set_yaw(0.0);
        assert_eq!(ypr, EulerAnglesYprD::identity());

        assert_eq!(
            EulerAnglesYprD::from_slice(&[2.1, -0.7, 0.3]).unwrap(),
            sample_ypr()
        );
        assert!(EulerAnglesRpyD::from_slice(&[0.0; 4]).is_err());
    }

    #[test]
    fn test_single_axis_angles() {
        let roll = EulerAnglesRpyD::new(FRAC_PI_2, 0.0, 0.0).to_quaternion();
        assert!(roll.is_near(&RotationQuaternionD::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0), 1e-12));
        let yaw = EulerAnglesYprD::new(FRAC_PI_2, 0.0, 0.0).to_quaternion();
        assert!(yaw.is_near(&RotationQuaternionD::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2), 1e-12));

        assert_relative_eq!(
            EulerAnglesRpyD::new(FRAC_PI_2, 0.0, 0.0).rotate(&Vector3::y()),
            Vector3::z(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sequence_order() {
        // Rx(roll) is applied last for roll-pitch-yaw and first for yaw-pitch-roll
        let rpy = EulerAnglesRpyD::new(FRAC_PI_2, 0.0, FRAC_PI_2);
        assert_relative_eq!(rpy.rotate(&Vector3::x()), Vector3::z(), epsilon = 1e-12);

        let ypr = EulerAnglesYprD::new(FRAC_PI_2, 0.0, FRAC_PI_2);
        assert_relative_eq!(ypr.rotate(&Vector3::y()), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_quaternion_and_matrix_agree() {
        let rpy_matrix = *sample_rpy().to_rotation_matrix().matrix();
        let rpy_hub = *sample_rpy().to_quaternion().to_rotation_matrix().matrix();
        assert_relative_eq!(rpy_matrix, rpy_hub, epsilon = 1e-12);

        let ypr_matrix = *sample_ypr().to_rotation_matrix().matrix();
        let ypr_hub = *sample_ypr().to_quaternion().to_rotation_matrix().matrix();
        assert_relative_eq!(ypr_matrix, ypr_hub, epsilon = 1e-12);
    }

    #[test]
    fn test_extraction_round_trip() {
        let rpy = EulerAnglesRpyD::from_rotation_matrix(&sample_rpy().to_rotation_matrix());
        assert_angles(rpy.vector(), [0.3, -0.7, 2.1]);
        let ypr = EulerAnglesYprD::from_rotation_matrix(&sample_ypr().to_rotation_matrix());
        assert_angles(ypr.vector(), [2.1, -0.7, 0.3]);

        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let q = RotationQuaternionD::random(&mut rng);
            let rpy = EulerAnglesRpyD::from_quaternion(&q);
            assert!(rpy.pitch().abs() <= FRAC_PI_2);
            assert!(rpy.to_quaternion().is_near(&q, 1e-9));
            let ypr = EulerAnglesYprD::from_quaternion(&q);
            assert!(ypr.roll().abs() <= std::f64::consts::PI);
            assert!(ypr.to_quaternion().is_near(&q, 1e-9));
        }
    }

    #[test]
    fn test_rpy_gimbal_lock_boundary() {
        // At +π/2 only roll + yaw is observable, at -π/2 only roll - yaw
        let cases = [(FRAC_PI_2, 0.5), (-FRAC_PI_2, 0.1)];
        for (pitch, coupled_roll) in cases {
            let original = EulerAnglesRpyD::new(0.3, pitch, 0.2);
            let extracted = EulerAnglesRpyD::from_rotation_matrix(&original.to_rotation_matrix());
            assert_eq!(extracted.pitch(), pitch);
            assert_eq!(extracted.yaw(), 0.0);
            assert_relative_eq!(extracted.roll(), coupled_roll, epsilon = 1e-9);
            assert!(extracted.is_near(&original, 1e-9));
        }
    }

    #[test]
    fn test_ypr_gimbal_lock_boundary() {
        // At +π/2 only roll - yaw is observable, at -π/2 only roll + yaw
        let cases = [(FRAC_PI_2, 0.1), (-FRAC_PI_2, 0.5)];
        for (pitch, coupled_roll) in cases {
            let original = EulerAnglesYprD::new(0.2, pitch, 0.3);
            let extracted = EulerAnglesYprD::from_rotation_matrix(&original.to_rotation_matrix());
            assert_eq!(extracted.pitch(), pitch);
            assert_eq!(extracted.yaw(), 0.0);
            assert_relative_eq!(extracted.roll(), coupled_roll, epsilon = 1e-9);
            assert!(extracted.is_near(&original, 1e-9));
        }
    }

    #[test]
    fn test_gimbal_lock_neighborhood() {
        for offset in [1e-12, 1e-10, 1e-8, 1e-6, 1e-4] {
            for pitch in [FRAC_PI_2 - offset, -FRAC_PI_2 + offset] {
                let rpy = EulerAnglesRpyD::new(0.3, pitch, 0.2);
                let extracted = EulerAnglesRpyD::from_quaternion(&rpy.to_quaternion());
                assert!(extracted.vector().iter().all(|angle| angle.is_finite()));
                assert!(extracted.pitch().abs() <= FRAC_PI_2);
                assert!(extracted.is_near(&rpy, 1e-6), "{} vs {}", extracted, rpy);

                let ypr = EulerAnglesYprD::new(0.2, pitch, 0.3);
                let extracted = EulerAnglesYprD::from_quaternion(&ypr.to_quaternion());
                assert!(extracted.vector().iter().all(|angle| angle.is_finite()));
                assert!(extracted.is_near(&ypr, 1e-6), "{} vs {}", extracted, ypr);
            }
        }
    }

    #[test]
    fn test_composition_and_inverse() {
        let identity = EulerAnglesRpyD::identity();
        assert!((identity * sample_rpy()).is_near(&sample_rpy(), 1e-12));
        assert!((sample_rpy() * sample_rpy().inverse()).is_near(&identity, 1e-12));

        let v = Vector3::new(1.0, -2.0, 0.5);
        let other = EulerAnglesYprD::new(-0.4, 1.1, 2.9);
        let composed = (sample_ypr() * other).rotate(&v);
        let sequential = sample_ypr().rotate(&other.rotate(&v));
        assert_relative_eq!(composed, sequential, epsilon = 1e-12);

        let mut ypr = sample_ypr();
        ypr.invert();
        assert_relative_eq!(ypr.rotate(&sample_ypr().rotate(&v)), v, epsilon = 1e-12);
    }

    #[test]
    fn test_cast_and_display() {
        let single: EulerAnglesRpyF = sample_rpy().cast();
        assert_eq!(single.pitch(), -0.7_f32);
        let single: EulerAnglesYprF = sample_ypr().cast();
        assert_eq!(single.yaw(), 2.1_f32);
        assert_eq!(EulerAnglesRpyD::new(0.5, 0.0, -1.0).to_string(), "0.5 0 -1");
        assert_eq!(EulerAnglesYprD::new(0.5, 0.0, -1.0).to_string(), "0.5 0 -1");
    }
}
