//! # Conversions
//!
//! Every ordered pair of representations, at every pair of precisions, is
//! connected by [`FromRotation`]. Most pairs are not written out by hand: they
//! are routed through the quaternion hub, so a representation only has to know
//! its own `to_quaternion` and `from_quaternion`.
//!
//! ## Routing
//!
//! | Source → Destination | Route |
//! |---|---|
//! | same representation | precision cast |
//! | to or from quaternion | native `to_quaternion` / `from_quaternion` |
//! | angle-axis → matrix | Rodrigues' formula |
//! | matrix → Euler angles | direct extraction |
//! | Euler angles → matrix | product of elementary rotations |
//! | anything else | [`hub_convert`] |
//!
//! The direct routes are shortcuts only. They produce the same rotation as
//! [`hub_convert`] within the scalar tolerance.
//!
//! ## Examples
//!
//! ```rust
//! use rotations::{convert, hub_convert, AngleAxisD, EulerAnglesYprF, Rotation, RotationMatrixD};
//!
//! let angle_axis = AngleAxisD::new(0.5, 0.0, 0.0, 1.0);
//! let direct: RotationMatrixD = convert(&angle_axis);
//! let via_hub: RotationMatrixD = hub_convert(&angle_axis);
//! assert!(direct.is_near(&via_hub, 1e-12));
//!
//! // Precision changes ride along with the conversion
//! let ypr: EulerAnglesYprF = convert(&angle_axis);
//! assert!((ypr.yaw() - 0.5).abs() < 1e-6);
//! ```

use crate::rotations::angle_axis::AngleAxis;
use crate::rotations::euler::{EulerAnglesRpy, EulerAnglesYpr};
use crate::rotations::{Rotation, RotationMatrix, RotationQuaternion};
use crate::scalar::Scalar;

/// Construction of a rotation from another representation
///
/// Implemented for every ordered pair of representations and every pair of
/// scalar precisions.
pub trait FromRotation<Source> {
    fn from_rotation(source: &Source) -> Self;
}

/// Converts any representation into any other, changing precision if needed
pub fn convert<Destination, Source>(source: &Source) -> Destination
where
    Destination: FromRotation<Source>,
{
    Destination::from_rotation(source)
}

/// Converts through the quaternion hub, bypassing any direct shortcut
///
/// The quaternion is cast to the destination precision before the
/// destination is built from it.
pub fn hub_convert<Destination, Source>(source: &Source) -> Destination
where
    Destination: Rotation,
    Source: Rotation,
{
    let quaternion = source.to_quaternion().cast::<Destination::Scalar>();
    Destination::from_quaternion(&quaternion)
}

macro_rules! impl_precision_cast {
    ($($rotation:ident),* $(,)?) => {
        $(
            impl<S: Scalar, T: Scalar> FromRotation<$rotation<S>> for $rotation<T> {
                fn from_rotation(source: &$rotation<S>) -> Self {
                    source.cast()
                }
            }
        )*
    };
}

macro_rules! impl_quaternion_routes {
    ($($rotation:ident),* $(,)?) => {
        $(
            impl<S: Scalar, T: Scalar> FromRotation<$rotation<S>> for RotationQuaternion<T> {
                fn from_rotation(source: &$rotation<S>) -> Self {
                    source.to_quaternion().cast()
                }
            }

            impl<S: Scalar, T: Scalar> FromRotation<RotationQuaternion<S>> for $rotation<T> {
                fn from_rotation(source: &RotationQuaternion<S>) -> Self {
                    Self::from_quaternion(&source.cast())
                }
            }
        )*
    };
}

macro_rules! impl_hub_routes {
    ($($source:ident => $destination:ident),* $(,)?) => {
        $(
            impl<S: Scalar, T: Scalar> FromRotation<$source<S>> for $destination<T> {
                fn from_rotation(source: &$source<S>) -> Self {
                    hub_convert(source)
                }
            }
        )*
    };
}

/// Same-precision `From` impls so that `.into()` works between representations
macro_rules! impl_from_sugar {
    ($($source:ident => $destination:ident),* $(,)?) => {
        $(
            impl<S: Scalar> From<$source<S>> for $destination<S> {
                fn from(source: $source<S>) -> Self {
                    Self::from_rotation(&source)
                }
            }
        )*
    };
}

impl_precision_cast!(
    AngleAxis,
    RotationQuaternion,
    RotationMatrix,
    EulerAnglesRpy,
    EulerAnglesYpr,
);

impl_quaternion_routes!(AngleAxis, RotationMatrix, EulerAnglesRpy, EulerAnglesYpr);

impl_hub_routes!(
    AngleAxis => EulerAnglesRpy,
    AngleAxis => EulerAnglesYpr,
    RotationMatrix => AngleAxis,
    EulerAnglesRpy => AngleAxis,
    EulerAnglesRpy => EulerAnglesYpr,
    EulerAnglesYpr => AngleAxis,
    EulerAnglesYpr => EulerAnglesRpy,
);

impl<S: Scalar, T: Scalar> FromRotation<AngleAxis<S>> for RotationMatrix<T> {
    fn from_rotation(source: &AngleAxis<S>) -> Self {
        source.to_rotation_matrix().cast()
    }
}

impl<S: Scalar, T: Scalar> FromRotation<EulerAnglesRpy<S>> for RotationMatrix<T> {
    fn from_rotation(source: &EulerAnglesRpy<S>) -> Self {
        source.to_rotation_matrix().cast()
    }
}

impl<S: Scalar, T: Scalar> FromRotation<EulerAnglesYpr<S>> for RotationMatrix<T> {
    fn from_rotation(source: &EulerAnglesYpr<S>) -> Self {
        source.to_rotation_matrix().cast()
    }
}

impl<S: Scalar, T: Scalar> FromRotation<RotationMatrix<S>> for EulerAnglesRpy<T> {
    fn from_rotation(source: &RotationMatrix<S>) -> Self {
        EulerAnglesRpy::from_rotation_matrix(source).cast()
    }
}

impl<S: Scalar, T: Scalar> FromRotation<RotationMatrix<S>> for EulerAnglesYpr<T> {
    fn from_rotation(source: &RotationMatrix<S>) -> Self {
        EulerAnglesYpr::from_rotation_matrix(source).cast()
    }
}

impl_from_sugar!(
    AngleAxis => RotationQuaternion,
    AngleAxis => RotationMatrix,
    AngleAxis => EulerAnglesRpy,
    AngleAxis => EulerAnglesYpr,
    RotationQuaternion => AngleAxis,
    RotationQuaternion => RotationMatrix,
    RotationQuaternion => EulerAnglesRpy,
    RotationQuaternion => EulerAnglesYpr,
    RotationMatrix => AngleAxis,
    RotationMatrix => RotationQuaternion,
    RotationMatrix => EulerAnglesRpy,
    RotationMatrix => EulerAnglesYpr,
    EulerAnglesRpy => AngleAxis,
    EulerAnglesRpy => RotationQuaternion,
    EulerAnglesRpy => RotationMatrix,
    EulerAnglesRpy => EulerAnglesYpr,
    EulerAnglesYpr => AngleAxis,
    EulerAnglesYpr => RotationQuaternion,
    EulerAnglesYpr => RotationMatrix,
    EulerAnglesYpr => EulerAnglesRpy,
);
