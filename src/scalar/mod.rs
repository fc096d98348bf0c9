//! Scalar precision policy
//!
//! Every rotation type is generic over a [`Scalar`], which is either `f32` or
//! `f64`. The scalar decides the default comparison tolerance and knows how to
//! cast itself into the other precision.

use crate::constants::{TOLERANCE_F32, TOLERANCE_F64};
use nalgebra::RealField;
use num_traits::AsPrimitive;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Floating point type a rotation is stored in
pub trait Scalar:
    RealField + Copy + fmt::Display + AsPrimitive<f64> + Serialize + DeserializeOwned
{
    /// Default tolerance for near-equality, validation and gimbal lock detection
    const TOLERANCE: Self;

    /// Machine epsilon of the precision
    const EPSILON: Self;

    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Converts a double precision literal or value into this precision
    #[inline]
    fn from_double(value: f64) -> Self {
        nalgebra::convert(value)
    }

    /// Widens this value to double precision
    #[inline]
    fn into_f64(self) -> f64 {
        self.as_()
    }

    /// Casts into another precision with standard narrowing/widening rules
    ///
    /// Widening is exact. Narrowing rounds to the nearest representable value.
    #[inline]
    fn cast<T: Scalar>(self) -> T {
        T::from_double(self.into_f64())
    }
}

impl Scalar for f32 {
    const TOLERANCE: f32 = TOLERANCE_F32;
    const EPSILON: f32 = f32::EPSILON;
    const NAME: &'static str = "f32";
}

impl Scalar for f64 {
    const TOLERANCE: f64 = TOLERANCE_F64;
    const EPSILON: f64 = f64::EPSILON;
    const NAME: &'static str = "f64";
}
