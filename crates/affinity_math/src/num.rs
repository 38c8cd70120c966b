//! Numbers and numerics.

#![allow(clippy::excessive_precision)]

use num_traits as nt;
use std::fmt;

/// Gathers traits useful for working with generic floating point types.
///
/// Every vector, quaternion and matrix type in this crate is generic over a
/// type implementing this trait, which in practice means [`f32`] or [`f64`].
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + nt::ToPrimitive
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const THREE: Self;
    const FOUR: Self;
    const ONE_HALF: Self;
    const ONE_FOURTH: Self;
    const SQRT_2: Self;
    const FRAC_1_SQRT_2: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_1_PI: Self;
    const MIN: Self;
    const MAX: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    /// Magnitude below which a value is considered zero by the approximate
    /// checks in [`scalar`](crate::scalar).
    const TOLERANCE: Self;
    /// Number of bytes in the in-memory representation.
    const SIZE: usize;
}

macro_rules! impl_float {
    ($f:tt, $tolerance:expr) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;
            const FOUR: Self = 4.0;
            const ONE_HALF: Self = 0.5;
            const ONE_FOURTH: Self = 0.25;
            const SQRT_2: Self = std::$f::consts::SQRT_2;
            const FRAC_1_SQRT_2: Self = std::$f::consts::FRAC_1_SQRT_2;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = 2.0 * std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const FRAC_1_PI: Self = std::$f::consts::FRAC_1_PI;
            const MIN: Self = Self::MIN;
            const MAX: Self = Self::MAX;
            const INFINITY: Self = Self::INFINITY;
            const NEG_INFINITY: Self = Self::NEG_INFINITY;
            const TOLERANCE: Self = $tolerance;
            const SIZE: usize = std::mem::size_of::<$f>();
        }
    };
}

impl_float!(f32, 1e-6);
impl_float!(f64, 1e-12);

/// Lossless conversion of a floating point value into a type of equal or
/// higher precision.
pub trait Widen<G: Float>: Float {
    fn widen(self) -> G;
}

/// Conversion of a floating point value into a type of equal or lower
/// precision. Converting from [`f64`] to [`f32`] rounds to the nearest
/// representable value and is therefore lossy.
pub trait Narrow<G: Float>: Float {
    fn narrow(self) -> G;
}

impl Widen<f32> for f32 {
    #[inline]
    fn widen(self) -> f32 {
        self
    }
}

impl Widen<f64> for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Widen<f64> for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

impl Narrow<f32> for f32 {
    #[inline]
    fn narrow(self) -> f32 {
        self
    }
}

impl Narrow<f32> for f64 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn narrow(self) -> f32 {
        self as f32
    }
}

impl Narrow<f64> for f64 {
    #[inline]
    fn narrow(self) -> f64 {
        self
    }
}
