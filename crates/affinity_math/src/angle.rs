//! Different units for angles.
//!
//! Rotation operations on vectors, quaternions and matrices take plain
//! radians. These wrappers are accepted where an angle is a configuration
//! value more naturally written in degrees, like the vertical field of view
//! of a perspective projection.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Represents an angle.
pub trait Angle<F: Float>: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F {
        self.as_degrees().0
    }

    /// Returns the value of the angle in radians.
    fn radians(self) -> F {
        self.as_radians().0
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    #[inline]
    fn as_degrees(self) -> Degrees<F> {
        self
    }

    #[inline]
    fn as_radians(self) -> Radians<F> {
        Radians(degrees_to_radians(self.0))
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    #[inline]
    fn as_degrees(self) -> Degrees<F> {
        Degrees(radians_to_degrees(self.0))
    }

    #[inline]
    fn as_radians(self) -> Radians<F> {
        self
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        rad.as_degrees()
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        deg.as_radians()
    }
}

macro_rules! impl_angle_ops {
    ($angle:ident) => {
        impl<F: Float, A: Angle<F>> Add<A> for $angle<F> {
            type Output = Self;
            fn add(self, rhs: A) -> Self {
                Self(self.0 + Self::from_angle(rhs).0)
            }
        }

        impl<F: Float, A: Angle<F>> Sub<A> for $angle<F> {
            type Output = Self;
            fn sub(self, rhs: A) -> Self {
                Self(self.0 - Self::from_angle(rhs).0)
            }
        }

        impl<F: Float> Mul<F> for $angle<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<F: Float> Div<F> for $angle<F> {
            type Output = Self;
            fn div(self, rhs: F) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl<F: Float> Neg for $angle<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<F: Float> AbsDiffEq for $angle<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<F: Float> RelativeEq for $angle<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees);
impl_angle_ops!(Radians);

impl<F: Float> Degrees<F> {
    #[inline]
    fn from_angle(angle: impl Angle<F>) -> Self {
        angle.as_degrees()
    }
}

impl<F: Float> Radians<F> {
    #[inline]
    fn from_angle(angle: impl Angle<F>) -> Self {
        angle.as_radians()
    }

    /// Returns an equivalent angle in the range `(-π, π]`.
    pub fn wrapped(self) -> Self {
        let mut value = self.0 % F::TWO_PI;
        if value > F::PI {
            value = value - F::TWO_PI;
        } else if value <= -F::PI {
            value = value + F::TWO_PI;
        }
        Self(value)
    }
}

pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians.to_degrees()
}

pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees.to_radians()
}
