//! Axis-angle rotations.

use crate::{num::Float, quaternion::Quaternion, scalar, vector::Vector3};

/// A rotation by `angle` radians about the axis `(x, y, z)`, which is
/// assumed to have unit length.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle<F> {
    angle: F,
    x: F,
    y: F,
    z: F,
}

pub type AxisAnglef = AxisAngle<f32>;
pub type AxisAngled = AxisAngle<f64>;

impl<F: Float> AxisAngle<F> {
    #[inline]
    pub const fn new(angle: F, x: F, y: F, z: F) -> Self {
        Self { angle, x, y, z }
    }

    #[inline]
    pub fn from_axis(angle: F, axis: &Vector3<F>) -> Self {
        Self::new(angle, axis.x(), axis.y(), axis.z())
    }

    /// Converts the given quaternion into an axis-angle rotation. The
    /// quaternion is normalized first if needed. When the rotation angle is
    /// zero the axis is undetermined, and the z-axis is used.
    pub fn from_quaternion(quaternion: &Quaternion<F>) -> Self {
        let q = if scalar::is_one(quaternion.norm_squared()) {
            *quaternion
        } else {
            quaternion.normalized()
        };
        let angle = F::TWO * scalar::safe_acos(q.w());
        let sin_half = (F::ONE - q.w() * q.w()).max(F::ZERO).sqrt();
        if scalar::is_zero(sin_half) {
            Self::new(angle, F::ZERO, F::ZERO, F::ONE)
        } else {
            let inv = sin_half.recip();
            Self::new(angle, q.x() * inv, q.y() * inv, q.z() * inv)
        }
    }

    #[inline]
    pub fn angle(&self) -> F {
        self.angle
    }

    #[inline]
    pub fn x(&self) -> F {
        self.x
    }

    #[inline]
    pub fn y(&self) -> F {
        self.y
    }

    #[inline]
    pub fn z(&self) -> F {
        self.z
    }

    #[inline]
    pub fn axis(&self) -> Vector3<F> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the components as `[angle, x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [F; 4] {
        [self.angle, self.x, self.y, self.z]
    }

    #[inline]
    pub fn to_quaternion(&self) -> Quaternion<F> {
        Quaternion::from_axis_angle_struct(self)
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> AxisAngle<G> {
        AxisAngle::new(f(self.angle), f(self.x), f(self.y), f(self.z))
    }
}

impl_pod!(AxisAngle);
impl_approx_via_array!(AxisAngle<F>, to_array);
impl_precision_conversions!(AxisAngle);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn converting_quaternion_to_axis_angle_and_back_is_identity() {
        let axis = Vector3::new(1.0_f64, 2.0, -2.0).normalized();
        let q = Quaternion::from_axis_angle(&axis, 1.2);
        let axis_angle = AxisAngle::from_quaternion(&q);
        assert_abs_diff_eq!(axis_angle.angle(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(axis_angle.axis(), axis, epsilon = 1e-12);
        assert_abs_diff_eq!(axis_angle.to_quaternion(), q, epsilon = 1e-12);
    }

    #[test]
    fn non_unit_quaternion_is_normalized_before_conversion() {
        let q = Quaternion::from_axis_angle(&Vector3::unit_z(), 0.8_f64);
        let scaled = Quaternion::new(q.x() * 3.0, q.y() * 3.0, q.z() * 3.0, q.w() * 3.0);
        let axis_angle = AxisAngle::from_quaternion(&scaled);
        assert_abs_diff_eq!(axis_angle.angle(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(axis_angle.axis(), Vector3::unit_z(), epsilon = 1e-12);
    }

    #[test]
    fn identity_quaternion_gives_zero_angle_about_z() {
        let axis_angle = AxisAngle::from_quaternion(&Quaternion::<f32>::identity());
        assert_eq!(axis_angle, AxisAngle::new(0.0, 0.0, 0.0, 1.0));
    }
}
