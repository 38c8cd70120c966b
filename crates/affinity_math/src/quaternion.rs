//! Quaternions.

use crate::{axis_angle::AxisAngle, num::Float, vector::Vector3};

/// A quaternion `w + xi + yj + zk` following the Hamilton convention. Unit
/// quaternions represent rotations, with `q` and `-q` describing the same
/// rotation.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<F> {
    x: F,
    y: F,
    z: F,
    w: F,
}

pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;

impl<F: Float> Quaternion<F> {
    #[inline]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    /// Creates the quaternion representing no rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE)
    }

    #[inline]
    pub fn from_parts(real: F, imag: &Vector3<F>) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    /// Creates the rotation by `angle` radians about the given unit axis.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3<F>, angle: F) -> Self {
        let (sin, cos) = (angle * F::ONE_HALF).sin_cos();
        Self::from_parts(cos, &(axis * sin))
    }

    #[inline]
    pub fn from_axis_angle_struct(axis_angle: &AxisAngle<F>) -> Self {
        Self::from_axis_angle(&axis_angle.axis(), axis_angle.angle())
    }

    #[inline]
    pub fn rotation_x(angle: F) -> Self {
        let (sin, cos) = (angle * F::ONE_HALF).sin_cos();
        Self::new(sin, F::ZERO, F::ZERO, cos)
    }

    #[inline]
    pub fn rotation_y(angle: F) -> Self {
        let (sin, cos) = (angle * F::ONE_HALF).sin_cos();
        Self::new(F::ZERO, sin, F::ZERO, cos)
    }

    #[inline]
    pub fn rotation_z(angle: F) -> Self {
        let (sin, cos) = (angle * F::ONE_HALF).sin_cos();
        Self::new(F::ZERO, F::ZERO, sin, cos)
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
    pub fn w(&self) -> F {
        self.w
    }

    #[inline]
    pub fn real(&self) -> F {
        self.w
    }

    #[inline]
    pub fn imag(&self) -> Vector3<F> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [F; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn norm_squared(&self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> F {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        let inv_norm = crate::scalar::inv_sqrt(self.norm_squared());
        Self::new(
            self.x * inv_norm,
            self.y * inv_norm,
            self.z * inv_norm,
            self.w * inv_norm,
        )
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Negates every component. The result represents the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Computes the Hamilton product `self * other`, which rotates by `other`
    /// first and then by `self`.
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }

    /// Rotates the given vector by this unit quaternion.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3<F>) -> Vector3<F> {
        let imag = self.imag();
        let t = imag.cross(vector) * F::TWO;
        vector + t * self.w + imag.cross(&t)
    }

    /// Whether this and the other quaternion represent the same rotation to
    /// within the given tolerance, accounting for `q` and `-q` being
    /// equivalent.
    pub fn same_rotation_as(&self, other: &Self, epsilon: F) -> bool {
        use approx::AbsDiffEq;
        self.abs_diff_eq(other, epsilon) || self.abs_diff_eq(&other.negated(), epsilon)
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> Quaternion<G> {
        Quaternion::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl<F: Float> Default for Quaternion<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    Quaternion::mul(a, b)
});

impl_unary_op!(Neg, neg, Quaternion<F>, Quaternion<F>, |val| { val.negated() });

impl_pod!(Quaternion);
impl_approx_via_array!(Quaternion<F>, to_array);
impl_precision_conversions!(Quaternion);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotating_x_axis_by_quarter_turn_about_z_gives_y_axis() {
        let q = Quaternion::rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(
            q.rotate_vector(&Vector3::unit_x()),
            Vector3::unit_y(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn axis_angle_quaternion_matches_axis_specific_one() {
        let angle = 0.7_f64;
        assert_abs_diff_eq!(
            Quaternion::from_axis_angle(&Vector3::unit_y(), angle),
            Quaternion::rotation_y(angle),
            epsilon = 1e-12
        );
    }

    #[test]
    fn product_applies_right_operand_first() {
        let qx = Quaternion::rotation_x(FRAC_PI_2);
        let qz = Quaternion::rotation_z(FRAC_PI_2);
        let v = Vector3::unit_y();
        assert_abs_diff_eq!(
            (qz * qx).rotate_vector(&v),
            qz.rotate_vector(&qx.rotate_vector(&v)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn conjugate_of_unit_quaternion_is_inverse() {
        let q = Quaternion::new(0.1_f32, -0.4, 0.3, 0.8).normalized();
        assert_abs_diff_eq!(q * q.conjugate(), Quaternion::identity(), epsilon = 1e-6);
    }

    #[test]
    fn negated_quaternion_is_same_rotation() {
        let q = Quaternion::rotation_x(0.3_f32);
        assert!(q.same_rotation_as(&-q, 1e-6));
        assert!(!q.same_rotation_as(&Quaternion::rotation_x(0.4), 1e-6));
    }
}
