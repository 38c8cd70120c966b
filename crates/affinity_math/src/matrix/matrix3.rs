//! 3x3 matrices.

use super::{Matrix4, Matrix4x3};
use crate::{
    axis_angle::AxisAngle,
    num::Float,
    quaternion::Quaternion,
    vector::Vector3,
};

/// A 3x3 matrix, typically representing a rotation, scaling or other linear
/// transform in 3D.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3<F> {
    columns: [Vector3<F>; 3],
}

pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;

impl<F: Float> Matrix3<F> {
    /// Creates a matrix from its elements in column-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: F, m01: F, m02: F, m10: F, m11: F, m12: F, m20: F, m21: F, m22: F) -> Self {
        Self::from_columns(
            Vector3::new(m00, m01, m02),
            Vector3::new(m10, m11, m12),
            Vector3::new(m20, m21, m22),
        )
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(&Vector3::same(F::ONE))
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_columns(Vector3::zeros(), Vector3::zeros(), Vector3::zeros())
    }

    #[inline]
    pub const fn from_columns(
        column_1: Vector3<F>,
        column_2: Vector3<F>,
        column_3: Vector3<F>,
    ) -> Self {
        Self {
            columns: [column_1, column_2, column_3],
        }
    }

    /// Creates a matrix from the given column-major array of elements.
    #[inline]
    pub fn from_cols_array(elements: &[F; 9]) -> Self {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = *elements;
        Self::new(m00, m01, m02, m10, m11, m12, m20, m21, m22)
    }

    /// Returns the elements as a column-major array.
    #[inline]
    pub fn to_cols_array(&self) -> [F; 9] {
        let [c0, c1, c2] = &self.columns;
        [
            c0.x(),
            c0.y(),
            c0.z(),
            c1.x(),
            c1.y(),
            c1.z(),
            c2.x(),
            c2.y(),
            c2.z(),
        ]
    }

    /// Creates a diagonal matrix with the given diagonal elements.
    #[inline]
    pub fn from_diagonal(diagonal: &Vector3<F>) -> Self {
        Self::new(
            diagonal.x(),
            F::ZERO,
            F::ZERO,
            F::ZERO,
            diagonal.y(),
            F::ZERO,
            F::ZERO,
            F::ZERO,
            diagonal.z(),
        )
    }

    #[inline]
    pub fn scaling(x: F, y: F, z: F) -> Self {
        Self::from_diagonal(&Vector3::new(x, y, z))
    }

    #[inline]
    pub fn scaling_uniform(scale: F) -> Self {
        Self::scaling(scale, scale, scale)
    }

    /// Creates the rotation by `angle` radians about the x-axis, following
    /// the right-hand rule.
    #[inline]
    pub fn rotation_x(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            F::ONE,
            F::ZERO,
            F::ZERO,
            F::ZERO,
            cos,
            sin,
            F::ZERO,
            -sin,
            cos,
        )
    }

    #[inline]
    pub fn rotation_y(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos,
            F::ZERO,
            -sin,
            F::ZERO,
            F::ONE,
            F::ZERO,
            sin,
            F::ZERO,
            cos,
        )
    }

    #[inline]
    pub fn rotation_z(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos,
            sin,
            F::ZERO,
            -sin,
            cos,
            F::ZERO,
            F::ZERO,
            F::ZERO,
            F::ONE,
        )
    }

    /// Creates the rotation `Rx(angle_x) * Ry(angle_y) * Rz(angle_z)`, which
    /// rotates about z first.
    pub fn rotation_xyz(angle_x: F, angle_y: F, angle_z: F) -> Self {
        let (sx, cx) = angle_x.sin_cos();
        let (sy, cy) = angle_y.sin_cos();
        let (sz, cz) = angle_z.sin_cos();
        let (sx_sy, cx_sy) = (sx * sy, cx * sy);
        Self::new(
            cy * cz,
            sx_sy * cz + cx * sz,
            sx * sz - cx_sy * cz,
            -cy * sz,
            cx * cz - sx_sy * sz,
            cx_sy * sz + sx * cz,
            sy,
            -sx * cy,
            cx * cy,
        )
    }

    /// Creates the rotation `Rz(angle_z) * Ry(angle_y) * Rx(angle_x)`, which
    /// rotates about x first.
    pub fn rotation_zyx(angle_z: F, angle_y: F, angle_x: F) -> Self {
        let (sx, cx) = angle_x.sin_cos();
        let (sy, cy) = angle_y.sin_cos();
        let (sz, cz) = angle_z.sin_cos();
        let (cz_sy, sz_sy) = (cz * sy, sz * sy);
        Self::new(
            cz * cy,
            sz * cy,
            -sy,
            cz_sy * sx - sz * cx,
            sz_sy * sx + cz * cx,
            cy * sx,
            cz_sy * cx + sz * sx,
            sz_sy * cx - cz * sx,
            cy * cx,
        )
    }

    /// Creates the rotation `Ry(angle_y) * Rx(angle_x) * Rz(angle_z)`.
    pub fn rotation_yxz(angle_y: F, angle_x: F, angle_z: F) -> Self {
        let (sx, cx) = angle_x.sin_cos();
        let (sy, cy) = angle_y.sin_cos();
        let (sz, cz) = angle_z.sin_cos();
        let (sy_sx, cy_sx) = (sy * sx, cy * sx);
        Self::new(
            cy * cz + sy_sx * sz,
            cx * sz,
            cy_sx * sz - sy * cz,
            sy_sx * cz - cy * sz,
            cx * cz,
            cy_sx * cz + sy * sz,
            sy * cx,
            -sx,
            cy * cx,
        )
    }

    /// Creates the rotation by `angle` radians about the given axis, which is
    /// assumed to have unit length.
    pub fn rotation_axis(angle: F, axis: &Vector3<F>) -> Self {
        let (sin, cos) = angle.sin_cos();
        let c = F::ONE - cos;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let (xy, xz, yz) = (x * y * c, x * z * c, y * z * c);
        Self::new(
            cos + x * x * c,
            xy + z * sin,
            xz - y * sin,
            xy - z * sin,
            cos + y * y * c,
            yz + x * sin,
            xz + y * sin,
            yz - x * sin,
            cos + z * z * c,
        )
    }

    #[inline]
    pub fn rotation_axis_angle(axis_angle: &AxisAngle<F>) -> Self {
        Self::rotation_axis(axis_angle.angle(), &axis_angle.axis())
    }

    /// Creates the rotation matrix equivalent to the given unit quaternion.
    pub fn rotation_quaternion(quaternion: &Quaternion<F>) -> Self {
        let (x, y, z, w) = (quaternion.x(), quaternion.y(), quaternion.z(), quaternion.w());
        let (w2, x2, y2, z2) = (w * w, x * x, y * y, z * z);
        let (zw, xy, xz, yw, yz, xw) = (z * w, x * y, x * z, y * w, y * z, x * w);
        Self::new(
            w2 + x2 - z2 - y2,
            F::TWO * (xy + zw),
            F::TWO * (xz - yw),
            F::TWO * (xy - zw),
            y2 - z2 + w2 - x2,
            F::TWO * (yz + xw),
            F::TWO * (xz + yw),
            F::TWO * (yz - xw),
            z2 - y2 - x2 + w2,
        )
    }

    /// Creates the rotation that maps the z-axis onto `dir` and the y-axis
    /// onto the direction in the plane of `dir` and `up` closest to `up`.
    pub fn rotation_towards(dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        let [left, up, dir] = super::orthonormal_basis(dir, up);
        Self::from_columns(left, up, dir)
    }

    /// Creates a rotation that makes `-z` point along `dir` with `up` as
    /// close to `+y` as possible. This is the inverse of
    /// [`rotation_towards`](Self::rotation_towards) applied to `-dir`.
    pub fn from_look_along(dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        Self::rotation_towards(&-dir, up).transpose()
    }

    /// Creates the skew-symmetric matrix whose rows (not columns) are
    /// `(0, a, -b)`, `(-a, 0, c)` and `(b, -c, 0)`.
    pub fn skew_symmetric(a: F, b: F, c: F) -> Self {
        Self::new(F::ZERO, -a, b, a, F::ZERO, -c, -b, c, F::ZERO)
    }

    /// Creates the reflection about the plane through the origin with the
    /// given unit normal.
    pub fn reflection(normal: &Vector3<F>) -> Self {
        let twice = normal * F::TWO;
        Self::from_columns(
            Vector3::unit_x() - normal * twice.x(),
            Vector3::unit_y() - normal * twice.y(),
            Vector3::unit_z() - normal * twice.z(),
        )
    }

    #[inline]
    pub(crate) fn columns(&self) -> &[Vector3<F>; 3] {
        &self.columns
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> F {
        let [c0, c1, c2] = &self.columns;
        c0.dot(&c1.cross(c2))
    }

    /// Computes the inverse from the adjugate and the determinant. A
    /// singular matrix gives non-finite elements.
    pub fn invert(&self) -> Self {
        self.cofactor().transpose() * self.determinant().recip()
    }

    /// Computes the matrix of cofactors, which is the transpose of the
    /// adjugate.
    pub fn cofactor(&self) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c1.cross(c2), c2.cross(c0), c0.cross(c1))
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    /// Computes `self * right`.
    #[inline]
    pub fn mul(&self, right: &Self) -> Self {
        Self {
            columns: right.columns.map(|column| self.transform(&column)),
        }
    }

    /// Computes `left * self`.
    #[inline]
    pub fn mul_local(&self, left: &Self) -> Self {
        left.mul(self)
    }

    pub fn add(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a - b)
    }

    pub fn mul_component_wise(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a.component_mul(b))
    }

    /// Multiplies every element with the given scalar.
    pub fn scale_all(&self, factor: F) -> Self {
        Self {
            columns: self.columns.map(|column| column * factor),
        }
    }

    /// Linearly interpolates every element towards `other`.
    pub fn lerp(&self, other: &Self, t: F) -> Self {
        self.zip_columns(other, |a, b| a.lerp(b, t))
    }

    /// Computes the normal matrix, which is the transpose of the inverse.
    pub fn normal(&self) -> Self {
        self.cofactor() * self.determinant().recip()
    }

    /// Applies the given function to every element.
    pub fn mapped(&self, f: impl Fn(F) -> F) -> Self {
        Self {
            columns: self.columns.map(|column| column.mapped(&f)),
        }
    }

    /// Computes `self * S` where `S` scales by the given factors.
    #[inline]
    pub fn scale(&self, x: F, y: F, z: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c0 * x, c1 * y, c2 * z)
    }

    #[inline]
    pub fn scale_uniform(&self, scale: F) -> Self {
        self.scale(scale, scale, scale)
    }

    /// Computes `S * self` where `S` scales by the given factors.
    #[inline]
    pub fn scale_local(&self, x: F, y: F, z: F) -> Self {
        let factors = Vector3::new(x, y, z);
        Self {
            columns: self.columns.map(|column| column.component_mul(&factors)),
        }
    }

    /// Computes `self * Rx(angle)`.
    #[inline]
    pub fn rotate_x(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(*c0, c1 * cos + c2 * sin, c2 * cos - c1 * sin)
    }

    #[inline]
    pub fn rotate_y(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c0 * cos - c2 * sin, *c1, c0 * sin + c2 * cos)
    }

    #[inline]
    pub fn rotate_z(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c0 * cos + c1 * sin, c1 * cos - c0 * sin, *c2)
    }

    /// Computes `Rx(angle) * self`.
    #[inline]
    pub fn rotate_local_x(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            columns: self
                .columns
                .map(|v| Vector3::new(v.x(), cos * v.y() - sin * v.z(), sin * v.y() + cos * v.z())),
        }
    }

    #[inline]
    pub fn rotate_local_y(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            columns: self
                .columns
                .map(|v| Vector3::new(cos * v.x() + sin * v.z(), v.y(), cos * v.z() - sin * v.x())),
        }
    }

    #[inline]
    pub fn rotate_local_z(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            columns: self
                .columns
                .map(|v| Vector3::new(cos * v.x() - sin * v.y(), sin * v.x() + cos * v.y(), v.z())),
        }
    }

    /// Computes `self * Rx(angle_x) * Ry(angle_y) * Rz(angle_z)`.
    #[inline]
    pub fn rotate_xyz(&self, angle_x: F, angle_y: F, angle_z: F) -> Self {
        self.mul(&Self::rotation_xyz(angle_x, angle_y, angle_z))
    }

    /// Computes `self * Rz(angle_z) * Ry(angle_y) * Rx(angle_x)`.
    #[inline]
    pub fn rotate_zyx(&self, angle_z: F, angle_y: F, angle_x: F) -> Self {
        self.mul(&Self::rotation_zyx(angle_z, angle_y, angle_x))
    }

    /// Computes `self * Ry(angle_y) * Rx(angle_x) * Rz(angle_z)`.
    #[inline]
    pub fn rotate_yxz(&self, angle_y: F, angle_x: F, angle_z: F) -> Self {
        self.mul(&Self::rotation_yxz(angle_y, angle_x, angle_z))
    }

    /// Computes `self * R` where `R` rotates by `angle` about `axis`. The
    /// axis is used as given and is assumed to have unit length.
    pub fn rotate_axis(&self, angle: F, axis: &Vector3<F>) -> Self {
        self.mul(&Self::rotation_axis(angle, axis))
    }

    pub fn rotate_axis_angle(&self, axis_angle: &AxisAngle<F>) -> Self {
        self.mul(&Self::rotation_axis_angle(axis_angle))
    }

    pub fn rotate_quaternion(&self, quaternion: &Quaternion<F>) -> Self {
        self.mul(&Self::rotation_quaternion(quaternion))
    }

    /// Computes `R * self` where `R` rotates by `angle` about `axis`.
    pub fn rotate_local_axis(&self, angle: F, axis: &Vector3<F>) -> Self {
        Self::rotation_axis(angle, axis).mul(self)
    }

    pub fn rotate_local_quaternion(&self, quaternion: &Quaternion<F>) -> Self {
        Self::rotation_quaternion(quaternion).mul(self)
    }

    pub fn rotate_towards(&self, dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::rotation_towards(dir, up))
    }

    pub fn look_along(&self, dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::from_look_along(dir, up))
    }

    pub fn reflect(&self, normal: &Vector3<F>) -> Self {
        self.mul(&Self::reflection(normal))
    }

    /// Returns the length of each column, which are the scaling factors
    /// along each axis (ignoring the sign of reflections).
    pub fn scale_factors(&self) -> Vector3<F> {
        let [c0, c1, c2] = &self.columns;
        Vector3::new(c0.norm(), c1.norm(), c2.norm())
    }

    /// Extracts the rotation as a quaternion, assuming the matrix is
    /// orthonormal.
    pub fn normalized_rotation(&self) -> Quaternion<F> {
        super::quaternion_from_orthonormal_columns(&self.columns)
    }

    /// Extracts the rotation as a quaternion after dividing out the length
    /// of each column.
    pub fn unnormalized_rotation(&self) -> Quaternion<F> {
        super::quaternion_from_unnormalized_columns(&self.columns)
    }

    /// Extracts the rotation as an axis and angle, assuming the matrix is
    /// orthonormal.
    pub fn to_axis_angle(&self) -> AxisAngle<F> {
        AxisAngle::from_quaternion(&self.normalized_rotation())
    }

    /// Computes the angles `(x, y, z)` for which
    /// [`rotation_zyx(z, y, x)`](Self::rotation_zyx) gives this rotation.
    ///
    /// When the y-angle is `±π/2` (gimbal lock), the x-angle is reported as
    /// zero and z carries the whole remaining rotation.
    pub fn euler_angles_zyx(&self) -> Vector3<F> {
        super::euler_angles_zyx_from_columns(&self.columns)
    }

    /// Computes the angles `(x, y, z)` for which
    /// [`rotation_xyz(x, y, z)`](Self::rotation_xyz) gives this rotation.
    ///
    /// When the y-angle is `±π/2` (gimbal lock), the x-angle is reported as
    /// zero and z carries the whole remaining rotation.
    pub fn euler_angles_xyz(&self) -> Vector3<F> {
        super::euler_angles_xyz_from_columns(&self.columns)
    }

    /// Returns the unit direction that this matrix maps onto `+x`.
    pub fn positive_x(&self) -> Vector3<F> {
        self.invert().columns[0].normalized()
    }

    /// Returns the unit direction that this matrix maps onto `+y`.
    pub fn positive_y(&self) -> Vector3<F> {
        self.invert().columns[1].normalized()
    }

    /// Returns the unit direction that this matrix maps onto `+z`.
    pub fn positive_z(&self) -> Vector3<F> {
        self.invert().columns[2].normalized()
    }

    /// Like [`positive_x`](Self::positive_x), but assumes the matrix is
    /// orthonormal so that the inverse is the transpose.
    #[inline]
    pub fn normalized_positive_x(&self) -> Vector3<F> {
        self.row(0)
    }

    #[inline]
    pub fn normalized_positive_y(&self) -> Vector3<F> {
        self.row(1)
    }

    #[inline]
    pub fn normalized_positive_z(&self) -> Vector3<F> {
        self.row(2)
    }

    /// Computes `self * vector`.
    #[inline]
    pub fn transform(&self, vector: &Vector3<F>) -> Vector3<F> {
        let [c0, c1, c2] = &self.columns;
        c0 * vector.x() + c1 * vector.y() + c2 * vector.z()
    }

    /// Computes `transpose(self) * vector`.
    #[inline]
    pub fn transform_transpose(&self, vector: &Vector3<F>) -> Vector3<F> {
        let [c0, c1, c2] = &self.columns;
        Vector3::new(c0.dot(vector), c1.dot(vector), c2.dot(vector))
    }

    fn zip_columns(&self, other: &Self, f: impl Fn(&Vector3<F>, &Vector3<F>) -> Vector3<F>) -> Self {
        let [a0, a1, a2] = &self.columns;
        let [b0, b1, b2] = &other.columns;
        Self::from_columns(f(a0, b0), f(a1, b1), f(a2, b2))
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> Matrix3<G> {
        Matrix3 {
            columns: self.columns.map(|column| column.map_elements(&f)),
        }
    }
}

impl<F: Float> Default for Matrix3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<Matrix4x3<F>> for Matrix3<F> {
    /// Takes the linear part.
    fn from(matrix: Matrix4x3<F>) -> Self {
        matrix.linear_part()
    }
}

impl<F: Float> From<Matrix4<F>> for Matrix3<F> {
    /// Takes the upper-left 3x3 block.
    fn from(matrix: Matrix4<F>) -> Self {
        matrix.linear_part()
    }
}

impl_element_accessors!(Matrix3<F>, [
    m00, set_m00 => 0, 0;
    m01, set_m01 => 0, 1;
    m02, set_m02 => 0, 2;
    m10, set_m10 => 1, 0;
    m11, set_m11 => 1, 1;
    m12, set_m12 => 1, 2;
    m20, set_m20 => 2, 0;
    m21, set_m21 => 2, 1;
    m22, set_m22 => 2, 2;
]);

impl_matrix_indexing!(
    Matrix3<F>,
    column: Vector3,
    row: Vector3,
    n_columns: 3,
    n_rows: 3,
    column_indices: [0, 1, 2]
);

impl_in_place_ops!(Matrix3<F>;
    invert_mut => invert();
    transpose_mut => transpose();
    normal_mut => normal();
    cofactor_mut => cofactor();
    mul_mut => mul(right: &Self);
    mul_local_mut => mul_local(left: &Self);
    add_mut => add(other: &Self);
    sub_mut => sub(other: &Self);
    mul_component_wise_mut => mul_component_wise(other: &Self);
    scale_all_mut => scale_all(factor: F);
    lerp_mut => lerp(other: &Self, t: F);
    scale_mut => scale(x: F, y: F, z: F);
    scale_uniform_mut => scale_uniform(scale: F);
    scale_local_mut => scale_local(x: F, y: F, z: F);
    rotate_x_mut => rotate_x(angle: F);
    rotate_y_mut => rotate_y(angle: F);
    rotate_z_mut => rotate_z(angle: F);
    rotate_local_x_mut => rotate_local_x(angle: F);
    rotate_local_y_mut => rotate_local_y(angle: F);
    rotate_local_z_mut => rotate_local_z(angle: F);
    rotate_xyz_mut => rotate_xyz(angle_x: F, angle_y: F, angle_z: F);
    rotate_zyx_mut => rotate_zyx(angle_z: F, angle_y: F, angle_x: F);
    rotate_yxz_mut => rotate_yxz(angle_y: F, angle_x: F, angle_z: F);
    rotate_axis_mut => rotate_axis(angle: F, axis: &Vector3<F>);
    rotate_axis_angle_mut => rotate_axis_angle(axis_angle: &AxisAngle<F>);
    rotate_quaternion_mut => rotate_quaternion(quaternion: &Quaternion<F>);
    rotate_local_axis_mut => rotate_local_axis(angle: F, axis: &Vector3<F>);
    rotate_local_quaternion_mut => rotate_local_quaternion(quaternion: &Quaternion<F>);
    rotate_towards_mut => rotate_towards(dir: &Vector3<F>, up: &Vector3<F>);
    look_along_mut => look_along(dir: &Vector3<F>, up: &Vector3<F>);
    reflect_mut => reflect(normal: &Vector3<F>);
);

impl_binop!(Mul, mul, Matrix3<F>, Matrix3<F>, Matrix3<F>, |a, b| {
    Matrix3::mul(a, b)
});

impl_binop!(Mul, mul, Matrix3<F>, Vector3<F>, Vector3<F>, |a, b| {
    a.transform(b)
});

impl_binop!(Add, add, Matrix3<F>, Matrix3<F>, Matrix3<F>, |a, b| {
    Matrix3::add(a, b)
});

impl_binop!(Sub, sub, Matrix3<F>, Matrix3<F>, Matrix3<F>, |a, b| {
    Matrix3::sub(a, b)
});

impl_scalar_binop!(Mul, mul, Matrix3<F>, |a, b| { a.scale_all(b) });

impl_binop_assign!(MulAssign, mul_assign, Matrix3<F>, Matrix3<F>, |a, b| {
    a.mul_mut(b);
});

impl_unary_op!(Neg, neg, Matrix3<F>, Matrix3<F>, |val| { val.scale_all(F::NEG_ONE) });

impl_pod!(Matrix3);
impl_approx_via_array!(Matrix3<F>, to_cols_array);
impl_precision_conversions!(Matrix3);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    fn general_matrix() -> Matrix3<f64> {
        Matrix3::new(2.0, 0.5, -1.0, 0.3, 1.5, 0.2, -0.4, 0.7, 3.0)
    }

    #[test]
    fn creating_matrix3_identity_gives_identity_matrix() {
        let m = Matrix3::<f32>::identity();
        assert_eq!(m.to_cols_array(), [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn elements_are_named_by_column_then_row() {
        let m = Matrix3::from_cols_array(&[1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.m01(), 2.0);
        assert_eq!(m.m10(), 4.0);
        assert_eq!(m.element(2, 1), 8.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m.column(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.row(1), Vector3::new(2.0, 5.0, 8.0));
    }

    #[test]
    fn checked_access_outside_matrix_gives_none() {
        let m = Matrix3::<f64>::identity();
        assert_eq!(m.try_element(3, 0), None);
        assert_eq!(m.try_column(3), None);
        assert_eq!(m.try_row(5), None);
        assert_eq!(m.try_element(2, 2), Some(1.0));
    }

    #[test]
    #[should_panic]
    fn accessing_column_outside_matrix_panics() {
        Matrix3::<f32>::identity().column(3);
    }

    #[test]
    #[should_panic]
    fn indexing_row_outside_matrix_panics() {
        let _ = Matrix3::<f32>::identity()[(0, 3)];
    }

    #[test]
    fn setting_rows_and_columns_works() {
        let mut m = Matrix3::<f64>::zeros();
        m.set_row(0, &Vector3::new(1.0, 2.0, 3.0))
            .set_column(2, &Vector3::new(7.0, 8.0, 9.0))
            .set_m11(5.0);
        assert_eq!(m.to_cols_array(), [1.0, 0.0, 0.0, 2.0, 5.0, 0.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn rotating_x_axis_by_quarter_turn_about_z_gives_y_axis() {
        let rotated = Matrix3::rotation_z(std::f32::consts::FRAC_PI_2).transform(&Vector3::unit_x());
        assert_abs_diff_eq!(rotated, Vector3::unit_y(), epsilon = 1e-6);
    }

    #[test]
    fn rotation_about_unit_axes_matches_axis_specific_rotation() {
        let angle = 0.83;
        assert_abs_diff_eq!(
            Matrix3::rotation_axis(angle, &Vector3::unit_x()),
            Matrix3::rotation_x(angle),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix3::rotation_axis(angle, &Vector3::unit_y()),
            Matrix3::rotation_y(angle),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix3::rotation_axis(angle, &Vector3::unit_z()),
            Matrix3::rotation_z(angle),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotation_matrix_from_quaternion_rotates_like_quaternion() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, -1.0, 2.0).normalized(), 1.1);
        let m = Matrix3::rotation_quaternion(&q);
        let v = Vector3::new(0.3, -2.0, 0.9);
        assert_abs_diff_eq!(m.transform(&v), q.rotate_vector(&v), epsilon = EPSILON);
    }

    #[test]
    fn local_rotation_left_multiplies() {
        let m = general_matrix();
        assert_abs_diff_eq!(
            m.rotate_local_x(0.4),
            Matrix3::rotation_x(0.4).mul(&m),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            m.rotate_local_y(-1.2),
            Matrix3::rotation_y(-1.2).mul(&m),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            m.rotate_local_z(2.5),
            Matrix3::rotation_z(2.5).mul(&m),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = general_matrix();
        assert_abs_diff_eq!(m.mul(&m.invert()), Matrix3::identity(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.invert().mul(&m), Matrix3::identity(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_singular_matrix_gives_non_finite_elements() {
        let m = Matrix3::<f32>::scaling(1.0, 0.0, 1.0);
        assert!(m.invert().to_cols_array().iter().any(|e| !e.is_finite()));
    }

    #[test]
    fn normal_matrix_is_transpose_of_inverse() {
        let m = general_matrix();
        assert_abs_diff_eq!(m.normal(), m.invert().transpose(), epsilon = EPSILON);
    }

    #[test]
    fn in_place_operations_match_value_returning_ones_exactly() {
        let m = general_matrix();
        let mut in_place = m;
        in_place.rotate_xyz_mut(0.1, 0.2, 0.3).scale_mut(2.0, 3.0, 4.0).invert_mut();
        assert_eq!(in_place, m.rotate_xyz(0.1, 0.2, 0.3).scale(2.0, 3.0, 4.0).invert());
    }

    #[test]
    fn euler_angles_zyx_reconstruct_rotation() {
        let m = Matrix3::rotation_zyx(0.4, -0.9, 1.3);
        assert_abs_diff_eq!(m.euler_angles_zyx(), Vector3::new(1.3, -0.9, 0.4), epsilon = 1e-10);
    }

    #[test]
    fn euler_angles_zyx_in_gimbal_lock_have_zero_x_angle() {
        let m = Matrix3::rotation_zyx(0.3, FRAC_PI_2, 0.2);
        let angles = m.euler_angles_zyx();
        assert_abs_diff_eq!(angles, Vector3::new(0.0, FRAC_PI_2, 0.1), epsilon = 1e-7);
        let m = Matrix3::rotation_zyx(0.3, -FRAC_PI_2, 0.2);
        assert_abs_diff_eq!(
            m.euler_angles_zyx(),
            Vector3::new(0.0, -FRAC_PI_2, 0.5),
            epsilon = 1e-7
        );
    }

    #[test]
    fn euler_angles_xyz_reconstruct_rotation() {
        let m = Matrix3::rotation_xyz(-0.5, 0.7, 2.0);
        assert_abs_diff_eq!(m.euler_angles_xyz(), Vector3::new(-0.5, 0.7, 2.0), epsilon = 1e-10);
        let locked = Matrix3::rotation_xyz(0.0, FRAC_PI_2, 0.6).euler_angles_xyz();
        assert_abs_diff_eq!(locked, Vector3::new(0.0, FRAC_PI_2, 0.6), epsilon = 1e-7);
    }

    #[test]
    fn quaternion_extraction_round_trips() {
        let q = Quaternion::from_axis_angle(&Vector3::new(-2.0, 1.0, 0.5).normalized(), PI * 0.9);
        let m = Matrix3::rotation_quaternion(&q);
        assert!(m.normalized_rotation().same_rotation_as(&q, 1e-10));
        assert!(m.scale(2.0, 0.5, 3.0).unnormalized_rotation().same_rotation_as(&q, 1e-10));
    }

    #[test]
    fn scale_factors_are_absolute_scalings() {
        let m = Matrix3::rotation_y(0.7).scale(-2.0, 3.0, 0.5);
        assert_abs_diff_eq!(m.scale_factors(), Vector3::new(2.0, 3.0, 0.5), epsilon = EPSILON);
    }

    #[test]
    fn rotation_towards_maps_z_onto_direction() {
        let dir = Vector3::new(1.0, 2.0, -0.5);
        let m = Matrix3::rotation_towards(&dir, &Vector3::unit_y());
        assert_abs_diff_eq!(m.transform(&Vector3::unit_z()), dir.normalized(), epsilon = EPSILON);
    }

    #[test]
    fn look_along_maps_direction_onto_negative_z() {
        let dir = Vector3::new(-1.0, 0.5, 3.0);
        let m = Matrix3::from_look_along(&dir, &Vector3::unit_y());
        assert_abs_diff_eq!(m.transform(&dir.normalized()), -Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn positive_axes_are_preimages_of_axes() {
        let m = Matrix3::rotation_xyz(0.3, -0.2, 1.1);
        assert_abs_diff_eq!(m.transform(&m.positive_x()), Vector3::unit_x(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.positive_y(), m.normalized_positive_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.positive_z(), m.normalized_positive_z(), epsilon = EPSILON);
    }

    #[test]
    fn reflection_flips_normal_and_keeps_plane() {
        let normal = Vector3::new(1.0, 1.0, 0.0).normalized();
        let m = Matrix3::reflection(&normal);
        assert_abs_diff_eq!(m.transform(&normal), -normal, epsilon = EPSILON);
        assert_abs_diff_eq!(m.transform(&Vector3::unit_z()), Vector3::unit_z(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.determinant(), -1.0, epsilon = EPSILON);
    }

    #[test]
    fn skew_symmetric_matrix_is_antisymmetric() {
        let m = Matrix3::skew_symmetric(1.0_f64, 2.0, 3.0);
        assert_eq!(m.transpose(), -m);
    }

    #[test]
    fn transform_transpose_matches_transposed_transform() {
        let m = general_matrix();
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_abs_diff_eq!(m.transform_transpose(&v), m.transpose() * v, epsilon = EPSILON);
    }
}
