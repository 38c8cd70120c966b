//! 3D affine matrices.

use super::{FrustumPlane, Matrix3, Matrix4, MatrixProperties};
use crate::{
    axis_angle::AxisAngle,
    bounds::AxisAlignedBox,
    num::Float,
    plane::Plane,
    quaternion::Quaternion,
    vector::{Vector3, Vector4},
};

/// A 4x3 matrix representing a 3D affine transform. It behaves as a 4x4
/// matrix whose bottom row is implicitly `(0, 0, 0, 1)`.
///
/// The matrix caches [`MatrixProperties`] describing its known structure,
/// which operations use to pick cheaper code paths.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Matrix4x3<F> {
    columns: [Vector3<F>; 4],
    #[cfg_attr(feature = "serde", serde(skip))]
    properties: MatrixProperties,
}

pub type Matrix4x3f = Matrix4x3<f32>;
pub type Matrix4x3d = Matrix4x3<f64>;

impl<F: Float> Matrix4x3<F> {
    /// Creates a matrix from its elements in column-major order. The
    /// properties are determined from the elements.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m00: F,
        m01: F,
        m02: F,
        m10: F,
        m11: F,
        m12: F,
        m20: F,
        m21: F,
        m22: F,
        m30: F,
        m31: F,
        m32: F,
    ) -> Self {
        Self::from_columns(
            Vector3::new(m00, m01, m02),
            Vector3::new(m10, m11, m12),
            Vector3::new(m20, m21, m22),
            Vector3::new(m30, m31, m32),
        )
    }

    #[inline]
    pub fn identity() -> Self {
        Self::with_properties(
            [
                Vector3::unit_x(),
                Vector3::unit_y(),
                Vector3::unit_z(),
                Vector3::zeros(),
            ],
            MatrixProperties::OF_IDENTITY,
        )
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::with_properties([Vector3::zeros(); 4], MatrixProperties::AFFINE)
    }

    pub fn from_columns(
        column_1: Vector3<F>,
        column_2: Vector3<F>,
        column_3: Vector3<F>,
        translation: Vector3<F>,
    ) -> Self {
        let columns = [column_1, column_2, column_3, translation];
        Self::with_properties(columns, determine_properties(&columns))
    }

    #[inline]
    pub fn from_cols_array(elements: &[F; 12]) -> Self {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22, m30, m31, m32] = *elements;
        Self::new(m00, m01, m02, m10, m11, m12, m20, m21, m22, m30, m31, m32)
    }

    #[inline]
    pub fn to_cols_array(&self) -> [F; 12] {
        let [c0, c1, c2, c3] = &self.columns;
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
            c3.x(),
            c3.y(),
            c3.z(),
        ]
    }

    /// Returns the elements of the equivalent 4x4 matrix in column-major
    /// order.
    pub fn to_cols_array_4x4(&self) -> [F; 16] {
        let [c0, c1, c2, c3] = &self.columns;
        [
            c0.x(),
            c0.y(),
            c0.z(),
            F::ZERO,
            c1.x(),
            c1.y(),
            c1.z(),
            F::ZERO,
            c2.x(),
            c2.y(),
            c2.z(),
            F::ZERO,
            c3.x(),
            c3.y(),
            c3.z(),
            F::ONE,
        ]
    }

    /// Creates the matrix applying the given linear transform with no
    /// translation.
    pub fn from_matrix3(linear: &Matrix3<F>) -> Self {
        Self::from_matrix3_translation(linear, &Vector3::zeros())
    }

    pub fn from_matrix3_translation(linear: &Matrix3<F>, translation: &Vector3<F>) -> Self {
        let [c0, c1, c2] = *linear.columns();
        Self::from_columns(c0, c1, c2, *translation)
    }

    #[inline]
    pub fn translation(x: F, y: F, z: F) -> Self {
        Self::with_properties(
            [
                Vector3::unit_x(),
                Vector3::unit_y(),
                Vector3::unit_z(),
                Vector3::new(x, y, z),
            ],
            MatrixProperties::OF_TRANSLATION,
        )
    }

    #[inline]
    pub fn scaling(x: F, y: F, z: F) -> Self {
        Self::from_linear(&Matrix3::scaling(x, y, z), MatrixProperties::AFFINE)
    }

    #[inline]
    pub fn scaling_uniform(scale: F) -> Self {
        Self::scaling(scale, scale, scale)
    }

    pub fn rotation_x(angle: F) -> Self {
        Self::from_rotation(&Matrix3::rotation_x(angle))
    }

    pub fn rotation_y(angle: F) -> Self {
        Self::from_rotation(&Matrix3::rotation_y(angle))
    }

    pub fn rotation_z(angle: F) -> Self {
        Self::from_rotation(&Matrix3::rotation_z(angle))
    }

    /// See [`Matrix3::rotation_xyz`].
    pub fn rotation_xyz(angle_x: F, angle_y: F, angle_z: F) -> Self {
        Self::from_rotation(&Matrix3::rotation_xyz(angle_x, angle_y, angle_z))
    }

    /// See [`Matrix3::rotation_zyx`].
    pub fn rotation_zyx(angle_z: F, angle_y: F, angle_x: F) -> Self {
        Self::from_rotation(&Matrix3::rotation_zyx(angle_z, angle_y, angle_x))
    }

    /// See [`Matrix3::rotation_yxz`].
    pub fn rotation_yxz(angle_y: F, angle_x: F, angle_z: F) -> Self {
        Self::from_rotation(&Matrix3::rotation_yxz(angle_y, angle_x, angle_z))
    }

    pub fn rotation_axis(angle: F, axis: &Vector3<F>) -> Self {
        Self::from_rotation(&Matrix3::rotation_axis(angle, axis))
    }

    pub fn rotation_axis_angle(axis_angle: &AxisAngle<F>) -> Self {
        Self::from_rotation(&Matrix3::rotation_axis_angle(axis_angle))
    }

    pub fn rotation_quaternion(quaternion: &Quaternion<F>) -> Self {
        Self::from_rotation(&Matrix3::rotation_quaternion(quaternion))
    }

    /// Creates the transform that rotates by the given quaternion and then
    /// translates.
    pub fn translation_rotate(translation: &Vector3<F>, rotation: &Quaternion<F>) -> Self {
        Self::from_linear_and_translation(
            &Matrix3::rotation_quaternion(rotation),
            *translation,
            MatrixProperties::OF_RIGID,
        )
    }

    /// Creates the transform that scales, then rotates and then translates.
    pub fn translation_rotate_scale(
        translation: &Vector3<F>,
        rotation: &Quaternion<F>,
        scale: &Vector3<F>,
    ) -> Self {
        Self::from_linear_and_translation(
            &Matrix3::rotation_quaternion(rotation).scale(scale.x(), scale.y(), scale.z()),
            *translation,
            MatrixProperties::AFFINE,
        )
    }

    /// See [`Matrix3::rotation_towards`].
    pub fn rotation_towards(dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        Self::from_rotation(&Matrix3::rotation_towards(dir, up))
    }

    /// Creates a right-handed view transform for a camera at `eye` looking
    /// at `center`. The camera looks along `-z` in view space.
    pub fn view_look_at(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>) -> Self {
        Self::view_from_basis(eye, &(eye - center), up)
    }

    /// Creates a left-handed view transform for a camera at `eye` looking
    /// at `center`. The camera looks along `+z` in view space.
    pub fn view_look_at_lh(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>) -> Self {
        Self::view_from_basis(eye, &(center - eye), up)
    }

    /// Creates a right-handed rotation making `dir` point along `-z`.
    pub fn view_look_along(dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        Self::view_from_basis(&Vector3::zeros(), &-dir, up)
    }

    /// Creates a left-handed rotation making `dir` point along `+z`.
    pub fn view_look_along_lh(dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        Self::view_from_basis(&Vector3::zeros(), dir, up)
    }

    /// Creates a right-handed orthographic projection mapping the given box
    /// onto the clip-space cube. The depth range is `[0, 1]` if
    /// `z_zero_to_one` is set and `[-1, 1]` otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn orthographic(
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let depth_scale = if z_zero_to_one { F::ONE } else { F::TWO };
        let depth_offset = if z_zero_to_one { near } else { far + near };
        Self::orthographic_from_parts(
            Vector3::new(
                F::TWO / (right - left),
                F::TWO / (top - bottom),
                depth_scale / (near - far),
            ),
            Vector3::new(
                (right + left) / (left - right),
                (top + bottom) / (bottom - top),
                depth_offset / (near - far),
            ),
        )
    }

    /// Left-handed version of [`orthographic`](Self::orthographic).
    #[allow(clippy::too_many_arguments)]
    pub fn orthographic_lh(
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let depth_scale = if z_zero_to_one { F::ONE } else { F::TWO };
        let depth_offset = if z_zero_to_one { near } else { far + near };
        Self::orthographic_from_parts(
            Vector3::new(
                F::TWO / (right - left),
                F::TWO / (top - bottom),
                depth_scale / (far - near),
            ),
            Vector3::new(
                (right + left) / (left - right),
                (top + bottom) / (bottom - top),
                depth_offset / (near - far),
            ),
        )
    }

    /// Orthographic projection of a box of the given width and height
    /// centered on the view axis.
    pub fn orthographic_symmetric(width: F, height: F, near: F, far: F, z_zero_to_one: bool) -> Self {
        let half_width = width * F::ONE_HALF;
        let half_height = height * F::ONE_HALF;
        Self::orthographic(
            -half_width,
            half_width,
            -half_height,
            half_height,
            near,
            far,
            z_zero_to_one,
        )
    }

    pub fn orthographic_symmetric_lh(
        width: F,
        height: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let half_width = width * F::ONE_HALF;
        let half_height = height * F::ONE_HALF;
        Self::orthographic_lh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            near,
            far,
            z_zero_to_one,
        )
    }

    /// Orthographic projection for 2D rendering, equal to
    /// [`orthographic`](Self::orthographic) with a near plane at -1 and a
    /// far plane at 1.
    pub fn orthographic_2d(left: F, right: F, bottom: F, top: F) -> Self {
        Self::orthographic_2d_with_depth_scale(left, right, bottom, top, F::NEG_ONE)
    }

    pub fn orthographic_2d_lh(left: F, right: F, bottom: F, top: F) -> Self {
        Self::orthographic_2d_with_depth_scale(left, right, bottom, top, F::ONE)
    }

    /// Creates the reflection about the plane `a*x + b*y + c*z + d = 0`,
    /// whose normal `(a, b, c)` must have unit length.
    pub fn reflection(a: F, b: F, c: F, d: F) -> Self {
        let normal = Vector3::new(a, b, c);
        Self::from_linear_and_translation(
            &Matrix3::reflection(&normal),
            normal * (-F::TWO * d),
            MatrixProperties::OF_RIGID,
        )
    }

    /// Creates the reflection about the plane with the given normal
    /// (normalized internally) through the given point.
    pub fn reflection_about(normal: &Vector3<F>, point: &Vector3<F>) -> Self {
        let normal = normal.normalized();
        Self::reflection(normal.x(), normal.y(), normal.z(), -normal.dot(point))
    }

    /// Creates the reflection about the plane through `point` whose normal
    /// is the z-axis rotated by `orientation`.
    pub fn reflection_quaternion(orientation: &Quaternion<F>, point: &Vector3<F>) -> Self {
        Self::reflection_about(&orientation.rotate_vector(&Vector3::unit_z()), point)
    }

    /// Creates a transform placing an object at `object_position` and
    /// rotating it about `up` only, so that its `+z` axis faces
    /// `target_position` as closely as possible. `up` must have unit length.
    pub fn billboard_cylindrical(
        object_position: &Vector3<F>,
        target_position: &Vector3<F>,
        up: &Vector3<F>,
    ) -> Self {
        let dir = target_position - object_position;
        let left = up.cross(&dir).normalized();
        let dir = left.cross(up).normalized();
        Self::with_properties(
            [left, *up, dir, *object_position],
            MatrixProperties::OF_RIGID,
        )
    }

    /// Creates a transform placing an object at `object_position` with its
    /// `+z` axis pointing at `target_position`.
    pub fn billboard_spherical(
        object_position: &Vector3<F>,
        target_position: &Vector3<F>,
        up: &Vector3<F>,
    ) -> Self {
        let [left, up, dir] = super::orthonormal_basis(&(target_position - object_position), up);
        Self::with_properties(
            [left, up, dir, *object_position],
            MatrixProperties::OF_RIGID,
        )
    }

    /// Returns the cached structural properties.
    #[inline]
    pub fn properties(&self) -> MatrixProperties {
        self.properties
    }

    /// Forgets all cached properties, so that every operation takes its
    /// general code path.
    #[inline]
    pub fn assume_nothing(&mut self) -> &mut Self {
        self.properties = MatrixProperties::empty();
        self
    }

    #[inline]
    pub fn translation_part(&self) -> Vector3<F> {
        self.columns[3]
    }

    pub fn set_translation(&mut self, translation: &Vector3<F>) -> &mut Self {
        self.columns[3] = *translation;
        self.properties = self
            .properties
            .difference(MatrixProperties::IDENTITY)
            .union(MatrixProperties::AFFINE);
        self
    }

    /// Returns a copy of this matrix with the given translation.
    pub fn with_translation(&self, translation: &Vector3<F>) -> Self {
        let mut result = *self;
        result.set_translation(translation);
        result
    }

    /// Returns the upper-left 3x3 block.
    #[inline]
    pub fn linear_part(&self) -> Matrix3<F> {
        let [c0, c1, c2, _] = self.columns;
        Matrix3::from_columns(c0, c1, c2)
    }

    pub fn set_linear_part(&mut self, linear: &Matrix3<F>) -> &mut Self {
        let [c0, c1, c2] = *linear.columns();
        self.columns[0] = c0;
        self.columns[1] = c1;
        self.columns[2] = c2;
        self.properties = MatrixProperties::AFFINE;
        self
    }

    #[inline]
    pub fn determinant(&self) -> F {
        self.linear_part().determinant()
    }

    /// Computes the inverse. Rigid transforms are inverted by transposition
    /// when the properties say so. A singular matrix gives non-finite
    /// elements.
    pub fn invert(&self) -> Self {
        if self.properties.contains(MatrixProperties::IDENTITY) {
            *self
        } else if self.properties.contains(MatrixProperties::TRANSLATION) {
            let t = -self.columns[3];
            Self::with_properties(
                [self.columns[0], self.columns[1], self.columns[2], t],
                self.properties,
            )
        } else if self.properties.contains(MatrixProperties::ORTHONORMAL) {
            self.invert_unit_scale()
        } else {
            let inverse = self.linear_part().invert();
            let translation = -inverse.transform(&self.columns[3]);
            Self::from_linear_and_translation(&inverse, translation, self.properties)
        }
    }

    /// Inverts a matrix created by one of the `orthographic` factories,
    /// whose linear part is diagonal. Gives wrong results for any other
    /// matrix.
    pub fn invert_ortho(&self) -> Self {
        let inv_diagonal = Vector3::new(
            self.m00().recip(),
            self.m11().recip(),
            self.m22().recip(),
        );
        Self::from_linear_and_translation(
            &Matrix3::from_diagonal(&inv_diagonal),
            -self.columns[3].component_mul(&inv_diagonal),
            MatrixProperties::AFFINE,
        )
    }

    /// Inverts a matrix whose linear part is orthonormal (a rotation,
    /// possibly with reflection) by transposing it. Gives wrong results for
    /// any other matrix.
    pub fn invert_unit_scale(&self) -> Self {
        let inverse = self.linear_part().transpose();
        let translation = -inverse.transform(&self.columns[3]);
        Self::from_linear_and_translation(&inverse, translation, self.properties)
    }

    /// Transposes the linear part and clears the translation.
    pub fn transpose_3x3(&self) -> Self {
        Self::from_linear(
            &self.linear_part().transpose(),
            self.properties.intersection(MatrixProperties::OF_RIGID),
        )
    }

    /// Computes `self * right`.
    pub fn mul(&self, right: &Self) -> Self {
        if self.properties.contains(MatrixProperties::IDENTITY) {
            *right
        } else if right.properties.contains(MatrixProperties::IDENTITY) {
            *self
        } else if self.properties.contains(MatrixProperties::TRANSLATION) {
            self.mul_translation(right)
        } else {
            let [r0, r1, r2, r3] = &right.columns;
            Self::with_properties(
                [
                    self.transform_direction(r0),
                    self.transform_direction(r1),
                    self.transform_direction(r2),
                    self.transform_position(r3),
                ],
                MatrixProperties::of_product(self.properties, right.properties),
            )
        }
    }

    /// Computes `left * self`.
    #[inline]
    pub fn mul_local(&self, left: &Self) -> Self {
        left.mul(self)
    }

    /// Computes `self * right` assuming `self` only translates. Gives wrong
    /// results for any other receiver.
    pub fn mul_translation(&self, right: &Self) -> Self {
        let [r0, r1, r2, r3] = &right.columns;
        Self::with_properties(
            [*r0, *r1, *r2, r3 + self.columns[3]],
            MatrixProperties::of_product(self.properties, right.properties),
        )
    }

    /// Computes `self * right` assuming `self` was created by one of the
    /// `orthographic` factories. Gives wrong results for any other receiver.
    pub fn mul_ortho(&self, right: &Self) -> Self {
        let diagonal = Vector3::new(self.m00(), self.m11(), self.m22());
        let [r0, r1, r2, r3] = &right.columns;
        Self::with_properties(
            [
                r0.component_mul(&diagonal),
                r1.component_mul(&diagonal),
                r2.component_mul(&diagonal),
                r3.component_mul(&diagonal) + self.columns[3],
            ],
            MatrixProperties::AFFINE,
        )
    }

    /// Computes `self * right` where `right` is a linear transform.
    pub fn mul_matrix3(&self, right: &Matrix3<F>) -> Self {
        let [r0, r1, r2] = right.columns();
        Self::with_properties(
            [
                self.transform_direction(r0),
                self.transform_direction(r1),
                self.transform_direction(r2),
                self.columns[3],
            ],
            self.properties.after_affine(),
        )
    }

    pub fn mul_component_wise(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a.component_mul(b), MatrixProperties::AFFINE)
    }

    pub fn add(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a + b, MatrixProperties::AFFINE)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a - b, MatrixProperties::AFFINE)
    }

    /// Linearly interpolates every element towards `other`.
    pub fn lerp(&self, other: &Self, t: F) -> Self {
        let properties = self
            .properties
            .intersection(other.properties)
            .difference(MatrixProperties::ORTHONORMAL);
        self.zip_columns(other, |a, b| a.lerp(b, t), properties)
    }

    /// Computes the matrix for transforming normal vectors, which is the
    /// transpose of the inverse of the linear part.
    pub fn normal(&self) -> Matrix3<F> {
        if self.properties.contains(MatrixProperties::ORTHONORMAL) {
            self.linear_part()
        } else {
            self.linear_part().normal()
        }
    }

    /// Normalizes each column of the linear part, which removes scaling from
    /// a matrix whose columns are orthogonal.
    pub fn normalize_3x3(&self) -> Self {
        let [c0, c1, c2, c3] = &self.columns;
        Self::with_properties(
            [c0.normalized(), c1.normalized(), c2.normalized(), *c3],
            self.properties,
        )
    }

    /// Computes `self * T` where `T` translates by `(x, y, z)`.
    pub fn translate(&self, x: F, y: F, z: F) -> Self {
        let translation = self.transform_position(&Vector3::new(x, y, z));
        self.with_translation_and_properties(translation, self.properties.after_translation())
    }

    /// Computes `T * self` where `T` translates by `(x, y, z)`.
    pub fn translate_local(&self, x: F, y: F, z: F) -> Self {
        let translation = self.columns[3] + Vector3::new(x, y, z);
        self.with_translation_and_properties(translation, self.properties.after_translation())
    }

    pub fn scale(&self, x: F, y: F, z: F) -> Self {
        let [c0, c1, c2, c3] = &self.columns;
        Self::with_properties(
            [c0 * x, c1 * y, c2 * z, *c3],
            self.properties.after_affine(),
        )
    }

    #[inline]
    pub fn scale_uniform(&self, scale: F) -> Self {
        self.scale(scale, scale, scale)
    }

    /// Computes `S * self`, which also scales the translation.
    pub fn scale_local(&self, x: F, y: F, z: F) -> Self {
        let factors = Vector3::new(x, y, z);
        Self::with_properties(
            self.columns.map(|column| column.component_mul(&factors)),
            self.properties.after_affine(),
        )
    }

    /// Scales about the given origin before the existing transform.
    pub fn scale_around(&self, x: F, y: F, z: F, origin: &Vector3<F>) -> Self {
        self.translate(origin.x(), origin.y(), origin.z())
            .scale(x, y, z)
            .translate(-origin.x(), -origin.y(), -origin.z())
    }

    pub fn rotate_x(&self, angle: F) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_x(angle))
    }

    pub fn rotate_y(&self, angle: F) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_y(angle))
    }

    pub fn rotate_z(&self, angle: F) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_z(angle))
    }

    /// Computes `Rx(angle) * self`, which also rotates the translation.
    pub fn rotate_local_x(&self, angle: F) -> Self {
        self.rotated_locally(&Matrix3::rotation_x(angle))
    }

    pub fn rotate_local_y(&self, angle: F) -> Self {
        self.rotated_locally(&Matrix3::rotation_y(angle))
    }

    pub fn rotate_local_z(&self, angle: F) -> Self {
        self.rotated_locally(&Matrix3::rotation_z(angle))
    }

    pub fn rotate_xyz(&self, angle_x: F, angle_y: F, angle_z: F) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_xyz(angle_x, angle_y, angle_z))
    }

    pub fn rotate_zyx(&self, angle_z: F, angle_y: F, angle_x: F) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_zyx(angle_z, angle_y, angle_x))
    }

    pub fn rotate_yxz(&self, angle_y: F, angle_x: F, angle_z: F) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_yxz(angle_y, angle_x, angle_z))
    }

    pub fn rotate_axis(&self, angle: F, axis: &Vector3<F>) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_axis(angle, axis))
    }

    pub fn rotate_axis_angle(&self, axis_angle: &AxisAngle<F>) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_axis_angle(axis_angle))
    }

    pub fn rotate_quaternion(&self, quaternion: &Quaternion<F>) -> Self {
        self.with_rotated_linear_part(&self.linear_part().rotate_quaternion(quaternion))
    }

    pub fn rotate_local_axis(&self, angle: F, axis: &Vector3<F>) -> Self {
        self.rotated_locally(&Matrix3::rotation_axis(angle, axis))
    }

    pub fn rotate_local_quaternion(&self, quaternion: &Quaternion<F>) -> Self {
        self.rotated_locally(&Matrix3::rotation_quaternion(quaternion))
    }

    /// Replaces the linear part by the rotation from the given quaternion,
    /// computing `self * R` under the assumption that `self` only
    /// translates. Gives wrong results for any other receiver.
    pub fn rotate_translation(&self, quaternion: &Quaternion<F>) -> Self {
        Self::from_linear_and_translation(
            &Matrix3::rotation_quaternion(quaternion),
            self.columns[3],
            self.properties.after_rigid(),
        )
    }

    /// Rotates about the given origin before the existing transform.
    pub fn rotate_around(&self, quaternion: &Quaternion<F>, origin: &Vector3<F>) -> Self {
        self.translate(origin.x(), origin.y(), origin.z())
            .rotate_quaternion(quaternion)
            .translate(-origin.x(), -origin.y(), -origin.z())
    }

    pub fn rotate_towards(&self, dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::rotation_towards(dir, up))
    }

    pub fn look_at(&self, eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::view_look_at(eye, center, up))
    }

    pub fn look_at_lh(&self, eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::view_look_at_lh(eye, center, up))
    }

    pub fn look_along(&self, dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::view_look_along(dir, up))
    }

    pub fn look_along_lh(&self, dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        self.mul(&Self::view_look_along_lh(dir, up))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn ortho(
        &self,
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::orthographic(
            left,
            right,
            bottom,
            top,
            near,
            far,
            z_zero_to_one,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn ortho_lh(
        &self,
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::orthographic_lh(
            left,
            right,
            bottom,
            top,
            near,
            far,
            z_zero_to_one,
        ))
    }

    pub fn ortho_symmetric(&self, width: F, height: F, near: F, far: F, z_zero_to_one: bool) -> Self {
        self.mul(&Self::orthographic_symmetric(
            width,
            height,
            near,
            far,
            z_zero_to_one,
        ))
    }

    pub fn ortho_symmetric_lh(
        &self,
        width: F,
        height: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::orthographic_symmetric_lh(
            width,
            height,
            near,
            far,
            z_zero_to_one,
        ))
    }

    pub fn ortho_2d(&self, left: F, right: F, bottom: F, top: F) -> Self {
        self.mul(&Self::orthographic_2d(left, right, bottom, top))
    }

    pub fn ortho_2d_lh(&self, left: F, right: F, bottom: F, top: F) -> Self {
        self.mul(&Self::orthographic_2d_lh(left, right, bottom, top))
    }

    pub fn reflect(&self, a: F, b: F, c: F, d: F) -> Self {
        self.mul(&Self::reflection(a, b, c, d))
    }

    pub fn reflect_about(&self, normal: &Vector3<F>, point: &Vector3<F>) -> Self {
        self.mul(&Self::reflection_about(normal, point))
    }

    /// Applies the projection of geometry onto the plane
    /// `a*x + b*y + c*z + d = 0` along rays from `light`, which is a point
    /// light for `w = 1` and a direction for `w = 0`.
    ///
    /// The projection is only affine for directional lights. For point
    /// lights the projective bottom row is dropped, so prefer
    /// [`Matrix4::shadow`] in that case.
    pub fn shadow(&self, light: &Vector4<F>, a: F, b: F, c: F, d: F) -> Self {
        let projection = Matrix4::shadow_projection(light, &Plane::new(a, b, c, d));
        let affine = projection.scale_all(projection.m33().recip());
        self.mul(&Self::from(affine))
    }

    /// Like [`shadow`](Self::shadow), with the receiving plane being the
    /// xz-plane of the given transform.
    pub fn shadow_on(&self, light: &Vector4<F>, plane_transform: &Self) -> Self {
        let normal = plane_transform.columns[1];
        let d = -normal.dot(&plane_transform.columns[3]);
        self.shadow(light, normal.x(), normal.y(), normal.z(), d)
    }

    /// Applies a picking transform that maps the `width` by `height` window
    /// region centered on `(x, y)` onto the whole `[x, y, width, height]`
    /// viewport.
    pub fn pick(&self, x: F, y: F, width: F, height: F, viewport: &[F; 4]) -> Self {
        let scale_x = viewport[2] / width;
        let scale_y = viewport[3] / height;
        let translate_x = (viewport[2] + F::TWO * (viewport[0] - x)) / width;
        let translate_y = (viewport[3] + F::TWO * (viewport[1] - y)) / height;
        self.translate(translate_x, translate_y, F::ZERO)
            .scale(scale_x, scale_y, F::ONE)
    }

    /// Applies an arcball camera transform orbiting `center` at the given
    /// distance.
    pub fn arcball(&self, radius: F, center: &Vector3<F>, angle_x: F, angle_y: F) -> Self {
        self.translate(F::ZERO, F::ZERO, -radius)
            .rotate_x(angle_x)
            .rotate_y(angle_y)
            .translate(-center.x(), -center.y(), -center.z())
    }

    /// See [`Matrix3::scale_factors`].
    pub fn scale_factors(&self) -> Vector3<F> {
        self.linear_part().scale_factors()
    }

    /// Extracts the rotation of the linear part as a quaternion, assuming
    /// the linear part is orthonormal. For a scaled matrix, use
    /// [`unnormalized_rotation`](Self::unnormalized_rotation) or call
    /// [`normalize_3x3`](Self::normalize_3x3) first.
    pub fn normalized_rotation(&self) -> Quaternion<F> {
        super::quaternion_from_orthonormal_columns(&self.linear_columns())
    }

    /// Extracts the rotation of the linear part as a quaternion after
    /// dividing out the length of each column. The columns must be
    /// orthogonal.
    pub fn unnormalized_rotation(&self) -> Quaternion<F> {
        super::quaternion_from_unnormalized_columns(&self.linear_columns())
    }

    pub fn to_axis_angle(&self) -> AxisAngle<F> {
        AxisAngle::from_quaternion(&self.normalized_rotation())
    }

    /// See [`Matrix3::euler_angles_zyx`].
    pub fn euler_angles_zyx(&self) -> Vector3<F> {
        super::euler_angles_zyx_from_columns(&self.linear_columns())
    }

    /// Returns the given clip plane of this matrix used as a projection. The
    /// plane is normalized and its normal points into the clip volume.
    pub fn frustum_plane(&self, plane: FrustumPlane) -> Plane<F> {
        super::frustum_plane_from_rows(&self.rows(), plane)
    }

    pub fn positive_x(&self) -> Vector3<F> {
        self.linear_part().positive_x()
    }

    pub fn positive_y(&self) -> Vector3<F> {
        self.linear_part().positive_y()
    }

    pub fn positive_z(&self) -> Vector3<F> {
        self.linear_part().positive_z()
    }

    #[inline]
    pub fn normalized_positive_x(&self) -> Vector3<F> {
        self.linear_part().normalized_positive_x()
    }

    #[inline]
    pub fn normalized_positive_y(&self) -> Vector3<F> {
        self.linear_part().normalized_positive_y()
    }

    #[inline]
    pub fn normalized_positive_z(&self) -> Vector3<F> {
        self.linear_part().normalized_positive_z()
    }

    /// Returns the point that this matrix maps onto the origin.
    pub fn origin(&self) -> Vector3<F> {
        self.invert().columns[3]
    }

    /// Transforms the given homogeneous vector, whose w-component is kept.
    #[inline]
    pub fn transform(&self, vector: &Vector4<F>) -> Vector4<F> {
        (self.transform_direction(&vector.xyz()) + self.columns[3] * vector.w()).extended(vector.w())
    }

    #[inline]
    pub fn transform_position(&self, position: &Vector3<F>) -> Vector3<F> {
        self.transform_direction(position) + self.columns[3]
    }

    #[inline]
    pub fn transform_direction(&self, direction: &Vector3<F>) -> Vector3<F> {
        let [c0, c1, c2, _] = &self.columns;
        c0 * direction.x() + c1 * direction.y() + c2 * direction.z()
    }

    /// Computes the smallest axis-aligned box containing the transformed
    /// corners of the given box.
    pub fn transform_aab(&self, aab: &AxisAlignedBox<F>) -> AxisAlignedBox<F> {
        let center = self.transform_position(&aab.center());
        let half_extents = aab.half_extents();
        let [c0, c1, c2, _] = &self.columns;
        let extents = c0.component_abs() * half_extents.x()
            + c1.component_abs() * half_extents.y()
            + c2.component_abs() * half_extents.z();
        AxisAlignedBox::new(center - extents, center + extents)
    }

    pub(crate) fn columns(&self) -> &[Vector3<F>; 4] {
        &self.columns
    }

    pub(crate) fn with_properties(columns: [Vector3<F>; 4], properties: MatrixProperties) -> Self {
        Self {
            columns,
            properties,
        }
    }

    fn from_linear(linear: &Matrix3<F>, properties: MatrixProperties) -> Self {
        Self::from_linear_and_translation(linear, Vector3::zeros(), properties)
    }

    fn from_rotation(rotation: &Matrix3<F>) -> Self {
        Self::from_linear(rotation, MatrixProperties::OF_RIGID)
    }

    fn from_linear_and_translation(
        linear: &Matrix3<F>,
        translation: Vector3<F>,
        properties: MatrixProperties,
    ) -> Self {
        let [c0, c1, c2] = *linear.columns();
        Self::with_properties([c0, c1, c2, translation], properties)
    }

    fn view_from_basis(eye: &Vector3<F>, dir: &Vector3<F>, up: &Vector3<F>) -> Self {
        let [left, up, dir] = super::orthonormal_basis(dir, up);
        let rotation = Matrix3::from_columns(left, up, dir).transpose();
        let translation = -rotation.transform(eye);
        Self::from_linear_and_translation(&rotation, translation, MatrixProperties::OF_RIGID)
    }

    fn orthographic_from_parts(diagonal: Vector3<F>, translation: Vector3<F>) -> Self {
        Self::from_linear_and_translation(
            &Matrix3::from_diagonal(&diagonal),
            translation,
            MatrixProperties::AFFINE,
        )
    }

    fn orthographic_2d_with_depth_scale(left: F, right: F, bottom: F, top: F, depth_scale: F) -> Self {
        Self::orthographic_from_parts(
            Vector3::new(F::TWO / (right - left), F::TWO / (top - bottom), depth_scale),
            Vector3::new(
                (right + left) / (left - right),
                (top + bottom) / (bottom - top),
                F::ZERO,
            ),
        )
    }

    fn with_translation_and_properties(
        &self,
        translation: Vector3<F>,
        properties: MatrixProperties,
    ) -> Self {
        let [c0, c1, c2, _] = self.columns;
        Self::with_properties([c0, c1, c2, translation], properties)
    }

    fn with_rotated_linear_part(&self, linear: &Matrix3<F>) -> Self {
        Self::from_linear_and_translation(linear, self.columns[3], self.properties.after_rigid())
    }

    fn rotated_locally(&self, rotation: &Matrix3<F>) -> Self {
        Self::with_properties(
            self.columns.map(|column| rotation.transform(&column)),
            self.properties.after_rigid(),
        )
    }

    fn linear_columns(&self) -> [Vector3<F>; 3] {
        let [c0, c1, c2, _] = self.columns;
        [c0, c1, c2]
    }

    fn rows(&self) -> [Vector4<F>; 4] {
        [self.row(0), self.row(1), self.row(2), Vector4::unit_w()]
    }

    fn zip_columns(
        &self,
        other: &Self,
        f: impl Fn(&Vector3<F>, &Vector3<F>) -> Vector3<F>,
        properties: MatrixProperties,
    ) -> Self {
        let [a0, a1, a2, a3] = &self.columns;
        let [b0, b1, b2, b3] = &other.columns;
        Self::with_properties([f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)], properties)
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> Matrix4x3<G> {
        Matrix4x3 {
            columns: self.columns.map(|column| column.map_elements(&f)),
            properties: self.properties,
        }
    }
}

/// Determines the properties that can be read off exactly from the given
/// columns.
fn determine_properties<F: Float>(columns: &[Vector3<F>; 4]) -> MatrixProperties {
    let [c0, c1, c2, c3] = columns;
    let linear_is_identity =
        *c0 == Vector3::unit_x() && *c1 == Vector3::unit_y() && *c2 == Vector3::unit_z();
    if !linear_is_identity {
        MatrixProperties::AFFINE
    } else if *c3 == Vector3::zeros() {
        MatrixProperties::OF_IDENTITY
    } else {
        MatrixProperties::OF_TRANSLATION
    }
}

impl<F: Float> PartialEq for Matrix4x3<F> {
    /// Compares the elements only, not the cached properties.
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl<F: Float> Default for Matrix4x3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<Matrix4<F>> for Matrix4x3<F> {
    /// Drops the bottom row, which loses information unless the matrix is
    /// affine.
    fn from(matrix: Matrix4<F>) -> Self {
        let columns = (*matrix.columns()).map(|column| column.xyz());
        let properties = if matrix.properties().contains(MatrixProperties::AFFINE) {
            matrix.properties()
        } else {
            determine_properties(&columns)
        };
        Self::with_properties(columns, properties)
    }
}

impl_element_accessors!(Matrix4x3<F>, properties = properties, [
    m00, set_m00 => 0, 0;
    m01, set_m01 => 0, 1;
    m02, set_m02 => 0, 2;
    m10, set_m10 => 1, 0;
    m11, set_m11 => 1, 1;
    m12, set_m12 => 1, 2;
    m20, set_m20 => 2, 0;
    m21, set_m21 => 2, 1;
    m22, set_m22 => 2, 2;
    m30, set_m30 => 3, 0;
    m31, set_m31 => 3, 1;
    m32, set_m32 => 3, 2;
]);

impl_matrix_indexing!(
    Matrix4x3<F>,
    properties = properties,
    column: Vector3,
    row: Vector4,
    n_columns: 4,
    n_rows: 3,
    column_indices: [0, 1, 2, 3]
);

impl_in_place_ops!(Matrix4x3<F>;
    invert_mut => invert();
    invert_ortho_mut => invert_ortho();
    invert_unit_scale_mut => invert_unit_scale();
    transpose_3x3_mut => transpose_3x3();
    mul_mut => mul(right: &Self);
    mul_local_mut => mul_local(left: &Self);
    mul_translation_mut => mul_translation(right: &Self);
    mul_ortho_mut => mul_ortho(right: &Self);
    mul_matrix3_mut => mul_matrix3(right: &Matrix3<F>);
    mul_component_wise_mut => mul_component_wise(other: &Self);
    add_mut => add(other: &Self);
    sub_mut => sub(other: &Self);
    lerp_mut => lerp(other: &Self, t: F);
    normalize_3x3_mut => normalize_3x3();
    translate_mut => translate(x: F, y: F, z: F);
    translate_local_mut => translate_local(x: F, y: F, z: F);
    scale_mut => scale(x: F, y: F, z: F);
    scale_uniform_mut => scale_uniform(scale: F);
    scale_local_mut => scale_local(x: F, y: F, z: F);
    scale_around_mut => scale_around(x: F, y: F, z: F, origin: &Vector3<F>);
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
    rotate_translation_mut => rotate_translation(quaternion: &Quaternion<F>);
    rotate_around_mut => rotate_around(quaternion: &Quaternion<F>, origin: &Vector3<F>);
    rotate_towards_mut => rotate_towards(dir: &Vector3<F>, up: &Vector3<F>);
    look_at_mut => look_at(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>);
    look_at_lh_mut => look_at_lh(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>);
    look_along_mut => look_along(dir: &Vector3<F>, up: &Vector3<F>);
    look_along_lh_mut => look_along_lh(dir: &Vector3<F>, up: &Vector3<F>);
    ortho_mut => ortho(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    ortho_lh_mut => ortho_lh(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    ortho_symmetric_mut => ortho_symmetric(width: F, height: F, near: F, far: F, z_zero_to_one: bool);
    ortho_symmetric_lh_mut => ortho_symmetric_lh(width: F, height: F, near: F, far: F, z_zero_to_one: bool);
    ortho_2d_mut => ortho_2d(left: F, right: F, bottom: F, top: F);
    ortho_2d_lh_mut => ortho_2d_lh(left: F, right: F, bottom: F, top: F);
    reflect_mut => reflect(a: F, b: F, c: F, d: F);
    reflect_about_mut => reflect_about(normal: &Vector3<F>, point: &Vector3<F>);
    shadow_mut => shadow(light: &Vector4<F>, a: F, b: F, c: F, d: F);
    shadow_on_mut => shadow_on(light: &Vector4<F>, plane_transform: &Self);
    pick_mut => pick(x: F, y: F, width: F, height: F, viewport: &[F; 4]);
    arcball_mut => arcball(radius: F, center: &Vector3<F>, angle_x: F, angle_y: F);
);

impl_binop!(Mul, mul, Matrix4x3<F>, Matrix4x3<F>, Matrix4x3<F>, |a, b| {
    Matrix4x3::mul(a, b)
});

impl_binop!(Mul, mul, Matrix4x3<F>, Vector4<F>, Vector4<F>, |a, b| {
    a.transform(b)
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4x3<F>, Matrix4x3<F>, |a, b| {
    a.mul_mut(b);
});

impl_approx_via_array!(Matrix4x3<F>, to_cols_array);
impl_precision_conversions!(Matrix4x3);
