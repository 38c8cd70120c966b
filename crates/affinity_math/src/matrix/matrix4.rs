//! 4x4 matrices.

use super::{FrustumCorner, FrustumPlane, Matrix3, Matrix4x3, MatrixProperties};
use crate::{
    angle::Angle,
    axis_angle::AxisAngle,
    bounds::AxisAlignedBox,
    num::Float,
    plane::Plane,
    quaternion::Quaternion,
    scalar,
    vector::{Vector3, Vector4},
};

/// A 4x4 matrix, used for projective transforms and for combining a
/// projection with an affine view transform.
///
/// Like [`Matrix4x3`], the matrix caches [`MatrixProperties`]. The
/// [`AFFINE`](MatrixProperties::AFFINE) and
/// [`PERSPECTIVE`](MatrixProperties::PERSPECTIVE) flags select the inversion
/// and multiplication algorithm.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Matrix4<F> {
    columns: [Vector4<F>; 4],
    #[cfg_attr(feature = "serde", serde(skip))]
    properties: MatrixProperties,
}

pub type Matrix4f = Matrix4<f32>;
pub type Matrix4d = Matrix4<f64>;

/// Generates factories that pad the affine matrix created by the
/// `Matrix4x3` factory of the same name.
macro_rules! padded_affine_factories {
    ($($name:ident($($arg:ident: $arg_ty:ty),*);)*) => {
        impl<F: Float> Matrix4<F> {
            $(
                #[doc = concat!("Padded version of [`Matrix4x3::", stringify!($name), "`].")]
                #[allow(clippy::too_many_arguments)]
                #[inline]
                pub fn $name($($arg: $arg_ty),*) -> Self {
                    Self::from(Matrix4x3::$name($($arg),*))
                }
            )*
        }
    };
}

/// Generates methods that right-multiply by the affine matrix created by
/// the given `Matrix4x3` factory.
macro_rules! affine_compositions {
    ($($name:ident => $factory:ident($($arg:ident: $arg_ty:ty),*);)*) => {
        impl<F: Float> Matrix4<F> {
            $(
                #[doc = concat!(
                    "Computes `self * A` where `A` is given by [`Matrix4x3::",
                    stringify!($factory),
                    "`]."
                )]
                #[allow(clippy::too_many_arguments)]
                pub fn $name(&self, $($arg: $arg_ty),*) -> Self {
                    self.mul_matrix4x3(&Matrix4x3::$factory($($arg),*))
                }
            )*
        }
    };
}

impl<F: Float> Matrix4<F> {
    /// Creates a matrix from its elements in column-major order. The
    /// properties are determined from the elements.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m00: F,
        m01: F,
        m02: F,
        m03: F,
        m10: F,
        m11: F,
        m12: F,
        m13: F,
        m20: F,
        m21: F,
        m22: F,
        m23: F,
        m30: F,
        m31: F,
        m32: F,
        m33: F,
    ) -> Self {
        Self::from_columns(
            Vector4::new(m00, m01, m02, m03),
            Vector4::new(m10, m11, m12, m13),
            Vector4::new(m20, m21, m22, m23),
            Vector4::new(m30, m31, m32, m33),
        )
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from(Matrix4x3::identity())
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::with_properties([Vector4::zeros(); 4], MatrixProperties::empty())
    }

    pub fn from_columns(
        column_1: Vector4<F>,
        column_2: Vector4<F>,
        column_3: Vector4<F>,
        column_4: Vector4<F>,
    ) -> Self {
        let columns = [column_1, column_2, column_3, column_4];
        let bottom_row = Vector4::new(column_1.w(), column_2.w(), column_3.w(), column_4.w());
        if bottom_row == Vector4::unit_w() {
            Self::from(Matrix4x3::from_columns(
                column_1.xyz(),
                column_2.xyz(),
                column_3.xyz(),
                column_4.xyz(),
            ))
        } else {
            Self::with_properties(columns, MatrixProperties::empty())
        }
    }

    #[inline]
    pub fn from_cols_array(elements: &[F; 16]) -> Self {
        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            *elements;
        Self::new(
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        )
    }

    pub fn to_cols_array(&self) -> [F; 16] {
        let mut elements = [F::ZERO; 16];
        for (chunk, column) in elements.chunks_exact_mut(4).zip(self.columns.iter()) {
            chunk.copy_from_slice(&column.to_array());
        }
        elements
    }

    /// Creates the matrix applying the given linear transform.
    pub fn from_matrix3(linear: &Matrix3<F>) -> Self {
        Self::from(Matrix4x3::from_matrix3(linear))
    }

    /// Creates a right-handed perspective projection with the given vertical
    /// field of view and aspect ratio (width over height). The depth range
    /// is `[0, 1]` if `z_zero_to_one` is set and `[-1, 1]` otherwise. A far
    /// distance of [`F::INFINITY`](Float::INFINITY) places the far plane at
    /// infinity. A near distance of [`F::INFINITY`](Float::INFINITY) instead
    /// gives reversed depth, with the far plane at depth `1` and infinity at
    /// the lower end of the depth range.
    pub fn perspective_projection(
        vertical_field_of_view: impl Angle<F>,
        aspect_ratio: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let inv_tan = (vertical_field_of_view.radians() * F::ONE_HALF).tan().recip();
        let (m22, m32) = perspective_depth_elements(near, far, z_zero_to_one, false);
        Self::projection_from_elements(
            inv_tan / aspect_ratio,
            inv_tan,
            F::ZERO,
            F::ZERO,
            m22,
            m32,
            F::NEG_ONE,
            MatrixProperties::PERSPECTIVE,
        )
    }

    /// Left-handed version of
    /// [`perspective_projection`](Self::perspective_projection).
    pub fn perspective_projection_lh(
        vertical_field_of_view: impl Angle<F>,
        aspect_ratio: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let inv_tan = (vertical_field_of_view.radians() * F::ONE_HALF).tan().recip();
        let (m22, m32) = perspective_depth_elements(near, far, z_zero_to_one, true);
        Self::projection_from_elements(
            inv_tan / aspect_ratio,
            inv_tan,
            F::ZERO,
            F::ZERO,
            m22,
            m32,
            F::ONE,
            MatrixProperties::PERSPECTIVE,
        )
    }

    /// Creates a right-handed perspective projection for the view frustum
    /// whose near plane spans `[left, right] x [bottom, top]`.
    #[allow(clippy::too_many_arguments)]
    pub fn frustum_projection(
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let (m22, m32) = perspective_depth_elements(near, far, z_zero_to_one, false);
        Self::projection_from_elements(
            F::TWO * near / (right - left),
            F::TWO * near / (top - bottom),
            (right + left) / (right - left),
            (top + bottom) / (top - bottom),
            m22,
            m32,
            F::NEG_ONE,
            frustum_properties(left, right, bottom, top),
        )
    }

    /// Left-handed version of [`frustum_projection`](Self::frustum_projection).
    #[allow(clippy::too_many_arguments)]
    pub fn frustum_projection_lh(
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        let (m22, m32) = perspective_depth_elements(near, far, z_zero_to_one, true);
        Self::projection_from_elements(
            F::TWO * near / (right - left),
            F::TWO * near / (top - bottom),
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            m22,
            m32,
            F::ONE,
            frustum_properties(left, right, bottom, top),
        )
    }

    /// Creates the projection of geometry onto the given plane along rays
    /// from `light`, which is a point light for `w = 1` and a direction for
    /// `w = 0`. The plane is normalized internally.
    pub fn shadow_projection(light: &Vector4<F>, plane: &Plane<F>) -> Self {
        let plane = Vector4::from_array(plane.normalized().to_array());
        let dot = plane.dot(light);
        let [c0, c1, c2, c3] = [
            Vector4::new(dot, F::ZERO, F::ZERO, F::ZERO),
            Vector4::new(F::ZERO, dot, F::ZERO, F::ZERO),
            Vector4::new(F::ZERO, F::ZERO, dot, F::ZERO),
            Vector4::new(F::ZERO, F::ZERO, F::ZERO, dot),
        ];
        Self::with_properties(
            [
                c0 - light * plane.x(),
                c1 - light * plane.y(),
                c2 - light * plane.z(),
                c3 - light * plane.w(),
            ],
            MatrixProperties::empty(),
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

    /// Whether the bottom row is exactly `(0, 0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.properties.contains(MatrixProperties::AFFINE) || self.row(3) == Vector4::unit_w()
    }

    /// Converts into a [`Matrix4x3`] by dropping the bottom row, which loses
    /// information unless the matrix is affine.
    #[inline]
    pub fn to_matrix4x3(&self) -> Matrix4x3<F> {
        Matrix4x3::from(*self)
    }

    #[inline]
    pub fn translation_part(&self) -> Vector3<F> {
        self.columns[3].xyz()
    }

    /// Sets the x-, y- and z-components of the last column.
    pub fn set_translation(&mut self, translation: &Vector3<F>) -> &mut Self {
        self.columns[3] = translation.extended(self.columns[3].w());
        self.properties = self
            .properties
            .difference(MatrixProperties::IDENTITY.union(MatrixProperties::PERSPECTIVE));
        self
    }

    /// Returns the upper-left 3x3 block.
    #[inline]
    pub fn linear_part(&self) -> Matrix3<F> {
        let [c0, c1, c2, _] = &self.columns;
        Matrix3::from_columns(c0.xyz(), c1.xyz(), c2.xyz())
    }

    /// Computes the determinant.
    pub fn determinant(&self) -> F {
        let c = self.cofactor_terms();
        c.a * c.l - c.b * c.k + c.c * c.j + c.d * c.i - c.e * c.h + c.f * c.g
    }

    /// Computes the determinant assuming the matrix is affine.
    #[inline]
    pub fn determinant_affine(&self) -> F {
        self.linear_part().determinant()
    }

    /// Computes the inverse, choosing the algorithm from the cached
    /// properties. A singular matrix gives non-finite elements.
    pub fn invert(&self) -> Self {
        if self.properties.contains(MatrixProperties::IDENTITY) {
            *self
        } else if self.properties.contains(MatrixProperties::AFFINE) {
            self.invert_affine()
        } else if self.properties.contains(MatrixProperties::PERSPECTIVE) {
            self.invert_perspective()
        } else {
            self.invert_general()
        }
    }

    /// Inverts a matrix assumed to be affine. Gives wrong results for any
    /// other matrix.
    pub fn invert_affine(&self) -> Self {
        Self::from(self.to_matrix4x3().invert())
    }

    /// Inverts a matrix created by
    /// [`perspective_projection`](Self::perspective_projection) or a
    /// symmetric [`frustum_projection`](Self::frustum_projection). Gives
    /// wrong results for any other matrix.
    pub fn invert_perspective(&self) -> Self {
        let a = (self.m00() * self.m11()).recip();
        let l = -(self.m23() * self.m32()).recip();
        Self::with_properties(
            [
                Vector4::new(self.m11() * a, F::ZERO, F::ZERO, F::ZERO),
                Vector4::new(F::ZERO, self.m00() * a, F::ZERO, F::ZERO),
                Vector4::new(F::ZERO, F::ZERO, F::ZERO, -self.m23() * l),
                Vector4::new(F::ZERO, F::ZERO, -self.m32() * l, self.m22() * l),
            ],
            MatrixProperties::empty(),
        )
    }

    /// Inverts a matrix created by one of the `orthographic` factories.
    /// Gives wrong results for any other matrix.
    pub fn invert_ortho(&self) -> Self {
        Self::from(self.to_matrix4x3().invert_ortho())
    }

    /// Computes the inverse from the cofactors without consulting the
    /// properties.
    pub fn invert_general(&self) -> Self {
        let c = self.cofactor_terms();
        let s = (c.a * c.l - c.b * c.k + c.c * c.j + c.d * c.i - c.e * c.h + c.f * c.g).recip();
        let [m0, m1, m2, m3] = &self.columns;
        let (m00, m01, m02, m03) = (m0.x(), m0.y(), m0.z(), m0.w());
        let (m10, m11, m12, m13) = (m1.x(), m1.y(), m1.z(), m1.w());
        let (m20, m21, m22, m23) = (m2.x(), m2.y(), m2.z(), m2.w());
        let (m30, m31, m32, m33) = (m3.x(), m3.y(), m3.z(), m3.w());
        Self::with_properties(
            [
                Vector4::new(
                    (m11 * c.l - m12 * c.k + m13 * c.j) * s,
                    (-m01 * c.l + m02 * c.k - m03 * c.j) * s,
                    (m31 * c.f - m32 * c.e + m33 * c.d) * s,
                    (-m21 * c.f + m22 * c.e - m23 * c.d) * s,
                ),
                Vector4::new(
                    (-m10 * c.l + m12 * c.i - m13 * c.h) * s,
                    (m00 * c.l - m02 * c.i + m03 * c.h) * s,
                    (-m30 * c.f + m32 * c.c - m33 * c.b) * s,
                    (m20 * c.f - m22 * c.c + m23 * c.b) * s,
                ),
                Vector4::new(
                    (m10 * c.k - m11 * c.i + m13 * c.g) * s,
                    (-m00 * c.k + m01 * c.i - m03 * c.g) * s,
                    (m30 * c.e - m31 * c.c + m33 * c.a) * s,
                    (-m20 * c.e + m21 * c.c - m23 * c.a) * s,
                ),
                Vector4::new(
                    (-m10 * c.j + m11 * c.h - m12 * c.g) * s,
                    (m00 * c.j - m01 * c.h + m02 * c.g) * s,
                    (-m30 * c.d + m31 * c.b - m32 * c.a) * s,
                    (m20 * c.d - m21 * c.b + m22 * c.a) * s,
                ),
            ],
            self.properties.intersection(MatrixProperties::AFFINE),
        )
    }

    pub fn transpose(&self) -> Self {
        if self.properties.contains(MatrixProperties::IDENTITY) {
            *self
        } else {
            Self::with_properties(self.rows(), MatrixProperties::empty())
        }
    }

    /// Transposes the upper-left 3x3 block and sets the remaining elements
    /// to those of the identity.
    pub fn transpose_3x3(&self) -> Self {
        Self::from(Matrix4x3::from_matrix3(&self.linear_part().transpose()))
            .with_properties_limited_to(
                self.properties
                    .intersection(MatrixProperties::ORTHONORMAL)
                    .union(MatrixProperties::AFFINE),
            )
    }

    /// Computes `self * right`. Products of affine matrices take a cheaper
    /// path.
    pub fn mul(&self, right: &Self) -> Self {
        if self.properties.contains(MatrixProperties::IDENTITY) {
            *right
        } else if right.properties.contains(MatrixProperties::IDENTITY) {
            *self
        } else if self.properties.contains(MatrixProperties::AFFINE)
            && right.properties.contains(MatrixProperties::AFFINE)
        {
            self.mul_affine(right)
        } else {
            Self::with_properties(
                right.columns.map(|column| self.transform(&column)),
                MatrixProperties::of_product(self.properties, right.properties),
            )
        }
    }

    /// Computes `self * right` assuming both matrices are affine. Gives
    /// wrong results otherwise.
    pub fn mul_affine(&self, right: &Self) -> Self {
        Self::from(self.to_matrix4x3().mul(&right.to_matrix4x3()))
    }

    /// Computes `left * self`.
    #[inline]
    pub fn mul_local(&self, left: &Self) -> Self {
        left.mul(self)
    }

    /// Computes `self * right` where `right` is affine.
    pub fn mul_matrix4x3(&self, right: &Matrix4x3<F>) -> Self {
        if self.properties.contains(MatrixProperties::AFFINE) {
            Self::from(self.to_matrix4x3().mul(right))
        } else {
            let [r0, r1, r2, r3] = right.columns();
            Self::with_properties(
                [
                    self.transform(&r0.extended(F::ZERO)),
                    self.transform(&r1.extended(F::ZERO)),
                    self.transform(&r2.extended(F::ZERO)),
                    self.transform(&r3.extended(F::ONE)),
                ],
                MatrixProperties::of_product(self.properties, right.properties()),
            )
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a + b, MatrixProperties::empty())
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.zip_columns(other, |a, b| a - b, MatrixProperties::empty())
    }

    pub fn mul_component_wise(&self, other: &Self) -> Self {
        let properties = self
            .properties
            .intersection(other.properties)
            .intersection(MatrixProperties::AFFINE);
        self.zip_columns(other, |a, b| a.component_mul(b), properties)
    }

    pub fn lerp(&self, other: &Self, t: F) -> Self {
        let properties = self
            .properties
            .intersection(other.properties)
            .difference(MatrixProperties::ORTHONORMAL);
        self.zip_columns(other, |a, b| a.lerp(b, t), properties)
    }

    /// Multiplies every element with the given scalar.
    pub fn scale_all(&self, factor: F) -> Self {
        Self::with_properties(
            self.columns.map(|column| column * factor),
            MatrixProperties::empty(),
        )
    }

    /// Computes the matrix for transforming normal vectors, which is the
    /// transpose of the inverse of the upper-left 3x3 block.
    pub fn normal(&self) -> Matrix3<F> {
        if self.properties.contains(MatrixProperties::ORTHONORMAL) {
            self.linear_part()
        } else {
            self.linear_part().normal()
        }
    }

    /// Normalizes the upper three elements of each of the first three
    /// columns, which removes scaling from a matrix whose linear part has
    /// orthogonal columns.
    pub fn normalize_3x3(&self) -> Self {
        let [c0, c1, c2, c3] = &self.columns;
        let normalized = |column: &Vector4<F>| column.xyz().normalized().extended(column.w());
        Self::with_properties(
            [normalized(c0), normalized(c1), normalized(c2), *c3],
            self.properties,
        )
    }

    /// Computes `self * T` where `T` translates by `(x, y, z)`.
    pub fn translate(&self, x: F, y: F, z: F) -> Self {
        let [c0, c1, c2, c3] = &self.columns;
        Self::with_properties(
            [*c0, *c1, *c2, c0 * x + c1 * y + c2 * z + c3],
            self.properties.after_translation(),
        )
    }

    /// Computes `T * self` where `T` translates by `(x, y, z)`.
    pub fn translate_local(&self, x: F, y: F, z: F) -> Self {
        let translation = Vector3::new(x, y, z);
        Self::with_properties(
            self.columns.map(|column| {
                (column.xyz() + translation * column.w()).extended(column.w())
            }),
            self.properties.after_translation(),
        )
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

    /// Computes `S * self`.
    pub fn scale_local(&self, x: F, y: F, z: F) -> Self {
        let factors = Vector4::new(x, y, z, F::ONE);
        Self::with_properties(
            self.columns.map(|column| column.component_mul(&factors)),
            self.properties.after_affine(),
        )
    }

    /// Computes `self * Rx(angle)`.
    pub fn rotate_x(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let [c0, c1, c2, c3] = &self.columns;
        self.with_rigid_columns([*c0, c1 * cos + c2 * sin, c2 * cos - c1 * sin, *c3])
    }

    pub fn rotate_y(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let [c0, c1, c2, c3] = &self.columns;
        self.with_rigid_columns([c0 * cos - c2 * sin, *c1, c0 * sin + c2 * cos, *c3])
    }

    pub fn rotate_z(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        let [c0, c1, c2, c3] = &self.columns;
        self.with_rigid_columns([c0 * cos + c1 * sin, c1 * cos - c0 * sin, *c2, *c3])
    }

    /// Computes `Rx(angle) * self`.
    pub fn rotate_local_x(&self, angle: F) -> Self {
        self.rotated_locally(&Matrix3::rotation_x(angle))
    }

    pub fn rotate_local_y(&self, angle: F) -> Self {
        self.rotated_locally(&Matrix3::rotation_y(angle))
    }

    pub fn rotate_local_z(&self, angle: F) -> Self {
        self.rotated_locally(&Matrix3::rotation_z(angle))
    }

    /// Computes `self * Rx(angle_x) * Ry(angle_y) * Rz(angle_z)`.
    pub fn rotate_xyz(&self, angle_x: F, angle_y: F, angle_z: F) -> Self {
        self.rotated(&Matrix3::rotation_xyz(angle_x, angle_y, angle_z))
    }

    /// Computes `self * Rz(angle_z) * Ry(angle_y) * Rx(angle_x)`.
    pub fn rotate_zyx(&self, angle_z: F, angle_y: F, angle_x: F) -> Self {
        self.rotated(&Matrix3::rotation_zyx(angle_z, angle_y, angle_x))
    }

    /// Computes `self * Ry(angle_y) * Rx(angle_x) * Rz(angle_z)`.
    pub fn rotate_yxz(&self, angle_y: F, angle_x: F, angle_z: F) -> Self {
        self.rotated(&Matrix3::rotation_yxz(angle_y, angle_x, angle_z))
    }

    pub fn rotate_local_axis(&self, angle: F, axis: &Vector3<F>) -> Self {
        self.rotated_locally(&Matrix3::rotation_axis(angle, axis))
    }

    pub fn rotate_local_quaternion(&self, quaternion: &Quaternion<F>) -> Self {
        self.rotated_locally(&Matrix3::rotation_quaternion(quaternion))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn perspective(
        &self,
        vertical_field_of_view: impl Angle<F>,
        aspect_ratio: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::perspective_projection(
            vertical_field_of_view,
            aspect_ratio,
            near,
            far,
            z_zero_to_one,
        ))
    }

    pub fn perspective_lh(
        &self,
        vertical_field_of_view: impl Angle<F>,
        aspect_ratio: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::perspective_projection_lh(
            vertical_field_of_view,
            aspect_ratio,
            near,
            far,
            z_zero_to_one,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn frustum(
        &self,
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::frustum_projection(
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
    pub fn frustum_lh(
        &self,
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> Self {
        self.mul(&Self::frustum_projection_lh(
            left,
            right,
            bottom,
            top,
            near,
            far,
            z_zero_to_one,
        ))
    }

    /// Applies the projection of geometry onto the plane
    /// `a*x + b*y + c*z + d = 0` along rays from `light`. See
    /// [`shadow_projection`](Self::shadow_projection).
    pub fn shadow(&self, light: &Vector4<F>, a: F, b: F, c: F, d: F) -> Self {
        self.mul(&Self::shadow_projection(light, &Plane::new(a, b, c, d)))
    }

    /// Applies a picking transform that maps the `width` by `height` window
    /// region centered on `(x, y)` onto the whole `[x, y, width, height]`
    /// viewport.
    pub fn pick(&self, x: F, y: F, width: F, height: F, viewport: &[F; 4]) -> Self {
        self.mul_matrix4x3(&Matrix4x3::identity().pick(x, y, width, height, viewport))
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
        self.linear_part().normalized_rotation()
    }

    /// Extracts the rotation of the linear part as a quaternion after
    /// dividing out the length of each column. The columns must be
    /// orthogonal.
    pub fn unnormalized_rotation(&self) -> Quaternion<F> {
        self.linear_part().unnormalized_rotation()
    }

    /// See [`Matrix3::euler_angles_zyx`].
    pub fn euler_angles_zyx(&self) -> Vector3<F> {
        self.linear_part().euler_angles_zyx()
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

    pub fn normalized_positive_x(&self) -> Vector3<F> {
        self.linear_part().normalized_positive_x()
    }

    pub fn normalized_positive_y(&self) -> Vector3<F> {
        self.linear_part().normalized_positive_y()
    }

    pub fn normalized_positive_z(&self) -> Vector3<F> {
        self.linear_part().normalized_positive_z()
    }

    /// Returns the given clip plane of this matrix used as a projection. The
    /// plane is normalized and its normal points into the frustum.
    pub fn frustum_plane(&self, plane: FrustumPlane) -> Plane<F> {
        super::frustum_plane_from_rows(&self.rows(), plane)
    }

    /// Returns the world-space position of the given corner of the view
    /// frustum of this projection.
    pub fn frustum_corner(&self, corner: FrustumCorner) -> Vector3<F> {
        self.invert().transform_project(&corner.ndc())
    }

    /// Returns the eye position of this perspective projection, where all
    /// the side planes of the frustum meet.
    pub fn perspective_origin(&self) -> Vector3<F> {
        self.invert()
            .transform(&Vector4::new(F::ZERO, F::ZERO, F::ONE, F::ZERO))
            .projected()
    }

    /// Returns the vertical field of view in radians, as the angle between
    /// the bottom and top frustum planes.
    pub fn perspective_fov(&self) -> F {
        let rows = self.rows();
        let bottom = (rows[3] + rows[1]).xyz();
        let top = (rows[1] - rows[3]).xyz();
        scalar::safe_acos(bottom.dot(&top) / (bottom.norm() * top.norm()))
    }

    /// Returns the near plane distance of a right-handed perspective
    /// projection with depth range `[-1, 1]`.
    pub fn perspective_near(&self) -> F {
        self.m32() / (self.m23() + self.m22())
    }

    /// Returns the far plane distance of a right-handed perspective
    /// projection with depth range `[-1, 1]`.
    pub fn perspective_far(&self) -> F {
        self.m32() / (self.m22() - self.m23())
    }

    /// Maps the given position to window coordinates for the
    /// `[x, y, width, height]` viewport. The window depth is in `[0, 1]`.
    pub fn project(&self, position: &Vector3<F>, viewport: &[F; 4]) -> Vector3<F> {
        let ndc = self.transform_project(position);
        Vector3::new(
            (ndc.x() * F::ONE_HALF + F::ONE_HALF) * viewport[2] + viewport[0],
            (ndc.y() * F::ONE_HALF + F::ONE_HALF) * viewport[3] + viewport[1],
            (F::ONE + ndc.z()) * F::ONE_HALF,
        )
    }

    /// Inverse of [`project`](Self::project).
    pub fn unproject(&self, window: &Vector3<F>, viewport: &[F; 4]) -> Vector3<F> {
        self.invert().unproject_inv(window, viewport)
    }

    /// Like [`unproject`](Self::unproject), but `self` is the already
    /// inverted matrix.
    pub fn unproject_inv(&self, window: &Vector3<F>, viewport: &[F; 4]) -> Vector3<F> {
        let (ndc_x, ndc_y) = super::window_to_ndc(window.x(), window.y(), viewport);
        self.transform_project(&Vector3::new(ndc_x, ndc_y, window.z() * F::TWO - F::ONE))
    }

    /// Computes the ray through the given window position as its origin on
    /// the near plane and the (unnormalized) direction to the far plane.
    pub fn unproject_ray(&self, win_x: F, win_y: F, viewport: &[F; 4]) -> (Vector3<F>, Vector3<F>) {
        let inverse = self.invert();
        let (ndc_x, ndc_y) = super::window_to_ndc(win_x, win_y, viewport);
        let near = inverse.transform_project(&Vector3::new(ndc_x, ndc_y, F::NEG_ONE));
        let far = inverse.transform_project(&Vector3::new(ndc_x, ndc_y, F::ONE));
        (near, far - near)
    }

    /// Whether the point lies inside the frustum of this projection,
    /// boundary included.
    pub fn test_point(&self, point: &Vector3<F>) -> bool {
        super::rows_contain_point(&self.rows(), point)
    }

    /// Whether any part of the sphere lies inside the frustum.
    pub fn test_sphere(&self, center: &Vector3<F>, radius: F) -> bool {
        super::rows_intersect_sphere(&self.rows(), center, radius)
    }

    /// Conservative test for whether the axis-aligned box intersects or lies
    /// inside the frustum. Boxes near a frustum corner may be reported as
    /// intersecting even when they lie outside.
    pub fn test_aab(&self, min: &Vector3<F>, max: &Vector3<F>) -> bool {
        super::rows_intersect_aab(&self.rows(), min, max)
    }

    /// Computes `self * vector`.
    #[inline]
    pub fn transform(&self, vector: &Vector4<F>) -> Vector4<F> {
        let [c0, c1, c2, c3] = &self.columns;
        c0 * vector.x() + c1 * vector.y() + c2 * vector.z() + c3 * vector.w()
    }

    /// Transforms the given position and divides by the resulting w.
    #[inline]
    pub fn transform_project(&self, position: &Vector3<F>) -> Vector3<F> {
        self.transform(&position.extended(F::ONE)).projected()
    }

    /// Transforms the given position ignoring the bottom row.
    #[inline]
    pub fn transform_position(&self, position: &Vector3<F>) -> Vector3<F> {
        self.transform(&position.extended(F::ONE)).xyz()
    }

    /// Transforms the given direction ignoring the bottom row.
    #[inline]
    pub fn transform_direction(&self, direction: &Vector3<F>) -> Vector3<F> {
        self.transform(&direction.extended(F::ZERO)).xyz()
    }

    /// Computes the smallest axis-aligned box containing the transformed
    /// box, assuming the matrix is affine.
    pub fn transform_aab(&self, aab: &AxisAlignedBox<F>) -> AxisAlignedBox<F> {
        self.to_matrix4x3().transform_aab(aab)
    }

    pub(crate) fn columns(&self) -> &[Vector4<F>; 4] {
        &self.columns
    }

    fn with_properties(columns: [Vector4<F>; 4], properties: MatrixProperties) -> Self {
        Self {
            columns,
            properties,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn projection_from_elements(
        m00: F,
        m11: F,
        m20: F,
        m21: F,
        m22: F,
        m32: F,
        m23: F,
        properties: MatrixProperties,
    ) -> Self {
        Self::with_properties(
            [
                Vector4::new(m00, F::ZERO, F::ZERO, F::ZERO),
                Vector4::new(F::ZERO, m11, F::ZERO, F::ZERO),
                Vector4::new(m20, m21, m22, m23),
                Vector4::new(F::ZERO, F::ZERO, m32, F::ZERO),
            ],
            properties,
        )
    }

    fn with_properties_limited_to(self, properties: MatrixProperties) -> Self {
        Self::with_properties(self.columns, self.properties.intersection(properties))
    }

    fn with_rigid_columns(&self, columns: [Vector4<F>; 4]) -> Self {
        Self::with_properties(columns, self.properties.after_rigid())
    }

    /// Computes `self * R` for the rotation `R`.
    fn rotated(&self, rotation: &Matrix3<F>) -> Self {
        let [c0, c1, c2, c3] = &self.columns;
        let rotate = |r: &Vector3<F>| c0 * r.x() + c1 * r.y() + c2 * r.z();
        let [r0, r1, r2] = rotation.columns();
        self.with_rigid_columns([rotate(r0), rotate(r1), rotate(r2), *c3])
    }

    fn rotated_locally(&self, rotation: &Matrix3<F>) -> Self {
        self.with_rigid_columns(
            self.columns
                .map(|column| rotation.transform(&column.xyz()).extended(column.w())),
        )
    }

    fn rows(&self) -> [Vector4<F>; 4] {
        [self.row(0), self.row(1), self.row(2), self.row(3)]
    }

    fn cofactor_terms(&self) -> CofactorTerms<F> {
        let [m0, m1, m2, m3] = &self.columns;
        let minor = scalar::difference_of_products::<F>;
        CofactorTerms {
            a: minor(m0.x(), m1.y(), m0.y(), m1.x()),
            b: minor(m0.x(), m1.z(), m0.z(), m1.x()),
            c: minor(m0.x(), m1.w(), m0.w(), m1.x()),
            d: minor(m0.y(), m1.z(), m0.z(), m1.y()),
            e: minor(m0.y(), m1.w(), m0.w(), m1.y()),
            f: minor(m0.z(), m1.w(), m0.w(), m1.z()),
            g: minor(m2.x(), m3.y(), m2.y(), m3.x()),
            h: minor(m2.x(), m3.z(), m2.z(), m3.x()),
            i: minor(m2.x(), m3.w(), m2.w(), m3.x()),
            j: minor(m2.y(), m3.z(), m2.z(), m3.y()),
            k: minor(m2.y(), m3.w(), m2.w(), m3.y()),
            l: minor(m2.z(), m3.w(), m2.w(), m3.z()),
        }
    }

    fn zip_columns(
        &self,
        other: &Self,
        f: impl Fn(&Vector4<F>, &Vector4<F>) -> Vector4<F>,
        properties: MatrixProperties,
    ) -> Self {
        let [a0, a1, a2, a3] = &self.columns;
        let [b0, b1, b2, b3] = &other.columns;
        Self::with_properties([f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)], properties)
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> Matrix4<G> {
        Matrix4 {
            columns: self.columns.map(|column| column.map_elements(&f)),
            properties: self.properties,
        }
    }
}

/// The 2x2 minors from the first two and the last two columns, shared by
/// the determinant and the general inverse.
struct CofactorTerms<F> {
    a: F,
    b: F,
    c: F,
    d: F,
    e: F,
    f: F,
    g: F,
    h: F,
    i: F,
    j: F,
    k: F,
    l: F,
}

/// Computes `(m22, m32)` of a perspective projection. An infinite far or
/// near distance gives the limit for that plane at infinity.
fn perspective_depth_elements<F: Float>(near: F, far: F, z_zero_to_one: bool, lh: bool) -> (F, F) {
    let e = F::TOLERANCE;
    if far.is_infinite() {
        let m22 = if lh { F::ONE - e } else { e - F::ONE };
        let m32 = (e - if z_zero_to_one { F::ONE } else { F::TWO }) * near;
        (m22, m32)
    } else if near.is_infinite() {
        let m22 = (if z_zero_to_one { F::ZERO } else { F::ONE }) - e;
        let m22 = if lh { -m22 } else { m22 };
        let m32 = ((if z_zero_to_one { F::ONE } else { F::TWO }) - e) * far;
        (m22, m32)
    } else {
        let depth_sum = if z_zero_to_one { far } else { far + near };
        let m22 = if lh {
            depth_sum / (far - near)
        } else {
            depth_sum / (near - far)
        };
        let m32 = (if z_zero_to_one { far } else { far + far }) * near / (near - far);
        (m22, m32)
    }
}

/// Only symmetric frusta (to within [`Float::TOLERANCE`]) have the structure
/// that `invert_perspective` relies on.
fn frustum_properties<F: Float>(left: F, right: F, bottom: F, top: F) -> MatrixProperties {
    if scalar::approx_eq(left, -right) && scalar::approx_eq(bottom, -top) {
        MatrixProperties::PERSPECTIVE
    } else {
        MatrixProperties::empty()
    }
}

padded_affine_factories!(
    translation(x: F, y: F, z: F);
    scaling(x: F, y: F, z: F);
    scaling_uniform(scale: F);
    rotation_x(angle: F);
    rotation_y(angle: F);
    rotation_z(angle: F);
    rotation_xyz(angle_x: F, angle_y: F, angle_z: F);
    rotation_zyx(angle_z: F, angle_y: F, angle_x: F);
    rotation_yxz(angle_y: F, angle_x: F, angle_z: F);
    from_matrix3_translation(linear: &Matrix3<F>, translation: &Vector3<F>);
    rotation_axis(angle: F, axis: &Vector3<F>);
    rotation_axis_angle(axis_angle: &AxisAngle<F>);
    rotation_quaternion(quaternion: &Quaternion<F>);
    translation_rotate(translation: &Vector3<F>, rotation: &Quaternion<F>);
    translation_rotate_scale(translation: &Vector3<F>, rotation: &Quaternion<F>, scale: &Vector3<F>);
    rotation_towards(dir: &Vector3<F>, up: &Vector3<F>);
    view_look_at(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>);
    view_look_at_lh(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>);
    view_look_along(dir: &Vector3<F>, up: &Vector3<F>);
    view_look_along_lh(dir: &Vector3<F>, up: &Vector3<F>);
    orthographic(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    orthographic_lh(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    orthographic_symmetric(width: F, height: F, near: F, far: F, z_zero_to_one: bool);
    orthographic_symmetric_lh(width: F, height: F, near: F, far: F, z_zero_to_one: bool);
    orthographic_2d(left: F, right: F, bottom: F, top: F);
    orthographic_2d_lh(left: F, right: F, bottom: F, top: F);
    reflection(a: F, b: F, c: F, d: F);
    reflection_about(normal: &Vector3<F>, point: &Vector3<F>);
    reflection_quaternion(orientation: &Quaternion<F>, point: &Vector3<F>);
    billboard_cylindrical(object_position: &Vector3<F>, target_position: &Vector3<F>, up: &Vector3<F>);
    billboard_spherical(object_position: &Vector3<F>, target_position: &Vector3<F>, up: &Vector3<F>);
);

affine_compositions!(
    rotate_axis => rotation_axis(angle: F, axis: &Vector3<F>);
    rotate_axis_angle => rotation_axis_angle(axis_angle: &AxisAngle<F>);
    rotate_quaternion => rotation_quaternion(quaternion: &Quaternion<F>);
    rotate_towards => rotation_towards(dir: &Vector3<F>, up: &Vector3<F>);
    look_at => view_look_at(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>);
    look_at_lh => view_look_at_lh(eye: &Vector3<F>, center: &Vector3<F>, up: &Vector3<F>);
    look_along => view_look_along(dir: &Vector3<F>, up: &Vector3<F>);
    look_along_lh => view_look_along_lh(dir: &Vector3<F>, up: &Vector3<F>);
    ortho => orthographic(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    ortho_lh => orthographic_lh(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    ortho_symmetric => orthographic_symmetric(width: F, height: F, near: F, far: F, z_zero_to_one: bool);
    ortho_symmetric_lh => orthographic_symmetric_lh(width: F, height: F, near: F, far: F, z_zero_to_one: bool);
    ortho_2d => orthographic_2d(left: F, right: F, bottom: F, top: F);
    ortho_2d_lh => orthographic_2d_lh(left: F, right: F, bottom: F, top: F);
    reflect => reflection(a: F, b: F, c: F, d: F);
    reflect_about => reflection_about(normal: &Vector3<F>, point: &Vector3<F>);
);

impl<F: Float> PartialEq for Matrix4<F> {
    /// Compares the elements only, not the cached properties.
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl<F: Float> Default for Matrix4<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<Matrix4x3<F>> for Matrix4<F> {
    /// Pads the matrix with the bottom row `(0, 0, 0, 1)`.
    fn from(matrix: Matrix4x3<F>) -> Self {
        let [c0, c1, c2, c3] = matrix.columns();
        Self::with_properties(
            [
                c0.extended(F::ZERO),
                c1.extended(F::ZERO),
                c2.extended(F::ZERO),
                c3.extended(F::ONE),
            ],
            matrix.properties().union(MatrixProperties::AFFINE),
        )
    }
}

impl_element_accessors!(Matrix4<F>, properties = properties, [
    m00, set_m00 => 0, 0;
    m01, set_m01 => 0, 1;
    m02, set_m02 => 0, 2;
    m03, set_m03 => 0, 3;
    m10, set_m10 => 1, 0;
    m11, set_m11 => 1, 1;
    m12, set_m12 => 1, 2;
    m13, set_m13 => 1, 3;
    m20, set_m20 => 2, 0;
    m21, set_m21 => 2, 1;
    m22, set_m22 => 2, 2;
    m23, set_m23 => 2, 3;
    m30, set_m30 => 3, 0;
    m31, set_m31 => 3, 1;
    m32, set_m32 => 3, 2;
    m33, set_m33 => 3, 3;
]);

impl_matrix_indexing!(
    Matrix4<F>,
    properties = properties,
    column: Vector4,
    row: Vector4,
    n_columns: 4,
    n_rows: 4,
    column_indices: [0, 1, 2, 3]
);

impl_in_place_ops!(Matrix4<F>;
    invert_mut => invert();
    invert_affine_mut => invert_affine();
    invert_perspective_mut => invert_perspective();
    invert_ortho_mut => invert_ortho();
    transpose_mut => transpose();
    transpose_3x3_mut => transpose_3x3();
    mul_mut => mul(right: &Self);
    mul_affine_mut => mul_affine(right: &Self);
    mul_local_mut => mul_local(left: &Self);
    mul_matrix4x3_mut => mul_matrix4x3(right: &Matrix4x3<F>);
    add_mut => add(other: &Self);
    sub_mut => sub(other: &Self);
    mul_component_wise_mut => mul_component_wise(other: &Self);
    lerp_mut => lerp(other: &Self, t: F);
    scale_all_mut => scale_all(factor: F);
    normalize_3x3_mut => normalize_3x3();
    translate_mut => translate(x: F, y: F, z: F);
    translate_local_mut => translate_local(x: F, y: F, z: F);
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
    frustum_mut => frustum(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    frustum_lh_mut => frustum_lh(left: F, right: F, bottom: F, top: F, near: F, far: F, z_zero_to_one: bool);
    reflect_mut => reflect(a: F, b: F, c: F, d: F);
    reflect_about_mut => reflect_about(normal: &Vector3<F>, point: &Vector3<F>);
    shadow_mut => shadow(light: &Vector4<F>, a: F, b: F, c: F, d: F);
    pick_mut => pick(x: F, y: F, width: F, height: F, viewport: &[F; 4]);
);

impl<F: Float> Matrix4<F> {
    /// In-place version of [`Self::perspective`].
    pub fn perspective_mut(
        &mut self,
        vertical_field_of_view: impl Angle<F>,
        aspect_ratio: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> &mut Self {
        *self = self.perspective(vertical_field_of_view, aspect_ratio, near, far, z_zero_to_one);
        self
    }

    /// In-place version of [`Self::perspective_lh`].
    pub fn perspective_lh_mut(
        &mut self,
        vertical_field_of_view: impl Angle<F>,
        aspect_ratio: F,
        near: F,
        far: F,
        z_zero_to_one: bool,
    ) -> &mut Self {
        *self = self.perspective_lh(vertical_field_of_view, aspect_ratio, near, far, z_zero_to_one);
        self
    }
}

impl_binop!(Mul, mul, Matrix4<F>, Matrix4<F>, Matrix4<F>, |a, b| {
    Matrix4::mul(a, b)
});

impl_binop!(Mul, mul, Matrix4<F>, Vector4<F>, Vector4<F>, |a, b| {
    a.transform(b)
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4<F>, Matrix4<F>, |a, b| {
    a.mul_mut(b);
});

impl_approx_via_array!(Matrix4<F>, to_cols_array);
impl_precision_conversions!(Matrix4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{Degrees, Radians};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-10;

    fn perspective() -> Matrix4<f64> {
        Matrix4::perspective_projection(Degrees(60.0), 1.5, 0.1, 100.0, false)
    }

    fn general_matrix() -> Matrix4<f64> {
        Matrix4::new(
            2.0, 0.5, -1.0, 0.1, 0.3, 1.5, 0.2, -0.3, -0.4, 0.7, 3.0, 0.2, 4.0, -2.0, 1.0, 1.5,
        )
    }

    fn with_no_properties(m: Matrix4<f64>) -> Matrix4<f64> {
        let mut m = m;
        m.assume_nothing();
        m
    }

    #[test]
    fn padding_affine_matrix_keeps_properties() {
        let m = Matrix4::<f32>::rotation_y(0.4);
        assert!(m.properties().contains(MatrixProperties::OF_RIGID));
        assert_eq!(m.row(3), Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert!(m.is_affine());
        assert!(!perspective().is_affine());
    }

    #[test]
    fn elementwise_construction_detects_affine_structure() {
        assert_eq!(
            Matrix4::from_cols_array(&Matrix4::<f64>::identity().to_cols_array()).properties(),
            MatrixProperties::OF_IDENTITY
        );
        assert!(general_matrix().properties().is_empty());
    }

    #[test]
    fn setting_bottom_row_element_drops_affine_fast_path() {
        let mut m = Matrix4::<f64>::translation(1.0, 2.0, 3.0);
        m.set_m03(0.5);
        assert!(m.properties().is_empty());
        assert!(!m.is_affine());
        assert_abs_diff_eq!(m.mul(&m.invert()), Matrix4::identity(), epsilon = EPSILON);

        let mut m = Matrix4::<f64>::identity();
        m.set_m30(1.0);
        assert!(m.properties().is_empty());
        assert_abs_diff_eq!(m.mul(&m), Matrix4::translation(2.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn rotation_of_scaled_matrix_is_extracted_after_normalizing() {
        let rotation = Quaternion::rotation_z(FRAC_PI_2);
        let m = Matrix4::translation_rotate_scale(
            &Vector3::new(1.0, 2.0, 3.0),
            &rotation,
            &Vector3::new(2.0, 0.5, 4.0),
        );
        assert!(m.unnormalized_rotation().same_rotation_as(&rotation, EPSILON));
        assert!(m.normalize_3x3().normalized_rotation().same_rotation_as(&rotation, EPSILON));
        assert_abs_diff_eq!(m.normalize_3x3().scale_factors(), Vector3::same(1.0), epsilon = EPSILON);
        assert_abs_diff_eq!(m.normalize_3x3().translation_part(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn general_inverse_times_matrix_is_identity() {
        let m = general_matrix();
        assert_abs_diff_eq!(m.mul(&m.invert()), Matrix4::identity(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.invert().mul(&m), Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn determinant_matches_product_of_determinants() {
        let a = general_matrix();
        let b = Matrix4::from(Matrix4x3::scaling(2.0, 3.0, -1.0)).rotate_x(0.3);
        assert_abs_diff_eq!(
            a.mul(&b).determinant(),
            a.determinant() * b.determinant(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(b.determinant(), -6.0, epsilon = EPSILON);
        assert_abs_diff_eq!(b.determinant_affine(), -6.0, epsilon = EPSILON);
    }

    #[test]
    fn every_inversion_path_agrees_with_general_inverse() {
        let candidates = [
            Matrix4::identity(),
            Matrix4::translation(1.0, -2.0, 3.0),
            Matrix4::rotation_xyz(0.2, -1.0, 2.5).translate(1.0, 2.0, 3.0),
            Matrix4::scaling(2.0, 0.5, 4.0).rotate_z(0.3).translate(-1.0, 0.0, 2.0),
            perspective(),
            Matrix4::frustum_projection(-1.0, 1.0, -0.5, 0.5, 0.5, 50.0, true),
        ];
        for m in candidates {
            assert_abs_diff_eq!(
                m.invert(),
                with_no_properties(m).invert(),
                epsilon = 1e-9
            );
        }
        let ortho = Matrix4::orthographic(-2.0, 3.0, -1.0, 4.0, 0.5, 20.0, true);
        assert_abs_diff_eq!(ortho.invert_ortho(), ortho.invert_general(), epsilon = EPSILON);
    }

    #[test]
    fn perspective_maps_near_and_far_planes_to_clip_range() {
        let m = perspective();
        assert_abs_diff_eq!(
            m.transform_project(&Vector3::new(0.0, 0.0, -0.1)).z(),
            -1.0,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            m.transform_project(&Vector3::new(0.0, 0.0, -100.0)).z(),
            1.0,
            epsilon = 1e-8
        );
        let lh = Matrix4::perspective_projection_lh(Degrees(60.0), 1.5, 0.1, 100.0, true);
        assert_abs_diff_eq!(lh.transform_project(&Vector3::new(0.0, 0.0, 0.1)).z(), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(lh.transform_project(&Vector3::new(0.0, 0.0, 100.0)).z(), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn infinite_far_plane_keeps_points_inside_depth_range() {
        let m = Matrix4::perspective_projection(Radians(FRAC_PI_2), 1.0, 1.0, f64::INFINITY, false);
        assert_abs_diff_eq!(
            m.transform_project(&Vector3::new(0.0, 0.0, -1.0)).z(),
            -1.0,
            epsilon = 1e-9
        );
        let far_away = m.transform_project(&Vector3::new(0.0, 0.0, -1e9)).z();
        assert!(far_away > 0.99 && far_away <= 1.0);
    }

    #[test]
    fn infinite_near_plane_reverses_depth() {
        let m = Matrix4::perspective_projection(Radians(FRAC_PI_2), 1.0, f64::INFINITY, 10.0, true);
        assert_abs_diff_eq!(
            m.transform_project(&Vector3::new(0.0, 0.0, -10.0)).z(),
            1.0,
            epsilon = 1e-9
        );
        let far_away = m.transform_project(&Vector3::new(0.0, 0.0, -1e9)).z();
        assert!(far_away > 0.0 && far_away < 1e-6);

        let lh =
            Matrix4::perspective_projection_lh(Radians(FRAC_PI_2), 1.0, f64::INFINITY, 10.0, false);
        assert_abs_diff_eq!(
            lh.transform_project(&Vector3::new(0.0, 0.0, 10.0)).z(),
            1.0,
            epsilon = 1e-9
        );
        let far_away = lh.transform_project(&Vector3::new(0.0, 0.0, 1e9)).z();
        assert!(far_away > -1.0 && far_away < -1.0 + 1e-6);
        assert_abs_diff_eq!(lh.invert(), lh.invert_general(), epsilon = 1e-9);
    }

    #[test]
    fn perspective_queries_recover_parameters() {
        let m = perspective();
        assert_abs_diff_eq!(m.perspective_near(), 0.1, epsilon = EPSILON);
        assert_abs_diff_eq!(m.perspective_far(), 100.0, epsilon = 1e-8);
        assert_abs_diff_eq!(m.perspective_fov(), 60.0_f64.to_radians(), epsilon = EPSILON);

        let view = Matrix4::view_look_at(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
        assert_abs_diff_eq!(
            m.mul(&view).perspective_origin(),
            Vector3::new(1.0, 2.0, 3.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn frustum_corners_lie_on_near_and_far_planes() {
        let m = Matrix4::frustum_projection(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0, false);
        assert_abs_diff_eq!(
            m.frustum_corner(FrustumCorner::NxNyNz),
            Vector3::new(-1.0, -1.0, -1.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            m.frustum_corner(FrustumCorner::PxPyPz),
            Vector3::new(10.0, 10.0, -10.0),
            epsilon = 1e-8
        );
    }

    #[test]
    fn frustum_symmetric_to_within_tolerance_takes_perspective_inverse() {
        let m = Matrix4::frustum_projection(-1.0, 1.0 + 1e-14, -0.5, 0.5, 0.5, 50.0, false);
        assert!(m.properties().contains(MatrixProperties::PERSPECTIVE));
        assert_abs_diff_eq!(m.invert(), m.invert_general(), epsilon = 1e-10);
    }

    #[test]
    fn asymmetric_frustums_map_edges_onto_clip_boundaries() {
        let rh = Matrix4::frustum_projection(-1.0, 3.0, -2.0, 1.0, 1.0, 10.0, false);
        assert!(!rh.properties().contains(MatrixProperties::PERSPECTIVE));
        assert_abs_diff_eq!(
            rh.transform_project(&Vector3::new(3.0, 1.0, -1.0)),
            Vector3::new(1.0, 1.0, -1.0),
            epsilon = EPSILON
        );
        let lh = Matrix4::frustum_projection_lh(-1.0, 3.0, -2.0, 1.0, 1.0, 10.0, false);
        assert_abs_diff_eq!(
            lh.transform_project(&Vector3::new(3.0, 1.0, 1.0)),
            Vector3::new(1.0, 1.0, -1.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            lh.transform_project(&Vector3::new(-10.0, -20.0, 10.0)),
            Vector3::new(-1.0, -1.0, 1.0),
            epsilon = 1e-8
        );
    }

    #[test]
    fn unprojecting_projected_point_gives_point() {
        let m = perspective().look_at(
            &Vector3::new(3.0, 1.0, 5.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
        let viewport = [10.0, 20.0, 640.0, 480.0];
        let p = Vector3::new(0.5, -0.3, 1.2);
        let window = m.project(&p, &viewport);
        assert_abs_diff_eq!(m.unproject(&window, &viewport), p, epsilon = 1e-8);
        assert_abs_diff_eq!(
            m.invert().unproject_inv(&window, &viewport),
            p,
            epsilon = 1e-8
        );
    }

    #[test]
    fn unprojected_ray_passes_through_projected_point() {
        let m = perspective().look_at(
            &Vector3::new(0.0, 2.0, 6.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
        let viewport = [0.0, 0.0, 800.0, 600.0];
        let p = Vector3::new(0.4, 0.1, -0.6);
        let window = m.project(&p, &viewport);
        let (origin, dir) = m.unproject_ray(window.x(), window.y(), &viewport);
        let to_point = p - origin;
        assert_abs_diff_eq!(to_point.cross(&dir).norm() / dir.norm(), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn frustum_planes_are_unit_and_face_inward() {
        let inside = Vector3::new(0.2, -0.1, -5.0);
        for m in [
            perspective(),
            Matrix4::orthographic(-2.0, 2.0, -2.0, 2.0, 0.5, 50.0, false),
        ] {
            for plane in FrustumPlane::ALL {
                let p = m.frustum_plane(plane);
                assert_abs_diff_eq!(p.normal().norm(), 1.0, epsilon = EPSILON);
                assert!(p.signed_distance(&inside) > 0.0);
            }
        }
    }

    #[test]
    fn culling_tests_accept_inside_and_reject_outside() {
        let m = perspective();
        assert!(m.test_point(&Vector3::new(0.0, 0.0, -10.0)));
        assert!(!m.test_point(&Vector3::new(0.0, 0.0, 10.0)));
        assert!(!m.test_point(&Vector3::new(0.0, 0.0, -200.0)));
        assert!(m.test_sphere(&Vector3::new(0.0, 0.0, 1.0), 2.0));
        assert!(!m.test_sphere(&Vector3::new(0.0, 0.0, 1.0), 0.5));
        assert!(m.test_aab(&Vector3::new(-1.0, -1.0, -11.0), &Vector3::new(1.0, 1.0, -9.0)));
        assert!(m.test_aab(&Vector3::new(-500.0, -500.0, -50.0), &Vector3::new(500.0, 500.0, 50.0)));
        assert!(!m.test_aab(&Vector3::new(-1.0, -1.0, 1.0), &Vector3::new(1.0, 1.0, 2.0)));
    }

    #[test]
    fn point_light_shadow_projects_through_light() {
        let light = Vector4::new(0.0, 10.0, 0.0, 1.0);
        let m = Matrix4::identity().shadow(&light, 0.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(
            m.transform_project(&Vector3::new(1.0, 5.0, 0.0)),
            Vector3::new(2.0, 0.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn affine_compositions_match_padded_4x3_results() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let center = Vector3::new(0.0, 1.0, -1.0);
        let base = Matrix4x3::rotation_zyx(0.3, 0.2, -0.4).translate(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(
            Matrix4::from(base).look_at(&eye, &center, &Vector3::unit_y()),
            Matrix4::from(base.look_at(&eye, &center, &Vector3::unit_y())),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix4::from(base).rotate_x(0.7).scale_local(2.0, 1.0, 3.0),
            Matrix4::from(base.rotate_x(0.7).scale_local(2.0, 1.0, 3.0)),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix4::from(base).translate_local(1.0, -1.0, 0.5).rotate_local_y(1.1),
            Matrix4::from(base.translate_local(1.0, -1.0, 0.5).rotate_local_y(1.1)),
            epsilon = EPSILON
        );
    }

    #[test]
    fn projective_composition_matches_general_product() {
        let view = Matrix4::view_look_at(
            &Vector3::new(3.0, 1.0, 5.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
        let projected = perspective().mul(&view);
        assert_abs_diff_eq!(
            projected.rotate_y(0.4).translate(1.0, 0.0, -1.0),
            projected
                .mul(&Matrix4::rotation_y(0.4))
                .mul(&Matrix4::translation(1.0, 0.0, -1.0)),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            projected.rotate_local_z(0.4).translate_local(0.5, 0.5, 0.0),
            Matrix4::translation(0.5, 0.5, 0.0)
                .mul(&Matrix4::rotation_z(0.4))
                .mul(&projected),
            epsilon = EPSILON
        );
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = general_matrix();
        assert_eq!(m.transpose().column(1), m.row(1));
        assert_eq!(m.transpose().transpose(), m);
        let t = Matrix4::translation(1.0, 2.0, 3.0).rotate_x(0.5).transpose_3x3();
        assert_eq!(t.translation_part(), Vector3::zeros());
        assert_abs_diff_eq!(t.linear_part(), Matrix3::rotation_x(-0.5), epsilon = EPSILON);
    }

    #[test]
    fn converting_to_4x3_drops_bottom_row() {
        let m = Matrix4::translation(1.0, 2.0, 3.0).rotate_z(0.2);
        let affine = m.to_matrix4x3();
        assert_eq!(Matrix4::from(affine), m);
        assert_eq!(affine.properties(), m.properties());
    }

    #[test]
    fn in_place_operations_match_value_returning_ones_exactly() {
        let m = perspective();
        let mut in_place = m;
        in_place
            .look_at_mut(&Vector3::new(1.0, 1.0, 1.0), &Vector3::zeros(), &Vector3::unit_y())
            .rotate_yxz_mut(0.1, 0.2, 0.3)
            .invert_mut();
        let value = m
            .look_at(&Vector3::new(1.0, 1.0, 1.0), &Vector3::zeros(), &Vector3::unit_y())
            .rotate_yxz(0.1, 0.2, 0.3)
            .invert();
        assert_eq!(in_place, value);

        let mut projected = Matrix4::identity();
        projected.perspective_mut(Degrees(45.0), 1.0, 0.1, 10.0, true);
        assert_eq!(
            projected,
            Matrix4::perspective_projection(Degrees(45.0), 1.0, 0.1, 10.0, true)
        );
    }
}
