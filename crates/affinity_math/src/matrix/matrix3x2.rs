//! 2D affine matrices.

use super::Matrix3;
use crate::{
    num::Float,
    vector::{Vector2, Vector3},
};

/// A 3x2 matrix representing a 2D affine transform. It behaves as a 3x3
/// matrix whose bottom row is implicitly `(0, 0, 1)`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3x2<F> {
    columns: [Vector2<F>; 3],
}

pub type Matrix3x2f = Matrix3x2<f32>;
pub type Matrix3x2d = Matrix3x2<f64>;

impl<F: Float> Matrix3x2<F> {
    #[inline]
    pub fn new(m00: F, m01: F, m10: F, m11: F, m20: F, m21: F) -> Self {
        Self::from_columns(
            Vector2::new(m00, m01),
            Vector2::new(m10, m11),
            Vector2::new(m20, m21),
        )
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO, F::ONE, F::ZERO, F::ZERO)
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::from_columns(Vector2::zeros(), Vector2::zeros(), Vector2::zeros())
    }

    #[inline]
    pub const fn from_columns(
        column_1: Vector2<F>,
        column_2: Vector2<F>,
        translation: Vector2<F>,
    ) -> Self {
        Self {
            columns: [column_1, column_2, translation],
        }
    }

    #[inline]
    pub fn from_cols_array(elements: &[F; 6]) -> Self {
        let [m00, m01, m10, m11, m20, m21] = *elements;
        Self::new(m00, m01, m10, m11, m20, m21)
    }

    #[inline]
    pub fn to_cols_array(&self) -> [F; 6] {
        let [c0, c1, c2] = &self.columns;
        [c0.x(), c0.y(), c1.x(), c1.y(), c2.x(), c2.y()]
    }

    #[inline]
    pub fn translation(x: F, y: F) -> Self {
        Self::from_columns(Vector2::unit_x(), Vector2::unit_y(), Vector2::new(x, y))
    }

    #[inline]
    pub fn scaling(x: F, y: F) -> Self {
        Self::new(x, F::ZERO, F::ZERO, y, F::ZERO, F::ZERO)
    }

    #[inline]
    pub fn scaling_uniform(scale: F) -> Self {
        Self::scaling(scale, scale)
    }

    /// Creates a counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, F::ZERO, F::ZERO)
    }

    /// Creates the mapping of the rectangle `[left, right] x [bottom, top]`
    /// onto `[-1, 1]²`.
    pub fn from_view(left: F, right: F, bottom: F, top: F) -> Self {
        Self::new(
            F::TWO / (right - left),
            F::ZERO,
            F::ZERO,
            F::TWO / (top - bottom),
            (left + right) / (left - right),
            (bottom + top) / (bottom - top),
        )
    }

    #[inline]
    pub fn translation_part(&self) -> Vector2<F> {
        self.columns[2]
    }

    #[inline]
    pub fn set_translation(&mut self, x: F, y: F) -> &mut Self {
        self.columns[2] = Vector2::new(x, y);
        self
    }

    #[inline]
    pub fn determinant(&self) -> F {
        self.columns[0].perp_dot(&self.columns[1])
    }

    /// Computes the inverse. A singular matrix gives non-finite elements.
    pub fn invert(&self) -> Self {
        let [c0, c1, c2] = &self.columns;
        let s = self.determinant().recip();
        Self::new(
            c1.y() * s,
            -c0.y() * s,
            -c1.x() * s,
            c0.x() * s,
            (c1.x() * c2.y() - c2.x() * c1.y()) * s,
            (c2.x() * c0.y() - c0.x() * c2.y()) * s,
        )
    }

    /// Computes `self * right`.
    pub fn mul(&self, right: &Self) -> Self {
        let [r0, r1, r2] = &right.columns;
        Self::from_columns(
            self.transform_direction(r0),
            self.transform_direction(r1),
            self.transform_position(r2),
        )
    }

    /// Computes `left * self`.
    #[inline]
    pub fn mul_local(&self, left: &Self) -> Self {
        left.mul(self)
    }

    pub fn lerp(&self, other: &Self, t: F) -> Self {
        let [a0, a1, a2] = &self.columns;
        let [b0, b1, b2] = &other.columns;
        Self::from_columns(a0.lerp(b0, t), a1.lerp(b1, t), a2.lerp(b2, t))
    }

    /// Computes `self * T` where `T` translates by `(x, y)`.
    pub fn translate(&self, x: F, y: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(*c0, *c1, c0 * x + c1 * y + c2)
    }

    /// Computes `T * self` where `T` translates by `(x, y)`.
    pub fn translate_local(&self, x: F, y: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(*c0, *c1, c2 + Vector2::new(x, y))
    }

    pub fn scale(&self, x: F, y: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c0 * x, c1 * y, *c2)
    }

    #[inline]
    pub fn scale_uniform(&self, scale: F) -> Self {
        self.scale(scale, scale)
    }

    /// Computes `S * self`, which also scales the translation.
    pub fn scale_local(&self, x: F, y: F) -> Self {
        let factors = Vector2::new(x, y);
        Self {
            columns: self.columns.map(|column| column.component_mul(&factors)),
        }
    }

    /// Computes `self * T(origin) * S * T(-origin)`, scaling about the given
    /// origin before the existing transform.
    pub fn scale_around(&self, x: F, y: F, origin_x: F, origin_y: F) -> Self {
        self.translate(origin_x, origin_y)
            .scale(x, y)
            .translate(-origin_x, -origin_y)
    }

    /// Computes `T(origin) * S * T(-origin) * self`.
    pub fn scale_around_local(&self, x: F, y: F, origin_x: F, origin_y: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        let factors = Vector2::new(x, y);
        let origin = Vector2::new(origin_x, origin_y);
        Self::from_columns(
            c0.component_mul(&factors),
            c1.component_mul(&factors),
            (c2 - origin).component_mul(&factors) + origin,
        )
    }

    /// Computes `self * R` where `R` rotates counter-clockwise by `angle`.
    pub fn rotate(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.rotate_sin_cos(sin, cos)
    }

    /// Computes `R * self`, which also rotates the translation.
    pub fn rotate_local(&self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            columns: self.columns.map(|v| {
                Vector2::new(cos * v.x() - sin * v.y(), sin * v.x() + cos * v.y())
            }),
        }
    }

    /// Rotates by `angle` about the point `(x, y)` before the existing
    /// transform.
    pub fn rotate_about(&self, angle: F, x: F, y: F) -> Self {
        self.translate(x, y).rotate(angle).translate(-x, -y)
    }

    /// Applies the rotation that turns direction `from` onto direction `to`
    /// before the existing transform. Neither direction has to be
    /// normalized.
    pub fn rotate_to(&self, from: &Vector2<F>, to: &Vector2<F>) -> Self {
        let dot = from.dot(to);
        let det = from.perp_dot(to);
        let inv_len = dot.hypot(det).recip();
        self.rotate_sin_cos(det * inv_len, dot * inv_len)
    }

    /// Shears x proportionally to y: `x' = x + y_factor * y`.
    pub fn shear_x(&self, y_factor: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(*c0, c0 * y_factor + c1, *c2)
    }

    /// Shears y proportionally to x: `y' = y + x_factor * x`.
    pub fn shear_y(&self, x_factor: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c0 + c1 * x_factor, *c1, *c2)
    }

    /// Computes `self * V` where `V` maps `[left, right] x [bottom, top]`
    /// onto `[-1, 1]²`.
    pub fn view(&self, left: F, right: F, bottom: F, top: F) -> Self {
        self.mul(&Self::from_view(left, right, bottom, top))
    }

    /// Transforms the given homogeneous vector, whose z-component acts as the
    /// weight of the translation.
    #[inline]
    pub fn transform(&self, vector: &Vector3<F>) -> Vector3<F> {
        let [c0, c1, c2] = &self.columns;
        (c0 * vector.x() + c1 * vector.y() + c2 * vector.z()).extended(vector.z())
    }

    #[inline]
    pub fn transform_position(&self, position: &Vector2<F>) -> Vector2<F> {
        self.transform_direction(position) + self.columns[2]
    }

    #[inline]
    pub fn transform_direction(&self, direction: &Vector2<F>) -> Vector2<F> {
        let [c0, c1, _] = &self.columns;
        c0 * direction.x() + c1 * direction.y()
    }

    /// Returns the point that this matrix maps onto the origin.
    pub fn origin(&self) -> Vector2<F> {
        self.invert().columns[2]
    }

    /// Computes the bounds `[min_x, min_y, max_x, max_y]` of the region that
    /// this matrix maps onto `[-1, 1]²`.
    pub fn view_area(&self) -> [F; 4] {
        let inverse = self.invert();
        let mut min = Vector2::same(F::INFINITY);
        let mut max = Vector2::same(F::NEG_INFINITY);
        for (x, y) in [
            (F::NEG_ONE, F::NEG_ONE),
            (F::ONE, F::NEG_ONE),
            (F::NEG_ONE, F::ONE),
            (F::ONE, F::ONE),
        ] {
            let corner = inverse.transform_position(&Vector2::new(x, y));
            min = min.component_min(&corner);
            max = max.component_max(&corner);
        }
        [min.x(), min.y(), max.x(), max.y()]
    }

    /// Returns the corner that maps onto `(-1, -1)` together with the two
    /// edge vectors spanning the region that maps onto `[-1, 1]²`.
    pub fn span(&self) -> (Vector2<F>, Vector2<F>, Vector2<F>) {
        let inverse = self.invert();
        let [c0, c1, _] = &inverse.columns;
        let corner = inverse.transform_position(&Vector2::same(F::NEG_ONE));
        (corner, c0 * F::TWO, c1 * F::TWO)
    }

    /// Returns the unit direction that this matrix maps onto `+x`.
    pub fn positive_x(&self) -> Vector2<F> {
        self.invert().columns[0].normalized()
    }

    pub fn positive_y(&self) -> Vector2<F> {
        self.invert().columns[1].normalized()
    }

    /// Like [`positive_x`](Self::positive_x), but assumes the linear part is
    /// orthonormal.
    #[inline]
    pub fn normalized_positive_x(&self) -> Vector2<F> {
        let [c0, c1, _] = &self.columns;
        Vector2::new(c1.y(), -c0.y())
    }

    #[inline]
    pub fn normalized_positive_y(&self) -> Vector2<F> {
        let [c0, c1, _] = &self.columns;
        Vector2::new(-c1.x(), c0.x())
    }

    /// Maps the given window coordinates back through this matrix. The
    /// viewport is given as `[x, y, width, height]`.
    pub fn unproject(&self, win_x: F, win_y: F, viewport: &[F; 4]) -> Vector2<F> {
        self.invert().unproject_inv(win_x, win_y, viewport)
    }

    /// Like [`unproject`](Self::unproject), but `self` is the already
    /// inverted matrix.
    pub fn unproject_inv(&self, win_x: F, win_y: F, viewport: &[F; 4]) -> Vector2<F> {
        let (ndc_x, ndc_y) = super::window_to_ndc(win_x, win_y, viewport);
        self.transform_position(&Vector2::new(ndc_x, ndc_y))
    }

    /// Whether the point maps into `[-1, 1]²`, boundary included.
    pub fn test_point(&self, x: F, y: F) -> bool {
        let point = Vector3::new(x, y, F::ONE);
        self.clip_planes()
            .iter()
            .all(|plane| plane.dot(&point) >= F::ZERO)
    }

    /// Whether any part of the circle maps into `[-1, 1]²`.
    pub fn test_circle(&self, x: F, y: F, radius: F) -> bool {
        let point = Vector3::new(x, y, F::ONE);
        self.clip_planes().iter().all(|plane| {
            let inv_len = plane.x().hypot(plane.y()).recip();
            plane.dot(&point) * inv_len >= -radius
        })
    }

    /// Conservative test for whether the axis-aligned rectangle intersects
    /// or lies inside the region mapping onto `[-1, 1]²`.
    pub fn test_aar(&self, min_x: F, min_y: F, max_x: F, max_y: F) -> bool {
        self.clip_planes().iter().all(|plane| {
            let x = if plane.x() < F::ZERO { min_x } else { max_x };
            let y = if plane.y() < F::ZERO { min_y } else { max_y };
            plane.x() * x + plane.y() * y >= -plane.z()
        })
    }

    /// The four edges of the clip square as `(a, b, c)` with the inside
    /// where `a*x + b*y + c >= 0`.
    fn clip_planes(&self) -> [Vector3<F>; 4] {
        let [c0, c1, c2] = &self.columns;
        [
            Vector3::new(c0.x(), c1.x(), F::ONE + c2.x()),
            Vector3::new(-c0.x(), -c1.x(), F::ONE - c2.x()),
            Vector3::new(c0.y(), c1.y(), F::ONE + c2.y()),
            Vector3::new(-c0.y(), -c1.y(), F::ONE - c2.y()),
        ]
    }

    fn rotate_sin_cos(&self, sin: F, cos: F) -> Self {
        let [c0, c1, c2] = &self.columns;
        Self::from_columns(c0 * cos + c1 * sin, c1 * cos - c0 * sin, *c2)
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> Matrix3x2<G> {
        Matrix3x2 {
            columns: self.columns.map(|column| column.map_elements(&f)),
        }
    }
}

impl<F: Float> Default for Matrix3x2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<Matrix3<F>> for Matrix3x2<F> {
    /// Takes the upper two rows.
    fn from(matrix: Matrix3<F>) -> Self {
        let columns = *matrix.columns();
        Self {
            columns: columns.map(|column| column.xy()),
        }
    }
}

impl_element_accessors!(Matrix3x2<F>, [
    m00, set_m00 => 0, 0;
    m01, set_m01 => 0, 1;
    m10, set_m10 => 1, 0;
    m11, set_m11 => 1, 1;
    m20, set_m20 => 2, 0;
    m21, set_m21 => 2, 1;
]);

impl_matrix_indexing!(
    Matrix3x2<F>,
    column: Vector2,
    row: Vector3,
    n_columns: 3,
    n_rows: 2,
    column_indices: [0, 1, 2]
);

impl_in_place_ops!(Matrix3x2<F>;
    invert_mut => invert();
    mul_mut => mul(right: &Self);
    mul_local_mut => mul_local(left: &Self);
    lerp_mut => lerp(other: &Self, t: F);
    translate_mut => translate(x: F, y: F);
    translate_local_mut => translate_local(x: F, y: F);
    scale_mut => scale(x: F, y: F);
    scale_uniform_mut => scale_uniform(scale: F);
    scale_local_mut => scale_local(x: F, y: F);
    scale_around_mut => scale_around(x: F, y: F, origin_x: F, origin_y: F);
    scale_around_local_mut => scale_around_local(x: F, y: F, origin_x: F, origin_y: F);
    rotate_mut => rotate(angle: F);
    rotate_local_mut => rotate_local(angle: F);
    rotate_about_mut => rotate_about(angle: F, x: F, y: F);
    rotate_to_mut => rotate_to(from: &Vector2<F>, to: &Vector2<F>);
    shear_x_mut => shear_x(y_factor: F);
    shear_y_mut => shear_y(x_factor: F);
    view_mut => view(left: F, right: F, bottom: F, top: F);
);

impl_binop!(Mul, mul, Matrix3x2<F>, Matrix3x2<F>, Matrix3x2<F>, |a, b| {
    Matrix3x2::mul(a, b)
});

impl_binop!(Mul, mul, Matrix3x2<F>, Vector3<F>, Vector3<F>, |a, b| {
    a.transform(b)
});

impl_pod!(Matrix3x2);
impl_approx_via_array!(Matrix3x2<F>, to_cols_array);
impl_precision_conversions!(Matrix3x2);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn general_matrix() -> Matrix3x2<f64> {
        Matrix3x2::new(1.5, 0.4, -0.3, 2.0, 5.0, -1.0)
    }

    #[test]
    fn rows_include_translation_column() {
        let m = general_matrix();
        assert_eq!(m.row(0), Vector3::new(1.5, -0.3, 5.0));
        assert_eq!(m.row(1), Vector3::new(0.4, 2.0, -1.0));
        assert_eq!(m.try_row(2), None);
        assert_eq!(m.m21(), -1.0);
    }

    #[test]
    fn inverse_undoes_transform() {
        let m = general_matrix();
        assert_abs_diff_eq!(m.mul(&m.invert()), Matrix3x2::identity(), epsilon = EPSILON);
        let p = Vector2::new(0.7, -2.0);
        assert_abs_diff_eq!(
            m.invert().transform_position(&m.transform_position(&p)),
            p,
            epsilon = EPSILON
        );
    }

    #[test]
    fn multiplication_matches_homogeneous_3x3_product() {
        let a = general_matrix();
        let b = Matrix3x2::rotation(0.6).translate(1.0, 2.0);
        let a3 = Matrix3::new(1.5, 0.4, 0.0, -0.3, 2.0, 0.0, 5.0, -1.0, 1.0);
        let (sin, cos) = 0.6_f64.sin_cos();
        let b3 = Matrix3::rotation_z(0.6).mul(&Matrix3::new(
            1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 2.0, 1.0,
        ));
        assert_abs_diff_eq!(b.m00(), cos, epsilon = EPSILON);
        assert_abs_diff_eq!(b.m01(), sin, epsilon = EPSILON);
        assert_abs_diff_eq!(a.mul(&b), Matrix3x2::from(a3.mul(&b3)), epsilon = EPSILON);
    }

    #[test]
    fn translate_right_multiplies_and_translate_local_left_multiplies() {
        let m = Matrix3x2::scaling(2.0, 3.0);
        assert_eq!(m.translate(1.0, 1.0).translation_part(), Vector2::new(2.0, 3.0));
        assert_eq!(m.translate_local(1.0, 1.0).translation_part(), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn rotating_about_point_keeps_point_fixed() {
        let m = Matrix3x2::identity().rotate_about(FRAC_PI_2, 1.0, 1.0);
        assert_abs_diff_eq!(
            m.transform_position(&Vector2::new(1.0, 1.0)),
            Vector2::new(1.0, 1.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            m.transform_position(&Vector2::new(2.0, 1.0)),
            Vector2::new(1.0, 2.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotate_local_matches_left_multiplication() {
        let m = general_matrix();
        assert_abs_diff_eq!(
            m.rotate_local(0.8),
            Matrix3x2::rotation(0.8).mul(&m),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotate_to_turns_from_direction_onto_to_direction() {
        let from = Vector2::new(1.0, 1.0);
        let to = Vector2::new(-3.0, 0.5);
        let m = Matrix3x2::identity().rotate_to(&from, &to);
        assert_abs_diff_eq!(m.transform_direction(&from.normalized()), to.normalized(), epsilon = EPSILON);
    }

    #[test]
    fn scale_around_local_keeps_origin_fixed() {
        let m = Matrix3x2::translation(3.0, 4.0).scale_around_local(2.0, 0.5, 1.0, 1.0);
        assert_abs_diff_eq!(
            m,
            Matrix3x2::translation(1.0, 1.0)
                .mul(&Matrix3x2::scaling(2.0, 0.5))
                .mul(&Matrix3x2::translation(-1.0, -1.0))
                .mul(&Matrix3x2::translation(3.0, 4.0)),
            epsilon = EPSILON
        );
        let around = Matrix3x2::identity().scale_around(2.0, 2.0, 1.0, -1.0);
        assert_abs_diff_eq!(
            around.transform_position(&Vector2::new(1.0, -1.0)),
            Vector2::new(1.0, -1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn shearing_adds_scaled_other_coordinate() {
        let p = Vector2::new(2.0, 3.0);
        assert_eq!(
            Matrix3x2::identity().shear_x(0.5).transform_position(&p),
            Vector2::new(3.5, 3.0)
        );
        assert_eq!(
            Matrix3x2::identity().shear_y(2.0).transform_position(&p),
            Vector2::new(2.0, 7.0)
        );
    }

    #[test]
    fn view_area_of_view_matrix_is_view_rectangle() {
        let m = Matrix3x2::from_view(-2.0, 4.0, 1.0, 3.0);
        let area = m.view_area();
        assert_abs_diff_eq!(area[0], -2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(area[1], 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(area[2], 4.0, epsilon = EPSILON);
        assert_abs_diff_eq!(area[3], 3.0, epsilon = EPSILON);

        let (corner, x_axis, y_axis) = m.span();
        assert_abs_diff_eq!(corner, Vector2::new(-2.0, 1.0), epsilon = EPSILON);
        assert_abs_diff_eq!(x_axis, Vector2::new(6.0, 0.0), epsilon = EPSILON);
        assert_abs_diff_eq!(y_axis, Vector2::new(0.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn culling_tests_use_inclusive_view_rectangle() {
        let m = Matrix3x2::from_view(0.0, 10.0, 0.0, 5.0);
        assert!(m.test_point(10.0, 5.0));
        assert!(m.test_point(3.0, 2.0));
        assert!(!m.test_point(10.5, 2.0));
        assert!(m.test_circle(11.0, 2.0, 1.1));
        assert!(!m.test_circle(11.0, 2.0, 0.9));
        assert!(m.test_aar(-5.0, -5.0, 0.0, 0.0));
        assert!(m.test_aar(-5.0, -5.0, 20.0, 20.0));
        assert!(!m.test_aar(-5.0, -5.0, -1.0, 20.0));
    }

    #[test]
    fn unproject_matches_unproject_of_inverse() {
        let m = Matrix3x2::from_view(-3.0, 5.0, -1.0, 2.0).rotate(0.3);
        let viewport = [0.0, 0.0, 800.0, 600.0];
        assert_abs_diff_eq!(
            m.unproject(200.0, 450.0, &viewport),
            m.invert().unproject_inv(200.0, 450.0, &viewport),
            epsilon = EPSILON
        );
        let center = Matrix3x2::from_view(-3.0, 5.0, -1.0, 2.0).unproject(400.0, 300.0, &viewport);
        assert_abs_diff_eq!(center, Vector2::new(1.0, 0.5), epsilon = EPSILON);
    }

    #[test]
    fn positive_axes_of_rotation_match_normalized_shortcut() {
        let m = Matrix3x2::rotation(1.2).translate(3.0, 1.0);
        assert_abs_diff_eq!(m.positive_x(), m.normalized_positive_x(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.positive_y(), m.normalized_positive_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(
            m.transform_direction(&m.positive_x()),
            Vector2::unit_x(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn origin_maps_onto_origin() {
        let m = general_matrix();
        assert_abs_diff_eq!(m.transform_position(&m.origin()), Vector2::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn in_place_operations_match_value_returning_ones_exactly() {
        let m = general_matrix();
        let mut in_place = m;
        in_place.rotate_mut(0.4).shear_x_mut(0.2).view_mut(-1.0, 3.0, -2.0, 2.0);
        assert_eq!(in_place, m.rotate(0.4).shear_x(0.2).view(-1.0, 3.0, -2.0, 2.0));
    }
}
