//! Matrices.
//!
//! All matrices are stored in column-major order, and element `m<c><r>` is
//! the element in column `c` and row `r`. Vectors are columns, so a matrix
//! `M` transforms a vector `v` as `M * v`.
//!
//! Composition methods without a suffix right-multiply (`self * T`), so `T`
//! is applied to vectors *before* the existing transform. Methods with a
//! `_local` suffix left-multiply (`T * self`), applying `T` *after* it.
//!
//! Every operation comes in two forms. The plain form borrows `self` and
//! returns the result, leaving the caller to decide where to store it
//! (including back into an operand, as in `m = m.translate(..)`). The `_mut`
//! form overwrites `self` and returns it for chaining. The two forms produce
//! bit-identical results.
//!
//! Numerically degenerate input (singular matrices, zero-length axes or
//! directions) is not an error. It gives non-finite elements that propagate
//! through subsequent operations.

mod matrix3;
mod matrix3x2;
mod matrix4;
mod matrix4x3;
mod properties;

pub use matrix3::{Matrix3, Matrix3d, Matrix3f};
pub use matrix3x2::{Matrix3x2, Matrix3x2d, Matrix3x2f};
pub use matrix4::{Matrix4, Matrix4d, Matrix4f};
pub use matrix4x3::{Matrix4x3, Matrix4x3d, Matrix4x3f};
pub use properties::MatrixProperties;

use crate::{
    num::Float,
    plane::Plane,
    quaternion::Quaternion,
    scalar,
    vector::{Vector3, Vector4},
};

/// One of the six clip planes of a projection or view-projection matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// The plane `x = -w` in clip space.
    NegativeX,
    /// The plane `x = w` in clip space.
    PositiveX,
    NegativeY,
    PositiveY,
    /// The near plane, `z = -w` in clip space.
    NegativeZ,
    /// The far plane, `z = w` in clip space.
    PositiveZ,
}

/// One of the eight corners of the clip-space cube `[-1, 1]³`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrustumCorner {
    NxNyNz,
    PxNyNz,
    PxPyNz,
    NxPyNz,
    PxNyPz,
    NxNyPz,
    NxPyPz,
    PxPyPz,
}

impl FrustumPlane {
    pub const ALL: [Self; 6] = [
        Self::NegativeX,
        Self::PositiveX,
        Self::NegativeY,
        Self::PositiveY,
        Self::NegativeZ,
        Self::PositiveZ,
    ];
}

impl FrustumCorner {
    pub const ALL: [Self; 8] = [
        Self::NxNyNz,
        Self::PxNyNz,
        Self::PxPyNz,
        Self::NxPyNz,
        Self::PxNyPz,
        Self::NxNyPz,
        Self::NxPyPz,
        Self::PxPyPz,
    ];

    /// The corner in normalized device coordinates.
    pub fn ndc<F: Float>(self) -> Vector3<F> {
        let (x, y, z) = match self {
            Self::NxNyNz => (-1, -1, -1),
            Self::PxNyNz => (1, -1, -1),
            Self::PxPyNz => (1, 1, -1),
            Self::NxPyNz => (-1, 1, -1),
            Self::PxNyPz => (1, -1, 1),
            Self::NxNyPz => (-1, -1, 1),
            Self::NxPyPz => (-1, 1, 1),
            Self::PxPyPz => (1, 1, 1),
        };
        let sign = |s: i32| if s < 0 { F::NEG_ONE } else { F::ONE };
        Vector3::new(sign(x), sign(y), sign(z))
    }
}

/// Computes the clip plane selected by `plane` from the rows of a projection
/// matrix. The result is normalized and its normal points into the frustum.
fn frustum_plane_from_rows<F: Float>(rows: &[Vector4<F>; 4], plane: FrustumPlane) -> Plane<F> {
    let coefficients = unnormalized_plane(rows, plane);
    Plane::new(
        coefficients.x(),
        coefficients.y(),
        coefficients.z(),
        coefficients.w(),
    )
    .normalized()
}

/// Whether the point lies in the positive halfspace of every clip plane
/// computed from the given rows. The planes are not normalized.
fn rows_contain_point<F: Float>(rows: &[Vector4<F>; 4], point: &Vector3<F>) -> bool {
    let homogeneous = point.extended(F::ONE);
    FrustumPlane::ALL
        .iter()
        .all(|&plane| unnormalized_plane(rows, plane).dot(&homogeneous) >= F::ZERO)
}

fn unnormalized_plane<F: Float>(rows: &[Vector4<F>; 4], plane: FrustumPlane) -> Vector4<F> {
    let [row0, row1, row2, row3] = rows;
    match plane {
        FrustumPlane::NegativeX => row3 + row0,
        FrustumPlane::PositiveX => row3 - row0,
        FrustumPlane::NegativeY => row3 + row1,
        FrustumPlane::PositiveY => row3 - row1,
        FrustumPlane::NegativeZ => row3 + row2,
        FrustumPlane::PositiveZ => row3 - row2,
    }
}

/// Whether any part of the sphere lies inside (or on the boundary of) every
/// clip plane computed from the given rows.
fn rows_intersect_sphere<F: Float>(rows: &[Vector4<F>; 4], center: &Vector3<F>, radius: F) -> bool {
    FrustumPlane::ALL
        .iter()
        .all(|&plane| frustum_plane_from_rows(rows, plane).signed_distance(center) >= -radius)
}

/// Conservative box culling against the clip planes computed from the given
/// rows. For each plane the box corner farthest along the plane normal is
/// tested, so boxes that straddle a plane are reported as intersecting.
fn rows_intersect_aab<F: Float>(rows: &[Vector4<F>; 4], min: &Vector3<F>, max: &Vector3<F>) -> bool {
    FrustumPlane::ALL.iter().all(|&plane| {
        let p = unnormalized_plane(rows, plane);
        let pick = |n: F, lo: F, hi: F| if n < F::ZERO { lo } else { hi };
        p.x() * pick(p.x(), min.x(), max.x())
            + p.y() * pick(p.y(), min.y(), max.y())
            + p.z() * pick(p.z(), min.z(), max.z())
            >= -p.w()
    })
}

/// Extracts the rotation quaternion from the three columns of a matrix
/// assumed to be orthonormal, using the numerically stable branch for the
/// largest diagonal element.
fn quaternion_from_orthonormal_columns<F: Float>(columns: &[Vector3<F>; 3]) -> Quaternion<F> {
    let [c0, c1, c2] = columns;
    let (m00, m01, m02) = (c0.x(), c0.y(), c0.z());
    let (m10, m11, m12) = (c1.x(), c1.y(), c1.z());
    let (m20, m21, m22) = (c2.x(), c2.y(), c2.z());

    let trace = m00 + m11 + m22;
    if trace >= F::ZERO {
        let s = (trace + F::ONE).sqrt();
        let w = s * F::ONE_HALF;
        let s = F::ONE_HALF / s;
        Quaternion::new((m12 - m21) * s, (m20 - m02) * s, (m01 - m10) * s, w)
    } else if m00 >= m11 && m00 >= m22 {
        let s = (m00 - (m11 + m22) + F::ONE).sqrt();
        let x = s * F::ONE_HALF;
        let s = F::ONE_HALF / s;
        Quaternion::new(x, (m10 + m01) * s, (m02 + m20) * s, (m12 - m21) * s)
    } else if m11 >= m22 {
        let s = (m11 - (m22 + m00) + F::ONE).sqrt();
        let y = s * F::ONE_HALF;
        let s = F::ONE_HALF / s;
        Quaternion::new((m10 + m01) * s, y, (m21 + m12) * s, (m20 - m02) * s)
    } else {
        let s = (m22 - (m00 + m11) + F::ONE).sqrt();
        let z = s * F::ONE_HALF;
        let s = F::ONE_HALF / s;
        Quaternion::new((m02 + m20) * s, (m21 + m12) * s, z, (m01 - m10) * s)
    }
}

fn quaternion_from_unnormalized_columns<F: Float>(columns: &[Vector3<F>; 3]) -> Quaternion<F> {
    quaternion_from_orthonormal_columns(&columns.map(|column| column.normalized()))
}

/// Computes the angles `(x, y, z)` such that the rotation part equals
/// `Rz(z) * Ry(y) * Rx(x)`.
///
/// In gimbal lock (`y = ±π/2`) only `z - x` (for `+π/2`) or `z + x` (for
/// `-π/2`) is determined. The x-angle is then reported as zero and the
/// whole remaining rotation is assigned to z.
fn euler_angles_zyx_from_columns<F: Float>(columns: &[Vector3<F>; 3]) -> Vector3<F> {
    let [c0, c1, c2] = columns;
    let cos_y = c0.x().hypot(c0.y());
    if scalar::is_zero(cos_y) {
        Vector3::new(
            F::ZERO,
            scalar::safe_asin(-c0.z()),
            (-c1.x()).atan2(c1.y()),
        )
    } else {
        Vector3::new(
            c1.z().atan2(c2.z()),
            (-c0.z()).atan2(cos_y),
            c0.y().atan2(c0.x()),
        )
    }
}

/// Computes the angles `(x, y, z)` such that the rotation part equals
/// `Rx(x) * Ry(y) * Rz(z)`. In gimbal lock the x-angle is reported as zero.
fn euler_angles_xyz_from_columns<F: Float>(columns: &[Vector3<F>; 3]) -> Vector3<F> {
    let [c0, c1, c2] = columns;
    let cos_y = c2.y().hypot(c2.z());
    if scalar::is_zero(cos_y) {
        Vector3::new(F::ZERO, scalar::safe_asin(c2.x()), c0.y().atan2(c1.y()))
    } else {
        Vector3::new(
            (-c2.y()).atan2(c2.z()),
            c2.x().atan2(cos_y),
            (-c1.x()).atan2(c0.x()),
        )
    }
}

/// Builds the orthonormal basis `(left, up, dir)` used by the look-along and
/// rotate-towards constructions. `dir` is normalized, `left` is the
/// normalized `up × dir` and the returned up vector is `dir × left`.
fn orthonormal_basis<F: Float>(dir: &Vector3<F>, up: &Vector3<F>) -> [Vector3<F>; 3] {
    let dir = dir.normalized();
    let left = up.cross(&dir).normalized();
    let up = dir.cross(&left);
    [left, up, dir]
}

/// Maps window coordinates to normalized device coordinates for the given
/// `[x, y, width, height]` viewport.
fn window_to_ndc<F: Float>(win_x: F, win_y: F, viewport: &[F; 4]) -> (F, F) {
    (
        (win_x - viewport[0]) / viewport[2] * F::TWO - F::ONE,
        (win_y - viewport[1]) / viewport[3] * F::TWO - F::ONE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn frustum_corners_in_ndc_are_unit_cube_corners() {
        for corner in FrustumCorner::ALL {
            let ndc = corner.ndc::<f32>();
            assert_eq!(ndc.component_abs(), Vector3::same(1.0));
        }
        assert_eq!(FrustumCorner::PxNyPz.ndc::<f64>(), Vector3::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn quaternion_from_columns_handles_every_branch() {
        for q in [
            Quaternion::rotation_x(0.3_f64),
            Quaternion::rotation_x(3.0),
            Quaternion::rotation_y(3.0),
            Quaternion::rotation_z(3.0),
        ] {
            let columns = [
                q.rotate_vector(&Vector3::unit_x()),
                q.rotate_vector(&Vector3::unit_y()),
                q.rotate_vector(&Vector3::unit_z()),
            ];
            assert!(quaternion_from_orthonormal_columns(&columns).same_rotation_as(&q, 1e-12));
        }
    }

    #[test]
    fn basis_for_look_along_is_orthonormal() {
        let [left, up, dir] = orthonormal_basis(&Vector3::new(1.0_f64, 0.5, -2.0), &Vector3::unit_y());
        assert_abs_diff_eq!(left.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(up.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(left.dot(&dir), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(up.dot(&dir), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(left.cross(&up), dir, epsilon = 1e-12);
    }
}
