//! Planes.

use crate::{num::Float, vector::Vector3};

/// A plane in 3D satisfying `a*x + b*y + c*z + d = 0`.
///
/// The normal `(a, b, c)` points into the positive halfspace. Planes
/// extracted from matrices have unit normals, so that
/// [`signed_distance`](Self::signed_distance) gives true distances.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane<F> {
    a: F,
    b: F,
    c: F,
    d: F,
}

pub type Planef = Plane<f32>;
pub type Planed = Plane<f64>;

impl<F: Float> Plane<F> {
    #[inline]
    pub const fn new(a: F, b: F, c: F, d: F) -> Self {
        Self { a, b, c, d }
    }

    /// Creates the plane with the given normal passing through the given
    /// point.
    #[inline]
    pub fn from_normal_and_point(normal: &Vector3<F>, point: &Vector3<F>) -> Self {
        Self::new(normal.x(), normal.y(), normal.z(), -normal.dot(point))
    }

    #[inline]
    pub fn a(&self) -> F {
        self.a
    }

    #[inline]
    pub fn b(&self) -> F {
        self.b
    }

    #[inline]
    pub fn c(&self) -> F {
        self.c
    }

    #[inline]
    pub fn d(&self) -> F {
        self.d
    }

    #[inline]
    pub fn normal(&self) -> Vector3<F> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Returns the coefficients as `[a, b, c, d]`.
    #[inline]
    pub fn to_array(&self) -> [F; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the same plane with all coefficients divided by the length of
    /// the normal.
    #[inline]
    pub fn normalized(&self) -> Self {
        let inv_norm = self.normal().norm().recip();
        Self::new(
            self.a * inv_norm,
            self.b * inv_norm,
            self.c * inv_norm,
            self.d * inv_norm,
        )
    }

    /// Evaluates the plane equation at the given point. For a unit normal
    /// this is the signed distance, positive in the halfspace the normal
    /// points into.
    #[inline]
    pub fn signed_distance(&self, point: &Vector3<F>) -> F {
        self.normal().dot(point) + self.d
    }

    #[inline]
    fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> Plane<G> {
        Plane::new(f(self.a), f(self.b), f(self.c), f(self.d))
    }
}

impl_pod!(Plane);
impl_approx_via_array!(Plane<F>, to_array);
impl_precision_conversions!(Plane);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn signed_distance_is_positive_on_normal_side() {
        let plane = Plane::from_normal_and_point(&Vector3::unit_y(), &Vector3::new(0.0_f32, 2.0, 0.0));
        assert_abs_diff_eq!(plane.signed_distance(&Vector3::new(5.0, 3.0, -1.0)), 1.0);
        assert_abs_diff_eq!(plane.signed_distance(&Vector3::new(0.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn normalizing_plane_preserves_its_points() {
        let plane = Plane::new(0.0_f64, 0.0, 4.0, -8.0).normalized();
        assert_abs_diff_eq!(plane, Plane::new(0.0, 0.0, 1.0, -2.0));
        assert_abs_diff_eq!(plane.signed_distance(&Vector3::new(1.0, 1.0, 2.0)), 0.0);
    }
}
