//! Vectors.

use crate::num::Float;
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<F> {
    x: F,
    y: F,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<F> {
    x: F,
    y: F,
    z: F,
}

/// A 4-dimensional vector, typically a homogeneous position (`w = 1`) or
/// direction (`w = 0`).
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4<F> {
    x: F,
    y: F,
    z: F,
    w: F,
}

pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;
pub type Vector4f = Vector4<f32>;
pub type Vector4d = Vector4<f64>;

macro_rules! impl_vector {
    ($t:ident, $n:literal, [$($c:ident: $c_mut:ident: $idx:literal),+]) => {
        impl<F: Float> $t<F> {
            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($c: F),+) -> Self {
                Self { $($c),+ }
            }

            /// Creates a vector with all components equal to zero.
            #[inline]
            pub fn zeros() -> Self {
                Self::same(F::ZERO)
            }

            /// Creates a vector with all components equal to the given value.
            #[inline]
            pub fn same(value: F) -> Self {
                Self { $($c: value),+ }
            }

            /// Creates a vector from the given array of components.
            #[inline]
            pub fn from_array([$($c),+]: [F; $n]) -> Self {
                Self { $($c),+ }
            }

            /// Returns the components as an array.
            #[inline]
            pub fn to_array(&self) -> [F; $n] {
                [$(self.$c),+]
            }

            $(
                #[inline]
                pub fn $c(&self) -> F {
                    self.$c
                }

                #[inline]
                pub fn $c_mut(&mut self) -> &mut F {
                    &mut self.$c
                }
            )+

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> F {
                F::ZERO $(+ self.$c * other.$c)+
            }

            /// Computes the squared Euclidean length of the vector.
            #[inline]
            pub fn norm_squared(&self) -> F {
                self.dot(self)
            }

            /// Computes the Euclidean length of the vector.
            #[inline]
            pub fn norm(&self) -> F {
                self.norm_squared().sqrt()
            }

            /// Returns the vector scaled to unit length. A zero vector gives
            /// NaN components.
            #[inline]
            pub fn normalized(&self) -> Self {
                self * self.norm().recip()
            }

            /// Computes the Euclidean distance to another point.
            #[inline]
            pub fn distance(&self, other: &Self) -> F {
                (self - other).norm()
            }

            #[inline]
            pub fn component_abs(&self) -> Self {
                self.mapped(F::abs)
            }

            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self { $($c: self.$c.min(other.$c)),+ }
            }

            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self { $($c: self.$c.max(other.$c)),+ }
            }

            #[inline]
            pub fn component_mul(&self, other: &Self) -> Self {
                Self { $($c: self.$c * other.$c),+ }
            }

            /// Returns the largest component.
            #[inline]
            pub fn max_component(&self) -> F {
                F::NEG_INFINITY $(.max(self.$c))+
            }

            /// Linearly interpolates towards `other`, giving `self` for `t = 0`
            /// and `other` for `t = 1`.
            #[inline]
            pub fn lerp(&self, other: &Self, t: F) -> Self {
                Self { $($c: crate::scalar::lerp(self.$c, other.$c, t)),+ }
            }

            /// Whether every component is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                true $(&& self.$c.is_finite())+
            }

            /// Applies the given function to each component.
            #[inline]
            pub fn mapped(&self, f: impl Fn(F) -> F) -> Self {
                Self { $($c: f(self.$c)),+ }
            }

            #[inline]
            pub(crate) fn map_elements<G: Float>(&self, f: impl Fn(F) -> G) -> $t<G> {
                $t { $($c: f(self.$c)),+ }
            }
        }

        impl<F: Float> From<[F; $n]> for $t<F> {
            fn from(array: [F; $n]) -> Self {
                Self::from_array(array)
            }
        }

        impl<F: Float> From<$t<F>> for [F; $n] {
            fn from(vector: $t<F>) -> Self {
                vector.to_array()
            }
        }

        impl<F: Float> Index<usize> for $t<F> {
            type Output = F;

            /// # Panics
            /// If the index exceeds the number of components.
            #[inline]
            fn index(&self, index: usize) -> &F {
                match index {
                    $($idx => &self.$c,)+
                    _ => panic!(
                        "index {index} out of bounds for {}-dimensional vector",
                        $n
                    ),
                }
            }
        }

        impl<F: Float> IndexMut<usize> for $t<F> {
            /// # Panics
            /// If the index exceeds the number of components.
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut F {
                match index {
                    $($idx => &mut self.$c,)+
                    _ => panic!(
                        "index {index} out of bounds for {}-dimensional vector",
                        $n
                    ),
                }
            }
        }

        impl<F: Float> fmt::Display for $t<F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let components = [$(self.$c),+];
                write!(f, "(")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{component}")?;
                }
                write!(f, ")")
            }
        }

        impl_binop!(Add, add, $t<F>, $t<F>, $t<F>, |a, b| {
            $t { $($c: a.$c + b.$c),+ }
        });

        impl_binop!(Sub, sub, $t<F>, $t<F>, $t<F>, |a, b| {
            $t { $($c: a.$c - b.$c),+ }
        });

        impl_scalar_binop!(Mul, mul, $t<F>, |a, b| {
            $t { $($c: a.$c * b),+ }
        });

        impl_scalar_binop!(Div, div, $t<F>, |a, b| {
            $t { $($c: a.$c / b),+ }
        });

        impl_unary_op!(Neg, neg, $t<F>, $t<F>, |val| {
            $t { $($c: -val.$c),+ }
        });

        impl_binop_assign!(AddAssign, add_assign, $t<F>, $t<F>, |a, b| {
            $(a.$c = a.$c + b.$c;)+
        });

        impl_binop_assign!(SubAssign, sub_assign, $t<F>, $t<F>, |a, b| {
            $(a.$c = a.$c - b.$c;)+
        });

        impl<F: Float> ::std::ops::MulAssign<F> for $t<F> {
            #[inline]
            fn mul_assign(&mut self, rhs: F) {
                $(self.$c = self.$c * rhs;)+
            }
        }

        impl_scalar_lhs_mul!($t);
        impl_pod!($t);
        impl_approx_via_array!($t<F>, to_array);
        impl_precision_conversions!($t);
    };
}

impl_vector!(Vector2, 2, [x: x_mut: 0, y: y_mut: 1]);
impl_vector!(Vector3, 3, [x: x_mut: 0, y: y_mut: 1, z: z_mut: 2]);
impl_vector!(Vector4, 4, [x: x_mut: 0, y: y_mut: 1, z: z_mut: 2, w: w_mut: 3]);

impl<F: Float> Vector2<F> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE)
    }

    /// Computes the z-component of the cross product of the two vectors
    /// extended with zero z-components.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> F {
        crate::scalar::difference_of_products(self.x, other.y, self.y, other.x)
    }

    /// Appends the given z-component.
    #[inline]
    pub fn extended(&self, z: F) -> Vector3<F> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<F: Float> Vector3<F> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE, F::ZERO)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ONE)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Appends the given w-component.
    #[inline]
    pub fn extended(&self, w: F) -> Vector4<F> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn xy(&self) -> Vector2<F> {
        Vector2::new(self.x, self.y)
    }
}

impl<F: Float> Vector4<F> {
    #[inline]
    pub fn unit_w() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE)
    }

    /// Drops the w-component.
    #[inline]
    pub fn xyz(&self) -> Vector3<F> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Divides the x-, y- and z-components by w.
    #[inline]
    pub fn projected(&self) -> Vector3<F> {
        let inv_w = self.w.recip();
        Vector3::new(self.x * inv_w, self.y * inv_w, self.z * inv_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vector_arithmetic_works() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(4.0_f32, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::same(3.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_abs_diff_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn cross_product_of_unit_axes_follows_right_hand_rule() {
        assert_eq!(
            Vector3::<f64>::unit_x().cross(&Vector3::unit_y()),
            Vector3::unit_z()
        );
        assert_eq!(
            Vector3::<f64>::unit_z().cross(&Vector3::unit_x()),
            Vector3::unit_y()
        );
    }

    #[test]
    fn normalizing_gives_unit_length() {
        let v = Vector4::new(1.0_f64, -2.0, 3.0, 0.5);
        assert_abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalizing_zero_vector_gives_nan() {
        assert!(!Vector2::<f32>::zeros().normalized().is_finite());
    }

    #[test]
    fn indexing_matches_accessors() {
        let mut v = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(v[2], v.z());
        v[3] = 7.0;
        assert_eq!(v.w(), 7.0);
        *v.x_mut() = 0.5;
        assert_eq!(v.to_array(), [0.5, 2.0, 3.0, 7.0]);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let v = Vector2::new(1.0_f32, 2.0);
        let _ = v[2];
    }

    #[test]
    fn widening_and_narrowing_vectors_work() {
        let v = Vector3::new(0.1_f32, 0.2, 0.3);
        let wide: Vector3<f64> = v.widened();
        assert_eq!(wide, Vector3::from(v));
        assert_eq!(wide.narrowed::<f32>(), v);
    }

    #[test]
    fn projecting_homogeneous_vector_divides_by_w() {
        let v = Vector4::new(2.0_f32, 4.0, 6.0, 2.0);
        assert_eq!(v.projected(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn vectors_can_be_cast_to_bytes() {
        let vectors = [Vector3::new(1.0_f32, 2.0, 3.0); 2];
        let floats: &[f32] = bytemuck::cast_slice(&vectors);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    }
}
