//! Scalar helpers shared by the vector, quaternion and matrix code.

use crate::num::Float;

/// Whether the given value is zero to within [`Float::TOLERANCE`].
#[inline]
pub fn is_zero<F: Float>(value: F) -> bool {
    value.abs() <= F::TOLERANCE
}

/// Whether the given value is one to within [`Float::TOLERANCE`].
#[inline]
pub fn is_one<F: Float>(value: F) -> bool {
    (value - F::ONE).abs() <= F::TOLERANCE
}

/// Whether the two values are equal to within [`Float::TOLERANCE`] scaled by
/// the larger of their magnitudes (or an absolute tolerance when both are
/// small).
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F) -> bool {
    let scale = F::ONE.max(a.abs()).max(b.abs());
    (a - b).abs() <= F::TOLERANCE * scale
}

/// Computes the cosine of `angle` from its already known sine, taking the
/// sign from the quadrant the angle lies in.
#[inline]
pub fn cos_from_sin<F: Float>(sin: F, angle: F) -> F {
    let cos = (F::ONE - sin * sin).max(F::ZERO).sqrt();
    let a = angle + F::FRAC_PI_2;
    let b = a - (a / F::TWO_PI).floor() * F::TWO_PI;
    if b >= F::PI { -cos } else { cos }
}

/// Like [`Float::asin`], but clamps the argument to `[-1, 1]` first so that
/// values slightly outside the domain due to round-off do not produce NaN.
#[inline]
pub fn safe_asin<F: Float>(value: F) -> F {
    value.max(F::NEG_ONE).min(F::ONE).asin()
}

/// Like [`Float::acos`], but clamps the argument to `[-1, 1]` first.
#[inline]
pub fn safe_acos<F: Float>(value: F) -> F {
    value.max(F::NEG_ONE).min(F::ONE).acos()
}

/// The reciprocal of the square root of the given value.
#[inline]
pub fn inv_sqrt<F: Float>(value: F) -> F {
    value.sqrt().recip()
}

/// Linearly interpolates between `a` and `b`, giving `a` for `t = 0` and `b`
/// for `t = 1`.
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}

/// Computes `a * b - c * d` with one rounding error less than the naive
/// expression by using a fused multiply-add for the compensation term.
#[inline]
pub fn difference_of_products<F: Float>(a: F, b: F, c: F, d: F) -> F {
    let cd = c * d;
    let error = (-c).mul_add(d, cd);
    let difference = a.mul_add(b, -cd);
    difference + error
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn is_zero_and_is_one_use_tolerance() {
        assert!(is_zero(1e-7_f32));
        assert!(!is_zero(1e-5_f32));
        assert!(is_one(1.0_f64 + 1e-13));
        assert!(!is_one(1.0_f64 + 1e-9));
    }

    #[test]
    fn approx_eq_is_relative_for_large_values() {
        assert!(approx_eq(1e6_f32, 1e6_f32 + 0.5));
        assert!(!approx_eq(1.0_f32, 1.001));
    }

    #[test]
    fn cos_from_sin_matches_cos_in_all_quadrants() {
        for angle in [0.3_f64, 2.0, 3.5, 5.0, -0.7, -2.5, 7.0] {
            assert_abs_diff_eq!(cos_from_sin(angle.sin(), angle), angle.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn safe_asin_clamps_out_of_range_input() {
        assert_abs_diff_eq!(safe_asin(1.0000001_f32), f32::FRAC_PI_2);
        assert_abs_diff_eq!(safe_asin(-1.0000001_f32), -f32::FRAC_PI_2);
        assert_abs_diff_eq!(safe_acos(1.0000001_f64), 0.0);
    }

    #[test]
    fn difference_of_products_matches_naive_formula() {
        assert_abs_diff_eq!(difference_of_products(3.0_f64, 4.0, 2.0, 5.0), 2.0);
        assert_abs_diff_eq!(inv_sqrt(4.0_f32), 0.5);
        assert_abs_diff_eq!(lerp(2.0_f32, 4.0, 0.25), 2.5);
    }
}
