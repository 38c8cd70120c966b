//! Randomized checks of inversion fast paths and decomposition.

use affinity_math::{Degrees, Matrix3, Matrix4, Matrix4x3, Quaternion, Vector3};
use approx::abs_diff_eq;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

prop_compose! {
    fn angle_strategy()(angle in -PI..PI) -> f64 {
        angle
    }
}

prop_compose! {
    fn direction_strategy()(
        phi in 0.0..TAU,
        theta in 0.0..PI,
    ) -> Vector3<f64> {
        Vector3::new(phi.cos() * theta.sin(), phi.sin() * theta.sin(), theta.cos())
    }
}

prop_compose! {
    fn rotation_strategy()(
        axis in direction_strategy(),
        angle in angle_strategy(),
    ) -> Quaternion<f64> {
        Quaternion::from_axis_angle(&axis, angle)
    }
}

prop_compose! {
    fn translation_strategy()(
        x in -1e2..1e2,
        y in -1e2..1e2,
        z in -1e2..1e2,
    ) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }
}

prop_compose! {
    fn scale_strategy()(
        x in 0.1..10.0,
        y in 0.1..10.0,
        z in 0.1..10.0,
    ) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }
}

prop_compose! {
    fn rigid_transform_strategy()(
        translation in translation_strategy(),
        rotation in rotation_strategy(),
    ) -> Matrix4x3<f64> {
        Matrix4x3::translation_rotate(&translation, &rotation)
    }
}

prop_compose! {
    fn affine_transform_strategy()(
        translation in translation_strategy(),
        rotation in rotation_strategy(),
        scale in scale_strategy(),
    ) -> Matrix4x3<f64> {
        Matrix4x3::translation_rotate_scale(&translation, &rotation, &scale)
    }
}

fn assuming_nothing(matrix: Matrix4x3<f64>) -> Matrix4x3<f64> {
    let mut matrix = matrix;
    matrix.assume_nothing();
    matrix
}

proptest! {
    #[test]
    fn ortho_inverse_agrees_with_general_inverse(
        left in -1e2..-1.0,
        right in 1.0..1e2,
        bottom in -1e2..-1.0,
        top in 1.0..1e2,
        near in 0.0..1.0,
        depth in 1.0..1e3,
        z_zero_to_one in proptest::bool::ANY,
    ) {
        let m = Matrix4x3::orthographic(left, right, bottom, top, near, near + depth, z_zero_to_one);
        let general = assuming_nothing(m).invert();
        prop_assert!(abs_diff_eq!(m.invert_ortho(), general, epsilon = 1e-9));
        let padded = Matrix4::from(m);
        prop_assert!(abs_diff_eq!(padded.invert_ortho(), padded.invert_general(), epsilon = 1e-9));
    }

    #[test]
    fn rigid_inverse_fast_path_agrees_with_general_inverse(m in rigid_transform_strategy()) {
        prop_assert!(abs_diff_eq!(m.invert(), assuming_nothing(m).invert(), epsilon = 1e-9));
    }

    #[test]
    fn unit_scale_inverse_agrees_with_general_inverse(
        translation in translation_strategy(),
        rotation in rotation_strategy(),
        mirror in proptest::bool::ANY,
    ) {
        let m = Matrix4x3::translation_rotate(&translation, &rotation);
        let m = if mirror { m.scale(1.0, -1.0, 1.0) } else { m };
        let general = assuming_nothing(m).invert();
        prop_assert!(abs_diff_eq!(m.invert_unit_scale(), general, epsilon = 1e-9));
    }

    #[test]
    fn affine_inverse_round_trips(m in affine_transform_strategy()) {
        prop_assert!(abs_diff_eq!(m.mul(&m.invert()), Matrix4x3::identity(), epsilon = 1e-8));
        let padded = Matrix4::from(m);
        prop_assert!(abs_diff_eq!(
            padded.invert(),
            padded.invert_general(),
            epsilon = 1e-8
        ));
    }

    #[test]
    fn scale_and_rotation_are_recovered(
        translation in translation_strategy(),
        rotation in rotation_strategy(),
        scale in scale_strategy(),
    ) {
        let m = Matrix4x3::translation_rotate_scale(&translation, &rotation, &scale);
        prop_assert!(abs_diff_eq!(m.translation_part(), translation, epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(m.scale_factors(), scale, epsilon = 1e-9));
        prop_assert!(m.unnormalized_rotation().same_rotation_as(&rotation, 1e-8));
        prop_assert!(m.normalize_3x3().normalized_rotation().same_rotation_as(&rotation, 1e-8));
    }

    #[test]
    fn quaternion_and_matrix_rotate_vectors_alike(
        rotation in rotation_strategy(),
        v in translation_strategy(),
    ) {
        let m = Matrix3::rotation_quaternion(&rotation);
        prop_assert!(abs_diff_eq!(m.transform(&v), rotation.rotate_vector(&v), epsilon = 1e-9));
    }

    #[test]
    fn euler_angles_reproduce_rotation(
        z in angle_strategy(),
        y in -FRAC_PI_2..FRAC_PI_2,
        x in angle_strategy(),
    ) {
        let m = Matrix3::rotation_zyx(z, y, x);
        let angles = m.euler_angles_zyx();
        prop_assert!(abs_diff_eq!(
            Matrix3::rotation_zyx(angles.z(), angles.y(), angles.x()),
            m,
            epsilon = 1e-6
        ));

        let m = Matrix3::rotation_xyz(x, y, z);
        let angles = m.euler_angles_xyz();
        prop_assert!(abs_diff_eq!(
            Matrix3::rotation_xyz(angles.x(), angles.y(), angles.z()),
            m,
            epsilon = 1e-6
        ));
    }

    #[test]
    fn projected_points_unproject_to_themselves(
        view in rigid_transform_strategy(),
        fovy in 30.0f64..100.0,
        x in -0.5f64..0.5,
        y in -0.5f64..0.5,
        depth in 1.0f64..50.0,
    ) {
        let projection = Matrix4::perspective_projection(Degrees(fovy), 1.25, 0.5, 100.0, false);
        let m = projection.mul_matrix4x3(&view);
        let p = view.invert().transform_position(&Vector3::new(x * depth, y * depth, -depth));
        let viewport = [0.0, 0.0, 1024.0, 768.0];
        let window = m.project(&p, &viewport);
        prop_assert!(abs_diff_eq!(m.unproject(&window, &viewport), p, epsilon = 1e-6));
    }

    #[test]
    fn in_place_and_value_forms_are_bit_identical(
        m in affine_transform_strategy(),
        angle in angle_strategy(),
        axis in direction_strategy(),
    ) {
        let mut in_place = m;
        in_place.rotate_axis_mut(angle, &axis).translate_local_mut(1.0, 2.0, 3.0).invert_mut();
        let value = m.rotate_axis(angle, &axis).translate_local(1.0, 2.0, 3.0).invert();
        prop_assert_eq!(in_place, value);
    }
}
