//! Benchmark targets, runnable through the `affinity_math` binary or
//! criterion.

pub mod benchmarks;

affinity_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    matrix => {
        mul_matrix4x3,
        mul_matrix4x3_translation,
        mul_matrix4_affine,
        mul_matrix4_projective,
        invert_matrix4x3,
        invert_matrix4x3_assuming_nothing,
        invert_matrix4_perspective,
        invert_matrix4_general,
        rotate_xyz_matrix4x3,
        look_at_matrix4,
    },
    decomposition => {
        normalized_rotation_matrix3,
        unnormalized_rotation_matrix3,
        euler_angles_zyx_matrix4x3,
        scale_factors_matrix4x3,
        frustum_planes_matrix4,
    },
}

/// Runs the given target for at least `duration` seconds, starting once
/// `delay` seconds have passed.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    affinity_profiling::benchmark::benchmark(
        target.label(),
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}
