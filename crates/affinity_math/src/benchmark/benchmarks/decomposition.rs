//! Benchmarks for extracting rotations, angles and planes from matrices.

use crate::{
    angle::Degrees,
    matrix::{FrustumPlane, Matrix3, Matrix4, Matrix4x3},
    vector::Vector3,
};
use affinity_profiling::benchmark::Benchmarker;
use std::hint::black_box;

pub fn normalized_rotation_matrix3(benchmarker: impl Benchmarker) {
    let m = Matrix3::<f32>::rotation_zyx(0.8, -0.4, 2.0);
    benchmarker.benchmark(&mut || black_box(m).normalized_rotation());
}

pub fn unnormalized_rotation_matrix3(benchmarker: impl Benchmarker) {
    let m = Matrix3::<f32>::rotation_zyx(0.8, -0.4, 2.0).scale(2.0, 3.0, 0.5);
    benchmarker.benchmark(&mut || black_box(m).unnormalized_rotation());
}

pub fn euler_angles_zyx_matrix4x3(benchmarker: impl Benchmarker) {
    let m = Matrix4x3::<f32>::rotation_zyx(0.8, -0.4, 2.0).translate(1.0, 2.0, 3.0);
    benchmarker.benchmark(&mut || black_box(m).euler_angles_zyx());
}

pub fn scale_factors_matrix4x3(benchmarker: impl Benchmarker) {
    let m = Matrix4x3::<f32>::rotation_zyx(0.8, -0.4, 2.0).scale(2.0, 3.0, 0.5);
    benchmarker.benchmark(&mut || black_box(m).scale_factors());
}

pub fn frustum_planes_matrix4(benchmarker: impl Benchmarker) {
    let m = Matrix4::<f32>::perspective_projection(Degrees(70.0), 1.5, 0.1, 500.0, false)
        .look_at(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
    benchmarker.benchmark(&mut || {
        FrustumPlane::ALL.map(|plane| black_box(m).frustum_plane(plane))
    });
}
