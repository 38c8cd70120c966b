//! Benchmarks for matrix composition and inversion.

use crate::{
    angle::Degrees,
    matrix::{Matrix4, Matrix4x3},
    vector::Vector3,
};
use affinity_profiling::benchmark::Benchmarker;
use std::hint::black_box;

pub fn mul_matrix4x3(benchmarker: impl Benchmarker) {
    let a = create_affine();
    let b = create_affine().rotate_z(0.7);
    benchmarker.benchmark(&mut || black_box(a).mul(&black_box(b)));
}

pub fn mul_matrix4x3_translation(benchmarker: impl Benchmarker) {
    let a = Matrix4x3::translation(1.0, -2.0, 0.5);
    let b = create_affine();
    benchmarker.benchmark(&mut || black_box(a).mul(&black_box(b)));
}

pub fn mul_matrix4_affine(benchmarker: impl Benchmarker) {
    let a = Matrix4::from(create_affine());
    let b = Matrix4::from(create_affine().rotate_x(0.3));
    benchmarker.benchmark(&mut || black_box(a).mul(&black_box(b)));
}

pub fn mul_matrix4_projective(benchmarker: impl Benchmarker) {
    let a = create_perspective();
    let b = Matrix4::from(create_affine());
    benchmarker.benchmark(&mut || black_box(a).mul(&black_box(b)));
}

pub fn invert_matrix4x3(benchmarker: impl Benchmarker) {
    let a = create_affine();
    benchmarker.benchmark(&mut || black_box(a).invert());
}

pub fn invert_matrix4x3_assuming_nothing(benchmarker: impl Benchmarker) {
    let mut a = Matrix4x3::rotation_xyz(0.1, 0.2, 0.3).translate(1.0, 2.0, 3.0);
    a.assume_nothing();
    benchmarker.benchmark(&mut || black_box(a).invert());
}

pub fn invert_matrix4_perspective(benchmarker: impl Benchmarker) {
    let a = create_perspective();
    benchmarker.benchmark(&mut || black_box(a).invert());
}

pub fn invert_matrix4_general(benchmarker: impl Benchmarker) {
    let a = create_perspective().mul(&Matrix4::from(create_affine()));
    benchmarker.benchmark(&mut || black_box(a).invert());
}

pub fn rotate_xyz_matrix4x3(benchmarker: impl Benchmarker) {
    let a = create_affine();
    benchmarker.benchmark(&mut || black_box(a).rotate_xyz(0.4, -1.2, 2.1));
}

pub fn look_at_matrix4(benchmarker: impl Benchmarker) {
    let a = create_perspective();
    let eye = Vector3::new(3.0, 2.0, 5.0);
    let up = Vector3::unit_y();
    benchmarker.benchmark(&mut || black_box(a).look_at(&eye, &Vector3::zeros(), &up));
}

fn create_affine() -> Matrix4x3<f32> {
    Matrix4x3::translation(1.0, 2.0, 3.0)
        .rotate_xyz(0.3, -0.5, 1.1)
        .scale(2.0, 0.5, 1.5)
}

fn create_perspective() -> Matrix4<f32> {
    Matrix4::perspective_projection(Degrees(70.0), 16.0 / 9.0, 0.1, 500.0, false)
}
