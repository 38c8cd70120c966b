//! Benchmarks.

pub mod decomposition;
pub mod matrix;
