//! Utilities for performance profiling.

pub mod benchmark;
