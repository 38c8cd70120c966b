//! Column-major vector, matrix and quaternion math for 3D graphics
//! transforms.

#[macro_use]
mod macros;

pub mod angle;
pub mod axis_angle;
pub mod bounds;
pub mod buffer;
pub mod matrix;
pub mod num;
pub mod plane;
pub mod quaternion;
pub mod scalar;
pub mod vector;

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use angle::{Angle, Degrees, Radians};
pub use axis_angle::{AxisAngle, AxisAnglef, AxisAngled};
pub use bounds::{AxisAlignedBox, AxisAlignedBoxf, AxisAlignedBoxd};
pub use matrix::{
    FrustumCorner, FrustumPlane, Matrix3, Matrix3d, Matrix3f, Matrix3x2, Matrix3x2d, Matrix3x2f,
    Matrix4, Matrix4d, Matrix4f, Matrix4x3, Matrix4x3d, Matrix4x3f, MatrixProperties,
};
pub use num::Float;
pub use plane::{Plane, Planed, Planef};
pub use quaternion::{Quaternion, Quaterniond, Quaternionf};
pub use vector::{Vector2, Vector2d, Vector2f, Vector3, Vector3d, Vector3f, Vector4, Vector4d, Vector4f};
