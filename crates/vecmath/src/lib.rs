//! # vecmath - Vector, Matrix and Quaternion Algebra
//!
//! Floating-point value types for 2D/3D/4D vectors, quaternions and
//! 2x2/3x3/4x4 matrices, plus the numerically sensitive routines built on
//! them: matrix inversion, 3x3 eigenvalues, Euler angle extraction and
//! quaternion/rotation-matrix conversion.
//!
//! Matrices are row-major and act on row vectors (`v * M`).

pub mod vector;
pub mod matrix;
pub mod quaternion;
pub mod decompose;
pub mod euler;
pub mod equation;
pub mod error;

pub use vector::*;
pub use matrix::*;
pub use quaternion::*;
pub use equation::{solve_cubic, solve_quadratic, Roots};
pub use error::{MathError, Result};

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = PI * 2.0;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

pub mod prelude {
    pub use crate::vector::{IVec3, Vec2, Vec3, Vec4};
    pub use crate::matrix::{Mat2, Mat3, Mat4};
    pub use crate::quaternion::Quat;
    pub use crate::equation::Roots;
    pub use crate::error::MathError;
    pub use crate::{radians, degrees, lerp, clamp};
}
