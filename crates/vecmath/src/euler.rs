//! Euler angle composition and extraction
//!
//! Angles are packed in a [`Vec3`] as `(x, y, z)` radians, whatever the
//! order. The order names the axes from outermost to innermost rotation:
//! `ZXY` turns a row vector about Y first, then X, then Z.
//!
//! Extraction returns the middle angle in `[-pi/2, pi/2]`. At gimbal lock
//! the middle axis lines up the other two, so the Y angle is reported as
//! zero and the whole remaining turn goes to the outer axis.

use crate::matrix::Mat3;
use crate::vector::Vec3;

/// Sine of the middle angle beyond which the outer and inner axes coincide
const GIMBAL_THRESHOLD: f32 = 1.0 - 1e-6;

impl Mat3 {
    /// Rotation about Y, then X, then Z
    pub fn from_euler_zxy(angles: Vec3) -> Self {
        Self::from_rotation_y(angles.y)
            * Self::from_rotation_x(angles.x)
            * Self::from_rotation_z(angles.z)
    }

    /// Rotation about Y, then Z, then X
    pub fn from_euler_xzy(angles: Vec3) -> Self {
        Self::from_rotation_y(angles.y)
            * Self::from_rotation_z(angles.z)
            * Self::from_rotation_x(angles.x)
    }

    /// Angles that rebuild this rotation through [`Mat3::from_euler_zxy`].
    ///
    /// The matrix must be a proper rotation; scale or shear is not removed.
    pub fn to_euler_zxy(&self) -> Vec3 {
        let m = &self.rows;
        let sin_x = crate::clamp(m[1][2], -1.0, 1.0);
        let x = sin_x.asin();

        if sin_x.abs() >= GIMBAL_THRESHOLD {
            log::trace!("to_euler_zxy at gimbal lock, sin(x) = {}", sin_x);
            return Vec3::new(x, 0.0, m[0][1].atan2(m[0][0]));
        }

        let y = (-m[0][2]).atan2(m[2][2]);
        let z = (-m[1][0]).atan2(m[1][1]);
        Vec3::new(x, y, z)
    }

    /// Angles that rebuild this rotation through [`Mat3::from_euler_xzy`].
    ///
    /// The matrix must be a proper rotation; scale or shear is not removed.
    pub fn to_euler_xzy(&self) -> Vec3 {
        let m = &self.rows;
        let sin_z = crate::clamp(-m[1][0], -1.0, 1.0);
        let z = sin_z.asin();

        if sin_z.abs() >= GIMBAL_THRESHOLD {
            log::trace!("to_euler_xzy at gimbal lock, sin(z) = {}", sin_z);
            let sign = sin_z.signum();
            return Vec3::new((sign * m[0][2]).atan2(sign * m[0][1]), 0.0, z);
        }

        let x = m[1][2].atan2(m[1][1]);
        let y = m[2][0].atan2(m[0][0]);
        Vec3::new(x, y, z)
    }
}
