//! Quaternion for 3D rotations

use crate::matrix::{Mat3, Mat4};
use crate::vector::{Vec3, Vec4};
use core::ops::{Add, Mul, MulAssign, Neg};

/// Quaternion representing a 3D rotation.
///
/// Only unit quaternions describe rotations; `normalize` is never applied
/// implicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Create from axis and angle (radians).
    ///
    /// A near-zero axis yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len < crate::consts::EPSILON {
            return Self::IDENTITY;
        }
        let (sin, cos) = (angle * 0.5).sin_cos();
        let axis = axis / len;
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(sin, 0.0, 0.0, cos)
    }

    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(0.0, sin, 0.0, cos)
    }

    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(0.0, 0.0, sin, cos)
    }

    /// Extract the rotation of an orthonormal 3x3 matrix.
    ///
    /// Solves directly for whichever component has the largest magnitude
    /// (picked from the four diagonal combinations) and derives the other
    /// three from sums and differences of the off-diagonal terms. This keeps
    /// precision when `w` is close to zero.
    pub fn from_mat3(m: &Mat3) -> Self {
        let r = &m.rows;
        let candidates = [
            r[0][0] - r[1][1] - r[2][2],
            -r[0][0] + r[1][1] - r[2][2],
            -r[0][0] - r[1][1] + r[2][2],
            r[0][0] + r[1][1] + r[2][2],
        ];

        let mut largest = 0;
        for i in 1..4 {
            if candidates[i] > candidates[largest] {
                largest = i;
            }
        }

        let val = (candidates[largest] + 1.0).sqrt() * 0.5;
        let mult = 0.25 / val;

        let xy = (r[1][0] + r[0][1]) * mult;
        let xz = (r[0][2] + r[2][0]) * mult;
        let yz = (r[2][1] + r[1][2]) * mult;
        let wx = (r[1][2] - r[2][1]) * mult;
        let wy = (r[2][0] - r[0][2]) * mult;
        let wz = (r[0][1] - r[1][0]) * mult;

        match largest {
            0 => Self::new(val, xy, xz, wx),
            1 => Self::new(xy, val, yz, wy),
            2 => Self::new(xz, yz, val, wz),
            _ => Self::new(wx, wy, wz, val),
        }
    }

    /// Rotation of the upper-left 3x3 block of a 4x4 matrix
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_mat3(&m.rotation())
    }

    #[inline]
    pub fn to_mat3(self) -> Mat3 {
        Mat3::from_quat(self)
    }

    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_quat(self)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize the quaternion (identity for a zero quaternion)
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse (identity for a zero quaternion)
    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 0.0 {
            self.conjugate() * (1.0 / len_sq)
        } else {
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Spherical linear interpolation along the shorter arc
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut dot = self.dot(other);
        let mut other = other;

        if dot < 0.0 {
            other = -other;
            dot = -dot;
        }

        let (s1, s2) = if 1.0 - dot > crate::consts::EPSILON {
            let theta = dot.min(1.0).acos();
            let sin_theta = theta.sin();
            (((1.0 - t) * theta).sin() / sin_theta, (t * theta).sin() / sin_theta)
        } else {
            (1.0 - t, t)
        };

        self * s1 + other * s2
    }

    /// Scale the rotation angle by `exponent`.
    ///
    /// Returns the identity for a rotation that is already (almost) the
    /// identity or for a non-positive exponent.
    pub fn pow(self, exponent: f32) -> Self {
        const EPS: f32 = 1.0e-7;
        if self.w.abs() > 1.0 - EPS || exponent < EPS {
            return Self::IDENTITY;
        }

        let angle = self.w.acos();
        let scaled = angle * exponent;
        let mult = scaled.sin() / angle.sin();
        Self::new(self.x * mult, self.y * mult, self.z * mult, scaled.cos())
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    pub fn is_nan(self) -> bool {
        self.to_vec4().is_nan()
    }

    /// Componentwise comparison with an absolute tolerance
    pub fn abs_diff_eq(self, other: Self, epsilon: f32) -> bool {
        self.to_vec4().abs_diff_eq(other.to_vec4(), epsilon)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec4(self.to_vec4() + rhs.to_vec4())
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::from_vec4(self.to_vec4() * rhs)
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quaternion_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!((Quat::IDENTITY * v - v).length() < 1e-6);
    }

    #[test]
    fn test_quaternion_rotation_y() {
        let q = Quat::from_rotation_y(FRAC_PI_2);
        assert!((q * Vec3::X - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_matrix_agrees_with_rotate() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, -2.0, 0.5), 1.1);
        let v = Vec3::new(0.3, 0.7, -1.2);
        assert!((v * q.to_mat3()).abs_diff_eq(q * v, 1e-5));
    }

    #[test]
    fn test_from_mat3_near_half_turn() {
        // w is ~0 here, so the x branch must be taken
        let q = Quat::from_rotation_x(PI);
        let back = Quat::from_mat3(&q.to_mat3());
        assert!(back.abs_diff_eq(q, 1e-5) || back.abs_diff_eq(-q, 1e-5));
    }

    #[test]
    fn test_quaternion_slerp() {
        let q1 = Quat::IDENTITY;
        let q2 = Quat::from_rotation_y(PI);
        let mid = q1.slerp(q2, 0.5);
        let expected = Quat::from_rotation_y(FRAC_PI_2);
        assert!(mid.dot(expected).abs() > 0.999);
    }

    #[test]
    fn test_pow_halves_angle() {
        let q = Quat::from_rotation_z(1.0);
        let half = q.pow(0.5);
        assert!(half.abs_diff_eq(Quat::from_rotation_z(0.5), 1e-5));
        assert_eq!(Quat::IDENTITY.pow(3.0), Quat::IDENTITY);
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.8);
        let p = q * q.inverse();
        assert!(p.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
