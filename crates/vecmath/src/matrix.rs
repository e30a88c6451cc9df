//! Matrix types
//!
//! All matrices are stored row-major and addressed as `(row, column)`.
//! Points and directions are row vectors: `v * M` transforms `v`, and a
//! 4x4 transform keeps its translation in row 3.

use crate::quaternion::Quat;
use crate::vector::{Vec2, Vec3, Vec4};
use core::ops::{Index, IndexMut, Mul, MulAssign};

/// Storage-level operations shared by every square matrix size.
macro_rules! impl_matrix_common {
    ($t:ident, $n:literal) => {
        impl $t {
            pub const ZERO: Self = Self { rows: [[0.0; $n]; $n] };

            #[inline]
            pub const fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                Self { rows }
            }

            #[inline]
            pub fn to_rows(&self) -> [[f32; $n]; $n] {
                self.rows
            }

            /// Element at `(row, col)`, `None` when out of range
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> Option<f32> {
                self.rows.get(row).and_then(|r| r.get(col)).copied()
            }

            #[inline]
            pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f32> {
                self.rows.get_mut(row).and_then(|r| r.get_mut(col))
            }

            pub fn transpose(&self) -> Self {
                let mut out = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.rows[col][row] = self.rows[row][col];
                    }
                }
                out
            }

            pub fn is_nan(&self) -> bool {
                self.rows.iter().flatten().any(|v| v.is_nan())
            }

            /// Elementwise comparison with an absolute tolerance
            pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.rows
                    .iter()
                    .flatten()
                    .zip(other.rows.iter().flatten())
                    .all(|(a, b)| (a - b).abs() <= epsilon)
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl Index<(usize, usize)> for $t {
            type Output = f32;

            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                assert!(
                    row < $n && col < $n,
                    "{} index out of range: ({}, {})",
                    stringify!($t),
                    row,
                    col
                );
                &self.rows[row][col]
            }
        }

        impl IndexMut<(usize, usize)> for $t {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                assert!(
                    row < $n && col < $n,
                    "{} index out of range: ({}, {})",
                    stringify!($t),
                    row,
                    col
                );
                &mut self.rows[row][col]
            }
        }

        impl Mul for $t {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                let mut out = Self::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        out.rows[row][col] =
                            (0..$n).map(|k| self.rows[row][k] * rhs.rows[k][col]).sum();
                    }
                }
                out
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;

            fn mul(mut self, rhs: f32) -> Self {
                self.rows.iter_mut().flatten().for_each(|v| *v *= rhs);
                self
            }
        }

        impl MulAssign for $t {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}

/// 2x2 matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2 {
    pub rows: [[f32; 2]; 2],
}

impl Mat2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self { rows: [[m00, m01], [m10, m11]] }
    }

    /// Rotation by `angle` radians (counter-clockwise for row vectors)
    pub fn from_rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos)
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }
}

/// 3x3 matrix - rotations and linear maps
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    pub rows: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self::from_diagonal(Vec3::ONE);

    #[inline]
    pub const fn from_row_vectors(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self {
            rows: [[r0.x, r0.y, r0.z], [r1.x, r1.y, r1.z], [r2.x, r2.y, r2.z]],
        }
    }

    #[inline]
    pub const fn from_diagonal(d: Vec3) -> Self {
        Self {
            rows: [[d.x, 0.0, 0.0], [0.0, d.y, 0.0], [0.0, 0.0, d.z]],
        }
    }

    #[inline]
    pub fn row(&self, row: usize) -> Vec3 {
        Vec3::from_array(self.rows[row])
    }

    /// Upper-left 3x3 block of a 4x4 matrix
    pub fn from_mat4(m: &Mat4) -> Self {
        m.rotation()
    }

    /// Rotation matrix of a quaternion.
    ///
    /// Closed-form expansion; only a unit quaternion yields an orthonormal
    /// result.
    pub fn from_quat(q: Quat) -> Self {
        let xx = q.x * q.x;
        let yy = q.y * q.y;
        let zz = q.z * q.z;
        let xy = q.x * q.y;
        let xz = q.x * q.z;
        let yz = q.y * q.z;
        let wx = q.w * q.x;
        let wy = q.w * q.y;
        let wz = q.w * q.z;

        Self::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)],
            [2.0 * (xy - wz), 1.0 - 2.0 * (zz + xx), 2.0 * (yz + wx)],
            [2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, cos, sin], [0.0, -sin, cos]])
    }

    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([[cos, 0.0, -sin], [0.0, 1.0, 0.0], [sin, 0.0, cos]])
    }

    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation about an arbitrary axis (normalized internally)
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(Quat::from_axis_angle(axis, angle))
    }

    /// Orientation whose local `-Z` points along `forward` and whose local
    /// `+Y` leans towards `up`.
    ///
    /// Rows are the local X, Y and Z axes. Returns the identity when
    /// `forward` and `up` are parallel or either is zero.
    pub fn look_at(forward: Vec3, up: Vec3) -> Self {
        let z = -forward.normalize();
        let x = up.cross(z);
        if x.length_squared() <= crate::consts::EPSILON * crate::consts::EPSILON {
            return Self::IDENTITY;
        }
        let x = x.normalize();
        let y = z.cross(x);
        Self::from_row_vectors(x, y, z)
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    /// The 2x2 matrix left after deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn minor(&self, row: usize, col: usize) -> Mat2 {
        assert!(row < 3 && col < 3, "Mat3 minor out of range: ({}, {})", row, col);
        let mut out = Mat2::ZERO;
        for i in 0..2 {
            for j in 0..2 {
                let src_row = if i < row { i } else { i + 1 };
                let src_col = if j < col { j } else { j + 1 };
                out.rows[i][j] = self.rows[src_row][src_col];
            }
        }
        out
    }
}

/// 4x4 matrix - affine and projective transforms
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Rigid transform from a 3x3 block and a translation
    pub fn from_rotation_translation(rotation: Mat3, translation: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.set_rotation(&rotation);
        m.set_translation(translation);
        m
    }

    /// Embeds a 3x3 matrix with zero translation
    pub fn from_mat3(m: &Mat3) -> Self {
        Self::from_rotation_translation(*m, Vec3::ZERO)
    }

    pub fn from_quat(q: Quat) -> Self {
        Self::from_mat3(&Mat3::from_quat(q))
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::from_rotation_translation(Mat3::IDENTITY, translation)
    }

    /// View matrix looking from `eye` towards `target`
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);

        Self::from_rows([
            [x.x, y.x, z.x, 0.0],
            [x.y, y.y, z.y, 0.0],
            [x.z, y.z, z.z, 0.0],
            [-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0],
        ])
    }

    /// Perspective projection for a view frustum given by the clip
    /// rectangle on the near plane.
    ///
    /// View space looks down `-Z`. Depth `-near` maps to `-1` and `-far`
    /// to `+1` after the divide by `w`.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self::from_rows([
            [2.0 * near / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 * near / height, 0.0, 0.0],
            [(right + left) / width, (top + bottom) / height, -(far + near) / depth, -1.0],
            [0.0, 0.0, -2.0 * far * near / depth, 0.0],
        ])
    }

    /// Symmetric perspective projection.
    ///
    /// `fov_y` is the full vertical field of view in radians and `aspect`
    /// is width over height.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (fov_y * 0.5).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Upper-left 3x3 block
    pub fn rotation(&self) -> Mat3 {
        let mut out = Mat3::ZERO;
        for (dst, src) in out.rows.iter_mut().zip(&self.rows) {
            dst.copy_from_slice(&src[..3]);
        }
        out
    }

    /// Overwrites the upper-left 3x3 block, leaving row 3 and column 3 as they are
    pub fn set_rotation(&mut self, rotation: &Mat3) {
        for (dst, src) in self.rows.iter_mut().zip(&rotation.rows) {
            dst[..3].copy_from_slice(src);
        }
    }

    /// First three cells of row 3
    #[inline]
    pub fn translation(&self) -> Vec3 {
        let [x, y, z, _] = self.rows[3];
        Vec3::new(x, y, z)
    }

    /// Overwrites the first three cells of row 3
    #[inline]
    pub fn set_translation(&mut self, translation: Vec3) {
        self.rows[3][..3].copy_from_slice(&translation.to_array());
    }

    /// Transform a point (w=1), dividing by the resulting w
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = point.extend(1.0) * *self;
        v.truncate() / v.w
    }

    /// Transform a direction (w=0)
    #[inline]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (vector.extend(0.0) * *self).truncate()
    }
}

impl_matrix_common!(Mat2, 2);
impl_matrix_common!(Mat3, 3);
impl_matrix_common!(Mat4, 4);

impl Mul<Mat2> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, m: Mat2) -> Vec2 {
        Vec2::new(
            self.x * m.rows[0][0] + self.y * m.rows[1][0],
            self.x * m.rows[0][1] + self.y * m.rows[1][1],
        )
    }
}

impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, m: Mat3) -> Vec3 {
        m.row(0) * self.x + m.row(1) * self.y + m.row(2) * self.z
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, m: Mat4) -> Vec4 {
        let r = |i: usize| Vec4::from_array(m.rows[i]);
        r(0) * self.x + r(1) * self.y + r(2) * self.z + r(3) * self.w
    }
}
