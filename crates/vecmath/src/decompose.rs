//! Matrix inversion and eigenvalue extraction
//!
//! Inverting a singular matrix is a precondition violation and is reported
//! as an error instead of a matrix full of infinities.

use crate::equation::{solve_cubic, Roots};
use crate::error::{MathError, Result};
use crate::matrix::{Mat2, Mat3, Mat4};

impl Mat2 {
    /// Analytic inverse
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("Mat2 inverse failed: determinant is zero");
            return Err(MathError::SingularMatrix { det });
        }

        let [[a, b], [c, d]] = self.rows;
        Ok(Self::new(d, -b, -c, a) * (1.0 / det))
    }
}

impl Mat3 {
    /// Inverse via the adjugate (transposed cofactor matrix) scaled by `1/det`
    pub fn inverse(&self) -> Result<Self> {
        let m = &self.rows;
        let adj = Self::from_rows([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ]);

        // Expansion along row 0, reusing the first adjugate column
        let det = m[0][0] * adj.rows[0][0] + m[0][1] * adj.rows[1][0] + m[0][2] * adj.rows[2][0];
        if det == 0.0 {
            log::debug!("Mat3 inverse failed: determinant is zero");
            return Err(MathError::SingularMatrix { det });
        }

        Ok(adj * (1.0 / det))
    }

    /// Real roots of the characteristic polynomial
    /// `t^3 - trace*t^2 + (sum of principal 2x2 minors)*t - det`.
    ///
    /// The polynomial is built in `f64` from `A - mI`, where `m` is the mean
    /// of the diagonal, so repeated eigenvalues are not split by rounding in
    /// the large trace term. `m` is added back to every root.
    ///
    /// Three real eigenvalues are only guaranteed for symmetric (or more
    /// generally normal) matrices; other inputs may yield a single root.
    /// Values come back in ascending order, repeated once per multiplicity.
    pub fn eigenvalues(&self) -> Roots<f32> {
        let mut b = [[0.0f64; 3]; 3];
        for (dst, src) in b.iter_mut().zip(&self.rows) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = f64::from(*s);
            }
        }

        let mean = (b[0][0] + b[1][1] + b[2][2]) / 3.0;
        for (i, row) in b.iter_mut().enumerate() {
            row[i] -= mean;
        }

        let a2 = -(b[0][0] + b[1][1] + b[2][2]);
        let a1 = (b[1][1] * b[2][2] - b[1][2] * b[2][1])
            + (b[0][0] * b[2][2] - b[0][2] * b[2][0])
            + (b[0][0] * b[1][1] - b[0][1] * b[1][0]);
        let det = b[0][0] * (b[1][1] * b[2][2] - b[1][2] * b[2][1])
            - b[0][1] * (b[1][0] * b[2][2] - b[1][2] * b[2][0])
            + b[0][2] * (b[1][0] * b[2][1] - b[1][1] * b[2][0]);

        solve_cubic(1.0, a2, a1, -det)
            .iter()
            .map(|t| (t + mean) as f32)
            .collect()
    }
}

impl Mat4 {
    /// General inverse by Gauss-Jordan elimination against the identity.
    ///
    /// No pivoting is performed: each diagonal element is used as the pivot
    /// in turn, so a matrix with a zero on the diagonal at elimination time
    /// fails with [`MathError::ZeroPivot`] even if it is invertible.
    pub fn inverse(&self) -> Result<Self> {
        let mut a = self.rows;
        let mut inv = Self::IDENTITY.rows;

        for i in 0..4 {
            let pivot = a[i][i];
            if pivot == 0.0 {
                log::debug!("Mat4 inverse failed: zero pivot at row {}", i);
                return Err(MathError::ZeroPivot { row: i });
            }

            let scale = 1.0 / pivot;
            for k in 0..4 {
                a[i][k] *= scale;
                inv[i][k] *= scale;
            }

            for j in 0..4 {
                if j == i {
                    continue;
                }
                let factor = a[j][i];
                for k in 0..4 {
                    a[j][k] -= a[i][k] * factor;
                    inv[j][k] -= inv[i][k] * factor;
                }
            }
        }

        Ok(Self::from_rows(inv))
    }

    /// Inverse of a rigid transform (rotation + translation only).
    ///
    /// The rotation block is transposed and the translation becomes
    /// `-t * R^T`. The result is silently wrong if the 3x3 block is not
    /// orthonormal or if column 3 is not `(0, 0, 0, 1)`.
    pub fn inverse_orthonormal(&self) -> Self {
        let inv_rotation = self.rotation().transpose();
        let inv_translation = -self.translation() * inv_rotation;
        Self::from_rotation_translation(inv_rotation, inv_translation)
    }
}
