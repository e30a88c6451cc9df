//! Real roots of low-degree polynomial equations
//!
//! Coefficients are given highest degree first. All arithmetic is done in
//! `f64`; callers working in `f32` narrow the result with [`Roots::to_f32`].

use core::f64::consts::PI;

/// Relative tolerance used to classify the discriminant
const DISCRIMINANT_EPSILON: f64 = 1e-12;

/// Up to three real roots, stored inline.
///
/// Repeated roots are listed once per multiplicity, except when the
/// equation degenerates to a lower degree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Roots<T> {
    values: [T; 3],
    len: usize,
}

impl<T: Copy + Default> Roots<T> {
    pub fn new() -> Self {
        Self { values: [T::default(); 3], len: 0 }
    }

    fn push(&mut self, value: T) {
        self.values[self.len] = value;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().iter().copied()
    }
}

impl<T: Copy + Default> FromIterator<T> for Roots<T> {
    /// Collects at most three values; extra items are ignored.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut roots = Self::new();
        for value in iter.into_iter().take(3) {
            roots.push(value);
        }
        roots
    }
}

impl Roots<f64> {
    pub fn to_f32(&self) -> Roots<f32> {
        self.iter().map(|v| v as f32).collect()
    }
}

/// Real roots of `a*x + b = 0`
pub fn solve_linear(a: f64, b: f64) -> Roots<f64> {
    if a == 0.0 {
        log::trace!("linear equation has no unknown term");
        return Roots::new();
    }
    [-b / a].into_iter().collect()
}

/// Real roots of `a*x^2 + b*x + c = 0`, smaller root first
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots<f64> {
    if a == 0.0 {
        log::trace!("quadratic degenerates to a linear equation");
        return solve_linear(b, c);
    }

    let disc = b * b - 4.0 * a * c;
    let scale = (b * b).max((4.0 * a * c).abs()).max(1.0);
    if disc.abs() <= DISCRIMINANT_EPSILON * scale {
        let root = -b / (2.0 * a);
        return [root, root].into_iter().collect();
    }
    if disc < 0.0 {
        return Roots::new();
    }

    // Avoid cancellation between -b and the square root
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let (r1, r2) = if q == 0.0 { (0.0, 0.0) } else { (q / a, c / q) };
    [r1.min(r2), r1.max(r2)].into_iter().collect()
}

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0`, in ascending order.
///
/// Uses the trigonometric form when all three roots are real and Cardano's
/// formula otherwise.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots<f64> {
    if a == 0.0 {
        log::trace!("cubic degenerates to a quadratic equation");
        return solve_quadratic(b, c, d);
    }

    let b = b / a;
    let c = c / a;
    let d = d / a;

    // Depressed cubic t^3 + p*t + q = 0 with x = t - b/3
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;

    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let disc = half_q * half_q + third_p * third_p * third_p;
    let scale = (half_q * half_q).max(third_p.abs().powi(3)).max(f64::MIN_POSITIVE);

    // Rough root magnitude, for telling a triple root from rounding noise
    let mag = b.abs().max(c.abs().sqrt()).max(d.abs().cbrt());
    let triple = p.abs() <= DISCRIMINANT_EPSILON * mag * mag
        && q.abs() <= DISCRIMINANT_EPSILON * mag * mag * mag;

    let mut roots: [f64; 3];
    let count;

    if triple || disc.abs() <= DISCRIMINANT_EPSILON * scale {
        // Repeated root
        let u = (-half_q).cbrt();
        roots = [2.0 * u - shift, -u - shift, -u - shift];
        count = 3;
    } else if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        let u = (-half_q + sqrt_disc).cbrt();
        let v = (-half_q - sqrt_disc).cbrt();
        roots = [u + v - shift, 0.0, 0.0];
        count = 1;
    } else {
        let r = 2.0 * (-third_p).sqrt();
        let cos_arg = (3.0 * q / (p * r)).clamp(-1.0, 1.0);
        let phi = cos_arg.acos() / 3.0;
        roots = [
            r * phi.cos() - shift,
            r * (phi - 2.0 * PI / 3.0).cos() - shift,
            r * (phi - 4.0 * PI / 3.0).cos() - shift,
        ];
        count = 3;
    }

    roots[..count].sort_by(|x, y| x.total_cmp(y));
    roots[..count].iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roots(actual: Roots<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "roots: {:?}", actual.as_slice());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "got {:?}, expected {:?}", actual.as_slice(), expected);
        }
    }

    #[test]
    fn test_quadratic() {
        assert_roots(solve_quadratic(1.0, -3.0, 2.0), &[1.0, 2.0]);
        assert_roots(solve_quadratic(1.0, 0.0, 1.0), &[]);
        assert_roots(solve_quadratic(1.0, -2.0, 1.0), &[1.0, 1.0]);
        assert_roots(solve_quadratic(0.0, 2.0, -4.0), &[2.0]);
    }

    #[test]
    fn test_cubic_three_distinct() {
        // (x - 1)(x - 2)(x - 3)
        assert_roots(solve_cubic(1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_cubic_single_real() {
        // (x - 2)(x^2 + 1)
        assert_roots(solve_cubic(1.0, -2.0, 1.0, -2.0), &[2.0]);
    }

    #[test]
    fn test_cubic_double_root() {
        // (x - 2)^2 (x - 5)
        assert_roots(solve_cubic(1.0, -9.0, 24.0, -20.0), &[2.0, 2.0, 5.0]);
    }

    #[test]
    fn test_cubic_triple_root() {
        assert_roots(solve_cubic(2.0, -6.0, 6.0, -2.0), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cubic_triple_root_with_rounding_noise() {
        // (x - 0.1)^3, none of whose coefficients are exact in binary
        let r = 0.1;
        let roots = solve_cubic(1.0, -3.0 * r, 3.0 * r * r, -r * r * r);
        assert_eq!(roots.len(), 3);
        for root in roots.iter() {
            assert!((root - r).abs() < 1e-4, "{:?}", roots.as_slice());
        }
    }

    #[test]
    fn test_cubic_leading_zero_falls_back() {
        assert_roots(solve_cubic(0.0, 1.0, -3.0, 2.0), &[1.0, 2.0]);
    }
}
