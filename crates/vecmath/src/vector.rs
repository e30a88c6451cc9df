//! Vector types

use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Implements the componentwise arithmetic operators for a vector type.
macro_rules! impl_vector_ops {
    ($t:ident { $($f:ident),+ }) => {
        impl Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl Mul<$t> for f32 {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl Div<f32> for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl $t {
            #[inline]
            pub fn splat(v: f32) -> Self {
                Self { $($f: v),+ }
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Unit vector in the same direction, or zero for a zero-length input
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len > 0.0 { self / len } else { Self::ZERO }
            }

            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }

            /// Componentwise product
            #[inline]
            pub fn mul_elem(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }

            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($f: self.$f.min(other.$f)),+ }
            }

            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($f: self.$f.max(other.$f)),+ }
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: self.$f.abs()),+ }
            }

            /// Raise every component to `exponent`
            #[inline]
            pub fn powf(self, exponent: f32) -> Self {
                Self { $($f: self.$f.powf(exponent)),+ }
            }

            /// Clamp every component into `[min, max]`
            #[inline]
            pub fn clamp_scalar(self, min: f32, max: f32) -> Self {
                Self { $($f: crate::clamp(self.$f, min, max)),+ }
            }

            /// Clamp componentwise between two bounding vectors
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $($f: crate::clamp(self.$f, min.$f, max.$f)),+ }
            }

            /// True when `min <= self <= max` holds for every component
            #[inline]
            pub fn contains(self, min: Self, max: Self) -> bool {
                true $(&& min.$f <= self.$f && self.$f <= max.$f)+
            }

            #[inline]
            pub fn is_nan(self) -> bool {
                false $(|| self.$f.is_nan())+
            }

            /// Componentwise comparison with an absolute tolerance
            #[inline]
            pub fn abs_diff_eq(self, other: Self, epsilon: f32) -> bool {
                true $(&& (self.$f - other.$f).abs() <= epsilon)+
            }
        }
    };
}

/// Implements bounds-checked component indexing.
macro_rules! impl_vector_index {
    ($t:ident, $n:literal { $($i:literal => $f:ident),+ }) => {
        impl $t {
            /// Component by index, `None` when out of range
            #[inline]
            pub fn get(&self, index: usize) -> Option<f32> {
                match index {
                    $($i => Some(self.$f),)+
                    _ => None,
                }
            }

            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
                match index {
                    $($i => Some(&mut self.$f),)+
                    _ => None,
                }
            }

            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$(self.$f),+]
            }

            #[inline]
            pub fn from_array(a: [f32; $n]) -> Self {
                Self { $($f: a[$i]),+ }
            }
        }

        impl Index<usize> for $t {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                match index {
                    $($i => &self.$f,)+
                    _ => panic!("{} component index out of range: {}", stringify!($t), index),
                }
            }
        }

        impl IndexMut<usize> for $t {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                match index {
                    $($i => &mut self.$f,)+
                    _ => panic!("{} component index out of range: {}", stringify!($t), index),
                }
            }
        }
    };
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Spherical interpolation between two unit vectors.
    ///
    /// Falls back to linear interpolation when the inputs are nearly parallel.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let dot = crate::clamp(self.dot(other), -1.0, 1.0);
        if 1.0 - dot <= crate::consts::EPSILON {
            return self.lerp(other, t);
        }

        let angle = dot.acos();
        let sin = angle.sin();
        let s1 = ((1.0 - t) * angle).sin() / sin;
        let s2 = (t * angle).sin() / sin;
        self * s1 + other * s2
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

/// 4D vector - homogeneous coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Drops the `w` component
    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });
impl_vector_ops!(Vec4 { x, y, z, w });

impl_vector_index!(Vec2, 2 { 0 => x, 1 => y });
impl_vector_index!(Vec3, 3 { 0 => x, 1 => y, 2 => z });
impl_vector_index!(Vec4, 4 { 0 => x, 1 => y, 2 => z, 3 => w });

/// 3D integer vector, for grid cells and voxel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IVec3 {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1);
    pub const X: Self = Self::new(1, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0);
    pub const Z: Self = Self::new(0, 0, 1);
    pub const UNITS: [Self; 3] = [Self::X, Self::Y, Self::Z];

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }

    #[inline]
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(a: [i32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    pub fn mul_elem(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    #[inline]
    pub fn length_squared(self) -> i32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.as_vec3().length()
    }

    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        other.all_lt(self)
    }

    #[inline]
    pub fn all_ge(self, other: Self) -> bool {
        other.all_le(self)
    }
}

impl Add for IVec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for IVec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for IVec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for IVec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<IVec3> for i32 {
    type Output = IVec3;

    #[inline]
    fn mul(self, rhs: IVec3) -> IVec3 {
        rhs * self
    }
}

impl AddAssign for IVec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for IVec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Index<usize> for IVec3 {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("IVec3 component index out of range: {}", index),
        }
    }
}

impl IndexMut<usize> for IVec3 {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("IVec3 component index out of range: {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cross() {
        let z = Vec3::X.cross(Vec3::Y);
        assert!((z - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_stays_finite() {
        let n = Vec3::ZERO.normalize();
        assert!(!n.is_nan());
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn test_index_and_get() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[0] = 9.0;
        assert_eq!(v.x, 9.0);
        assert_eq!(v.get(4), None);
        if let Some(y) = v.get_mut(1) {
            *y = 7.0;
        }
        assert_eq!(v.y, 7.0);
        assert!(v.get_mut(9).is_none());
        assert_eq!(Vec2::new(5.0, 6.0).get(1), Some(6.0));
    }

    #[test]
    #[should_panic(expected = "Vec3 component index out of range: 3")]
    fn test_index_out_of_range_panics() {
        let v = Vec3::ONE;
        let _ = v[3];
    }

    #[test]
    fn test_clamp_and_within() {
        let v = Vec3::new(-2.0, 0.5, 7.0);
        assert_eq!(v.clamp_scalar(0.0, 1.0), Vec3::new(0.0, 0.5, 1.0));
        assert!(Vec3::splat(0.5).contains(Vec3::ZERO, Vec3::ONE));
        assert!(!v.contains(Vec3::ZERO, Vec3::ONE));
    }

    #[test]
    fn test_is_nan_detects_any_component() {
        assert!(Vec2::new(0.0, f32::NAN).is_nan());
        assert!(!Vec4::ONE.is_nan());
    }

    #[test]
    fn test_powf_is_componentwise() {
        let v = Vec3::new(4.0, 9.0, 0.25).powf(0.5);
        assert!(v.abs_diff_eq(Vec3::new(2.0, 3.0, 0.5), 1e-6));
        assert_eq!(Vec2::new(2.0, 3.0).powf(2.0), Vec2::new(4.0, 9.0));
    }

    #[test]
    fn test_ivec3_arithmetic() {
        let a = IVec3::new(1, -2, 3);
        let b = IVec3::new(4, 5, -6);
        assert_eq!(a + b, IVec3::new(5, 3, -3));
        assert_eq!(a - b, IVec3::new(-3, -7, 9));
        assert_eq!(2 * a, a * 2);
        assert_eq!(a.mul_elem(b), IVec3::new(4, -10, -18));
        assert_eq!(IVec3::new(2, 3, 6).length_squared(), 49);
        assert_eq!(IVec3::new(2, 3, 6).length(), 7.0);
        assert_eq!(a.as_vec3(), Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(IVec3::UNITS.iter().fold(IVec3::ZERO, |acc, &u| acc + u), IVec3::ONE);
    }

    #[test]
    fn test_ivec3_comparisons_and_index() {
        let mut v = IVec3::from_array([0, 1, 2]);
        assert!(IVec3::ZERO.all_le(v));
        assert!(!IVec3::ZERO.all_lt(v));
        assert!(IVec3::new(3, 3, 3).all_gt(v));
        assert!(v.all_ge(IVec3::ZERO));
        v[2] = 8;
        assert_eq!(v.to_array(), [0, 1, 8]);
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic(expected = "IVec3 component index out of range: 5")]
    fn test_ivec3_index_out_of_range_panics() {
        let _ = IVec3::ONE[5];
    }

    #[test]
    fn test_slerp_halfway() {
        let mid = Vec3::X.slerp(Vec3::Y, 0.5);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!(mid.abs_diff_eq(expected, 1e-5));
    }
}
