//! Bounding volumes: axis-aligned box and sphere

use vecmath::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    /// A box large enough to hold any scene
    pub const WORLD: Self = Self {
        min: Vec3::new(-1e10, -1e10, -1e10),
        max: Vec3::new(1e10, 1e10, 1e10),
    };

    /// Create from two opposite corners, in any order
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if a point is inside (boundary included)
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.contains(self.min, self.max)
    }

    /// Get the closest point on the AABB to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }
}

/// Sphere
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    #[inline]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Bounding sphere of an AABB
    pub fn from_aabb(aabb: &AABB) -> Self {
        Self::new(aabb.center(), aabb.half_extents().length())
    }

    /// Check if a point is inside (surface included)
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }
}
