//! 3D ray for intersection queries

use vecmath::{Mat4, Vec3};

/// Ray `origin + t * direction`.
///
/// Box, triangle, plane and disk queries treat it as an infinite line and
/// may report negative `t`. Sphere queries only look forward (`t >= 0`).
/// The direction is stored as given and never normalized, so every `t`
/// is measured in units of the direction's length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction
    pub direction: Vec3,
}

impl Ray {
    /// Ray along the positive Z axis from the origin
    pub const Z_AXIS: Self = Self {
        origin: Vec3::ZERO,
        direction: Vec3::Z,
    };

    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray with its direction normalized
    #[inline]
    pub fn normalized(origin: Vec3, direction: Vec3) -> Self {
        if direction.length_squared() == 0.0 {
            log::trace!("ray built from a zero direction");
        }
        Self::new(origin, direction.normalize())
    }

    /// Ray from `start` through `end`, with a unit direction
    #[inline]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::normalized(start, end - start)
    }

    /// Point at parameter `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Transform the ray by a matrix.
    ///
    /// The origin is transformed as a point, the direction as a vector. The
    /// direction is not renormalized.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_point(self.origin),
            matrix.transform_vector(self.direction),
        )
    }

    /// Check if the ray direction is valid (non-zero length)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.direction.length_squared() > 1e-10
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::Z_AXIS
    }
}
