//! Flat primitives: plane, disk and triangle

use vecmath::Vec3;

/// Infinite plane through `point` with the given normal
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    #[inline]
    pub const fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Signed distance from a point, in units of the normal's length
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.point)
    }
}

/// Flat disk: the part of a plane within `radius` of `center`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disk {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
}

impl Disk {
    #[inline]
    pub const fn new(center: Vec3, normal: Vec3, radius: f32) -> Self {
        Self { center, normal, radius }
    }

    /// The plane the disk lies in
    #[inline]
    pub fn plane(&self) -> Plane {
        Plane::new(self.center, self.normal)
    }
}

/// Triangle with a face normal derived at construction
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    vertices: [Vec3; 3],
    normal: Vec3,
}

impl Triangle {
    /// Create from three vertices.
    ///
    /// The normal is `(p3 - p1) x (p2 - p1)` and is left unnormalized.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            vertices: [p1, p2, p3],
            normal: (p3 - p1).cross(p2 - p1),
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn centroid(&self) -> Vec3 {
        let [p1, p2, p3] = self.vertices;
        (p1 + p2 + p3) / 3.0
    }

    /// Edges as `(start, end)` pairs: p1->p2, p2->p3, p3->p1
    pub fn edges(&self) -> [(Vec3, Vec3); 3] {
        let [p1, p2, p3] = self.vertices;
        [(p1, p2), (p2, p3), (p3, p1)]
    }

    /// The plane the triangle lies in
    #[inline]
    pub fn plane(&self) -> Plane {
        Plane::new(self.vertices[0], self.normal)
    }

    /// True when the vertices are collinear (zero-area triangle)
    pub fn is_degenerate(&self) -> bool {
        self.normal.length_squared() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal_orientation() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        // (Y - 0) x (X - 0) = -Z
        assert_eq!(tri.normal(), Vec3::NEG_Z);
        assert!(!tri.is_degenerate());
    }

    #[test]
    fn test_triangle_centroid_and_edges() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(tri.centroid(), Vec3::new(1.0, 1.0, 0.0));
        let edges = tri.edges();
        assert_eq!(edges[2], (Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO));
    }

    #[test]
    fn test_collinear_triangle_is_degenerate() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
        assert!(tri.is_degenerate());
    }

    #[test]
    fn test_plane_signed_distance() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert_eq!(plane.signed_distance(Vec3::new(4.0, 3.0, -2.0)), 2.0);
        assert_eq!(plane.signed_distance(Vec3::ZERO), -1.0);
    }

    #[test]
    fn test_disk_plane() {
        let disk = Disk::new(Vec3::ONE, Vec3::Z, 0.5);
        assert_eq!(disk.plane(), Plane::new(Vec3::ONE, Vec3::Z));
    }
}
