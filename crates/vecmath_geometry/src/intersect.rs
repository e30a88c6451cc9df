//! Ray intersection queries
//!
//! Every primitive answers two questions about a ray: does it hit, and at
//! which ray parameter `t`. Misses never fail; they report `false` and the
//! [`Tolerances::miss_time`] sentinel so that times from different
//! primitives can be compared directly.
//!
//! Box, triangle, plane and disk tests treat the ray as an infinite line,
//! so `t` may be negative. The sphere test only reports hits with `t >= 0`.

use crate::bounds::{Sphere, AABB};
use crate::planar::{Disk, Plane, Triangle};
use crate::ray::Ray;
use crate::tolerance::Tolerances;

/// A shape that can be hit by a ray
pub trait Intersectable {
    /// Ray parameter of the first intersection, `None` on a miss
    fn intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> Option<f32>;

    fn is_intersecting_with(&self, ray: &Ray, tolerances: &Tolerances) -> bool {
        self.intersect_with(ray, tolerances).is_some()
    }

    /// Ray parameter of the first intersection, or `tolerances.miss_time`
    fn time_to_intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> f32 {
        self.intersect_with(ray, tolerances)
            .unwrap_or(tolerances.miss_time)
    }

    fn is_intersecting(&self, ray: &Ray) -> bool {
        self.is_intersecting_with(ray, &Tolerances::DEFAULT)
    }

    fn time_to_intersect(&self, ray: &Ray) -> f32 {
        self.time_to_intersect_with(ray, &Tolerances::DEFAULT)
    }
}

impl AABB {
    /// Entry and exit parameters of the ray's line through the box (slab method).
    ///
    /// A zero direction component is replaced by
    /// `tolerances.slab_direction_epsilon`, which slightly biases exactly
    /// axis-aligned rays. The box is missed once the running entry exceeds
    /// the running exit by more than `tolerances.slab_overlap_tolerance`.
    /// When the origin is inside the box the entry is pinned to `0`.
    pub fn slab_interval(&self, ray: &Ray, tolerances: &Tolerances) -> Option<(f32, f32)> {
        let inside = self.contains_point(ray.origin);
        let mut t_min = if inside { 0.0 } else { f32::NEG_INFINITY };
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let mut dir = ray.direction[axis];
            if dir == 0.0 {
                dir = tolerances.slab_direction_epsilon;
            }
            let inv = 1.0 / dir;

            let t1 = (self.min[axis] - ray.origin[axis]) * inv;
            let t2 = (self.max[axis] - ray.origin[axis]) * inv;
            let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

            t_max = t_max.min(far);
            if !inside {
                t_min = t_min.max(near);
                if t_min > t_max + tolerances.slab_overlap_tolerance {
                    return None;
                }
            }
        }

        Some((t_min, t_max))
    }
}

impl Intersectable for AABB {
    fn intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> Option<f32> {
        self.slab_interval(ray, tolerances).map(|(t_min, _)| t_min)
    }
}

impl Intersectable for Plane {
    fn intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= tolerances.parallel_epsilon {
            log::trace!("ray is parallel to plane");
            return None;
        }
        Some(self.normal.dot(self.point - ray.origin) / denom)
    }
}

impl Intersectable for Disk {
    fn intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> Option<f32> {
        let t = self.plane().intersect_with(ray, tolerances)?;
        let offset = ray.at(t) - self.center;
        (offset.length_squared() <= self.radius * self.radius).then_some(t)
    }
}

impl Intersectable for Triangle {
    /// Edge sign test: the line passes through the triangle when the ray
    /// direction lies on the same side of all three edge planes spanned with
    /// the origin.
    ///
    /// Lines parallel to the triangle's plane never hit. Parallel means the
    /// cosine between normal and direction is at most
    /// `tolerances.parallel_epsilon`, so the test does not depend on the
    /// triangle's size or the direction's length.
    fn intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> Option<f32> {
        let normal = self.normal();
        let denom = normal.dot(ray.direction);
        let scale = normal.length() * ray.direction.length();
        if denom.abs() <= tolerances.parallel_epsilon * scale {
            log::trace!("ray is parallel to triangle");
            return None;
        }

        let [s1, s2, s3] = self.edges().map(|(start, end)| {
            (end - start).cross(ray.origin - start).dot(ray.direction) > 0.0
        });
        if (s1 ^ s2) || (s2 ^ s3) {
            return None;
        }

        Some(normal.dot(self.vertices()[0] - ray.origin) / denom)
    }
}

impl Intersectable for Sphere {
    /// Solves `|O + tD - C|^2 = r^2` and returns the nearest root with `t >= 0`.
    /// An origin inside the sphere reports the exit point.
    fn intersect_with(&self, ray: &Ray, _tolerances: &Tolerances) -> Option<f32> {
        let to_origin = ray.origin - self.center;
        let a0 = ray.direction.length_squared();
        if a0 == 0.0 {
            log::trace!("sphere test with a zero-length ray direction");
            return None;
        }
        let a1 = ray.direction.dot(to_origin);
        let a2 = to_origin.length_squared() - self.radius * self.radius;

        let disc = a1 * a1 - a0 * a2;
        if disc < 0.0 {
            return None;
        }

        let root = disc.sqrt();
        let t = if -a1 - root >= 0.0 {
            -(a1 + root) / a0
        } else {
            -(a1 - root) / a0
        };

        (t >= 0.0).then_some(t)
    }
}

/// Any of the supported primitives
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// Never hit
    #[default]
    Empty,
    Aabb(AABB),
    Triangle(Triangle),
    Plane(Plane),
    Disk(Disk),
    Sphere(Sphere),
}

impl Intersectable for Geometry {
    fn intersect_with(&self, ray: &Ray, tolerances: &Tolerances) -> Option<f32> {
        match self {
            Geometry::Empty => None,
            Geometry::Aabb(aabb) => aabb.intersect_with(ray, tolerances),
            Geometry::Triangle(triangle) => triangle.intersect_with(ray, tolerances),
            Geometry::Plane(plane) => plane.intersect_with(ray, tolerances),
            Geometry::Disk(disk) => disk.intersect_with(ray, tolerances),
            Geometry::Sphere(sphere) => sphere.intersect_with(ray, tolerances),
        }
    }
}

impl From<AABB> for Geometry {
    fn from(aabb: AABB) -> Self {
        Geometry::Aabb(aabb)
    }
}

impl From<Triangle> for Geometry {
    fn from(triangle: Triangle) -> Self {
        Geometry::Triangle(triangle)
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}

impl From<Disk> for Geometry {
    fn from(disk: Disk) -> Self {
        Geometry::Disk(disk)
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

/// Index and time of the nearest primitive hit at `t >= 0`
pub fn first_hit(ray: &Ray, geometries: &[Geometry]) -> Option<(usize, f32)> {
    first_hit_with(ray, geometries, &Tolerances::DEFAULT)
}

/// [`first_hit`] with explicit tolerances. Linear scan; ties go to the
/// lower index.
pub fn first_hit_with(
    ray: &Ray,
    geometries: &[Geometry],
    tolerances: &Tolerances,
) -> Option<(usize, f32)> {
    geometries
        .iter()
        .enumerate()
        .filter_map(|(index, geometry)| {
            geometry
                .intersect_with(ray, tolerances)
                .filter(|t| *t >= 0.0)
                .map(|t| (index, t))
        })
        .fold(None, |best: Option<(usize, f32)>, hit| match best {
            Some(current) if current.1 <= hit.1 => Some(current),
            _ => Some(hit),
        })
}
