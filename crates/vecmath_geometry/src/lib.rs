//! # vecmath_geometry - Ray Intersection Queries
//!
//! Analytic primitives (box, triangle, plane, disk, sphere) answering
//! "does this ray hit" and "at which ray parameter". A tagged [`Geometry`]
//! value dispatches over all of them.
//!
//! ## Example
//!
//! ```
//! use vecmath::Vec3;
//! use vecmath_geometry::prelude::*;
//!
//! let sphere = Sphere::new(Vec3::ZERO, 1.0);
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
//! assert!(sphere.is_intersecting(&ray));
//! assert!((sphere.time_to_intersect(&ray) - 4.0).abs() < 1e-5);
//! ```

pub mod bounds;
pub mod error;
pub mod intersect;
pub mod planar;
pub mod ray;
pub mod tolerance;

pub use bounds::{Sphere, AABB};
pub use error::{GeometryError, Result};
pub use intersect::{first_hit, first_hit_with, Geometry, Intersectable};
pub use planar::{Disk, Plane, Triangle};
pub use ray::Ray;
pub use tolerance::Tolerances;

pub mod prelude {
    pub use crate::bounds::{Sphere, AABB};
    pub use crate::intersect::{first_hit, Geometry, Intersectable};
    pub use crate::planar::{Disk, Plane, Triangle};
    pub use crate::ray::Ray;
    pub use crate::tolerance::Tolerances;
}
