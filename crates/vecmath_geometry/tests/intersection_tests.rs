//! Intersection properties checked across many rays and primitives

use approx::assert_abs_diff_eq;
use vecmath::Vec3;
use vecmath_geometry::prelude::*;
use vecmath_geometry::{first_hit_with, GeometryError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unit directions on a latitude/longitude grid, poles and axes included
fn sample_directions() -> Vec<Vec3> {
    let mut dirs = vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Y, Vec3::NEG_Z];
    for i in 1..8 {
        let theta = std::f32::consts::PI * i as f32 / 8.0;
        for j in 0..12 {
            let phi = std::f32::consts::TAU * j as f32 / 12.0;
            dirs.push(Vec3::new(
                theta.sin() * phi.cos(),
                theta.sin() * phi.sin(),
                theta.cos(),
            ));
        }
    }
    dirs
}

/// Triangles whose in-plane directions dot to exactly zero with the normal
fn sample_triangles() -> Vec<Triangle> {
    vec![
        Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
        Triangle::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 1.0, 3.0)),
        Triangle::new(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(0.0, 3.0, -5.0),
            Vec3::new(0.0, 0.0, -1.0),
        ),
    ]
}

#[test]
fn box_scenario_hits_at_one() {
    let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
    let ray = Ray::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
    assert!(aabb.is_intersecting(&ray));
    assert_abs_diff_eq!(aabb.time_to_intersect(&ray), 1.0, epsilon = 1e-5);
}

#[test]
fn sphere_scenario_hits_at_four() {
    let sphere = Sphere::new(Vec3::ZERO, 1.0);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(sphere.is_intersecting(&ray));
    assert_abs_diff_eq!(sphere.time_to_intersect(&ray), 4.0, epsilon = 1e-4);
}

#[test]
fn origin_inside_box_always_intersects() {
    init_logging();
    let boxes = [
        AABB::new(Vec3::ZERO, Vec3::ONE),
        AABB::new(Vec3::new(-3.0, 2.0, -1.0), Vec3::new(5.0, 2.5, 9.0)),
        AABB::WORLD,
    ];
    for aabb in boxes {
        let origins = [aabb.center(), aabb.min, aabb.max, aabb.min.lerp(aabb.max, 0.25)];
        for origin in origins {
            for dir in sample_directions() {
                let ray = Ray::new(origin, dir);
                assert!(aabb.is_intersecting(&ray), "{:?} from {:?} along {:?}", aabb, origin, dir);
                assert_eq!(aabb.time_to_intersect(&ray), 0.0);
            }
        }
    }
}

#[test]
fn sphere_time_is_distance_minus_radius() {
    let spheres = [
        Sphere::new(Vec3::ZERO, 1.0),
        Sphere::new(Vec3::new(3.0, -2.0, 7.0), 0.5),
        Sphere::new(Vec3::new(-10.0, 4.0, 1.0), 4.0),
    ];
    for sphere in spheres {
        for dir in sample_directions() {
            let origin = sphere.center - dir * (sphere.radius + 6.0);
            let ray = Ray::from_points(origin, sphere.center);
            let expected = origin.distance(sphere.center) - sphere.radius;
            assert!(sphere.is_intersecting(&ray));
            assert_abs_diff_eq!(sphere.time_to_intersect(&ray), expected, epsilon = 1e-4);
        }
    }
}

#[test]
fn ray_parallel_to_plane_misses() {
    let tolerances = Tolerances::default();
    let plane = Plane::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 2.0));
    for dir in [Vec3::X, Vec3::Y, Vec3::new(0.6, -0.8, 0.0)] {
        for origin in [Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), Vec3::splat(-4.0)] {
            let ray = Ray::new(origin, dir);
            assert!(!plane.is_intersecting(&ray));
            assert_eq!(plane.time_to_intersect(&ray), tolerances.miss_time);
        }
    }
}

#[test]
fn ray_through_centroid_along_normal_hits_triangle() {
    let mut triangles = sample_triangles();
    triangles.push(Triangle::new(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 0.0, 1.0),
        Vec3::new(-2.0, 1.0, 0.5),
    ));
    for tri in triangles {
        let normal = tri.normal().normalize();
        for side in [-1.0, 1.0] {
            let origin = tri.centroid() - normal * (3.0 * side);
            let ray = Ray::new(origin, normal * side);
            assert!(tri.is_intersecting(&ray), "{:?} side {}", tri, side);
            assert_abs_diff_eq!(tri.time_to_intersect(&ray), 3.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn triangle_hits_do_not_depend_on_triangle_size() {
    init_logging();
    for size in [5e-4, 1e-2, 1.0, 250.0] {
        let tri = Triangle::new(Vec3::ZERO, Vec3::new(size, 0.0, 0.0), Vec3::new(0.0, size, 0.0));
        let normal = tri.normal().normalize();
        let ray = Ray::new(tri.centroid() - normal * 5.0, normal);
        assert!(tri.is_intersecting(&ray), "size {}", size);
        assert_abs_diff_eq!(tri.time_to_intersect(&ray), 5.0, epsilon = 1e-4);
    }
}

#[test]
fn ray_in_triangle_plane_never_hits() {
    init_logging();
    for tri in sample_triangles() {
        let [p1, p2, p3] = tri.vertices();
        // Start outside the triangle, beyond p1, and sweep in-plane directions
        let origin = p1 + (p1 - tri.centroid()) * 2.0;
        for dir in [p2 - p1, p3 - p1, tri.centroid() - origin, p3 - p2] {
            let ray = Ray::new(origin, dir.normalize());
            assert!(!tri.is_intersecting(&ray), "{:?} along {:?}", tri, dir);
            assert_eq!(tri.time_to_intersect(&ray), Tolerances::DEFAULT.miss_time);
        }
    }
}

#[test]
fn disk_hits_inside_radius_only() {
    let disk = Disk::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y, 1.5);
    for dir in sample_directions() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), dir);
        let hits = disk.is_intersecting(&ray);
        if dir.y.abs() <= 1e-6 {
            assert!(!hits);
            continue;
        }
        let point = ray.at(3.0 / -dir.y);
        let inside = (point - disk.center).length_squared() <= disk.radius * disk.radius;
        assert_eq!(hits, inside, "direction {:?}", dir);
    }
}

#[test]
fn tagged_geometry_matches_concrete_primitives() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, -8.0), 2.0);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -4.0), Vec3::new(1.0, 1.0, -3.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

    assert_eq!(Geometry::from(sphere).time_to_intersect(&ray), sphere.time_to_intersect(&ray));
    assert_eq!(Geometry::from(aabb).is_intersecting(&ray), aabb.is_intersecting(&ray));

    let scene = [Geometry::from(sphere), Geometry::from(aabb)];
    let (index, t) = first_hit(&ray, &scene).expect("both primitives are ahead of the ray");
    assert_eq!(index, 1);
    assert_abs_diff_eq!(t, 3.0, epsilon = 1e-5);
}

#[test]
fn custom_tolerances_change_sentinel_and_parallel_threshold() {
    let tolerances = Tolerances::default()
        .with_miss_time(f32::INFINITY)
        .with_parallel_epsilon(0.1);
    let plane = Plane::new(Vec3::ZERO, Vec3::Y);
    let grazing = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -0.05, 0.0).normalize());

    assert!(plane.is_intersecting(&grazing));
    assert!(!plane.is_intersecting_with(&grazing, &tolerances));
    assert_eq!(plane.time_to_intersect_with(&grazing, &tolerances), f32::INFINITY);
    assert_eq!(first_hit_with(&grazing, &[Geometry::from(plane)], &tolerances), None);
}

#[test]
fn infinite_sentinel_fails_validation() {
    let err = Tolerances::default().with_miss_time(f32::INFINITY).validate();
    assert_eq!(
        err,
        Err(GeometryError::InvalidTolerance { name: "miss_time", value: f32::INFINITY })
    );
}

#[cfg(feature = "serde")]
#[test]
fn geometry_round_trips_through_bincode() {
    let scene = vec![
        Geometry::from(Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)),
        Geometry::from(Disk::new(Vec3::ONE, Vec3::Z, 2.0)),
        Geometry::Empty,
    ];
    let bytes = bincode::serialize(&scene).expect("serialize");
    let back: Vec<Geometry> = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(scene, back);

    let tolerances = Tolerances::strict();
    let bytes = bincode::serialize(&tolerances).expect("serialize");
    let back: Tolerances = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(tolerances, back);
}
