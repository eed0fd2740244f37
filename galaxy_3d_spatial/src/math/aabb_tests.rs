use glam::{Mat4, Vec3};
use super::*;

fn make_aabb(min: Vec3, max: Vec3) -> AABB {
    AABB { min, max }
}

// ============================================================================
// Containment / intersection
// ============================================================================

#[test]
fn test_aabb_contains() {
    let big = make_aabb(Vec3::splat(-10.0), Vec3::splat(10.0));
    let small = make_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
    let straddling = make_aabb(Vec3::new(5.0, 5.0, 5.0), Vec3::new(15.0, 15.0, 15.0));

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
    // Closed interval: a box contains itself
    assert!(big.contains(&big));
}

#[test]
fn test_aabb_intersects() {
    let a = make_aabb(Vec3::splat(-2.0), Vec3::splat(2.0));
    let b = make_aabb(Vec3::splat(1.0), Vec3::splat(3.0));
    let c = make_aabb(Vec3::splat(5.0), Vec3::splat(7.0));
    let touching = make_aabb(Vec3::new(2.0, -1.0, -1.0), Vec3::new(4.0, 1.0, 1.0));

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.intersects(&touching));
}

#[test]
fn test_aabb_contains_point_is_closed() {
    let aabb = make_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
    assert!(aabb.contains_point(Vec3::ZERO));
    assert!(aabb.contains_point(Vec3::splat(1.0)));
    assert!(aabb.contains_point(Vec3::new(-1.0, 0.5, 1.0)));
    assert!(!aabb.contains_point(Vec3::new(1.0001, 0.0, 0.0)));
}

// ============================================================================
// Validity / accessors
// ============================================================================

#[test]
fn test_aabb_is_valid() {
    assert!(make_aabb(Vec3::ZERO, Vec3::ONE).is_valid());
    assert!(make_aabb(Vec3::ONE, Vec3::ONE).is_valid());
    assert!(!make_aabb(Vec3::ONE, Vec3::ZERO).is_valid());
    assert!(!make_aabb(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE).is_valid());
    assert!(!make_aabb(Vec3::ZERO, Vec3::splat(f32::INFINITY)).is_valid());
}

#[test]
fn test_aabb_center_and_extents() {
    let aabb = AABB::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(2.0));
    assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.half_extents(), Vec3::splat(2.0));
    assert_eq!(aabb.size(), Vec3::splat(4.0));
}

// ============================================================================
// Transform / octants
// ============================================================================

#[test]
fn test_aabb_transformed_translation() {
    let aabb = make_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
    let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, -2.0)));
    assert_eq!(moved.min, Vec3::new(4.0, -1.0, -3.0));
    assert_eq!(moved.max, Vec3::new(6.0, 1.0, -1.0));
}

#[test]
fn test_aabb_transformed_rotation_grows_box() {
    let aabb = make_aabb(Vec3::new(-2.0, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
    let rotated = aabb.transformed(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));
    assert!((rotated.min.x - -1.0).abs() < 1e-5);
    assert!((rotated.max.y - 2.0).abs() < 1e-5);
}

#[test]
fn test_octants_partition_parent() {
    let parent = make_aabb(Vec3::splat(-10.0), Vec3::splat(10.0));
    let center = parent.center();

    assert_eq!(parent.octant(center, 0), make_aabb(Vec3::splat(-10.0), Vec3::ZERO));
    assert_eq!(parent.octant(center, 7), make_aabb(Vec3::ZERO, Vec3::splat(10.0)));
    // bit0 = X
    assert_eq!(
        parent.octant(center, 1),
        make_aabb(Vec3::new(0.0, -10.0, -10.0), Vec3::new(10.0, 0.0, 0.0)),
    );
    // bit2 = Z
    assert_eq!(
        parent.octant(center, 4),
        make_aabb(Vec3::new(-10.0, -10.0, 0.0), Vec3::new(0.0, 0.0, 10.0)),
    );

    for octant in 0..8 {
        assert!(parent.contains(&parent.octant(center, octant)));
    }
}
